/// Configuration for the GPUI graph window view.
#[derive(Debug, Clone)]
pub struct GraphWindowConfig {
    /// Border around the graph surface, in pixels.
    pub border_px: f32,
}

impl Default for GraphWindowConfig {
    fn default() -> Self {
        Self { border_px: 8.0 }
    }
}
