//! Drag interaction state.
//!
//! The controller recomputes a "potential" drag mode on every pointer
//! motion, even with no button held, so the cursor can signal draggable
//! regions before a drag begins. A press commits the potential mode; a
//! release always returns to [`DragMode::None`].

use crate::geom::SurfacePoint;

/// The kind of click-and-drag interaction the pointer is engaged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// No drag in progress or available.
    #[default]
    None,
    /// Dragging the vertical scale of the graph.
    Scale,
    /// Dragging an existing guide bar.
    GuideBar,
    /// Dragging a new guide bar out of the scale legend.
    NewGuideBar,
    /// Dragging a sizing divider.
    Sizing,
}

/// Pointer drag bookkeeping for a graph window.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    /// The committed drag mode, `None` outside an active drag.
    pub mode: DragMode,
    /// The mode a press at the current pointer position would commit.
    pub potential: DragMode,
    /// Pointer position recorded when the active drag began.
    pub anchor: SurfacePoint,
    /// Vertical-scale value recorded when a scale drag began.
    pub scale_anchor: f32,
}

impl DragState {
    /// Check whether a drag is currently active.
    pub fn is_dragging(&self) -> bool {
        self.mode != DragMode::None
    }

    /// Whether the window should show the grab cursor.
    ///
    /// True while a guide bar is hovered or actively dragged.
    pub fn wants_hand_cursor(&self) -> bool {
        self.potential == DragMode::GuideBar || self.mode == DragMode::GuideBar
    }
}
