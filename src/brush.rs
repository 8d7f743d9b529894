//! Solid-color brushes and the per-collector brush cache.

use std::collections::HashMap;
use std::rc::Rc;

use crate::monitor::CollectorId;
use crate::palette::Color;

/// A reusable solid-color drawing context.
///
/// Brushes are bound to the backing bitmap they were created against; the
/// cache holding them is cleared whenever the bitmap is recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    /// The brush's fill color in fixed point.
    pub color: Color,
}

impl Brush {
    /// Create a brush with the given color.
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

/// Lazily populated mapping from collector id to its brush.
///
/// One brush per collector, created on first use and shared by reference
/// afterwards. The cache lives as long as the graph window but is emptied
/// on every bitmap recreation.
#[derive(Debug, Default)]
pub struct BrushCache {
    brushes: HashMap<CollectorId, Rc<Brush>>,
}

impl BrushCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached brush for a collector.
    pub fn get(&self, collector: CollectorId) -> Option<Rc<Brush>> {
        self.brushes.get(&collector).cloned()
    }

    /// Return the cached brush, creating it from `color` on a miss.
    ///
    /// The color callback runs only when the collector has no brush yet.
    pub fn get_or_insert_with(
        &mut self,
        collector: CollectorId,
        color: impl FnOnce() -> Color,
    ) -> Rc<Brush> {
        self.brushes
            .entry(collector)
            .or_insert_with(|| Rc::new(Brush::new(color())))
            .clone()
    }

    /// Drop every cached brush.
    pub fn clear(&mut self) {
        self.brushes.clear();
    }

    /// Number of cached brushes.
    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    /// Check whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }
}
