//! GPUI integration for statgraph.
//!
//! This module hosts a [`GraphWindow`](crate::graph::GraphWindow) inside a
//! GPUI view: mouse events are fed through the controller's event dispatch,
//! the backing bitmap is painted as coalesced solid quads, and transient
//! overlays are stroked directly on the surface.

mod config;
mod paint;
mod view;

pub use config::GraphWindowConfig;
pub use view::{GpuiGraphView, GraphHandle};
