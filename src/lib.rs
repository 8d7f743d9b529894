//! statgraph provides flicker-free statistics graph windows with a
//! draggable-guide-bar interaction model.
//!
//! The core is backend-agnostic: a [`GraphWindow`](graph::GraphWindow)
//! controller owns the off-screen backing bitmap, the collector brush
//! cache, and the drag state machine, and talks to the display through the
//! [`WindowSystem`](surface::WindowSystem) seam. Concrete graphs plug in
//! through [`GraphView`](graph::GraphView). The `gpui` feature enables a
//! GPUI adapter.

#![forbid(unsafe_code)]

pub mod bitmap;
pub mod brush;
pub mod drag;
pub mod geom;
pub mod graph;
pub mod monitor;
pub mod palette;
pub mod surface;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use bitmap::BackingBitmap;
pub use brush::{Brush, BrushCache};
pub use drag::{DragMode, DragState};
pub use geom::{SurfacePoint, SurfaceRect, SurfaceSize};
pub use graph::{GraphContext, GraphView, GraphWindow};
pub use monitor::{CollectorId, GraphId, Monitor};
pub use palette::{Color, Rgb};
pub use surface::{Cursor, RedrawRegion, SourceWidget, WindowEvent, WindowSystem};
