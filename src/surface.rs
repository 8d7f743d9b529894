//! The window-system seam.
//!
//! The controller never talks to a toolkit directly. An adapter implements
//! [`WindowSystem`] and feeds the controller [`WindowEvent`]s; the
//! controller calls back through the trait for everything with a visible
//! effect: blitting the backing bitmap, transient overlay painting, cursor
//! changes, pointer capture, redraw scheduling, and window destruction.

use crate::bitmap::BackingBitmap;
use crate::geom::{SurfacePoint, SurfaceRect};
use crate::palette::Color;

/// Pointer cursor shown over the graph window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// The toolkit's default arrow.
    #[default]
    Default,
    /// Hand/grab cursor signalling a draggable guide bar.
    Hand,
}

/// The widget a pointer event originated from.
///
/// Pointer events may arrive through the top-level window or through the
/// drawing surface itself; the adapter translates either coordinate space
/// into surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceWidget {
    /// The top-level graph window.
    Window,
    /// The drawing surface inside the window.
    Surface,
}

/// Regions the controller can mark dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawRegion {
    /// The graph drawing surface.
    Graph,
    /// The side scale legend, when the window composes one.
    ScaleArea,
}

/// Window and pointer events delivered to the controller.
///
/// Pointer coordinates are in the originating widget's space; the
/// controller translates them through
/// [`WindowSystem::translate_to_surface`] before any hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    /// The user asked to close the window.
    CloseRequest,
    /// The window tree has been destroyed.
    Destroyed,
    /// The drawing surface needs repainting.
    Expose,
    /// The drawing surface was resized.
    Configure {
        /// New surface width in pixels.
        width: i32,
        /// New surface height in pixels.
        height: i32,
    },
    /// A pointer button was pressed.
    ButtonPress {
        /// Originating widget.
        widget: SourceWidget,
        /// X in the originating widget's space.
        x: f64,
        /// Y in the originating widget's space.
        y: f64,
        /// Whether this press is the second of a double click.
        double_click: bool,
    },
    /// A pointer button was released.
    ButtonRelease {
        /// Originating widget.
        widget: SourceWidget,
        /// X in the originating widget's space.
        x: f64,
        /// Y in the originating widget's space.
        y: f64,
    },
    /// The pointer moved, with or without a button held.
    Motion {
        /// Originating widget.
        widget: SourceWidget,
        /// X in the originating widget's space.
        x: f64,
        /// Y in the originating widget's space.
        y: f64,
    },
}

/// Adapter interface implemented by each display backend.
pub trait WindowSystem {
    /// Translate widget-space coordinates into surface-local pixels.
    fn translate_to_surface(&self, widget: SourceWidget, x: f64, y: f64) -> SurfacePoint;

    /// Copy the backing bitmap verbatim onto the visible surface.
    fn blit(&mut self, bitmap: &BackingBitmap);

    /// Draw a transient line directly onto the surface.
    ///
    /// Overlay drawing happens during expose, after the blit, and never
    /// touches the backing bitmap.
    fn overlay_line(&mut self, from: SurfacePoint, to: SurfacePoint, color: Color);

    /// Fill a transient rectangle directly onto the surface.
    fn overlay_rect(&mut self, rect: SurfaceRect, color: Color);

    /// Switch the window cursor.
    fn set_cursor(&mut self, cursor: Cursor);

    /// Attribute subsequent pointer motion to this window.
    fn capture_pointer(&mut self);

    /// End pointer capture.
    fn release_pointer(&mut self);

    /// Mark a region dirty so the toolkit schedules a repaint.
    fn queue_redraw(&mut self, region: RedrawRegion);

    /// Destroy the window tree.
    ///
    /// The adapter is expected to deliver [`WindowEvent::Destroyed`] once
    /// teardown completes.
    fn destroy_window(&mut self);
}
