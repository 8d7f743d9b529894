use std::cell::RefCell;
use std::rc::Rc;

use gpui::prelude::*;
use gpui::{
    Bounds, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Window, canvas,
    div, px,
};

use crate::bitmap::BackingBitmap;
use crate::geom::{SurfacePoint, SurfaceRect, SurfaceSize};
use crate::graph::{GraphView, GraphWindow};
use crate::palette::Color;
use crate::surface::{Cursor, RedrawRegion, SourceWidget, WindowEvent, WindowSystem};

use super::config::GraphWindowConfig;
use super::paint::{paint_bitmap, paint_line, paint_rect, to_hsla};

/// A GPUI view hosting a [`GraphWindow`].
///
/// Mouse events arrive in window coordinates and are translated into
/// surface-local pixels by the adapter before the controller sees them.
/// Surface resizes are detected during canvas prepaint and delivered as
/// configure events; exposes are painted from the canvas paint pass.
pub struct GpuiGraphView<V: GraphView + 'static> {
    graph: Rc<RefCell<GraphWindow<V>>>,
    shared: Rc<RefCell<SurfaceShared>>,
    config: GraphWindowConfig,
}

#[derive(Default)]
struct SurfaceShared {
    bounds: Option<Bounds<Pixels>>,
    size: Option<SurfaceSize>,
    cursor: Cursor,
}

impl<V: GraphView + 'static> GpuiGraphView<V> {
    /// Host a graph window with the default configuration.
    pub fn new(graph: GraphWindow<V>) -> Self {
        Self::with_config(graph, GraphWindowConfig::default())
    }

    /// Host a graph window with a custom configuration.
    pub fn with_config(graph: GraphWindow<V>, config: GraphWindowConfig) -> Self {
        Self {
            graph: Rc::new(RefCell::new(graph)),
            shared: Rc::new(RefCell::new(SurfaceShared::default())),
            config,
        }
    }

    /// Get a handle for reaching the hosted controller.
    ///
    /// Monitors use this to forward new data and menu changes.
    pub fn handle(&self) -> GraphHandle<V> {
        GraphHandle {
            graph: Rc::clone(&self.graph),
        }
    }

    /// Run the window-close path.
    ///
    /// The controller detaches from its monitor; removing the OS window
    /// stays with the application.
    pub fn close(&mut self, cx: &mut Context<Self>) {
        self.dispatch(WindowEvent::CloseRequest, cx);
    }

    fn dispatch(&mut self, event: WindowEvent, cx: &mut Context<Self>) {
        let origin = self.shared.borrow().origin();
        let mut ws = EventWindowSystem::new(origin);
        self.graph.borrow_mut().handle_event(event, &mut ws);
        if let Some(cursor) = ws.cursor {
            self.shared.borrow_mut().cursor = cursor;
        }
        if ws.destroy {
            let mut teardown = EventWindowSystem::new(origin);
            self.graph
                .borrow_mut()
                .handle_event(WindowEvent::Destroyed, &mut teardown);
        }
        cx.notify();
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        self.dispatch(
            WindowEvent::ButtonPress {
                widget: SourceWidget::Window,
                x: f32::from(ev.position.x) as f64,
                y: f32::from(ev.position.y) as f64,
                double_click: ev.click_count >= 2,
            },
            cx,
        );
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        self.dispatch(
            WindowEvent::ButtonRelease {
                widget: SourceWidget::Window,
                x: f32::from(ev.position.x) as f64,
                y: f32::from(ev.position.y) as f64,
            },
            cx,
        );
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        self.dispatch(
            WindowEvent::Motion {
                widget: SourceWidget::Window,
                x: f32::from(ev.position.x) as f64,
                y: f32::from(ev.position.y) as f64,
            },
            cx,
        );
    }
}

impl SurfaceShared {
    fn origin(&self) -> (f64, f64) {
        self.bounds
            .map(|bounds| {
                (
                    f32::from(bounds.origin.x) as f64,
                    f32::from(bounds.origin.y) as f64,
                )
            })
            .unwrap_or((0.0, 0.0))
    }
}

impl<V: GraphView + 'static> Render for GpuiGraphView<V> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let prepaint_graph = Rc::clone(&self.graph);
        let prepaint_shared = Rc::clone(&self.shared);
        let paint_graph = Rc::clone(&self.graph);
        let cursor = self.shared.borrow().cursor;

        let surface = canvas(
            move |bounds, _window, _cx| {
                let mut shared = prepaint_shared.borrow_mut();
                shared.bounds = Some(bounds);
                let size = SurfaceSize::new(
                    f32::from(bounds.size.width).floor() as i32,
                    f32::from(bounds.size.height).floor() as i32,
                );
                if shared.size != Some(size) {
                    shared.size = Some(size);
                    let origin = shared.origin();
                    drop(shared);
                    let mut ws = EventWindowSystem::new(origin);
                    prepaint_graph.borrow_mut().handle_event(
                        WindowEvent::Configure {
                            width: size.width,
                            height: size.height,
                        },
                        &mut ws,
                    );
                }
            },
            move |bounds, _, window, _cx| {
                let mut ws = PaintWindowSystem {
                    window,
                    origin: bounds.origin,
                };
                paint_graph
                    .borrow_mut()
                    .handle_event(WindowEvent::Expose, &mut ws);
            },
        )
        .size_full();

        let base = div()
            .size_full()
            .p(px(self.config.border_px))
            .bg(to_hsla(Color::LIGHT_GRAY))
            .child(surface)
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev: &MouseDownEvent, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev: &MouseUpEvent, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev: &MouseMoveEvent, _, cx| {
                this.on_mouse_move(ev, cx);
            }));

        if cursor == Cursor::Hand {
            base.cursor_pointer()
        } else {
            base.cursor_default()
        }
    }
}

/// A handle for reaching the [`GraphWindow`] hosted by a [`GpuiGraphView`].
///
/// The handle clones cheaply and lets the owning monitor forward data and
/// menu changes without holding the view itself.
pub struct GraphHandle<V: GraphView + 'static> {
    graph: Rc<RefCell<GraphWindow<V>>>,
}

impl<V: GraphView + 'static> Clone for GraphHandle<V> {
    fn clone(&self) -> Self {
        Self {
            graph: Rc::clone(&self.graph),
        }
    }
}

impl<V: GraphView + 'static> GraphHandle<V> {
    /// Read the controller state.
    pub fn read<R>(&self, f: impl FnOnce(&GraphWindow<V>) -> R) -> R {
        f(&self.graph.borrow())
    }

    /// Mutate the controller state.
    pub fn write<R>(&self, f: impl FnOnce(&mut GraphWindow<V>) -> R) -> R {
        f(&mut self.graph.borrow_mut())
    }
}

/// Window system used while handling input events.
///
/// Painting effects are deferred to the next paint pass; only cursor,
/// redraw, and destroy requests are recorded. Pointer capture is a no-op
/// because GPUI keeps routing mouse moves to the pressed view already.
struct EventWindowSystem {
    origin: (f64, f64),
    cursor: Option<Cursor>,
    destroy: bool,
}

impl EventWindowSystem {
    fn new(origin: (f64, f64)) -> Self {
        Self {
            origin,
            cursor: None,
            destroy: false,
        }
    }
}

impl WindowSystem for EventWindowSystem {
    fn translate_to_surface(&self, _widget: SourceWidget, x: f64, y: f64) -> SurfacePoint {
        SurfacePoint::new(
            (x - self.origin.0).floor() as i32,
            (y - self.origin.1).floor() as i32,
        )
    }

    fn blit(&mut self, _bitmap: &BackingBitmap) {}

    fn overlay_line(&mut self, _from: SurfacePoint, _to: SurfacePoint, _color: Color) {}

    fn overlay_rect(&mut self, _rect: SurfaceRect, _color: Color) {}

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = Some(cursor);
    }

    fn capture_pointer(&mut self) {}

    fn release_pointer(&mut self) {}

    fn queue_redraw(&mut self, _region: RedrawRegion) {}

    fn destroy_window(&mut self) {
        self.destroy = true;
    }
}

/// Window system used during the canvas paint pass.
struct PaintWindowSystem<'a> {
    window: &'a mut Window,
    origin: gpui::Point<Pixels>,
}

impl WindowSystem for PaintWindowSystem<'_> {
    fn translate_to_surface(&self, _widget: SourceWidget, x: f64, y: f64) -> SurfacePoint {
        SurfacePoint::new(
            (x - f32::from(self.origin.x) as f64).floor() as i32,
            (y - f32::from(self.origin.y) as f64).floor() as i32,
        )
    }

    fn blit(&mut self, bitmap: &BackingBitmap) {
        paint_bitmap(self.window, self.origin, bitmap);
    }

    fn overlay_line(&mut self, from: SurfacePoint, to: SurfacePoint, color: Color) {
        paint_line(self.window, self.origin, from, to, color);
    }

    fn overlay_rect(&mut self, rect: SurfaceRect, color: Color) {
        paint_rect(self.window, self.origin, rect, color);
    }

    fn set_cursor(&mut self, _cursor: Cursor) {}

    fn capture_pointer(&mut self) {}

    fn release_pointer(&mut self) {}

    fn queue_redraw(&mut self, _region: RedrawRegion) {}

    fn destroy_window(&mut self) {}
}
