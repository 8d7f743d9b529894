//! The graph window controller.
//!
//! [`GraphWindow`] owns everything a statistics graph window shares across
//! its concrete kinds: the backing bitmap lifecycle, the collector brush
//! cache, the drag-mode state machine, the pause flag, and detachment from
//! the owning monitor. The concrete graph (strip chart, flame graph, ...)
//! plugs in through [`GraphView`] and owns the actual drawing and data
//! handling.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::bitmap::BackingBitmap;
use crate::brush::{Brush, BrushCache};
use crate::drag::{DragMode, DragState};
use crate::geom::SurfacePoint;
use crate::monitor::{CollectorId, GraphId, Monitor};
use crate::palette::Color;
use crate::surface::{Cursor, RedrawRegion, WindowEvent, WindowSystem};

/// Extension points implemented by a concrete graph.
///
/// Every method has a no-op default so a view only implements what it
/// needs. The controller passes itself in as [`GraphContext`] so hooks can
/// reach the bitmap, brushes, and drag state.
pub trait GraphView {
    /// A new collector definition arrived from the client.
    fn new_collector(&mut self, _ctx: &mut GraphContext, _collector: CollectorId) {}

    /// New frame data arrived for a thread.
    ///
    /// Views consult [`GraphContext::is_paused`] and skip bitmap updates
    /// while the graph is paused; the controller buffers nothing.
    fn new_data(&mut self, _ctx: &mut GraphContext, _thread_index: i32, _frame_number: i32) {}

    /// Redraw the entire graph into the backing bitmap.
    fn force_redraw(&mut self, _ctx: &mut GraphContext) {}

    /// The drawing surface was resized; rescale internal layout.
    ///
    /// Called before the backing bitmap is rebuilt at the new size.
    fn changed_graph_size(&mut self, _ctx: &mut GraphContext, _width: i32, _height: i32) {}

    /// The user selected a new time-unit mask from the monitor menu.
    fn set_time_units(&mut self, _ctx: &mut GraphContext, _unit_mask: u32) {}

    /// The user selected a new scroll speed from the monitor menu.
    fn set_scroll_speed(&mut self, _ctx: &mut GraphContext, _speed: f32) {}

    /// The user single-clicked a label in the side label list.
    fn clicked_label(&mut self, _ctx: &mut GraphContext, _collector: CollectorId) {}

    /// Hit-test the pointer position for draggable things.
    ///
    /// Runs on every pointer motion; the result becomes the potential drag
    /// mode that a button press would commit.
    fn consider_drag_start(&mut self, _ctx: &GraphContext, _point: SurfacePoint) -> DragMode {
        DragMode::None
    }

    /// The drag mode changed state.
    ///
    /// The controller has already stored the new mode when this runs.
    fn drag_mode_changed(&mut self, _ctx: &mut GraphContext, _mode: DragMode) {}

    /// The pointer was double-clicked on the surface.
    fn double_clicked(&mut self, _ctx: &mut GraphContext, _point: SurfacePoint) {}

    /// Paint transient overlays directly onto the visible surface.
    ///
    /// Runs during expose, after the bitmap blit. Anything drawn here is
    /// not persisted in the backing bitmap.
    fn additional_graph_window_paint(
        &mut self,
        _ctx: &mut GraphContext,
        _ws: &mut dyn WindowSystem,
    ) {
    }
}

/// Shared state of a graph window, handed to [`GraphView`] hooks.
#[derive(Debug)]
pub struct GraphContext {
    monitor: Option<Weak<RefCell<dyn Monitor>>>,
    graph_id: GraphId,
    bitmap: Option<BackingBitmap>,
    brushes: BrushCache,
    drag: DragState,
    paused: bool,
    has_scale_area: bool,
}

impl GraphContext {
    /// The token identifying this graph within its monitor.
    pub fn graph_id(&self) -> GraphId {
        self.graph_id
    }

    /// The backing bitmap, absent until the first configure event.
    pub fn bitmap(&self) -> Option<&BackingBitmap> {
        self.bitmap.as_ref()
    }

    /// Mutable access to the backing bitmap for drawing.
    pub fn bitmap_mut(&mut self) -> Option<&mut BackingBitmap> {
        self.bitmap.as_mut()
    }

    /// Current drag bookkeeping.
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Mutable drag bookkeeping, for views that record drag anchors.
    pub fn drag_mut(&mut self) -> &mut DragState {
        &mut self.drag
    }

    /// Whether new-data updates are currently suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the window composes a side scale legend.
    pub fn has_scale_area(&self) -> bool {
        self.has_scale_area
    }

    /// The brush for drawing in a collector's color.
    ///
    /// Cached per collector; the monitor is queried only on a miss. After
    /// the monitor has detached the fallback is an uncached black brush.
    pub fn brush(&mut self, collector: CollectorId) -> Rc<Brush> {
        if let Some(brush) = self.brushes.get(collector) {
            return brush;
        }
        let Some(monitor) = self.monitor.as_ref().and_then(Weak::upgrade) else {
            log::warn!(
                "brush for collector {} requested after monitor detached",
                collector.0
            );
            return Rc::new(Brush::new(Color::BLACK));
        };
        let rgb = monitor.borrow().collector_color(collector);
        self.brushes
            .get_or_insert_with(collector, || Color::from_unit(rgb))
    }

    /// Rebuild the backing bitmap at a new size.
    ///
    /// The previous bitmap and every cached brush are released first;
    /// brushes are bound to the bitmap they were created against. The new
    /// bitmap starts as a uniform white fill.
    fn setup_bitmap(&mut self, width: i32, height: i32) {
        log::debug!("rebuilding backing bitmap at {width}x{height}");
        self.brushes.clear();
        self.bitmap = Some(BackingBitmap::new(width, height, Color::WHITE));
    }
}

/// Controller for one statistics graph window.
///
/// Translates window-system events into the redraw pipeline and the drag
/// state machine, delegating graph-specific behavior to `V`.
#[derive(Debug)]
pub struct GraphWindow<V> {
    view: V,
    ctx: GraphContext,
}

impl<V: GraphView> GraphWindow<V> {
    /// Create a controller attached to its owning monitor.
    ///
    /// `monitor` is a weak back reference; the monitor owns the graph, not
    /// the other way around. `has_scale_area` records whether the adapter
    /// composed a side scale legend next to the graph.
    pub fn new(
        monitor: Weak<RefCell<dyn Monitor>>,
        graph_id: GraphId,
        view: V,
        has_scale_area: bool,
    ) -> Self {
        Self {
            view,
            ctx: GraphContext {
                monitor: Some(monitor),
                graph_id,
                bitmap: None,
                brushes: BrushCache::new(),
                drag: DragState::default(),
                paused: false,
                has_scale_area,
            },
        }
    }

    /// The concrete graph view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the concrete graph view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The shared window state.
    pub fn context(&self) -> &GraphContext {
        &self.ctx
    }

    /// Mutable access to the shared window state.
    pub fn context_mut(&mut self) -> &mut GraphContext {
        &mut self.ctx
    }

    /// Dispatch one window-system event.
    pub fn handle_event(&mut self, event: WindowEvent, ws: &mut dyn WindowSystem) {
        match event {
            WindowEvent::CloseRequest => ws.destroy_window(),
            WindowEvent::Destroyed => self.close(),
            WindowEvent::Expose => self.handle_expose(ws),
            WindowEvent::Configure { width, height } => self.handle_configure(width, height),
            WindowEvent::ButtonPress {
                widget,
                x,
                y,
                double_click,
            } => {
                let point = ws.translate_to_surface(widget, x, y);
                self.handle_button_press(point, double_click, ws);
            }
            WindowEvent::ButtonRelease { widget, x, y } => {
                let point = ws.translate_to_surface(widget, x, y);
                self.handle_button_release(point, ws);
            }
            WindowEvent::Motion { widget, x, y } => {
                let point = ws.translate_to_surface(widget, x, y);
                self.handle_motion(point, ws);
            }
        }
    }

    /// Change the pause flag.
    ///
    /// While paused, views skip bitmap updates on new data; nothing is
    /// buffered here.
    pub fn set_pause(&mut self, paused: bool) {
        self.ctx.paused = paused;
    }

    /// Whether the graph is paused.
    pub fn is_paused(&self) -> bool {
        self.ctx.paused
    }

    /// The user's guide bars changed; mark the affected regions dirty.
    pub fn user_guide_bars_changed(&mut self, ws: &mut dyn WindowSystem) {
        if self.ctx.has_scale_area {
            ws.queue_redraw(RedrawRegion::ScaleArea);
        }
        ws.queue_redraw(RedrawRegion::Graph);
    }

    /// Detach from the owning monitor and drop out of its managed set.
    ///
    /// Idempotent: the back reference is cleared before the monitor call,
    /// so a second invocation performs no monitor interaction.
    pub fn close(&mut self) {
        if let Some(monitor) = self.ctx.monitor.take() {
            log::debug!("graph {} closing", self.ctx.graph_id.0);
            if let Some(monitor) = monitor.upgrade() {
                monitor.borrow_mut().remove_graph(self.ctx.graph_id);
            }
        }
    }

    /// Forward a new collector definition to the view.
    pub fn new_collector(&mut self, collector: CollectorId) {
        self.view.new_collector(&mut self.ctx, collector);
    }

    /// Forward new frame data to the view.
    pub fn new_data(&mut self, thread_index: i32, frame_number: i32) {
        self.view.new_data(&mut self.ctx, thread_index, frame_number);
    }

    /// Ask the view to redraw the entire graph.
    pub fn force_redraw(&mut self) {
        self.view.force_redraw(&mut self.ctx);
    }

    /// Forward a time-units change to the view.
    pub fn set_time_units(&mut self, unit_mask: u32) {
        self.view.set_time_units(&mut self.ctx, unit_mask);
    }

    /// Forward a scroll-speed change to the view.
    pub fn set_scroll_speed(&mut self, speed: f32) {
        self.view.set_scroll_speed(&mut self.ctx, speed);
    }

    /// Forward a label click to the view.
    pub fn clicked_label(&mut self, collector: CollectorId) {
        self.view.clicked_label(&mut self.ctx, collector);
    }

    /// Store a new drag mode and notify the view.
    pub fn set_drag_mode(&mut self, mode: DragMode) {
        self.ctx.drag.mode = mode;
        self.view.drag_mode_changed(&mut self.ctx, mode);
    }

    fn handle_expose(&mut self, ws: &mut dyn WindowSystem) {
        if let Some(bitmap) = self.ctx.bitmap.as_ref() {
            ws.blit(bitmap);
        }
        self.view.additional_graph_window_paint(&mut self.ctx, ws);
    }

    fn handle_configure(&mut self, width: i32, height: i32) {
        self.view.changed_graph_size(&mut self.ctx, width, height);
        self.ctx.setup_bitmap(width, height);
        self.view.force_redraw(&mut self.ctx);
    }

    fn handle_button_press(
        &mut self,
        point: SurfacePoint,
        double_click: bool,
        ws: &mut dyn WindowSystem,
    ) {
        if double_click {
            self.view.double_clicked(&mut self.ctx, point);
        }
        let potential = self.ctx.drag.potential;
        if potential != DragMode::None {
            self.set_drag_mode(potential);
            self.ctx.drag.anchor = point;
            ws.capture_pointer();
        }
    }

    fn handle_button_release(&mut self, point: SurfacePoint, ws: &mut dyn WindowSystem) {
        self.set_drag_mode(DragMode::None);
        ws.release_pointer();
        // Re-evaluate the cursor and potential mode at the release point.
        self.handle_motion(point, ws);
    }

    fn handle_motion(&mut self, point: SurfacePoint, ws: &mut dyn WindowSystem) {
        self.ctx.drag.potential = self.view.consider_drag_start(&self.ctx, point);
        let cursor = if self.ctx.drag.wants_hand_cursor() {
            Cursor::Hand
        } else {
            Cursor::Default
        };
        ws.set_cursor(cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{SurfaceRect, SurfaceSize};
    use crate::palette::Rgb;
    use crate::surface::SourceWidget;

    #[derive(Default)]
    struct RecordingWindowSystem {
        // Offset of the surface inside the top-level window.
        surface_origin: (f64, f64),
        cursor_changes: Vec<Cursor>,
        blits: Vec<SurfaceSize>,
        overlay_lines: Vec<(SurfacePoint, SurfacePoint, Color)>,
        captures: usize,
        releases: usize,
        redraws: Vec<RedrawRegion>,
        destroyed: bool,
    }

    impl WindowSystem for RecordingWindowSystem {
        fn translate_to_surface(&self, widget: SourceWidget, x: f64, y: f64) -> SurfacePoint {
            match widget {
                SourceWidget::Surface => SurfacePoint::new(x as i32, y as i32),
                SourceWidget::Window => SurfacePoint::new(
                    (x - self.surface_origin.0) as i32,
                    (y - self.surface_origin.1) as i32,
                ),
            }
        }

        fn blit(&mut self, bitmap: &BackingBitmap) {
            self.blits.push(bitmap.size());
        }

        fn overlay_line(&mut self, from: SurfacePoint, to: SurfacePoint, color: Color) {
            self.overlay_lines.push((from, to, color));
        }

        fn overlay_rect(&mut self, _rect: SurfaceRect, _color: Color) {}

        fn set_cursor(&mut self, cursor: Cursor) {
            self.cursor_changes.push(cursor);
        }

        fn capture_pointer(&mut self) {
            self.captures += 1;
        }

        fn release_pointer(&mut self) {
            self.releases += 1;
        }

        fn queue_redraw(&mut self, region: RedrawRegion) {
            self.redraws.push(region);
        }

        fn destroy_window(&mut self) {
            self.destroyed = true;
        }
    }

    #[derive(Default)]
    struct TestMonitor {
        color_queries: std::cell::Cell<usize>,
        removed: Vec<GraphId>,
    }

    impl Monitor for TestMonitor {
        fn collector_color(&self, _collector: CollectorId) -> Rgb {
            self.color_queries.set(self.color_queries.get() + 1);
            Rgb::new(1.0, 0.0, 0.0)
        }

        fn remove_graph(&mut self, graph: GraphId) {
            self.removed.push(graph);
        }
    }

    /// View with a horizontal guide-bar band at y in 40..60.
    #[derive(Default)]
    struct GuideBarView {
        size_changes: Vec<(i32, i32)>,
        full_redraws: usize,
        drag_mode_changes: Vec<DragMode>,
        double_clicks: Vec<SurfacePoint>,
        overlay_paints: usize,
        collectors: Vec<CollectorId>,
        data_events: Vec<(i32, i32)>,
        unit_masks: Vec<u32>,
        scroll_speeds: Vec<f32>,
        label_clicks: Vec<CollectorId>,
    }

    impl GraphView for GuideBarView {
        fn new_collector(&mut self, _ctx: &mut GraphContext, collector: CollectorId) {
            self.collectors.push(collector);
        }

        fn new_data(&mut self, ctx: &mut GraphContext, thread_index: i32, frame_number: i32) {
            if ctx.is_paused() {
                return;
            }
            self.data_events.push((thread_index, frame_number));
        }

        fn force_redraw(&mut self, _ctx: &mut GraphContext) {
            self.full_redraws += 1;
        }

        fn set_time_units(&mut self, _ctx: &mut GraphContext, unit_mask: u32) {
            self.unit_masks.push(unit_mask);
        }

        fn set_scroll_speed(&mut self, _ctx: &mut GraphContext, speed: f32) {
            self.scroll_speeds.push(speed);
        }

        fn clicked_label(&mut self, _ctx: &mut GraphContext, collector: CollectorId) {
            self.label_clicks.push(collector);
        }

        fn changed_graph_size(&mut self, _ctx: &mut GraphContext, width: i32, height: i32) {
            self.size_changes.push((width, height));
        }

        fn consider_drag_start(&mut self, _ctx: &GraphContext, point: SurfacePoint) -> DragMode {
            if (40..60).contains(&point.y) {
                DragMode::GuideBar
            } else {
                DragMode::None
            }
        }

        fn drag_mode_changed(&mut self, _ctx: &mut GraphContext, mode: DragMode) {
            self.drag_mode_changes.push(mode);
        }

        fn double_clicked(&mut self, _ctx: &mut GraphContext, point: SurfacePoint) {
            self.double_clicks.push(point);
        }

        fn additional_graph_window_paint(
            &mut self,
            _ctx: &mut GraphContext,
            ws: &mut dyn WindowSystem,
        ) {
            self.overlay_paints += 1;
            ws.overlay_line(
                SurfacePoint::new(0, 50),
                SurfacePoint::new(100, 50),
                Color::USER_GUIDE_BAR,
            );
        }
    }

    fn make_graph(
        view: GuideBarView,
        has_scale_area: bool,
    ) -> (GraphWindow<GuideBarView>, Rc<RefCell<TestMonitor>>) {
        let monitor = Rc::new(RefCell::new(TestMonitor::default()));
        let monitor_dyn: Rc<RefCell<dyn Monitor>> = monitor.clone();
        let weak: Weak<RefCell<dyn Monitor>> = Rc::downgrade(&monitor_dyn);
        let graph = GraphWindow::new(weak, GraphId(1), view, has_scale_area);
        (graph, monitor)
    }

    #[test]
    fn configure_rebuilds_bitmap_and_forces_redraw() {
        let (mut graph, _monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem::default();

        graph.handle_event(
            WindowEvent::Configure {
                width: 400,
                height: 300,
            },
            &mut ws,
        );

        let bitmap = graph.context().bitmap().expect("bitmap created");
        assert_eq!(bitmap.size(), SurfaceSize::new(400, 300));
        assert_eq!(bitmap.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(bitmap.pixel(399, 299), Some(Color::WHITE));
        assert_eq!(graph.view().size_changes, vec![(400, 300)]);
        assert_eq!(graph.view().full_redraws, 1);

        graph.handle_event(
            WindowEvent::Configure {
                width: 200,
                height: 100,
            },
            &mut ws,
        );
        let bitmap = graph.context().bitmap().expect("bitmap recreated");
        assert_eq!(bitmap.size(), SurfaceSize::new(200, 100));
        assert_eq!(graph.view().size_changes, vec![(400, 300), (200, 100)]);
    }

    #[test]
    fn expose_blits_bitmap_then_paints_overlays() {
        let (mut graph, _monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem::default();

        graph.handle_event(
            WindowEvent::Configure {
                width: 100,
                height: 80,
            },
            &mut ws,
        );
        graph.handle_event(WindowEvent::Expose, &mut ws);

        assert_eq!(ws.blits, vec![SurfaceSize::new(100, 80)]);
        assert_eq!(graph.view().overlay_paints, 1);
        assert_eq!(ws.overlay_lines.len(), 1);
        assert_eq!(ws.overlay_lines[0].2, Color::USER_GUIDE_BAR);
    }

    #[test]
    fn expose_without_bitmap_skips_blit_but_still_overlays() {
        let (mut graph, _monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem::default();

        graph.handle_event(WindowEvent::Expose, &mut ws);

        assert!(ws.blits.is_empty());
        assert_eq!(graph.view().overlay_paints, 1);
    }

    #[test]
    fn brush_is_cached_with_single_monitor_query() {
        let (mut graph, monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem::default();
        graph.handle_event(
            WindowEvent::Configure {
                width: 100,
                height: 80,
            },
            &mut ws,
        );

        let first = graph.context_mut().brush(CollectorId(7));
        let second = graph.context_mut().brush(CollectorId(7));

        assert_eq!(first.color, Color::new(65535, 0, 0));
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(monitor.borrow().color_queries.get(), 1);
    }

    #[test]
    fn brush_cache_cleared_on_resize() {
        let (mut graph, monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem::default();
        graph.handle_event(
            WindowEvent::Configure {
                width: 100,
                height: 80,
            },
            &mut ws,
        );
        let before = graph.context_mut().brush(CollectorId(7));

        graph.handle_event(
            WindowEvent::Configure {
                width: 50,
                height: 40,
            },
            &mut ws,
        );
        let after = graph.context_mut().brush(CollectorId(7));

        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(monitor.borrow().color_queries.get(), 2);
    }

    #[test]
    fn brush_after_monitor_detach_falls_back_to_black() {
        let (mut graph, monitor) = make_graph(GuideBarView::default(), false);
        drop(monitor);
        let brush = graph.context_mut().brush(CollectorId(3));
        assert_eq!(brush.color, Color::BLACK);
    }

    #[test]
    fn guide_bar_drag_lifecycle() {
        let (mut graph, _monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem::default();
        graph.handle_event(
            WindowEvent::Configure {
                width: 400,
                height: 300,
            },
            &mut ws,
        );

        // Motion over the guide-bar band: potential mode + hand cursor.
        graph.handle_event(
            WindowEvent::Motion {
                widget: SourceWidget::Surface,
                x: 120.0,
                y: 50.0,
            },
            &mut ws,
        );
        assert_eq!(graph.context().drag().potential, DragMode::GuideBar);
        assert_eq!(ws.cursor_changes.last(), Some(&Cursor::Hand));

        // Press commits the potential mode and records the anchor.
        graph.handle_event(
            WindowEvent::ButtonPress {
                widget: SourceWidget::Surface,
                x: 120.0,
                y: 50.0,
                double_click: false,
            },
            &mut ws,
        );
        assert_eq!(graph.context().drag().mode, DragMode::GuideBar);
        assert_eq!(graph.context().drag().anchor, SurfacePoint::new(120, 50));
        assert_eq!(ws.captures, 1);
        assert_eq!(graph.view().drag_mode_changes, vec![DragMode::GuideBar]);

        // Release resets the mode and re-evaluates the motion handler.
        let cursor_changes_before = ws.cursor_changes.len();
        graph.handle_event(
            WindowEvent::ButtonRelease {
                widget: SourceWidget::Surface,
                x: 120.0,
                y: 50.0,
            },
            &mut ws,
        );
        assert_eq!(graph.context().drag().mode, DragMode::None);
        assert_eq!(ws.releases, 1);
        assert_eq!(ws.cursor_changes.len(), cursor_changes_before + 1);
        // Still hovering the band, so the re-evaluation keeps the hand.
        assert_eq!(ws.cursor_changes.last(), Some(&Cursor::Hand));
        assert_eq!(
            graph.view().drag_mode_changes,
            vec![DragMode::GuideBar, DragMode::None]
        );

        // Moving off the band restores the default cursor.
        graph.handle_event(
            WindowEvent::Motion {
                widget: SourceWidget::Surface,
                x: 120.0,
                y: 10.0,
            },
            &mut ws,
        );
        assert_eq!(graph.context().drag().potential, DragMode::None);
        assert_eq!(ws.cursor_changes.last(), Some(&Cursor::Default));
    }

    #[test]
    fn press_without_potential_mode_does_not_drag() {
        let (mut graph, _monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem::default();

        graph.handle_event(
            WindowEvent::ButtonPress {
                widget: SourceWidget::Surface,
                x: 5.0,
                y: 5.0,
                double_click: false,
            },
            &mut ws,
        );

        assert_eq!(graph.context().drag().mode, DragMode::None);
        assert_eq!(ws.captures, 0);
        assert!(graph.view().drag_mode_changes.is_empty());
    }

    #[test]
    fn release_always_resets_even_without_prior_drag() {
        let (mut graph, _monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem::default();

        graph.handle_event(
            WindowEvent::ButtonRelease {
                widget: SourceWidget::Surface,
                x: 5.0,
                y: 5.0,
            },
            &mut ws,
        );

        assert_eq!(graph.context().drag().mode, DragMode::None);
        assert_eq!(ws.releases, 1);
        assert_eq!(ws.cursor_changes.len(), 1);
        assert_eq!(graph.view().drag_mode_changes, vec![DragMode::None]);
    }

    #[test]
    fn window_coordinates_are_translated_to_surface_space() {
        let (mut graph, _monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem {
            surface_origin: (30.0, 20.0),
            ..Default::default()
        };

        // 70 window-y lands at 50 surface-y, inside the guide-bar band.
        graph.handle_event(
            WindowEvent::Motion {
                widget: SourceWidget::Window,
                x: 150.0,
                y: 70.0,
            },
            &mut ws,
        );
        assert_eq!(graph.context().drag().potential, DragMode::GuideBar);

        graph.handle_event(
            WindowEvent::ButtonPress {
                widget: SourceWidget::Window,
                x: 150.0,
                y: 70.0,
                double_click: false,
            },
            &mut ws,
        );
        assert_eq!(graph.context().drag().anchor, SurfacePoint::new(120, 50));
    }

    #[test]
    fn double_click_reaches_the_view() {
        let (mut graph, _monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem::default();

        graph.handle_event(
            WindowEvent::ButtonPress {
                widget: SourceWidget::Surface,
                x: 10.0,
                y: 10.0,
                double_click: true,
            },
            &mut ws,
        );

        assert_eq!(graph.view().double_clicks, vec![SurfacePoint::new(10, 10)]);
    }

    #[test]
    fn close_is_idempotent() {
        let (mut graph, monitor) = make_graph(GuideBarView::default(), false);

        graph.close();
        graph.close();

        assert_eq!(monitor.borrow().removed, vec![GraphId(1)]);
    }

    #[test]
    fn destroyed_event_detaches_from_monitor() {
        let (mut graph, monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem::default();

        graph.handle_event(WindowEvent::Destroyed, &mut ws);

        assert_eq!(monitor.borrow().removed, vec![GraphId(1)]);
    }

    #[test]
    fn close_request_destroys_the_window_tree() {
        let (mut graph, monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem::default();

        graph.handle_event(WindowEvent::CloseRequest, &mut ws);

        assert!(ws.destroyed);
        // Removal happens on Destroyed, not on the request.
        assert!(monitor.borrow().removed.is_empty());
    }

    #[test]
    fn pause_flag_is_stored() {
        let (mut graph, _monitor) = make_graph(GuideBarView::default(), false);
        assert!(!graph.is_paused());
        graph.set_pause(true);
        assert!(graph.is_paused());
        assert!(graph.context().is_paused());
        graph.set_pause(false);
        assert!(!graph.is_paused());
    }

    #[test]
    fn monitor_operations_forward_to_the_view() {
        let (mut graph, _monitor) = make_graph(GuideBarView::default(), false);

        graph.new_collector(CollectorId(4));
        graph.new_data(0, 17);
        graph.set_time_units(0b10);
        graph.set_scroll_speed(3.5);
        graph.clicked_label(CollectorId(4));

        assert_eq!(graph.view().collectors, vec![CollectorId(4)]);
        assert_eq!(graph.view().data_events, vec![(0, 17)]);
        assert_eq!(graph.view().unit_masks, vec![0b10]);
        assert_eq!(graph.view().scroll_speeds, vec![3.5]);
        assert_eq!(graph.view().label_clicks, vec![CollectorId(4)]);
    }

    #[test]
    fn paused_graph_skips_data_updates_by_convention() {
        let (mut graph, _monitor) = make_graph(GuideBarView::default(), false);

        graph.set_pause(true);
        graph.new_data(0, 1);
        assert!(graph.view().data_events.is_empty());

        graph.set_pause(false);
        graph.new_data(0, 2);
        assert_eq!(graph.view().data_events, vec![(0, 2)]);
    }

    #[test]
    fn guide_bars_changed_queues_redraws() {
        let (mut graph, _monitor) = make_graph(GuideBarView::default(), true);
        let mut ws = RecordingWindowSystem::default();
        graph.user_guide_bars_changed(&mut ws);
        assert_eq!(ws.redraws, vec![RedrawRegion::ScaleArea, RedrawRegion::Graph]);

        let (mut graph, _monitor) = make_graph(GuideBarView::default(), false);
        let mut ws = RecordingWindowSystem::default();
        graph.user_guide_bars_changed(&mut ws);
        assert_eq!(ws.redraws, vec![RedrawRegion::Graph]);
    }
}
