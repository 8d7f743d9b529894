//! The owning monitor contract.
//!
//! A monitor owns a set of graph windows and knows the color assigned to
//! each collector. Graph windows hold only a weak back reference to their
//! monitor: the relation is navigational, not owning, and every use-site
//! checks presence so teardown can never re-enter a dead monitor.

use crate::palette::Rgb;

/// Identifier of a statistics collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectorId(pub i32);

/// Token identifying a graph window within its owning monitor.
///
/// Assigned by the monitor when the graph is created and handed back in
/// [`Monitor::remove_graph`] when the window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(pub u64);

/// Capabilities a graph window needs from its owning monitor.
pub trait Monitor {
    /// The color assigned to a collector, as unit floats.
    fn collector_color(&self, collector: CollectorId) -> Rgb;

    /// Drop the graph from the monitor's managed set.
    ///
    /// Called once from [`GraphWindow::close`](crate::graph::GraphWindow::close);
    /// the graph clears its back reference before calling, so this never
    /// re-enters the closing graph.
    fn remove_graph(&mut self, graph: GraphId);
}
