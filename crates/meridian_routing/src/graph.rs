use geo_types::Point;

use crate::types::NodeId;
use crate::weight::{INVALID_WEIGHT, Weight};

/// A turn in the edge-expanded graph. `node` is the adjacent segment and
/// `weight` the full traversal weight of the tail segment plus any turn
/// penalty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentArc {
    pub node: NodeId,
    pub weight: Weight,
}

impl SegmentArc {
    pub fn new(node: NodeId, weight: Weight) -> Self {
        SegmentArc { node, weight }
    }
}

/// Read-only configuration and sizing of the routing graph.
pub trait RoutingFacade {
    fn node_count(&self) -> usize;

    /// Whether waypoints keep the arrival direction when no per-request
    /// override is given.
    fn continue_straight_default(&self) -> bool;
}

/// Adjacency of the edge-expanded graph.
pub trait ArcAccess {
    fn outgoing_arcs(&self, node: NodeId) -> &[SegmentArc];

    /// Arcs entering `node`; each arc's `node` field is the tail segment.
    fn incoming_arcs(&self, node: NodeId) -> &[SegmentArc];

    fn self_loop_weight(&self, node: NodeId) -> Weight {
        self.outgoing_arcs(node)
            .iter()
            .filter(|arc| arc.node == node)
            .map(|arc| arc.weight)
            .min()
            .unwrap_or(INVALID_WEIGHT)
    }
}

/// Node positions for expanding a packed path into geometry.
pub trait GeometryAccess {
    fn node_location(&self, node: NodeId) -> Point<f64>;
}
