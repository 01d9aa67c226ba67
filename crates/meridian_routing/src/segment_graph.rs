use geo_types::Point;

use crate::graph::{ArcAccess, GeometryAccess, RoutingFacade, SegmentArc};
use crate::types::NodeId;
use crate::weight::Weight;

/// In-memory edge-expanded graph: one node per directed segment, one arc per
/// allowed turn. Serves as the reference facade for tests, benches and
/// embedders without their own graph storage.
pub struct SegmentGraph {
    outgoing: Vec<Vec<SegmentArc>>,
    incoming: Vec<Vec<SegmentArc>>,
    locations: Vec<Point<f64>>,
    continue_straight_default: bool,
}

impl SegmentGraph {
    pub fn new() -> Self {
        SegmentGraph {
            outgoing: Vec::new(),
            incoming: Vec::new(),
            locations: Vec::new(),
            continue_straight_default: false,
        }
    }

    pub fn set_continue_straight_default(&mut self, continue_straight: bool) {
        self.continue_straight_default = continue_straight;
    }

    pub fn add_node(&mut self, location: Point<f64>) -> NodeId {
        let node_id = self.outgoing.len();
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.locations.push(location);
        node_id
    }

    pub fn add_arc(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.outgoing[from].push(SegmentArc::new(to, weight));
        self.incoming[to].push(SegmentArc::new(from, weight));
    }
}

impl Default for SegmentGraph {
    fn default() -> Self {
        SegmentGraph::new()
    }
}

impl RoutingFacade for SegmentGraph {
    fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    fn continue_straight_default(&self) -> bool {
        self.continue_straight_default
    }
}

impl ArcAccess for SegmentGraph {
    fn outgoing_arcs(&self, node: NodeId) -> &[SegmentArc] {
        &self.outgoing[node]
    }

    fn incoming_arcs(&self, node: NodeId) -> &[SegmentArc] {
        &self.incoming[node]
    }
}

impl GeometryAccess for SegmentGraph {
    fn node_location(&self, node: NodeId) -> Point<f64> {
        self.locations[node]
    }
}
