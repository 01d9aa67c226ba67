use geo_types::Point;

use meridian_routing::constants::INVALID_NODE;
use meridian_routing::phantom::{Phantom, PhantomPair, PhantomSegment};
use meridian_routing::routing::route_result::PathData;
use meridian_routing::segment_graph::SegmentGraph;
use meridian_routing::types::NodeId;
use meridian_routing::weight::Weight;

/// Directed segments of a five-node corridor A - B - C - D - E with unit
/// edge weights. One constant per traversal direction.
pub mod line {
    use super::NodeId;

    pub const AB: NodeId = 0;
    pub const BC: NodeId = 1;
    pub const CD: NodeId = 2;
    pub const DE: NodeId = 3;
    pub const ED: NodeId = 4;
    pub const DC: NodeId = 5;
    pub const CB: NodeId = 6;
    pub const BA: NodeId = 7;
}

/// Directed segments of a triangle with weights (A,B) = 1, (B,C) = 1 and
/// (A,C) = 5.
pub mod triangle {
    use super::NodeId;

    pub const AB: NodeId = 0;
    pub const BC: NodeId = 1;
    pub const CA: NodeId = 2;
    pub const BA: NodeId = 3;
    pub const AC: NodeId = 4;
    pub const CB: NodeId = 5;
}

pub fn graph_with_nodes(count: usize) -> SegmentGraph {
    let mut graph = SegmentGraph::new();
    for i in 0..count {
        graph.add_node(Point::new(i as f64, 0.0));
    }
    graph
}

pub fn line_graph() -> SegmentGraph {
    use line::*;

    let mut graph = graph_with_nodes(8);
    graph.add_arc(AB, BC, 1);
    graph.add_arc(BC, CD, 1);
    graph.add_arc(CD, DE, 1);
    graph.add_arc(ED, DC, 1);
    graph.add_arc(DC, CB, 1);
    graph.add_arc(CB, BA, 1);
    graph
}

pub fn triangle_graph() -> SegmentGraph {
    use triangle::*;

    let mut graph = graph_with_nodes(6);
    graph.add_arc(AB, BC, 1);
    graph.add_arc(BC, CA, 1);
    graph.add_arc(CA, AB, 5);
    graph.add_arc(BA, AC, 1);
    graph.add_arc(AC, CB, 5);
    graph.add_arc(CB, BA, 1);
    graph
}

pub fn phantom(
    forward: Option<(NodeId, Weight)>,
    reverse: Option<(NodeId, Weight)>,
) -> Phantom {
    let forward_segment = match forward {
        Some((id, weight_offset)) => PhantomSegment::new(id, weight_offset),
        None => PhantomSegment::disabled(INVALID_NODE),
    };
    let reverse_segment = match reverse {
        Some((id, weight_offset)) => PhantomSegment::new(id, weight_offset),
        None => PhantomSegment::disabled(INVALID_NODE),
    };

    Phantom {
        forward_segment,
        reverse_segment,
        location: Point::new(0.0, 0.0),
        edge_id: 0,
    }
}

pub fn pair(source: Phantom, target: Phantom) -> PhantomPair {
    PhantomPair { source, target }
}

pub fn segment_nodes(segment: &[PathData]) -> Vec<NodeId> {
    segment.iter().map(|data| data.node).collect()
}
