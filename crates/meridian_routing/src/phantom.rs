use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::types::{EdgeId, NodeId};
use crate::weight::Weight;

/// One directed traversal of the edge a waypoint snapped onto.
///
/// `id` is the edge-expanded graph node for that traversal direction and
/// `weight_offset` the partial weight from the segment entry to the snapped
/// location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhantomSegment {
    pub id: NodeId,
    pub enabled: bool,
    pub weight_offset: Weight,
}

impl PhantomSegment {
    pub fn new(id: NodeId, weight_offset: Weight) -> Self {
        PhantomSegment {
            id,
            enabled: true,
            weight_offset,
        }
    }

    pub fn disabled(id: NodeId) -> Self {
        PhantomSegment {
            id,
            enabled: false,
            weight_offset: 0,
        }
    }
}

/// A waypoint snapped onto the road graph.
///
/// `location` and `edge_id` are carried through untouched for the unpacker.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Phantom {
    pub forward_segment: PhantomSegment,
    pub reverse_segment: PhantomSegment,
    pub location: Point<f64>,
    pub edge_id: EdgeId,
}

impl Phantom {
    pub fn is_routable(&self) -> bool {
        self.forward_segment.enabled || self.reverse_segment.enabled
    }
}

/// Source and target of one route leg. Consecutive pairs share their
/// waypoint phantom: pair `i`'s target is pair `i + 1`'s source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhantomPair {
    pub source: Phantom,
    pub target: Phantom,
}

/// Both phantoms sit on the same forward segment with the target behind the
/// source, so a valid path has to leave the segment and loop back.
pub fn needs_loop_forward(source: &Phantom, target: &Phantom) -> bool {
    source.forward_segment.enabled
        && target.forward_segment.enabled
        && source.forward_segment.id == target.forward_segment.id
        && source.forward_segment.weight_offset > target.forward_segment.weight_offset
}

pub fn needs_loop_backwards(source: &Phantom, target: &Phantom) -> bool {
    source.reverse_segment.enabled
        && target.reverse_segment.enabled
        && source.reverse_segment.id == target.reverse_segment.id
        && source.reverse_segment.weight_offset > target.reverse_segment.weight_offset
}

/// Upstream checks for a via route request: every phantom must expose at
/// least one enabled segment and consecutive pairs must share their
/// waypoint phantom.
pub fn validate_phantom_pairs(phantom_pairs: &[PhantomPair]) -> Result<(), RoutingError> {
    for (index, pair) in phantom_pairs.iter().enumerate() {
        if !pair.source.is_routable() {
            return Err(RoutingError::PhantomNotRoutable(index));
        }

        if !pair.target.is_routable() {
            return Err(RoutingError::PhantomNotRoutable(index + 1));
        }
    }

    for (index, window) in phantom_pairs.windows(2).enumerate() {
        if window[0].target != window[1].source {
            return Err(RoutingError::DiscontiguousWaypoints(index));
        }
    }

    Ok(())
}
