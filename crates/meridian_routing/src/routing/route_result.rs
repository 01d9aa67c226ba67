use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::phantom::PhantomPair;
use crate::types::NodeId;
use crate::weight::{INVALID_WEIGHT, Weight};

/// One expanded node of a route leg.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub node: NodeId,
    pub location: Point<f64>,
}

/// The assembled via route. An empty `unpacked_path_segments` means no
/// route exists; per-leg traversal flags record whether a leg entered or
/// left its waypoint against the snapped edge's forward direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InternalRouteResult {
    pub segment_end_coordinates: Vec<PhantomPair>,
    pub unpacked_path_segments: Vec<Vec<PathData>>,
    pub source_traversed_in_reverse: Vec<bool>,
    pub target_traversed_in_reverse: Vec<bool>,
    pub shortest_path_weight: Weight,
}

impl InternalRouteResult {
    pub fn is_valid(&self) -> bool {
        !self.unpacked_path_segments.is_empty()
    }
}

impl Default for InternalRouteResult {
    fn default() -> Self {
        InternalRouteResult {
            segment_end_coordinates: Vec::new(),
            unpacked_path_segments: Vec::new(),
            source_traversed_in_reverse: Vec::new(),
            target_traversed_in_reverse: Vec::new(),
            shortest_path_weight: INVALID_WEIGHT,
        }
    }
}
