use crate::constants::INVALID_NODE;
use crate::graph::RoutingFacade;
use crate::phantom::PhantomPair;
use crate::search_space::SearchSpace;
use crate::types::NodeId;
use crate::weight::{INVALID_WEIGHT, Weight};

use super::route_result::PathData;

/// Outcome of one leg search: the packed node sequence and its cumulative
/// weight. An invalid weight means unreachable; an empty path with a finite
/// weight is the intermediate same-edge case before the degenerate merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegResult {
    pub packed_path: Vec<NodeId>,
    pub weight: Weight,
}

impl LegResult {
    pub fn invalid() -> Self {
        LegResult {
            packed_path: Vec::new(),
            weight: INVALID_WEIGHT,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.weight != INVALID_WEIGHT
    }
}

/// A path that never leaves the segment both phantoms snapped onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SameEdgePath {
    pub node: NodeId,
    pub weight: Weight,
}

impl SameEdgePath {
    pub fn invalid() -> Self {
        SameEdgePath {
            node: INVALID_NODE,
            weight: INVALID_WEIGHT,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.weight != INVALID_WEIGHT
    }
}

/// The one-to-one engine the waypoint dynamic program runs its legs on.
/// Implementations own the search semantics; the caller owns the scratch
/// space and the phantom bookkeeping.
pub trait SearchAlgorithm<F: RoutingFacade> {
    /// Clears both heaps and seeds them from the phantom pair: each enabled
    /// source segment whose accumulated prefix weight is finite goes into
    /// the forward heap at `weight_in - weight_offset`, each selected
    /// enabled target segment into the backward heap at `weight_offset`.
    /// Returns the best same-edge degenerate candidate.
    fn seed_heaps(
        &self,
        facade: &F,
        space: &mut SearchSpace,
        pair: &PhantomPair,
        weight_to_forward: Weight,
        weight_to_reverse: Weight,
        seed_target_forward: bool,
        seed_target_reverse: bool,
    ) -> SameEdgePath;

    /// Runs the bidirectional search over the seeded heaps. Only meetings
    /// strictly below `weight_upper_bound` are accepted, so the result is
    /// invalid whenever nothing beats the degenerate candidate. The
    /// loop-forcing flags reject zero-hop meetings at the corresponding
    /// seed.
    fn search(
        &self,
        facade: &F,
        space: &mut SearchSpace,
        pair: &PhantomPair,
        force_loop_forward: bool,
        force_loop_backward: bool,
        weight_upper_bound: Weight,
    ) -> LegResult;

    /// Expands one packed leg into per-node path data.
    fn unpack_segment(&self, facade: &F, pair: &PhantomPair, packed: &[NodeId]) -> Vec<PathData>;
}
