use crate::graph::RoutingFacade;
use crate::phantom::{PhantomPair, needs_loop_backwards, needs_loop_forward};
use crate::search_space::SearchSpace;
use crate::weight::Weight;

use super::engine::{LegResult, SameEdgePath, SearchAlgorithm};

/// Falls back to the on-edge path when the bidirectional search found
/// nothing better than the degenerate candidate it was bounded by.
fn merge_same_edge(mut leg: LegResult, same_edge: SameEdgePath) -> LegResult {
    if !leg.is_valid() && same_edge.is_valid() {
        leg.packed_path.push(same_edge.node);
        leg.weight = same_edge.weight;
    }

    leg
}

/// One leg with a permitted U-turn at the target: both target orientations
/// are seeded at once and a single result covers whichever the search
/// reached. No loop forcing; the same-edge candidate covers on-edge trips.
pub(crate) fn search_with_uturn<F, A>(
    facade: &F,
    algorithm: &A,
    space: &mut SearchSpace,
    pair: &PhantomPair,
    weight_to_forward: Weight,
    weight_to_reverse: Weight,
    seed_target_forward: bool,
    seed_target_reverse: bool,
) -> LegResult
where
    F: RoutingFacade,
    A: SearchAlgorithm<F>,
{
    let same_edge = algorithm.seed_heaps(
        facade,
        space,
        pair,
        weight_to_forward,
        weight_to_reverse,
        seed_target_forward,
        seed_target_reverse,
    );

    let leg = algorithm.search(facade, space, pair, false, false, same_edge.weight);

    merge_same_edge(leg, same_edge)
}

/// One leg without a U-turn at the target: up to two subsearches, one per
/// enabled target orientation, each with its own loop-forcing flag.
pub(crate) fn search_directed<F, A>(
    facade: &F,
    algorithm: &A,
    space: &mut SearchSpace,
    pair: &PhantomPair,
    weight_to_forward: Weight,
    weight_to_reverse: Weight,
    seed_target_forward: bool,
    seed_target_reverse: bool,
) -> (LegResult, LegResult)
where
    F: RoutingFacade,
    A: SearchAlgorithm<F>,
{
    let mut leg_to_forward = LegResult::invalid();
    let mut leg_to_reverse = LegResult::invalid();

    if seed_target_forward {
        let same_edge = algorithm.seed_heaps(
            facade,
            space,
            pair,
            weight_to_forward,
            weight_to_reverse,
            true,
            false,
        );

        let leg = algorithm.search(
            facade,
            space,
            pair,
            needs_loop_forward(&pair.source, &pair.target),
            false,
            same_edge.weight,
        );

        leg_to_forward = merge_same_edge(leg, same_edge);
    }

    if seed_target_reverse {
        let same_edge = algorithm.seed_heaps(
            facade,
            space,
            pair,
            weight_to_forward,
            weight_to_reverse,
            false,
            true,
        );

        let leg = algorithm.search(
            facade,
            space,
            pair,
            false,
            needs_loop_backwards(&pair.source, &pair.target),
            same_edge.weight,
        );

        leg_to_reverse = merge_same_edge(leg, same_edge);
    }

    (leg_to_forward, leg_to_reverse)
}
