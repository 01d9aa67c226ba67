use std::mem;

use tracing::debug;

use crate::graph::RoutingFacade;
use crate::phantom::PhantomPair;
use crate::search_space::SearchSpace;
use crate::types::NodeId;
use crate::weight::{INVALID_WEIGHT, Weight};

use super::engine::{LegResult, SearchAlgorithm};
use super::leg_search::{search_directed, search_with_uturn};
use super::route_result::InternalRouteResult;

/// One of the two route candidates threaded through the waypoint dynamic
/// program: the best route so far ending in a fixed orientation at the most
/// recent waypoint.
///
/// A dead prefix is fully reset: empty buffers, invalid weight. While live,
/// `leg_offsets[i]` is where leg `i` starts inside `packed_path`.
#[derive(Clone, Debug)]
struct RoutePrefix {
    packed_path: Vec<NodeId>,
    leg_offsets: Vec<usize>,
    weight: Weight,
    live: bool,
}

impl RoutePrefix {
    fn start(live: bool) -> Self {
        RoutePrefix {
            packed_path: Vec::new(),
            leg_offsets: Vec::new(),
            weight: 0,
            live,
        }
    }

    /// The weight the next leg continues from, or the invalid sentinel when
    /// this orientation holds no candidate.
    fn seed_weight(&self) -> Weight {
        if self.live { self.weight } else { INVALID_WEIGHT }
    }

    fn append_leg(&mut self, leg: &LegResult) {
        self.leg_offsets.push(self.packed_path.len());
        self.packed_path.extend_from_slice(&leg.packed_path);
        self.weight = leg.weight;
        self.live = true;
    }

    fn reset(&mut self) {
        self.packed_path.clear();
        self.leg_offsets.clear();
        self.weight = INVALID_WEIGHT;
        self.live = false;
    }
}

/// Finds the minimum-weight route visiting every waypoint in order.
///
/// Each iteration runs one leg search seeded with the accumulated weights of
/// both prefixes, resolves which prefix each result continues, and commits
/// the new legs. The leg entering a waypoint constrains the direction the
/// next leg may leave it unless U-turns at waypoints are permitted.
///
/// Returns a result with no path segments when any leg is unreachable in
/// both orientations.
pub fn shortest_path_search<F, A>(
    space: &mut SearchSpace,
    facade: &F,
    algorithm: &A,
    phantom_pairs: &[PhantomPair],
    continue_straight_at_waypoint: Option<bool>,
) -> InternalRouteResult
where
    F: RoutingFacade,
    A: SearchAlgorithm<F>,
{
    let mut route = InternalRouteResult {
        segment_end_coordinates: phantom_pairs.to_vec(),
        ..InternalRouteResult::default()
    };

    if phantom_pairs.is_empty() {
        return route;
    }

    let allow_uturn_at_waypoint =
        !continue_straight_at_waypoint.unwrap_or_else(|| facade.continue_straight_default());

    debug!(
        "via search over {} leg(s), uturns at waypoints {}",
        phantom_pairs.len(),
        if allow_uturn_at_waypoint {
            "allowed"
        } else {
            "forbidden"
        }
    );

    space.reset(facade.node_count());

    let first_source = &phantom_pairs[0].source;
    debug_assert!(first_source.is_routable());

    let mut prefix_to_forward = RoutePrefix::start(first_source.forward_segment.enabled);
    let mut prefix_to_reverse = RoutePrefix::start(first_source.reverse_segment.enabled);

    for (leg_index, pair) in phantom_pairs.iter().enumerate() {
        let source = &pair.source;
        let target = &pair.target;

        let search_to_forward_node = target.forward_segment.enabled;
        let search_to_reverse_node = target.reverse_segment.enabled;

        debug_assert!(!prefix_to_forward.live || source.forward_segment.enabled);
        debug_assert!(!prefix_to_reverse.live || source.reverse_segment.enabled);

        let (new_leg_to_forward, new_leg_to_reverse) =
            if search_to_forward_node || search_to_reverse_node {
                if allow_uturn_at_waypoint {
                    let leg = search_with_uturn(
                        facade,
                        algorithm,
                        space,
                        pair,
                        prefix_to_forward.seed_weight(),
                        prefix_to_reverse.seed_weight(),
                        search_to_forward_node,
                        search_to_reverse_node,
                    );

                    if !search_to_forward_node {
                        // Only the reverse orientation can take the result;
                        // the forward slot keeps the invalid sentinel that
                        // guards every later read.
                        (LegResult::invalid(), leg)
                    } else if search_to_reverse_node {
                        // A waypoint with permitted U-turns does not
                        // distinguish entry orientations, so both slots
                        // carry the same leg.
                        (leg.clone(), leg)
                    } else {
                        (leg, LegResult::invalid())
                    }
                } else {
                    search_directed(
                        facade,
                        algorithm,
                        space,
                        pair,
                        prefix_to_forward.seed_weight(),
                        prefix_to_reverse.seed_weight(),
                        search_to_forward_node,
                        search_to_reverse_node,
                    )
                }
            } else {
                (LegResult::invalid(), LegResult::invalid())
            };

        if !new_leg_to_forward.is_valid() && !new_leg_to_reverse.is_valid() {
            debug!("leg {} unreachable in both orientations", leg_index);
            return route;
        }

        // Each new leg starts with the segment it left the shared waypoint
        // on, which tells us which prefix it continues.
        if leg_index > 0 {
            let entry_to_forward = new_leg_to_forward.packed_path.first().copied();
            let entry_to_reverse = new_leg_to_reverse.packed_path.first().copied();

            let forward_to_forward = new_leg_to_forward.is_valid()
                && entry_to_forward == Some(source.forward_segment.id);
            let reverse_to_forward = new_leg_to_forward.is_valid()
                && entry_to_forward == Some(source.reverse_segment.id);
            let forward_to_reverse = new_leg_to_reverse.is_valid()
                && entry_to_reverse == Some(source.forward_segment.id);
            let reverse_to_reverse = new_leg_to_reverse.is_valid()
                && entry_to_reverse == Some(source.reverse_segment.id);

            debug_assert!(!(forward_to_forward && reverse_to_forward));
            debug_assert!(!(forward_to_reverse && reverse_to_reverse));

            if forward_to_forward && forward_to_reverse {
                // Both legs leave through the forward orientation; the
                // reverse-ending leg needs its own copy of the forward
                // prefix.
                prefix_to_reverse.clone_from(&prefix_to_forward);
            } else if reverse_to_forward && reverse_to_reverse {
                prefix_to_forward.clone_from(&prefix_to_reverse);
            } else if reverse_to_forward || forward_to_reverse {
                // Crossed continuations: exchange the slots so each leg
                // lands on the prefix it actually extends.
                mem::swap(&mut prefix_to_forward, &mut prefix_to_reverse);
            }
        }

        if new_leg_to_forward.is_valid() {
            debug_assert!(target.forward_segment.enabled);
            prefix_to_forward.append_leg(&new_leg_to_forward);
        } else {
            prefix_to_forward.reset();
        }

        if new_leg_to_reverse.is_valid() {
            debug_assert!(target.reverse_segment.enabled);
            prefix_to_reverse.append_leg(&new_leg_to_reverse);
        } else {
            prefix_to_reverse.reset();
        }
    }

    debug_assert!(prefix_to_forward.live || prefix_to_reverse.live);

    let forward_wins = prefix_to_forward.weight < prefix_to_reverse.weight
        || (prefix_to_forward.weight == prefix_to_reverse.weight
            && prefix_to_forward.packed_path.len() <= prefix_to_reverse.packed_path.len());

    let winner = if forward_wins {
        &mut prefix_to_forward
    } else {
        &mut prefix_to_reverse
    };

    winner.leg_offsets.push(winner.packed_path.len());
    debug_assert_eq!(winner.leg_offsets.len(), phantom_pairs.len() + 1);

    unpack_legs(
        facade,
        algorithm,
        phantom_pairs,
        &winner.packed_path,
        &winner.leg_offsets,
        winner.weight,
        &mut route,
    );

    route
}

fn unpack_legs<F, A>(
    facade: &F,
    algorithm: &A,
    phantom_pairs: &[PhantomPair],
    packed_path: &[NodeId],
    leg_offsets: &[usize],
    shortest_path_weight: Weight,
    route: &mut InternalRouteResult,
) where
    F: RoutingFacade,
    A: SearchAlgorithm<F>,
{
    route.shortest_path_weight = shortest_path_weight;

    for (leg_index, pair) in phantom_pairs.iter().enumerate() {
        let leg = &packed_path[leg_offsets[leg_index]..leg_offsets[leg_index + 1]];
        debug_assert!(!leg.is_empty());

        route
            .unpacked_path_segments
            .push(algorithm.unpack_segment(facade, pair, leg));

        route
            .source_traversed_in_reverse
            .push(leg.first() != Some(&pair.source.forward_segment.id));
        route
            .target_traversed_in_reverse
            .push(leg.last() != Some(&pair.target.forward_segment.id));
    }
}
