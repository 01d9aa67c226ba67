use crate::constants::INVALID_NODE;
use crate::graph::{ArcAccess, GeometryAccess, RoutingFacade};
use crate::phantom::{PhantomPair, needs_loop_backwards, needs_loop_forward};
use crate::query_heap::{HeapItem, QueryHeap};
use crate::search_space::SearchSpace;
use crate::types::NodeId;
use crate::weight::{INVALID_WEIGHT, Weight, weight_add};

use super::engine::{LegResult, SameEdgePath, SearchAlgorithm};
use super::route_result::PathData;
use super::search_direction::SearchDirection;

/// Reference one-to-one engine: bidirectional Dijkstra over the
/// edge-expanded graph, seeded directly with phantom segments. It has no
/// state of its own; everything per-query lives in the caller's
/// [`SearchSpace`].
pub struct BidirectionalDijkstra;

impl BidirectionalDijkstra {
    pub fn new() -> Self {
        BidirectionalDijkstra
    }
}

impl Default for BidirectionalDijkstra {
    fn default() -> Self {
        BidirectionalDijkstra::new()
    }
}

/// A seed-to-seed meeting on a shared segment is only a path when it runs
/// with the segment direction; a meeting against it would teleport the
/// route backwards along the edge.
fn against_segment_direction(pair: &PhantomPair, node: NodeId) -> bool {
    (needs_loop_forward(&pair.source, &pair.target) && node == pair.source.forward_segment.id)
        || (needs_loop_backwards(&pair.source, &pair.target)
            && node == pair.source.reverse_segment.id)
}

fn same_edge_path(
    pair: &PhantomPair,
    weight_to_forward: Weight,
    weight_to_reverse: Weight,
    seed_target_forward: bool,
    seed_target_reverse: bool,
) -> SameEdgePath {
    let source = &pair.source;
    let target = &pair.target;
    let mut best = SameEdgePath::invalid();

    if seed_target_forward
        && weight_to_forward != INVALID_WEIGHT
        && source.forward_segment.enabled
        && target.forward_segment.enabled
        && source.forward_segment.id == target.forward_segment.id
        && source.forward_segment.weight_offset <= target.forward_segment.weight_offset
    {
        // The offset difference is non-negative here; only the prefix
        // weight can push the sum toward the sentinel.
        let weight = weight_add(
            weight_to_forward,
            target.forward_segment.weight_offset - source.forward_segment.weight_offset,
        );
        if weight < best.weight {
            best = SameEdgePath {
                node: source.forward_segment.id,
                weight,
            };
        }
    }

    if seed_target_reverse
        && weight_to_reverse != INVALID_WEIGHT
        && source.reverse_segment.enabled
        && target.reverse_segment.enabled
        && source.reverse_segment.id == target.reverse_segment.id
        && source.reverse_segment.weight_offset <= target.reverse_segment.weight_offset
    {
        let weight = weight_add(
            weight_to_reverse,
            target.reverse_segment.weight_offset - source.reverse_segment.weight_offset,
        );
        if weight < best.weight {
            best = SameEdgePath {
                node: source.reverse_segment.id,
                weight,
            };
        }
    }

    best
}

fn routing_step<F>(
    facade: &F,
    space: &mut SearchSpace,
    direction: SearchDirection,
    pair: &PhantomPair,
    force_loop_forward: bool,
    force_loop_backward: bool,
    best_weight: &mut Weight,
    meeting_node: &mut NodeId,
) where
    F: RoutingFacade + ArcAccess,
{
    let (own, other) = match direction {
        SearchDirection::Forward => (&mut space.forward_heap, &space.backward_heap),
        SearchDirection::Backward => (&mut space.backward_heap, &space.forward_heap),
    };

    let Some(HeapItem { node_id, weight }) = own.pop() else {
        return;
    };

    if own.is_settled(node_id) {
        return;
    }

    // Everything still queued is at least as heavy as this item.
    if weight > *best_weight {
        own.drain_queue();
        return;
    }

    let other_weight = other.weight(node_id);
    if other_weight != INVALID_WEIGHT {
        let mut total = weight_add(weight, other_weight);
        if total < *best_weight {
            let (forward_heap, backward_heap): (&QueryHeap, &QueryHeap) = if direction.is_forward()
            {
                (&*own, other)
            } else {
                (other, &*own)
            };

            let seed_meeting =
                forward_heap.is_seed(node_id) && backward_heap.is_seed(node_id);
            let requires_loop = (force_loop_forward && forward_heap.is_seed(node_id))
                || (force_loop_backward && backward_heap.is_seed(node_id))
                || total < 0
                || (seed_meeting && against_segment_direction(pair, node_id));

            if requires_loop {
                total = weight_add(total, facade.self_loop_weight(node_id));
            }

            if total >= 0 && total < *best_weight {
                *best_weight = total;
                *meeting_node = node_id;
            }
        }
    }

    let arcs = match direction {
        SearchDirection::Forward => facade.outgoing_arcs(node_id),
        SearchDirection::Backward => facade.incoming_arcs(node_id),
    };

    for arc in arcs {
        if arc.weight == INVALID_WEIGHT {
            continue;
        }

        let new_weight = weight_add(weight, arc.weight);
        if new_weight != INVALID_WEIGHT
            && !own.is_settled(arc.node)
            && new_weight < own.weight(arc.node)
        {
            own.insert(arc.node, new_weight, node_id);
        }
    }

    own.settle(node_id);
}

/// Walks both parent chains out from the meeting node. Seeds are their own
/// parents, so the chains stop at the phantom segments and the packed path
/// starts with the entry segment and ends with the exit segment.
fn reconstruct_packed_path(space: &SearchSpace, meeting_node: NodeId) -> Vec<NodeId> {
    let mut packed_path = Vec::new();

    let mut node = meeting_node;
    loop {
        packed_path.push(node);
        match space.forward_heap.parent(node) {
            Some(parent) if parent != node => node = parent,
            _ => break,
        }
    }
    packed_path.reverse();

    let mut node = meeting_node;
    while let Some(parent) = space.backward_heap.parent(node) {
        if parent == node {
            break;
        }
        packed_path.push(parent);
        node = parent;
    }

    packed_path
}

impl<F> SearchAlgorithm<F> for BidirectionalDijkstra
where
    F: RoutingFacade + ArcAccess + GeometryAccess,
{
    fn seed_heaps(
        &self,
        _facade: &F,
        space: &mut SearchSpace,
        pair: &PhantomPair,
        weight_to_forward: Weight,
        weight_to_reverse: Weight,
        seed_target_forward: bool,
        seed_target_reverse: bool,
    ) -> SameEdgePath {
        space.forward_heap.clear();
        space.backward_heap.clear();

        let source = &pair.source;
        let target = &pair.target;

        if weight_to_forward != INVALID_WEIGHT && source.forward_segment.enabled {
            space.forward_heap.insert(
                source.forward_segment.id,
                weight_to_forward - source.forward_segment.weight_offset,
                source.forward_segment.id,
            );
        }

        if weight_to_reverse != INVALID_WEIGHT && source.reverse_segment.enabled {
            space.forward_heap.insert(
                source.reverse_segment.id,
                weight_to_reverse - source.reverse_segment.weight_offset,
                source.reverse_segment.id,
            );
        }

        if seed_target_forward && target.forward_segment.enabled {
            space.backward_heap.insert(
                target.forward_segment.id,
                target.forward_segment.weight_offset,
                target.forward_segment.id,
            );
        }

        if seed_target_reverse && target.reverse_segment.enabled {
            space.backward_heap.insert(
                target.reverse_segment.id,
                target.reverse_segment.weight_offset,
                target.reverse_segment.id,
            );
        }

        same_edge_path(
            pair,
            weight_to_forward,
            weight_to_reverse,
            seed_target_forward,
            seed_target_reverse,
        )
    }

    fn search(
        &self,
        facade: &F,
        space: &mut SearchSpace,
        pair: &PhantomPair,
        force_loop_forward: bool,
        force_loop_backward: bool,
        weight_upper_bound: Weight,
    ) -> LegResult {
        let mut best_weight = weight_upper_bound;
        let mut meeting_node = INVALID_NODE;

        while !space.forward_heap.is_empty() || !space.backward_heap.is_empty() {
            if !space.forward_heap.is_empty() {
                routing_step(
                    facade,
                    space,
                    SearchDirection::Forward,
                    pair,
                    force_loop_forward,
                    force_loop_backward,
                    &mut best_weight,
                    &mut meeting_node,
                );
            }

            if !space.backward_heap.is_empty() {
                routing_step(
                    facade,
                    space,
                    SearchDirection::Backward,
                    pair,
                    force_loop_forward,
                    force_loop_backward,
                    &mut best_weight,
                    &mut meeting_node,
                );
            }
        }

        if meeting_node == INVALID_NODE {
            return LegResult::invalid();
        }

        LegResult {
            packed_path: reconstruct_packed_path(space, meeting_node),
            weight: best_weight,
        }
    }

    fn unpack_segment(&self, facade: &F, _pair: &PhantomPair, packed: &[NodeId]) -> Vec<PathData> {
        packed
            .iter()
            .map(|&node| PathData {
                node,
                location: facade.node_location(node),
            })
            .collect()
    }
}
