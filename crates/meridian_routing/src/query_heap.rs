use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;

use crate::types::NodeId;
use crate::weight::{INVALID_WEIGHT, Weight};

#[derive(Eq, Copy, Clone, Debug)]
pub struct HeapItem {
    pub node_id: NodeId,
    pub weight: Weight,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.weight == other.weight
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

struct NodeEntry {
    weight: Weight,
    parent: NodeId,
    settled: bool,
}

/// Lazy-deletion priority queue with per-node bookkeeping. A seed entry is
/// its own parent, which is how the search tells a zero-hop meeting from a
/// genuine traversal.
pub struct QueryHeap {
    queue: BinaryHeap<HeapItem>,
    entries: FxHashMap<NodeId, NodeEntry>,
}

impl QueryHeap {
    pub fn new() -> Self {
        QueryHeap {
            queue: BinaryHeap::new(),
            entries: FxHashMap::default(),
        }
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.entries.clear();
    }

    pub fn reserve(&mut self, capacity_hint: usize) {
        self.entries.reserve(capacity_hint);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn insert(&mut self, node_id: NodeId, weight: Weight, parent: NodeId) {
        self.entries.insert(
            node_id,
            NodeEntry {
                weight,
                parent,
                settled: false,
            },
        );
        self.queue.push(HeapItem { node_id, weight });
    }

    pub fn pop(&mut self) -> Option<HeapItem> {
        self.queue.pop()
    }

    /// Empties the queue while keeping node entries for path
    /// reconstruction.
    pub fn drain_queue(&mut self) {
        self.queue.clear();
    }

    pub fn weight(&self, node_id: NodeId) -> Weight {
        self.entries
            .get(&node_id)
            .map(|entry| entry.weight)
            .unwrap_or(INVALID_WEIGHT)
    }

    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.entries.get(&node_id).map(|entry| entry.parent)
    }

    pub fn is_seed(&self, node_id: NodeId) -> bool {
        self.parent(node_id) == Some(node_id)
    }

    pub fn settle(&mut self, node_id: NodeId) {
        if let Some(entry) = self.entries.get_mut(&node_id) {
            entry.settled = true;
        }
    }

    pub fn is_settled(&self, node_id: NodeId) -> bool {
        self.entries
            .get(&node_id)
            .map(|entry| entry.settled)
            .unwrap_or(false)
    }
}

impl Default for QueryHeap {
    fn default() -> Self {
        QueryHeap::new()
    }
}
