use crate::query_heap::QueryHeap;

/// Per-query scratch state: the two frontiers of the bidirectional search.
///
/// A query owns its `SearchSpace` exclusively for the duration of the call.
/// Instances may be pooled across queries and are cleared on entry; parallel
/// queries each hold their own instance.
pub struct SearchSpace {
    pub forward_heap: QueryHeap,
    pub backward_heap: QueryHeap,
}

impl SearchSpace {
    pub fn new() -> Self {
        SearchSpace {
            forward_heap: QueryHeap::new(),
            backward_heap: QueryHeap::new(),
        }
    }

    pub fn reset(&mut self, node_count_hint: usize) {
        self.forward_heap.clear();
        self.backward_heap.clear();
        self.forward_heap.reserve(node_count_hint.min(1024));
        self.backward_heap.reserve(node_count_hint.min(1024));
    }
}

impl Default for SearchSpace {
    fn default() -> Self {
        SearchSpace::new()
    }
}
