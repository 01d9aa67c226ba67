use crate::types::{EdgeId, NodeId};

pub const INVALID_NODE: NodeId = usize::MAX;
pub const INVALID_EDGE: EdgeId = usize::MAX;
