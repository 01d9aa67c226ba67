pub mod bidirectional_dijkstra;
pub mod engine;
pub(crate) mod leg_search;
pub mod route_result;
pub(crate) mod search_direction;
pub mod shortest_path;
