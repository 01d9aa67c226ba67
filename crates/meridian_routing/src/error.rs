use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("phantom at waypoint {0} has no enabled segment")]
    PhantomNotRoutable(usize),
    #[error("waypoint {0} does not share its phantom with the next pair")]
    DiscontiguousWaypoints(usize),
}
