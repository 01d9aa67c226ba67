#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum SearchDirection {
    Forward,
    Backward,
}

impl SearchDirection {
    pub fn is_forward(&self) -> bool {
        matches!(self, SearchDirection::Forward)
    }
}
