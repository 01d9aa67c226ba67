/// Edge-expanded graph weights are signed: heap seeds subtract the partial
/// weight between a segment entry and the snapped location, which can push a
/// seed below zero.
pub type Weight = i32;

pub const INVALID_WEIGHT: Weight = Weight::MAX;

/// Addition that saturates at `INVALID_WEIGHT` instead of wrapping.
pub fn weight_add(a: Weight, b: Weight) -> Weight {
    if a == INVALID_WEIGHT || b == INVALID_WEIGHT {
        return INVALID_WEIGHT;
    }

    a.saturating_add(b)
}
