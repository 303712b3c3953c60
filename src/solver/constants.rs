pub const TARGET: i64 = 24;
pub const HAND_SIZE: usize = 4;
/// Binary operators needed to reduce a full hand to one value
pub const OPERATOR_SLOTS: usize = HAND_SIZE - 1;
