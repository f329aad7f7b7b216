pub const HIT_MANY: i64 = 100_000;
pub const FILL_MANY: i64 = 10_000;
