// Presentation-tier limits and seed data

/// Largest heap the UI accepts
pub const MAX_HEAP_SIZE: usize = 24;

/// Accepted operand range (inclusive)
pub const MIN_VALUE: i32 = -999;
pub const MAX_VALUE: i32 = 999;

/// Heap shown on startup
pub const INITIAL_HEAP_VALUES: [i32; 9] = [45, 20, 14, 12, 31, 7, 11, 13, 7];

/// Values both sides of the comparison view start from
pub const COMPARISON_SEED_VALUES: [i32; 5] = [7, 12, 11, 20, 14];

/// How many values one random fill inserts
pub const RANDOM_FILL_COUNT: usize = 5;

/// Random fill draws from 0..RANDOM_VALUE_LIMIT
pub const RANDOM_VALUE_LIMIT: i32 = 100;
