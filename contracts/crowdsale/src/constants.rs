// Default sale parameters, in 7-decimal base-asset units

use launchpad_math::ONE_UNIT;

pub const DEFAULT_SEED_INVESTOR_CAP: i128 = 1_500 * ONE_UNIT;
pub const DEFAULT_SEED_GOAL: i128 = 15_000 * ONE_UNIT;

pub const DEFAULT_GENERAL_INVESTOR_CAP: i128 = 1_000 * ONE_UNIT;
pub const DEFAULT_GENERAL_GOAL: i128 = 30_000 * ONE_UNIT;

/// 5 token per base unit
pub const DEFAULT_TOKEN_RATE: i128 = 5;
