// Constants shared by the pool and the crowdsale.
//
// Grouped by concern; amounts are in the smallest unit of the asset they
// describe.

// ============================================================
// LIQUIDITY CONSTANTS
// ============================================================

/// Liquidity tokens locked forever on the first mint of a pool.
/// Keeps total supply above zero so later mints never divide by zero and an
/// attacker cannot inflate the value of a single liquidity unit.
pub const MINIMUM_LIQUIDITY: i128 = 1000;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Basis point denominator (100% = 10000 bps)
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Maximum swap fee in basis points
pub const MAX_FEE_BPS: u32 = 10_000;

/// Default swap fee (0.3% = 30 bps)
pub const DEFAULT_SWAP_FEE_BPS: u32 = 30;

/// Default fixed deduction applied to each burn output
pub const DEFAULT_BURN_FEE: i128 = 0;

// ============================================================
// UNIT CONSTANTS
// ============================================================

/// One whole unit of a 7-decimal Stellar asset
pub const ONE_UNIT: i128 = 10_000_000;
