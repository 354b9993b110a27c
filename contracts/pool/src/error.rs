// Error handling module for the liquidity pool
//
// - Typed errors via the contracterror derive macro so callers can match on
//   the failure category
// - Codes grouped by hundreds per category

use soroban_sdk::contracterror;

// ============================================================
// CONTRACT ERRORS
// ============================================================

/// Errors returned by pool entry points. Any error aborts the whole call,
/// including token movements made earlier in the same invocation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    // Initialization errors (100-199)
    /// Pool has already been initialized
    AlreadyInitialized = 100,
    /// Pool has not been initialized
    NotInitialized = 101,

    // Authorization errors (200-299)
    /// Caller is not the pool owner
    Unauthorized = 200,

    // Value errors (300-399)
    /// Attached base-asset value differs from the declared amount
    ValueMismatch = 300,

    // Allowance and balance errors (400-499)
    /// Pool is not approved to pull enough of the token
    InsufficientAllowance = 400,
    /// Caller holds fewer liquidity tokens than requested
    InsufficientBalance = 401,

    // Liquidity errors (500-599)
    /// Reserves cannot cover the requested output
    InsufficientLiquidity = 500,
    /// Deposit is too small to issue any liquidity
    InsufficientLiquidityMinted = 501,
    /// Burn would return nothing
    InsufficientLiquidityBurned = 502,

    // Input errors (600-699)
    /// Amount must be positive
    InvalidAmount = 600,
    /// Swap fee above 10000 bps or negative burn fee
    InvalidFee = 601,

    // Safety errors (700-799)
    /// Mutating entry point re-entered while a call is in progress
    Reentrant = 700,

    // Math errors (900-999)
    /// Arithmetic overflow
    Overflow = 900,
}
