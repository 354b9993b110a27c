// Pool Types

use soroban_sdk::{contracttype, Address};

// ============================================================
// POOL CONFIGURATION
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Deployer; the only address allowed to change fees
    pub owner: Address,
    /// Asset A, the base asset paired against the token
    pub base: Address,
    /// Asset B, the token being bootstrapped
    pub token: Address,
    /// Swap fee in basis points, retained in the pool
    pub swap_fee_bps: u32,
    /// Fixed deduction from each burn output, retained in the pool
    pub burn_fee: i128,
}

// ============================================================
// RESERVES
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Reserves {
    /// Base asset held by the pool
    pub reserve_a: i128,
    /// Token held by the pool
    pub reserve_b: i128,
}

impl Reserves {
    pub fn is_empty(&self) -> bool {
        self.reserve_a <= 0 || self.reserve_b <= 0
    }

    /// Reserves as seen from the input side of a swap: `(reserve_in, reserve_out)`
    pub fn oriented(&self, base_in: bool) -> (i128, i128) {
        if base_in {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        }
    }
}
