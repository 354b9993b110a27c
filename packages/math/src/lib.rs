// Launchpad Math Package

#![no_std]

pub mod constants;
pub mod liquidity;
pub mod pricing;
pub mod sqrt;
pub mod wide;

// Re-export commonly used items from constants
pub use constants::*;

pub use sqrt::{sqrt_u128, sqrt_u256};

pub use wide::{from_u256, mul_div, mul_wide, to_u256};

pub use pricing::{get_amount_out, quote};

pub use liquidity::{
    initial_liquidity,
    pro_rata_share,
    proportional_liquidity,
    split_initial_liquidity,
};
