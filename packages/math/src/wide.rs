// SPDX-License-Identifier: MIT
// 256-bit intermediate arithmetic for i128 token amounts

use soroban_sdk::{Env, U256};

/// Lift a non-negative amount into the host 256-bit type.
/// Returns None for negative input.
#[inline]
pub fn to_u256(env: &Env, amount: i128) -> Option<U256> {
    if amount < 0 {
        return None;
    }
    Some(U256::from_u128(env, amount as u128))
}

/// Narrow a 256-bit value back to an amount.
/// Returns None when it does not fit in i128.
#[inline]
pub fn from_u256(value: &U256) -> Option<i128> {
    value
        .to_u128()
        .filter(|v| *v <= i128::MAX as u128)
        .map(|v| v as i128)
}

/// `a * b` as a 256-bit value (both factors must be non-negative)
pub fn mul_wide(env: &Env, a: i128, b: i128) -> Option<U256> {
    Some(to_u256(env, a)?.mul(&to_u256(env, b)?))
}

/// Calculates `floor(a * b / denominator)` without intermediate overflow.
///
/// Returns None on negative input, a non-positive denominator, or a quotient
/// that does not fit in i128.
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Option<i128> {
    if denominator <= 0 {
        return None;
    }
    let product = mul_wide(env, a, b)?;
    from_u256(&product.div(&to_u256(env, denominator)?))
}
