// SPDX-License-Identifier: MIT
// Liquidity Token Sizing

use soroban_sdk::Env;

use crate::constants::MINIMUM_LIQUIDITY;
use crate::sqrt::sqrt_u256;
use crate::wide::{from_u256, mul_div, mul_wide};

/// Liquidity issued by the first deposit: `floor(sqrt(amount_a * amount_b))`.
///
/// The caller locks `MINIMUM_LIQUIDITY` of this; see [`split_initial_liquidity`].
pub fn initial_liquidity(env: &Env, amount_a: i128, amount_b: i128) -> Option<i128> {
    let product = mul_wide(env, amount_a, amount_b)?;
    from_u256(&sqrt_u256(env, &product))
}

/// Split first-mint issuance into `(locked, credited)`.
/// Returns None when issuance does not exceed the locked floor.
pub fn split_initial_liquidity(issued: i128) -> Option<(i128, i128)> {
    if issued <= MINIMUM_LIQUIDITY {
        return None;
    }
    Some((MINIMUM_LIQUIDITY, issued - MINIMUM_LIQUIDITY))
}

/// Liquidity issued by a deposit into a live pool.
///
/// Takes the smaller of the two reserve ratios so an unbalanced deposit
/// cannot claim more than its weaker side is worth.
pub fn proportional_liquidity(
    env: &Env,
    amount_a: i128,
    amount_b: i128,
    reserve_a: i128,
    reserve_b: i128,
    total_supply: i128,
) -> Option<i128> {
    let by_a = mul_div(env, amount_a, total_supply, reserve_a)?;
    let by_b = mul_div(env, amount_b, total_supply, reserve_b)?;
    Some(by_a.min(by_b))
}

/// Pro-rata share of a reserve for `liquidity` out of `total_supply`.
/// Truncates; the remainder stays in the pool.
pub fn pro_rata_share(
    env: &Env,
    liquidity: i128,
    reserve: i128,
    total_supply: i128,
) -> Option<i128> {
    mul_div(env, liquidity, reserve, total_supply)
}
