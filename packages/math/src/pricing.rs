// Constant-product pricing

use soroban_sdk::Env;

use crate::constants::{BPS_DENOMINATOR, MAX_FEE_BPS};
use crate::wide::{from_u256, mul_div, mul_wide, to_u256};

/// Output of a swap against reserves `(reserve_in, reserve_out)`.
///
/// ```text
/// in_with_fee = amount_in * (10000 - fee_bps)
/// amount_out  = in_with_fee * reserve_out / (reserve_in * 10000 + in_with_fee)
/// ```
///
/// This is `reserve_out - reserve_in * reserve_out / (reserve_in + in_after_fee)`
/// with the division rounded against the trader, so the product of the
/// reserves never shrinks. Returns None for empty reserves, non-positive
/// input or an out-of-range fee.
pub fn get_amount_out(
    env: &Env,
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
    fee_bps: u32,
) -> Option<i128> {
    if amount_in <= 0 || reserve_in <= 0 || reserve_out <= 0 || fee_bps > MAX_FEE_BPS {
        return None;
    }

    let fee_multiplier = (BPS_DENOMINATOR - fee_bps) as i128;
    let in_with_fee = mul_wide(env, amount_in, fee_multiplier)?;

    let numerator = in_with_fee.mul(&to_u256(env, reserve_out)?);
    let denominator = mul_wide(env, reserve_in, BPS_DENOMINATOR as i128)?.add(&in_with_fee);

    from_u256(&numerator.div(&denominator))
}

/// Spot-price equivalent of `amount` at the current reserve ratio, fee-free.
pub fn quote(env: &Env, amount: i128, reserve_in: i128, reserve_out: i128) -> Option<i128> {
    if amount <= 0 || reserve_in <= 0 || reserve_out < 0 {
        return None;
    }
    mul_div(env, amount, reserve_out, reserve_in)
}
