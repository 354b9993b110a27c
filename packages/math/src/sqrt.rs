// SPDX-License-Identifier: MIT
// Integer Square Root

use soroban_sdk::{Env, U256};

/// Floor square root of a `u128`.
///
/// Newton iteration seeded at `2^ceil(bits/2)`, which is never below the true
/// root, so the sequence decreases monotonically until it settles.
pub fn sqrt_u128(value: u128) -> u128 {
    if value < 2 {
        return value;
    }

    let bits = 128 - value.leading_zeros();
    let mut x = 1u128 << ((bits + 1) / 2);

    loop {
        let y = (x + value / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Floor square root of a 256-bit value.
///
/// Values that fit in 128 bits take the native path; wider values run the
/// same Newton iteration on the host `U256` type.
pub fn sqrt_u256(env: &Env, value: &U256) -> U256 {
    if let Some(small) = value.to_u128() {
        return U256::from_u128(env, sqrt_u128(small));
    }

    let bits = bit_length(env, value);
    let mut x = U256::from_u32(env, 1).shl((bits + 1) / 2);

    loop {
        let y = x.add(&value.div(&x)).shr(1);
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Number of significant bits in a non-zero value
fn bit_length(env: &Env, value: &U256) -> u32 {
    let zero = U256::from_u32(env, 0);

    // invariant: value >> lo != 0, value >> hi == 0
    let mut lo = 0u32;
    let mut hi = 256u32;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if value.shr(mid) != zero {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    hi
}
