use launchpad_math::liquidity::*;
use launchpad_math::{mul_div, MINIMUM_LIQUIDITY, ONE_UNIT};
use soroban_sdk::Env;

// ============================================================
// FIRST MINT TESTS
// ============================================================

#[test]
fn test_initial_liquidity_geometric_mean() {
    let env = Env::default();

    let issued = initial_liquidity(&env, 100 * ONE_UNIT, 500 * ONE_UNIT);
    assert_eq!(issued, Some(2_236_067_977));
}

#[test]
fn test_initial_liquidity_equal_amounts() {
    let env = Env::default();

    let issued = initial_liquidity(&env, 100 * ONE_UNIT, 100 * ONE_UNIT);
    assert_eq!(issued, Some(100 * ONE_UNIT));
}

#[test]
fn test_initial_liquidity_large_amounts() {
    let env = Env::default();

    // 18-decimal amounts overflow i128 when multiplied
    let a = 100_000_000_000_000_000_000i128;
    let b = 500_000_000_000_000_000_000i128;
    let issued = initial_liquidity(&env, a, b).unwrap();

    assert_eq!(issued, 223_606_797_749_978_969_640);
}

#[test]
fn test_initial_liquidity_negative_rejected() {
    let env = Env::default();
    assert_eq!(initial_liquidity(&env, -1, 100), None);
}

#[test]
fn test_split_initial_liquidity() {
    assert_eq!(split_initial_liquidity(2_236_067_977), Some((MINIMUM_LIQUIDITY, 2_236_066_977)));
    assert_eq!(split_initial_liquidity(MINIMUM_LIQUIDITY + 1), Some((MINIMUM_LIQUIDITY, 1)));
}

#[test]
fn test_split_initial_liquidity_at_floor() {
    // sqrt(100 * 500) = 223 smallest units cannot cover the floor
    assert_eq!(split_initial_liquidity(223), None);
    assert_eq!(split_initial_liquidity(MINIMUM_LIQUIDITY), None);
}

// ============================================================
// PROPORTIONAL MINT TESTS
// ============================================================

#[test]
fn test_proportional_liquidity_balanced() {
    let env = Env::default();

    // Doubling the pool doubles the supply
    let minted = proportional_liquidity(&env, 100, 500, 100, 500, 1_000);
    assert_eq!(minted, Some(1_000));
}

#[test]
fn test_proportional_liquidity_takes_smaller_side() {
    let env = Env::default();

    // Excess base asset is not rewarded
    let minted = proportional_liquidity(&env, 1_000, 500, 100, 500, 1_000);
    assert_eq!(minted, Some(1_000));

    let minted = proportional_liquidity(&env, 50, 5_000, 100, 500, 1_000);
    assert_eq!(minted, Some(500));
}

#[test]
fn test_proportional_liquidity_empty_reserve() {
    let env = Env::default();
    assert_eq!(proportional_liquidity(&env, 10, 10, 0, 500, 1_000), None);
}

// ============================================================
// BURN SHARE TESTS
// ============================================================

#[test]
fn test_pro_rata_share_truncates() {
    let env = Env::default();

    assert_eq!(pro_rata_share(&env, 1, 10, 3), Some(3));
    assert_eq!(pro_rata_share(&env, 999_999_000, 1_000_000_000, 1_000_000_000), Some(999_999_000));
}

#[test]
fn test_mul_div_rejects_zero_denominator() {
    let env = Env::default();
    assert_eq!(mul_div(&env, 10, 10, 0), None);
}

#[test]
fn test_mul_div_overflowing_product() {
    let env = Env::default();

    let big = i128::MAX;
    assert_eq!(mul_div(&env, big, big, big), Some(big));
    assert_eq!(mul_div(&env, big, 2, 1), None);
}
