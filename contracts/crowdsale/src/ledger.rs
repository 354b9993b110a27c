// Contribution ledger: cumulative base-asset contribution per investor,
// plus the per-phase running total the investor cap is checked against.
// Only the crowdsale entry points write here.

use soroban_sdk::{Address, Env};

use crate::error::CrowdsaleError;
use crate::storage::{extend_persistent, CrowdsaleDataKey};
use crate::types::Phase;

fn read(env: &Env, key: &CrowdsaleDataKey) -> i128 {
    let amount: Option<i128> = env.storage().persistent().get(key);
    if amount.is_some() {
        extend_persistent(env, key);
    }
    amount.unwrap_or(0)
}

fn write(env: &Env, key: &CrowdsaleDataKey, amount: i128) {
    env.storage().persistent().set(key, &amount);
    extend_persistent(env, key);
}

pub fn contribution_of(env: &Env, investor: &Address) -> i128 {
    read(env, &CrowdsaleDataKey::Contribution(investor.clone()))
}

/// Contributed within `phase` only; unaffected by `take`
pub fn phase_contribution_of(env: &Env, investor: &Address, phase: Phase) -> i128 {
    read(env, &CrowdsaleDataKey::PhaseContribution(investor.clone(), phase))
}

/// Add `amount` to the investor's lifetime and `phase` entries and return
/// the new lifetime total
pub fn record(env: &Env, investor: &Address, phase: Phase, amount: i128) -> Result<i128, CrowdsaleError> {
    let total = contribution_of(env, investor)
        .checked_add(amount)
        .ok_or(CrowdsaleError::Overflow)?;
    let in_phase = phase_contribution_of(env, investor, phase)
        .checked_add(amount)
        .ok_or(CrowdsaleError::Overflow)?;

    write(env, &CrowdsaleDataKey::Contribution(investor.clone()), total);
    write(
        env,
        &CrowdsaleDataKey::PhaseContribution(investor.clone(), phase),
        in_phase,
    );
    Ok(total)
}

/// Zero the investor's entry and return what it held
pub fn take(env: &Env, investor: &Address) -> i128 {
    let amount = contribution_of(env, investor);
    if amount != 0 {
        write(env, &CrowdsaleDataKey::Contribution(investor.clone()), 0);
    }
    amount
}
