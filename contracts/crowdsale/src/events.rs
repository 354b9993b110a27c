// Crowdsale events module

use soroban_sdk::{Address, Env, Symbol};

use crate::types::{Phase, SaleLimits};

/// Topics: ("SaleInit",)
/// Data: (owner, base, token, limits)
pub fn emit_sale_initialized(
    env: &Env,
    owner: &Address,
    base: &Address,
    token: &Address,
    limits: &SaleLimits,
) {
    env.events().publish(
        (Symbol::new(env, "SaleInit"),),
        (owner.clone(), base.clone(), token.clone(), limits.clone()),
    );
}

/// Topics: ("Whitelist",)
/// Data: investor
pub fn emit_whitelisted(env: &Env, investor: &Address) {
    env.events()
        .publish((Symbol::new(env, "Whitelist"),), investor.clone());
}

/// Topics: ("Invest",)
/// Data: (investor, value, phase)
pub fn emit_invest(env: &Env, investor: &Address, value: i128, phase: Phase) {
    env.events().publish(
        (Symbol::new(env, "Invest"),),
        (investor.clone(), value, phase),
    );
}

/// Emitted on manual pause/resume, on goal auto-pause, and when a forward
/// transition clears the flag.
/// Topics: ("Paused",)
/// Data: paused
pub fn emit_paused(env: &Env, paused: bool) {
    env.events().publish((Symbol::new(env, "Paused"),), paused);
}

/// Topics: ("PhaseFwd",)
/// Data: (from, to)
pub fn emit_phase_forward(env: &Env, from: Phase, to: Phase) {
    env.events()
        .publish((Symbol::new(env, "PhaseFwd"),), (from, to));
}

/// Topics: ("Claim",)
/// Data: (investor, contribution, tokens)
pub fn emit_claim(env: &Env, investor: &Address, contribution: i128, tokens: i128) {
    env.events().publish(
        (Symbol::new(env, "Claim"),),
        (investor.clone(), contribution, tokens),
    );
}
