// Crowdsale storage module

use soroban_sdk::{contracttype, Address, Env};

use crate::error::CrowdsaleError;
use crate::types::{Phase, SaleConfig, SaleState};

#[contracttype]
pub enum CrowdsaleDataKey {
    /// Sale configuration (instance)
    Config,
    /// Phase, pause flag and running totals (instance)
    State,
    /// Cumulative contribution by investor (persistent)
    Contribution(Address),
    /// Contribution by investor within one phase, checked against the cap (persistent)
    PhaseContribution(Address, Phase),
    /// Whitelist membership (persistent)
    Whitelisted(Address),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200; // ~1 year
const PERSISTENT_THRESHOLD: u32 = PERSISTENT_LIFETIME - 17_280;

const INSTANCE_LIFETIME: u32 = 518_400; // ~30 days
const INSTANCE_THRESHOLD: u32 = INSTANCE_LIFETIME - 17_280;

pub fn extend_persistent(env: &Env, key: &CrowdsaleDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_THRESHOLD, PERSISTENT_LIFETIME);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD, INSTANCE_LIFETIME);
}

// ============================================================
// CONFIG & STATE
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&CrowdsaleDataKey::Config)
}

pub fn write_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&CrowdsaleDataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<SaleConfig, CrowdsaleError> {
    env.storage()
        .instance()
        .get(&CrowdsaleDataKey::Config)
        .ok_or(CrowdsaleError::NotInitialized)
}

pub fn write_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&CrowdsaleDataKey::State, state);
}

pub fn read_state(env: &Env) -> Result<SaleState, CrowdsaleError> {
    env.storage()
        .instance()
        .get(&CrowdsaleDataKey::State)
        .ok_or(CrowdsaleError::NotInitialized)
}
