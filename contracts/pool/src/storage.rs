// Pool storage module

use soroban_sdk::{contracttype, Address, Env};

use crate::error::PoolError;
use crate::types::{PoolConfig, Reserves};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum PoolDataKey {
    /// Pool configuration (instance)
    Config,
    /// Cached reserves (instance)
    Reserves,
    /// Liquidity-token total supply, including the locked floor (instance)
    TotalSupply,
    /// Reentrancy lock (instance)
    Locked,
    /// Liquidity-token balance by holder (persistent)
    Balance(Address),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// Extend once the remaining TTL drops below this
const PERSISTENT_THRESHOLD: u32 = PERSISTENT_LIFETIME - 17_280;

/// Instance storage lifetime (~30 days)
const INSTANCE_LIFETIME: u32 = 518_400;
const INSTANCE_THRESHOLD: u32 = INSTANCE_LIFETIME - 17_280;

fn extend_ttl(env: &Env, key: &PoolDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_THRESHOLD, PERSISTENT_LIFETIME);
}

/// Keep the contract instance (config, reserves, supply) alive
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD, INSTANCE_LIFETIME);
}

// ============================================================
// CONFIG
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&PoolDataKey::Config)
}

pub fn write_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&PoolDataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<PoolConfig, PoolError> {
    env.storage()
        .instance()
        .get(&PoolDataKey::Config)
        .ok_or(PoolError::NotInitialized)
}

// ============================================================
// RESERVES & SUPPLY
// ============================================================

pub fn read_reserves(env: &Env) -> Reserves {
    env.storage()
        .instance()
        .get(&PoolDataKey::Reserves)
        .unwrap_or_default()
}

pub fn write_reserves(env: &Env, reserves: &Reserves) {
    env.storage().instance().set(&PoolDataKey::Reserves, reserves);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&PoolDataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&PoolDataKey::TotalSupply, &supply);
}

// ============================================================
// LIQUIDITY-TOKEN BALANCES
// ============================================================

pub fn read_balance(env: &Env, holder: &Address) -> i128 {
    let key = PoolDataKey::Balance(holder.clone());
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_ttl(env, &key);
    }
    result.unwrap_or(0)
}

pub fn write_balance(env: &Env, holder: &Address, amount: i128) {
    let key = PoolDataKey::Balance(holder.clone());
    env.storage().persistent().set(&key, &amount);
    extend_ttl(env, &key);
}

// ============================================================
// REENTRANCY LOCK
// ============================================================

/// Take the call lock. A failed call rolls the flag back with everything else.
pub fn acquire_lock(env: &Env) -> Result<(), PoolError> {
    let locked: bool = env
        .storage()
        .instance()
        .get(&PoolDataKey::Locked)
        .unwrap_or(false);
    if locked {
        return Err(PoolError::Reentrant);
    }
    env.storage().instance().set(&PoolDataKey::Locked, &true);
    Ok(())
}

pub fn release_lock(env: &Env) {
    env.storage().instance().set(&PoolDataKey::Locked, &false);
}
