// Seed-phase whitelist

use soroban_sdk::{Address, Env};

use crate::storage::{extend_persistent, CrowdsaleDataKey};

pub fn contains(env: &Env, investor: &Address) -> bool {
    let key = CrowdsaleDataKey::Whitelisted(investor.clone());
    let listed = env.storage().persistent().get(&key).unwrap_or(false);
    if listed {
        extend_persistent(env, &key);
    }
    listed
}

/// Returns false if the investor was already listed
pub fn insert(env: &Env, investor: &Address) -> bool {
    if contains(env, investor) {
        return false;
    }
    let key = CrowdsaleDataKey::Whitelisted(investor.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
    true
}
