#![allow(dead_code)]

use launchpad_math::ONE_UNIT;
pub use launchpad_math::{DEFAULT_BURN_FEE, DEFAULT_SWAP_FEE_BPS};
use launchpad_pool::{LiquidityPool, LiquidityPoolClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::{self, StellarAssetClient},
    Address, Env, Symbol, TryFromVal, Val,
};

pub struct TestPool<'a> {
    pub client: LiquidityPoolClient<'a>,
    pub owner: Address,
    pub base: Address,
    pub token: Address,
}

/// Whole units with 7 decimals
pub fn units(n: i128) -> i128 {
    n * ONE_UNIT
}

/// Setup pool with default fees
pub fn setup_pool(env: &Env) -> TestPool<'_> {
    setup_custom_pool(env, DEFAULT_SWAP_FEE_BPS, DEFAULT_BURN_FEE)
}

/// Setup pool with custom fees
pub fn setup_custom_pool(env: &Env, swap_fee_bps: u32, burn_fee: i128) -> TestPool<'_> {
    let owner = Address::generate(env);
    let base = create_token(env, &owner);
    let token = create_token(env, &owner);

    let pool_id = env.register(LiquidityPool, ());
    let client = LiquidityPoolClient::new(env, &pool_id);
    client.initialize(&owner, &base, &token, &swap_fee_bps, &burn_fee);

    TestPool {
        client,
        owner,
        base,
        token,
    }
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn approve(env: &Env, token: &Address, from: &Address, spender: &Address, amount: i128) {
    let expiration = env.ledger().sequence() + 10_000;
    token::Client::new(env, token).approve(from, spender, &amount, &expiration);
}

pub fn balance(env: &Env, token: &Address, of: &Address) -> i128 {
    token::Client::new(env, token).balance(of)
}

/// Fund `provider` and deposit `(amount_a, amount_b)`; returns liquidity credited
pub fn add_liquidity(env: &Env, pool: &TestPool, provider: &Address, amount_a: i128, amount_b: i128) -> i128 {
    mint_tokens(env, &pool.base, provider, amount_a);
    mint_tokens(env, &pool.token, provider, amount_b);
    approve(env, &pool.token, provider, &pool.client.address, amount_b);
    pool.client.mint(provider, provider, &amount_a, &amount_b, &amount_a)
}

/// Pool seeded with 100 base units and 500 token units by a fresh provider
pub fn setup_seeded_pool(env: &Env) -> (TestPool<'_>, Address) {
    let pool = setup_pool(env);
    let provider = Address::generate(env);
    add_liquidity(env, &pool, &provider, units(100), units(500));
    (pool, provider)
}

/// Data payloads of the pool's events named `name`, in emission order
pub fn pool_events<T: TryFromVal<Env, Val>>(env: &Env, pool: &Address, name: &str) -> std::vec::Vec<T> {
    let wanted = Symbol::new(env, name);
    let mut out = std::vec::Vec::new();
    for (contract, topics, data) in env.events().all().iter() {
        if contract != *pool {
            continue;
        }
        let Some(first) = topics.get(0) else { continue };
        let Ok(topic) = Symbol::try_from_val(env, &first) else { continue };
        if topic != wanted {
            continue;
        }
        if let Ok(decoded) = T::try_from_val(env, &data) {
            out.push(decoded);
        }
    }
    out
}

/// Names of the pool's events, in emission order
pub fn pool_event_names(env: &Env, pool: &Address) -> std::vec::Vec<Symbol> {
    let mut out = std::vec::Vec::new();
    for (contract, topics, _) in env.events().all().iter() {
        if contract != *pool {
            continue;
        }
        if let Some(first) = topics.get(0) {
            if let Ok(topic) = Symbol::try_from_val(env, &first) {
                out.push(topic);
            }
        }
    }
    out
}
