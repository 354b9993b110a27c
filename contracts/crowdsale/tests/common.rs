#![allow(dead_code)]

use launchpad_crowdsale::{Crowdsale, CrowdsaleClient, SaleLimits};
use launchpad_math::ONE_UNIT;
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::{self, StellarAssetClient},
    Address, Env, Symbol, TryFromVal, Val,
};

/// Token allocation handed to the sale at setup
pub const SALE_ALLOCATION: i128 = 500_000 * ONE_UNIT;

pub struct TestSale<'a> {
    pub client: CrowdsaleClient<'a>,
    pub owner: Address,
    pub base: Address,
    pub token: Address,
}

/// Whole units with 7 decimals
pub fn units(n: i128) -> i128 {
    n * ONE_UNIT
}

/// Sale with default limits and the full token allocation
pub fn setup_sale(env: &Env) -> TestSale<'_> {
    setup_custom_sale(env, SaleLimits::default(), SALE_ALLOCATION)
}

pub fn setup_custom_sale(env: &Env, limits: SaleLimits, allocation: i128) -> TestSale<'_> {
    let owner = Address::generate(env);
    let base = create_token(env, &owner);
    let token = create_token(env, &owner);

    let sale_id = env.register(Crowdsale, ());
    let client = CrowdsaleClient::new(env, &sale_id);
    client.initialize(&owner, &base, &token, &limits);

    if allocation > 0 {
        mint_tokens(env, &token, &sale_id, allocation);
    }

    TestSale {
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

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, of: &Address) -> i128 {
    token::Client::new(env, token).balance(of)
}

/// Fresh address already on the whitelist
pub fn whitelisted_investor(env: &Env, sale: &TestSale) -> Address {
    let investor = Address::generate(env);
    sale.client.add_investor(&sale.owner, &investor);
    investor
}

/// Give `investor` exactly `value` of the base asset and invest it
pub fn invest(env: &Env, sale: &TestSale, investor: &Address, value: i128) -> i128 {
    mint_tokens(env, &sale.base, investor, value);
    sale.client.invest(investor, &value)
}

/// Fill the Seed goal with ten whitelisted investors at the cap
pub fn fill_seed(env: &Env, sale: &TestSale) {
    for _ in 0..10 {
        let investor = whitelisted_investor(env, sale);
        invest(env, sale, &investor, units(1_500));
    }
}

/// Data payloads of the sale's events named `name`, in emission order
pub fn sale_events<T: TryFromVal<Env, Val>>(env: &Env, sale: &Address, name: &str) -> std::vec::Vec<T> {
    let wanted = Symbol::new(env, name);
    let mut out = std::vec::Vec::new();
    for (contract, topics, data) in env.events().all().iter() {
        if contract != *sale {
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
