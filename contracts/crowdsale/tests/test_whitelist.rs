mod common;

use launchpad_crowdsale::CrowdsaleError;
use soroban_sdk::{testutils::Address as _, vec, Address, Env};

// ============================================================
// INVESTOR WHITELIST TESTS
// ============================================================

#[test]
fn test_unknown_address_not_listed() {
    let env = Env::default();
    env.mock_all_auths();

    let sale = common::setup_sale(&env);
    let stranger = Address::generate(&env);

    assert!(!sale.client.is_on_whitelist(&stranger));
}

#[test]
fn test_owner_adds_investor() {
    let env = Env::default();
    env.mock_all_auths();

    let sale = common::setup_sale(&env);
    let investor = Address::generate(&env);

    sale.client.add_investor(&sale.owner, &investor);

    let events: std::vec::Vec<Address> =
        common::sale_events(&env, &sale.client.address, "Whitelist");
    assert_eq!(events, std::vec![investor.clone()]);
    assert!(sale.client.is_on_whitelist(&investor));
}

#[test]
fn test_adding_twice_is_idempotent() {
    let env = Env::default();
    env.mock_all_auths();

    let sale = common::setup_sale(&env);
    let investor = Address::generate(&env);

    sale.client.add_investor(&sale.owner, &investor);
    sale.client.add_investor(&sale.owner, &investor);

    // Never announced twice
    let events: std::vec::Vec<Address> =
        common::sale_events(&env, &sale.client.address, "Whitelist");
    assert!(events.len() <= 1);
    assert!(sale.client.is_on_whitelist(&investor));
}

#[test]
fn test_owner_adds_batch() {
    let env = Env::default();
    env.mock_all_auths();

    let sale = common::setup_sale(&env);
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    let c = Address::generate(&env);

    sale.client
        .add_investors(&sale.owner, &vec![&env, a.clone(), b.clone(), a.clone()]);

    let events: std::vec::Vec<Address> =
        common::sale_events(&env, &sale.client.address, "Whitelist");
    assert_eq!(events, std::vec![a.clone(), b.clone()]);

    assert!(sale.client.is_on_whitelist(&a));
    assert!(sale.client.is_on_whitelist(&b));
    assert!(!sale.client.is_on_whitelist(&c));
}

#[test]
fn test_only_owner_adds_investors() {
    let env = Env::default();
    env.mock_all_auths();

    let sale = common::setup_sale(&env);
    let intruder = Address::generate(&env);

    assert_eq!(
        sale.client.try_add_investor(&intruder, &intruder),
        Err(Ok(CrowdsaleError::Unauthorized))
    );
    assert_eq!(
        sale.client.try_add_investors(&intruder, &vec![&env, intruder.clone()]),
        Err(Ok(CrowdsaleError::Unauthorized))
    );
    assert!(!sale.client.is_on_whitelist(&intruder));
}

#[test]
#[should_panic]
fn test_add_investor_requires_owner_signature() {
    let env = Env::default();
    env.mock_all_auths();

    let sale = common::setup_sale(&env);
    let investor = Address::generate(&env);

    // Drop the mocked signatures: the owner has not signed this call
    env.set_auths(&[]);
    sale.client.add_investor(&sale.owner, &investor);
}
