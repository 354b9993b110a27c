// Pool events module
// One emit function per notification; topic is the event name.

use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the pool is initialized
/// Topics: ("PoolInit",)
/// Data: (owner, base, token, swap_fee_bps, burn_fee)
pub fn emit_pool_initialized(
    env: &Env,
    owner: &Address,
    base: &Address,
    token: &Address,
    swap_fee_bps: u32,
    burn_fee: i128,
) {
    env.events().publish(
        (Symbol::new(env, "PoolInit"),),
        (owner.clone(), base.clone(), token.clone(), swap_fee_bps, burn_fee),
    );
}

/// Liquidity-token movement. `None` stands for the burn address: a mint has
/// `from == None`, a burn has `to == None`, and the locked minimum liquidity
/// is `(None, None, MINIMUM_LIQUIDITY)`.
/// Topics: ("Transfer",)
/// Data: (from, to, amount)
pub fn emit_transfer(env: &Env, from: Option<Address>, to: Option<Address>, amount: i128) {
    env.events().publish((Symbol::new(env, "Transfer"),), (from, to, amount));
}

/// Emitted after every reserve refresh
/// Topics: ("Sync",)
/// Data: (reserve_a, reserve_b)
pub fn emit_sync(env: &Env, reserve_a: i128, reserve_b: i128) {
    env.events().publish((Symbol::new(env, "Sync"),), (reserve_a, reserve_b));
}

/// Topics: ("Mint",)
/// Data: (sender, amount_a, amount_b)
pub fn emit_mint(env: &Env, sender: &Address, amount_a: i128, amount_b: i128) {
    env.events().publish(
        (Symbol::new(env, "Mint"),),
        (sender.clone(), amount_a, amount_b),
    );
}

/// Topics: ("Burn",)
/// Data: (sender, amount_a, amount_b, to)
pub fn emit_burn(env: &Env, sender: &Address, amount_a: i128, amount_b: i128, to: &Address) {
    env.events().publish(
        (Symbol::new(env, "Burn"),),
        (sender.clone(), amount_a, amount_b, to.clone()),
    );
}

/// Topics: ("Swap",)
/// Data: (sender, amount_in, amount_out, base_in)
pub fn emit_swap(env: &Env, sender: &Address, amount_in: i128, amount_out: i128, base_in: bool) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (sender.clone(), amount_in, amount_out, base_in),
    );
}

/// Topics: ("FeesUpd",)
/// Data: (swap_fee_bps, burn_fee)
pub fn emit_fees_updated(env: &Env, swap_fee_bps: u32, burn_fee: i128) {
    env.events().publish((Symbol::new(env, "FeesUpd"),), (swap_fee_bps, burn_fee));
}
