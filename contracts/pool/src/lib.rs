#![no_std]

//! # Launchpad Liquidity Pool
//!
//! Constant-product pool pairing a base asset (A) with the launched token (B).
//!
//! ## Responsibilities:
//! 1. Liquidity-token ledger (mint on deposit, burn on withdrawal)
//! 2. Swaps in both directions at the `x * y = k` price, minus a bps fee
//! 3. Reserve bookkeeping, re-synchronised with held balances after every call
//!
//! Payable entry points take the attached base-asset amount as an explicit
//! `value` argument and pull it from the caller within the same invocation.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

// External packages
use launchpad_math::{
    get_amount_out, initial_liquidity, pro_rata_share, proportional_liquidity, quote,
    split_initial_liquidity, MAX_FEE_BPS,
};

// Local modules
mod error;
mod events;
mod storage;
pub mod types;

pub use error::PoolError;
use events::*;
use storage::*;
pub use types::{PoolConfig, Reserves};

#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPool {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize pool
    ///
    /// # Arguments
    /// * `owner` - Pool owner, allowed to tune fees
    /// * `base` - Base asset contract (asset A)
    /// * `token` - Launched token contract (asset B)
    /// * `swap_fee_bps` - Swap fee in basis points
    /// * `burn_fee` - Fixed deduction from each burn output
    pub fn initialize(
        env: Env,
        owner: Address,
        base: Address,
        token: Address,
        swap_fee_bps: u32,
        burn_fee: i128,
    ) -> Result<(), PoolError> {
        owner.require_auth();

        if is_initialized(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        validate_fees(swap_fee_bps, burn_fee)?;

        let config = PoolConfig {
            owner,
            base,
            token,
            swap_fee_bps,
            burn_fee,
        };
        write_config(&env, &config);
        write_reserves(&env, &Reserves::default());
        write_total_supply(&env, 0);
        bump_instance(&env);

        emit_pool_initialized(
            &env,
            &config.owner,
            &config.base,
            &config.token,
            swap_fee_bps,
            burn_fee,
        );

        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    pub fn owner(env: Env) -> Result<Address, PoolError> {
        Ok(read_config(&env)?.owner)
    }

    pub fn token_address(env: Env) -> Result<Address, PoolError> {
        Ok(read_config(&env)?.token)
    }

    pub fn base_address(env: Env) -> Result<Address, PoolError> {
        Ok(read_config(&env)?.base)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, PoolError> {
        read_config(&env)
    }

    /// Current `(reserve_a, reserve_b)`, equal to held balances after every call
    pub fn get_reserves(env: Env) -> (i128, i128) {
        let reserves = read_reserves(&env);
        (reserves.reserve_a, reserves.reserve_b)
    }

    /// Liquidity-token supply, including the locked minimum
    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn balance_of(env: Env, holder: Address) -> i128 {
        read_balance(&env, &holder)
    }

    /// Fee-free spot value of `amount` at the current reserve ratio
    pub fn quote(env: Env, amount: i128, base_in: bool) -> Result<i128, PoolError> {
        let reserves = read_reserves(&env);
        if reserves.is_empty() {
            return Err(PoolError::InsufficientLiquidity);
        }
        let (reserve_in, reserve_out) = reserves.oriented(base_in);
        quote(&env, amount, reserve_in, reserve_out).ok_or(PoolError::InvalidAmount)
    }

    /// Output a swap of `amount_in` would return right now
    pub fn preview_swap(env: Env, amount_in: i128, base_in: bool) -> Result<i128, PoolError> {
        let config = read_config(&env)?;
        let reserves = read_reserves(&env);
        compute_swap_out(&env, &config, &reserves, amount_in, base_in)
    }

    // ========================================================
    // LIQUIDITY FUNCTIONS
    // ========================================================

    /// Deposit both assets and mint liquidity tokens to `to`
    ///
    /// `sender` attaches `value` of the base asset, which must equal
    /// `amount_a`, and must have approved the pool for `amount_b` of the token.
    ///
    /// # Returns
    /// Liquidity credited to `to`
    pub fn mint(
        env: Env,
        sender: Address,
        to: Address,
        amount_a: i128,
        amount_b: i128,
        value: i128,
    ) -> Result<i128, PoolError> {
        sender.require_auth();
        let config = read_config(&env)?;
        acquire_lock(&env)?;

        if amount_a <= 0 || amount_b <= 0 {
            return Err(PoolError::InvalidAmount);
        }
        if value != amount_a {
            return Err(PoolError::ValueMismatch);
        }

        let pool_addr = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.token);
        if token_client.allowance(&sender, &pool_addr) < amount_b {
            return Err(PoolError::InsufficientAllowance);
        }

        let reserves = read_reserves(&env);
        let supply = read_total_supply(&env);

        let liquidity = if supply == 0 {
            let issued = initial_liquidity(&env, amount_a, amount_b).ok_or(PoolError::Overflow)?;
            let (locked, credited) =
                split_initial_liquidity(issued).ok_or(PoolError::InsufficientLiquidityMinted)?;

            // Floor goes to the burn address and can never be redeemed
            write_total_supply(&env, locked);
            emit_transfer(&env, None, None, locked);
            credited
        } else {
            if reserves.is_empty() {
                return Err(PoolError::InsufficientLiquidity);
            }
            proportional_liquidity(
                &env,
                amount_a,
                amount_b,
                reserves.reserve_a,
                reserves.reserve_b,
                supply,
            )
            .ok_or(PoolError::Overflow)?
        };

        if liquidity <= 0 {
            return Err(PoolError::InsufficientLiquidityMinted);
        }

        mint_liquidity(&env, &to, liquidity)?;

        // Pull both assets
        token::Client::new(&env, &config.base).transfer(&sender, &pool_addr, &value);
        token_client.transfer_from(&pool_addr, &sender, &pool_addr, &amount_b);

        sync(&env, &config);
        emit_mint(&env, &sender, amount_a, amount_b);

        release_lock(&env);
        Ok(liquidity)
    }

    /// Redeem `liquidity` tokens for a pro-rata share of both reserves
    ///
    /// # Returns
    /// `(amount_a, amount_b)` sent to `sender`
    pub fn burn(env: Env, sender: Address, liquidity: i128) -> Result<(i128, i128), PoolError> {
        sender.require_auth();
        let config = read_config(&env)?;
        acquire_lock(&env)?;

        if liquidity <= 0 {
            return Err(PoolError::InvalidAmount);
        }

        let balance = read_balance(&env, &sender);
        if balance < liquidity {
            return Err(PoolError::InsufficientBalance);
        }

        let reserves = read_reserves(&env);
        let supply = read_total_supply(&env);

        let amount_a = burn_output(&env, &config, liquidity, reserves.reserve_a, supply)?;
        let amount_b = burn_output(&env, &config, liquidity, reserves.reserve_b, supply)?;
        if amount_a == 0 && amount_b == 0 {
            return Err(PoolError::InsufficientLiquidityBurned);
        }

        // Effects: retire the tokens and book the outflow before paying out
        let pool_addr = env.current_contract_address();
        write_balance(&env, &sender, balance - liquidity);
        emit_transfer(&env, Some(sender.clone()), Some(pool_addr.clone()), liquidity);
        write_total_supply(&env, supply - liquidity);
        emit_transfer(&env, Some(pool_addr.clone()), None, liquidity);
        write_reserves(
            &env,
            &Reserves {
                reserve_a: reserves.reserve_a - amount_a,
                reserve_b: reserves.reserve_b - amount_b,
            },
        );

        // Interactions
        if amount_a > 0 {
            token::Client::new(&env, &config.base).transfer(&pool_addr, &sender, &amount_a);
        }
        if amount_b > 0 {
            token::Client::new(&env, &config.token).transfer(&pool_addr, &sender, &amount_b);
        }

        sync(&env, &config);
        emit_burn(&env, &sender, amount_a, amount_b, &sender);

        release_lock(&env);
        Ok((amount_a, amount_b))
    }

    /// Move liquidity tokens between holders
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), PoolError> {
        from.require_auth();

        if amount <= 0 {
            return Err(PoolError::InvalidAmount);
        }

        let from_balance = read_balance(&env, &from);
        if from_balance < amount {
            return Err(PoolError::InsufficientBalance);
        }

        write_balance(&env, &from, from_balance - amount);
        let to_balance = read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(PoolError::Overflow)?;
        write_balance(&env, &to, to_balance);

        emit_transfer(&env, Some(from), Some(to), amount);
        Ok(())
    }

    // ========================================================
    // SWAP FUNCTIONS
    // ========================================================

    /// Sell `amount_in` of the token for the base asset.
    /// Requires a prior token approval to the pool.
    pub fn swap_token_for_base(env: Env, sender: Address, amount_in: i128) -> Result<i128, PoolError> {
        sender.require_auth();
        let config = read_config(&env)?;
        acquire_lock(&env)?;

        let amount_out = execute_swap(&env, &config, &sender, amount_in, false)?;

        release_lock(&env);
        Ok(amount_out)
    }

    /// Buy the token with `value` of the base asset attached to the call
    pub fn swap_base_for_token(env: Env, sender: Address, value: i128) -> Result<i128, PoolError> {
        sender.require_auth();
        let config = read_config(&env)?;
        acquire_lock(&env)?;

        let amount_out = execute_swap(&env, &config, &sender, value, true)?;

        release_lock(&env);
        Ok(amount_out)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Update the swap fee (bps) and the fixed burn fee independently
    pub fn set_fees(env: Env, caller: Address, swap_fee_bps: u32, burn_fee: i128) -> Result<(), PoolError> {
        caller.require_auth();

        let mut config = read_config(&env)?;
        if caller != config.owner {
            return Err(PoolError::Unauthorized);
        }
        validate_fees(swap_fee_bps, burn_fee)?;

        config.swap_fee_bps = swap_fee_bps;
        config.burn_fee = burn_fee;
        write_config(&env, &config);
        bump_instance(&env);

        emit_fees_updated(&env, swap_fee_bps, burn_fee);
        Ok(())
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

fn validate_fees(swap_fee_bps: u32, burn_fee: i128) -> Result<(), PoolError> {
    if swap_fee_bps > MAX_FEE_BPS || burn_fee < 0 {
        return Err(PoolError::InvalidFee);
    }
    Ok(())
}

/// Credit freshly issued liquidity to `to`
fn mint_liquidity(env: &Env, to: &Address, amount: i128) -> Result<(), PoolError> {
    let supply = read_total_supply(env)
        .checked_add(amount)
        .ok_or(PoolError::Overflow)?;
    let balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(PoolError::Overflow)?;

    write_total_supply(env, supply);
    write_balance(env, to, balance);
    emit_transfer(env, None, Some(to.clone()), amount);
    Ok(())
}

/// Pro-rata share minus the fixed burn fee, never negative
fn burn_output(
    env: &Env,
    config: &PoolConfig,
    liquidity: i128,
    reserve: i128,
    supply: i128,
) -> Result<i128, PoolError> {
    let share = pro_rata_share(env, liquidity, reserve, supply).ok_or(PoolError::Overflow)?;
    Ok(share.saturating_sub(config.burn_fee).max(0))
}

fn compute_swap_out(
    env: &Env,
    config: &PoolConfig,
    reserves: &Reserves,
    amount_in: i128,
    base_in: bool,
) -> Result<i128, PoolError> {
    if amount_in <= 0 {
        return Err(PoolError::InvalidAmount);
    }
    if reserves.is_empty() {
        return Err(PoolError::InsufficientLiquidity);
    }

    let (reserve_in, reserve_out) = reserves.oriented(base_in);
    let amount_out = get_amount_out(env, amount_in, reserve_in, reserve_out, config.swap_fee_bps)
        .ok_or(PoolError::Overflow)?;

    if amount_out <= 0 || amount_out >= reserve_out {
        return Err(PoolError::InsufficientLiquidity);
    }
    Ok(amount_out)
}

/// Price, book, pull, push, then re-sync. Caller holds the lock.
fn execute_swap(
    env: &Env,
    config: &PoolConfig,
    sender: &Address,
    amount_in: i128,
    base_in: bool,
) -> Result<i128, PoolError> {
    let reserves = read_reserves(env);
    let amount_out = compute_swap_out(env, config, &reserves, amount_in, base_in)?;

    let pool_addr = env.current_contract_address();
    let base_client = token::Client::new(env, &config.base);
    let token_client = token::Client::new(env, &config.token);

    if !base_in && token_client.allowance(sender, &pool_addr) < amount_in {
        return Err(PoolError::InsufficientAllowance);
    }

    // Book the formula reserves before any value leaves the pool
    let (reserve_in, reserve_out) = reserves.oriented(base_in);
    let new_in = reserve_in.checked_add(amount_in).ok_or(PoolError::Overflow)?;
    let new_out = reserve_out - amount_out;
    let provisional = if base_in {
        Reserves { reserve_a: new_in, reserve_b: new_out }
    } else {
        Reserves { reserve_a: new_out, reserve_b: new_in }
    };
    write_reserves(env, &provisional);

    if base_in {
        base_client.transfer(sender, &pool_addr, &amount_in);
        token_client.transfer(&pool_addr, sender, &amount_out);
    } else {
        token_client.transfer_from(&pool_addr, sender, &pool_addr, &amount_in);
        base_client.transfer(&pool_addr, sender, &amount_out);
    }

    sync(env, config);
    emit_swap(env, sender, amount_in, amount_out, base_in);

    Ok(amount_out)
}

/// Refresh reserves from the balances the pool actually holds.
/// Any rounding residue ends up in the reserves rather than being lost.
fn sync(env: &Env, config: &PoolConfig) {
    let pool_addr = env.current_contract_address();
    let reserves = Reserves {
        reserve_a: token::Client::new(env, &config.base).balance(&pool_addr),
        reserve_b: token::Client::new(env, &config.token).balance(&pool_addr),
    };

    write_reserves(env, &reserves);
    bump_instance(env);

    log!(env, "reserves synced", reserves.reserve_a, reserves.reserve_b);
    emit_sync(env, reserves.reserve_a, reserves.reserve_b);
}
