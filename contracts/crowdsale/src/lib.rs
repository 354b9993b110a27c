#![no_std]

//! # Launchpad Crowdsale
//!
//! Three-phase token sale: `Seed` (whitelist only) → `General` → `Open`.
//!
//! Investors attach the base asset through `invest`; contributions are
//! recorded per address and converted into the sale token at a fixed rate
//! once the sale reaches `Open`. Seed and General each enforce their own
//! per-investor cap and phase goal; hitting the goal pauses the sale until the owner resumes
//! it or moves the phase forward.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

mod constants;
mod error;
mod events;
mod ledger;
mod storage;
pub mod types;
mod whitelist;

pub use constants::*;
pub use error::CrowdsaleError;
use events::*;
use storage::*;
pub use types::{Phase, SaleConfig, SaleLimits, SaleState};

#[contract]
pub struct Crowdsale;

#[contractimpl]
impl Crowdsale {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the sale in `Seed`, unpaused.
    ///
    /// The sale pays claims out of its own `token` balance, so the token
    /// allocation must be transferred to the contract before `Open`.
    pub fn initialize(
        env: Env,
        owner: Address,
        base: Address,
        token: Address,
        limits: SaleLimits,
    ) -> Result<(), CrowdsaleError> {
        owner.require_auth();

        if is_initialized(&env) {
            return Err(CrowdsaleError::AlreadyInitialized);
        }
        if !limits.is_valid() || base == token {
            return Err(CrowdsaleError::InvalidConfig);
        }

        let config = SaleConfig {
            owner,
            base,
            token,
            limits,
        };
        write_config(&env, &config);
        write_state(&env, &SaleState::default());
        bump_instance(&env);

        emit_sale_initialized(&env, &config.owner, &config.base, &config.token, &config.limits);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    pub fn owner(env: Env) -> Result<Address, CrowdsaleError> {
        Ok(read_config(&env)?.owner)
    }

    pub fn token_address(env: Env) -> Result<Address, CrowdsaleError> {
        Ok(read_config(&env)?.token)
    }

    pub fn base_address(env: Env) -> Result<Address, CrowdsaleError> {
        Ok(read_config(&env)?.base)
    }

    pub fn get_limits(env: Env) -> Result<SaleLimits, CrowdsaleError> {
        Ok(read_config(&env)?.limits)
    }

    pub fn paused(env: Env) -> Result<bool, CrowdsaleError> {
        Ok(read_state(&env)?.paused)
    }

    pub fn current_phase(env: Env) -> Result<Phase, CrowdsaleError> {
        Ok(read_state(&env)?.phase)
    }

    /// Accepted since the most recent forward transition
    pub fn phase_raised(env: Env) -> Result<i128, CrowdsaleError> {
        Ok(read_state(&env)?.phase_raised)
    }

    pub fn total_raised(env: Env) -> Result<i128, CrowdsaleError> {
        Ok(read_state(&env)?.total_raised)
    }

    /// Base asset currently held by the sale
    pub fn get_balance(env: Env) -> Result<i128, CrowdsaleError> {
        let config = read_config(&env)?;
        Ok(token::Client::new(&env, &config.base).balance(&env.current_contract_address()))
    }

    pub fn get_contribution(env: Env, investor: Address) -> i128 {
        ledger::contribution_of(&env, &investor)
    }

    pub fn is_on_whitelist(env: Env, investor: Address) -> bool {
        whitelist::contains(&env, &investor)
    }

    // ========================================================
    // OWNER FUNCTIONS
    // ========================================================

    pub fn add_investor(env: Env, caller: Address, investor: Address) -> Result<(), CrowdsaleError> {
        require_owner(&env, &caller)?;

        if whitelist::insert(&env, &investor) {
            emit_whitelisted(&env, &investor);
        }
        Ok(())
    }

    pub fn add_investors(env: Env, caller: Address, investors: Vec<Address>) -> Result<(), CrowdsaleError> {
        require_owner(&env, &caller)?;

        for investor in investors.iter() {
            if whitelist::insert(&env, &investor) {
                emit_whitelisted(&env, &investor);
            }
        }
        Ok(())
    }

    pub fn pause_fundraising(env: Env, caller: Address) -> Result<(), CrowdsaleError> {
        set_paused(&env, &caller, true)
    }

    pub fn resume_fundraising(env: Env, caller: Address) -> Result<(), CrowdsaleError> {
        set_paused(&env, &caller, false)
    }

    /// Move to the next phase, clearing the pause flag and the phase total.
    ///
    /// # Returns
    /// The new phase
    pub fn transition_phase_forward(env: Env, caller: Address) -> Result<Phase, CrowdsaleError> {
        require_owner(&env, &caller)?;

        let mut state = read_state(&env)?;
        let from = state.phase;
        let to = from.next().ok_or(CrowdsaleError::InvalidPhase)?;

        let was_paused = state.paused;
        state.phase = to;
        state.paused = false;
        state.phase_raised = 0;
        write_state(&env, &state);
        bump_instance(&env);

        log!(&env, "phase moved forward", from as u32, to as u32);
        emit_phase_forward(&env, from, to);
        if was_paused {
            emit_paused(&env, false);
        }

        Ok(to)
    }

    // ========================================================
    // INVESTOR FUNCTIONS
    // ========================================================

    /// Contribute `value` of the base asset.
    ///
    /// The contribution that lands exactly on the phase goal succeeds and
    /// pauses the sale; one that would overshoot it is rejected.
    ///
    /// # Returns
    /// The investor's cumulative contribution
    pub fn invest(env: Env, investor: Address, value: i128) -> Result<i128, CrowdsaleError> {
        investor.require_auth();

        if value <= 0 {
            return Err(CrowdsaleError::InvalidAmount);
        }

        let config = read_config(&env)?;
        let mut state = read_state(&env)?;

        if state.paused {
            return Err(CrowdsaleError::Paused);
        }
        if state.phase == Phase::Seed && !whitelist::contains(&env, &investor) {
            return Err(CrowdsaleError::NotWhitelisted);
        }

        let phase_raised = state
            .phase_raised
            .checked_add(value)
            .ok_or(CrowdsaleError::Overflow)?;

        let limits = config.limits.for_phase(state.phase);
        if let Some((investor_cap, phase_goal)) = limits {
            let after = ledger::phase_contribution_of(&env, &investor, state.phase)
                .checked_add(value)
                .ok_or(CrowdsaleError::Overflow)?;
            if after > investor_cap {
                return Err(CrowdsaleError::CapExceeded);
            }
            if phase_raised > phase_goal {
                return Err(CrowdsaleError::GoalExceeded);
            }
        }

        // Effects
        let contribution = ledger::record(&env, &investor, state.phase, value)?;
        state.phase_raised = phase_raised;
        state.total_raised = state
            .total_raised
            .checked_add(value)
            .ok_or(CrowdsaleError::Overflow)?;

        let goal_reached = matches!(limits, Some((_, goal)) if phase_raised >= goal);
        if goal_reached {
            state.paused = true;
            log!(&env, "phase goal reached, pausing", phase_raised);
        }
        write_state(&env, &state);
        bump_instance(&env);

        // Interaction
        token::Client::new(&env, &config.base).transfer(
            &investor,
            &env.current_contract_address(),
            &value,
        );

        emit_invest(&env, &investor, value, state.phase);
        if goal_reached {
            emit_paused(&env, true);
        }

        Ok(contribution)
    }

    /// Convert the caller's whole contribution into tokens at the sale rate.
    ///
    /// # Returns
    /// Token amount transferred
    pub fn claim(env: Env, investor: Address) -> Result<i128, CrowdsaleError> {
        investor.require_auth();

        let config = read_config(&env)?;
        let state = read_state(&env)?;

        if state.phase != Phase::Open {
            return Err(CrowdsaleError::PhaseNotOpen);
        }

        let contribution = ledger::contribution_of(&env, &investor);
        if contribution == 0 {
            return Err(CrowdsaleError::NoContribution);
        }

        let tokens = contribution
            .checked_mul(config.limits.token_rate)
            .ok_or(CrowdsaleError::Overflow)?;

        let sale = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.token);
        if token_client.balance(&sale) < tokens {
            return Err(CrowdsaleError::InsufficientTokenAllocation);
        }

        // Zero before paying out
        ledger::take(&env, &investor);
        bump_instance(&env);

        token_client.transfer(&sale, &investor, &tokens);

        emit_claim(&env, &investor, contribution, tokens);
        Ok(tokens)
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

fn require_owner(env: &Env, caller: &Address) -> Result<(), CrowdsaleError> {
    caller.require_auth();
    let config = read_config(env)?;
    if *caller != config.owner {
        return Err(CrowdsaleError::Unauthorized);
    }
    Ok(())
}

fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), CrowdsaleError> {
    require_owner(env, caller)?;

    let mut state = read_state(env)?;
    state.paused = paused;
    write_state(env, &state);
    bump_instance(env);

    emit_paused(env, paused);
    Ok(())
}
