// Crowdsale Types

use soroban_sdk::{contracttype, Address};

use crate::constants::*;

// ============================================================
// PHASE
// ============================================================

/// Sale phase. Only ever moves forward.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Phase {
    /// Whitelist only, tight caps
    Seed = 0,
    /// Open to all, capped
    General = 1,
    /// Uncapped; claims enabled
    Open = 2,
}

impl Phase {
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Seed => Some(Phase::General),
            Phase::General => Some(Phase::Open),
            Phase::Open => None,
        }
    }
}

// ============================================================
// SALE LIMITS
// ============================================================

/// Caps and goals, all in base-asset smallest units
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleLimits {
    pub seed_investor_cap: i128,
    pub seed_goal: i128,
    pub general_investor_cap: i128,
    pub general_goal: i128,
    /// Token units paid out per base-asset unit contributed
    pub token_rate: i128,
}

impl Default for SaleLimits {
    fn default() -> Self {
        Self {
            seed_investor_cap: DEFAULT_SEED_INVESTOR_CAP,
            seed_goal: DEFAULT_SEED_GOAL,
            general_investor_cap: DEFAULT_GENERAL_INVESTOR_CAP,
            general_goal: DEFAULT_GENERAL_GOAL,
            token_rate: DEFAULT_TOKEN_RATE,
        }
    }
}

impl SaleLimits {
    /// Every value positive and no cap above its own phase goal
    pub fn is_valid(&self) -> bool {
        self.seed_investor_cap > 0
            && self.general_investor_cap > 0
            && self.token_rate > 0
            && self.seed_investor_cap <= self.seed_goal
            && self.general_investor_cap <= self.general_goal
    }

    /// `(investor_cap, phase_goal)` for capped phases, `None` for `Open`
    pub fn for_phase(&self, phase: Phase) -> Option<(i128, i128)> {
        match phase {
            Phase::Seed => Some((self.seed_investor_cap, self.seed_goal)),
            Phase::General => Some((self.general_investor_cap, self.general_goal)),
            Phase::Open => None,
        }
    }
}

// ============================================================
// CONFIG & STATE
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    pub owner: Address,
    /// Asset contributed by investors
    pub base: Address,
    /// Asset paid out on claim
    pub token: Address,
    pub limits: SaleLimits,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleState {
    pub phase: Phase,
    pub paused: bool,
    /// Accepted since the last forward transition
    pub phase_raised: i128,
    /// Accepted over the whole sale
    pub total_raised: i128,
}

impl Default for SaleState {
    /// `Seed`, unpaused, nothing raised
    fn default() -> Self {
        Self {
            phase: Phase::Seed,
            paused: false,
            phase_raised: 0,
            total_raised: 0,
        }
    }
}
