// Error handling module for the crowdsale
//
// Codes are grouped by hundreds per category so callers can tell a phase
// problem from a cap problem without matching every variant.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdsaleError {
    // Lifecycle (100-199)
    AlreadyInitialized = 100,
    NotInitialized = 101,
    /// Limits are non-positive, a cap exceeds its goal, or base equals token
    InvalidConfig = 102,

    // Authorization (200-299)
    /// Caller is not the sale owner
    Unauthorized = 200,

    // Phase (300-399)
    /// No phase after `Open`
    InvalidPhase = 300,
    /// Claims are only possible in `Open`
    PhaseNotOpen = 301,

    // Eligibility (400-499)
    NotWhitelisted = 400,

    // Caps (500-599)
    /// Investor's contribution within the phase would pass its cap
    CapExceeded = 500,
    /// Phase total would pass the phase goal
    GoalExceeded = 501,

    // Pause (600-699)
    Paused = 600,

    // Claim (700-799)
    NoContribution = 700,
    /// Sale does not hold enough token to pay the claim
    InsufficientTokenAllocation = 701,

    // Input (800-899)
    InvalidAmount = 800,

    // Math (900-999)
    Overflow = 900,
}
