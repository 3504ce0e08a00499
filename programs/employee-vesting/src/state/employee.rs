use anchor_lang::prelude::*;

/// Per-beneficiary unlock schedule and withdrawal counter.
/// Seeds: [b"employee", beneficiary, organization] — at most one schedule
/// per beneficiary per organization.
#[account]
pub struct EmployeeSchedule {
    /// Owning organization record.
    pub organization: Pubkey,
    /// Only identity allowed to claim.
    pub beneficiary: Pubkey,
    /// Vesting start timestamp (Unix seconds).
    pub start_time: i64,
    /// Nothing is claimable before this timestamp.
    pub cliff_time: i64,
    /// The full allocation is unlocked at this timestamp.
    pub end_time: i64,
    /// Total tokens ever allocated to this schedule.
    pub total_amount: u64,
    /// Cumulative amount already disbursed; monotonically non-decreasing,
    /// only ever mutated by `claim_tokens`.
    pub total_withdrawn: u64,
    /// PDA bump.
    pub bump: u8,
}

impl EmployeeSchedule {
    pub const SIZE: usize =
        32 + // organization
        32 + // beneficiary
        8 +  // start_time
        8 +  // cliff_time
        8 +  // end_time
        8 +  // total_amount
        8 +  // total_withdrawn
        1;   // bump
}
