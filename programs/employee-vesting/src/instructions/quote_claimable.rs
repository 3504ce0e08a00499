use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::EmployeeSchedule;
use crate::utils::schedule;

/// Read-only estimate for front-end list views; no state is touched.
pub fn quote_claimable(ctx: Context<QuoteClaimable>) -> Result<u64> {
    let employee = &ctx.accounts.employee_schedule;
    let now = Clock::get()?.unix_timestamp;

    let unlocked = schedule::unlocked_amount(
        employee.start_time,
        employee.cliff_time,
        employee.end_time,
        employee.total_amount,
        now,
    )?;
    let claimable = unlocked
        .checked_sub(employee.total_withdrawn)
        .ok_or(VestingError::MathOverflow)?;

    emit!(ClaimQuote {
        organization: employee.organization,
        beneficiary: employee.beneficiary,
        unlocked,
        total_withdrawn: employee.total_withdrawn,
        claimable,
        timestamp: now,
    });

    Ok(claimable)
}

#[derive(Accounts)]
pub struct QuoteClaimable<'info> {
    pub employee_schedule: Account<'info, EmployeeSchedule>,
}

#[event]
pub struct ClaimQuote {
    pub organization: Pubkey,
    pub beneficiary: Pubkey,
    pub unlocked: u64,
    pub total_withdrawn: u64,
    pub claimable: u64,
    pub timestamp: i64,
}
