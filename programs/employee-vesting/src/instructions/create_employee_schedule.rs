use anchor_lang::prelude::*;

use crate::constants::{EMPLOYEE_SEED, ORGANIZATION_SEED};
use crate::error::VestingError;
use crate::state::{EmployeeSchedule, OrganizationVesting};
use crate::utils::schedule;

// Records entitlement only; the vault is funded separately and under-funding
// surfaces at claim time.
pub fn create_employee_schedule(
    ctx: Context<CreateEmployeeSchedule>,
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
    total_amount: u64,
) -> Result<()> {
    schedule::validate_schedule(start_time, cliff_time, end_time, total_amount)?;

    let employee = &mut ctx.accounts.employee_schedule;
    employee.organization = ctx.accounts.organization.key();
    employee.beneficiary = ctx.accounts.beneficiary.key();
    employee.start_time = start_time;
    employee.cliff_time = cliff_time;
    employee.end_time = end_time;
    employee.total_amount = total_amount;
    employee.total_withdrawn = 0;
    employee.bump = ctx.bumps.employee_schedule;

    emit!(EmployeeScheduleCreated {
        organization: employee.organization,
        beneficiary: employee.beneficiary,
        start_time,
        cliff_time,
        end_time,
        total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateEmployeeSchedule<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Wallet the schedule is bound to; does not sign at creation.
    pub beneficiary: SystemAccount<'info>,

    #[account(
        seeds = [ORGANIZATION_SEED, organization.name.as_bytes()],
        bump = organization.bump,
        has_one = owner @ VestingError::Unauthorized,
    )]
    pub organization: Account<'info, OrganizationVesting>,

    #[account(
        init,
        payer = owner,
        space = 8 + EmployeeSchedule::SIZE,
        seeds = [EMPLOYEE_SEED, beneficiary.key().as_ref(), organization.key().as_ref()],
        bump
    )]
    pub employee_schedule: Account<'info, EmployeeSchedule>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct EmployeeScheduleCreated {
    pub organization: Pubkey,
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub total_amount: u64,
}
