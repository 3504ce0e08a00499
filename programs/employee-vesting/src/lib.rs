#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("8gvmN2UC45vRcpDgDx7LtMzAX67ZGmp1vcXNJSenz1n1");

#[program]
pub mod employee_vesting {
    use super::*;

    /// Create an organization vesting record together with its custody
    /// vault. The vault's transfer authority is the record PDA.
    pub fn create_organization(ctx: Context<CreateOrganization>, name: String) -> Result<()> {
        instructions::create_organization(ctx, name)
    }

    /// Record a beneficiary's unlock schedule. Records entitlement only;
    /// no tokens move until claim time.
    pub fn create_employee_schedule(
        ctx: Context<CreateEmployeeSchedule>,
        start_time: i64,
        cliff_time: i64,
        end_time: i64,
        total_amount: u64,
    ) -> Result<()> {
        instructions::create_employee_schedule(ctx, start_time, cliff_time, end_time, total_amount)
    }

    /// Deposit tokens into an organization's custody vault.
    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        instructions::fund_vault(ctx, amount)
    }

    /// Pay out everything currently claimable on the caller's schedule.
    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        instructions::claim_tokens(ctx)
    }

    /// Quote the currently claimable amount without touching state.
    pub fn quote_claimable(ctx: Context<QuoteClaimable>) -> Result<u64> {
        instructions::quote_claimable(ctx)
    }
}
