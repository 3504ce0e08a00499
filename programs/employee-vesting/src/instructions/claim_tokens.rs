use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{EMPLOYEE_SEED, ORGANIZATION_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{EmployeeSchedule, OrganizationVesting};
use crate::utils::schedule;

pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
    // Capture the authority AccountInfo before taking field borrows.
    let organization_ai = ctx.accounts.organization.to_account_info();

    let employee = &ctx.accounts.employee_schedule;
    let now = Clock::get()?.unix_timestamp;

    let amount = schedule::claimable_amount(
        employee.start_time,
        employee.cliff_time,
        employee.end_time,
        employee.total_amount,
        employee.total_withdrawn,
        now,
    )?;
    require!(amount > 0, VestingError::NothingToClaim);
    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    // CPI transfer from the vault to the beneficiary's ATA, signed by the
    // organization record PDA (the vault's bound authority).
    let org = &ctx.accounts.organization;
    let signer_seeds: &[&[&[u8]]] = &[&[
        ORGANIZATION_SEED,
        org.name.as_bytes(),
        &[org.bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: organization_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    let employee = &mut ctx.accounts.employee_schedule;
    employee.total_withdrawn = employee
        .total_withdrawn
        .checked_add(amount)
        .ok_or(VestingError::MathOverflow)?;

    emit!(TokensClaimed {
        organization: employee.organization,
        beneficiary: employee.beneficiary,
        amount,
        total_withdrawn: employee.total_withdrawn,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(
        mut,
        seeds = [EMPLOYEE_SEED, beneficiary.key().as_ref(), organization.key().as_ref()],
        bump = employee_schedule.bump,
        has_one = beneficiary @ VestingError::Unauthorized,
        has_one = organization,
    )]
    pub employee_schedule: Account<'info, EmployeeSchedule>,

    #[account(
        seeds = [ORGANIZATION_SEED, organization.name.as_bytes()],
        bump = organization.bump,
        has_one = vault,
        has_one = mint @ VestingError::InvalidTokenMint,
    )]
    pub organization: Account<'info, OrganizationVesting>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [VAULT_SEED, organization.key().as_ref()],
        bump = organization.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::mint = mint,
        associated_token::authority = beneficiary,
        associated_token::token_program = token_program,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensClaimed {
    pub organization: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_withdrawn: u64,
}
