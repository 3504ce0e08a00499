use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ORGANIZATION_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::OrganizationVesting;

// Funding is open to any party; the vault only needs to hold enough in
// aggregate for claims to clear, and under-funding surfaces at claim time.
pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    require_keys_eq!(
        ctx.accounts.funder_token_account.mint,
        ctx.accounts.organization.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.funder_token_account.owner,
        ctx.accounts.funder.key(),
        VestingError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(VaultFunded {
        organization: ctx.accounts.organization.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundVault<'info> {
    #[account(
        seeds = [ORGANIZATION_SEED, organization.name.as_bytes()],
        bump = organization.bump,
    )]
    pub organization: Account<'info, OrganizationVesting>,

    #[account(
        mut,
        seeds = [VAULT_SEED, organization.key().as_ref()],
        bump = organization.vault_bump,
        constraint = vault.mint == organization.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VaultFunded {
    pub organization: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
