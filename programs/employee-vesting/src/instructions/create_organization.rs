use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MAX_NAME_LEN, ORGANIZATION_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::OrganizationVesting;

pub fn create_organization(ctx: Context<CreateOrganization>, name: String) -> Result<()> {
    require!(!name.is_empty(), VestingError::InvalidName);
    require!(name.len() <= MAX_NAME_LEN, VestingError::InvalidName);

    let org = &mut ctx.accounts.organization;
    org.owner = ctx.accounts.owner.key();
    org.mint = ctx.accounts.mint.key();
    org.vault = ctx.accounts.vault.key();
    org.name = name;
    org.vault_bump = ctx.bumps.vault;
    org.bump = ctx.bumps.organization;

    emit!(OrganizationCreated {
        organization: org.key(),
        owner: org.owner,
        mint: org.mint,
        vault: org.vault,
        name: org.name.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(name: String)]
pub struct CreateOrganization<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = owner,
        space = 8 + OrganizationVesting::SIZE,
        seeds = [ORGANIZATION_SEED, name.as_bytes()],
        bump
    )]
    pub organization: Account<'info, OrganizationVesting>,

    // Move authority is the organization record PDA; no human key can ever
    // sign for this account.
    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = organization,
        seeds = [VAULT_SEED, organization.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct OrganizationCreated {
    pub organization: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub name: String,
}
