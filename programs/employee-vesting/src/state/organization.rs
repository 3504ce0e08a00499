use anchor_lang::prelude::*;

use crate::constants::MAX_NAME_LEN;

/// Per-organization vesting record; owns the custody vault.
/// Seeds: [b"organization", name.as_bytes()] — the name doubles as the
/// record's address seed, so exactly one record exists per name.
#[account]
pub struct OrganizationVesting {
    /// Creator identity; the only signer allowed to add employee schedules.
    pub owner: Pubkey,
    /// Mint of the escrowed token.
    pub mint: Pubkey,
    /// Custody vault token account. Its transfer authority is this record's
    /// PDA, never a human key.
    pub vault: Pubkey,
    /// Human label, 1-32 bytes.
    pub name: String,
    /// Bump of the vault token account PDA.
    pub vault_bump: u8,
    /// Bump of this record's PDA.
    pub bump: u8,
}

impl OrganizationVesting {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // vault
        4 + MAX_NAME_LEN + // name (borsh length prefix + bytes)
        1 +  // vault_bump
        1;   // bump
}
