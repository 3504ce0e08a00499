use anchor_lang::prelude::*;

/// Custom error codes for the employee vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Organization name must be 1-32 bytes")]
    InvalidName,

    #[msg("Invalid schedule: bad time ordering or zero amount")]
    InvalidSchedule,

    #[msg("Unauthorized signer")]
    Unauthorized,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
