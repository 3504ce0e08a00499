//! Program-wide constants.

/// Max byte length of an organization name. The name is a single PDA seed,
/// so it must fit the runtime's 32-byte per-seed limit.
pub const MAX_NAME_LEN: usize = 32;

/// Seed prefix for organization vesting records.
pub const ORGANIZATION_SEED: &[u8] = b"organization";

/// Seed prefix for custody vault token accounts.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed prefix for employee schedule records.
pub const EMPLOYEE_SEED: &[u8] = b"employee";
