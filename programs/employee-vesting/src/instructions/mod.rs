pub mod claim_tokens;
pub mod create_employee_schedule;
pub mod create_organization;
pub mod fund_vault;
pub mod quote_claimable;

pub use claim_tokens::*;
pub use create_employee_schedule::*;
pub use create_organization::*;
pub use fund_vault::*;
pub use quote_claimable::*;
