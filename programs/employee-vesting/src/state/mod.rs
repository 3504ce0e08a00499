pub mod employee;
pub mod organization;

pub use employee::*;
pub use organization::*;
