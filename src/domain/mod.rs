//! Domain module
//!
//! Core domain types and business rules.

pub mod amount;
pub mod error;
pub mod ids;

pub use amount::{format_amount, Amount, Balance};
pub use error::{DomainError, ErrorKind};
pub use ids::{AccountId, AccountIdSequence};
