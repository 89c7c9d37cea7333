//! mini_bank Library
//!
//! In-memory bank accounts with validated deposits and withdrawals.

pub mod aggregate;
pub mod bank;
pub mod config;
pub mod domain;
mod error;

pub use aggregate::Account;
pub use bank::{AccountStore, Bank};
pub use config::{Config, LogFormat};
pub use domain::{AccountId, AccountIdSequence, Amount, Balance, DomainError, ErrorKind};
pub use error::{AppError, AppResult};
