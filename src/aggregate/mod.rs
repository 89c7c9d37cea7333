//! Aggregate module
//!
//! Aggregate roots that own balance state.

pub mod account;

pub use account::Account;
