//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use rust_decimal::Decimal;
use thiserror::Error;

use super::amount::format_amount;
use super::ids::AccountId;

/// Broad category of a [`DomainError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Negative amount, or a withdrawal larger than the balance
    InvalidArgument,
    /// No account with the requested id
    NotFound,
    /// The id sequence has no ids left to hand out
    Exhausted,
}

/// Domain-specific errors
///
/// The `Display` output of each variant is the message callers see.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Amount below zero
    #[error("Negative amount: {}", format_amount(.amount))]
    NegativeAmount { amount: Decimal },

    /// Withdrawal exceeds the available balance
    #[error("Cannot withdraw {} from {}", format_amount(.requested), format_amount(.available))]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    /// Deposit would push the balance past the largest representable value
    #[error("Cannot deposit {} into {}: balance overflow", format_amount(.amount), format_amount(.balance))]
    BalanceOverflow { amount: Decimal, balance: Decimal },

    /// Account not found
    #[error("No account found with id: {0}")]
    AccountNotFound(AccountId),

    /// Every account id has been handed out
    #[error("No account ids left to assign")]
    AccountIdsExhausted,
}

impl DomainError {
    /// Create a negative amount error
    pub fn negative_amount(amount: Decimal) -> Self {
        Self::NegativeAmount { amount }
    }

    /// Create an insufficient balance error
    pub fn insufficient_balance(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientBalance {
            requested,
            available,
        }
    }

    /// Create a balance overflow error
    pub fn balance_overflow(amount: Decimal, balance: Decimal) -> Self {
        Self::BalanceOverflow { amount, balance }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeAmount { .. }
            | Self::InsufficientBalance { .. }
            | Self::BalanceOverflow { .. } => ErrorKind::InvalidArgument,
            Self::AccountNotFound(_) => ErrorKind::NotFound,
            Self::AccountIdsExhausted => ErrorKind::Exhausted,
        }
    }

    /// Check if this error was caused by a bad argument
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Check if this error was caused by an unknown account
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
