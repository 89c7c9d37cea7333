//! Amount type
//!
//! Domain primitives for monetary values. Amounts are validated at
//! construction time, so a negative deposit or withdrawal cannot reach
//! an account balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::DomainError;

/// Render a decimal with at least one fractional digit.
///
/// `10` becomes `10.0`, `2.50` becomes `2.5`.
pub fn format_amount(value: &Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}

/// Amount represents a validated monetary value moved in or out of an account.
///
/// # Invariants
/// - Value is never negative (zero is allowed)
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use mini_bank::domain::Amount;
///
/// let amount = Amount::new(Decimal::new(3, 0)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(3, 0));
/// assert!(Amount::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Create a new Amount with validation.
    ///
    /// # Errors
    /// - `DomainError::NegativeAmount` if value < 0
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value < Decimal::ZERO {
            return Err(DomainError::negative_amount(value));
        }
        Ok(Self(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Balance represents an account balance.
///
/// Balances produced by [`Balance::credit`] and [`Balance::debit`] are never
/// negative. [`Balance::from_decimal_unchecked`] skips that rule for setup code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Balance(Decimal);

impl Balance {
    /// Create a zero balance
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create a balance from a decimal value without validation
    pub fn from_decimal_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the underlying value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Check if balance covers a withdrawal of `amount`
    pub fn is_sufficient_for(&self, amount: &Amount) -> bool {
        self.0 >= amount.value()
    }

    /// Add amount to balance
    pub fn credit(&self, amount: &Amount) -> Result<Balance, DomainError> {
        self.0
            .checked_add(amount.value())
            .map(Self)
            .ok_or_else(|| DomainError::balance_overflow(amount.value(), self.0))
    }

    /// Subtract amount from balance
    pub fn debit(&self, amount: &Amount) -> Result<Balance, DomainError> {
        if !self.is_sufficient_for(amount) {
            return Err(DomainError::insufficient_balance(amount.value(), self.0));
        }
        Ok(Self(self.0 - amount.value()))
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(&self.0))
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::zero()
    }
}
