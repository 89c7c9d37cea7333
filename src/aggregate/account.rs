//! Account Aggregate
//!
//! Account holds an id and a balance, and guards every balance change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, AccountIdSequence, Amount, Balance, DomainError};

/// Account Aggregate
///
/// A failed deposit or withdrawal leaves the balance untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account ID
    id: AccountId,

    /// Current balance
    balance: Balance,
}

impl Account {
    // =========================================================================
    // Account::create()
    // =========================================================================

    /// Create a new account with a zero balance, taking its id from `ids`
    pub fn create(ids: &mut AccountIdSequence) -> Result<Self, DomainError> {
        Ok(Self {
            id: ids.next_id()?,
            balance: Balance::zero(),
        })
    }

    /// Overwrite the balance without validation.
    ///
    /// Meant for seeding state; normal flows go through deposit/withdraw.
    pub fn set_balance(&mut self, amount: Decimal) {
        self.balance = Balance::from_decimal_unchecked(amount);
    }

    // =========================================================================
    // Account::deposit()
    // =========================================================================

    /// Deposit money into the account
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), DomainError> {
        let amount = Amount::new(amount)?;
        self.balance = self.balance.credit(&amount)?;
        Ok(())
    }

    // =========================================================================
    // Account::withdraw()
    // =========================================================================

    /// Withdraw money from the account
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), DomainError> {
        let amount = Amount::new(amount)?;
        self.balance = self.balance.debit(&amount)?;
        Ok(())
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn balance(&self) -> &Balance {
        &self.balance
    }
}
