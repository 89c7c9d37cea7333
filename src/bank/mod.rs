//! Bank module
//!
//! The registry that opens accounts and routes deposits and withdrawals to
//! them by id.

mod store;

pub use store::AccountStore;

use rust_decimal::Decimal;

use crate::aggregate::Account;
use crate::domain::{AccountId, AccountIdSequence, Amount, Balance, DomainError};

// =========================================================================
// Bank
// =========================================================================

/// Account registry
///
/// Owns its id sequence, so ids are unique per bank rather than per process.
/// The account collection is injectable; pass `&mut Vec<Account>` to keep
/// hold of it and observe what the bank does.
#[derive(Debug, Clone)]
pub struct Bank<S = Vec<Account>> {
    accounts: S,
    ids: AccountIdSequence,
}

impl Bank {
    /// Create an empty bank whose first account gets id 1
    pub fn new() -> Self {
        Self::with_accounts(Vec::new())
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AccountStore> Bank<S> {
    /// Create a bank over an existing store
    pub fn with_accounts(accounts: S) -> Self {
        Self::with_id_sequence(accounts, AccountIdSequence::new())
    }

    /// Create a bank over an existing store, drawing ids from `ids`.
    ///
    /// The sequence is moved past every id already in the store.
    pub fn with_id_sequence(accounts: S, mut ids: AccountIdSequence) -> Self {
        if let Some(max_id) = accounts.max_id() {
            ids.advance_past(max_id);
        }
        Self { accounts, ids }
    }

    // =========================================================================
    // Bank::open_new_account()
    // =========================================================================

    /// Open an account holding `initial_balance` and return its id.
    ///
    /// A negative initial balance is rejected and no id is consumed. Fails
    /// with `AccountIdsExhausted` once the id sequence has run out.
    pub fn open_new_account(
        &mut self,
        initial_balance: Decimal,
    ) -> Result<AccountId, DomainError> {
        let opened = Amount::new(initial_balance).and_then(|initial_balance| {
            let mut account = Account::create(&mut self.ids)?;
            account.set_balance(initial_balance.value());
            Ok(account)
        });
        let account = opened.map_err(|e| {
            tracing::warn!(error = %e, "Rejected account opening");
            e
        })?;

        let account_id = account.id();
        self.accounts.add(account);

        tracing::debug!(%account_id, %initial_balance, "Account opened");
        Ok(account_id)
    }

    // =========================================================================
    // Bank::deposit()
    // =========================================================================

    /// Deposit `amount` into the account with the given id
    pub fn deposit(&mut self, account_id: AccountId, amount: Decimal) -> Result<(), DomainError> {
        let result = self
            .find_account_mut(account_id)
            .and_then(|account| account.deposit(amount));

        match &result {
            Ok(()) => tracing::debug!(%account_id, %amount, "Deposit applied"),
            Err(e) => tracing::warn!(%account_id, %amount, error = %e, "Deposit rejected"),
        }
        result
    }

    // =========================================================================
    // Bank::withdraw()
    // =========================================================================

    /// Withdraw `amount` from the account with the given id
    pub fn withdraw(&mut self, account_id: AccountId, amount: Decimal) -> Result<(), DomainError> {
        let result = self
            .find_account_mut(account_id)
            .and_then(|account| account.withdraw(amount));

        match &result {
            Ok(()) => tracing::debug!(%account_id, %amount, "Withdrawal applied"),
            Err(e) => tracing::warn!(%account_id, %amount, error = %e, "Withdrawal rejected"),
        }
        result
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Look up an account by id
    pub fn account(&self, account_id: AccountId) -> Result<&Account, DomainError> {
        self.accounts
            .find(account_id)
            .ok_or(DomainError::AccountNotFound(account_id))
    }

    /// Current balance of the account with the given id
    pub fn balance(&self, account_id: AccountId) -> Result<Balance, DomainError> {
        self.account(account_id).map(|account| *account.balance())
    }

    pub fn accounts(&self) -> &S {
        &self.accounts
    }

    pub fn into_accounts(self) -> S {
        self.accounts
    }

    fn find_account_mut(&mut self, account_id: AccountId) -> Result<&mut Account, DomainError> {
        self.accounts
            .find_mut(account_id)
            .ok_or(DomainError::AccountNotFound(account_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use rust_decimal_macros::dec;

    const AMOUNT: i64 = 5;
    const INITIAL_BALANCE: i64 = 10;

    fn create_test_account(ids: &mut AccountIdSequence, initial_balance: Decimal) -> Account {
        let mut account = Account::create(ids).unwrap();
        account.set_balance(initial_balance);
        account
    }

    #[test]
    fn test_open_new_account_returns_positive_id_and_stores_account() {
        let mut accounts: Vec<Account> = Vec::new();
        let mut bank = Bank::with_accounts(&mut accounts);

        let new_account_id = bank.open_new_account(INITIAL_BALANCE.into()).unwrap();

        assert!(new_account_id.value() > 0);
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id(), new_account_id);
        assert_eq!(accounts[0].balance().value(), Decimal::from(INITIAL_BALANCE));
    }

    #[test]
    fn test_open_new_account_ids_increase() {
        let mut bank = Bank::new();

        let first = bank.open_new_account(Decimal::ZERO).unwrap();
        let second = bank.open_new_account(Decimal::ZERO).unwrap();

        assert!(first < second);
    }

    #[test]
    fn test_open_new_account_negative_balance_rejected() {
        let mut bank = Bank::new();

        let err = bank.open_new_account(dec!(-3)).unwrap_err();

        assert_eq!(err.to_string(), "Negative amount: -3.0");
        assert!(bank.accounts().is_empty());
        assert_eq!(bank.open_new_account(Decimal::ZERO).unwrap(), AccountId::new(1));
    }

    #[test]
    fn test_deposit_when_account_is_not_found() {
        let mut bank = Bank::new();

        let err = bank
            .deposit(AccountId::new(1), INITIAL_BALANCE.into())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "No account found with id: 1");
    }

    #[test]
    fn test_deposit_when_account_is_found() {
        let mut ids = AccountIdSequence::new();
        let another = create_test_account(&mut ids, Decimal::ZERO);
        let to_be_found = create_test_account(&mut ids, INITIAL_BALANCE.into());
        let to_be_found_id = to_be_found.id();
        let mut accounts = vec![another, to_be_found];

        let mut bank = Bank::with_accounts(&mut accounts);
        bank.deposit(to_be_found_id, AMOUNT.into()).unwrap();

        assert_eq!(accounts[0].balance().value(), Decimal::ZERO);
        assert_eq!(
            accounts[1].balance().value(),
            Decimal::from(INITIAL_BALANCE + AMOUNT)
        );
    }

    #[test]
    fn test_withdraw_when_account_is_not_found() {
        let mut bank = Bank::new();

        let err = bank.withdraw(AccountId::new(1), AMOUNT.into()).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No account found with id: 1");
    }

    #[test]
    fn test_withdraw_when_account_is_found() {
        let mut ids = AccountIdSequence::new();
        let test_account = create_test_account(&mut ids, INITIAL_BALANCE.into());
        let test_account_id = test_account.id();
        let mut accounts = vec![test_account];

        let mut bank = Bank::with_accounts(&mut accounts);
        bank.withdraw(test_account_id, AMOUNT.into()).unwrap();

        assert_eq!(
            accounts[0].balance().value(),
            Decimal::from(INITIAL_BALANCE - AMOUNT)
        );
    }

    #[test]
    fn test_account_errors_propagate_unchanged() {
        let mut bank = Bank::new();
        let account_id = bank.open_new_account(Decimal::ZERO).unwrap();

        let err = bank.withdraw(account_id, dec!(10)).unwrap_err();
        assert_eq!(err, DomainError::insufficient_balance(dec!(10), dec!(0)));
        assert_eq!(err.to_string(), "Cannot withdraw 10.0 from 0.0");

        let err = bank.deposit(account_id, dec!(-1)).unwrap_err();
        assert_eq!(err, DomainError::negative_amount(dec!(-1)));

        assert_eq!(bank.balance(account_id).unwrap(), Balance::zero());
    }

    #[test]
    fn test_seeded_store_does_not_reuse_ids() {
        let mut ids = AccountIdSequence::starting_at(7).unwrap();
        let seeded = create_test_account(&mut ids, Decimal::ZERO);

        let mut bank = Bank::with_accounts(vec![seeded]);
        let opened = bank.open_new_account(Decimal::ZERO).unwrap();

        assert_eq!(opened, AccountId::new(8));
        assert_eq!(bank.into_accounts().len(), 2);
    }

    #[test]
    fn test_custom_id_sequence() {
        let ids = AccountIdSequence::starting_at(1000).unwrap();
        let mut bank = Bank::with_id_sequence(Vec::new(), ids);

        let account_id = bank.open_new_account(dec!(2.5)).unwrap();

        assert_eq!(account_id, AccountId::new(1000));
        assert_eq!(bank.balance(account_id).unwrap().value(), dec!(2.5));
        assert!(bank.balance(AccountId::new(1)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let mut bank = Bank::new();
        let account_id = bank.open_new_account(Decimal::MAX).unwrap();

        let err = bank.deposit(account_id, Decimal::ONE).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(bank.balance(account_id).unwrap().value(), Decimal::MAX);
    }

    #[test]
    fn test_open_new_account_when_ids_run_out() {
        let ids = AccountIdSequence::starting_at(u64::MAX).unwrap();
        let mut bank = Bank::with_id_sequence(Vec::new(), ids);

        let last = bank.open_new_account(Decimal::ZERO).unwrap();
        assert_eq!(last, AccountId::new(u64::MAX));

        let err = bank.open_new_account(Decimal::ZERO).unwrap_err();
        assert_eq!(err, DomainError::AccountIdsExhausted);
        assert_eq!(bank.accounts().len(), 1);
    }

    #[test]
    fn test_seeded_store_with_max_id() {
        let mut ids = AccountIdSequence::starting_at(u64::MAX).unwrap();
        let seeded = create_test_account(&mut ids, Decimal::ZERO);

        let mut bank = Bank::with_accounts(vec![seeded]);

        assert_eq!(
            bank.open_new_account(Decimal::ZERO),
            Err(DomainError::AccountIdsExhausted)
        );
    }
}
