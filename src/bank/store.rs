//! Account Store
//!
//! The collection a [`Bank`](super::Bank) keeps its accounts in. Callers can
//! hand in their own store and inspect it afterwards.

use crate::aggregate::Account;
use crate::domain::AccountId;

/// Storage for accounts, looked up by id
pub trait AccountStore {
    /// Find the first account with the given id
    fn find(&self, id: AccountId) -> Option<&Account>;

    /// Find the first account with the given id, mutably
    fn find_mut(&mut self, id: AccountId) -> Option<&mut Account>;

    /// Store an account
    fn add(&mut self, account: Account);

    /// Largest id currently stored
    fn max_id(&self) -> Option<AccountId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Linear scan; first match wins.
impl AccountStore for Vec<Account> {
    fn find(&self, id: AccountId) -> Option<&Account> {
        self.iter().find(|account| account.id() == id)
    }

    fn find_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.iter_mut().find(|account| account.id() == id)
    }

    fn add(&mut self, account: Account) {
        self.push(account);
    }

    fn max_id(&self) -> Option<AccountId> {
        self.iter().map(Account::id).max()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<S: AccountStore + ?Sized> AccountStore for &mut S {
    fn find(&self, id: AccountId) -> Option<&Account> {
        (**self).find(id)
    }

    fn find_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        (**self).find_mut(id)
    }

    fn add(&mut self, account: Account) {
        (**self).add(account)
    }

    fn max_id(&self) -> Option<AccountId> {
        (**self).max_id()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
