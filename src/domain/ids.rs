//! Account identifiers
//!
//! Ids are handed out by an explicitly owned [`AccountIdSequence`] instead of
//! a process-wide counter.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DomainError;

/// Identifier of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AccountId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Monotonically increasing source of positive account ids.
///
/// # Invariants
/// - Every id returned by [`AccountIdSequence::next_id`] is > 0
/// - Successive ids are strictly increasing
/// - Once `u64::MAX` has been handed out the sequence is exhausted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountIdSequence {
    /// `None` once every id has been used
    next: Option<u64>,
}

impl AccountIdSequence {
    /// Sequence starting at 1
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Sequence starting at `first`. Returns `None` when `first` is zero.
    pub fn starting_at(first: u64) -> Option<Self> {
        (first > 0).then_some(Self { next: Some(first) })
    }

    /// Take the next id
    ///
    /// # Errors
    /// - `DomainError::AccountIdsExhausted` after `u64::MAX` has been issued
    pub fn next_id(&mut self) -> Result<AccountId, DomainError> {
        let id = self.next.ok_or(DomainError::AccountIdsExhausted)?;
        self.next = id.checked_add(1);
        Ok(AccountId(id))
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// Make sure future ids are strictly greater than `id`
    pub fn advance_past(&mut self, id: AccountId) {
        if let Some(next) = self.next {
            if id.0 >= next {
                self.next = id.0.checked_add(1);
            }
        }
    }
}

impl Default for AccountIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_positive() {
        let mut ids = AccountIdSequence::new();
        assert!(ids.next_id().unwrap().value() > 0);
    }

    #[test]
    fn test_sequence_is_increasing() {
        let mut ids = AccountIdSequence::new();
        let first = ids.next_id().unwrap();
        let second = ids.next_id().unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_starting_at_zero_rejected() {
        assert!(AccountIdSequence::starting_at(0).is_none());

        let mut ids = AccountIdSequence::starting_at(100).unwrap();
        assert_eq!(ids.next_id().unwrap(), AccountId::new(100));
    }

    #[test]
    fn test_advance_past() {
        let mut ids = AccountIdSequence::new();
        ids.advance_past(AccountId::new(41));
        assert_eq!(ids.next_id().unwrap(), AccountId::new(42));

        // never moves backwards
        ids.advance_past(AccountId::new(5));
        assert_eq!(ids.next_id().unwrap(), AccountId::new(43));
    }

    #[test]
    fn test_last_id_then_exhausted() {
        let mut ids = AccountIdSequence::starting_at(u64::MAX).unwrap();

        assert_eq!(ids.next_id().unwrap(), AccountId::new(u64::MAX));
        assert!(ids.is_exhausted());
        assert_eq!(ids.next_id(), Err(DomainError::AccountIdsExhausted));
        assert_eq!(ids.next_id(), Err(DomainError::AccountIdsExhausted));
    }

    #[test]
    fn test_advance_past_max_exhausts() {
        let mut ids = AccountIdSequence::new();

        ids.advance_past(AccountId::new(u64::MAX));

        assert!(ids.is_exhausted());
        assert_eq!(ids.next_id(), Err(DomainError::AccountIdsExhausted));
    }

    #[test]
    fn test_account_id_serializes_as_number() {
        let json = serde_json::to_string(&AccountId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
