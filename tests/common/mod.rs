//! Common test utilities

use mini_bank::{Account, AccountIdSequence};
use rust_decimal::Decimal;

/// Create an account holding `initial_balance`, taking its id from `ids`
pub fn create_test_account(ids: &mut AccountIdSequence, initial_balance: Decimal) -> Account {
    let mut account = Account::create(ids).expect("id sequence exhausted");
    account.set_balance(initial_balance);
    account
}
