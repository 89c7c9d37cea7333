//! mini_bank - walkthrough binary
//!
//! Opens accounts in an in-memory bank, moves money through them and logs
//! every step, then prints the final state as JSON.

use mini_bank::{AccountIdSequence, AppResult, Bank, Config, DomainError, LogFormat};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mini_bank=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Run the reference scenario and return the bank it produced
fn run(config: &Config) -> AppResult<Bank> {
    let ids = AccountIdSequence::starting_at(config.first_account_id).unwrap_or_default();
    let mut bank = Bank::with_id_sequence(Vec::new(), ids);

    let checking = bank.open_new_account(Decimal::from(10))?;
    bank.deposit(checking, Decimal::from(3))?;
    let balance = bank.balance(checking)?;
    tracing::info!(account_id = %checking, %balance, "After deposit");

    bank.withdraw(checking, Decimal::from(3))?;
    let balance = bank.balance(checking)?;
    tracing::info!(account_id = %checking, %balance, "After withdrawal");

    bank.deposit(checking, Decimal::ZERO)?;

    let empty = bank.open_new_account(Decimal::ZERO)?;
    match bank.withdraw(empty, Decimal::from(10)) {
        Err(e @ DomainError::InsufficientBalance { .. }) => {
            tracing::info!(account_id = %empty, error = %e, "Overdraft refused");
        }
        other => other?,
    }

    Ok(bank)
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    tracing::info!(environment = %config.environment, "Starting mini_bank walkthrough");

    let bank = run(&config)?;
    println!("{}", serde_json::to_string_pretty(bank.accounts())?);

    tracing::info!("Walkthrough finished");
    Ok(())
}
