//! In memory multi currency wallets.
//!
//! A [`Wallet`] keeps per currency balances plus the ordered history of
//! [`Transaction`]s that produced them. Top ups, withdrawals and transfers
//! are validated before any state changes, so a rejected operation leaves
//! no trace. [`Ledger`] groups named wallets for the batch binary.

pub mod cli_io;
mod constants;
pub mod currency;
pub mod error;
pub mod ledger;
pub mod operation;
#[cfg(test)]
mod test;
pub mod transaction;
pub mod wallet;

pub use currency::Currency;
pub use error::{LedgerError, WalletError};
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionStatus, TransactionType, WalletRef};
pub use wallet::Wallet;
