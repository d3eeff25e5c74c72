use crate::currency::Currency;
use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections raised by a single wallet. None of them leave a trace on the wallet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    #[error("unrecognized currency code: {0:?}")]
    InvalidCurrency(String),

    #[error("insufficient {currency} funds: requested {requested}, available {available}")]
    InsufficientFunds {
        currency: Currency,
        requested: Decimal,
        available: Decimal,
    },

    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("{currency} balance would overflow")]
    Overflow { currency: Currency },
}

/// Rejections raised while applying operations to a ledger of named wallets
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("wallet {0:?} does not exist")]
    WalletDoesNotExist(String),

    #[error("wallet {0:?} already exists")]
    WalletAlreadyExists(String),

    #[error("wallet {0:?} cannot transfer to itself")]
    SelfTransfer(String),

    #[error(transparent)]
    Wallet(#[from] WalletError),
}
