use crate::currency::Currency;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Kind of balance movement a transaction records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    TopUp,
    Withdrawal,
    Transfer,
}

/// Settlement state. Wallets only ever produce `Pending`,
/// completion or failure is decided outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

/// Non-owning reference to the wallet a transaction was recorded against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalletRef(pub Uuid);

/// A single balance movement, immutable once recorded by a wallet
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Unset until a persistence layer stores the record
    id: Option<Uuid>,
    /// Negative for debits, positive for credits
    amount: Decimal,
    currency: Currency,
    transaction_type: TransactionType,
    status: TransactionStatus,
    wallet: WalletRef,
}

impl Transaction {
    pub(crate) fn pending(
        wallet: WalletRef,
        amount: Decimal,
        currency: Currency,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id: None,
            amount,
            currency,
            transaction_type,
            status: TransactionStatus::Pending,
            wallet,
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    pub fn wallet(&self) -> WalletRef {
        self.wallet
    }
}
