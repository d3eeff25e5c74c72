use crate::constants::PRECISION;
use crate::currency::Currency;
use crate::error::WalletError;
use crate::transaction::{Transaction, TransactionType, WalletRef};
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use uuid::Uuid;

/// Struct to hold a named set of per currency balances and their history
#[derive(Debug)]
pub struct Wallet {
    /// In memory identity, what transactions point back to
    key: Uuid,

    /// Assigned by whatever persists the wallet, unset until then
    id: Option<Uuid>,

    name: String,

    /// Balances in the order their currency was first seen
    balance: Vec<(Currency, Decimal)>,
    /// O(1) lookup of a currency's slot in `balance`
    balance_map: HashMap<Currency, usize>,

    /// Every recorded transaction, oldest first
    transactions: Vec<Transaction>,
}

impl Wallet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: Uuid::new_v4(),
            id: None,
            name: name.into(),
            balance: vec![],
            balance_map: HashMap::new(),
            transactions: vec![],
        }
    }

    pub fn key(&self) -> WalletRef {
        WalletRef(self.key)
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    /// Called by a persistence layer once the wallet has been stored
    pub fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> &[(Currency, Decimal)] {
        &self.balance
    }

    /// Current balance in `currency`, zero when it was never used
    pub fn balance_of(&self, currency: Currency) -> Decimal {
        self.balance_map
            .get(&currency)
            .map_or(Decimal::ZERO, |indx| self.balance[*indx].1)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Records a movement of `amount` in `currency` and returns the new transaction.
    /// Fails without touching the wallet if the currency code is not recognized
    /// or the balance would overflow.
    pub fn add_transaction(
        &mut self,
        amount: Decimal,
        currency: &str,
        transaction_type: TransactionType,
    ) -> Result<Transaction, WalletError> {
        let currency = currency.parse::<Currency>()?;
        let next_balance = self.next_balance(amount, currency)?;
        Ok(self.record(amount, currency, transaction_type, next_balance))
    }

    /// Credits the wallet. `amount` is expected to be positive.
    pub fn top_up(&mut self, amount: Decimal, currency: &str) -> Result<Transaction, WalletError> {
        self.add_transaction(amount, currency, TransactionType::TopUp)
    }

    /// Debits the wallet, refusing to take a balance below zero
    pub fn withdraw(&mut self, amount: Decimal, currency: &str) -> Result<Transaction, WalletError> {
        let currency = currency.parse::<Currency>()?;
        let next_balance = self.check_debit(amount, currency)?;
        Ok(self.record(-amount, currency, TransactionType::Withdrawal, next_balance))
    }

    /// Moves `amount` from this wallet to `destination`.
    /// Both legs are validated before either wallet changes.
    pub fn transfer(
        &mut self,
        amount: Decimal,
        currency: &str,
        destination: &mut Wallet,
    ) -> Result<(Transaction, Transaction), WalletError> {
        let currency = currency.parse::<Currency>()?;
        let origin_balance = self.check_debit(amount, currency)?;
        let destination_balance = destination.next_balance(amount, currency)?;

        let origin_txn = self.record(-amount, currency, TransactionType::Transfer, origin_balance);
        let destination_txn = destination.record(
            amount,
            currency,
            TransactionType::Transfer,
            destination_balance,
        );
        Ok((origin_txn, destination_txn))
    }

    /// Formatted balance per currency, e.g. "USD 100.00", in first use order.
    /// Currencies that were fully withdrawn are still listed.
    pub fn list_balance(&self) -> impl Iterator<Item = String> + '_ {
        self.balance
            .iter()
            .map(|(currency, amount)| format!("{} {}", currency, format_amount(amount)))
    }

    fn next_balance(&self, amount: Decimal, currency: Currency) -> Result<Decimal, WalletError> {
        self.balance_of(currency)
            .checked_add(amount)
            .ok_or(WalletError::Overflow { currency })
    }

    /// Balance left after debiting a positive `amount`
    fn check_debit(&self, amount: Decimal, currency: Currency) -> Result<Decimal, WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::NonPositiveAmount(amount));
        }
        let available = self.balance_of(currency);
        if available < amount {
            return Err(WalletError::InsufficientFunds {
                currency,
                requested: amount,
                available,
            });
        }
        Ok(available - amount)
    }

    // Infallible, all validation happens before this point
    fn record(
        &mut self,
        amount: Decimal,
        currency: Currency,
        transaction_type: TransactionType,
        next_balance: Decimal,
    ) -> Transaction {
        let txn = Transaction::pending(self.key(), amount, currency, transaction_type);
        if let Some(indx) = self.balance_map.get(&currency).copied() {
            self.balance[indx].1 = next_balance;
        } else {
            self.balance_map.insert(currency, self.balance.len());
            self.balance.push((currency, next_balance));
        }
        self.transactions.push(txn.clone());
        debug!(
            "wallet {:?}: {:?} {} {}, balance now {}",
            self.name, transaction_type, amount, currency, next_balance
        );
        txn
    }
}

/// Renders an amount rounded half away from zero to two fraction digits.
/// A balance drawn down to zero prints as "0.00", never "-0.00".
pub(crate) fn format_amount(amount: &Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(PRECISION as u32, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return format!("{:.*}", PRECISION, Decimal::ZERO);
    }
    format!("{:.*}", PRECISION, rounded)
}
