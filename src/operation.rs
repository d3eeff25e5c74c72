use rust_decimal::Decimal;

/// Requests a ledger can apply to its named wallets
#[derive(Debug, Clone, PartialEq)]
pub enum WalletOp {
    Open(OpenOp),
    TopUp(AmountOp),
    Withdraw(AmountOp),
    Transfer(TransferOp),
}

/// Creates an empty wallet
#[derive(Debug, Clone, PartialEq)]
pub struct OpenOp {
    pub wallet: String,
}

/// A single wallet movement. Currency stays a raw code so the wallet validates it.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountOp {
    pub wallet: String,
    pub amount: Decimal,
    pub currency: String,
}

/// Moves funds from `wallet` to `destination`
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOp {
    pub wallet: String,
    pub destination: String,
    pub amount: Decimal,
    pub currency: String,
}
