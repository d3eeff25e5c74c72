use crate::error::LedgerError;
use crate::wallet::Wallet;
use std::collections::HashMap;
mod operations;
mod stream_process;

pub use stream_process::StreamSummary;

/// In memory registry of named wallets
#[derive(Debug, Default)]
pub struct Ledger {
    /// List of wallets in order of their creation
    wallets: Vec<Wallet>,
    /// O(1) lookup of a wallet's index by name
    wallet_map: HashMap<String, usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            wallets: vec![],
            wallet_map: HashMap::new(),
        }
    }

    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn wallet(&self, name: &str) -> Option<&Wallet> {
        self.wallet_map.get(name).map(|indx| &self.wallets[*indx])
    }

    /// Registers an empty wallet under `name`
    pub fn open_wallet(&mut self, name: &str) -> Result<&mut Wallet, LedgerError> {
        if self.wallet_map.contains_key(name) {
            return Err(LedgerError::WalletAlreadyExists(name.to_string()));
        }
        let indx = self.insert_wallet(name);
        Ok(&mut self.wallets[indx])
    }

    fn insert_wallet(&mut self, name: &str) -> usize {
        let indx = self.wallets.len();
        self.wallets.push(Wallet::new(name));
        self.wallet_map.insert(name.to_string(), indx);
        indx
    }

    fn wallet_indx(&self, name: &str) -> Result<usize, LedgerError> {
        self.wallet_map
            .get(name)
            .copied()
            .ok_or_else(|| LedgerError::WalletDoesNotExist(name.to_string()))
    }

    // Caller guarantees the indices differ
    fn wallet_pair_mut(&mut self, a: usize, b: usize) -> (&mut Wallet, &mut Wallet) {
        if a < b {
            let (left, right) = self.wallets.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.wallets.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }
}
