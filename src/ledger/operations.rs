use super::Ledger;
use crate::error::LedgerError;
use crate::operation::{AmountOp, OpenOp, TransferOp, WalletOp};
use crate::transaction::Transaction;
use crate::wallet::Wallet;

impl Ledger {
    fn process_open(&mut self, op: &OpenOp) -> Result<Vec<Transaction>, LedgerError> {
        self.open_wallet(&op.wallet)?;
        Ok(vec![])
    }

    /// Tops up the named wallet, creating it on first use
    fn process_top_up(&mut self, op: &AmountOp) -> Result<Vec<Transaction>, LedgerError> {
        match self.wallet_map.get(&op.wallet).copied() {
            Some(indx) => {
                let txn = self.wallets[indx].top_up(op.amount, &op.currency)?;
                Ok(vec![txn])
            }
            None => {
                // Validate on a detached wallet so a rejected top up never registers a name
                let mut wallet = Wallet::new(op.wallet.as_str());
                let txn = wallet.top_up(op.amount, &op.currency)?;
                self.wallet_map.insert(op.wallet.clone(), self.wallets.len());
                self.wallets.push(wallet);
                Ok(vec![txn])
            }
        }
    }

    fn process_withdraw(&mut self, op: &AmountOp) -> Result<Vec<Transaction>, LedgerError> {
        let indx = self.wallet_indx(&op.wallet)?;
        let txn = self.wallets[indx].withdraw(op.amount, &op.currency)?;
        Ok(vec![txn])
    }

    fn process_transfer(&mut self, op: &TransferOp) -> Result<Vec<Transaction>, LedgerError> {
        if op.wallet == op.destination {
            return Err(LedgerError::SelfTransfer(op.wallet.clone()));
        }
        let origin_indx = self.wallet_indx(&op.wallet)?;
        let destination_indx = self.wallet_indx(&op.destination)?;
        let (origin, destination) = self.wallet_pair_mut(origin_indx, destination_indx);
        let (origin_txn, destination_txn) = origin.transfer(op.amount, &op.currency, destination)?;
        Ok(vec![origin_txn, destination_txn])
    }

    /// Base level operation processing function. Updates wallet state with op info
    /// and returns the transactions it recorded.
    /// Logging of fails should be handled by outside functionality
    pub fn process_op(&mut self, op: &WalletOp) -> Result<Vec<Transaction>, LedgerError> {
        match op {
            WalletOp::Open(open_op) => self.process_open(open_op),
            WalletOp::TopUp(amount_op) => self.process_top_up(amount_op),
            WalletOp::Withdraw(amount_op) => self.process_withdraw(amount_op),
            WalletOp::Transfer(transfer_op) => self.process_transfer(transfer_op),
        }
    }
}
