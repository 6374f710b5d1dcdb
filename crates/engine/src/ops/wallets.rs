use tracing::debug;
use uuid::Uuid;

use crate::{NewWallet, ResultEngine, Wallet};

use super::{Engine, normalize_required_name};

impl Engine {
    /// Return a wallet by id.
    pub fn wallet(&self, wallet_id: Uuid) -> ResultEngine<&Wallet> {
        self.ledger.wallet(wallet_id)
    }

    /// Add a new wallet with its opening balance and return its id.
    ///
    /// The opening balance is set directly; it is not recorded as a
    /// transaction.
    pub fn add_wallet(&mut self, new: NewWallet) -> ResultEngine<Uuid> {
        let name = normalize_required_name(&new.name, "wallet")?;
        let wallet = Wallet::new(name, new.kind, new.balance);
        let id = wallet.id;
        debug!(wallet = %id, kind = wallet.kind.as_str(), balance = %wallet.balance, "wallet added");
        self.ledger.wallets.push(wallet);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::{MoneyCents, WalletKind};

    use super::*;

    #[test]
    fn add_wallet_assigns_unique_ids() {
        let mut engine = Engine::builder().build().unwrap();
        let a = engine
            .add_wallet(NewWallet::new("Cash", WalletKind::Personal))
            .unwrap();
        let b = engine
            .add_wallet(NewWallet::new("Cash", WalletKind::Personal))
            .unwrap();

        assert_ne!(a, b);
        assert_eq!(engine.ledger().wallets.len(), 2);
        assert_eq!(engine.wallet(a).unwrap().balance, MoneyCents::ZERO);
        assert!(engine.ledger().transactions.is_empty());
    }

    #[test]
    fn trims_wallet_name() {
        let mut engine = Engine::builder().build().unwrap();
        let id = engine
            .add_wallet(NewWallet::new("  Broker  ", WalletKind::Investment))
            .unwrap();
        assert_eq!(engine.wallet(id).unwrap().name, "Broker");
    }
}
