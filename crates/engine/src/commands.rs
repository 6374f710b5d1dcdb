//! Command structs for creation operations.
//!
//! These types group the fields of a new wallet, debt or goal, keeping call
//! sites readable and avoiding long argument lists. Ids and creation
//! timestamps are assigned by the engine.

use serde::Deserialize;
use uuid::Uuid;

use crate::{MoneyCents, WalletKind};

/// Create a wallet.
#[derive(Clone, Debug, Deserialize)]
pub struct NewWallet {
    pub name: String,
    pub kind: WalletKind,
    pub balance: MoneyCents,
}

impl NewWallet {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: WalletKind) -> Self {
        Self {
            name: name.into(),
            kind,
            balance: MoneyCents::ZERO,
        }
    }

    #[must_use]
    pub fn balance(mut self, balance: MoneyCents) -> Self {
        self.balance = balance;
        self
    }
}

/// Create a debt. The remaining balance defaults to the total.
#[derive(Clone, Debug, Deserialize)]
pub struct NewDebt {
    pub name: String,
    pub total_amount: MoneyCents,
    pub remaining_balance: Option<MoneyCents>,
    pub wallet_id: Uuid,
}

impl NewDebt {
    #[must_use]
    pub fn new(name: impl Into<String>, total_amount: MoneyCents, wallet_id: Uuid) -> Self {
        Self {
            name: name.into(),
            total_amount,
            remaining_balance: None,
            wallet_id,
        }
    }

    #[must_use]
    pub fn remaining(mut self, remaining: MoneyCents) -> Self {
        self.remaining_balance = Some(remaining);
        self
    }
}

/// Create a savings goal.
#[derive(Clone, Debug, Deserialize)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: MoneyCents,
    pub accumulated_amount: MoneyCents,
    pub priority: u32,
    pub is_emergency_fund: bool,
    pub dest_wallet_id: Option<Uuid>,
}

impl NewGoal {
    #[must_use]
    pub fn new(name: impl Into<String>, target_amount: MoneyCents, priority: u32) -> Self {
        Self {
            name: name.into(),
            target_amount,
            accumulated_amount: MoneyCents::ZERO,
            priority,
            is_emergency_fund: false,
            dest_wallet_id: None,
        }
    }

    #[must_use]
    pub fn accumulated(mut self, amount: MoneyCents) -> Self {
        self.accumulated_amount = amount;
        self
    }

    #[must_use]
    pub fn emergency_fund(mut self) -> Self {
        self.is_emergency_fund = true;
        self
    }

    #[must_use]
    pub fn dest_wallet(mut self, wallet_id: Uuid) -> Self {
        self.dest_wallet_id = Some(wallet_id);
        self
    }
}
