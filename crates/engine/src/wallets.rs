//! The module contains `Wallet` struct and its implementation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, MoneyCents, ResultEngine};

/// What a wallet is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletKind {
    Personal,
    Business,
    Reserve,
    Investment,
}

impl WalletKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
            Self::Reserve => "reserve",
            Self::Investment => "investment",
        }
    }
}

/// A wallet.
///
/// A wallet is a representation of a real wallet, a bank account or anything
/// else where money are kept. The balance is signed and can go below zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    /// Stable identifier for this wallet, so it can be renamed without
    /// breaking transaction references.
    pub id: Uuid,
    pub name: String,
    pub kind: WalletKind,
    pub balance: MoneyCents,
}

impl Wallet {
    pub fn new(name: String, kind: WalletKind, balance: MoneyCents) -> Self {
        Self::with_id(Uuid::new_v4(), name, kind, balance)
    }

    pub fn with_id(id: Uuid, name: String, kind: WalletKind, balance: MoneyCents) -> Self {
        Self {
            id,
            name,
            kind,
            balance,
        }
    }

    /// Balance after receiving `amount`. Nothing is written.
    pub(crate) fn credited(&self, amount: MoneyCents) -> ResultEngine<MoneyCents> {
        self.balance
            .checked_add(amount)
            .ok_or_else(|| self.out_of_range(amount))
    }

    /// Balance after paying out `amount`. Nothing is written.
    pub(crate) fn debited(&self, amount: MoneyCents) -> ResultEngine<MoneyCents> {
        self.balance
            .checked_sub(amount)
            .ok_or_else(|| self.out_of_range(amount))
    }

    fn out_of_range(&self, amount: MoneyCents) -> EngineError {
        EngineError::InvalidAmount(format!(
            "moving {amount} puts wallet \"{}\" out of range",
            self.name
        ))
    }
}
