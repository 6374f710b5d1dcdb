//! Transaction primitives.
//!
//! A `Transaction` is the immutable record of one money movement. Every
//! ledger operation appends exactly one of them; the log is never edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, MoneyCents, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Inflow,
    Outflow,
    Transfer,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inflow => "inflow",
            Self::Outflow => "outflow",
            Self::Transfer => "transfer",
        }
    }
}

/// The ledger operation that produced a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginAction {
    ReceivePayment,
    PayFixedDraw,
    PayExpense,
    ContributeGoal,
    PayDebt,
    UseReserve,
    ManualTransfer,
}

impl OriginAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReceivePayment => "receive_payment",
            Self::PayFixedDraw => "pay_fixed_draw",
            Self::PayExpense => "pay_expense",
            Self::ContributeGoal => "contribute_goal",
            Self::PayDebt => "pay_debt",
            Self::UseReserve => "use_reserve",
            Self::ManualTransfer => "manual_transfer",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub description: String,
    pub amount: MoneyCents,
    pub kind: TransactionKind,
    pub category: String,
    pub source_wallet_id: Option<Uuid>,
    pub dest_wallet_id: Option<Uuid>,
    pub origin: OriginAction,
    pub goal_id: Option<Uuid>,
    pub debt_id: Option<Uuid>,
}

impl Transaction {
    /// Builds a transaction, checking the amount and wallet-reference shape.
    ///
    /// The amount is a magnitude and must be `> 0`. Inflows need a
    /// destination, outflows a source, transfers a source; the transfer
    /// destination may be absent when a goal has no linked wallet.
    pub fn new(
        kind: TransactionKind,
        origin: OriginAction,
        amount: MoneyCents,
        description: String,
        category: String,
        source_wallet_id: Option<Uuid>,
        dest_wallet_id: Option<Uuid>,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }
        let wallets_ok = match kind {
            TransactionKind::Inflow => dest_wallet_id.is_some(),
            TransactionKind::Outflow | TransactionKind::Transfer => source_wallet_id.is_some(),
        };
        if !wallets_ok {
            return Err(EngineError::KeyNotFound(format!(
                "{} transaction without wallet",
                kind.as_str()
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            occurred_at,
            description,
            amount,
            kind,
            category,
            source_wallet_id,
            dest_wallet_id,
            origin,
            goal_id: None,
            debt_id: None,
        })
    }

    #[must_use]
    pub fn with_goal(mut self, goal_id: Uuid) -> Self {
        self.goal_id = Some(goal_id);
        self
    }

    #[must_use]
    pub fn with_debt(mut self, debt_id: Uuid) -> Self {
        self.debt_id = Some(debt_id);
        self
    }

    /// Returns `true` if the transaction touches `wallet_id` on either side.
    pub fn involves_wallet(&self, wallet_id: Uuid) -> bool {
        self.source_wallet_id == Some(wallet_id) || self.dest_wallet_id == Some(wallet_id)
    }
}

/// Criteria for browsing the log. Unset criteria match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description or the category.
    pub text: Option<String>,
    pub wallet_id: Option<Uuid>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn wallet(mut self, wallet_id: Uuid) -> Self {
        self.wallet_id = Some(wallet_id);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        let text_ok = self.text.as_deref().is_none_or(|text| {
            let needle = text.to_lowercase();
            tx.description.to_lowercase().contains(&needle)
                || tx.category.to_lowercase().contains(&needle)
        });
        text_ok
            && self.wallet_id.is_none_or(|id| tx.involves_wallet(id))
            && self.kind.is_none_or(|kind| tx.kind == kind)
    }
}

/// Money in and out over a set of transactions. Transfers count on neither
/// side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FlowTotals {
    pub inflows: MoneyCents,
    pub outflows: MoneyCents,
}

impl<'a> FromIterator<&'a Transaction> for FlowTotals {
    fn from_iter<I: IntoIterator<Item = &'a Transaction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FlowTotals::default(), |mut totals, tx| {
                match tx.kind {
                    TransactionKind::Inflow => totals.inflows = totals.inflows + tx.amount,
                    TransactionKind::Outflow => totals.outflows = totals.outflows + tx.amount,
                    TransactionKind::Transfer => {}
                }
                totals
            })
    }
}
