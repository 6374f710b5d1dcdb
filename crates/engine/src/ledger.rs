//! The `Ledger` holds the live financial state: wallets, the transaction log,
//! debts and goals.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    Debt, EngineError, Goal, MoneyCents, ResultEngine, Transaction, TransactionFilter, Wallet,
    WalletKind,
};

/// Holds wallets, transactions, debts and goals.
///
/// Collections keep insertion order: rules such as "first reserve wallet" or
/// tie-breaking between goals depend on it. The transaction log is stored
/// oldest-first and is append-only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub wallets: Vec<Wallet>,
    pub transactions: Vec<Transaction>,
    pub debts: Vec<Debt>,
    pub goals: Vec<Goal>,
}

impl Ledger {
    pub fn wallet(&self, wallet_id: Uuid) -> ResultEngine<&Wallet> {
        self.wallets
            .iter()
            .find(|wallet| wallet.id == wallet_id)
            .ok_or_else(|| EngineError::KeyNotFound(wallet_id.to_string()))
    }

    pub(crate) fn wallet_mut(&mut self, wallet_id: Uuid) -> ResultEngine<&mut Wallet> {
        self.wallets
            .iter_mut()
            .find(|wallet| wallet.id == wallet_id)
            .ok_or_else(|| EngineError::KeyNotFound(wallet_id.to_string()))
    }

    pub fn debt(&self, debt_id: Uuid) -> ResultEngine<&Debt> {
        self.debts
            .iter()
            .find(|debt| debt.id == debt_id)
            .ok_or_else(|| EngineError::KeyNotFound(debt_id.to_string()))
    }

    pub(crate) fn debt_mut(&mut self, debt_id: Uuid) -> ResultEngine<&mut Debt> {
        self.debts
            .iter_mut()
            .find(|debt| debt.id == debt_id)
            .ok_or_else(|| EngineError::KeyNotFound(debt_id.to_string()))
    }

    pub fn goal(&self, goal_id: Uuid) -> ResultEngine<&Goal> {
        self.goals
            .iter()
            .find(|goal| goal.id == goal_id)
            .ok_or_else(|| EngineError::KeyNotFound(goal_id.to_string()))
    }

    pub(crate) fn goal_mut(&mut self, goal_id: Uuid) -> ResultEngine<&mut Goal> {
        self.goals
            .iter_mut()
            .find(|goal| goal.id == goal_id)
            .ok_or_else(|| EngineError::KeyNotFound(goal_id.to_string()))
    }

    /// The first wallet of kind `Reserve`.
    pub fn reserve_wallet(&self) -> Option<&Wallet> {
        self.wallets
            .iter()
            .find(|wallet| wallet.kind == WalletKind::Reserve)
    }

    /// The first goal flagged as emergency fund.
    pub fn emergency_fund(&self) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.is_emergency_fund)
    }

    pub(crate) fn emergency_fund_mut(&mut self) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|goal| goal.is_emergency_fund)
    }

    /// Transaction log, newest first.
    pub fn recent_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev()
    }

    /// Newest-first transactions accepted by `filter`.
    pub fn transactions_matching<'a>(
        &'a self,
        filter: &'a TransactionFilter,
    ) -> impl Iterator<Item = &'a Transaction> {
        self.recent_transactions().filter(move |tx| filter.matches(tx))
    }

    /// Newest-first transactions touching a wallet on either side.
    pub fn wallet_transactions(&self, wallet_id: Uuid) -> impl Iterator<Item = &Transaction> {
        self.recent_transactions()
            .filter(move |tx| tx.involves_wallet(wallet_id))
    }

    pub fn total_balance(&self) -> MoneyCents {
        self.wallets.iter().map(|wallet| wallet.balance).sum()
    }

    /// Remaining balance summed over active debts.
    pub fn total_active_debt(&self) -> MoneyCents {
        self.debts
            .iter()
            .filter(|debt| debt.is_active())
            .map(|debt| debt.remaining_balance)
            .sum()
    }

    /// Goals sorted by priority, ties in insertion order.
    pub fn goals_by_priority(&self) -> Vec<&Goal> {
        let mut goals: Vec<&Goal> = self.goals.iter().collect();
        goals.sort_by_key(|goal| goal.priority);
        goals
    }

    pub(crate) fn ensure_wallet(&self, wallet_id: Uuid) -> ResultEngine<()> {
        self.wallet(wallet_id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{FlowTotals, OriginAction, TransactionKind};

    fn ledger() -> Ledger {
        let at = Utc.timestamp_opt(0, 0).unwrap();
        let personal = Wallet::new("Personal".to_string(), WalletKind::Personal, MoneyCents::units(800));
        let reserve = Wallet::new("Reserve".to_string(), WalletKind::Reserve, MoneyCents::units(6_500));
        let card = Debt::new(
            "Card".to_string(),
            MoneyCents::units(500),
            MoneyCents::units(250),
            personal.id,
            at,
        );
        let goals = vec![
            Goal::new("B".to_string(), MoneyCents::units(10), MoneyCents::ZERO, 2, false, None, at),
            Goal::new("A".to_string(), MoneyCents::units(10), MoneyCents::ZERO, 1, true, None, at),
            Goal::new("C".to_string(), MoneyCents::units(10), MoneyCents::ZERO, 2, false, None, at),
        ];
        Ledger {
            wallets: vec![personal, reserve],
            transactions: Vec::new(),
            debts: vec![card],
            goals,
        }
    }

    #[test]
    fn totals() {
        let ledger = ledger();
        assert_eq!(ledger.total_balance(), MoneyCents::units(7_300));
        assert_eq!(ledger.total_active_debt(), MoneyCents::units(250));
    }

    #[test]
    fn finds_reserve_and_emergency_fund() {
        let ledger = ledger();
        assert_eq!(ledger.reserve_wallet().unwrap().name, "Reserve");
        assert_eq!(ledger.emergency_fund().unwrap().name, "A");
    }

    #[test]
    fn priority_sort_is_stable() {
        let ledger = ledger();
        let names: Vec<&str> = ledger
            .goals_by_priority()
            .iter()
            .map(|goal| goal.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn browses_log_newest_first() {
        let mut ledger = ledger();
        let personal = ledger.wallets[0].id;
        let reserve = ledger.wallets[1].id;
        let at = Utc.timestamp_opt(0, 0).unwrap();
        let record = |kind, amount, description: &str, source, dest| {
            Transaction::new(
                kind,
                OriginAction::ManualTransfer,
                MoneyCents::units(amount),
                description.to_string(),
                "Misc".to_string(),
                source,
                dest,
                at,
            )
            .unwrap()
        };
        ledger.transactions = vec![
            record(TransactionKind::Inflow, 100, "Invoice", None, Some(personal)),
            record(TransactionKind::Transfer, 50, "Save", Some(personal), Some(reserve)),
            record(TransactionKind::Outflow, 20, "Dentist", Some(reserve), None),
        ];

        let descriptions: Vec<&str> = ledger
            .wallet_transactions(reserve)
            .map(|tx| tx.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Dentist", "Save"]);

        let filter = TransactionFilter::new()
            .wallet(personal)
            .kind(TransactionKind::Inflow);
        let matched: Vec<&Transaction> = ledger.transactions_matching(&filter).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].description, "Invoice");

        let totals: FlowTotals = ledger.transactions_matching(&TransactionFilter::new()).collect();
        assert_eq!(totals.inflows, MoneyCents::units(100));
        assert_eq!(totals.outflows, MoneyCents::units(20));
    }

    #[test]
    #[should_panic(expected = "KeyNotFound(\"6a8416ed-b8e6-4732-a591-bf55da9687e7\")")]
    fn missing_wallet() {
        let ledger = ledger();
        ledger
            .wallet(Uuid::parse_str("6a8416ed-b8e6-4732-a591-bf55da9687e7").unwrap())
            .unwrap();
    }
}
