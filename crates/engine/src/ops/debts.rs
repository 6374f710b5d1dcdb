use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    Debt, MoneyCents, NewDebt, OriginAction, ResultEngine, Transaction, TransactionKind,
};

use super::{Engine, ensure_positive, normalize_required_name, rejected};

const DEBT_PAYMENT_CATEGORY: &str = "Debt payment";

impl Engine {
    /// Pay down a debt from a wallet.
    ///
    /// The charged amount is `min(amount, remaining_balance)`; the excess of
    /// an overpayment is simply not charged. Reaching zero settles the debt
    /// and stamps `settled_at` with `occurred_at`. A settled debt rejects
    /// further payments with `DebtSettled`.
    pub fn pay_debt(
        &mut self,
        amount: MoneyCents,
        source_wallet_id: Uuid,
        debt_id: Uuid,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Uuid> {
        ensure_positive(amount).inspect_err(rejected("pay_debt"))?;
        let debt = self.ledger.debt(debt_id).inspect_err(rejected("pay_debt"))?;
        let capped = debt.payable(amount).inspect_err(rejected("pay_debt"))?;
        let description = format!("Payment: {}", debt.name);
        let moves = self
            .balance_moves(capped, Some(source_wallet_id), None)
            .inspect_err(rejected("pay_debt"))?;

        let tx = Transaction::new(
            TransactionKind::Outflow,
            OriginAction::PayDebt,
            capped,
            description,
            DEBT_PAYMENT_CATEGORY.to_string(),
            Some(source_wallet_id),
            None,
            occurred_at,
        )?
        .with_debt(debt_id);

        self.apply_balances(moves)?;
        let debt = self.ledger.debt_mut(debt_id)?;
        debt.apply_payment(capped, occurred_at);
        if !debt.is_active() {
            info!(debt = %debt_id, name = %debt.name, "debt settled");
        }
        Ok(self.record(tx))
    }

    /// Register a new debt and return its id.
    pub fn add_debt(&mut self, new: NewDebt, created_at: DateTime<Utc>) -> ResultEngine<Uuid> {
        let name = normalize_required_name(&new.name, "debt")?;
        ensure_positive(new.total_amount).inspect_err(rejected("add_debt"))?;
        self.ledger
            .ensure_wallet(new.wallet_id)
            .inspect_err(rejected("add_debt"))?;
        let debt = Debt::new(
            name,
            new.total_amount,
            new.remaining_balance.unwrap_or(new.total_amount),
            new.wallet_id,
            created_at,
        );
        let id = debt.id;
        debug!(debt = %id, total = %debt.total_amount, "debt added");
        self.ledger.debts.push(debt);
        Ok(id)
    }

    pub fn debt(&self, debt_id: Uuid) -> ResultEngine<&Debt> {
        self.ledger.debt(debt_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::{DebtStatus, EngineError, NewWallet, WalletKind};

    use super::*;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn engine() -> (Engine, Uuid, Uuid) {
        let mut engine = Engine::builder().build().unwrap();
        let wallet = engine
            .add_wallet(NewWallet::new("Personal", WalletKind::Personal).balance(MoneyCents::units(800)))
            .unwrap();
        let debt = engine
            .add_debt(
                NewDebt::new("Card", MoneyCents::units(500), wallet).remaining(MoneyCents::units(250)),
                at(),
            )
            .unwrap();
        (engine, wallet, debt)
    }

    #[test]
    fn partial_payment_keeps_debt_active() {
        let (mut engine, wallet, debt) = engine();
        engine
            .pay_debt(MoneyCents::units(100), wallet, debt, at())
            .unwrap();

        let debt = engine.debt(debt).unwrap();
        assert_eq!(debt.remaining_balance, MoneyCents::units(150));
        assert_eq!(debt.status, DebtStatus::Active);
        assert_eq!(debt.settled_at, None);
    }

    #[test]
    fn overpayment_charges_only_remaining() {
        let (mut engine, wallet, debt_id) = engine();
        engine
            .pay_debt(MoneyCents::units(1_000), wallet, debt_id, at())
            .unwrap();

        assert_eq!(
            engine.ledger().wallet(wallet).unwrap().balance,
            MoneyCents::units(550)
        );
        let tx = &engine.ledger().transactions[0];
        assert_eq!(tx.amount, MoneyCents::units(250));
        assert_eq!(tx.debt_id, Some(debt_id));
        assert_eq!(tx.description, "Payment: Card");
        assert_eq!(engine.debt(debt_id).unwrap().status, DebtStatus::Settled);
    }

    #[test]
    fn add_debt_defaults_remaining_to_total() {
        let (mut engine, wallet, _) = engine();
        let id = engine
            .add_debt(NewDebt::new("Loan", MoneyCents::units(900), wallet), at())
            .unwrap();

        let debt = engine.debt(id).unwrap();
        assert_eq!(debt.remaining_balance, MoneyCents::units(900));
        assert_eq!(debt.created_at, at());
    }

    #[test]
    fn add_debt_clamps_remaining_to_total() {
        let (mut engine, wallet, _) = engine();
        let id = engine
            .add_debt(
                NewDebt::new("Loan", MoneyCents::units(500), wallet).remaining(MoneyCents::units(900)),
                at(),
            )
            .unwrap();

        let debt = engine.debt(id).unwrap();
        assert_eq!(debt.remaining_balance, MoneyCents::units(500));
        assert_eq!(debt.paid(), MoneyCents::ZERO);
    }

    #[test]
    fn add_debt_rejects_non_positive_total() {
        let (mut engine, wallet, _) = engine();
        let err = engine
            .add_debt(NewDebt::new("Loan", MoneyCents::ZERO, wallet), at())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(_)));
        assert_eq!(engine.ledger().debts.len(), 1);
    }

    #[test]
    fn add_debt_needs_known_wallet() {
        let (mut engine, _, _) = engine();
        let missing = Uuid::new_v4();
        let err = engine
            .add_debt(NewDebt::new("Loan", MoneyCents::units(900), missing), at())
            .unwrap_err();
        assert_eq!(err, EngineError::KeyNotFound(missing.to_string()));
    }
}
