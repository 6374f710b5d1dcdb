use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{MoneyCents, OriginAction, ResultEngine, Transaction, TransactionKind};

use super::{Engine, ensure_positive, rejected};

const DEFAULT_PAYMENT_CATEGORY: &str = "Freelance";
const FIXED_DRAW_DESCRIPTION: &str = "Monthly fixed draw";
const FIXED_DRAW_CATEGORY: &str = "Fixed draw";
const TRANSFER_CATEGORY: &str = "Transfer";

impl Engine {
    /// Credit `amount` to a wallet and record an inflow.
    ///
    /// `category` defaults to `"Freelance"`.
    pub fn receive_payment(
        &mut self,
        amount: MoneyCents,
        wallet_id: Uuid,
        description: &str,
        category: Option<&str>,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Uuid> {
        ensure_positive(amount).inspect_err(rejected("receive_payment"))?;
        let moves = self
            .balance_moves(amount, None, Some(wallet_id))
            .inspect_err(rejected("receive_payment"))?;

        let tx = Transaction::new(
            TransactionKind::Inflow,
            OriginAction::ReceivePayment,
            amount,
            description.to_string(),
            category.unwrap_or(DEFAULT_PAYMENT_CATEGORY).to_string(),
            None,
            Some(wallet_id),
            occurred_at,
        )?;

        self.apply_balances(moves)?;
        Ok(self.record(tx))
    }

    /// Move the fixed monthly draw between two wallets (e.g. business to
    /// personal).
    pub fn pay_fixed_draw(
        &mut self,
        amount: MoneyCents,
        source_wallet_id: Uuid,
        dest_wallet_id: Uuid,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Uuid> {
        self.move_between_wallets(
            OriginAction::PayFixedDraw,
            amount,
            source_wallet_id,
            dest_wallet_id,
            FIXED_DRAW_DESCRIPTION.to_string(),
            FIXED_DRAW_CATEGORY.to_string(),
            occurred_at,
        )
    }

    /// Manual transfer between two wallets.
    pub fn transfer(
        &mut self,
        amount: MoneyCents,
        source_wallet_id: Uuid,
        dest_wallet_id: Uuid,
        description: &str,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Uuid> {
        self.move_between_wallets(
            OriginAction::ManualTransfer,
            amount,
            source_wallet_id,
            dest_wallet_id,
            description.to_string(),
            TRANSFER_CATEGORY.to_string(),
            occurred_at,
        )
    }

    /// Debit a wallet and record an outflow.
    pub fn pay_expense(
        &mut self,
        amount: MoneyCents,
        wallet_id: Uuid,
        category: &str,
        description: &str,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Uuid> {
        ensure_positive(amount).inspect_err(rejected("pay_expense"))?;
        let moves = self
            .balance_moves(amount, Some(wallet_id), None)
            .inspect_err(rejected("pay_expense"))?;

        let tx = Transaction::new(
            TransactionKind::Outflow,
            OriginAction::PayExpense,
            amount,
            description.to_string(),
            category.to_string(),
            Some(wallet_id),
            None,
            occurred_at,
        )?;

        self.apply_balances(moves)?;
        Ok(self.record(tx))
    }

    fn move_between_wallets(
        &mut self,
        origin: OriginAction,
        amount: MoneyCents,
        source_wallet_id: Uuid,
        dest_wallet_id: Uuid,
        description: String,
        category: String,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Uuid> {
        let operation = origin.as_str();
        ensure_positive(amount).inspect_err(rejected(operation))?;
        let moves = self
            .balance_moves(amount, Some(source_wallet_id), Some(dest_wallet_id))
            .inspect_err(rejected(operation))?;

        let tx = Transaction::new(
            TransactionKind::Transfer,
            origin,
            amount,
            description,
            category,
            Some(source_wallet_id),
            Some(dest_wallet_id),
            occurred_at,
        )?;

        self.apply_balances(moves)?;
        Ok(self.record(tx))
    }
}
