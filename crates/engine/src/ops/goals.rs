use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::{
    EngineError, Goal, MoneyCents, NewGoal, OriginAction, ResultEngine, Transaction,
    TransactionKind,
};

use super::{Engine, ensure_positive, normalize_required_name, rejected};

const RESERVE_CATEGORY: &str = "Reserve";
const INVESTMENT_CATEGORY: &str = "Investment";
const EMERGENCY_CATEGORY: &str = "Emergency";

impl Engine {
    /// Move `amount` from a wallet towards a goal.
    ///
    /// The goal's destination wallet, if any, is credited. The goal's
    /// accumulated amount grows by `amount` with no upper clamp.
    pub fn contribute_to_goal(
        &mut self,
        amount: MoneyCents,
        source_wallet_id: Uuid,
        goal_id: Uuid,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Uuid> {
        ensure_positive(amount).inspect_err(rejected("contribute_to_goal"))?;
        let goal = self
            .ledger
            .goal(goal_id)
            .inspect_err(rejected("contribute_to_goal"))?;
        let dest_wallet_id = goal.dest_wallet_id;
        let category = if goal.is_emergency_fund {
            RESERVE_CATEGORY
        } else {
            INVESTMENT_CATEGORY
        };
        let description = format!("Contribution: {}", goal.name);

        let moves = self
            .balance_moves(amount, Some(source_wallet_id), dest_wallet_id)
            .inspect_err(rejected("contribute_to_goal"))?;

        let tx = Transaction::new(
            TransactionKind::Transfer,
            OriginAction::ContributeGoal,
            amount,
            description,
            category.to_string(),
            Some(source_wallet_id),
            dest_wallet_id,
            occurred_at,
        )?
        .with_goal(goal_id);

        self.ledger
            .goal_mut(goal_id)?
            .contribute(amount, occurred_at)
            .inspect_err(rejected("contribute_to_goal"))?;
        self.apply_balances(moves)?;
        Ok(self.record(tx))
    }

    /// Spend from the first reserve wallet.
    ///
    /// The emergency-fund goal, when present, shrinks by the same amount,
    /// floored at zero.
    pub fn draw_from_emergency_fund(
        &mut self,
        amount: MoneyCents,
        description: &str,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Uuid> {
        ensure_positive(amount).inspect_err(rejected("draw_from_emergency_fund"))?;
        let reserve_id = self
            .ledger
            .reserve_wallet()
            .map(|wallet| wallet.id)
            .ok_or_else(|| EngineError::KeyNotFound("reserve wallet".to_string()))
            .inspect_err(rejected("draw_from_emergency_fund"))?;
        let moves = self
            .balance_moves(amount, Some(reserve_id), None)
            .inspect_err(rejected("draw_from_emergency_fund"))?;

        let tx = Transaction::new(
            TransactionKind::Outflow,
            OriginAction::UseReserve,
            amount,
            description.to_string(),
            EMERGENCY_CATEGORY.to_string(),
            Some(reserve_id),
            None,
            occurred_at,
        )?;
        let tx = match self.ledger.emergency_fund() {
            Some(goal) => tx.with_goal(goal.id),
            None => tx,
        };

        self.apply_balances(moves)?;
        if let Some(goal) = self.ledger.emergency_fund_mut() {
            goal.withdraw(amount);
        }
        Ok(self.record(tx))
    }

    /// Register a new goal and return its id.
    pub fn add_goal(&mut self, new: NewGoal, created_at: DateTime<Utc>) -> ResultEngine<Uuid> {
        let name = normalize_required_name(&new.name, "goal")?;
        if let Some(dest) = new.dest_wallet_id {
            self.ledger.ensure_wallet(dest).inspect_err(rejected("add_goal"))?;
        }
        let goal = Goal::new(
            name,
            new.target_amount,
            new.accumulated_amount,
            new.priority,
            new.is_emergency_fund,
            new.dest_wallet_id,
            created_at,
        );
        let id = goal.id;
        debug!(goal = %id, name = %goal.name, "goal added");
        self.ledger.goals.push(goal);
        Ok(id)
    }

    pub fn goal(&self, goal_id: Uuid) -> ResultEngine<&Goal> {
        self.ledger.goal(goal_id)
    }
}
