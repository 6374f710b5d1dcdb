use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    EngineError, Formatter, Ledger, MoneyCents, PlanConfig, ResultEngine, Transaction, seed,
};

mod balances;
mod debts;
mod goals;
mod payments;
mod plan;
mod wallets;

pub use balances::NetWorth;

/// The single owner of the application state: the plan configuration and
/// the live ledger.
///
/// Every write goes through `&mut self`, runs to completion and either
/// applies all of its effects or none of them: references are resolved and
/// amounts checked before anything is mutated.
#[derive(Clone, Debug)]
pub struct Engine {
    plan: PlanConfig,
    baseline: PlanConfig,
    ledger: Ledger,
    formatter: Formatter,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Read-only view of wallets, transactions, debts and goals.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Append the transaction and return its id.
    fn record(&mut self, tx: Transaction) -> Uuid {
        let id = tx.id;
        debug!(
            origin = tx.origin.as_str(),
            kind = tx.kind.as_str(),
            amount = %tx.amount,
            source = ?tx.source_wallet_id,
            dest = ?tx.dest_wallet_id,
            "transaction recorded"
        );
        self.ledger.transactions.push(tx);
        id
    }

    /// New balances for moving `amount` out of `source` and into `dest`.
    ///
    /// Computed before anything is written, so an unknown wallet or an
    /// out-of-range balance leaves every wallet untouched. A move from a
    /// wallet to itself changes nothing.
    fn balance_moves(
        &self,
        amount: MoneyCents,
        source: Option<Uuid>,
        dest: Option<Uuid>,
    ) -> ResultEngine<Vec<(Uuid, MoneyCents)>> {
        if let Some(id) = source.filter(|id| dest == Some(*id)) {
            self.ledger.ensure_wallet(id)?;
            return Ok(Vec::new());
        }
        let mut moves = Vec::with_capacity(2);
        if let Some(id) = source {
            moves.push((id, self.ledger.wallet(id)?.debited(amount)?));
        }
        if let Some(id) = dest {
            moves.push((id, self.ledger.wallet(id)?.credited(amount)?));
        }
        Ok(moves)
    }

    fn apply_balances(&mut self, moves: Vec<(Uuid, MoneyCents)>) -> ResultEngine<()> {
        for (wallet_id, balance) in moves {
            self.ledger.wallet_mut(wallet_id)?.balance = balance;
        }
        Ok(())
    }
}

fn ensure_positive(amount: MoneyCents) -> ResultEngine<()> {
    if !amount.is_positive() {
        return Err(EngineError::InvalidAmount(format!(
            "amount must be > 0, got {amount}"
        )));
    }
    Ok(())
}

/// Log a rejected operation; used with `Result::inspect_err`.
fn rejected(operation: &'static str) -> impl Fn(&EngineError) {
    move |err| warn!(operation, %err, "operation rejected")
}

fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    plan: Option<PlanConfig>,
    ledger: Option<Ledger>,
    seed_at: Option<DateTime<Utc>>,
    formatter: Formatter,
}

impl EngineBuilder {
    /// Baseline plan; `reset_plan` returns to it. Defaults to
    /// `PlanConfig::default()`.
    pub fn plan(mut self, plan: PlanConfig) -> EngineBuilder {
        self.plan = Some(plan);
        self
    }

    /// Start from an explicit ledger instead of an empty one.
    pub fn ledger(mut self, ledger: Ledger) -> EngineBuilder {
        self.ledger = Some(ledger);
        self
    }

    /// Seed the demo ledger relative to `now`. Ignored when an explicit
    /// ledger is given.
    pub fn seed_demo(mut self, now: DateTime<Utc>) -> EngineBuilder {
        self.seed_at = Some(now);
        self
    }

    pub fn formatter(mut self, formatter: Formatter) -> EngineBuilder {
        self.formatter = formatter;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> ResultEngine<Engine> {
        let plan = self.plan.unwrap_or_default();
        let ledger = match (self.ledger, self.seed_at) {
            (Some(ledger), _) => ledger,
            (None, Some(now)) => seed::demo(&plan, now)?,
            (None, None) => Ledger::default(),
        };
        debug!(
            wallets = ledger.wallets.len(),
            debts = ledger.debts.len(),
            goals = ledger.goals.len(),
            "engine built"
        );
        Ok(Engine {
            baseline: plan.clone(),
            plan,
            ledger,
            formatter: self.formatter,
        })
    }
}
