//! Dashboard snapshot of an [`Engine`], rendered as text (`Display`) or JSON.
use std::fmt;

use engine::{
    Debt, Engine, FlowTotals, Formatter, Goal, MoneyCents, NetWorth, PlanConfig, Transaction,
    TransactionFilter, Wallet,
    projections::{BudgetSplit, ObjectiveProjections, ScheduleMonth},
    suggestions::{Suggestion, SuggestionKind},
};
use serde::Serialize;

/// Transactions listed under "Recent activity".
const RECENT_TRANSACTIONS: usize = 5;
/// Transactions listed under each wallet.
const WALLET_TRANSACTIONS: usize = 3;

#[derive(Debug, Serialize)]
pub struct WalletActivity<'a> {
    pub wallet: &'a Wallet,
    pub recent: Vec<&'a Transaction>,
}

#[derive(Debug, Serialize)]
pub struct Dashboard<'a> {
    #[serde(skip)]
    fmt: Formatter,
    pub plan: &'a PlanConfig,
    pub total_balance: MoneyCents,
    pub total_active_debt: MoneyCents,
    pub net_worth: NetWorth,
    pub debt_payoff_progress: u32,
    pub wallets: Vec<WalletActivity<'a>>,
    pub debts: &'a [Debt],
    pub goals: Vec<&'a Goal>,
    pub filter: &'a TransactionFilter,
    /// Inflows and outflows over every transaction the filter accepts.
    pub flows: FlowTotals,
    pub recent_transactions: Vec<&'a Transaction>,
    pub suggestions: Vec<Suggestion>,
    pub months_to_emergency_fund: Option<u32>,
    pub emergency_fund_schedule: Vec<ScheduleMonth>,
    pub budget_split: BudgetSplit,
    pub compensation_fund_contribution: MoneyCents,
    pub debt_monthly_payment: MoneyCents,
    pub objectives: ObjectiveProjections,
}

impl<'a> Dashboard<'a> {
    pub fn new(engine: &'a Engine, months: u32, filter: &'a TransactionFilter) -> Self {
        let ledger = engine.ledger();
        let plan = engine.plan();
        Self {
            fmt: *engine.formatter(),
            plan,
            total_balance: engine.total_balance(),
            total_active_debt: engine.total_active_debt(),
            net_worth: engine.net_worth(),
            debt_payoff_progress: engine.debt_payoff_progress(),
            wallets: ledger
                .wallets
                .iter()
                .map(|wallet| WalletActivity {
                    wallet,
                    recent: ledger
                        .wallet_transactions(wallet.id)
                        .take(WALLET_TRANSACTIONS)
                        .collect(),
                })
                .collect(),
            debts: &ledger.debts,
            goals: ledger.goals_by_priority(),
            filter,
            flows: ledger.transactions_matching(filter).collect(),
            recent_transactions: ledger
                .transactions_matching(filter)
                .take(RECENT_TRANSACTIONS)
                .collect(),
            suggestions: engine.suggestions(),
            months_to_emergency_fund: engine.months_to_emergency_fund(),
            emergency_fund_schedule: engine.emergency_fund_schedule(months),
            budget_split: engine.budget_split(plan.income.average),
            compensation_fund_contribution: engine
                .compensation_fund_contribution(plan.income.maximum),
            debt_monthly_payment: engine.debt_monthly_payment(),
            objectives: engine.objective_projections(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt = &self.fmt;
        let money = |amount: MoneyCents| fmt.currency(amount);
        let pct = |value: f64| fmt.percent(value.round());

        writeln!(
            out,
            "{} ({}, {})",
            self.plan.persona.name, self.plan.persona.age, self.plan.persona.occupation
        )?;
        writeln!(out)?;
        writeln!(out, "Total balance:   {}", money(self.total_balance))?;
        writeln!(out, "Active debt:     {}", money(self.total_active_debt))?;
        writeln!(
            out,
            "Net worth:       {} (assets {}, liabilities {})",
            money(self.net_worth.net),
            money(self.net_worth.assets),
            money(self.net_worth.liabilities)
        )?;
        writeln!(
            out,
            "Debts settled:   {}",
            fmt.percent(f64::from(self.debt_payoff_progress))
        )?;

        writeln!(out, "\nWallets")?;
        for WalletActivity { wallet, recent } in &self.wallets {
            writeln!(
                out,
                "  {:<24} {:<10} {:>16}",
                wallet.name,
                wallet.kind.as_str(),
                money(wallet.balance)
            )?;
            for tx in recent {
                writeln!(
                    out,
                    "      {} {:<30} {:>16}",
                    fmt.date(&tx.occurred_at),
                    tx.description,
                    money(tx.amount)
                )?;
            }
        }

        writeln!(out, "\nDebts")?;
        for debt in self.debts {
            let status = match debt.settled_at {
                Some(at) => format!("settled {}", fmt.date(&at)),
                None => "active".to_string(),
            };
            writeln!(
                out,
                "  {:<24} {:>16} of {:<16} {status}",
                debt.name,
                money(debt.remaining_balance),
                money(debt.total_amount)
            )?;
        }
        writeln!(
            out,
            "  Installment over {} months: {}",
            self.plan.debts.payoff_horizon_months,
            money(self.debt_monthly_payment)
        )?;

        writeln!(out, "\nGoals")?;
        for goal in &self.goals {
            writeln!(
                out,
                "  {:<24} {:>16} / {:<16} {:>5}",
                goal.name,
                money(goal.accumulated_amount),
                money(goal.target_amount),
                pct(goal.progress_percent())
            )?;
        }

        if !self.suggestions.is_empty() {
            writeln!(out, "\nSuggestions")?;
            for suggestion in &self.suggestions {
                let tag = match suggestion.kind {
                    SuggestionKind::Info => "info",
                    SuggestionKind::Warning => "warn",
                    SuggestionKind::Success => "ok",
                };
                writeln!(out, "  [{tag}] {}: {}", suggestion.title, suggestion.message)?;
            }
        }

        writeln!(out, "\nRecent activity")?;
        writeln!(
            out,
            "  In {}  Out {}",
            money(self.flows.inflows),
            money(self.flows.outflows)
        )?;
        for tx in &self.recent_transactions {
            writeln!(
                out,
                "  {} {:<32} {:<16} {:>16}",
                fmt.date(&tx.occurred_at),
                tx.description,
                tx.category,
                money(tx.amount)
            )?;
        }

        writeln!(out, "\nEmergency fund")?;
        match self.months_to_emergency_fund {
            Some(months) => writeln!(out, "  Months to target: {months}")?,
            None => writeln!(out, "  Months to target: no monthly contribution")?,
        }
        for month in &self.emergency_fund_schedule {
            writeln!(
                out,
                "  month {:>3} {:>16} {:>5}",
                month.month,
                money(month.accumulated),
                pct(month.percent)
            )?;
        }

        writeln!(out, "\nPlan")?;
        writeln!(
            out,
            "  Average income split: essentials {}, leisure {}, investments {}",
            money(self.budget_split.essentials),
            money(self.budget_split.leisure),
            money(self.budget_split.investments)
        )?;
        writeln!(
            out,
            "  Compensation fund in a peak month: {}",
            money(self.compensation_fund_contribution)
        )?;
        writeln!(
            out,
            "  Exchange in {} years: {}",
            self.plan.objectives.exchange_horizon_years,
            money(self.objectives.exchange)
        )?;
        writeln!(
            out,
            "  Independence in {} years: {}",
            self.plan.objectives.independence_horizon_years,
            money(self.objectives.independence)
        )?;

        Ok(())
    }
}
