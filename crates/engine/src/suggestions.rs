//! Rule-based advisory messages derived from a snapshot of wallets, debts and
//! goals.
//!
//! Suggestions are never stored: they are recomputed on every call and the
//! same snapshot always yields the same list, in the same order. Each rule
//! has a fixed `id` so a caller can key or dedupe them.

use serde::Serialize;

use crate::{Debt, Formatter, Goal, MoneyCents, Wallet};

pub const EMERGENCY_FUND_INCOMPLETE: &str = "emergency-fund-incomplete";
pub const EMERGENCY_FUND_COMPLETE: &str = "emergency-fund-complete";
pub const ACTIVE_DEBTS: &str = "active-debts";
pub const DEBT_FREE: &str = "debt-free";
pub const LOW_BALANCE: &str = "low-balance";
pub const NEXT_GOAL: &str = "next-goal";

/// Total balances strictly below this (and above zero) trigger the
/// low-balance hint.
const LOW_BALANCE_THRESHOLD: MoneyCents = MoneyCents::units(1_000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Info,
    Warning,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: &'static str,
    pub kind: SuggestionKind,
    pub title: String,
    pub message: String,
    /// Always `true` for now; reserved for dismissal.
    pub active: bool,
}

impl Suggestion {
    fn new(id: &'static str, kind: SuggestionKind, title: String, message: String) -> Self {
        Self {
            id,
            kind,
            title,
            message,
            active: true,
        }
    }
}

/// Evaluates the rules in order. The formatter only renders amounts inside
/// messages.
pub fn generate(
    wallets: &[Wallet],
    debts: &[Debt],
    goals: &[Goal],
    formatter: &Formatter,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let emergency = goals.iter().find(|goal| goal.is_emergency_fund);
    let active_debts: Vec<&Debt> = debts.iter().filter(|debt| debt.is_active()).collect();
    let total_balance: MoneyCents = wallets.iter().map(|wallet| wallet.balance).sum();

    match emergency {
        Some(fund) if !fund.is_complete() => suggestions.push(Suggestion::new(
            EMERGENCY_FUND_INCOMPLETE,
            SuggestionKind::Warning,
            "Emergency fund".to_string(),
            format!(
                "Your emergency fund is at {}. Prioritizing it increases your financial safety.",
                formatter.percent(fund.progress_percent().round())
            ),
        )),
        Some(_) => suggestions.push(Suggestion::new(
            EMERGENCY_FUND_COMPLETE,
            SuggestionKind::Success,
            "Well done!".to_string(),
            "Your emergency fund is complete. You can now focus on other goals.".to_string(),
        )),
        None => {}
    }

    if !active_debts.is_empty() {
        let total: MoneyCents = active_debts.iter().map(|debt| debt.remaining_balance).sum();
        suggestions.push(Suggestion::new(
            ACTIVE_DEBTS,
            SuggestionKind::Warning,
            "Active debts".to_string(),
            format!(
                "You have {} active debt(s) totaling {}. Consider prioritizing them.",
                active_debts.len(),
                formatter.currency(total)
            ),
        ));
    } else if !debts.is_empty() {
        suggestions.push(Suggestion::new(
            DEBT_FREE,
            SuggestionKind::Success,
            "Debt-free!".to_string(),
            "You have paid off all your debts. Keep it up!".to_string(),
        ));
    }

    if total_balance.is_positive() && total_balance < LOW_BALANCE_THRESHOLD {
        suggestions.push(Suggestion::new(
            LOW_BALANCE,
            SuggestionKind::Info,
            "Watch your balance".to_string(),
            "Your total balance is low. Consider reviewing your spending.".to_string(),
        ));
    }

    let fund_cleared = emergency.is_none_or(Goal::is_complete);
    let next_goal = goals
        .iter()
        .filter(|goal| !goal.is_emergency_fund && !goal.is_complete())
        .min_by_key(|goal| goal.priority);
    if let (true, Some(goal)) = (fund_cleared, next_goal) {
        suggestions.push(Suggestion::new(
            NEXT_GOAL,
            SuggestionKind::Info,
            format!("Goal: {}", goal.name),
            format!(
                "You are at {} of \"{}\". Keep contributing!",
                formatter.percent(goal.progress_percent().round()),
                goal.name
            ),
        ));
    }

    suggestions
}
