//! Derived projections: compound growth, emergency-fund timeline, budget
//! split, compensation fund and investment allocation.
//!
//! All functions are pure and read the plan without changing it.

use serde::Serialize;

use crate::{
    MoneyCents,
    plan::{CompensationFund, EmergencyFund, Expenses, Investments, PlanConfig},
};

/// Future value of a monthly contribution, compounded monthly.
///
/// `monthly_rate = annual_rate_percent / 100 / 12`, `months = years * 12`.
/// With a zero rate the result is the straight sum of contributions,
/// otherwise it is the future value of an ordinary annuity:
/// `c * ((1 + i)^n - 1) / i`.
///
/// ```rust
/// use engine::projections::compound_interest_future_value;
///
/// assert_eq!(compound_interest_future_value(500.0, 0.0, 2.0), 12_000.0);
/// let fv = compound_interest_future_value(1_000.0, 12.0, 1.0);
/// assert!((fv - 12_682.50).abs() < 0.01);
/// ```
pub fn compound_interest_future_value(
    monthly_contribution: f64,
    annual_rate_percent: f64,
    years: f64,
) -> f64 {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let months = years * 12.0;

    if monthly_rate == 0.0 {
        return monthly_contribution * months;
    }

    monthly_contribution * (((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate)
}

/// [`compound_interest_future_value`] over money amounts, rounded to cents.
///
/// A horizon that is not a positive number projects nothing.
pub fn future_value(monthly: MoneyCents, annual_rate_percent: f64, years: f64) -> MoneyCents {
    if !(years > 0.0) {
        return MoneyCents::ZERO;
    }
    MoneyCents::from_major(compound_interest_future_value(
        monthly.to_major(),
        annual_rate_percent,
        years,
    ))
}

/// One month of the emergency-fund build-up.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScheduleMonth {
    pub month: u32,
    pub accumulated: MoneyCents,
    pub percent: f64,
}

/// Linear build-up of the emergency fund, one entry per month.
pub fn emergency_fund_schedule(fund: &EmergencyFund, months: u32) -> Vec<ScheduleMonth> {
    (1..=months)
        .map(|month| {
            let accumulated = MoneyCents::new(
                fund.monthly_contribution
                    .cents()
                    .saturating_mul(i64::from(month)),
            );
            ScheduleMonth {
                month,
                accumulated,
                percent: accumulated.percent_of(fund.target),
            }
        })
        .collect()
}

/// Whole months needed to close `remaining` at `monthly` per month.
///
/// Returns `Some(0)` when nothing is missing and `None` when the contribution
/// is not positive.
pub fn months_to_target(remaining: MoneyCents, monthly: MoneyCents) -> Option<u32> {
    if !remaining.is_positive() {
        return Some(0);
    }
    if !monthly.is_positive() {
        return None;
    }
    let (remaining, monthly) = (remaining.cents(), monthly.cents());
    let months = remaining / monthly + i64::from(remaining % monthly != 0);
    u32::try_from(months).ok()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BudgetSplit {
    pub essentials: MoneyCents,
    pub leisure: MoneyCents,
    pub investments: MoneyCents,
}

/// Splits `income` by the expense percentages.
pub fn budget_split(income: MoneyCents, expenses: &Expenses) -> BudgetSplit {
    BudgetSplit {
        essentials: income.scale_percent(expenses.essentials_percent),
        leisure: income.scale_percent(expenses.leisure_percent),
        investments: income.scale_percent(expenses.investments_percent),
    }
}

/// What goes into the compensation fund for a month earning `income`.
pub fn compensation_fund_contribution(income: MoneyCents, rule: &CompensationFund) -> MoneyCents {
    income
        .saturating_sub_floor(rule.reference_income)
        .scale_percent(rule.percent_above_average)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub fixed_income: MoneyCents,
    pub stocks: MoneyCents,
    pub reits: MoneyCents,
    pub pension: MoneyCents,
}

pub fn investment_allocation(amount: MoneyCents, investments: &Investments) -> Allocation {
    Allocation {
        fixed_income: amount.scale_percent(investments.fixed_income_percent),
        stocks: amount.scale_percent(investments.stocks_percent),
        reits: amount.scale_percent(investments.reits_percent),
        pension: amount.scale_percent(investments.pension_percent),
    }
}

/// Even monthly installment to clear `total` within `horizon_months`,
/// rounded up to the cent.
///
/// A horizon that is not a positive number means paying everything now.
pub fn debt_monthly_payment(total: MoneyCents, horizon_months: f64) -> MoneyCents {
    if !(horizon_months > 0.0) {
        return total;
    }
    MoneyCents::new((total.cents() as f64 / horizon_months).ceil() as i64)
}

/// Projected wealth for the two long-term objectives of the plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ObjectiveProjections {
    pub exchange: MoneyCents,
    pub independence: MoneyCents,
}

pub fn objective_projections(plan: &PlanConfig) -> ObjectiveProjections {
    let objectives = &plan.objectives;
    ObjectiveProjections {
        exchange: future_value(
            objectives.exchange_monthly_contribution,
            objectives.exchange_annual_return_percent,
            objectives.exchange_horizon_years,
        ),
        independence: future_value(
            objectives.independence_monthly_contribution,
            objectives.independence_annual_return_percent,
            objectives.independence_horizon_years,
        ),
    }
}
