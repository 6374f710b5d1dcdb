use tracing::info;

use crate::{
    MoneyCents, PlanConfig, PlanConfigPatch,
    projections::{self, BudgetSplit, ObjectiveProjections, ScheduleMonth},
};

use super::Engine;

impl Engine {
    pub fn plan(&self) -> &PlanConfig {
        &self.plan
    }

    /// Shallow-merge `patch` into the current plan, group by group.
    pub fn update_plan(&mut self, patch: PlanConfigPatch) {
        self.plan.apply(patch);
        info!("plan updated");
    }

    /// Discard every plan edit and go back to the baseline.
    pub fn reset_plan(&mut self) {
        self.plan = self.baseline.clone();
        info!("plan reset to baseline");
    }

    /// Emergency-fund build-up using the plan's target and contribution.
    pub fn emergency_fund_schedule(&self, months: u32) -> Vec<ScheduleMonth> {
        projections::emergency_fund_schedule(&self.plan.emergency_fund, months)
    }

    /// Months until the emergency-fund goal (or, without one, the plan
    /// target) is reached at the planned monthly contribution.
    pub fn months_to_emergency_fund(&self) -> Option<u32> {
        let remaining = match self.ledger.emergency_fund() {
            Some(goal) => goal.remaining(),
            None => self.plan.emergency_fund.target,
        };
        projections::months_to_target(remaining, self.plan.emergency_fund.monthly_contribution)
    }

    pub fn budget_split(&self, income: MoneyCents) -> BudgetSplit {
        projections::budget_split(income, &self.plan.expenses)
    }

    pub fn compensation_fund_contribution(&self, income: MoneyCents) -> MoneyCents {
        projections::compensation_fund_contribution(income, &self.plan.compensation_fund)
    }

    /// Installment that clears all active debts within the plan's horizon.
    pub fn debt_monthly_payment(&self) -> MoneyCents {
        projections::debt_monthly_payment(
            self.ledger.total_active_debt(),
            self.plan.debts.payoff_horizon_months,
        )
    }

    pub fn objective_projections(&self) -> ObjectiveProjections {
        projections::objective_projections(&self.plan)
    }
}
