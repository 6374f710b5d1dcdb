//! The plan configuration: default parameters and targets.
//!
//! A plan is a fixed set of named groups. Updates are shallow per group: a
//! [`PlanConfigPatch`] carries an optional patch per group, and each group
//! patch carries an optional value per field. Nothing is range-checked;
//! percentages do not have to add up to 100, amounts and counts may be
//! negative, and horizons may be fractional.
//!
//! Money fields are [`MoneyCents`], so serialized plans store cents.

use serde::{Deserialize, Serialize};

use crate::MoneyCents;

/// Declares a plan group, its `Default`, a field-wise optional patch type and
/// the `apply` method merging the two.
macro_rules! plan_group {
    (
        $(#[$meta:meta])*
        $name:ident / $patch:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty = $default:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )+
                }
            }
        }

        #[doc = concat!("Partial update for [`", stringify!($name), "`].")]
        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $patch {
            $( pub $field: Option<$ty>, )+
        }

        impl $name {
            /// Overwrites the fields present in `patch` and keeps the others.
            pub fn apply(&mut self, patch: $patch) {
                $(
                    if let Some(value) = patch.$field {
                        self.$field = value;
                    }
                )+
            }
        }
    };
}

plan_group! {
    /// Who the plan is for.
    Persona / PersonaPatch {
        name: String = "Lucas Mendes".to_string(),
        age: i32 = 26,
        occupation: String = "Full-stack freelance developer".to_string(),
    }
}

plan_group! {
    /// Monthly income bounds for a variable earner.
    Income / IncomePatch {
        minimum: MoneyCents = MoneyCents::units(3_000),
        maximum: MoneyCents = MoneyCents::units(10_000),
        average: MoneyCents = MoneyCents::units(6_000),
        /// Fixed monthly draw moved from the business to the personal wallet.
        fixed_draw_target: MoneyCents = MoneyCents::units(4_000),
    }
}

plan_group! {
    /// Monthly spending and its split.
    Expenses / ExpensesPatch {
        monthly_total: MoneyCents = MoneyCents::units(3_650),
        essentials_percent: f64 = 50.0,
        leisure_percent: f64 = 30.0,
        investments_percent: f64 = 20.0,
    }
}

plan_group! {
    /// Opening balances used to seed wallets.
    Accounts / AccountsPatch {
        personal: MoneyCents = MoneyCents::units(800),
        business: MoneyCents = MoneyCents::units(2_500),
        speculative_investments: MoneyCents = MoneyCents::units(1_500),
    }
}

plan_group! {
    /// Outstanding debts and how fast to clear them.
    Debts / DebtsPatch {
        personal_card: MoneyCents = MoneyCents::units(500),
        business_card: MoneyCents = MoneyCents::units(1_000),
        payoff_horizon_months: f64 = 3.0,
    }
}

plan_group! {
    EmergencyFund / EmergencyFundPatch {
        target: MoneyCents = MoneyCents::units(21_900),
        monthly_contribution: MoneyCents = MoneyCents::units(1_825),
        treasury_percent: f64 = 70.0,
        yield_account_percent: f64 = 30.0,
        estimated_months: f64 = 12.0,
    }
}

plan_group! {
    /// Investment mix and the return assumed for projections.
    Investments / InvestmentsPatch {
        fixed_income_percent: f64 = 60.0,
        stocks_percent: f64 = 20.0,
        reits_percent: f64 = 10.0,
        pension_percent: f64 = 10.0,
        expected_annual_return_percent: f64 = 10.0,
    }
}

plan_group! {
    /// Goal-specific contribution, return and horizon parameters.
    Objectives / ObjectivesPatch {
        exchange_monthly_contribution: MoneyCents = MoneyCents::units(1_000),
        exchange_annual_return_percent: f64 = 10.0,
        exchange_horizon_years: f64 = 3.0,
        exchange_estimated_wealth: MoneyCents = MoneyCents::units(41_000),
        independence_monthly_contribution: MoneyCents = MoneyCents::units(1_500),
        independence_annual_return_percent: f64 = 10.0,
        independence_horizon_years: f64 = 20.0,
        independence_wealth_min: MoneyCents = MoneyCents::units(1_100_000),
        independence_wealth_max: MoneyCents = MoneyCents::units(1_300_000),
        passive_income_estimate: MoneyCents = MoneyCents::units(5_000),
    }
}

plan_group! {
    /// Behavioral thresholds.
    Behavior / BehaviorPatch {
        /// Purchases above this wait `reflection_days` before buying.
        impulse_rule_threshold: MoneyCents = MoneyCents::units(500),
        reflection_days: i32 = 3,
        monthly_review_minutes: i32 = 15,
    }
}

plan_group! {
    /// Share of above-average income set aside for weak months.
    CompensationFund / CompensationFundPatch {
        reference_income: MoneyCents = MoneyCents::units(6_000),
        percent_above_average: f64 = 20.0,
    }
}

/// The whole plan. `PlanConfig::default()` is the baseline snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    pub persona: Persona,
    pub income: Income,
    pub expenses: Expenses,
    pub accounts: Accounts,
    pub debts: Debts,
    pub emergency_fund: EmergencyFund,
    pub investments: Investments,
    pub objectives: Objectives,
    pub behavior: Behavior,
    pub compensation_fund: CompensationFund,
}

/// Partial update of a [`PlanConfig`]; absent groups are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfigPatch {
    pub persona: Option<PersonaPatch>,
    pub income: Option<IncomePatch>,
    pub expenses: Option<ExpensesPatch>,
    pub accounts: Option<AccountsPatch>,
    pub debts: Option<DebtsPatch>,
    pub emergency_fund: Option<EmergencyFundPatch>,
    pub investments: Option<InvestmentsPatch>,
    pub objectives: Option<ObjectivesPatch>,
    pub behavior: Option<BehaviorPatch>,
    pub compensation_fund: Option<CompensationFundPatch>,
}

impl PlanConfig {
    /// Shallow merge, group by group.
    pub fn apply(&mut self, patch: PlanConfigPatch) {
        let PlanConfigPatch {
            persona,
            income,
            expenses,
            accounts,
            debts,
            emergency_fund,
            investments,
            objectives,
            behavior,
            compensation_fund,
        } = patch;

        if let Some(p) = persona {
            self.persona.apply(p);
        }
        if let Some(p) = income {
            self.income.apply(p);
        }
        if let Some(p) = expenses {
            self.expenses.apply(p);
        }
        if let Some(p) = accounts {
            self.accounts.apply(p);
        }
        if let Some(p) = debts {
            self.debts.apply(p);
        }
        if let Some(p) = emergency_fund {
            self.emergency_fund.apply(p);
        }
        if let Some(p) = investments {
            self.investments.apply(p);
        }
        if let Some(p) = objectives {
            self.objectives.apply(p);
        }
        if let Some(p) = behavior {
            self.behavior.apply(p);
        }
        if let Some(p) = compensation_fund {
            self.compensation_fund.apply(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_baseline_plan() {
        let plan = PlanConfig::default();
        assert_eq!(plan.persona.age, 26);
        assert_eq!(plan.emergency_fund.target, MoneyCents::units(21_900));
        assert_eq!(plan.objectives.independence_horizon_years, 20.0);
        assert_eq!(plan.compensation_fund.percent_above_average, 20.0);
    }

    #[test]
    fn patch_merges_only_given_fields() {
        let mut plan = PlanConfig::default();
        plan.apply(PlanConfigPatch {
            persona: Some(PersonaPatch {
                age: Some(30),
                ..Default::default()
            }),
            expenses: Some(ExpensesPatch {
                leisure_percent: Some(25.0),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(plan.persona.age, 30);
        assert_eq!(plan.persona.name, "Lucas Mendes");
        assert_eq!(plan.expenses.leisure_percent, 25.0);
        assert_eq!(plan.expenses.essentials_percent, 50.0);
        assert_eq!(plan.income, Income::default());
    }

    #[test]
    fn no_range_validation() {
        let mut plan = PlanConfig::default();
        plan.apply(PlanConfigPatch {
            investments: Some(InvestmentsPatch {
                stocks_percent: Some(250.0),
                ..Default::default()
            }),
            accounts: Some(AccountsPatch {
                personal: Some(MoneyCents::units(-10)),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(plan.investments.stocks_percent, 250.0);
        assert_eq!(plan.accounts.personal, MoneyCents::units(-10));
    }

    #[test]
    fn patch_accepts_negative_and_fractional_values() {
        let patch: PlanConfigPatch = serde_json::from_str(
            r#"{
                "persona": { "age": -1 },
                "objectives": { "exchange_horizon_years": 2.5 },
                "debts": { "payoff_horizon_months": -3 },
                "behavior": { "reflection_days": -2 }
            }"#,
        )
        .unwrap();

        let mut plan = PlanConfig::default();
        plan.apply(patch);
        assert_eq!(plan.persona.age, -1);
        assert_eq!(plan.objectives.exchange_horizon_years, 2.5);
        assert_eq!(plan.debts.payoff_horizon_months, -3.0);
        assert_eq!(plan.behavior.reflection_days, -2);
    }

    #[test]
    fn patch_deserializes_from_partial_json() {
        let patch: PlanConfigPatch = serde_json::from_str(
            r#"{ "debts": { "payoff_horizon_months": 6 }, "behavior": { "reflection_days": 7 } }"#,
        )
        .unwrap();

        let mut plan = PlanConfig::default();
        plan.apply(patch);
        assert_eq!(plan.debts.payoff_horizon_months, 6.0);
        assert_eq!(plan.debts.personal_card, MoneyCents::units(500));
        assert_eq!(plan.behavior.reflection_days, 7);
    }
}
