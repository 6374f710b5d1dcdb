//! Savings goals, including the emergency fund.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, MoneyCents, ResultEngine};

/// A savings target.
///
/// `accumulated_amount` is not clamped to `target_amount`; contributions past
/// the target are kept as they are.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: MoneyCents,
    pub accumulated_amount: MoneyCents,
    /// Lower is more urgent.
    pub priority: u32,
    pub is_emergency_fund: bool,
    pub dest_wallet_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Goal {
    pub fn new(
        name: String,
        target_amount: MoneyCents,
        accumulated_amount: MoneyCents,
        priority: u32,
        is_emergency_fund: bool,
        dest_wallet_id: Option<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            target_amount,
            accumulated_amount,
            priority,
            is_emergency_fund,
            dest_wallet_id,
            created_at,
            completed_at: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.accumulated_amount >= self.target_amount
    }

    /// Completion percentage, uncapped.
    pub fn progress_percent(&self) -> f64 {
        self.accumulated_amount.percent_of(self.target_amount)
    }

    /// What is still missing, never below zero.
    pub fn remaining(&self) -> MoneyCents {
        self.target_amount
            .saturating_sub_floor(self.accumulated_amount)
    }

    /// Adds `amount`, stamping `completed_at` the first time the target is
    /// reached. Leaves the goal untouched when the sum is out of range.
    pub(crate) fn contribute(&mut self, amount: MoneyCents, at: DateTime<Utc>) -> ResultEngine<()> {
        self.accumulated_amount = self
            .accumulated_amount
            .checked_add(amount)
            .ok_or_else(|| {
                EngineError::InvalidAmount(format!(
                    "contributing {amount} puts goal \"{}\" out of range",
                    self.name
                ))
            })?;
        if self.completed_at.is_none() && self.is_complete() {
            self.completed_at = Some(at);
        }
        Ok(())
    }

    /// Decrease floored at zero.
    pub(crate) fn withdraw(&mut self, amount: MoneyCents) {
        self.accumulated_amount = self.accumulated_amount.saturating_sub_floor(amount);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn reserve() -> Goal {
        Goal::new(
            "Emergency fund".to_string(),
            MoneyCents::units(21_900),
            MoneyCents::units(6_500),
            1,
            true,
            None,
            Utc.timestamp_opt(0, 0).unwrap(),
        )
    }

    #[test]
    fn progress_and_remaining() {
        let goal = reserve();
        assert_eq!(goal.progress_percent().round(), 30.0);
        assert_eq!(goal.remaining(), MoneyCents::units(15_400));
        assert!(!goal.is_complete());
    }

    #[test]
    fn contributions_are_not_clamped() {
        let mut goal = reserve();
        let at = Utc.timestamp_opt(10, 0).unwrap();
        goal.contribute(MoneyCents::units(20_000), at).unwrap();

        assert_eq!(goal.accumulated_amount, MoneyCents::units(26_500));
        assert_eq!(goal.remaining(), MoneyCents::ZERO);
        assert_eq!(goal.completed_at, Some(at));
    }

    #[test]
    fn overflowing_contribution_is_rejected() {
        let mut goal = reserve();
        goal.accumulated_amount = MoneyCents::new(i64::MAX - 1);
        let err = goal
            .contribute(MoneyCents::new(2), Utc.timestamp_opt(10, 0).unwrap())
            .unwrap_err();

        assert!(matches!(err, EngineError::InvalidAmount(_)));
        assert_eq!(goal.accumulated_amount, MoneyCents::new(i64::MAX - 1));
        assert_eq!(goal.completed_at, None);
    }

    #[test]
    fn withdraw_floors_at_zero() {
        let mut goal = reserve();
        goal.withdraw(MoneyCents::units(10_000));
        assert_eq!(goal.accumulated_amount, MoneyCents::ZERO);
        goal.withdraw(MoneyCents::units(1));
        assert_eq!(goal.accumulated_amount, MoneyCents::ZERO);
    }
}
