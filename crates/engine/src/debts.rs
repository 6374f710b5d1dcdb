//! Debts and their payoff lifecycle.
//!
//! A debt starts `Active` and moves to `Settled` exactly once, when the
//! remaining balance reaches zero. `settled_at` is stamped on that transition
//! and is never touched again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, MoneyCents, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtStatus {
    Active,
    Settled,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    pub id: Uuid,
    pub name: String,
    pub total_amount: MoneyCents,
    pub remaining_balance: MoneyCents,
    /// Wallet the debt is usually paid from.
    pub wallet_id: Uuid,
    pub status: DebtStatus,
    pub created_at: DateTime<Utc>,
    pub settled_at: Option<DateTime<Utc>>,
}

impl Debt {
    /// Creates a debt with `remaining_balance` clamped into
    /// `[0, total_amount]`. Nothing left to pay means it starts settled.
    pub fn new(
        name: String,
        total_amount: MoneyCents,
        remaining_balance: MoneyCents,
        wallet_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut debt = Self {
            id: Uuid::new_v4(),
            name,
            total_amount,
            remaining_balance: remaining_balance.min(total_amount),
            wallet_id,
            status: DebtStatus::Active,
            created_at,
            settled_at: None,
        };
        if !debt.remaining_balance.is_positive() {
            debt.remaining_balance = MoneyCents::ZERO;
            debt.status = DebtStatus::Settled;
            debt.settled_at = Some(created_at);
        }
        debt
    }

    pub fn is_active(&self) -> bool {
        self.status == DebtStatus::Active
    }

    /// Amount already paid off.
    pub fn paid(&self) -> MoneyCents {
        self.total_amount - self.remaining_balance
    }

    /// The part of `amount` that will actually be charged.
    ///
    /// Overpayments are capped to the remaining balance. A settled debt
    /// accepts nothing.
    pub fn payable(&self, amount: MoneyCents) -> ResultEngine<MoneyCents> {
        if !self.is_active() || !self.remaining_balance.is_positive() {
            return Err(EngineError::DebtSettled(self.name.clone()));
        }
        Ok(amount.min(self.remaining_balance))
    }

    /// Applies an already capped payment.
    pub(crate) fn apply_payment(&mut self, capped: MoneyCents, at: DateTime<Utc>) {
        self.remaining_balance = self.remaining_balance.saturating_sub_floor(capped);
        if self.remaining_balance.is_zero() {
            self.status = DebtStatus::Settled;
            self.settled_at.get_or_insert(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn card() -> Debt {
        Debt::new(
            "Personal credit card".to_string(),
            MoneyCents::units(500),
            MoneyCents::units(250),
            Uuid::new_v4(),
            Utc.timestamp_opt(0, 0).unwrap(),
        )
    }

    #[test]
    fn overpayment_is_capped() {
        let debt = card();
        assert_eq!(
            debt.payable(MoneyCents::units(1_000)).unwrap(),
            MoneyCents::units(250)
        );
        assert_eq!(
            debt.payable(MoneyCents::units(100)).unwrap(),
            MoneyCents::units(100)
        );
    }

    #[test]
    fn settles_once() {
        let mut debt = card();
        let first = Utc.timestamp_opt(1_000, 0).unwrap();
        debt.apply_payment(MoneyCents::units(250), first);

        assert_eq!(debt.status, DebtStatus::Settled);
        assert_eq!(debt.settled_at, Some(first));
        assert_eq!(debt.paid(), MoneyCents::units(500));

        debt.apply_payment(MoneyCents::ZERO, first + Duration::days(1));
        assert_eq!(debt.settled_at, Some(first));
    }

    #[test]
    #[should_panic(expected = "DebtSettled(\"Personal credit card\")")]
    fn settled_debt_rejects_payment() {
        let mut debt = card();
        debt.apply_payment(MoneyCents::units(250), Utc::now());
        debt.payable(MoneyCents::units(1)).unwrap();
    }

    #[test]
    fn remaining_never_exceeds_total() {
        let debt = Debt::new(
            "Loan".to_string(),
            MoneyCents::units(500),
            MoneyCents::units(900),
            Uuid::new_v4(),
            Utc.timestamp_opt(0, 0).unwrap(),
        );
        assert_eq!(debt.remaining_balance, MoneyCents::units(500));
        assert_eq!(debt.paid(), MoneyCents::ZERO);
        assert!(debt.is_active());
    }

    #[test]
    fn zero_remaining_starts_settled() {
        let debt = Debt::new(
            "Old loan".to_string(),
            MoneyCents::units(100),
            MoneyCents::ZERO,
            Uuid::new_v4(),
            Utc.timestamp_opt(5, 0).unwrap(),
        );
        assert!(!debt.is_active());
        assert_eq!(debt.settled_at, Some(Utc.timestamp_opt(5, 0).unwrap()));
    }
}
