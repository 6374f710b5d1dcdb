//! Demo snapshot used at startup.
//!
//! Wallet, debt and goal amounts that the plan describes are taken from the
//! plan, so a customized plan seeds a matching ledger. Ids are fixed so
//! callers can address seeded records directly.

use chrono::{DateTime, Duration, Utc};
use uuid::{Uuid, uuid};

use crate::{
    Debt, Goal, Ledger, MoneyCents, OriginAction, PlanConfig, ResultEngine, Transaction,
    TransactionKind, Wallet, WalletKind,
};

pub const PERSONAL_WALLET: Uuid = uuid!("0b7c6f0e-4a53-4b9e-9d3f-1f0c1a6d2e01");
pub const BUSINESS_WALLET: Uuid = uuid!("0b7c6f0e-4a53-4b9e-9d3f-1f0c1a6d2e02");
pub const RESERVE_WALLET: Uuid = uuid!("0b7c6f0e-4a53-4b9e-9d3f-1f0c1a6d2e03");
pub const INVESTMENT_WALLET: Uuid = uuid!("0b7c6f0e-4a53-4b9e-9d3f-1f0c1a6d2e04");

pub const PERSONAL_CARD_DEBT: Uuid = uuid!("5d1e2a44-8c7b-4f61-a0b2-6e3c9d8f1a01");
pub const BUSINESS_CARD_DEBT: Uuid = uuid!("5d1e2a44-8c7b-4f61-a0b2-6e3c9d8f1a02");

pub const EMERGENCY_FUND_GOAL: Uuid = uuid!("9a4f3c21-2b6d-4e8a-b7c5-3d2e1f0a9b01");
pub const EXCHANGE_GOAL: Uuid = uuid!("9a4f3c21-2b6d-4e8a-b7c5-3d2e1f0a9b02");
pub const INDEPENDENCE_GOAL: Uuid = uuid!("9a4f3c21-2b6d-4e8a-b7c5-3d2e1f0a9b03");

/// Builds the demo ledger relative to `now`.
pub fn demo(plan: &PlanConfig, now: DateTime<Utc>) -> ResultEngine<Ledger> {
    let days_ago = |days: i64| now - Duration::days(days);

    let wallets = vec![
        Wallet::with_id(
            PERSONAL_WALLET,
            "Personal account".to_string(),
            WalletKind::Personal,
            plan.accounts.personal,
        ),
        Wallet::with_id(
            BUSINESS_WALLET,
            "Business account".to_string(),
            WalletKind::Business,
            plan.accounts.business,
        ),
        Wallet::with_id(
            RESERVE_WALLET,
            "Emergency reserve".to_string(),
            WalletKind::Reserve,
            MoneyCents::units(6_500),
        ),
        Wallet::with_id(
            INVESTMENT_WALLET,
            "Investment portfolio".to_string(),
            WalletKind::Investment,
            MoneyCents::units(15_000),
        ),
    ];

    let mut personal_card = Debt::new(
        "Personal credit card".to_string(),
        plan.debts.personal_card,
        MoneyCents::units(250).min(plan.debts.personal_card),
        PERSONAL_WALLET,
        days_ago(30),
    );
    personal_card.id = PERSONAL_CARD_DEBT;
    let mut business_card = Debt::new(
        "Business credit card".to_string(),
        plan.debts.business_card,
        plan.debts.business_card,
        BUSINESS_WALLET,
        days_ago(30),
    );
    business_card.id = BUSINESS_CARD_DEBT;

    let mut emergency = Goal::new(
        "Emergency fund".to_string(),
        plan.emergency_fund.target,
        MoneyCents::units(6_500),
        1,
        true,
        Some(RESERVE_WALLET),
        days_ago(60),
    );
    emergency.id = EMERGENCY_FUND_GOAL;
    let mut exchange = Goal::new(
        "Exchange program / digital product".to_string(),
        plan.objectives.exchange_estimated_wealth,
        MoneyCents::units(5_000),
        2,
        false,
        Some(INVESTMENT_WALLET),
        days_ago(30),
    );
    exchange.id = EXCHANGE_GOAL;
    let mut independence = Goal::new(
        "Financial independence".to_string(),
        MoneyCents::units(1_200_000),
        MoneyCents::units(10_000),
        3,
        false,
        Some(INVESTMENT_WALLET),
        days_ago(30),
    );
    independence.id = INDEPENDENCE_GOAL;

    // Oldest first: the log is append-only.
    let transactions = vec![
        Transaction::new(
            TransactionKind::Outflow,
            OriginAction::PayDebt,
            MoneyCents::units(250),
            "Payment: Personal credit card".to_string(),
            "Debt payment".to_string(),
            Some(PERSONAL_WALLET),
            None,
            days_ago(4),
        )?
        .with_debt(PERSONAL_CARD_DEBT),
        Transaction::new(
            TransactionKind::Outflow,
            OriginAction::PayExpense,
            MoneyCents::units(1_500),
            "Rent".to_string(),
            "Housing".to_string(),
            Some(PERSONAL_WALLET),
            None,
            days_ago(3),
        )?,
        Transaction::new(
            TransactionKind::Transfer,
            OriginAction::ContributeGoal,
            plan.emergency_fund.monthly_contribution,
            "Contribution: Emergency fund".to_string(),
            "Reserve".to_string(),
            Some(PERSONAL_WALLET),
            Some(RESERVE_WALLET),
            days_ago(2),
        )?
        .with_goal(EMERGENCY_FUND_GOAL),
        Transaction::new(
            TransactionKind::Transfer,
            OriginAction::PayFixedDraw,
            plan.income.fixed_draw_target,
            "Monthly fixed draw".to_string(),
            "Fixed draw".to_string(),
            Some(BUSINESS_WALLET),
            Some(PERSONAL_WALLET),
            days_ago(1),
        )?,
        Transaction::new(
            TransactionKind::Inflow,
            OriginAction::ReceivePayment,
            MoneyCents::units(3_500),
            "Freelance project - Client A".to_string(),
            "Freelance".to_string(),
            None,
            Some(BUSINESS_WALLET),
            now,
        )?,
    ];

    Ok(Ledger {
        wallets,
        transactions,
        debts: vec![personal_card, business_card],
        goals: vec![emergency, exchange, independence],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_follows_plan() {
        let now = Utc::now();
        let ledger = demo(&PlanConfig::default(), now).unwrap();

        assert_eq!(ledger.wallets.len(), 4);
        assert_eq!(ledger.total_balance(), MoneyCents::units(24_800));
        assert_eq!(ledger.total_active_debt(), MoneyCents::units(1_250));
        assert_eq!(ledger.emergency_fund().unwrap().id, EMERGENCY_FUND_GOAL);
        assert_eq!(ledger.recent_transactions().next().unwrap().occurred_at, now);
    }

    #[test]
    fn plan_overrides_seed_amounts() {
        let mut plan = PlanConfig::default();
        plan.accounts.personal = MoneyCents::units(1_234);
        plan.emergency_fund.target = MoneyCents::units(30_000);

        let ledger = demo(&plan, Utc::now()).unwrap();
        assert_eq!(
            ledger.wallet(PERSONAL_WALLET).unwrap().balance,
            MoneyCents::units(1_234)
        );
        assert_eq!(
            ledger.goal(EMERGENCY_FUND_GOAL).unwrap().target_amount,
            MoneyCents::units(30_000)
        );
    }
}
