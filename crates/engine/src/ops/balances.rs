use serde::Serialize;

use crate::{MoneyCents, suggestions, suggestions::Suggestion};

use super::Engine;

/// Assets and liabilities as seen from wallet balances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NetWorth {
    /// Sum of positive wallet balances.
    pub assets: MoneyCents,
    /// Sum of the magnitudes of negative wallet balances.
    pub liabilities: MoneyCents,
    pub net: MoneyCents,
}

impl Engine {
    /// Sum of every wallet balance.
    pub fn total_balance(&self) -> MoneyCents {
        self.ledger.total_balance()
    }

    pub fn total_active_debt(&self) -> MoneyCents {
        self.ledger.total_active_debt()
    }

    pub fn net_worth(&self) -> NetWorth {
        let (assets, liabilities) = self.ledger.wallets.iter().fold(
            (MoneyCents::ZERO, MoneyCents::ZERO),
            |(assets, liabilities), wallet| {
                if wallet.balance.is_negative() {
                    (assets, liabilities + wallet.balance.abs())
                } else {
                    (assets + wallet.balance, liabilities)
                }
            },
        );
        NetWorth {
            assets,
            liabilities,
            net: assets - liabilities,
        }
    }

    /// Share of debts already settled, as a rounded percentage. Zero when
    /// there are no debts.
    pub fn debt_payoff_progress(&self) -> u32 {
        let total = self.ledger.debts.len();
        if total == 0 {
            return 0;
        }
        let settled = self
            .ledger
            .debts
            .iter()
            .filter(|debt| !debt.is_active())
            .count();
        (settled as f64 / total as f64 * 100.0).round() as u32
    }

    /// Suggestions for the current snapshot.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        suggestions::generate(
            &self.ledger.wallets,
            &self.ledger.debts,
            &self.ledger.goals,
            &self.formatter,
        )
    }
}
