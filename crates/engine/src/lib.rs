//! Personal-finance planning engine.
//!
//! The [`Engine`] owns the whole application state: a [`PlanConfig`] with
//! default parameters and targets, and a [`Ledger`] with wallets, the
//! transaction log, debts and goals. Ledger operations move money between
//! wallets, goals and debts; [`suggestions`] and [`projections`] derive
//! read-only insights from the current snapshot.
//!
//! ```rust
//! use chrono::Utc;
//! use engine::{Engine, MoneyCents, seed};
//!
//! let now = Utc::now();
//! let mut engine = Engine::builder().seed_demo(now).build().unwrap();
//! engine
//!     .pay_fixed_draw(
//!         MoneyCents::units(4_000),
//!         seed::BUSINESS_WALLET,
//!         seed::PERSONAL_WALLET,
//!         now,
//!     )
//!     .unwrap();
//! assert_eq!(
//!     engine.wallet(seed::PERSONAL_WALLET).unwrap().balance,
//!     MoneyCents::units(4_800)
//! );
//! ```

pub use commands::{NewDebt, NewGoal, NewWallet};
pub use currency::Currency;
pub use debts::{Debt, DebtStatus};
pub use error::EngineError;
pub use format::{Formatter, Locale};
pub use goals::Goal;
pub use ledger::Ledger;
pub use money::MoneyCents;
pub use ops::{Engine, EngineBuilder, NetWorth};
pub use plan::{PlanConfig, PlanConfigPatch};
pub use transactions::{FlowTotals, OriginAction, Transaction, TransactionFilter, TransactionKind};
pub use wallets::{Wallet, WalletKind};

mod commands;
mod currency;
mod debts;
mod error;
mod format;
mod goals;
mod ledger;
mod money;
mod ops;
pub mod plan;
pub mod projections;
pub mod seed;
pub mod suggestions;
mod transactions;
mod wallets;

pub type ResultEngine<T> = Result<T, EngineError>;
