//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when a wallet, goal or debt id does not resolve.
//! - [`InvalidAmount`] thrown when an amount is not strictly positive, cannot
//!   be parsed or would push a balance out of range.
//! - [`InvalidName`] thrown when a wallet, goal or debt is given a blank name.
//! - [`DebtSettled`] thrown when a payment targets a debt that is already
//!   settled.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidName`]: EngineError::InvalidName
//!  [`DebtSettled`]: EngineError::DebtSettled
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Debt already settled: {0}")]
    DebtSettled(String),
    #[error("Unsupported currency: {0}")]
    CurrencyMismatch(String),
    #[error("Unsupported locale: {0}")]
    InvalidLocale(String),
}
