use serde::{Deserialize, Serialize};

use crate::EngineError;

/// ISO currency code used when rendering money values.
///
/// The engine stores every amount as an `i64` number of **minor units** (see
/// `MoneyCents`), so the currency only matters at the presentation boundary.
/// All supported currencies use 2 minor units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Brl,
    Eur,
    Usd,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Currency::Brl),
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            other => Err(EngineError::CurrencyMismatch(format!(
                "unsupported currency: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Currency::try_from("brl").unwrap(), Currency::Brl);
        assert_eq!(Currency::try_from(" EUR ").unwrap(), Currency::Eur);
        assert_eq!(
            Currency::try_from("GBP").unwrap_err(),
            EngineError::CurrencyMismatch("unsupported currency: GBP".to_string())
        );
    }
}
