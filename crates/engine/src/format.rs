//! Locale-bound presentation helpers.
//!
//! Amounts are kept as [`MoneyCents`] everywhere in the engine; this module
//! renders them (and dates, percentages, plain numbers) for a configurable
//! [`Locale`] and [`Currency`]. Nothing in here feeds back into ledger state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Currency, EngineError, MoneyCents};

/// Number and date conventions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "it-IT")]
    ItIt,
}

impl Locale {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
            Locale::ItIt => "it-IT",
        }
    }

    const fn decimal_separator(self) -> char {
        match self {
            Locale::EnUs => '.',
            Locale::PtBr | Locale::ItIt => ',',
        }
    }

    const fn group_separator(self) -> char {
        match self {
            Locale::EnUs => ',',
            Locale::PtBr | Locale::ItIt => '.',
        }
    }

    const fn date_pattern(self) -> &'static str {
        match self {
            Locale::EnUs => "%m/%d/%Y",
            Locale::PtBr | Locale::ItIt => "%d/%m/%Y",
        }
    }
}

impl TryFrom<&str> for Locale {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "pt-br" => Ok(Locale::PtBr),
            "en-us" => Ok(Locale::EnUs),
            "it-it" => Ok(Locale::ItIt),
            other => Err(EngineError::InvalidLocale(other.to_string())),
        }
    }
}

/// Formatting policy: a locale plus the currency money is shown in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatter {
    pub locale: Locale,
    pub currency: Currency,
}

impl Formatter {
    #[must_use]
    pub const fn new(locale: Locale, currency: Currency) -> Self {
        Self { locale, currency }
    }

    /// Currency with 2 decimals and the locale's separators.
    ///
    /// ```rust
    /// use engine::{Currency, Formatter, Locale, MoneyCents};
    ///
    /// let brl = Formatter::new(Locale::PtBr, Currency::Brl);
    /// assert_eq!(brl.currency(MoneyCents::new(123_456)), "R$ 1.234,56");
    /// let usd = Formatter::new(Locale::EnUs, Currency::Usd);
    /// assert_eq!(usd.currency(MoneyCents::new(-123_456)), "-$1,234.56");
    /// ```
    #[must_use]
    pub fn currency(&self, amount: MoneyCents) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let abs = amount.cents().unsigned_abs();
        let units = self.group(abs / 100);
        let cents = abs % 100;
        let number = format!("{units}{}{cents:02}", self.locale.decimal_separator());
        let symbol = self.currency.symbol();
        match self.locale {
            Locale::PtBr => format!("{sign}{symbol} {number}"),
            Locale::EnUs => format!("{sign}{symbol}{number}"),
            Locale::ItIt => format!("{sign}{number} {symbol}"),
        }
    }

    /// Date as day/month/year (month/day/year for `en-US`).
    #[must_use]
    pub fn date(&self, date: &DateTime<Utc>) -> String {
        date.format(self.locale.date_pattern()).to_string()
    }

    /// Percentage with a `%` suffix, integer when the value has no fraction.
    #[must_use]
    pub fn percent(&self, value: f64) -> String {
        format!("{value}%")
    }

    /// Plain grouped number with up to 3 fraction digits.
    #[must_use]
    pub fn number(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        let scaled = (value.abs() * 1000.0).round() as u64;
        let int_part = self.group(scaled / 1000);
        let frac = scaled % 1000;
        if frac == 0 {
            return format!("{sign}{int_part}");
        }
        let frac = format!("{frac:03}");
        format!(
            "{sign}{int_part}{}{}",
            self.locale.decimal_separator(),
            frac.trim_end_matches('0')
        )
    }

    fn group(&self, value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.locale.group_separator());
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn currency_per_locale() {
        let amount = MoneyCents::new(1_200_000_00);
        assert_eq!(
            Formatter::new(Locale::PtBr, Currency::Brl).currency(amount),
            "R$ 1.200.000,00"
        );
        assert_eq!(
            Formatter::new(Locale::EnUs, Currency::Usd).currency(amount),
            "$1,200,000.00"
        );
        assert_eq!(
            Formatter::new(Locale::ItIt, Currency::Eur).currency(MoneyCents::new(-5)),
            "-0,05 €"
        );
        assert_eq!(Formatter::default().currency(MoneyCents::ZERO), "R$ 0,00");
    }

    #[test]
    fn dates_are_day_month_year() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(Formatter::default().date(&date), "07/03/2024");
        assert_eq!(
            Formatter::new(Locale::EnUs, Currency::Usd).date(&date),
            "03/07/2024"
        );
    }

    #[test]
    fn percent_and_number() {
        let fmt = Formatter::default();
        assert_eq!(fmt.percent(50.0), "50%");
        assert_eq!(fmt.percent(12.5), "12.5%");
        assert_eq!(fmt.number(1_234_567.0), "1.234.567");
        assert_eq!(fmt.number(1_234.5), "1.234,5");
        assert_eq!(
            Formatter::new(Locale::EnUs, Currency::Usd).number(-987.125),
            "-987.125"
        );
    }

    #[test]
    fn locale_tags_round_trip() {
        for locale in [Locale::PtBr, Locale::EnUs, Locale::ItIt] {
            assert_eq!(Locale::try_from(locale.tag()).unwrap(), locale);
        }
        assert_eq!(Locale::try_from("pt_BR").unwrap(), Locale::PtBr);
        assert!(Locale::try_from("xx").is_err());
    }
}
