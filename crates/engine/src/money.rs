use std::{
    fmt,
    iter::Sum,
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Signed money amount represented as **integer cents**.
///
/// Use this type for **all** monetary values in the engine (wallet balances,
/// debt and goal amounts, plan figures) to avoid floating-point drift. Rates
/// and percentages stay `f64`.
///
/// The value is signed: wallet balances may go negative, there is no overdraft
/// protection.
///
/// `Display` renders the bare decimal value; currency symbols and separators
/// are a presentation concern handled by [`Formatter`](crate::Formatter).
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
/// assert_eq!("10,5".parse::<MoneyCents>().unwrap().cents(), 1050);
/// assert!("12.345".parse::<MoneyCents>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates an amount from whole currency units (`units * 100` cents).
    #[must_use]
    pub const fn units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Converts a major-unit float (e.g. a projection result) to cents,
    /// rounding half away from zero.
    #[must_use]
    pub fn from_major(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns the value in major units as a float, for rate math.
    #[must_use]
    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Checked addition, `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_add(rhs.0).map(MoneyCents)
    }

    /// Checked subtraction, `None` on overflow.
    #[must_use]
    pub fn checked_sub(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_sub(rhs.0).map(MoneyCents)
    }

    /// Subtraction floored at zero. Never overflows.
    #[must_use]
    pub fn saturating_sub_floor(self, rhs: MoneyCents) -> MoneyCents {
        MoneyCents(self.0.saturating_sub(rhs.0).max(0))
    }

    /// `self` as a percentage of `whole`. Returns `0.0` when `whole` is zero.
    #[must_use]
    pub fn percent_of(self, whole: MoneyCents) -> f64 {
        if whole.0 == 0 {
            return 0.0;
        }
        self.0 as f64 / whole.0 as f64 * 100.0
    }

    /// Applies a percentage (`50.0` = half) and rounds to the nearest cent.
    #[must_use]
    pub fn scale_percent(self, percent: f64) -> MoneyCents {
        MoneyCents((self.0 as f64 * percent / 100.0).round() as i64)
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}{units}.{cents:02}")
    }
}

/// Operators saturate at the `i64` bounds. Ledger writes use the checked
/// methods instead.
impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0.saturating_add(rhs.0))
    }
}

impl Sub for MoneyCents {
    type Output = MoneyCents;

    fn sub(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for MoneyCents {
    fn sum<I: Iterator<Item = MoneyCents>>(iter: I) -> Self {
        iter.fold(MoneyCents::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a MoneyCents> for MoneyCents {
    fn sum<I: Iterator<Item = &'a MoneyCents>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromStr for MoneyCents {
    type Err = EngineError;

    /// Reads user input such as `"1250"`, `"12,5"` or `"-0.99"`. Either `.`
    /// or `,` separates at most two decimals; no grouping separators.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidAmount(format!("cannot read {input:?} as money"));

        let text = input.trim();
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            Some(_) => (false, text),
            None => return Err(invalid()),
        };
        let (whole, fraction) = digits.split_once(['.', ',']).unwrap_or((digits, ""));

        let only_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !only_digits(whole) || !only_digits(fraction) || fraction.len() > 2
        {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };
        let cents = whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction))
            .ok_or_else(invalid)?;

        Ok(MoneyCents(if negative { -cents } else { cents }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_decimal() {
        assert_eq!(MoneyCents::new(0).to_string(), "0.00");
        assert_eq!(MoneyCents::new(1).to_string(), "0.01");
        assert_eq!(MoneyCents::new(1050).to_string(), "10.50");
        assert_eq!(MoneyCents::new(-150_000).to_string(), "-1500.00");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<MoneyCents>().unwrap().cents(), 1050);
        assert_eq!("10,50".parse::<MoneyCents>().unwrap().cents(), 1050);
        assert_eq!("-0.01".parse::<MoneyCents>().unwrap().cents(), -1);
        assert_eq!("  2.30 ".parse::<MoneyCents>().unwrap().cents(), 230);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("12.345".parse::<MoneyCents>().is_err());
        assert!("abc".parse::<MoneyCents>().is_err());
        assert!("".parse::<MoneyCents>().is_err());
        assert!("1.2.3".parse::<MoneyCents>().is_err());
        assert!("1.000,00".parse::<MoneyCents>().is_err());
        assert!("-".parse::<MoneyCents>().is_err());
        assert!("92233720368547759".parse::<MoneyCents>().is_err());
    }

    #[test]
    fn percent_helpers() {
        let target = MoneyCents::units(21_900);
        let saved = MoneyCents::units(6_500);
        assert_eq!(saved.percent_of(target).round(), 30.0);
        assert_eq!(saved.percent_of(MoneyCents::ZERO), 0.0);
        assert_eq!(MoneyCents::units(6_000).scale_percent(20.0), MoneyCents::units(1_200));
    }

    #[test]
    fn floor_subtraction_never_negative() {
        let balance = MoneyCents::units(100);
        assert_eq!(
            balance.saturating_sub_floor(MoneyCents::units(250)),
            MoneyCents::ZERO
        );
        assert_eq!(
            balance.saturating_sub_floor(MoneyCents::units(40)),
            MoneyCents::units(60)
        );
    }

    #[test]
    fn floor_subtraction_survives_extremes() {
        assert_eq!(
            MoneyCents::new(i64::MIN + 1).saturating_sub_floor(MoneyCents::new(i64::MAX)),
            MoneyCents::ZERO
        );
        assert_eq!(
            MoneyCents::new(i64::MAX).saturating_sub_floor(MoneyCents::new(i64::MIN)),
            MoneyCents::new(i64::MAX)
        );
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        assert_eq!(MoneyCents::new(i64::MAX - 10).checked_add(MoneyCents::new(100)), None);
        assert_eq!(MoneyCents::new(i64::MIN).checked_sub(MoneyCents::new(1)), None);
        assert_eq!(
            MoneyCents::new(5).checked_sub(MoneyCents::new(7)),
            Some(MoneyCents::new(-2))
        );
    }

    #[test]
    fn sum_saturates() {
        let total: MoneyCents = [MoneyCents::new(i64::MAX), MoneyCents::new(1)].into_iter().sum();
        assert_eq!(total, MoneyCents::new(i64::MAX));
    }

    #[test]
    fn sums_iterators() {
        let total: MoneyCents = [MoneyCents::new(1), MoneyCents::new(2)].iter().sum();
        assert_eq!(total, MoneyCents::new(3));
    }
}
