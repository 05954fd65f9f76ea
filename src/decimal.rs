use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// days per year for simple interest, ACT/365 fixed
pub const YEAR_BASIS: u32 = 365;

/// Money type for currency amounts and balances
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal, kept at full precision
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?))
    }

    /// create from integer amount (whole currency units)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// true if the value is representable with at most 2 fractional digits
    pub fn has_currency_precision(&self) -> bool {
        self.0.round_dp(2) == self.0
    }

    /// round to currency precision, half away from zero
    pub fn round_currency(&self) -> Self {
        self.round_currency_dp(2)
    }

    /// round half away from zero to the given number of fractional digits
    pub fn round_currency_dp(&self, dp: u32) -> Self {
        Money(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// check if negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// simple interest earned by this balance at an annual rate over `days`,
    /// unrounded: balance × rate/100 × days / 365
    pub fn apply_rate(&self, rate: Rate, days: u32) -> Money {
        let interest =
            self.0 * rate.as_fraction() * Decimal::from(days) / Decimal::from(YEAR_BASIS);
        Money(interest)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

/// annual interest rate, held as a percentage (1.95 means 1.95% p.a.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from a percentage value (e.g. dec!(1.95) for 1.95%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p)
    }

    /// get as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0
    }

    /// get as a fraction (1.95% -> 0.0195)
    pub fn as_fraction(&self) -> Decimal {
        self.0 / Decimal::from(100)
    }

    /// valid annual rates sit strictly inside (0, 100)
    pub fn in_annual_bounds(&self) -> bool {
        self.0 > Decimal::ZERO && self.0 < Decimal::from(100)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_percentage(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_precision_check() {
        assert!(Money::from_str_exact("100.00").unwrap().has_currency_precision());
        assert!(Money::from_str_exact("0.01").unwrap().has_currency_precision());
        // trailing zeros beyond 2 places are still 2 fractional digits of value
        assert!(Money::from_str_exact("10.100").unwrap().has_currency_precision());
        assert!(!Money::from_str_exact("10.001").unwrap().has_currency_precision());
    }

    #[test]
    fn test_round_half_away_from_zero() {
        let m = Money::from_str_exact("0.125").unwrap();
        assert_eq!(m.round_currency(), Money::from_str_exact("0.13").unwrap());

        let m = Money::from_str_exact("-0.125").unwrap();
        assert_eq!(m.round_currency(), Money::from_str_exact("-0.13").unwrap());

        let m = Money::from_str_exact("0.164").unwrap();
        assert_eq!(m.round_currency(), Money::from_str_exact("0.16").unwrap());
    }

    #[test]
    fn test_apply_rate() {
        let balance = Money::from_major(100);
        let rate = Rate::from_percentage(dec!(1.95));

        // 100.00 × 1.95% × 30 / 365
        let interest = balance.apply_rate(rate, 30);
        assert_eq!(interest.round_currency(), Money::from_str_exact("0.16").unwrap());

        let full_year = balance.apply_rate(rate, 365);
        assert_eq!(full_year.round_currency(), Money::from_str_exact("1.95").unwrap());
    }

    #[test]
    fn test_rate_bounds() {
        assert!(Rate::from_percentage(dec!(1.95)).in_annual_bounds());
        assert!(Rate::from_percentage(dec!(99.99)).in_annual_bounds());
        assert!(!Rate::ZERO.in_annual_bounds());
        assert!(!Rate::from_percentage(dec!(100)).in_annual_bounds());
        assert!(!Rate::from_percentage(dec!(-1)).in_annual_bounds());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(100).to_string(), "100.00");
        assert_eq!(Rate::from_percentage(dec!(1.9)).to_string(), "1.90%");
    }
}
