//! Fixed-point amounts and percentages
//!
//! Amounts are whole cents and percentages whole hundredths of a percent, so
//! the two-decimal text written to the spreadsheet is the value itself and
//! nothing drifts between generation and display.

use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Monetary amount in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Quantise a floating amount to the nearest cent
    pub fn from_f64(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `percent` of this amount, rounded half-up to the cent
    pub fn percent_of(self, percent: Percent) -> Money {
        let product = self.0 * i64::from(percent.hundredths());
        Money((product + 5_000).div_euclid(10_000))
    }

    /// Multiply by a factor, rounded to the nearest cent
    pub fn scale(self, factor: f64) -> Money {
        Money((self.0 as f64 * factor).round() as i64)
    }

    /// Parse two-decimal text such as `30750.00`
    pub fn parse(text: &str) -> Result<Self, TypeError> {
        parse_fixed2(text)
            .map(Self)
            .ok_or_else(|| TypeError::InvalidAmount(text.to_string()))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed2(f, self.0)
    }
}

/// Percentage in hundredths of a percent: `Percent::from_hundredths(250)` is 2.50%
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Percent(u32);

impl Percent {
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// Truncate (not round) a floating percentage to two decimals
    pub fn truncated(value: f64) -> Self {
        Self((value * 100.0) as u32)
    }

    pub const fn hundredths(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn parse(text: &str) -> Result<Self, TypeError> {
        parse_fixed2(text)
            .and_then(|value| u32::try_from(value).ok())
            .map(Self)
            .ok_or_else(|| TypeError::InvalidPercent(text.to_string()))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed2(f, i64::from(self.0))
    }
}

fn write_fixed2(f: &mut fmt::Formatter<'_>, value: i64) -> fmt::Result {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    write!(f, "{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
}

fn parse_fixed2(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    if whole.is_empty() || fraction.len() > 2 {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = whole.parse().ok()?;
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    let value = whole.checked_mul(100)?.checked_add(fraction)?;
    Some(if negative { -value } else { value })
}
