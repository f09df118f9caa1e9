//! Currency amounts in the smallest unit (cents).
//!
//! The backend stores prices as `DECIMAL(10, 2)` and the wire carries them as
//! JSON numbers (occasionally as numeric strings). Inside the domain every
//! amount is an exact integer count of cents, so totals never drift.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Signed amount of money in cents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Negative amounts become zero; everything else is returned unchanged.
    pub fn clamp_non_negative(self) -> Self {
        Self(self.0.max(0))
    }

    /// Multiply by a line quantity, saturating at the `i64` bounds.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Amount as a floating point number of currency units (wire/display only).
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Convert a floating point amount to cents, rounding to the nearest cent.
    pub fn from_f64(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!("amount is not a number: {value}")));
        }
        let cents = (value * 100.0).round();
        if cents.abs() >= i64::MAX as f64 {
            return Err(DomainError::validation(format!("amount out of range: {value}")));
        }
        Ok(Self(cents as i64))
    }

    /// Parse user-entered text such as `9.99`, `$12`, `-5.5` or `.75`.
    ///
    /// At most two fractional digits are accepted.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let invalid = || DomainError::validation(format!("invalid amount: {:?}", raw));

        let s = raw.trim();
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let (whole, frac) = rest.split_once('.').unwrap_or((rest, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(DomainError::validation(format!(
                "amount has more than two decimal places: {:?}",
                raw
            )));
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|w| w.checked_mul(100))
                .ok_or_else(invalid)?
        };
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse::<i64>().map_err(|_| invalid())?,
        };
        let cents = whole_cents.checked_add(frac_cents).ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parse user-entered text, falling back to zero when it is not an amount.
    pub fn parse_or_zero(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::ZERO)
    }

    /// Amount without the currency sign, e.g. `29.97` or `-5.00`.
    pub fn plain(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Amounts arrive as numbers from most endpoints, as strings from some
/// database drivers.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireAmount {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match WireAmount::deserialize(deserializer)? {
            WireAmount::Number(n) => Money::from_f64(n).map_err(serde::de::Error::custom),
            WireAmount::Text(s) => Money::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}
