//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 pence/cents) so that category
//! and daily totals add up exactly. The currency itself is a user setting, so
//! `Money` carries no symbol; see [`Money::format_with_symbol`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::currency::CURRENCIES;

/// Largest amount accepted from user input: one trillion units
pub const MAX_AMOUNT: Money = Money(1_000_000_000_000 * 100);

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use student_budget::models::Money;
    /// let amount = Money::from_cents(1250); // 12.50
    /// assert_eq!(amount.format_with_symbol("£"), "£12.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor units portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whether the magnitude is at most [`MAX_AMOUNT`]
    pub const fn is_within_limit(&self) -> bool {
        self.0 >= -MAX_AMOUNT.0 && self.0 <= MAX_AMOUNT.0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Divide evenly into `parts`, rounding half away from zero.
    /// Returns zero when `parts` is zero.
    pub fn average_over(&self, parts: usize) -> Self {
        if parts == 0 {
            return Self::zero();
        }
        let n = parts as i64;
        let half = n / 2;
        let rounded = if self.0 >= 0 {
            (self.0 + half) / n
        } else {
            (self.0 - half) / n
        };
        Self(rounded)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "12.50", "-12.50", "12.5", "12", and any of the supported
    /// currency symbols as a prefix ("£12.50", "€3"). Amounts beyond
    /// [`MAX_AMOUNT`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = CURRENCIES
            .iter()
            .find_map(|c| s.strip_prefix(c.symbol))
            .unwrap_or(s)
            .trim();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = if let Some((whole, frac)) = s.split_once('.') {
            if frac.contains('.') || !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let whole: i64 = if whole.is_empty() {
                0
            } else {
                whole
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
            };

            // Pad or truncate to 2 digits
            let frac: i64 = match frac.len() {
                0 => 0,
                1 => {
                    frac.parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            whole
                .checked_mul(100)
                .and_then(|v| v.checked_add(frac))
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
        } else {
            s.parse::<i64>()
                .ok()
                .and_then(|v| v.checked_mul(100))
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
        };

        if cents < 0 {
            // a second sign after the symbol, e.g. "£-5"
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let amount = Self(if negative { -cents } else { cents });
        if !amount.is_within_limit() {
            return Err(MoneyParseError::TooLarge(s.to_string()));
        }

        Ok(amount)
    }

    /// Format with a currency symbol prefix and exactly two decimals.
    ///
    /// Negative amounts put the minus sign before the symbol: `-£12.50`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.major().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.major(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.format_with_symbol("");
        f.pad(&s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooLarge(s) => write!(f, "Amount too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1250).format_with_symbol("£"), "£12.50");
        assert_eq!(Money::zero().format_with_symbol("$"), "$0.00");
        assert_eq!(Money::from_cents(123450).format_with_symbol("€"), "€1234.50");
        assert_eq!(Money::from_cents(-1250).format_with_symbol("£"), "-£12.50");
        assert_eq!(Money::from_cents(5).format_with_symbol("$"), "$0.05");
    }

    #[test]
    fn test_display_has_no_symbol() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(format!("{:>8}", Money::from_cents(1050)), "   10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("£10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("€3").unwrap().cents(), 300);
        assert_eq!(Money::parse("$0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1.x").is_err());
        assert!(Money::parse("£").is_err());
    }

    #[test]
    fn test_parse_rejects_amounts_over_limit() {
        assert_eq!(Money::parse("1000000000000").unwrap(), MAX_AMOUNT);
        assert_eq!(
            Money::parse("1000000000000.01"),
            Err(MoneyParseError::TooLarge("1000000000000.01".to_string()))
        );
        assert!(matches!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(Money::parse("-£2000000000000").is_err());
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let huge = Money::from_cents(i64::MAX - 10);
        assert_eq!((huge + huge).cents(), i64::MAX);
        assert_eq!((-huge - huge).cents(), i64::MIN);

        let mut total = huge;
        total += Money::from_cents(100);
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_average_over() {
        assert_eq!(Money::from_cents(1000).average_over(3).cents(), 333);
        assert_eq!(Money::from_cents(1001).average_over(2).cents(), 501);
        assert_eq!(Money::from_cents(500).average_over(0), Money::zero());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
