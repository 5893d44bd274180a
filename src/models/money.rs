//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift when
//! summing. On the wire (persisted slots, JSON exports) an amount is a plain
//! decimal number such as `60` or `85.5`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Largest magnitude accepted from input or storage, in cents
///
/// Sums of up to ~90 000 such amounts stay within `i64`.
pub const MAX_CENTS: i64 = 100_000_000_000_000;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use depenses::models::Money;
    /// let amount = Money::from_cents(1050); // 10,50 €
    /// assert_eq!(amount.to_plain_string(), "10.5");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a Money amount from a decimal value, rounded to the cent
    ///
    /// `None` when the value is not finite or exceeds [`MAX_CENTS`].
    pub fn from_f64(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() > MAX_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
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

    /// The amount as a decimal value
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "60", "85.50", "85,50", "85.5", "-12", "60 €" and "€60".
    /// Digits beyond the second decimal are truncated. Amounts above
    /// [`MAX_CENTS`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '€' && *c != '\u{202f}')
            .collect();

        let (negative, body) = match cleaned.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, cleaned.as_str()),
        };

        let body = body.replace(',', ".");
        if body.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = match body.split_once('.') {
            Some((units_str, cents_str)) => {
                if cents_str.contains('.') || !cents_str.is_ascii() {
                    return Err(MoneyParseError::InvalidFormat(s.to_string()));
                }
                let units: i64 = if units_str.is_empty() {
                    0
                } else {
                    parse_digits(units_str, s)?
                };
                let cents: i64 = match cents_str.len() {
                    0 => 0,
                    1 => parse_digits(cents_str, s)? * 10,
                    _ => parse_digits(&cents_str[..2], s)?,
                };
                units.checked_mul(100).and_then(|u| u.checked_add(cents))
            }
            None => parse_digits(&body, s)?.checked_mul(100),
        }
        .filter(|cents| *cents <= MAX_CENTS)
        .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Shortest decimal rendering, as a spreadsheet would read it back
    /// (`60`, `85.5`, `13.99`)
    pub fn to_plain_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().abs();
        match self.cents_part() {
            0 => format!("{}{}", sign, units),
            c if c % 10 == 0 => format!("{}{}.{}", sign, units, c / 10),
            c => format!("{}{}.{:02}", sign, units, c),
        }
    }

    /// French-style formatting: `1 234,50 €`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{},{:02} {}",
            sign,
            group_thousands(self.units().abs()),
            self.cents_part(),
            symbol
        )
    }
}

fn parse_digits(digits: &str, original: &str) -> Result<i64, MoneyParseError> {
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(MoneyParseError::InvalidFormat(original.to_string()));
    }
    digits
        .parse()
        .map_err(|_| MoneyParseError::InvalidFormat(original.to_string()))
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("€"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.cents_part() == 0 {
            serializer.serialize_i64(self.units())
        } else {
            serializer.serialize_f64(self.to_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_f64(value)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", value)))
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
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
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
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display_is_french() {
        assert_eq!(Money::from_cents(8550).to_string(), "85,50 €");
        assert_eq!(Money::from_cents(0).to_string(), "0,00 €");
        assert_eq!(Money::from_cents(123456).to_string(), "1 234,56 €");
        assert_eq!(Money::from_cents(-500).to_string(), "-5,00 €");
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::from_cents(6000).to_plain_string(), "60");
        assert_eq!(Money::from_cents(8550).to_plain_string(), "85.5");
        assert_eq!(Money::from_cents(1399).to_plain_string(), "13.99");
        assert_eq!(Money::from_cents(5).to_plain_string(), "0.05");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10,50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10,5 €").unwrap().cents(), 1050);
        assert_eq!(Money::parse("€10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("0.059").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1e5").is_err());
        assert!(Money::parse("1.5é").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(Money::parse("99999999999999999").is_err());
        assert!(Money::parse("99999999999999999.99").is_err());
        assert!(Money::parse("-99999999999999999").is_err());
        assert!(Money::parse("1000000000000").is_ok());
        assert!(Money::parse("1000000000001").is_err());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Money>("1e30").is_err());
        assert!(serde_json::from_str::<Money>("-1e30").is_err());
        assert_eq!(Money::from_f64(f64::NAN), None);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!((big + Money::from_cents(10)).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(), i64::MIN);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serializes_as_decimal_number() {
        assert_eq!(serde_json::to_string(&Money::from_cents(6000)).unwrap(), "60");
        assert_eq!(serde_json::to_string(&Money::from_cents(8550)).unwrap(), "85.5");

        let m: Money = serde_json::from_str("13.99").unwrap();
        assert_eq!(m.cents(), 1399);
        let m: Money = serde_json::from_str("750").unwrap();
        assert_eq!(m.cents(), 75000);
    }
}
