//! Amount type for representing balances and transaction values
//!
//! A thin wrapper over `f64`. Amounts are entered by hand, so parsing accepts
//! both `10.50` and `10,50`. Persisted records store the value as a fixed
//! two-decimal string, while the balance file keeps the full precision.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monetary amount in the configured currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    /// Wrap a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Value rounded to whole cents, the precision every amount is shown at
    pub fn cents(&self) -> i64 {
        (self.0 * 100.0).round() as i64
    }

    /// Parse an amount typed by a user
    ///
    /// Surrounding whitespace is ignored and a comma decimal separator is
    /// rewritten to a period: `"10,5"` parses as `10.5`. Any finite number is
    /// accepted, including zero and negative values; `inf` and `NaN` are not.
    pub fn parse(input: &str) -> Result<Self, AmountParseError> {
        let normalized = input.trim().replace(',', ".");

        let value: f64 = normalized
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(input.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::NotFinite(input.to_string()));
        }

        Ok(Self(value))
    }

    /// Parse the full-precision form written by [`Amount::plain`]
    pub fn from_plain(text: &str) -> Option<Self> {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Self)
    }

    /// Shortest representation that reads back to the same value
    pub fn plain(&self) -> String {
        self.0.to_string()
    }

    /// Two-decimal fixed representation (`"12.25"`)
    pub fn fixed(&self) -> String {
        format!("{:.2}", self.0)
    }

    /// Format with a currency symbol after the number (`"12.25€"`)
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{:.2}{}", self.0, symbol)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.fixed())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        Amount::parse(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Ok(Amount(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Ok(Amount(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Ok(Amount(v as f64))
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
    NotFinite(String),
}

impl AmountParseError {
    /// The raw input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat(s) | Self::NotFinite(s) => s,
        }
    }
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
            Self::NotFinite(s) => write!(f, "Amount is not a finite number: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

impl From<AmountParseError> for crate::error::PiggyError {
    fn from(err: AmountParseError) -> Self {
        Self::InvalidAmount(err.input().to_string())
    }
}
