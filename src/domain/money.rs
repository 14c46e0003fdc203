use crate::error::FlowError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A strictly positive transaction amount.
///
/// User input arrives as a decimal string; parsing and the positivity gate
/// live here so the flow machine only ever holds valid amounts.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, FlowError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(FlowError::validation(
                "amount",
                "amount must be greater than zero",
            ))
        }
    }

    /// Parses a user-entered decimal string.
    pub fn parse(input: &str) -> Result<Self, FlowError> {
        let trimmed = input.trim();
        let value = Decimal::from_str(trimmed).map_err(|_| {
            FlowError::validation("amount", format!("{trimmed:?} is not a valid amount"))
        })?;
        Self::new(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Naira display with thousands grouping and two fraction digits.
    pub fn naira(&self) -> String {
        format_naira(self.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = FlowError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.naira())
    }
}

/// A non-negative service fee. Currently always zero; kept as a value
/// object so future pricing slots in without touching the flow machine.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Fee(Decimal);

impl Fee {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, FlowError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(FlowError::validation("fee", "fee cannot be negative"))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn naira(&self) -> String {
        format_naira(self.0)
    }
}

/// Formats a decimal as `₦1,234.50`: grouped integer part, exactly two
/// fraction digits.
pub fn format_naira(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let text = rounded.to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, format!("{f:0<2}")),
        None => (text.as_str(), "00".to_string()),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}₦{grouped}.{fraction}")
}
