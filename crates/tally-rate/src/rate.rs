//! Exact rational rates parsed from decimal or fraction strings.

use std::fmt::{self, Display};
use std::str::FromStr;

use num::{BigInt, BigRational, One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use tally_core::{ErrorInfo, TallyError};

/// High-precision rate such as a unit price (`0.0045`) or a tax rate (`0.20`).
///
/// Values are held as reduced fractions, so products are exact until the
/// caller rounds once with [`round_half_up`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rate {
    value: BigRational,
}

impl Rate {
    /// Parses a rate from `"0.0045"`, `"-1.5"`, `".5"`, `"7"` or `"3/8"`.
    pub fn parse(input: &str) -> Result<Self, TallyError> {
        let text = input.trim();
        let value = match text.split_once('/') {
            Some((numer, denom)) => {
                let numer = parse_integer(numer.trim(), input)?;
                let denom = parse_integer(denom.trim(), input)?;
                if denom.is_zero() {
                    return Err(invalid_rate(input, "denominator must not be zero"));
                }
                BigRational::new(numer, denom)
            }
            None => parse_decimal(text, input)?,
        };
        Ok(Self { value })
    }

    /// Builds a rate from an integer ratio.
    pub fn from_ratio(numer: i64, denom: i64) -> Result<Self, TallyError> {
        if denom == 0 {
            return Err(invalid_rate(
                &format!("{numer}/{denom}"),
                "denominator must not be zero",
            ));
        }
        Ok(Self {
            value: BigRational::new(BigInt::from(numer), BigInt::from(denom)),
        })
    }

    /// Returns the rate `0`.
    pub fn zero() -> Self {
        Self {
            value: BigRational::zero(),
        }
    }

    /// Multiplies the rate by an integer quantity without rounding.
    pub fn mul_int(&self, quantity: i64) -> BigRational {
        &self.value * BigRational::from_integer(BigInt::from(quantity))
    }

    /// Returns the underlying exact value.
    pub fn raw(&self) -> &BigRational {
        &self.value
    }

    /// Returns whether the rate is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }
}

impl Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.denom().is_one() {
            write!(f, "{}", self.value.numer())
        } else {
            write!(f, "{}/{}", self.value.numer(), self.value.denom())
        }
    }
}

impl FromStr for Rate {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rate::parse(s)
    }
}

impl TryFrom<String> for Rate {
    type Error = TallyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rate::parse(&value)
    }
}

impl From<Rate> for String {
    fn from(value: Rate) -> Self {
        value.to_string()
    }
}

/// Rounds an exact value to the nearest integer, halves rounding up
/// (`floor(x + 1/2)`), so `2.5 -> 3` and `-2.5 -> -2`.
pub fn round_half_up(value: &BigRational) -> Result<i64, TallyError> {
    let half = BigRational::new(BigInt::one(), BigInt::from(2));
    let rounded = (value + half).floor().to_integer();
    rounded.to_i64().ok_or_else(|| {
        TallyError::Overflow(
            ErrorInfo::new("rounding-overflow", "rounded value does not fit in i64")
                .with_context("value", &rounded),
        )
    })
}

fn parse_decimal(text: &str, input: &str) -> Result<BigRational, TallyError> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid_rate(input, "expected at least one digit"));
    }
    if !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid_rate(input, "expected a decimal number or p/q fraction"));
    }

    let digits = format!("{whole}{fraction}");
    let mut numer = parse_integer(&digits, input)?;
    if negative {
        numer = -numer;
    }
    let denom = num::pow(BigInt::from(10), fraction.len());
    Ok(BigRational::new(numer, denom))
}

fn parse_integer(text: &str, input: &str) -> Result<BigInt, TallyError> {
    BigInt::from_str(text).map_err(|_| invalid_rate(input, "expected an integer component"))
}

fn invalid_rate(input: &str, message: &str) -> TallyError {
    TallyError::Rate(
        ErrorInfo::new("invalid-rate", message)
            .with_context("input", input)
            .with_hint("write rates as decimals like 0.0045 or fractions like 3/8"),
    )
}
