//! Currency-tagged integer amounts expressed in minor units.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, TallyError};

/// ISO-4217 style currency code: exactly three ASCII uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Validates and wraps a currency code.
    pub fn new(code: &str) -> Result<Self, TallyError> {
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Ok(Self(code.to_string()));
        }
        let info = ErrorInfo::new(
            "invalid-currency",
            "currency codes must be three ASCII uppercase letters",
        )
        .with_context("code", code)
        .with_hint("use an ISO-4217 code such as USD or EUR");
        Err(TallyError::InvalidCurrency(info))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::new(s.trim())
    }
}

impl TryFrom<String> for Currency {
    type Error = TallyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::new(&value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

/// Immutable monetary value stored in its minor unit (1000 = 10.00 USD).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Creates a value from a minor-unit amount and a currency.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Returns the minor-unit amount.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency tag.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns a new value in the same currency with a different amount.
    pub fn with_amount(&self, amount: i64) -> Self {
        Self::new(amount, self.currency.clone())
    }

    /// Returns whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns whether the amount is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Adds two amounts of the same currency.
    pub fn checked_add(&self, other: &Money) -> Result<Money, TallyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| overflow("add", self.amount, other.amount))?;
        Ok(self.with_amount(amount))
    }

    /// Subtracts an amount of the same currency.
    pub fn checked_sub(&self, other: &Money) -> Result<Money, TallyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| overflow("sub", self.amount, other.amount))?;
        Ok(self.with_amount(amount))
    }

    /// Flips the sign of the amount.
    pub fn negate(&self) -> Result<Money, TallyError> {
        let amount = self.amount.checked_neg().ok_or_else(|| {
            TallyError::Overflow(
                ErrorInfo::new("money-overflow", "amount cannot be negated")
                    .with_context("amount", self.amount),
            )
        })?;
        Ok(self.with_amount(amount))
    }

    /// Sums a sequence of amounts that must all carry `currency`.
    pub fn sum<'a, I>(values: I, currency: &Currency) -> Result<Money, TallyError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        values
            .into_iter()
            .try_fold(Money::zero(currency.clone()), |acc, value| acc.checked_add(value))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), TallyError> {
        if self.currency == other.currency {
            return Ok(());
        }
        let info = ErrorInfo::new(
            "currency-mismatch",
            "cannot operate on mismatched currencies",
        )
        .with_context("left", &self.currency)
        .with_context("right", &other.currency);
        Err(TallyError::CurrencyMismatch(info))
    }
}

fn overflow(op: &str, left: i64, right: i64) -> TallyError {
    TallyError::Overflow(
        ErrorInfo::new("money-overflow", "minor-unit amount out of range")
            .with_context("op", op)
            .with_context("left", left)
            .with_context("right", right),
    )
}

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.amount, self.currency)
    }
}
