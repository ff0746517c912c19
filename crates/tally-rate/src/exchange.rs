//! Currency conversion and settlement gain/loss.

use serde::{Deserialize, Serialize};
use tally_core::{Currency, ErrorInfo, Money, TallyError};
use tracing::debug;

use crate::rate::{round_half_up, Rate};

/// Value of one unit of `source` expressed in `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Currency being converted from.
    pub source: Currency,
    /// Currency being converted to.
    pub target: Currency,
    /// Target units per source unit.
    pub price: Rate,
}

impl ExchangeRate {
    /// Builds a rate from currency codes and a decimal price string.
    pub fn new(source: &str, target: &str, price: &str) -> Result<Self, TallyError> {
        Ok(Self {
            source: Currency::new(source)?,
            target: Currency::new(target)?,
            price: Rate::parse(price)?,
        })
    }
}

/// Converts `amount` with `rate`, rounding half up once.
pub fn convert(amount: &Money, rate: &ExchangeRate) -> Result<Money, TallyError> {
    if amount.currency() != &rate.source {
        let info = ErrorInfo::new("rate-source-mismatch", "money and rate source differ")
            .with_context("money", amount.currency())
            .with_context("source", &rate.source);
        return Err(TallyError::CurrencyMismatch(info));
    }
    let converted = round_half_up(&rate.price.mul_int(amount.amount()))?;
    Ok(Money::new(converted, rate.target.clone()))
}

/// Outcome of settling a foreign-currency payment against its booked value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    /// Payment value at today's rate, in the booking currency.
    pub converted: Money,
    /// Magnitude of the difference between `converted` and the booked value.
    pub gain_loss: Money,
    /// Whether the difference is a gain (zero counts as a gain).
    pub is_gain: bool,
}

/// Compares a foreign payment at `current_rate` with the amount originally booked.
pub fn settle_payment(
    foreign: &Money,
    current_rate: &ExchangeRate,
    booked: &Money,
) -> Result<Settlement, TallyError> {
    let converted = convert(foreign, current_rate)?;
    let diff = converted.checked_sub(booked)?;
    let is_gain = !diff.is_negative();
    let gain_loss = if is_gain { diff } else { diff.negate()? };
    debug!(
        converted = converted.amount(),
        booked = booked.amount(),
        is_gain,
        "settled foreign payment"
    );
    Ok(Settlement {
        converted,
        gain_loss,
        is_gain,
    })
}
