//! Graduated (tiered) usage pricing.

use num::{BigInt, BigRational, Zero};
use serde::{Deserialize, Serialize};
use tally_core::{Currency, ErrorInfo, Money, TallyError};
use tracing::debug;

use crate::rate::{round_half_up, Rate};

/// Minor units per major unit assumed by [`graduated_cost`].
pub const DEFAULT_MINOR_UNITS: u32 = 100;

/// One band of a graduated price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Number of units billed at this price; `None` for the open-ended last tier.
    pub capacity: Option<i64>,
    /// Price per unit, in major currency units.
    pub price: Rate,
}

impl Tier {
    /// Creates a bounded tier.
    pub fn bounded(capacity: i64, price: Rate) -> Self {
        Self {
            capacity: Some(capacity),
            price,
        }
    }

    /// Creates the open-ended tier.
    pub fn unbounded(price: Rate) -> Self {
        Self {
            capacity: None,
            price,
        }
    }
}

/// Ordered tiers plus the currency and minor-unit scale they bill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSchedule {
    /// Tiers in fill order.
    pub tiers: Vec<Tier>,
    /// Currency of the resulting charge.
    pub currency: Currency,
    /// Minor units per major unit (100 for cents).
    #[serde(default = "default_minor_units")]
    pub minor_units: u32,
}

fn default_minor_units() -> u32 {
    DEFAULT_MINOR_UNITS
}

impl PriceSchedule {
    /// Creates a schedule billing in cents.
    pub fn new(tiers: Vec<Tier>, currency: Currency) -> Self {
        Self {
            tiers,
            currency,
            minor_units: DEFAULT_MINOR_UNITS,
        }
    }

    /// Prices `usage` units.
    ///
    /// Tiers are filled in order. Each tier's `count * price` is summed
    /// exactly and the total is rounded half up only once, after conversion
    /// to minor units. Usage beyond the last bounded tier is not billed when
    /// no open-ended tier exists.
    pub fn cost(&self, usage: i64) -> Result<Money, TallyError> {
        if usage < 0 {
            let info = ErrorInfo::new("negative-usage", "usage cannot be negative")
                .with_context("usage", usage);
            return Err(TallyError::Pricing(info));
        }

        let mut total = BigRational::zero();
        let mut remaining = usage;
        for (index, tier) in self.tiers.iter().enumerate() {
            if remaining == 0 {
                break;
            }
            let count = match tier.capacity {
                None => remaining,
                Some(capacity) if capacity <= 0 => {
                    let info = ErrorInfo::new("invalid-tier", "tier capacity must be positive")
                        .with_context("tier", index)
                        .with_context("capacity", capacity);
                    return Err(TallyError::Pricing(info));
                }
                Some(capacity) => remaining.min(capacity),
            };
            total += tier.price.mul_int(count);
            remaining -= count;
        }

        let minor = total * BigRational::from_integer(BigInt::from(self.minor_units));
        let amount = round_half_up(&minor)?;
        debug!(usage, unbilled = remaining, amount, "priced graduated usage");
        Ok(Money::new(amount, self.currency.clone()))
    }
}

/// Prices `usage` against `tiers` in cents of `currency`.
pub fn graduated_cost(usage: i64, tiers: &[Tier], currency: &Currency) -> Result<Money, TallyError> {
    PriceSchedule::new(tiers.to_vec(), currency.clone()).cost(usage)
}
