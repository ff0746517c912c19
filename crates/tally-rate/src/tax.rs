//! Inclusive and exclusive tax calculation.
//!
//! Both directions round exactly once and derive the remaining figure by
//! difference, so `base + tax == total` always holds.

use num::{BigInt, BigRational, One, Signed};
use serde::Serialize;
use tally_core::{ErrorInfo, Money, TallyError};
use tracing::debug;

use crate::rate::{round_half_up, Rate};

/// Split between the pre-tax base and the tax amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxBreakdown {
    /// Pre-tax amount.
    pub base: Money,
    /// Tax amount.
    pub tax: Money,
    /// `base + tax`.
    pub total: Money,
}

/// Backs tax out of a gross amount: `base = gross / (1 + rate)`.
pub fn calculate_inclusive(gross: &Money, rate: &Rate) -> Result<TaxBreakdown, TallyError> {
    let divisor = BigRational::one() + rate.raw();
    if !divisor.is_positive() {
        let info = ErrorInfo::new("rate-out-of-range", "inclusive tax needs a rate above -1")
            .with_context("rate", rate);
        return Err(TallyError::Rate(info));
    }
    let gross_exact = BigRational::from_integer(BigInt::from(gross.amount()));
    let base = gross.with_amount(round_half_up(&(gross_exact / divisor))?);
    let tax = gross.checked_sub(&base)?;
    debug!(gross = gross.amount(), base = base.amount(), %rate, "backed out inclusive tax");
    Ok(TaxBreakdown {
        base,
        tax,
        total: gross.clone(),
    })
}

/// Adds tax on top of a base amount: `tax = base * rate`.
pub fn calculate_exclusive(base: &Money, rate: &Rate) -> Result<TaxBreakdown, TallyError> {
    let tax = base.with_amount(round_half_up(&rate.mul_int(base.amount()))?);
    let total = base.checked_add(&tax)?;
    debug!(base = base.amount(), tax = tax.amount(), %rate, "added exclusive tax");
    Ok(TaxBreakdown {
        base: base.clone(),
        tax,
        total,
    })
}
