//! Flat refunds spread across the original invoice components.

use serde::Serialize;
use tally_alloc::split_money;
use tally_core::{ErrorInfo, Money, TallyError};
use tracing::debug;

use crate::component::{component_weights, relabel, Component};

/// Per-component refund amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefundBreakdown {
    /// Refund attributed to each original component, in input order.
    pub components: Vec<Component>,
    /// Sum of `components`, always equal to the requested refund.
    pub total: Money,
}

/// Distributes `refund` across `original` using the original component
/// amounts as weights, so the refund keeps the order's base/tax ratio.
///
/// # Errors
///
/// - [`TallyError::Refund`] with `negative-refund` or `exceeds-original`.
/// - [`TallyError::Refund`] with `negative-component` for a negative line.
/// - [`TallyError::CurrencyMismatch`] when a component is in another currency.
/// - [`TallyError::InvalidWeights`] when there are no components or all are zero.
pub fn negotiated_refund(
    original: &[Component],
    refund: &Money,
) -> Result<RefundBreakdown, TallyError> {
    let weights = component_weights(original, refund.currency())?;
    ensure_refundable(refund, weights.iter().map(|w| u128::from(*w)).sum(), "exceeds-original")?;

    let parts = split_money(refund, &weights)?;
    debug!(refund = refund.amount(), components = weights.len(), "split negotiated refund");
    Ok(RefundBreakdown {
        components: relabel(original, parts),
        total: refund.clone(),
    })
}

/// Rejects negative refunds and refunds above `ceiling`.
pub(crate) fn ensure_refundable(
    refund: &Money,
    ceiling: u128,
    code: &str,
) -> Result<(), TallyError> {
    if refund.is_negative() {
        let info = ErrorInfo::new("negative-refund", "refund amount cannot be negative")
            .with_context("refund", refund);
        return Err(TallyError::Refund(info));
    }
    // non-negative, so the widening is lossless
    if refund.amount() as u128 > ceiling {
        let info = ErrorInfo::new(code, "refund amount exceeds the refundable value")
            .with_context("refund", refund)
            .with_context("ceiling", ceiling);
        return Err(TallyError::Refund(info));
    }
    Ok(())
}
