//! Subscription proration over business days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_alloc::split_money;
use tally_core::{Money, TallyError};
use tracing::debug;

use crate::calendar::CalendarPolicy;

/// A subscription fee and the dates the customer held the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Full fee for one billing period.
    pub total: Money,
    /// First day of service (inclusive).
    pub start: NaiveDate,
    /// Last day of service (inclusive).
    pub end: NaiveDate,
}

/// Result of splitting a period's fee into charged and uncharged parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProrationBreakdown {
    /// Amount for the business days the subscription was active.
    pub charge: Money,
    /// Remainder of the fee; `charge + uncharged == total`.
    pub uncharged: Money,
    /// Active business days inside the period.
    pub active_days: u64,
    /// Business days in the whole period.
    pub total_days: u64,
}

/// Splits the subscription fee for `period_start..=period_end` by
/// `[active_days, inactive_days]`, counting only business days under `policy`.
///
/// A period with no business days charges nothing.
pub fn prorate(
    sub: &Subscription,
    period_start: NaiveDate,
    period_end: NaiveDate,
    policy: &CalendarPolicy,
) -> Result<ProrationBreakdown, TallyError> {
    let total_days = policy.count_business_days(period_start, period_end)?;
    if total_days == 0 {
        return Ok(ProrationBreakdown {
            charge: Money::zero(sub.total.currency().clone()),
            uncharged: sub.total.clone(),
            active_days: 0,
            total_days,
        });
    }

    let active_start = sub.start.max(period_start);
    let active_end = sub.end.min(period_end);
    let active_days = policy.count_business_days(active_start, active_end)?;

    let charge = split_money(&sub.total, &[active_days, total_days - active_days])?
        .into_iter()
        .next()
        .unwrap_or_else(|| Money::zero(sub.total.currency().clone()));
    let uncharged = sub.total.checked_sub(&charge)?;
    debug!(
        active_days,
        total_days,
        charge = charge.amount(),
        "prorated subscription"
    );
    Ok(ProrationBreakdown {
        charge,
        uncharged,
        active_days,
        total_days,
    })
}

/// Returns only the charged amount of [`prorate`].
pub fn prorated_charge(
    sub: &Subscription,
    period_start: NaiveDate,
    period_end: NaiveDate,
    policy: &CalendarPolicy,
) -> Result<Money, TallyError> {
    Ok(prorate(sub, period_start, period_end, policy)?.charge)
}
