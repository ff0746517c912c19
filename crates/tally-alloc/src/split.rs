//! Largest-remainder (Hamilton) split of an integer amount across weights.

use std::cmp::Reverse;

use tally_core::{ErrorInfo, Money, TallyError};
use tracing::{debug, trace};

/// Bookkeeping for one weight during a single [`split`] call.
#[derive(Debug, Clone, Copy)]
struct WeightEntry {
    index: usize,
    base: i128,
    residue: i128,
}

/// Partitions `total` across `weights` so the parts sum exactly to `total`.
///
/// Every part starts from the floored proportional share
/// `floor(total * weight / sum(weights))`. The units lost to flooring are
/// handed out one at a time to the entries with the largest residue
/// `(total * weight) mod sum(weights)`; equal residues go to the earlier
/// index. Products are formed in `i128`, so the split is exact over the
/// whole `i64` range.
///
/// `total` may be negative. Floors round toward negative infinity, so the
/// parts of a negative total mirror those of a positive one with the extra
/// units moving toward zero.
///
/// # Errors
///
/// Returns [`TallyError::InvalidWeights`] when `weights` is empty or sums to
/// zero.
///
/// ```
/// let parts = tally_alloc::split(5, &[1, 1, 1]).unwrap();
/// assert_eq!(parts, vec![2, 2, 1]);
/// ```
pub fn split(total: i64, weights: &[u64]) -> Result<Vec<i64>, TallyError> {
    let sum = weight_sum(weights)?;
    let total_wide = i128::from(total);

    let mut entries: Vec<WeightEntry> = weights
        .iter()
        .enumerate()
        .map(|(index, &weight)| {
            let product = total_wide * i128::from(weight);
            WeightEntry {
                index,
                base: product.div_euclid(sum),
                residue: product.rem_euclid(sum),
            }
        })
        .collect();

    let floored: i128 = entries.iter().map(|entry| entry.base).sum();
    let remainder_units = total_wide - floored;
    debug_assert!(remainder_units >= 0 && remainder_units < weights.len() as i128);
    // 0 <= remainder_units < weights.len()
    let remainder_units = remainder_units as usize;

    entries.sort_unstable_by_key(|entry| (Reverse(entry.residue), entry.index));
    trace!(?entries, remainder_units, "ranked residues");
    for entry in entries.iter_mut().take(remainder_units) {
        entry.base += 1;
    }

    let mut parts = vec![0i64; weights.len()];
    for entry in entries {
        // Only entries with a positive residue receive a unit, so every part
        // stays between min(total, 0) and max(total, 0).
        parts[entry.index] = entry.base as i64;
    }

    debug!(
        total,
        weights = weights.len(),
        remainder_units,
        "split amount across weights"
    );
    Ok(parts)
}

/// Splits a currency-tagged amount and reattaches its currency to every part.
pub fn split_money(total: &Money, weights: &[u64]) -> Result<Vec<Money>, TallyError> {
    Ok(split(total.amount(), weights)?
        .into_iter()
        .map(|amount| total.with_amount(amount))
        .collect())
}

fn weight_sum(weights: &[u64]) -> Result<i128, TallyError> {
    if weights.is_empty() {
        let info = ErrorInfo::new("empty-weights", "weights must not be empty")
            .with_hint("supply at least one weight");
        return Err(TallyError::InvalidWeights(info));
    }
    let sum: u128 = weights.iter().map(|&weight| u128::from(weight)).sum();
    if sum == 0 {
        let info = ErrorInfo::new("zero-weight-sum", "weights must sum to more than zero")
            .with_context("count", weights.len())
            .with_hint("at least one weight must be positive");
        return Err(TallyError::InvalidWeights(info));
    }
    i128::try_from(sum).map_err(|_| {
        TallyError::InvalidWeights(
            ErrorInfo::new("weight-sum-overflow", "weight sum exceeds 128-bit range")
                .with_context("count", weights.len()),
        )
    })
}
