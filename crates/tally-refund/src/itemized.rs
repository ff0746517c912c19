//! Two-stage refunds for a partial return of a multi-quantity line.

use serde::{Deserialize, Serialize};
use tally_alloc::split_money;
use tally_core::{ErrorInfo, Money, TallyError};
use tracing::debug;

use crate::component::{component_weights, relabel, Component};
use crate::negotiated::ensure_refundable;

/// A full order line: quantity bought and the line-level component totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Units purchased.
    pub quantity: u64,
    /// Totals for the whole line (for example base 3000.00, tax 750.00).
    pub components: Vec<Component>,
}

/// Outcome of [`itemized_refund`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemizedRefund {
    /// Value of the returned units; the negotiated amount may not exceed it.
    pub max_refundable: Money,
    /// Per-component value of the returned units.
    pub scope: Vec<Component>,
    /// Negotiated refund split by the scoped component values.
    pub refunded: Vec<Component>,
}

/// Refunds `negotiated` for `return_qty` units of `line`.
///
/// Stage one splits every component by `[return_qty, kept_qty]` to find the
/// value of the returned units. Stage two splits the negotiated amount across
/// those scoped values, so the refund keeps the line's component ratio.
pub fn itemized_refund(
    line: &LineItem,
    return_qty: u64,
    negotiated: &Money,
) -> Result<ItemizedRefund, TallyError> {
    if return_qty == 0 {
        let info = ErrorInfo::new("non-positive-quantity", "return quantity must be positive");
        return Err(TallyError::Refund(info));
    }
    if return_qty > line.quantity {
        let info = ErrorInfo::new(
            "exceeds-quantity",
            "cannot return more items than purchased",
        )
        .with_context("returned", return_qty)
        .with_context("purchased", line.quantity);
        return Err(TallyError::Refund(info));
    }
    let currency = negotiated.currency();
    component_weights(&line.components, currency)?;

    let quantity_weights = [return_qty, line.quantity - return_qty];
    let mut scope = Vec::with_capacity(line.components.len());
    for component in &line.components {
        let returned = split_money(&component.amount, &quantity_weights)?
            .into_iter()
            .next()
            .unwrap_or_else(|| Money::zero(currency.clone()));
        scope.push(Component::new(component.name.clone(), returned));
    }
    let scope_weights = component_weights(&scope, currency)?;
    let max_refundable = Money::sum(scope.iter().map(|c| &c.amount), currency)?;
    ensure_refundable(negotiated, u128::from(max_refundable.amount() as u64), "exceeds-cap")?;

    let refunded = if scope_weights.iter().all(|w| *w == 0) {
        // nothing refundable and nothing negotiated
        scope
            .iter()
            .map(|c| Component::new(c.name.clone(), Money::zero(currency.clone())))
            .collect()
    } else {
        relabel(&scope, split_money(negotiated, &scope_weights)?)
    };
    debug!(
        return_qty,
        cap = max_refundable.amount(),
        negotiated = negotiated.amount(),
        "split itemized refund"
    );
    Ok(ItemizedRefund {
        max_refundable,
        scope,
        refunded,
    })
}
