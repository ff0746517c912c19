use serde::{Deserialize, Serialize};
use tally_core::{Currency, ErrorInfo, Money, TallyError};

/// One line of an original invoice, such as the base price or VAT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Label carried through to the refund breakdown.
    pub name: String,
    /// Amount of this component.
    pub amount: Money,
}

impl Component {
    /// Creates a component.
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Converts component amounts into splitter weights.
///
/// Every component must carry `currency` and a non-negative amount.
pub(crate) fn component_weights(
    components: &[Component],
    currency: &Currency,
) -> Result<Vec<u64>, TallyError> {
    components
        .iter()
        .map(|component| {
            if component.amount.currency() != currency {
                let info = ErrorInfo::new("currency-mismatch", "component currency differs")
                    .with_context("component", &component.name)
                    .with_context("expected", currency)
                    .with_context("found", component.amount.currency());
                return Err(TallyError::CurrencyMismatch(info));
            }
            u64::try_from(component.amount.amount()).map_err(|_| {
                TallyError::Refund(
                    ErrorInfo::new("negative-component", "component amounts must not be negative")
                        .with_context("component", &component.name)
                        .with_context("amount", component.amount.amount()),
                )
            })
        })
        .collect()
}

/// Pairs component names with split amounts, in order.
pub(crate) fn relabel(components: &[Component], parts: Vec<Money>) -> Vec<Component> {
    components
        .iter()
        .zip(parts)
        .map(|(component, amount)| Component::new(component.name.clone(), amount))
        .collect()
}
