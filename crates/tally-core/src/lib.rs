#![deny(missing_docs)]
#![doc = "Core error model and currency-tagged money type shared by every tally crate."]

pub mod errors;
pub mod money;

pub use errors::{ErrorInfo, TallyError};
pub use money::{Currency, Money};

/// Convenience constructor used throughout tests and call sites that carry a
/// known-good currency literal.
///
/// Returns an error if `code` is not a valid currency code.
pub fn money(amount: i64, code: &str) -> Result<Money, TallyError> {
    Ok(Money::new(amount, Currency::new(code)?))
}
