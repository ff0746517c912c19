#![deny(missing_docs)]
#![doc = "Exact rate arithmetic for tally: rational rates, half-up rounding, tax, graduated pricing and FX."]

pub mod exchange;
pub mod pricing;
pub mod rate;
pub mod tax;

pub use exchange::{convert, settle_payment, ExchangeRate, Settlement};
pub use pricing::{graduated_cost, PriceSchedule, Tier};
pub use rate::{round_half_up, Rate};
pub use tax::{calculate_exclusive, calculate_inclusive, TaxBreakdown};
