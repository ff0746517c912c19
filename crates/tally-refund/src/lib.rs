#![deny(missing_docs)]
#![doc = "Ratio-preserving refunds: negotiated amounts and partial returns split across invoice components."]

mod component;
pub mod itemized;
pub mod negotiated;

pub use component::Component;
pub use itemized::{itemized_refund, ItemizedRefund, LineItem};
pub use negotiated::{negotiated_refund, RefundBreakdown};
