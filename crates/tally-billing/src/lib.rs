#![deny(missing_docs)]
#![doc = "Business-day calendars and subscription proration built on the tally splitter."]

pub mod calendar;
pub mod prorate;

pub use calendar::{CalendarPolicy, MAX_PERIOD_DAYS};
pub use prorate::{prorate, prorated_charge, ProrationBreakdown, Subscription};
