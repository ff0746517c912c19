//! One module per `tally` subcommand. Each exposes `execute`, which renders
//! the report as a string, and `run`, which prints it.

pub mod allocate;
pub mod prorate;
pub mod refund;
pub mod split;
pub mod tax;
pub mod version;

use std::error::Error;

use serde::Serialize;

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, Box<dyn Error>> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
