use std::error::Error;
use std::fmt::Write as _;

use clap::Args;
use tally_alloc::{split, split_money};
use tally_core::{Currency, Money};

use super::to_json;

#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Amount in minor units; may be negative.
    #[arg(long, allow_hyphen_values = true)]
    pub total: i64,
    /// Comma separated weights, e.g. `1,2,3`.
    #[arg(long, value_delimiter = ',', required = true)]
    pub weights: Vec<u64>,
    /// Tag every part with a currency.
    #[arg(long)]
    pub currency: Option<Currency>,
    /// Print JSON instead of one part per line.
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: &SplitArgs) -> Result<String, Box<dyn Error>> {
    let Some(currency) = &args.currency else {
        let parts = split(args.total, &args.weights)?;
        if args.json {
            return to_json(&parts);
        }
        let mut out = String::new();
        for part in parts {
            writeln!(out, "{part}")?;
        }
        return Ok(out);
    };

    let total = Money::new(args.total, currency.clone());
    let parts = split_money(&total, &args.weights)?;
    if args.json {
        return to_json(&parts);
    }
    let mut out = String::new();
    for part in parts {
        writeln!(out, "{part}")?;
    }
    Ok(out)
}

pub fn run(args: &SplitArgs) -> Result<(), Box<dyn Error>> {
    print!("{}", execute(args)?);
    Ok(())
}
