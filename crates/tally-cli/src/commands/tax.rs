use std::error::Error;

use clap::{Args, ValueEnum};
use tally_core::{Currency, Money};
use tally_rate::{calculate_exclusive, calculate_inclusive, Rate};

use super::to_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaxMode {
    /// `--amount` already contains tax.
    Inclusive,
    /// Tax is added on top of `--amount`.
    Exclusive,
}

#[derive(Args, Debug, Clone)]
pub struct TaxArgs {
    /// Amount in minor units.
    #[arg(long, allow_hyphen_values = true)]
    pub amount: i64,
    /// Tax rate as a decimal (`0.20`) or fraction (`1/5`).
    #[arg(long)]
    pub rate: Rate,
    #[arg(long, value_enum, default_value_t = TaxMode::Exclusive)]
    pub mode: TaxMode,
    #[arg(long, default_value = "USD")]
    pub currency: Currency,
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: &TaxArgs) -> Result<String, Box<dyn Error>> {
    let amount = Money::new(args.amount, args.currency.clone());
    let breakdown = match args.mode {
        TaxMode::Inclusive => calculate_inclusive(&amount, &args.rate)?,
        TaxMode::Exclusive => calculate_exclusive(&amount, &args.rate)?,
    };
    if args.json {
        return to_json(&breakdown);
    }
    Ok(format!(
        "base: {}\ntax: {}\ntotal: {}\n",
        breakdown.base, breakdown.tax, breakdown.total
    ))
}

pub fn run(args: &TaxArgs) -> Result<(), Box<dyn Error>> {
    print!("{}", execute(args)?);
    Ok(())
}
