use std::error::Error;

use chrono::NaiveDate;
use clap::Args;
use tally_billing::{prorate, CalendarPolicy, Subscription};
use tally_core::{Currency, Money};

use super::to_json;

#[derive(Args, Debug, Clone)]
pub struct ProrateArgs {
    /// Fee for the full billing period, in minor units.
    #[arg(long)]
    pub amount: i64,
    /// First day of the billing period (YYYY-MM-DD).
    #[arg(long)]
    pub period_start: NaiveDate,
    /// Last day of the billing period.
    #[arg(long)]
    pub period_end: NaiveDate,
    /// First day the subscription was active.
    #[arg(long)]
    pub start: NaiveDate,
    /// Last day the subscription was active.
    #[arg(long)]
    pub end: NaiveDate,
    /// Extra non-business day; repeatable.
    #[arg(long = "holiday")]
    pub holidays: Vec<NaiveDate>,
    #[arg(long, default_value = "USD")]
    pub currency: Currency,
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: &ProrateArgs) -> Result<String, Box<dyn Error>> {
    let mut policy = CalendarPolicy::standard();
    for holiday in &args.holidays {
        policy.add_holiday(*holiday);
    }
    let sub = Subscription {
        total: Money::new(args.amount, args.currency.clone()),
        start: args.start,
        end: args.end,
    };
    let breakdown = prorate(&sub, args.period_start, args.period_end, &policy)?;
    if args.json {
        return to_json(&breakdown);
    }
    Ok(format!(
        "charge: {}\nuncharged: {}\nbusiness days: {}/{}\n",
        breakdown.charge, breakdown.uncharged, breakdown.active_days, breakdown.total_days
    ))
}

pub fn run(args: &ProrateArgs) -> Result<(), Box<dyn Error>> {
    print!("{}", execute(args)?);
    Ok(())
}
