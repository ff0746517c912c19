use std::error::Error;
use std::fmt::Write as _;

use clap::Args;
use tally_core::{Currency, Money};
use tally_refund::{itemized_refund, negotiated_refund, Component, LineItem};

use super::to_json;

#[derive(Args, Debug, Clone)]
pub struct RefundArgs {
    /// Original invoice components as `name=amount` pairs, e.g. `Base=100000,Tax=25000`.
    #[arg(long, value_delimiter = ',', value_parser = parse_component, required = true)]
    pub components: Vec<(String, i64)>,
    /// Negotiated refund in minor units.
    #[arg(long, allow_hyphen_values = true)]
    pub amount: i64,
    /// Units on the original line; enables the itemized refund.
    #[arg(long, requires = "returned")]
    pub quantity: Option<u64>,
    /// Units being returned.
    #[arg(long, requires = "quantity")]
    pub returned: Option<u64>,
    #[arg(long, default_value = "USD")]
    pub currency: Currency,
    #[arg(long)]
    pub json: bool,
}

fn parse_component(raw: &str) -> Result<(String, i64), String> {
    let (name, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=amount, got `{raw}`"))?;
    let amount = amount
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("invalid amount in `{raw}`: {err}"))?;
    Ok((name.trim().to_string(), amount))
}

pub fn execute(args: &RefundArgs) -> Result<String, Box<dyn Error>> {
    let components: Vec<Component> = args
        .components
        .iter()
        .map(|(name, amount)| Component::new(name.clone(), Money::new(*amount, args.currency.clone())))
        .collect();
    let refund = Money::new(args.amount, args.currency.clone());

    let mut out = String::new();
    match (args.quantity, args.returned) {
        (Some(quantity), Some(returned)) => {
            let line = LineItem {
                quantity,
                components,
            };
            let result = itemized_refund(&line, returned, &refund)?;
            if args.json {
                return to_json(&result);
            }
            writeln!(out, "max refundable: {}", result.max_refundable)?;
            for (scope, refunded) in result.scope.iter().zip(&result.refunded) {
                writeln!(
                    out,
                    "{}: {} of {}",
                    refunded.name, refunded.amount, scope.amount
                )?;
            }
        }
        _ => {
            let breakdown = negotiated_refund(&components, &refund)?;
            if args.json {
                return to_json(&breakdown);
            }
            for component in &breakdown.components {
                writeln!(out, "{}: {}", component.name, component.amount)?;
            }
            writeln!(out, "total: {}", breakdown.total)?;
        }
    }
    Ok(out)
}

pub fn run(args: &RefundArgs) -> Result<(), Box<dyn Error>> {
    print!("{}", execute(args)?);
    Ok(())
}
