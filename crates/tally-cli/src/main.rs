use std::error::Error;

use clap::{Parser, Subcommand};
use tally_cli::commands::{
    allocate::{self, AllocateArgs},
    prorate::{self, ProrateArgs},
    refund::{self, RefundArgs},
    split::{self, SplitArgs},
    tax::{self, TaxArgs},
    version::{self, VersionArgs},
};
use tally_cli::logging::init_log;

#[derive(Parser, Debug)]
#[command(name = "tally", about = "Exact weighted partitioning of monetary amounts")]
struct Cli {
    /// Log filter used when RUST_LOG is unset, e.g. `info` or `tally_alloc=debug`.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split an amount across a list of weights.
    Split(SplitArgs),
    /// Allocate a job file's total down its tree.
    Allocate(AllocateArgs),
    /// Compute inclusive or exclusive tax.
    Tax(TaxArgs),
    /// Spread a negotiated refund across invoice components.
    Refund(RefundArgs),
    /// Prorate a subscription fee by business days.
    Prorate(ProrateArgs),
    /// Print the version.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_log(&cli.log_level);
    match cli.command {
        Command::Split(args) => split::run(&args),
        Command::Allocate(args) => allocate::run(&args),
        Command::Tax(args) => tax::run(&args),
        Command::Refund(args) => refund::run(&args),
        Command::Prorate(args) => prorate::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
