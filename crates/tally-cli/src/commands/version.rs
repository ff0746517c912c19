use std::error::Error;

use clap::Args;
use serde::Serialize;

use super::to_json;

#[derive(Args, Debug, Clone)]
pub struct VersionArgs {
    /// Emit JSON metadata instead of the bare version.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    commands: Vec<&'static str>,
}

pub fn execute(args: &VersionArgs) -> Result<String, Box<dyn Error>> {
    if !args.long {
        return Ok(format!("{}\n", env!("CARGO_PKG_VERSION")));
    }
    to_json(&VersionInfo {
        name: "tally",
        version: env!("CARGO_PKG_VERSION"),
        commands: vec!["split", "allocate", "tax", "refund", "prorate", "version"],
    })
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    print!("{}", execute(args)?);
    Ok(())
}
