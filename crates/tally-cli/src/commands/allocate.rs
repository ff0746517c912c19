use std::error::Error;
use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tally_alloc::{allocate_tree, allocation_digest, verify_conservation, AllocationNode};
use tally_core::{Currency, Money};
use tracing::info;

use super::to_json;
use crate::job::{load_job, OutputFormat};

#[derive(Args, Debug, Clone)]
pub struct AllocateArgs {
    /// YAML or JSON job file describing the total and the tree.
    #[arg(long)]
    pub job: PathBuf,
    /// Override the job's output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Skip the parent == sum(children) check after allocating.
    #[arg(long)]
    pub no_verify: bool,
}

#[derive(Debug, Serialize)]
struct AllocationReport<'a> {
    total: Money,
    tree: &'a AllocationNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    digest: Option<String>,
}

pub fn execute(args: &AllocateArgs) -> Result<String, Box<dyn Error>> {
    let mut job = load_job(&args.job)?;
    let total = Money::new(job.total, Currency::new(&job.currency)?);

    job.tree.reset();
    allocate_tree(&mut job.tree, job.total)?;
    if !args.no_verify {
        verify_conservation(&job.tree)?;
    }
    let digest = job.output.digest.then(|| allocation_digest(&job.tree));
    info!(job = %args.job.display(), total = job.total, "allocated job");

    match args.format.unwrap_or(job.output.format) {
        OutputFormat::Json => to_json(&AllocationReport {
            total,
            tree: &job.tree,
            digest,
        }),
        OutputFormat::Text => {
            let mut out = format!("total: {total}\n");
            out.push_str(&job.tree.render());
            if let Some(digest) = digest {
                writeln!(out, "digest: {digest}")?;
            }
            Ok(out)
        }
    }
}

pub fn run(args: &AllocateArgs) -> Result<(), Box<dyn Error>> {
    print!("{}", execute(args)?);
    Ok(())
}
