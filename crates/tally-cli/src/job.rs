//! Allocation job files.
//!
//! A job names a total, its currency and the tree to allocate it over:
//!
//! ```yaml
//! total: 1000
//! currency: USD
//! output:
//!   format: text
//!   digest: true
//! tree:
//!   name: root
//!   children:
//!     - { name: a, weight: 2 }
//!     - { name: b }
//! ```
//!
//! Files ending in `.yaml` or `.yml` are read as YAML, `.json` as JSON.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tally_alloc::AllocationNode;
use tally_core::{ErrorInfo, TallyError};

/// How a command prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Output section of a job file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format; overridden by `--format`.
    #[serde(default)]
    pub format: OutputFormat,
    /// Append the allocation digest to the report.
    #[serde(default = "default_digest")]
    pub digest: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            digest: default_digest(),
        }
    }
}

/// A tree allocation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllocationJob {
    /// Amount in minor units given to the root.
    pub total: i64,
    /// Currency code of `total`.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Report options.
    #[serde(default)]
    pub output: OutputConfig,
    /// Hierarchy to allocate over.
    pub tree: AllocationNode,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_digest() -> bool {
    true
}

/// Reads and decodes a job file, picking the decoder from the extension.
pub fn load_job(path: &Path) -> Result<AllocationJob, TallyError> {
    let text = fs::read_to_string(path).map_err(|err| {
        serde_error("job-read", "failed to read job file", path, err.to_string())
    })?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("yaml" | "yml") => serde_yaml::from_str(&text).map_err(|err| {
            serde_error("job-decode", "invalid YAML job file", path, err.to_string())
        }),
        Some("json") => serde_json::from_str(&text).map_err(|err| {
            serde_error("job-decode", "invalid JSON job file", path, err.to_string())
        }),
        _ => Err(TallyError::Serde(
            ErrorInfo::new("job-format", "unsupported job file extension")
                .with_context("path", path.display())
                .with_hint("use a .yaml, .yml or .json file"),
        )),
    }
}

fn serde_error(code: &str, message: &str, path: &Path, cause: String) -> TallyError {
    TallyError::Serde(
        ErrorInfo::new(code, message)
            .with_context("path", path.display())
            .with_context("cause", cause),
    )
}
