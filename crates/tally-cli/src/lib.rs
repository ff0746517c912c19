#![doc = "Building blocks of the `tally` binary: subcommands, job files and log setup."]

pub mod commands;
pub mod job;
pub mod logging;
