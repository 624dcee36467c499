//! Command handlers for the ansifade CLI.
//!
//! Each submodule handles one subcommand.

pub mod completions;
pub mod config;
pub mod detect;
pub mod fade;
pub mod interpolate;
