//! Command-line interface for the Scrivener binary.

pub mod args;
pub mod commands;
pub mod output;
