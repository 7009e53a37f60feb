//! aqlf - Command-line interface for compiling JSON filter specs into AQL.
//!
//! Reads a filter spec from a file or stdin and prints the compiled
//! fragments, a full statement, or JSON.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
