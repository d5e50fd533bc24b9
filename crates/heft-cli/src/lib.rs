//! Heft CLI.
//!
//! Command-line front end for the [`heft`] benchmark library.
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `heft run` and `heft list`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - terminal formatting and status messages

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
