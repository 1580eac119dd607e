//! Encore - Interactive Shell
//!
//! Line-oriented front-end for [`encore_playback`]. Each input line is one
//! command; the shell calls the matching engine operation and prints the
//! outcome. Configuration comes from `encore.toml` and `ENCORE_*` variables.

pub mod commands;
pub mod config;
pub mod error;
pub mod shell;

pub use config::ShellConfig;
pub use error::{CliError, Result};
pub use shell::Shell;
