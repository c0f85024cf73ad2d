//! oa-cli library
//!
//! Exposes the argument model and command implementations for the `oa` binary.

pub mod cli;
pub mod commands;
pub mod credentials_commands;
pub mod error;
pub mod logger;
pub mod operations;
pub mod user_commands;


pub use cli::Cli;
pub use error::{CliError, Result};
