//! oa - OAuth account CLI
//!
//! # Examples
//!
//! ```bash
//! # Encode session credentials for a persisted user
//! oa credentials encode --id 7 --username alice
//!
//! # Decode a remember-me cookie value
//! oa credentials decode WzcsImFsaWNlIiwiIl0
//!
//! # Show the principal view of an account
//! oa user inspect --remote-id 42 --username alice --locale en --pretty
//! ```

use oa_cli::commands::Commands;
use oa_cli::credentials_commands::CredentialsCommands;
use oa_cli::operations::{self, InspectRequest};
use oa_cli::user_commands::UserCommands;
use oa_cli::{Cli, Result as CliErrorResult, logger};
use oa_config::Config;
use oa_core::Credentials;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliErrorResult<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    // Explicit flag > config file / environment
    let encoding = cli.encoding.unwrap_or(config.session.encoding);

    let value: Value = match cli.command {
        Commands::Credentials { action } => match action {
            CredentialsCommands::Encode {
                id,
                username,
                password,
            } => operations::encode_credentials(
                &Credentials::new(id, username, password),
                encoding,
            )?,
            CredentialsCommands::Decode { blob } => {
                operations::decode_credentials(&blob, encoding)?
            }
        },

        Commands::User { action } => match action {
            UserCommands::Inspect {
                remote_id,
                username,
                token_data,
                locale,
                id,
            } => operations::inspect_user(
                InspectRequest {
                    remote_id,
                    username,
                    token_data,
                    locale,
                    id,
                },
                encoding,
            )?,
        },
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    Ok(output)
}
