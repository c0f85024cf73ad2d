use crate::commands::Commands;

use oa_core::SessionEncoding;

use clap::Parser;

#[derive(Parser)]
#[command(name = "oa")]
#[command(about = "Inspect OAuth user accounts and their session credentials")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Session transport encoding: json or base64url (defaults to config)
    #[arg(long, global = true)]
    pub encoding: Option<SessionEncoding>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
