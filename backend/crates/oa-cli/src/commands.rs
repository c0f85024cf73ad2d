use crate::{credentials_commands::CredentialsCommands, user_commands::UserCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Session credential operations
    Credentials {
        #[command(subcommand)]
        action: CredentialsCommands,
    },

    /// User record operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}
