use clap::Subcommand;

#[derive(Subcommand)]
pub enum CredentialsCommands {
    /// Encode an (id, username, password) tuple into a session blob
    Encode {
        /// User ID (omit for an account not yet persisted)
        #[arg(long, allow_negative_numbers = true)]
        id: Option<i64>,

        /// Username
        #[arg(long)]
        username: String,

        /// Password slot (empty for OAuth accounts)
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Decode a session blob back into its credential tuple
    Decode {
        /// Encoded session blob
        #[arg(allow_hyphen_values = true)]
        blob: String,
    },
}
