use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Build a user record and show what the authentication layer sees
    Inspect {
        /// Account ID on the OAuth provider
        #[arg(long, allow_negative_numbers = true)]
        remote_id: i64,

        /// Username
        #[arg(long)]
        username: String,

        /// Opaque OAuth token payload
        #[arg(long, default_value = "")]
        token_data: String,

        /// Preferred locale
        #[arg(long)]
        locale: Option<String>,

        /// Persisted user ID, if already assigned
        #[arg(long, allow_negative_numbers = true)]
        id: Option<i64>,
    },
}
