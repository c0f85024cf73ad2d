pub mod credentials;
pub mod error;
pub mod models;
pub mod principal;

pub use credentials::Credentials;
pub use error::{CoreError, Result};
pub use models::role::Role;
pub use models::session_encoding::SessionEncoding;
pub use models::user_record::UserRecord;
pub use principal::Principal;

#[cfg(test)]
mod tests;
