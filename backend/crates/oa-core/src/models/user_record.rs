//! User record - an account bound to an external OAuth identity provider.

use crate::credentials::{self, Credentials};
use crate::{CoreError, Principal, Result as CoreErrorResult, Role};

use std::collections::BTreeSet;
use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;

/// A persisted user account.
///
/// The surrogate `id` is assigned once by the persistence layer. Everything
/// else is set from the OAuth login flow and may change on re-authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    id: Option<i64>,
    /// Account id on the OAuth provider (unique)
    remote_id: i64,
    username: String,
    /// Opaque serialized token payload, never parsed here
    token_data: String,
    locale: Option<String>,
}

impl UserRecord {
    pub const TABLE: &'static str = "users";
    pub const COLUMNS: [&'static str; 5] = ["id", "remote_id", "username", "token_data", "locale"];

    /// Create the record for a user completing their first OAuth login.
    pub fn new(remote_id: i64, username: impl Into<String>, token_data: impl Into<String>) -> Self {
        Self {
            id: None,
            remote_id,
            username: username.into(),
            token_data: token_data.into(),
            locale: None,
        }
    }

    /// Rebuild a record from session credentials into a fresh instance.
    #[track_caller]
    pub fn from_serialized(bytes: &[u8]) -> CoreErrorResult<Self> {
        let mut record = Self::default();
        record.deserialize(bytes)?;
        Ok(record)
    }

    #[track_caller]
    pub fn id(&self) -> CoreErrorResult<i64> {
        self.id.ok_or_else(|| CoreError::NotInitialized {
            field: "id",
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Record the id generated by the persistence layer. Ids are never reassigned.
    #[track_caller]
    pub fn assign_id(&mut self, id: i64) -> CoreErrorResult<()> {
        if let Some(existing) = self.id {
            return Err(CoreError::IdAlreadyAssigned {
                id: existing,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.id = Some(id);
        Ok(())
    }

    pub fn remote_id(&self) -> i64 {
        self.remote_id
    }

    pub fn set_remote_id(&mut self, remote_id: i64) -> &mut Self {
        self.remote_id = remote_id;
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> &mut Self {
        self.username = username.into();
        self
    }

    pub fn token_data(&self) -> &str {
        &self.token_data
    }

    pub fn set_token_data(&mut self, token_data: impl Into<String>) -> &mut Self {
        self.token_data = token_data.into();
        self
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// `None` clears the stored locale.
    pub fn set_locale(&mut self, locale: Option<String>) -> &mut Self {
        self.locale = locale;
        self
    }

    /// Identity tuple used by session persistence.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.id, self.username.as_str(), Principal::password(self))
    }

    /// Encode `(id, username, password)` for session persistence.
    ///
    /// `remote_id`, `token_data` and `locale` are not part of the blob.
    #[track_caller]
    pub fn serialize(&self) -> CoreErrorResult<Vec<u8>> {
        credentials::encode(&self.credentials())
    }

    /// Restore `id` and `username` from a blob produced by [`serialize`].
    ///
    /// Any id already on the record is replaced by the blob's id without the
    /// [`assign_id`] check, so this is meant for fresh instances; prefer
    /// [`from_serialized`]. On error the record is left unchanged and should
    /// be discarded.
    ///
    /// [`assign_id`]: UserRecord::assign_id
    /// [`from_serialized`]: UserRecord::from_serialized
    /// [`serialize`]: UserRecord::serialize
    #[track_caller]
    pub fn deserialize(&mut self, bytes: &[u8]) -> CoreErrorResult<()> {
        let decoded = credentials::decode(bytes)?;

        if !decoded.password.is_empty() {
            warn!(
                "Ignoring non-empty password in session credentials for '{}'",
                decoded.username
            );
        }

        self.id = decoded.id;
        self.username = decoded.username;
        Ok(())
    }
}

impl Principal for UserRecord {
    fn username(&self) -> &str {
        &self.username
    }

    fn password(&self) -> &str {
        ""
    }

    fn salt(&self) -> Option<&str> {
        None
    }

    fn roles(&self) -> BTreeSet<Role> {
        BTreeSet::from(Role::OAUTH_ACCOUNT)
    }

    fn erase_credentials(&mut self) {}
}
