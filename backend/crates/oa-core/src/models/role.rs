use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Authorization role granted to a principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Baseline role held by every authenticated account
    #[serde(rename = "ROLE_USER")]
    User,
    /// Account authenticated through the external OAuth provider
    #[serde(rename = "ROLE_OAUTH_USER")]
    OauthUser,
}

impl Role {
    /// Roles granted to every OAuth-backed account, independent of stored state.
    pub const OAUTH_ACCOUNT: [Role; 2] = [Role::User, Role::OauthUser];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "ROLE_USER",
            Self::OauthUser => "ROLE_OAUTH_USER",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "ROLE_USER" => Ok(Self::User),
            "ROLE_OAUTH_USER" => Ok(Self::OauthUser),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
