use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How an encoded credential blob is carried outside the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionEncoding {
    /// Raw JSON text, suitable for server-side session stores
    Json,
    /// URL-safe base64 without padding, suitable for cookies
    #[default]
    Base64Url,
}

impl SessionEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Base64Url => "base64_url",
        }
    }
}

impl FromStr for SessionEncoding {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "base64_url" | "base64url" => Ok(Self::Base64Url),
            _ => Err(CoreError::InvalidSessionEncoding {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SessionEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
