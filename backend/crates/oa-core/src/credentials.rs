//! Session credential codec.
//!
//! Session persistence (remember-me cookies, server-side session stores)
//! keeps only the minimal identity tuple `(id, username, password)` rather
//! than the whole record. On the wire the tuple is a positional JSON array,
//! e.g. `[7,"alice",""]`; an id not yet assigned is written as `null`.

use crate::{CoreError, Result as CoreErrorResult, SessionEncoding};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use log::debug;
use serde::{Deserialize, Serialize};

/// Positional layout written to and read from the wire.
type WireTuple = (Option<i64>, String, String);

/// Identity tuple carried between requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub id: Option<i64>,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(id: Option<i64>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }
}

impl From<WireTuple> for Credentials {
    fn from((id, username, password): WireTuple) -> Self {
        Self {
            id,
            username,
            password,
        }
    }
}

/// Encode credentials as a positional JSON array.
#[track_caller]
pub fn encode(credentials: &Credentials) -> CoreErrorResult<Vec<u8>> {
    let wire = (
        credentials.id,
        credentials.username.as_str(),
        credentials.password.as_str(),
    );

    serde_json::to_vec(&wire).map_err(|e| CoreError::Encode {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Decode credentials previously produced by [`encode`].
///
/// Anything other than a three-element array of
/// (integer or null, string, string) is rejected.
#[track_caller]
pub fn decode(bytes: &[u8]) -> CoreErrorResult<Credentials> {
    serde_json::from_slice::<WireTuple>(bytes)
        .map(Credentials::from)
        .map_err(|e| {
            debug!("Rejected credential blob ({} bytes): {}", bytes.len(), e);
            CoreError::Decode {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
}

/// Wrap encoded credentials for transport.
#[track_caller]
pub fn to_transport(bytes: &[u8], encoding: SessionEncoding) -> CoreErrorResult<String> {
    match encoding {
        SessionEncoding::Json => String::from_utf8(bytes.to_vec()).map_err(|e| CoreError::Encode {
            message: format!("credential blob is not UTF-8: {e}"),
            location: ErrorLocation::from(Location::caller()),
        }),
        SessionEncoding::Base64Url => Ok(URL_SAFE_NO_PAD.encode(bytes)),
    }
}

/// Reverse [`to_transport`], yielding bytes suitable for [`decode`].
#[track_caller]
pub fn from_transport(value: &str, encoding: SessionEncoding) -> CoreErrorResult<Vec<u8>> {
    match encoding {
        SessionEncoding::Json => Ok(value.as_bytes().to_vec()),
        SessionEncoding::Base64Url => {
            URL_SAFE_NO_PAD
                .decode(value.trim())
                .map_err(|e| CoreError::Decode {
                    message: format!("invalid base64: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                })
        }
    }
}
