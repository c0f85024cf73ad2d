use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Field not initialized: {field} {location}")]
    NotInitialized {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("User id already assigned: {id} {location}")]
    IdAlreadyAssigned { id: i64, location: ErrorLocation },

    #[error("Credential decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential encode error: {message} {location}")]
    Encode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid session encoding: {value} {location}")]
    InvalidSessionEncoding {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
