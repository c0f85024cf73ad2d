//! Command implementations, returning the JSON printed by the binary.

use crate::error::Result as CliErrorResult;

use oa_core::credentials::{self, Credentials};
use oa_core::{Principal, SessionEncoding, UserRecord};

use log::{debug, info};
use serde_json::{Value, json};

pub fn encode_credentials(
    credentials: &Credentials,
    encoding: SessionEncoding,
) -> CliErrorResult<Value> {
    let bytes = credentials::encode(credentials)?;
    let session = credentials::to_transport(&bytes, encoding)?;

    debug!(
        "Encoded credentials for '{}' ({} bytes, {})",
        credentials.username,
        bytes.len(),
        encoding
    );

    Ok(json!({
        "encoding": encoding,
        "session": session,
    }))
}

pub fn decode_credentials(blob: &str, encoding: SessionEncoding) -> CliErrorResult<Value> {
    let bytes = credentials::from_transport(blob, encoding)?;
    let credentials = credentials::decode(&bytes)?;

    debug!("Decoded credentials for '{}'", credentials.username);

    Ok(serde_json::to_value(credentials)?)
}

pub struct InspectRequest {
    pub remote_id: i64,
    pub username: String,
    pub token_data: String,
    pub locale: Option<String>,
    pub id: Option<i64>,
}

pub fn inspect_user(request: InspectRequest, encoding: SessionEncoding) -> CliErrorResult<Value> {
    let mut record = UserRecord::new(request.remote_id, request.username, request.token_data);
    record.set_locale(request.locale);
    if let Some(id) = request.id {
        record.assign_id(id)?;
    }

    let session = credentials::to_transport(&record.serialize()?, encoding)?;

    info!(
        "Inspected user '{}' (remote id {})",
        record.username(),
        record.remote_id()
    );

    Ok(json!({
        "id": record.id().ok(),
        "remote_id": record.remote_id(),
        "username": record.username(),
        "locale": record.locale(),
        "password": record.password(),
        "salt": record.salt(),
        "roles": record.roles(),
        "session": session,
    }))
}
