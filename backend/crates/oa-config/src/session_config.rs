use oa_core::SessionEncoding;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Transport form of encoded session credentials
    pub encoding: SessionEncoding,
}
