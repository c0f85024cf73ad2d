use crate::SessionEncoding;

use std::str::FromStr;

#[test]
fn test_session_encoding_from_str() {
    assert_eq!(
        SessionEncoding::from_str("json").unwrap(),
        SessionEncoding::Json
    );
    assert_eq!(
        SessionEncoding::from_str("base64_url").unwrap(),
        SessionEncoding::Base64Url
    );
    assert_eq!(
        SessionEncoding::from_str("Base64URL").unwrap(),
        SessionEncoding::Base64Url
    );
    assert!(SessionEncoding::from_str("hex").is_err());
}

#[test]
fn test_session_encoding_default() {
    assert_eq!(SessionEncoding::default(), SessionEncoding::Base64Url);
    assert_eq!(SessionEncoding::default().to_string(), "base64_url");
}
