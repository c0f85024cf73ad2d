use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::User.as_str(), "ROLE_USER");
    assert_eq!(Role::OauthUser.as_str(), "ROLE_OAUTH_USER");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("ROLE_USER").unwrap(), Role::User);
    assert_eq!(Role::from_str("ROLE_OAUTH_USER").unwrap(), Role::OauthUser);
    assert!(matches!(
        Role::from_str("ROLE_ADMIN"),
        Err(CoreError::InvalidRole { .. })
    ));
    assert!(Role::from_str("role_user").is_err());
}

#[test]
fn test_role_serde_uses_role_names() {
    let json = serde_json::to_string(&Role::OAUTH_ACCOUNT).unwrap();
    assert_eq!(json, r#"["ROLE_USER","ROLE_OAUTH_USER"]"#);

    let parsed: Role = serde_json::from_str(r#""ROLE_OAUTH_USER""#).unwrap();
    assert_eq!(parsed, Role::OauthUser);
}
