use crate::{CoreError, Principal, UserRecord};

fn alice() -> UserRecord {
    UserRecord::new(42, "alice", r#"{"access_token":"abc","refresh_token":"def"}"#)
}

#[test]
fn test_user_record_new() {
    let record = alice();

    assert_eq!(record.remote_id(), 42);
    assert_eq!(record.username(), "alice");
    assert_eq!(
        record.token_data(),
        r#"{"access_token":"abc","refresh_token":"def"}"#
    );
    assert_eq!(record.locale(), None);
    assert!(matches!(
        record.id(),
        Err(CoreError::NotInitialized { field: "id", .. })
    ));
}

#[test]
fn test_user_record_default_is_empty() {
    let record = UserRecord::default();

    assert!(record.id().is_err());
    assert_eq!(record.remote_id(), 0);
    assert_eq!(record.username(), "");
    assert_eq!(record.token_data(), "");
    assert_eq!(record.locale(), None);
}

#[test]
fn given_unassigned_id_when_assigned_then_id_is_readable() {
    let mut record = alice();

    record.assign_id(7).unwrap();

    assert_eq!(record.id().unwrap(), 7);
}

#[test]
fn given_assigned_id_when_assigned_again_then_rejected_and_unchanged() {
    let mut record = alice();
    record.assign_id(7).unwrap();

    let result = record.assign_id(8);

    assert!(matches!(
        result,
        Err(CoreError::IdAlreadyAssigned { id: 7, .. })
    ));
    assert_eq!(record.id().unwrap(), 7);
}

#[test]
fn test_setters_chain() {
    let mut record = alice();

    record
        .set_remote_id(99)
        .set_username("alice2")
        .set_token_data("refreshed")
        .set_locale(Some("fr".to_string()));

    assert_eq!(record.remote_id(), 99);
    assert_eq!(record.username(), "alice2");
    assert_eq!(record.token_data(), "refreshed");
    assert_eq!(record.locale(), Some("fr"));
}

#[test]
fn given_locale_set_when_cleared_then_absent() {
    let mut record = alice();
    record.set_locale(Some("en".to_string()));
    assert_eq!(record.locale(), Some("en"));

    record.set_locale(None);

    assert_eq!(record.locale(), None);
}

#[test]
fn given_setter_calls_when_password_read_then_always_empty() {
    let mut record = alice();

    record.set_username("bob").set_token_data("secret-token");

    assert_eq!(record.password(), "");
    assert_eq!(record.credentials().password, "");
}

#[test]
fn test_column_contract() {
    assert_eq!(UserRecord::TABLE, "users");
    assert_eq!(
        UserRecord::COLUMNS,
        ["id", "remote_id", "username", "token_data", "locale"]
    );
}

#[test]
fn given_persisted_record_when_serialized_then_tuple_layout() {
    let mut record = alice();
    record.assign_id(7).unwrap();

    let bytes = record.serialize().unwrap();

    assert_eq!(bytes, br#"[7,"alice",""]"#.to_vec());
}

#[test]
fn given_unpersisted_record_when_serialized_then_id_is_null() {
    let bytes = alice().serialize().unwrap();

    assert_eq!(bytes, br#"[null,"alice",""]"#.to_vec());
}

#[test]
fn given_serialized_record_when_deserialized_into_fresh_instance_then_identity_restored() {
    // Given
    let original = alice();
    let bytes = original.serialize().unwrap();

    // When
    let mut restored = UserRecord::default();
    restored.deserialize(&bytes).unwrap();

    // Then
    assert_eq!(restored.username(), "alice");
    assert_eq!(restored.password(), "");
    assert_eq!(restored.remote_id(), 0);
    assert_eq!(restored.token_data(), "");
    assert_eq!(restored.locale(), None);
    assert_eq!(restored.credentials(), original.credentials());
}

#[test]
fn given_persisted_record_when_restored_then_id_restored() {
    let mut original = alice();
    original.assign_id(1234).unwrap();

    let restored = UserRecord::from_serialized(&original.serialize().unwrap()).unwrap();

    assert_eq!(restored.id().unwrap(), 1234);
    assert_eq!(restored.username(), "alice");
}

#[test]
fn given_malformed_blob_when_deserialized_then_decode_error_and_record_untouched() {
    let mut record = alice();
    record.assign_id(7).unwrap();
    let before = record.clone();

    let result = record.deserialize(b"a:3:{i:0;i:7;}");

    assert!(matches!(result, Err(CoreError::Decode { .. })));
    assert_eq!(record, before);
}

#[test]
fn given_blob_with_password_when_deserialized_then_password_stays_empty() {
    let mut record = UserRecord::default();

    record.deserialize(br#"[5,"carol","hunter2"]"#).unwrap();

    assert_eq!(record.id().unwrap(), 5);
    assert_eq!(record.username(), "carol");
    assert_eq!(record.password(), "");
}

#[test]
fn given_record_with_id_when_deserialized_then_blob_id_replaces_it() {
    let mut record = alice();
    record.assign_id(7).unwrap();

    record.deserialize(br#"[9,"alice",""]"#).unwrap();

    assert_eq!(record.id().unwrap(), 9);
    assert!(matches!(
        record.assign_id(10),
        Err(CoreError::IdAlreadyAssigned { id: 9, .. })
    ));
}
