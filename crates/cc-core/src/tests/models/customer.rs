use crate::Customer;
use crate::tests::customer;

#[test]
fn test_deserialize_backend_document() {
    let json = r#"{"_id":"65f1c0ffee","name":"Ada","phoneNumber":"+4512345678","cutsRemaining":3,"__v":0}"#;
    let parsed: Customer = serde_json::from_str(json).unwrap();

    assert_eq!(parsed.id, "65f1c0ffee");
    assert_eq!(parsed.name, "Ada");
    assert_eq!(parsed.phone_number, "+4512345678");
    assert_eq!(parsed.cuts_remaining, 3);
}

#[test]
fn test_deserialize_accepts_plain_id() {
    let json = r#"{"id":"abc123","name":"Bo","phoneNumber":"+4500000000","cutsRemaining":1}"#;
    let parsed: Customer = serde_json::from_str(json).unwrap();

    assert_eq!(parsed.id, "abc123");
}

#[test]
fn test_missing_balance_defaults_to_zero() {
    let json = r#"{"_id":"abc123","name":"Bo","phoneNumber":"+4500000000"}"#;
    let parsed: Customer = serde_json::from_str(json).unwrap();

    assert_eq!(parsed.cuts_remaining, 0);
}

#[test]
fn test_serialize_uses_wire_names() {
    let json = serde_json::to_value(customer("abc123", "Ada", "+45", 2)).unwrap();

    assert_eq!(json["_id"], "abc123");
    assert_eq!(json["phoneNumber"], "+45");
    assert_eq!(json["cutsRemaining"], 2);
}

#[test]
fn test_matches_lowercase_name_or_phone() {
    let ada = customer("c01", "Ada Lovelace", "+4512345678", 3);

    assert!(ada.matches_lowercase("love"));
    assert!(ada.matches_lowercase("4512"));
    assert!(ada.matches_lowercase(""));
    assert!(!ada.matches_lowercase("bob"));
}
