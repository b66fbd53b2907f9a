use crate::{Credentials, NewCustomer};

#[test]
fn test_new_customer_serializes_camel_case() {
    let body = serde_json::to_value(NewCustomer::new("Ada", "+4512345678")).unwrap();

    assert_eq!(body["name"], "Ada");
    assert_eq!(body["phoneNumber"], "+4512345678");
}

#[test]
fn test_new_customer_requires_name_and_phone() {
    assert!(NewCustomer::new("Ada", "+4512345678").validate().is_ok());
    assert!(NewCustomer::new("  ", "+4512345678").validate().is_err());
    assert!(NewCustomer::new("Ada", "").validate().is_err());
}

#[test]
fn test_credentials_debug_redacts_password() {
    let credentials = Credentials::new("admin", "hunter2");
    let debug = format!("{credentials:?}");

    assert!(debug.contains("admin"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn test_credentials_require_both_fields() {
    assert!(Credentials::new("admin", "secret").validate().is_ok());
    assert!(Credentials::new("", "secret").validate().is_err());
    assert!(Credentials::new("admin", "").validate().is_err());
}
