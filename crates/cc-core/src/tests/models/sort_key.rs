use crate::{SortDirection, SortKey};

use std::str::FromStr;

#[test]
fn test_sort_key_from_str_accepts_aliases() {
    assert_eq!(SortKey::from_str("name").unwrap(), SortKey::Name);
    assert_eq!(SortKey::from_str("phone").unwrap(), SortKey::Phone);
    assert_eq!(SortKey::from_str("phoneNumber").unwrap(), SortKey::Phone);
    assert_eq!(SortKey::from_str("cuts").unwrap(), SortKey::CutsRemaining);
    assert_eq!(
        SortKey::from_str("cutsRemaining").unwrap(),
        SortKey::CutsRemaining
    );
}

#[test]
fn test_sort_key_from_str_invalid() {
    let err = SortKey::from_str("email").unwrap_err();
    assert!(err.to_string().contains("email"));
}

#[test]
fn test_sort_direction_flips() {
    assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
    assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
}
