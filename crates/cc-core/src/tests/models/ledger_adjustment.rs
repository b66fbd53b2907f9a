use crate::{LedgerAdjustment, LedgerBalance};

#[test]
fn test_default_is_deduct_one_with_empty_body() {
    let adjustment = LedgerAdjustment::default();

    assert_eq!(adjustment, LedgerAdjustment::DeductOne);
    assert_eq!(adjustment.delta(), 1);
    assert_eq!(serde_json::to_string(&adjustment.to_request()).unwrap(), "{}");
}

#[test]
fn test_credit_is_sent_as_negative_deduction() {
    let body = serde_json::to_value(LedgerAdjustment::Credit(5).to_request()).unwrap();

    assert_eq!(body["cuts"], -5);
}

#[test]
fn test_deduct_is_sent_as_positive_deduction() {
    let body = serde_json::to_value(LedgerAdjustment::Deduct(2).to_request()).unwrap();

    assert_eq!(body["cuts"], 2);
}

#[test]
fn test_from_delta_maps_sign_to_direction() {
    assert_eq!(
        LedgerAdjustment::from_delta(1).unwrap(),
        LedgerAdjustment::Deduct(1)
    );
    assert_eq!(
        LedgerAdjustment::from_delta(-4).unwrap(),
        LedgerAdjustment::Credit(4)
    );
    assert_eq!(
        LedgerAdjustment::from_delta(0).unwrap(),
        LedgerAdjustment::Deduct(0)
    );
}

#[test]
fn test_from_delta_out_of_range_is_rejected() {
    assert!(LedgerAdjustment::from_delta(i64::MIN).is_err());
    assert!(LedgerAdjustment::from_delta(i64::from(u32::MAX) + 1).is_err());
}

#[test]
fn test_expected_balance_follows_sign_convention() {
    assert_eq!(LedgerAdjustment::DeductOne.expected_balance(3), 2);
    assert_eq!(LedgerAdjustment::Credit(4).expected_balance(3), 7);
    // No floor is applied client-side
    assert_eq!(LedgerAdjustment::Deduct(2).expected_balance(1), -1);
}

#[test]
fn test_balance_response_parses() {
    let balance: LedgerBalance = serde_json::from_str(r#"{"cutsRemaining":2}"#).unwrap();
    assert_eq!(balance.cuts_remaining, 2);
}
