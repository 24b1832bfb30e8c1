#[path = "../common/mod.rs"]
mod common;

use pn532_ntag::card::CardRecord;

#[test]
fn json_round_trip() {
    let record = common::fixtures::sample_record();
    let text = serde_json::to_string(&record).unwrap();
    assert!(text.contains(r#""attendeeId":1234"#));
    assert!(text.contains(r#""timestamp":"1717171717""#));
    let back: CardRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(back, record);
}

#[test]
fn missing_fields_default_to_zero() {
    let record: CardRecord = serde_json::from_str(r#"{"conventionId":9}"#).unwrap();
    assert_eq!(record.convention_id, 9);
    assert_eq!(record.expiration, 0);
    assert!(record.signature.is_empty());
}

#[test]
fn bad_signature_is_rejected() {
    assert!(serde_json::from_str::<CardRecord>(r#"{"signature":"not base64!"}"#).is_err());
}
