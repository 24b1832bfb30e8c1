use pn532_ntag::card::{CardRecord, TagId, TagSet};
use proptest::prelude::*;

fn record() -> impl Strategy<Value = CardRecord> {
    (
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        any::<u64>(),
        any::<u64>(),
        prop::collection::vec(any::<u8>(), 1..=255),
    )
        .prop_map(
            |(attendee_id, convention_id, issuance, timestamp, expiration, signature)| CardRecord {
                attendee_id,
                convention_id,
                issuance,
                timestamp,
                expiration,
                signature,
            },
        )
}

proptest! {
    #[test]
    fn records_survive_the_stream(r in record()) {
        let bytes = r.to_tags().encode().unwrap();
        prop_assert_eq!(bytes.last(), Some(&0x00));
        let back = CardRecord::from_tags(&TagSet::decode(&bytes).unwrap());
        prop_assert_eq!(back, r);
    }

    #[test]
    fn zero_expiration_leaves_no_record(r in record()) {
        let r = CardRecord { expiration: 0, ..r };
        let tags = TagSet::decode(&r.to_tags().encode().unwrap()).unwrap();
        prop_assert!(tags.get(TagId::Expiration).is_none());
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = TagSet::decode(&bytes);
    }
}

#[test]
fn largest_signature_fits_the_stream_cap() {
    let r = CardRecord {
        signature: vec![0x5A; 255],
        ..CardRecord::default()
    };
    let bytes = r.to_tags().encode().unwrap();
    assert_eq!(bytes.len(), 2 + 255 + 1);
}
