// fixtures.rs: commonly used tag contents and payloads

use pn532_ntag::card::CardRecord;
use pn532_ntag::types::Uid;

/// 7-byte UID of the sample tag
pub const UID_BYTES: [u8; 7] = [0x04, 0xA1, 0xB2, 0xC3, 0xD4, 0xE5, 0xF6];

pub fn uid() -> Uid {
    Uid::new(&UID_BYTES).unwrap()
}

pub fn other_uid() -> Uid {
    Uid::new(&[0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66]).unwrap()
}

/// GetFirmwareVersion body of a PN532 v1.6
pub fn firmware_body() -> Vec<u8> {
    vec![0x32, 0x01, 0x06, 0x07]
}

pub fn sample_record() -> CardRecord {
    CardRecord {
        attendee_id: 1234,
        convention_id: 7,
        issuance: 3,
        timestamp: 1_717_171_717,
        expiration: 1_750_000_000,
        signature: (0u8..64).collect(),
    }
}
