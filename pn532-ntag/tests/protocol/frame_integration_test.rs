use pn532_ntag::Error;
use pn532_ntag::constants::{PN532_ACK, PN532_NACK};
use pn532_ntag::protocol::{check_ack, Direction, Frame};

#[test]
fn firmware_request_on_the_wire() {
    let raw = Frame::encode_command(0x02, &[]).unwrap();
    assert_eq!(raw, vec![0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD4, 0x02, 0x2A, 0x00]);
    let frame = Frame::decode(&raw).unwrap();
    assert_eq!(frame.direction, Direction::HostToChip);
    assert_eq!(frame.payload, vec![0x02]);
}

#[test]
fn ack_sentinels() {
    check_ack(&PN532_ACK).unwrap();
    assert!(matches!(check_ack(&PN532_NACK), Err(Error::Nack)));
    assert!(matches!(
        check_ack(&[0x00, 0x00, 0xFF, 0x00, 0xFF, 0x01]),
        Err(Error::AckMismatch(_))
    ));
    // ACK/NACK are not information frames
    assert!(Frame::decode(&PN532_ACK).is_err());
}

#[test]
fn corrupted_data_checksum() {
    let mut raw = Frame::encode(Direction::ChipToHost, &[0x03, 0x32, 0x01, 0x06, 0x07]).unwrap();
    let dcs = raw.len() - 2;
    raw[dcs] ^= 0x01;
    assert!(matches!(
        Frame::decode(&raw),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn bad_length_checksum() {
    let raw = [0x00, 0x00, 0xFF, 0x02, 0xFD, 0xD5, 0x03, 0x28, 0x00];
    assert!(matches!(
        Frame::decode(&raw),
        Err(Error::ChecksumMismatch {
            expected: 0xFE,
            actual: 0xFD
        })
    ));
}

#[test]
fn application_error_frame() {
    let raw = [0x00, 0x00, 0xFF, 0x01, 0xFF, 0x7F, 0x81, 0x00];
    let err = Frame::decode(&raw).unwrap_err();
    assert!(matches!(err, Error::ApplicationError));
    assert!(err.kind().requires_reset());
}

#[test]
fn truncated_frame_skips_the_data_checksum() {
    let full = Frame::encode(Direction::ChipToHost, &[0x41, 0x00, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let cut = &full[..10];
    let decoded = Frame::decode_lenient(cut).unwrap();
    assert!(decoded.truncated);
    assert_eq!(decoded.frame.payload, vec![0x41, 0x00, 1, 2]);
    assert!(matches!(Frame::decode(cut), Err(Error::InvalidLength { .. })));
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut raw = Frame::encode(Direction::ChipToHost, &[0x15]).unwrap();
    raw.extend_from_slice(&[0x00; 8]);
    let frame = Frame::decode(&raw).unwrap();
    assert_eq!(frame.payload, vec![0x15]);
}

#[test]
fn captured_firmware_response() {
    // GetFirmwareVersion answer of a PN532 v1.6, as seen on the UART
    let raw = hex::decode("0000ff06fad50332010607e800").unwrap();
    let frame = Frame::decode(&raw).unwrap();
    assert_eq!(frame.direction, Direction::ChipToHost);
    assert_eq!(frame.payload, vec![0x03, 0x32, 0x01, 0x06, 0x07]);
}
