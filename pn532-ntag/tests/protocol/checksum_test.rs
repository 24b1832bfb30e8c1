use pn532_ntag::protocol::checksum::{dcs, lcs, length_ok, sum};
use pn532_ntag::protocol::Frame;
use proptest::prelude::*;

proptest! {
    #[test]
    fn command_frames_validate(opcode in any::<u8>(), params in proptest::collection::vec(any::<u8>(), 0..=63)) {
        let raw = Frame::encode_command(opcode, &params).unwrap();
        let len = raw[3];
        prop_assert!(length_ok(len, raw[4]));
        prop_assert_eq!(len as usize, params.len() + 2);
        let data_end = 5 + len as usize;
        prop_assert_eq!(sum(&raw[5..=data_end]), 0);

        let frame = Frame::decode(&raw).unwrap();
        prop_assert_eq!(frame.payload[0], opcode);
        prop_assert_eq!(&frame.payload[1..], &params[..]);
    }

    #[test]
    fn lcs_complements(len in any::<u8>()) {
        prop_assert_eq!(len.wrapping_add(lcs(len)), 0);
    }

    #[test]
    fn dcs_complements(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(sum(&data).wrapping_add(dcs(&data)), 0);
    }

    #[test]
    fn decode_never_panics(raw in proptest::collection::vec(any::<u8>(), 0..80)) {
        let _ = Frame::decode_lenient(&raw);
    }
}
