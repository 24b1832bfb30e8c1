#[path = "../common/mod.rs"]
mod common;

use pn532_ntag::Error;
use pn532_ntag::constants::PN532_ACK;
use pn532_ntag::device::DeviceBuilder;
use pn532_ntag::transport::hsu::SET_BAUD_RATE_RESPONSE;
use pn532_ntag::transport::{HsuConfig, HsuTransport, MockSerialLink, TransportKind};
use pn532_ntag::utils::ManualClock;

fn builder(link: &MockSerialLink, bps: u32) -> DeviceBuilder {
    let clock = ManualClock::shared();
    let transport = HsuTransport::new(link.clone(), HsuConfig::with_baud(bps)).with_clock(clock.clone());
    DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .with_clock(clock)
}

fn handshake() -> Vec<u8> {
    let mut bytes = PN532_ACK.to_vec();
    bytes.extend_from_slice(&SET_BAUD_RATE_RESPONSE);
    bytes
}

#[test]
fn bring_up_at_default_rate() {
    let link = MockSerialLink::new(115200);
    link.push_command_reply(0x03, &common::fixtures::firmware_body()).unwrap();
    link.push_command_reply(0x15, &[]).unwrap();
    link.push_command_reply(0x03, &common::fixtures::firmware_body()).unwrap();

    let mut dev = builder(&link, 115200)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();
    assert_eq!(dev.transport_kind(), TransportKind::Hsu);
    let fw = dev.firmware_version().unwrap();
    assert_eq!((fw.ic, fw.version, fw.revision), (0x32, 1, 6));
    assert_eq!(link.baud_history(), vec![115200]);

    // the first frames are preceded by the wake-up preamble
    let written = link.written();
    assert_eq!(written[0][0], 0x55);
}

#[test]
fn negotiated_rate_carries_later_commands() {
    let link = MockSerialLink::new(115200);
    link.push_command_reply(0x03, &common::fixtures::firmware_body()).unwrap();
    link.push_command_reply(0x15, &[]).unwrap();
    link.push_switching_reply(handshake(), 921600);
    link.push_command_reply(0x03, &common::fixtures::firmware_body()).unwrap();

    let mut dev = builder(&link, 921600)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();
    assert_eq!(link.chip_baud(), 921600);
    assert_eq!(link.baud_history(), vec![115200, 921600]);
    assert!(dev.firmware_version().is_ok());
}

#[test]
fn chip_already_at_wanted_rate() {
    // Nothing answers at 115200; the probe at the wanted rate does.
    let link = MockSerialLink::new(460800);
    link.push_command_reply(0x03, &common::fixtures::firmware_body()).unwrap();
    link.push_command_reply(0x15, &[]).unwrap();

    builder(&link, 460800)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();
    assert_eq!(link.baud_history(), vec![115200, 460800]);
}

#[test]
fn handshake_mismatch_fails_bring_up() {
    let link = MockSerialLink::new(115200);
    link.push_command_reply(0x03, &common::fixtures::firmware_body()).unwrap();
    link.push_command_reply(0x15, &[]).unwrap();
    let mut wrong = PN532_ACK.to_vec();
    wrong.extend_from_slice(&[0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD5, 0x13, 0x18, 0x00]);
    link.push_switching_reply(wrong, 921600);

    let res = builder(&link, 921600)
        .build_uninitialized()
        .unwrap()
        .initialize();
    assert!(matches!(res, Err(Error::HandshakeMismatch(_))));
    // no host ACK was sent, so neither side moved
    assert_eq!(link.chip_baud(), 115200);
    assert_eq!(link.baud_history(), vec![115200]);
}

#[test]
fn silent_chip_fails_bring_up() {
    let link = MockSerialLink::new(115200);
    let res = builder(&link, 115200)
        .with_init_attempts(2)
        .build_uninitialized()
        .unwrap()
        .initialize();
    assert!(matches!(res, Err(Error::Timeout)));
}
