#[path = "../common/mod.rs"]
mod common;

use std::sync::{Arc, Mutex};

use pn532_ntag::constants::PN532_ACK;
use pn532_ntag::device::DeviceBuilder;
use pn532_ntag::transport::mock::chip_frame;
use pn532_ntag::transport::{I2cTransport, MockI2cBus, TransportKind};
use pn532_ntag::utils::ManualClock;

/// Status poll, then the message, for the ACK and the response of one
/// transaction.
fn queue_transaction(bus: &MockI2cBus, code: u8, data: &[u8]) {
    bus.push_read(vec![0x01]);
    bus.push_ready_message(&PN532_ACK);
    bus.push_read(vec![0x01]);
    bus.push_ready_message(&chip_frame(code, data).unwrap());
}

#[test]
fn firmware_version_over_shared_bus() {
    let bus = MockI2cBus::new();
    queue_transaction(&bus, 0x15, &[]);
    queue_transaction(&bus, 0x03, &common::fixtures::firmware_body());

    let clock = ManualClock::shared();
    let shared = Arc::new(Mutex::new(bus.clone()));
    let transport = I2cTransport::new(shared).with_clock(clock.clone());
    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .with_clock(clock)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();
    assert_eq!(dev.transport_kind(), TransportKind::I2c);
    assert_eq!(dev.firmware_version().unwrap().ic, 0x32);

    let written = bus.written();
    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|(addr, _)| *addr == 0x24));
    assert_eq!(&written[0].1[5..10], &[0xD4, 0x14, 0x01, 0x00, 0x01]);
}

#[test]
fn busy_chip_is_polled_until_ready() {
    let bus = MockI2cBus::new();
    bus.push_read(vec![0x00]);
    bus.push_read(vec![0x00]);
    queue_transaction(&bus, 0x15, &[]);

    let clock = ManualClock::shared();
    let transport = I2cTransport::new(bus.clone()).with_clock(clock.clone());
    DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .with_clock(clock)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();
    assert_eq!(bus.read_calls(), 6);
}
