//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::{
    PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_IN_LIST_PASSIVE_TARGET, PN532_CMD_SAM_CONFIGURATION,
};
use crate::device::{Device, DeviceBuilder, Initialized};
use crate::transport::MockTransport;
use crate::utils::ManualClock;
use crate::Result;

/// Queue the SAMConfiguration reply the init sequence consumes.
#[doc(hidden)]
pub fn seed_init(mock: &MockTransport) -> Result<()> {
    mock.push_reply(PN532_CMD_SAM_CONFIGURATION + 1, &[])
}

/// Create and initialize a Device<Initialized> backed by a clone of `mock`
/// and a manual clock, so no test ever sleeps.
#[doc(hidden)]
pub fn initialized_mock_device(mock: &MockTransport) -> Result<Device<Initialized>> {
    seed_init(mock)?;
    DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_clock(ManualClock::shared())
        .build_uninitialized()?
        .initialize()
}

/// Pages 0..=3 of an NTAG21x whose capability container announces
/// `capacity` (byte 14).
#[doc(hidden)]
pub fn tag_header(capacity: u8) -> [u8; 16] {
    [
        0x04, 0xA1, 0xB2, 0x9F, // UID0-2, BCC0
        0xC3, 0xD4, 0xE5, 0xF6, // UID3-6
        0x04, 0x48, 0x00, 0x00, // BCC1, internal, lock bytes
        0xE1, 0x10, capacity, 0x00, // capability container
    ]
}

/// Queue an InListPassiveTarget reply listing one ISO14443A target, number 1.
#[doc(hidden)]
pub fn push_target(mock: &MockTransport, uid: &[u8]) -> Result<()> {
    let mut body = vec![0x01, 0x01, 0x00, 0x44, 0x00, uid.len() as u8];
    body.extend_from_slice(uid);
    mock.push_reply(PN532_CMD_IN_LIST_PASSIVE_TARGET + 1, &body)
}

/// Queue a successful READ: status 0 and 16 data bytes, `data` zero-padded.
#[doc(hidden)]
pub fn push_page_read(mock: &MockTransport, data: &[u8]) -> Result<()> {
    let mut body = vec![0x00; 17];
    let n = data.len().min(16);
    body[1..1 + n].copy_from_slice(&data[..n]);
    mock.push_reply(PN532_CMD_IN_DATA_EXCHANGE + 1, &body)
}

/// Queue a reply to `code` that carries only a status byte.
#[doc(hidden)]
pub fn push_status(mock: &MockTransport, code: u8, status: u8) -> Result<()> {
    mock.push_reply(code, &[status])
}
