#![cfg(feature = "serial")]

//! Shared setup for tests against a real PN532 in HSU mode.
//!
//! The port comes from `PN532_PORT` (e.g. `/dev/ttyUSB0`); `PN532_BAUD`
//! optionally asks for a faster link. Without `PN532_PORT` the helpers
//! return `Ok(None)` so the tests pass on machines with no reader.

use pn532_ntag::device::{Device, DeviceBuilder, Initialized};
use pn532_ntag::transport::{HsuConfig, HsuTransport, NativeSerialLink};
use pn532_ntag::{BaudRate, Result};

pub fn open_and_initialize_device() -> Result<Option<Device<Initialized>>> {
    let Ok(path) = std::env::var("PN532_PORT") else {
        return Ok(None);
    };
    let bps = std::env::var("PN532_BAUD")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(BaudRate::DEFAULT.bps());

    let link = NativeSerialLink::open(&path, BaudRate::DEFAULT.bps())?;
    let transport = HsuTransport::new(link, HsuConfig::with_baud(bps));
    let device = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .with_init_attempts(3)
        .build_uninitialized()?
        .initialize()?;
    Ok(Some(device))
}
