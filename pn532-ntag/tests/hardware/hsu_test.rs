#[path = "common.rs"]
mod common;

use pn532_ntag::Result;
use pn532_ntag::card::CardWorkflow;

// These tests need a PN532 wired to a serial port. They are `#[ignore]`d
// so CI skips them. Run manually with:
//
// PN532_PORT=/dev/ttyUSB0 cargo test -p pn532-ntag --test hardware --features serial -- --ignored

#[test]
#[ignore]
#[serial_test::serial]
fn firmware_version() -> Result<()> {
    if let Some(mut dev) = common::open_and_initialize_device()? {
        let fw = dev.firmware_version()?;
        assert_eq!(fw.ic, 0x32);
    }
    Ok(())
}

#[test]
#[ignore]
#[serial_test::serial]
fn tag_in_field_is_discovered() -> Result<()> {
    if let Some(dev) = common::open_and_initialize_device()? {
        let mut flow = CardWorkflow::new(dev);
        let uid = flow.discover_uid(2000)?;
        assert!(matches!(uid.len(), 4 | 7 | 10));
    }
    Ok(())
}
