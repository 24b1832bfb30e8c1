//! Bring up a PN532 over HSU, print its firmware and the UID of the tag in
//! the field.
//!
//! Usage:
//!   cargo run -p pn532-ntag --example hsu_probe --features serial -- /dev/ttyUSB0 [baud]

use anyhow::Context;
use pn532_ntag::card::CardWorkflow;
use pn532_ntag::device::DeviceBuilder;
use pn532_ntag::transport::{HsuConfig, HsuTransport, NativeSerialLink};
use pn532_ntag::{BaudRate, Error};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        println!("available ports:");
        for port in NativeSerialLink::available_ports()? {
            println!("  {}", port);
        }
        anyhow::bail!("usage: hsu_probe <port> [baud]");
    };
    let bps = match args.next() {
        Some(v) => v.parse().context("baud rate must be a number")?,
        None => BaudRate::DEFAULT.bps(),
    };

    let link = NativeSerialLink::open(&path, BaudRate::DEFAULT.bps())
        .with_context(|| format!("opening {}", path))?;
    let transport = HsuTransport::new(link, HsuConfig::with_baud(bps));
    let mut device = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .with_init_attempts(3)
        .build_uninitialized()?
        .initialize()
        .context("PN532 did not come up")?;

    let fw = device.firmware_version()?;
    println!("firmware: {}", fw);

    let mut flow = CardWorkflow::new(device);
    match flow.discover_uid(2000) {
        Ok(uid) => println!("tag: {}", uid),
        Err(Error::TagNotFound) => println!("no tag in the field"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
