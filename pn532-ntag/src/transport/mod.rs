// pn532-ntag/src/transport/mod.rs

pub mod hsu;
pub mod i2c;
#[cfg(feature = "i2c")]
pub mod linux_i2c;
pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use hsu::{HsuConfig, HsuTransport, SerialLink};
pub use i2c::{I2cBus, I2cTransport};
#[cfg(feature = "i2c")]
pub use linux_i2c::LinuxI2cBus;
pub use mock::{MockI2cBus, MockSerialLink, MockTransport};
#[cfg(feature = "serial")]
pub use serial::NativeSerialLink;
pub use traits::{Transport, TransportKind};
