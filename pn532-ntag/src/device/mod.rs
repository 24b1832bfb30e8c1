// pn532-ntag/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;
pub mod pins;
pub mod ready;

pub use builder::DeviceBuilder;
pub use config::DeviceConfig;
pub use handle::{Device, Initialized, Uninitialized};
pub use pins::{InputLine, OutputLine, RecordingLine, ScriptedLine};
#[cfg(feature = "embedded-hal")]
pub use pins::HalPin;
pub use ready::{irq_channel, IrqNotifier, IrqReceiver, ReadyStrategy, ReadyWaiter};
