// pn532-ntag/src/prelude.rs

pub use crate::card::{CardRecord, CardWorkflow, Outcome, TagId, TagRecord, TagSet, WorkflowConfig};
pub use crate::device::{Device, DeviceBuilder, DeviceConfig, ReadyStrategy};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::ntag::{Ntag, NtagModel};
pub use crate::protocol::{Command, Response};
pub use crate::transport::{HsuConfig, HsuTransport, I2cTransport, Transport, TransportKind};
pub use crate::{
    BaudRate, Error, ErrorKind, FirmwareVersion, PageData, Password, Result, TargetType, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_read_timeout, ms, parse_hex};
