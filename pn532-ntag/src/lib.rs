// pn532-ntag/src/lib.rs

//! pn532-ntag
//!
//! Pure Rust driver for the PN532 NFC controller over HSU (UART) and I2C,
//! with NTAG21x page access and a TLV badge-record codec on top.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod ntag;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
