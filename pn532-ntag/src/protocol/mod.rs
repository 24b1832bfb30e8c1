// pn532-ntag/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::*;
pub use frame::{check_ack, is_ack, is_nack, DecodedFrame, Direction, Frame};
pub use responses::*;
