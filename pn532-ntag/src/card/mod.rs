// pn532-ntag/src/card/mod.rs

//! Badge records on NTAG21x tags: the TLV codec, the record view over it
//! and the guarded read/write/format/password/calibrate workflow.

pub mod config;
pub mod memory;
pub mod outcome;
pub mod record;
pub mod tlv;
pub mod workflow;

pub use config::{CalibrationConfig, WorkflowConfig};
pub use memory::{PageCache, PageCursor, PageSource};
pub use outcome::Outcome;
pub use record::CardRecord;
pub use tlv::{TagId, TagRecord, TagSet};
pub use workflow::CardWorkflow;
