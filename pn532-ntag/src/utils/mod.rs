//! Small helpers shared across the crate: hex formatting, timeouts and the
//! clock every wait is measured against.

pub mod clock;
pub mod hex;
pub mod timeout;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use self::hex::*;
pub use timeout::*;
