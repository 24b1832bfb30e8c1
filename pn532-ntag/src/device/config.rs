// pn532-ntag/src/device/config.rs

//! Engine timing defaults

/// Bound on a single frame write (ms)
pub const WRITE_TIMEOUT_MS: u64 = 100;

/// Bound on a single frame read once the chip signalled ready (ms)
pub const READ_TIMEOUT_MS: u64 = 100;

/// Wait for the chip to signal ready after a command (ms)
pub const READY_TIMEOUT_MS: u64 = 1000;

/// Ready wait used during SAM configuration (ms)
pub const SAM_READY_TIMEOUT_MS: u64 = 100;

/// RSTPD_N held low for this long on a hard reset (ms)
pub const RESET_LOW_MS: u64 = 400;

/// Settle time after releasing RSTPD_N (ms)
pub const RESET_SETTLE_MS: u64 = 10;

/// IRQ line sampling period (ms)
pub const GPIO_POLL_INTERVAL_MS: u64 = 10;

/// Delay before the first IRQ sample (ms)
pub const GPIO_SETTLE_MS: u64 = 1;

/// Response buffer sizes
pub const FIRMWARE_RESPONSE_LEN: usize = 12;
pub const STATUS_RESPONSE_LEN: usize = 10;
pub const LIST_TARGET_RESPONSE_LEN: usize = 64;
pub const AUTO_POLL_RESPONSE_LEN: usize = 32;

/// SAMConfiguration virtual card timeout (unused in normal mode)
pub const SAM_TIMEOUT: u8 = 0x00;

/// Runtime knobs of the engine. Defaults match the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    pub write_timeout_ms: u64,
    pub read_timeout_ms: u64,
    pub ready_timeout_ms: u64,
    pub sam_ready_timeout_ms: u64,
    pub reset_low_ms: u64,
    pub reset_settle_ms: u64,
    pub poll_interval_ms: u64,
    pub poll_settle_ms: u64,
    /// Whole bring-up sequences tried by `initialize` before giving up
    pub init_attempts: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            write_timeout_ms: WRITE_TIMEOUT_MS,
            read_timeout_ms: READ_TIMEOUT_MS,
            ready_timeout_ms: READY_TIMEOUT_MS,
            sam_ready_timeout_ms: SAM_READY_TIMEOUT_MS,
            reset_low_ms: RESET_LOW_MS,
            reset_settle_ms: RESET_SETTLE_MS,
            poll_interval_ms: GPIO_POLL_INTERVAL_MS,
            poll_settle_ms: GPIO_SETTLE_MS,
            init_attempts: 1,
        }
    }
}
