// pn532-ntag/src/card/config.rs

//! Card record layout and workflow defaults

/// First page of the record stream
pub const TAG_START_PAGE: u8 = 0x10;

/// Bound on the InListPassiveTarget wait before each operation (ms)
pub const DISCOVER_TIMEOUT_MS: u64 = 1000;

/// Longest encoded record stream, terminator included
pub const MAX_STREAM_LEN: usize = 1000;

/// Longest single value; the length field is one byte
pub const MAX_VALUE_LEN: usize = u8::MAX as usize;

/// Field strength calibration
pub const CALIBRATION_FLOOR: u8 = 10;
pub const CALIBRATION_REQUIRED_READS: u32 = 500;
pub const CALIBRATION_STEP: u8 = 1;

/// How `calibrate_field` walks the carrier strength down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationConfig {
    /// Lowest strength tried before giving up
    pub floor: u8,
    /// Consecutive good reads that make a strength acceptable
    pub required_reads: u32,
    /// Amount the strength drops after a failed read
    pub step: u8,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            floor: CALIBRATION_FLOOR,
            required_reads: CALIBRATION_REQUIRED_READS,
            step: CALIBRATION_STEP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowConfig {
    pub start_page: u8,
    pub discover_timeout_ms: u64,
    pub calibration: CalibrationConfig,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            start_page: TAG_START_PAGE,
            discover_timeout_ms: DISCOVER_TIMEOUT_MS,
            calibration: CalibrationConfig::default(),
        }
    }
}

impl WorkflowConfig {
    pub fn with_start_page(mut self, page: u8) -> Self {
        self.start_page = page;
        self
    }

    pub fn with_discover_timeout(mut self, timeout_ms: u64) -> Self {
        self.discover_timeout_ms = timeout_ms;
        self
    }

    pub fn with_calibration(mut self, calibration: CalibrationConfig) -> Self {
        self.calibration = calibration;
        self
    }
}
