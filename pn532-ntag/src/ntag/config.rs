// pn532-ntag/src/ntag/config.rs

//! NTAG21x access constants

/// Highest page READ accepts (exclusive bound is 231)
pub const MAX_READ_PAGE: u8 = 230;

/// Pages 0..=3 hold UID, lock and capability bytes
pub const MIN_WRITE_PAGE: u8 = 4;
pub const MAX_WRITE_PAGE: u8 = 231;

/// Page 0 READ returns pages 0..=3; byte 14 is the capability container size
pub const CAPACITY_PAGE: u8 = 0;
pub const CAPACITY_BYTE_INDEX: usize = 14;

/// Response buffer sizes
pub const PAGE_RESPONSE_LEN: usize = 26;
pub const AUTH_RESPONSE_LEN: usize = 11;
pub const ATR_RESPONSE_LEN: usize = 32;
pub const EXCHANGE_RESPONSE_LEN: usize = 64;

/// Response waits (ms)
pub const PAGE_TIMEOUT_MS: u64 = 100;
pub const AUTH_TIMEOUT_MS: u64 = 100;
pub const ATR_TIMEOUT_MS: u64 = 100;
pub const EXCHANGE_TIMEOUT_MS: u64 = 1000;

/// CFG0 byte 3 (AUTH0) value that leaves every page unprotected
pub const AUTH0_DISABLED: u8 = 0xFF;

/// CFG1 byte 0 (ACCESS) bit protecting reads as well as writes
pub const ACCESS_PROT: u8 = 0x80;

/// Largest CIU_CWGsP value
pub const MAX_RF_FIELD_STRENGTH: u8 = 0x3F;
