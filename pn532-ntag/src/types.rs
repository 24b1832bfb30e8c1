// pn532-ntag/src/types.rs

use crate::constants::{PN532_BAUD_RATES, PN532_DEFAULT_BAUD_INDEX};
use crate::{Error, Result};
use derive_more::From;
use std::convert::TryFrom;
use std::fmt;

/// ISO14443A UID (single, double or triple size: 4, 7 or 10 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    pub const VALID_LENGTHS: [usize; 3] = [4, 7, 10];

    pub fn new(bytes: &[u8]) -> Result<Self> {
        if !Self::VALID_LENGTHS.contains(&bytes.len()) {
            return Err(Error::InvalidUidLength(bytes.len()));
        }
        Ok(Self(bytes.to_vec()))
    }

    /// Parse a UID from hex, with or without separators (`04:a1:...`, `04 a1 ...`).
    pub fn from_hex(s: &str) -> Result<Self> {
        let cleaned: String = s.chars().filter(|c| *c != ':' && *c != '-').collect();
        let bytes = crate::utils::parse_hex(&cleaned).map_err(Error::InvalidArgument)?;
        Self::new(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

/// NTAG21x 32-bit password, sent big-endian on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub struct Password([u8; 4]);

impl Password {
    /// Password written by `clear_password`; the factory default.
    pub const CLEARED: Self = Self([0xFF; 4]);

    pub const fn from_u32(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn as_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl From<u32> for Password {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

/// One 4-byte page of tag memory
pub type PageData = [u8; 4];

/// Modulation / baud rate selector for passive target commands (BrTy)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TargetType {
    Iso14443A106 = 0x00,
    Felica212 = 0x01,
    Felica424 = 0x02,
    Iso14443B106 = 0x03,
    Jewel106 = 0x04,
}

impl TargetType {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Answer to GetFirmwareVersion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PN5{:02x} firmware {}.{} (support {:#04x})",
            self.ic, self.version, self.revision, self.support
        )
    }
}

/// Baud rate of the HSU link, stored as its index in the chip's rate table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaudRate(usize);

impl BaudRate {
    pub const DEFAULT: Self = Self(PN532_DEFAULT_BAUD_INDEX);

    /// Look up a rate; `None` when the chip has no table entry for it.
    pub fn from_bps(bps: u32) -> Option<Self> {
        PN532_BAUD_RATES.iter().position(|&r| r == bps).map(Self)
    }

    /// Look up a rate, falling back to 115200 (with a warning) when unsupported.
    pub fn from_bps_or_default(bps: u32) -> Self {
        match Self::from_bps(bps) {
            Some(rate) => rate,
            None => {
                log::warn!(
                    "unsupported baud rate {}, falling back to {}",
                    bps,
                    Self::DEFAULT.bps()
                );
                Self::DEFAULT
            }
        }
    }

    /// Code sent in SetSerialBaudRate
    pub fn code(self) -> u8 {
        self.0 as u8
    }

    pub fn bps(self) -> u32 {
        PN532_BAUD_RATES[self.0]
    }
}

impl Default for BaudRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}
