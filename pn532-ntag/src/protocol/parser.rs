// pn532-ntag/src/protocol/parser.rs

use crate::types::Uid;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Length-prefixed UID: one length byte at `idx` followed by the UID bytes.
pub fn uid_at(data: &[u8], idx: usize) -> Result<Uid> {
    let len = byte_at(data, idx)? as usize;
    Uid::new(slice_at(data, idx + 1, len)?)
}

/// The first byte must be the response code `expected`.
pub fn expect_response_code(data: &[u8], expected: u8) -> Result<()> {
    let actual = byte_at(data, 0)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}

/// Tag status byte of InDataExchange / InCommunicateThru: the low six bits
/// carry the error code, the top two are the MI and NAD flags.
pub fn check_status(status: u8) -> Result<()> {
    match status & 0x3F {
        0 => Ok(()),
        _ => Err(Error::CommandStatus { status }),
    }
}
