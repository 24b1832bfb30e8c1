use crate::types::FirmwareVersion;
use crate::{Error, Result};

/// GetFirmwareVersion body: IC, Ver, Rev, Support (exactly four bytes).
pub fn decode_firmware_version(body: &[u8]) -> Result<FirmwareVersion> {
    if body.len() != 4 {
        return Err(Error::InvalidLength {
            expected: 4,
            actual: body.len(),
        });
    }
    Ok(FirmwareVersion {
        ic: body[0],
        version: body[1],
        revision: body[2],
        support: body[3],
    })
}
