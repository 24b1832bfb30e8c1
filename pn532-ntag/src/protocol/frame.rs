// pn532-ntag/src/protocol/frame.rs

use crate::constants::{
    PN532_ACK, PN532_APPLICATION_ERROR, PN532_CHIP_TO_HOST, PN532_COMMAND_BUFFER_LEN,
    PN532_HEADER_LEN, PN532_HOST_TO_CHIP, PN532_MAX_FRAME_DATA_LEN, PN532_NACK,
    PN532_POSTAMBLE, PN532_PREAMBLE,
};
use crate::protocol::checksum::{dcs, lcs, length_ok};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Frame identifier (TFI) byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HostToChip,
    ChipToHost,
}

impl Direction {
    pub fn tfi(self) -> u8 {
        match self {
            Direction::HostToChip => PN532_HOST_TO_CHIP,
            Direction::ChipToHost => PN532_CHIP_TO_HOST,
        }
    }

    fn from_tfi(tfi: u8) -> Result<Self> {
        match tfi {
            PN532_HOST_TO_CHIP => Ok(Direction::HostToChip),
            PN532_CHIP_TO_HOST => Ok(Direction::ChipToHost),
            PN532_APPLICATION_ERROR => Err(Error::ApplicationError),
            other => Err(Error::FrameFormat(format!(
                "invalid frame identifier {:#04x}",
                other
            ))),
        }
    }
}

/// PN532 normal information frame.
///
/// Format: [Preamble+Start(3)] [LEN(1)] [LCS(1)] [TFI(1)] [PD0..PDn] [DCS(1)] [Postamble(1)]
/// LEN counts TFI plus payload; LCS makes LEN sum to zero and DCS makes
/// TFI + payload sum to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub direction: Direction,
    /// Command or response code followed by its data
    pub payload: Vec<u8>,
}

/// A decoded frame plus whether it was cut short by the reader's buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    pub frame: Frame,
    /// The data checksum was not verified because bytes were missing.
    pub truncated: bool,
}

impl Frame {
    /// Encode `payload` behind the given direction byte into a full frame.
    pub fn encode(direction: Direction, payload: &[u8]) -> Result<Vec<u8>> {
        let len = payload.len() + 1;
        if len > PN532_MAX_FRAME_DATA_LEN {
            return Err(Error::PayloadTooLarge {
                max: PN532_MAX_FRAME_DATA_LEN - 1,
                actual: payload.len(),
            });
        }

        let len = len as u8;
        let tfi = direction.tfi();
        let mut out = Vec::with_capacity(PN532_HEADER_LEN + payload.len() + 3);
        out.extend_from_slice(&PN532_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.push(tfi);
        out.extend_from_slice(payload);
        out.push(dcs(payload).wrapping_sub(tfi));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Encode a host command. Opcode and parameters together must fit the
    /// 64-byte command buffer.
    pub fn encode_command(opcode: u8, params: &[u8]) -> Result<Vec<u8>> {
        if params.len() + 1 > PN532_COMMAND_BUFFER_LEN {
            return Err(Error::PayloadTooLarge {
                max: PN532_COMMAND_BUFFER_LEN - 1,
                actual: params.len(),
            });
        }
        let mut payload = Vec::with_capacity(params.len() + 1);
        payload.push(opcode);
        payload.extend_from_slice(params);
        Self::encode(Direction::HostToChip, &payload)
    }

    /// Decode a complete frame, verifying both checksums. Bytes after the
    /// data checksum (postamble, I2C padding) are ignored.
    pub fn decode(raw: &[u8]) -> Result<Frame> {
        let decoded = Self::decode_lenient(raw)?;
        if decoded.truncated {
            let len = raw[3] as usize;
            return Err(Error::InvalidLength {
                expected: PN532_HEADER_LEN + len + 1,
                actual: raw.len(),
            });
        }
        Ok(decoded.frame)
    }

    /// Decode a frame that may have been cut short by the reader. The length
    /// pair is always checked; the data checksum only when every byte up to
    /// and including DCS is present.
    pub fn decode_lenient(raw: &[u8]) -> Result<DecodedFrame> {
        if is_ack(raw) || is_nack(raw) {
            return Err(Error::FrameFormat(format!(
                "expected information frame, got [{}]",
                bytes_to_hex_spaced(raw)
            )));
        }
        if raw.len() < PN532_HEADER_LEN + 1 {
            return Err(Error::InvalidLength {
                expected: PN532_HEADER_LEN + 1,
                actual: raw.len(),
            });
        }
        if raw[..3] != PN532_PREAMBLE {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let len = raw[3];
        if !length_ok(len, raw[4]) {
            return Err(Error::ChecksumMismatch {
                expected: lcs(len),
                actual: raw[4],
            });
        }
        if len == 0 {
            return Err(Error::FrameFormat("empty information frame".into()));
        }

        let direction = Direction::from_tfi(raw[PN532_HEADER_LEN])?;
        let data_end = PN532_HEADER_LEN + len as usize;

        if raw.len() <= data_end {
            log::warn!(
                "frame truncated: LEN={} but only {} bytes read, data checksum not verified",
                len,
                raw.len()
            );
            return Ok(DecodedFrame {
                frame: Frame {
                    direction,
                    payload: raw[PN532_HEADER_LEN + 1..].to_vec(),
                },
                truncated: true,
            });
        }

        let data = &raw[PN532_HEADER_LEN..data_end];
        let expected = dcs(data);
        let actual = raw[data_end];
        if expected != actual {
            return Err(Error::ChecksumMismatch { expected, actual });
        }

        Ok(DecodedFrame {
            frame: Frame {
                direction,
                payload: data[1..].to_vec(),
            },
            truncated: false,
        })
    }
}

pub fn is_ack(raw: &[u8]) -> bool {
    raw == PN532_ACK
}

pub fn is_nack(raw: &[u8]) -> bool {
    raw == PN532_NACK
}

/// Succeeds only on the exact ACK sentinel.
pub fn check_ack(raw: &[u8]) -> Result<()> {
    if is_ack(raw) {
        Ok(())
    } else if is_nack(raw) {
        Err(Error::Nack)
    } else {
        Err(Error::AckMismatch(bytes_to_hex_spaced(raw)))
    }
}
