// pn532-ntag/src/protocol/codec.rs

use crate::Result;

use super::commands::Command;
use super::frame::{Direction, Frame};
use super::responses::Response;

/// A decoded response plus whether the frame was cut short by the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedResponse {
    pub response: Response,
    pub truncated: bool,
}

/// Encode a Command into a full wire frame (preamble/LEN/LCS/TFI/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    let payload = cmd.encode();
    Frame::encode_command(payload[0], &payload[1..])
}

/// Decode a raw chip frame and parse the response for `expected_cmd`.
/// Truncated frames are accepted without data checksum verification.
pub fn decode_response_frame(expected_cmd: u8, raw: &[u8]) -> Result<DecodedResponse> {
    let decoded = Frame::decode_lenient(raw)?;
    if decoded.frame.direction != Direction::ChipToHost {
        return Err(crate::Error::FrameFormat(
            "response frame carries host direction byte".into(),
        ));
    }
    let response = Response::decode(expected_cmd, &decoded.frame.payload)?;
    Ok(DecodedResponse {
        response,
        truncated: decoded.truncated,
    })
}
