use crate::protocol::parser::byte_at;
use crate::Result;

/// Status byte plus whatever the tag answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeReply {
    pub status: u8,
    pub data: Vec<u8>,
}

impl ExchangeReply {
    /// Error unless the status byte reports success.
    pub fn check(&self) -> Result<()> {
        crate::protocol::parser::check_status(self.status)
    }
}

/// Shared by InDataExchange, InCommunicateThru and InATR: Status, DataIn...
pub fn decode_exchange(body: &[u8]) -> Result<ExchangeReply> {
    let status = byte_at(body, 0)?;
    Ok(ExchangeReply {
        status,
        data: body[1..].to_vec(),
    })
}
