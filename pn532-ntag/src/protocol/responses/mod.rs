// pn532-ntag/src/protocol/responses/mod.rs

pub mod exchange;
pub mod system;
pub mod target;

pub use exchange::{decode_exchange, ExchangeReply};
pub use system::decode_firmware_version;
pub use target::{decode_auto_poll, decode_in_list_passive_target, PassiveTarget, TargetList};

use crate::constants::*;
use crate::protocol::parser;
use crate::types::FirmwareVersion;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<topic>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    FirmwareVersion(FirmwareVersion),
    SamConfiguration,
    SetSerialBaudRate,
    RfConfiguration,
    InListPassiveTarget(TargetList),
    InDataExchange(ExchangeReply),
    InCommunicateThru(ExchangeReply),
    InAtr(ExchangeReply),
    InAutoPoll { targets: u8 },
}

impl Response {
    /// Decode a response payload (response code first) for the given
    /// command opcode.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        // Every response starts with the opcode + 1; check it once here so the
        // per-command decoders only look at their own fields.
        let expected_response = expected_cmd.wrapping_add(1);
        parser::expect_response_code(data, expected_response)?;
        let body = &data[1..];

        match expected_cmd {
            PN532_CMD_GET_FIRMWARE_VERSION => {
                Ok(Self::FirmwareVersion(decode_firmware_version(body)?))
            }
            PN532_CMD_SAM_CONFIGURATION => Ok(Self::SamConfiguration),
            PN532_CMD_SET_SERIAL_BAUD_RATE => Ok(Self::SetSerialBaudRate),
            PN532_CMD_RF_CONFIGURATION => Ok(Self::RfConfiguration),
            PN532_CMD_IN_LIST_PASSIVE_TARGET => Ok(Self::InListPassiveTarget(
                decode_in_list_passive_target(body)?,
            )),
            PN532_CMD_IN_DATA_EXCHANGE => Ok(Self::InDataExchange(decode_exchange(body)?)),
            PN532_CMD_IN_COMMUNICATE_THRU => Ok(Self::InCommunicateThru(decode_exchange(body)?)),
            PN532_CMD_IN_ATR => Ok(Self::InAtr(decode_exchange(body)?)),
            PN532_CMD_IN_AUTO_POLL => Ok(Self::InAutoPoll {
                targets: decode_auto_poll(body)?,
            }),
            other => Err(crate::Error::UnsupportedOperation(format!(
                "no decoder for command {:#04x}",
                other
            ))),
        }
    }
}
