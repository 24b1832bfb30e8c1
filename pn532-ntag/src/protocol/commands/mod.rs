// pn532-ntag/src/protocol/commands/mod.rs

pub mod exchange;
pub mod system;
pub mod target;

pub use exchange::{encode_in_communicate_thru, encode_in_data_exchange};
pub use system::{
    encode_get_firmware_version, encode_rf_configuration, encode_sam_configuration,
    encode_set_serial_baud_rate, RfConfigItem, SamMode,
};
pub use target::{encode_in_atr, encode_in_auto_poll, encode_in_list_passive_target};

use crate::constants::*;
use crate::types::{BaudRate, TargetType};

/// High-level Command enum. New commands should be added here and their
/// encoder placed in the matching `protocol::commands::<topic>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetFirmwareVersion,
    SamConfiguration {
        mode: SamMode,
        /// Virtual card timeout in 50 ms units (0 = none)
        timeout: u8,
        use_irq: bool,
    },
    SetSerialBaudRate {
        rate: BaudRate,
    },
    RfConfiguration(RfConfigItem),
    InListPassiveTarget {
        max_targets: u8,
        target_type: TargetType,
    },
    InDataExchange {
        target: u8,
        data: Vec<u8>,
    },
    InCommunicateThru {
        data: Vec<u8>,
    },
    InAtr {
        target: u8,
    },
    InAutoPoll {
        /// Number of polling rounds, 0xFF polls forever
        polls: u8,
        /// Polling period in 150 ms units
        period: u8,
        target_type: TargetType,
    },
}

impl Command {
    /// Opcode sent after the D4 frame identifier.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => PN532_CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => PN532_CMD_SAM_CONFIGURATION,
            Self::SetSerialBaudRate { .. } => PN532_CMD_SET_SERIAL_BAUD_RATE,
            Self::RfConfiguration(_) => PN532_CMD_RF_CONFIGURATION,
            Self::InListPassiveTarget { .. } => PN532_CMD_IN_LIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => PN532_CMD_IN_DATA_EXCHANGE,
            Self::InCommunicateThru { .. } => PN532_CMD_IN_COMMUNICATE_THRU,
            Self::InAtr { .. } => PN532_CMD_IN_ATR,
            Self::InAutoPoll { .. } => PN532_CMD_IN_AUTO_POLL,
        }
    }

    /// Response code the chip answers with.
    pub fn response_code(&self) -> u8 {
        self.command_code().wrapping_add(1)
    }

    /// Encode the command into the raw payload (opcode + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::SetSerialBaudRate { rate } => encode_set_serial_baud_rate(*rate),
            Self::RfConfiguration(item) => encode_rf_configuration(item),
            Self::InListPassiveTarget {
                max_targets,
                target_type,
            } => encode_in_list_passive_target(*max_targets, *target_type),
            Self::InDataExchange { target, data } => encode_in_data_exchange(*target, data),
            Self::InCommunicateThru { data } => encode_in_communicate_thru(data),
            Self::InAtr { target } => encode_in_atr(*target),
            Self::InAutoPoll {
                polls,
                period,
                target_type,
            } => encode_in_auto_poll(*polls, *period, *target_type),
        }
    }
}
