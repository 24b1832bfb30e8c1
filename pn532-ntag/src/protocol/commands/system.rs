//! Chip configuration commands: firmware version, SAM mode, HSU baud rate
//! and RF configuration items.

use crate::constants::*;
use crate::types::BaudRate;

/// SAMConfiguration mode byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SamMode {
    /// No SAM in use
    Normal = 0x01,
    VirtualCard = 0x02,
    WiredCard = 0x03,
    DualCard = 0x04,
}

/// RFConfiguration items this crate sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RfConfigItem {
    /// Item 0x05: retry counts for ATR, PSL and passive activation
    MaxRetries {
        atr: u8,
        psl: u8,
        passive_activation: u8,
    },
    /// Item 0x0A: analog settings for 106 kbps type A, eleven CIU registers
    AnalogTypeA106([u8; 11]),
}

impl RfConfigItem {
    pub const MAX_RETRIES: u8 = 0x05;
    pub const ANALOG_TYPE_A_106: u8 = 0x0A;

    /// Factory register values of the 106 kbps type A analog block, in
    /// order: RFCfg, GsNOn, CWGsP, ModGsP, DemodWhenRfOn, RxThreshold,
    /// DemodWhenRfOff, GsNOff, ModWidth, MifNFC, TxBitPhase.
    pub const ANALOG_TYPE_A_106_DEFAULTS: [u8; 11] =
        [0x59, 0xF4, 0x3F, 0x11, 0x4D, 0x85, 0x61, 0x6F, 0x26, 0x62, 0x87];

    /// Offset of CIU_CWGsP (carrier conductance, 0..=0x3F) in the analog block
    pub const CW_GSP_INDEX: usize = 2;

    pub fn item(&self) -> u8 {
        match self {
            Self::MaxRetries { .. } => Self::MAX_RETRIES,
            Self::AnalogTypeA106(_) => Self::ANALOG_TYPE_A_106,
        }
    }
}

pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![PN532_CMD_GET_FIRMWARE_VERSION]
}

pub fn encode_sam_configuration(mode: SamMode, timeout: u8, use_irq: bool) -> Vec<u8> {
    vec![
        PN532_CMD_SAM_CONFIGURATION,
        mode as u8,
        timeout,
        u8::from(use_irq),
    ]
}

pub fn encode_set_serial_baud_rate(rate: BaudRate) -> Vec<u8> {
    vec![PN532_CMD_SET_SERIAL_BAUD_RATE, rate.code()]
}

pub fn encode_rf_configuration(item: &RfConfigItem) -> Vec<u8> {
    let mut out = vec![PN532_CMD_RF_CONFIGURATION, item.item()];
    match item {
        RfConfigItem::MaxRetries {
            atr,
            psl,
            passive_activation,
        } => out.extend_from_slice(&[*atr, *psl, *passive_activation]),
        RfConfigItem::AnalogTypeA106(regs) => out.extend_from_slice(regs),
    }
    out
}
