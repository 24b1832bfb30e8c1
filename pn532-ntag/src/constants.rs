// pn532-ntag/src/constants.rs
//! Common protocol constants used across the crate

/// Frame preamble and start code: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Bytes before the frame identifier: preamble(3) + LEN + LCS
pub const PN532_HEADER_LEN: usize = 5;

/// Minimal information frame: header + TFI + DCS + postamble
pub const PN532_MIN_FRAME_LEN: usize = 8;

/// Size of the command buffer a single command (opcode + parameters) must fit in
pub const PN532_COMMAND_BUFFER_LEN: usize = 64;

/// Maximum LEN field of a normal information frame
pub const PN532_MAX_FRAME_DATA_LEN: usize = 254;

/// Frame identifier: host to chip (D4) and chip to host (D5)
pub const PN532_HOST_TO_CHIP: u8 = 0xD4;
pub const PN532_CHIP_TO_HOST: u8 = 0xD5;

/// Frame identifier of a syntax error frame sent by the chip
pub const PN532_APPLICATION_ERROR: u8 = 0x7F;

/// ACK and NACK frames, compared byte for byte
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];
pub const PN532_NACK: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// HSU wake-up sequence: long 0x55 preamble followed by zero padding
pub const PN532_HSU_WAKEUP: [u8; 10] = [0x55, 0x55, 0x55, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

/// Fixed I2C slave address of the PN532
pub const PN532_I2C_ADDRESS: u16 = 0x24;

/// I2C status byte meaning "response ready"
pub const PN532_I2C_READY: u8 = 0x01;

/// Command opcodes
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_SET_SERIAL_BAUD_RATE: u8 = 0x10;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_RF_CONFIGURATION: u8 = 0x32;
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const PN532_CMD_IN_COMMUNICATE_THRU: u8 = 0x42;
pub const PN532_CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;
pub const PN532_CMD_IN_ATR: u8 = 0x50;
pub const PN532_CMD_IN_AUTO_POLL: u8 = 0x60;

/// Supported baud rates of the HSU link, indexed by the SetSerialBaudRate code
pub const PN532_BAUD_RATES: [u32; 9] = [
    9600, 19200, 38400, 57600, 115200, 230400, 460800, 921600, 1_288_000,
];

/// Index into [`PN532_BAUD_RATES`] the chip starts at after reset (115200)
pub const PN532_DEFAULT_BAUD_INDEX: usize = 4;

/// Tag-level commands relayed through InDataExchange / InCommunicateThru
pub const MIFARE_CMD_READ: u8 = 0x30;
pub const MIFARE_ULTRALIGHT_CMD_WRITE: u8 = 0xA2;
pub const NTAG_CMD_PWD_AUTH: u8 = 0x1B;

/// Bytes returned by a single tag READ (four pages)
pub const NTAG_READ_LEN: usize = 16;

/// Bytes per tag page
pub const NTAG_PAGE_LEN: usize = 4;
