use pn532_ntag::Error;
use pn532_ntag::protocol::codec::encode_command_frame;
use pn532_ntag::protocol::{Command, RfConfigItem, SamMode};
use pn532_ntag::types::{BaudRate, TargetType};

fn payload(cmd: &Command) -> Vec<u8> {
    let raw = encode_command_frame(cmd).unwrap();
    // strip preamble, LEN, LCS, TFI and the trailing DCS + postamble
    raw[6..raw.len() - 2].to_vec()
}

#[test]
fn sam_configuration_normal_mode_with_irq() {
    let cmd = Command::SamConfiguration {
        mode: SamMode::Normal,
        timeout: 0,
        use_irq: true,
    };
    assert_eq!(payload(&cmd), vec![0x14, 0x01, 0x00, 0x01]);
}

#[test]
fn list_passive_target() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        target_type: TargetType::Iso14443A106,
    };
    assert_eq!(payload(&cmd), vec![0x4A, 0x01, 0x00]);
}

#[test]
fn set_serial_baud_rate() {
    let cmd = Command::SetSerialBaudRate {
        rate: BaudRate::from_bps(921600).unwrap(),
    };
    assert_eq!(payload(&cmd), vec![0x10, 0x07]);
}

#[test]
fn passive_activation_retries() {
    let cmd = Command::RfConfiguration(RfConfigItem::MaxRetries {
        atr: 0xFF,
        psl: 0x01,
        passive_activation: 0x05,
    });
    assert_eq!(payload(&cmd), vec![0x32, 0x05, 0xFF, 0x01, 0x05]);
}

#[test]
fn data_exchange_addresses_the_target() {
    let cmd = Command::InDataExchange {
        target: 1,
        data: vec![0x30, 0x10],
    };
    assert_eq!(payload(&cmd), vec![0x40, 0x01, 0x30, 0x10]);
}

#[test]
fn command_buffer_limit() {
    // opcode + 63 parameter bytes fill the 64-byte buffer
    let fits = Command::InCommunicateThru { data: vec![0; 63] };
    assert!(encode_command_frame(&fits).is_ok());
    let too_big = Command::InCommunicateThru { data: vec![0; 64] };
    assert!(matches!(
        encode_command_frame(&too_big),
        Err(Error::PayloadTooLarge { max: 63, actual: 64 })
    ));
}
