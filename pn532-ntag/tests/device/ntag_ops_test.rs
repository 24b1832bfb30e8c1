#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use common::helpers::{mock_device, page_reads, page_writes, seed_tag};
use pn532_ntag::ntag::{self, Ntag, NtagModel};
use pn532_ntag::test_support::{push_page_read, push_status, push_target};
use pn532_ntag::{Error, Password};

#[test]
fn discover_returns_seven_byte_uid() {
    let (mock, mut dev) = mock_device();
    push_target(&mock, &fixtures::UID_BYTES).unwrap();
    let uid = ntag::discover_uid(&mut dev, 1000).unwrap();
    assert_eq!(uid, fixtures::uid());
    assert_eq!(uid.len(), 7);
    assert_eq!(mock.sent_commands(), vec![vec![0x4A, 0x01, 0x00]]);
}

#[test]
fn no_target_is_a_count_error() {
    let (mock, mut dev) = mock_device();
    mock.push_reply(0x4B, &[0x00]).unwrap();
    assert!(matches!(
        ntag::discover_uid(&mut dev, 1000),
        Err(Error::TargetCount { found: 0 })
    ));
}

#[test]
fn detect_ntag213() {
    let (mock, mut dev) = mock_device();
    seed_tag(&mock, 0x12);
    let tag = Ntag::detect(&mut dev, 1000).unwrap();
    assert_eq!(tag.model(), NtagModel::Ntag213);
    assert_eq!(tag.uid(), &fixtures::uid());
    let pages = tag.model().pages().unwrap();
    assert_eq!((pages.password, pages.config, pages.auth0), (0x2B, 0x29, 0x2A));
    assert_eq!(tag.last_user_page(), Some(0x27));
    assert_eq!(page_reads(&mock), vec![0x00]);
}

#[test]
fn unknown_capacity_has_no_pages() {
    let (mock, mut dev) = mock_device();
    seed_tag(&mock, 0x20);
    let tag = Ntag::detect(&mut dev, 1000).unwrap();
    assert_eq!(tag.model(), NtagModel::Unknown);
    assert!(matches!(
        tag.set_password(&mut dev, &Password::from_u32(1), 0x10),
        Err(Error::UnsupportedModel)
    ));
    assert!(page_writes(&mock).is_empty());
}

#[test]
fn write_outside_user_pages_sends_nothing() {
    let (mock, mut dev) = mock_device();
    for page in [0u8, 3, 232, 255] {
        assert!(matches!(
            ntag::write_page(&mut dev, page, &[1, 2, 3, 4]),
            Err(Error::PageOutOfRange { .. })
        ));
    }
    assert!(mock.sent().is_empty());
}

#[test]
fn read_length_bounds() {
    let (mock, mut dev) = mock_device();
    assert!(matches!(
        ntag::read_page(&mut dev, 4, 0),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        ntag::read_page(&mut dev, 4, 17),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        ntag::read_page(&mut dev, 231, 4),
        Err(Error::PageOutOfRange { page: 231, .. })
    ));
    assert!(mock.sent().is_empty());

    push_page_read(&mock, &[9, 8, 7, 6, 5]).unwrap();
    assert_eq!(ntag::read_page(&mut dev, 4, 5).unwrap(), vec![9, 8, 7, 6, 5]);
}

#[test]
fn write_page_frame() {
    let (mock, mut dev) = mock_device();
    push_status(&mock, 0x41, 0x00).unwrap();
    ntag::write_page(&mut dev, 4, &[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
    assert_eq!(
        mock.sent_commands(),
        vec![vec![0x40, 0x01, 0xA2, 0x04, 0xDE, 0xAD, 0xBE, 0xEF]]
    );
}

#[test]
fn rejected_password() {
    let (mock, mut dev) = mock_device();
    push_status(&mock, 0x43, 0x01).unwrap();
    let pwd = Password::from_u32(0x1234_5678);
    assert!(matches!(
        ntag::authenticate(&mut dev, &pwd),
        Err(Error::AuthenticationFailed { status: 0x01 })
    ));
    assert_eq!(
        mock.sent_commands(),
        vec![vec![0x42, 0x1B, 0x12, 0x34, 0x56, 0x78]]
    );

    push_status(&mock, 0x43, 0x00).unwrap();
    ntag::authenticate(&mut dev, &pwd).unwrap();
}

#[test]
fn refused_read_means_locked() {
    let (mock, mut dev) = mock_device();
    push_status(&mock, 0x41, 0x01).unwrap();
    assert!(ntag::is_locked(&mut dev, 0x10).unwrap());
    push_page_read(&mock, &[0; 4]).unwrap();
    assert!(!ntag::is_locked(&mut dev, 0x10).unwrap());
    // a silent chip is an error, not a lock
    assert!(matches!(ntag::is_locked(&mut dev, 0x10), Err(Error::Timeout)));
}

#[test]
fn clear_password_restores_defaults() {
    let (mock, mut dev) = mock_device();
    push_status(&mock, 0x41, 0x00).unwrap();
    push_page_read(&mock, &[0x04, 0x00, 0x00, 0x10, 0x80, 0x05, 0x00, 0x00]).unwrap();
    push_status(&mock, 0x41, 0x00).unwrap();
    push_status(&mock, 0x41, 0x00).unwrap();

    ntag::clear_password(&mut dev, NtagModel::Ntag213).unwrap();
    assert_eq!(
        page_writes(&mock),
        vec![
            (0x2B, [0xFF; 4]),
            (0x29, [0x04, 0x00, 0x00, 0xFF]),
            (0x2A, [0x00, 0x05, 0x00, 0x00]),
        ]
    );
    assert_eq!(page_reads(&mock), vec![0x29]);
}

#[test]
fn field_strength_is_bounded() {
    let (mock, mut dev) = mock_device();
    assert!(matches!(
        ntag::set_rf_field_strength(&mut dev, 0x40),
        Err(Error::InvalidArgument(_))
    ));
    mock.push_reply(0x33, &[]).unwrap();
    ntag::set_rf_field_strength(&mut dev, 0x20).unwrap();
    let cmds = mock.sent_commands();
    assert_eq!(cmds.len(), 1);
    assert_eq!(&cmds[0][..2], &[0x32, 0x0A]);
    // CIU_CWGsP sits third in the analog block
    assert_eq!(cmds[0][4], 0x20);
    assert_eq!(cmds[0].len(), 13);
}

#[test]
fn exchanges_address_the_listed_target() {
    let (mock, mut dev) = mock_device();
    let mut body = vec![0x01, 0x02, 0x00, 0x44, 0x00, 0x07];
    body.extend_from_slice(&fixtures::UID_BYTES);
    mock.push_reply(0x4B, &body).unwrap();
    ntag::discover_uid(&mut dev, 1000).unwrap();
    assert_eq!(dev.target(), 2);

    mock.push_reply(0x41, &[0x00, 0x0A]).unwrap();
    assert_eq!(ntag::data_exchange(&mut dev, &[0x60]).unwrap(), vec![0x0A]);
    assert_eq!(mock.sent_commands().last(), Some(&vec![0x40, 0x02, 0x60]));

    // status bits other than the top two are errors
    mock.push_reply(0x41, &[0x14]).unwrap();
    assert!(matches!(
        ntag::data_exchange(&mut dev, &[0x60]),
        Err(Error::CommandStatus { status: 0x14 })
    ));
}

#[test]
fn wait_for_card_reports_the_target_count() {
    let (mock, mut dev) = mock_device();
    mock.push_reply(0x61, &[0x01, 0x10, 0x0C]).unwrap();
    let found = dev
        .wait_for_card(pn532_ntag::TargetType::Iso14443A106, 0)
        .unwrap();
    assert_eq!(found, 1);
    assert_eq!(mock.sent_commands(), vec![vec![0x60, 0xFF, 0x01, 0x00]]);
}
