#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use common::helpers::{mock_device, page_reads, page_writes, seed_tag};
use pn532_ntag::card::{CardRecord, CardWorkflow, Outcome};
use pn532_ntag::test_support::{push_page_read, push_status};
use pn532_ntag::{Error, ErrorKind, Password};

/// Queue one successful status reply per page write.
fn accept_writes(mock: &pn532_ntag::transport::MockTransport, n: usize) {
    for _ in 0..n {
        push_status(mock, 0x41, 0x00).unwrap();
    }
}

#[test]
fn other_card_is_never_read() {
    let (mock, dev) = mock_device();
    let mut flow = CardWorkflow::new(dev);
    seed_tag(&mock, 0x12);
    let res = flow.read_card(&fixtures::other_uid(), None);
    assert!(matches!(res, Err(Error::UidMismatch)));
    assert!(page_reads(&mock).is_empty());

    let out: Outcome<CardRecord> = Err(Error::UidMismatch).into();
    assert_eq!(out.message(), Some("UUID mismatch"));
    assert_eq!(out.code(), ErrorKind::Workflow.code());
}

#[test]
fn written_record_reads_back() {
    let record = fixtures::sample_record();
    let (mock, dev) = mock_device();
    let mut flow = CardWorkflow::new(dev);

    // 2+8, 2+64, 2+4, 2+8, 2+8 and the terminator
    let pages = (103 + 3) / 4;
    seed_tag(&mock, 0x3E);
    accept_writes(&mock, pages);
    let echoed = flow.write_card(&fixtures::uid(), &record, None).unwrap();
    assert_eq!(echoed, record);

    let written = page_writes(&mock);
    assert_eq!(written.len(), pages);
    assert_eq!(written[0].0, 0x10);
    assert_eq!(written[0].1, [0x01, 0x08, 0x00, 0x00]);

    // Replay the written pages as the tag's memory.
    mock.clear_sent();
    seed_tag(&mock, 0x3E);
    for (_, data) in &written {
        push_page_read(&mock, data).unwrap();
    }
    push_status(&mock, 0x51, 0x00).unwrap();
    let back = flow.read_card(&fixtures::uid(), None).unwrap();
    assert_eq!(back, record);

    let reads = page_reads(&mock);
    assert_eq!(reads.len(), 1 + pages);
    assert_eq!(reads[1], 0x10);
    assert_eq!(mock.sent_commands().last().map(|c| c[0]), Some(0x50));
}

#[test]
fn protected_card_is_unlocked_first() {
    let (mock, dev) = mock_device();
    let mut flow = CardWorkflow::new(dev);
    let pwd = Password::from_u32(0xCAFE_F00D);

    seed_tag(&mock, 0x12);
    push_status(&mock, 0x43, 0x00).unwrap();
    push_page_read(&mock, &[0x03, 0x04, 0x00, 0x00]).unwrap();
    push_page_read(&mock, &[0x00, 0x2A, 0x00, 0x00]).unwrap();
    push_status(&mock, 0x51, 0x00).unwrap();

    let record = flow.read_card(&fixtures::uid(), Some(&pwd)).unwrap();
    assert_eq!(record.issuance, 0x2A);
    assert_eq!(record.attendee_id, 0);

    let cmds = mock.sent_commands();
    let auth = cmds.iter().position(|c| c[0] == 0x42).unwrap();
    let first_record_read = cmds
        .iter()
        .position(|c| c.len() == 4 && c[2] == 0x30 && c[3] == 0x10)
        .unwrap();
    assert!(auth < first_record_read);
}

#[test]
fn open_card_reads_without_auth_even_if_reset_goes_unanswered() {
    let (mock, dev) = mock_device();
    let mut flow = CardWorkflow::new(dev);

    seed_tag(&mock, 0x12);
    push_page_read(&mock, &[0x03, 0x04, 0x00, 0x00]).unwrap();
    push_page_read(&mock, &[0x00, 0x2A, 0x00, 0x00]).unwrap();

    let record = flow.read_card(&fixtures::uid(), None).unwrap();
    assert_eq!(record.issuance, 0x2A);

    let cmds = mock.sent_commands();
    assert!(cmds.iter().all(|c| c[0] != 0x42));
    assert_eq!(page_reads(&mock), vec![0x00, 0x10, 0x11]);
    assert_eq!(cmds.last(), Some(&vec![0x50, 0x00]));
}

#[test]
fn signature_is_the_last_record_on_the_tag() {
    let record = CardRecord {
        issuance: 1,
        signature: vec![0xAB],
        ..CardRecord::default()
    };
    let (mock, dev) = mock_device();
    let mut flow = CardWorkflow::new(dev);
    seed_tag(&mock, 0x12);
    accept_writes(&mock, 3);
    flow.write_card(&fixtures::uid(), &record, None).unwrap();

    let written = page_writes(&mock);
    assert_eq!(written[0].1, [0x03, 0x04, 0x00, 0x00]);
    assert_eq!(written[2].1, [0xAB, 0x00, 0x00, 0x00]);
}

#[test]
fn rejected_password_touches_nothing() {
    let (mock, dev) = mock_device();
    let mut flow = CardWorkflow::new(dev);
    seed_tag(&mock, 0x12);
    push_status(&mock, 0x43, 0x01).unwrap();

    let pwd = Password::from_u32(1);
    let res = flow.write_card(&fixtures::uid(), &fixtures::sample_record(), Some(&pwd));
    let out: Outcome<CardRecord> = res.into();
    assert_eq!(out.message(), Some("Unlock failed"));
    assert!(page_writes(&mock).is_empty());
}

#[test]
fn timeout_mid_read_reports_its_cause() {
    let (mock, dev) = mock_device();
    let mut flow = CardWorkflow::new(dev);
    seed_tag(&mock, 0x12);
    push_page_read(&mock, &[0x03, 0x04, 0x00, 0x00]).unwrap();

    let res = flow.read_card(&fixtures::uid(), None);
    let out: Outcome<CardRecord> = res.into();
    assert_eq!(out.message(), Some("Failed to read tags"));
    assert_eq!(out.code(), ErrorKind::Timeout.code());
}

#[test]
fn empty_field() {
    let (mock, dev) = mock_device();
    let mut flow = CardWorkflow::new(dev);
    mock.push_reply(0x4B, &[0x00]).unwrap();
    assert!(matches!(flow.discover_uid(100), Err(Error::TagNotFound)));
    assert!(matches!(
        flow.format_card(&fixtures::uid(), None),
        Err(Error::TagNotFound)
    ));
}

#[test]
fn clearing_a_password_needs_the_current_one() {
    let (mock, dev) = mock_device();
    let mut flow = CardWorkflow::new(dev);
    let current = Password::from_u32(0x0102_0304);

    seed_tag(&mock, 0x6D);
    push_status(&mock, 0x43, 0x00).unwrap();
    push_status(&mock, 0x41, 0x00).unwrap();
    push_page_read(&mock, &[0x04, 0x00, 0x00, 0x10, 0x80, 0x05, 0x00, 0x00]).unwrap();
    accept_writes(&mock, 2);

    flow.clear_card_password(&fixtures::uid(), &current).unwrap();
    assert_eq!(
        page_writes(&mock),
        vec![
            (0xE5, [0xFF; 4]),
            (0xE3, [0x04, 0x00, 0x00, 0xFF]),
            (0xE4, [0x00, 0x05, 0x00, 0x00]),
        ]
    );
    let auth = mock
        .sent_commands()
        .into_iter()
        .find(|c| c[0] == 0x42)
        .unwrap();
    assert_eq!(auth, vec![0x42, 0x1B, 0x01, 0x02, 0x03, 0x04]);
}
