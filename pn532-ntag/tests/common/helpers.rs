// helpers.rs: mock device setup and inspection of the traffic it saw

use pn532_ntag::device::{Device, Initialized};
use pn532_ntag::test_support;
use pn532_ntag::transport::MockTransport;

use super::fixtures;

/// Initialized device over a fresh mock, with the init traffic cleared.
pub fn mock_device() -> (MockTransport, Device<Initialized>) {
    let mock = MockTransport::new();
    let dev = test_support::initialized_mock_device(&mock).unwrap();
    mock.clear_sent();
    (mock, dev)
}

/// Queue discovery of the sample tag and a page-0 header announcing
/// `capacity`.
pub fn seed_tag(mock: &MockTransport, capacity: u8) {
    test_support::push_target(mock, &fixtures::UID_BYTES).unwrap();
    test_support::push_page_read(mock, &test_support::tag_header(capacity)).unwrap();
}

/// Page numbers of every READ sent so far.
pub fn page_reads(mock: &MockTransport) -> Vec<u8> {
    mock.sent_commands()
        .into_iter()
        .filter(|c| c.len() == 4 && c[0] == 0x40 && c[2] == 0x30)
        .map(|c| c[3])
        .collect()
}

/// (page, data) of every WRITE sent so far.
pub fn page_writes(mock: &MockTransport) -> Vec<(u8, [u8; 4])> {
    mock.sent_commands()
        .into_iter()
        .filter(|c| c.len() == 8 && c[0] == 0x40 && c[2] == 0xA2)
        .map(|c| (c[3], [c[4], c[5], c[6], c[7]]))
        .collect()
}
