use crate::constants::*;

/// Relay `data` to an already selected target.
pub fn encode_in_data_exchange(target: u8, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + data.len());
    out.push(PN532_CMD_IN_DATA_EXCHANGE);
    out.push(target);
    out.extend_from_slice(data);
    out
}

/// Send `data` straight into the RF field, no target addressing.
pub fn encode_in_communicate_thru(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + data.len());
    out.push(PN532_CMD_IN_COMMUNICATE_THRU);
    out.extend_from_slice(data);
    out
}
