// pn532-ntag/src/protocol/checksum.rs

/// Length checksum: LEN + LCS == 0 (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Data checksum over TFI and payload: TFI + PD0..PDn + DCS == 0 (mod 256)
pub fn dcs(data: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(data))
}

/// Wrapping byte sum.
pub fn sum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// True when `len` and `lcs` form a valid length pair.
pub fn length_ok(len: u8, lcs: u8) -> bool {
    len.wrapping_add(lcs) == 0
}
