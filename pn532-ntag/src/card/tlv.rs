// pn532-ntag/src/card/tlv.rs

//! Tag-length-value stream stored in NTAG user memory.
//!
//! Wire form: `id len value...` repeated, then a single `0x00`. The stream
//! is written four bytes per page, the last page zero-padded. Ids may repeat;
//! lookups always return the first record with a given id.

use crate::card::config::{MAX_STREAM_LEN, MAX_VALUE_LEN};
use crate::constants::NTAG_PAGE_LEN;
use crate::types::PageData;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Record identifiers. Unknown ids are carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagId {
    /// Two big-endian u32: attendee id, convention id
    AttendeeConvention,
    Signature,
    /// Big-endian u32
    Issuance,
    /// Big-endian u64
    Timestamp,
    /// Big-endian u64
    Expiration,
    Other(u8),
}

impl TagId {
    pub fn code(self) -> u8 {
        match self {
            TagId::AttendeeConvention => 0x01,
            TagId::Signature => 0x02,
            TagId::Issuance => 0x03,
            TagId::Timestamp => 0x04,
            TagId::Expiration => 0x05,
            TagId::Other(code) => code,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            0x01 => TagId::AttendeeConvention,
            0x02 => TagId::Signature,
            0x03 => TagId::Issuance,
            0x04 => TagId::Timestamp,
            0x05 => TagId::Expiration,
            other => TagId::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    id: TagId,
    value: Vec<u8>,
}

impl TagRecord {
    pub fn new(id: TagId, value: Vec<u8>) -> Self {
        Self { id, value }
    }

    pub fn from_u32(id: TagId, value: u32) -> Self {
        Self::new(id, value.to_be_bytes().to_vec())
    }

    pub fn from_u64(id: TagId, value: u64) -> Self {
        Self::new(id, value.to_be_bytes().to_vec())
    }

    pub fn from_u32_pair(id: TagId, first: u32, second: u32) -> Self {
        let mut value = Vec::with_capacity(8);
        value.extend_from_slice(&first.to_be_bytes());
        value.extend_from_slice(&second.to_be_bytes());
        Self::new(id, value)
    }

    pub fn id(&self) -> TagId {
        self.id
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Unsigned value of a 4- or 8-byte record; 0 for any other length.
    pub fn as_u64(&self) -> u64 {
        match self.value.len() {
            4 => u64::from(u32::from_be_bytes([
                self.value[0],
                self.value[1],
                self.value[2],
                self.value[3],
            ])),
            8 => {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(&self.value);
                u64::from_be_bytes(buf)
            }
            len => {
                log::warn!(
                    "tag {:#04x} holds {} bytes, not an integer",
                    self.id.code(),
                    len
                );
                0
            }
        }
    }

    /// Two u32 packed in an 8-byte record; `(0, 0)` for any other length.
    pub fn as_u32_pair(&self) -> (u32, u32) {
        if self.value.len() != 8 {
            log::warn!(
                "tag {:#04x} holds {} bytes, expected 8",
                self.id.code(),
                self.value.len()
            );
            return (0, 0);
        }
        let first = u32::from_be_bytes([self.value[0], self.value[1], self.value[2], self.value[3]]);
        let second = u32::from_be_bytes([self.value[4], self.value[5], self.value[6], self.value[7]]);
        (first, second)
    }
}

/// Ordered records, duplicates allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    records: Vec<TagRecord>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TagRecord) {
        self.records.push(record);
    }

    /// First record with `id`.
    pub fn get(&self, id: TagId) -> Option<&TagRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize to the terminated byte stream.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for record in &self.records {
            let code = record.id.code();
            if code == 0 {
                return Err(Error::InvalidArgument(
                    "tag id 0x00 is reserved for the terminator".into(),
                ));
            }
            if record.value.is_empty() {
                return Err(Error::InvalidArgument(format!(
                    "tag {:#04x} has an empty value",
                    code
                )));
            }
            if record.value.len() > MAX_VALUE_LEN {
                return Err(Error::PayloadTooLarge {
                    max: MAX_VALUE_LEN,
                    actual: record.value.len(),
                });
            }
            out.push(code);
            out.push(record.value.len() as u8);
            out.extend_from_slice(&record.value);
        }
        out.push(0x00);

        if out.len() > MAX_STREAM_LEN {
            return Err(Error::PayloadTooLarge {
                max: MAX_STREAM_LEN,
                actual: out.len(),
            });
        }
        log::trace!("encoded {} records: {}", self.len(), bytes_to_hex_spaced(&out));
        Ok(out)
    }

    /// Parse records pulled one byte at a time from `next_byte` until the
    /// terminator. Any error from `next_byte` aborts the scan.
    pub fn read_from<F>(mut next_byte: F) -> Result<Self>
    where
        F: FnMut() -> Result<u8>,
    {
        let mut set = TagSet::new();
        loop {
            let code = next_byte()?;
            if code == 0x00 {
                return Ok(set);
            }
            let len = next_byte()?;
            if len == 0 {
                return Err(Error::TagFormat(format!(
                    "tag {:#04x} has zero length",
                    code
                )));
            }
            let value = (0..len)
                .map(|_| next_byte())
                .collect::<Result<Vec<u8>>>()?;
            log::trace!("tag {:#04x}: {}", code, bytes_to_hex_spaced(&value));
            set.push(TagRecord::new(TagId::from_code(code), value));
        }
    }

    /// Parse an in-memory stream. Bytes after the terminator are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut it = bytes.iter().copied();
        Self::read_from(|| {
            it.next()
                .ok_or_else(|| Error::TagFormat("stream ends before the terminator".into()))
        })
    }
}

impl FromIterator<TagRecord> for TagSet {
    fn from_iter<I: IntoIterator<Item = TagRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Split a stream into pages, zero-padding the last one.
pub fn to_pages(stream: &[u8]) -> Vec<PageData> {
    stream
        .chunks(NTAG_PAGE_LEN)
        .map(|chunk| {
            let mut page = [0u8; NTAG_PAGE_LEN];
            page[..chunk.len()].copy_from_slice(chunk);
            page
        })
        .collect()
}
