// pn532-ntag/src/card/record.rs

use crate::card::tlv::{TagId, TagRecord, TagSet};

/// Badge record stored on the tag.
///
/// Zero integers and an empty signature mean "absent". They are left out of
/// the tag stream and read back as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "envelope::CardEnvelope", try_from = "envelope::CardEnvelope")
)]
pub struct CardRecord {
    pub attendee_id: u32,
    pub convention_id: u32,
    /// Issuance counter
    pub issuance: u32,
    /// Issue time, epoch seconds
    pub timestamp: u64,
    /// Epoch seconds, 0 for none
    pub expiration: u64,
    /// Detached signature, opaque here
    pub signature: Vec<u8>,
}

impl CardRecord {
    /// Records in stream order: ids, issuance, timestamp, expiration when
    /// set, and the signature last.
    pub fn to_tags(&self) -> TagSet {
        let mut tags = TagSet::new();
        if self.attendee_id != 0 || self.convention_id != 0 {
            tags.push(TagRecord::from_u32_pair(
                TagId::AttendeeConvention,
                self.attendee_id,
                self.convention_id,
            ));
        }
        if self.issuance != 0 {
            tags.push(TagRecord::from_u32(TagId::Issuance, self.issuance));
        }
        if self.timestamp != 0 {
            tags.push(TagRecord::from_u64(TagId::Timestamp, self.timestamp));
        }
        if self.expiration != 0 {
            tags.push(TagRecord::from_u64(TagId::Expiration, self.expiration));
        }
        if !self.signature.is_empty() {
            tags.push(TagRecord::new(TagId::Signature, self.signature.clone()));
        }
        tags
    }

    /// Build from the first record of each known id; missing ones are zero.
    pub fn from_tags(tags: &TagSet) -> Self {
        let (attendee_id, convention_id) = tags
            .get(TagId::AttendeeConvention)
            .map(TagRecord::as_u32_pair)
            .unwrap_or_default();
        let int = |id| tags.get(id).map(TagRecord::as_u64).unwrap_or_default();
        Self {
            attendee_id,
            convention_id,
            issuance: u32::try_from(int(TagId::Issuance)).unwrap_or_else(|_| {
                log::warn!("issuance record does not fit in 32 bits, reading it as 0");
                0
            }),
            timestamp: int(TagId::Timestamp),
            expiration: int(TagId::Expiration),
            signature: tags
                .get(TagId::Signature)
                .map(|r| r.value().to_vec())
                .unwrap_or_default(),
        }
    }
}

impl From<&TagSet> for CardRecord {
    fn from(tags: &TagSet) -> Self {
        Self::from_tags(tags)
    }
}

#[cfg(feature = "serde")]
mod envelope {
    //! JSON shape: camelCase keys, base64 signature, the two u64 times as
    //! decimal strings, absent fields left out.

    use super::CardRecord;
    use crate::Error;
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct CardEnvelope {
        #[serde(default, skip_serializing_if = "is_zero")]
        attendee_id: u32,
        #[serde(default, skip_serializing_if = "is_zero")]
        convention_id: u32,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        signature: String,
        #[serde(default, skip_serializing_if = "is_zero")]
        issuance: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expiration: Option<String>,
    }

    fn is_zero(v: &u32) -> bool {
        *v == 0
    }

    fn nonzero_string(v: u64) -> Option<String> {
        (v != 0).then(|| v.to_string())
    }

    fn parse_time(field: &str, raw: Option<String>) -> Result<u64, Error> {
        match raw {
            None => Ok(0),
            Some(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|e| Error::TagFormat(format!("{}: {}", field, e))),
        }
    }

    impl From<CardRecord> for CardEnvelope {
        fn from(r: CardRecord) -> Self {
            Self {
                attendee_id: r.attendee_id,
                convention_id: r.convention_id,
                signature: STANDARD.encode(&r.signature),
                issuance: r.issuance,
                timestamp: nonzero_string(r.timestamp),
                expiration: nonzero_string(r.expiration),
            }
        }
    }

    impl TryFrom<CardEnvelope> for CardRecord {
        type Error = Error;

        fn try_from(e: CardEnvelope) -> Result<Self, Error> {
            let signature = STANDARD
                .decode(e.signature.as_bytes())
                .map_err(|err| Error::TagFormat(format!("signature: {}", err)))?;
            Ok(Self {
                attendee_id: e.attendee_id,
                convention_id: e.convention_id,
                issuance: e.issuance,
                timestamp: parse_time("timestamp", e.timestamp)?,
                expiration: parse_time("expiration", e.expiration)?,
                signature,
            })
        }
    }
}
