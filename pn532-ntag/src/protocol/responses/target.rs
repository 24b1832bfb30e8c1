//! InListPassiveTarget and InAutoPoll responses.

use crate::protocol::parser::{byte_at, slice_at, uid_at};
use crate::types::Uid;
use crate::Result;

/// An ISO14443A target as reported by InListPassiveTarget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassiveTarget {
    /// Logical target number assigned by the chip, used by InDataExchange
    pub target: u8,
    pub sens_res: [u8; 2],
    pub sel_res: u8,
    pub uid: Uid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetList {
    /// NbTg as reported by the chip
    pub count: u8,
    /// First target's data, present when `count > 0`
    pub first: Option<PassiveTarget>,
}

/// Body layout: NbTg, Tg, SENS_RES(2), SEL_RES, NFCIDLength, NFCID...
pub fn decode_in_list_passive_target(body: &[u8]) -> Result<TargetList> {
    let count = byte_at(body, 0)?;
    if count == 0 {
        return Ok(TargetList { count, first: None });
    }

    let target = byte_at(body, 1)?;
    let sens = slice_at(body, 2, 2)?;
    let sel_res = byte_at(body, 4)?;
    let uid = uid_at(body, 5)?;

    Ok(TargetList {
        count,
        first: Some(PassiveTarget {
            target,
            sens_res: [sens[0], sens[1]],
            sel_res,
            uid,
        }),
    })
}

/// InAutoPoll body starts with the number of targets found.
pub fn decode_auto_poll(body: &[u8]) -> Result<u8> {
    byte_at(body, 0)
}
