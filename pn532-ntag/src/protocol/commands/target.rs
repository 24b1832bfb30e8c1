//! Target discovery and selection commands.

use crate::constants::*;
use crate::types::TargetType;

pub fn encode_in_list_passive_target(max_targets: u8, target_type: TargetType) -> Vec<u8> {
    vec![PN532_CMD_IN_LIST_PASSIVE_TARGET, max_targets, target_type.code()]
}

pub fn encode_in_atr(target: u8) -> Vec<u8> {
    vec![PN532_CMD_IN_ATR, target]
}

pub fn encode_in_auto_poll(polls: u8, period: u8, target_type: TargetType) -> Vec<u8> {
    vec![PN532_CMD_IN_AUTO_POLL, polls, period, target_type.code()]
}
