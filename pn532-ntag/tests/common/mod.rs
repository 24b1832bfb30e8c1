// Shared helpers for the integration test crates. Each test file pulls this
// in through `#[path]`, so not every crate uses every item.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
