// pn532-ntag/src/card/workflow.rs

//! Guarded card operations.
//!
//! Every operation first selects the tag in the field, checks it is the tag
//! the caller expects, checks it is an NTAG21x and, when a password is given,
//! authenticates. Only then is record memory touched.

use crate::card::config::WorkflowConfig;
use crate::card::memory::{PageCache, PageCursor};
use crate::card::record::CardRecord;
use crate::card::tlv::{self, TagSet};
use crate::constants::NTAG_PAGE_LEN;
use crate::device::{Device, Initialized};
use crate::ntag::{self, Ntag};
use crate::types::{Password, Uid};
use crate::{Error, ErrorKind, Result};

/// Card operations over an initialized reader.
pub struct CardWorkflow {
    device: Device<Initialized>,
    config: WorkflowConfig,
}

impl CardWorkflow {
    pub fn new(device: Device<Initialized>) -> Self {
        Self::with_config(device, WorkflowConfig::default())
    }

    pub fn with_config(device: Device<Initialized>, config: WorkflowConfig) -> Self {
        Self { device, config }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn device_mut(&mut self) -> &mut Device<Initialized> {
        &mut self.device
    }

    pub fn into_device(self) -> Device<Initialized> {
        self.device
    }

    /// UID of the tag in the field.
    pub fn discover_uid(&mut self, timeout_ms: u64) -> Result<Uid> {
        discover(&mut self.device, timeout_ms)
    }

    pub fn read_card(&mut self, expected: &Uid, password: Option<&Password>) -> Result<CardRecord> {
        let tag = self.guard(expected, password)?;
        let tags = self
            .read_tags(&tag)
            .map_err(|e| Error::ReadTagsFailed { source: Box::new(e) })?;
        // Drop the authenticated session so the next access starts locked.
        if let Err(e) = ntag::reset_card(&mut self.device) {
            log::warn!("card reset after read failed: {}", e);
        }
        let record = CardRecord::from_tags(&tags);
        log::info!("read card {}: {} records", tag.uid(), tags.len());
        Ok(record)
    }

    /// Write `record` and return it as it reads back from the written
    /// records.
    pub fn write_card(
        &mut self,
        expected: &Uid,
        record: &CardRecord,
        password: Option<&Password>,
    ) -> Result<CardRecord> {
        let tags = record.to_tags();
        let stream = tags.encode()?;
        let tag = self.guard(expected, password)?;
        let pages = tlv::to_pages(&stream);
        let last = self.user_range_end(&tag, pages.len())?;
        self.write_pages(&pages)
            .map_err(|e| Error::WriteTagsFailed { source: Box::new(e) })?;
        log::info!(
            "wrote {} bytes to card {} (pages {:#04x}..={:#04x})",
            stream.len(),
            tag.uid(),
            self.config.start_page,
            last
        );
        Ok(CardRecord::from_tags(&tags))
    }

    /// Zero every page from the start page through the last user page.
    pub fn format_card(&mut self, expected: &Uid, password: Option<&Password>) -> Result<()> {
        let tag = self.guard(expected, password)?;
        let last = tag.last_user_page().ok_or(Error::UnsupportedModel)?;
        let start = self.config.start_page;
        if start > last {
            return Err(Error::PageOutOfRange {
                page: start,
                min: ntag::config::MIN_WRITE_PAGE,
                max: last,
            });
        }
        let zeros = vec![[0u8; NTAG_PAGE_LEN]; usize::from(last - start) + 1];
        self.write_pages(&zeros)
            .map_err(|e| Error::WriteTagsFailed { source: Box::new(e) })?;
        log::info!("formatted card {} ({} pages)", tag.uid(), zeros.len());
        Ok(())
    }

    /// Set `password` and protect the record area with it.
    pub fn set_card_password(&mut self, expected: &Uid, password: &Password) -> Result<()> {
        let tag = self.guard(expected, None)?;
        tag.set_password(&mut self.device, password, self.config.start_page)
    }

    /// Remove protection from a tag locked with `current`.
    pub fn clear_card_password(&mut self, expected: &Uid, current: &Password) -> Result<()> {
        let tag = self.guard(expected, Some(current))?;
        tag.clear_password(&mut self.device)
    }

    /// Find the strongest carrier setting at or below `start` that reads the
    /// tag reliably.
    ///
    /// A failed read lowers the strength by one step and restarts the count.
    /// Dropping below the floor fails the calibration.
    pub fn calibrate_field(&mut self, start: u8) -> Result<u8> {
        let cal = self.config.calibration;
        discover(&mut self.device, self.config.discover_timeout_ms)?;

        let mut strength = start;
        loop {
            if strength < cal.floor {
                return Err(Error::CalibrationFailed { strength });
            }
            ntag::set_rf_field_strength(&mut self.device, strength)?;
            if self.holds_at(cal.required_reads)? {
                log::info!("field strength calibrated to {:#04x}", strength);
                return Ok(strength);
            }
            let next = strength.checked_sub(cal.step.max(1));
            log::warn!(
                "read failed at field strength {:#04x}, stepping down",
                strength
            );
            match next {
                Some(lower) => strength = lower,
                None => return Err(Error::CalibrationFailed { strength }),
            }
        }
    }

    /// `reads` consecutive page-0 reads at the current strength. Transport
    /// failures abort the calibration; anything else counts as a bad read.
    fn holds_at(&mut self, reads: u32) -> Result<bool> {
        let timeout = self.config.discover_timeout_ms;
        for n in 0..reads {
            let res = ntag::read_page(&mut self.device, ntag::config::CAPACITY_PAGE, NTAG_PAGE_LEN)
                .map(|_| ());
            if let Err(e) = res {
                if e.kind() == ErrorKind::Transport {
                    return Err(e);
                }
                log::debug!("read {} of {} failed: {}", n + 1, reads, e);
                // The tag may have dropped out; reselect before the next level.
                if let Err(e) = ntag::discover_uid(&mut self.device, timeout) {
                    if e.kind() == ErrorKind::Transport {
                        return Err(e);
                    }
                }
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn guard(&mut self, expected: &Uid, password: Option<&Password>) -> Result<Ntag> {
        let uid = discover(&mut self.device, self.config.discover_timeout_ms)?;
        if &uid != expected {
            log::debug!("expected card {}, found {}", expected, uid);
            return Err(Error::UidMismatch);
        }
        let model = ntag::get_model(&mut self.device)?;
        if !model.is_supported() {
            return Err(Error::UnsupportedModel);
        }
        let tag = Ntag::new(uid, model);
        if let Some(pwd) = password {
            tag.authenticate(&mut self.device, pwd).map_err(|e| {
                log::debug!("unlock of {} failed: {}", tag.uid(), e);
                Error::UnlockFailed
            })?;
        }
        Ok(tag)
    }

    fn read_tags(&mut self, tag: &Ntag) -> Result<TagSet> {
        let last = tag.last_user_page().ok_or(Error::UnsupportedModel)?;
        let mut cache = PageCache::new();
        let mut cursor = PageCursor::new(&mut self.device, &mut cache, self.config.start_page, last);
        TagSet::read_from(|| cursor.next_byte())
    }

    /// Last page a stream of `pages` pages would occupy, if it fits.
    fn user_range_end(&self, tag: &Ntag, pages: usize) -> Result<u8> {
        let last = tag.last_user_page().ok_or(Error::UnsupportedModel)?;
        let start = usize::from(self.config.start_page);
        let end = start + pages.saturating_sub(1);
        if end > usize::from(last) {
            let room = (usize::from(last) + 1).saturating_sub(start) * NTAG_PAGE_LEN;
            return Err(Error::PayloadTooLarge {
                max: room,
                actual: pages * NTAG_PAGE_LEN,
            });
        }
        Ok(end as u8)
    }

    fn write_pages(&mut self, pages: &[[u8; NTAG_PAGE_LEN]]) -> Result<()> {
        for (offset, data) in pages.iter().enumerate() {
            let page = usize::from(self.config.start_page) + offset;
            let page = u8::try_from(page).map_err(|_| {
                Error::InvalidArgument(format!("page {} beyond the address space", page))
            })?;
            ntag::write_page(&mut self.device, page, data)?;
        }
        Ok(())
    }
}

/// Discovery with "nothing answered" folded into `TagNotFound`.
fn discover(device: &mut Device<Initialized>, timeout_ms: u64) -> Result<Uid> {
    ntag::discover_uid(device, timeout_ms).map_err(|e| match e {
        Error::TargetCount { found: 0 } | Error::Timeout => Error::TagNotFound,
        other => other,
    })
}
