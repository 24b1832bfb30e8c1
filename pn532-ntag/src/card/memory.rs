// pn532-ntag/src/card/memory.rs

//! Page-granular access to tag memory for the byte-wise record scan.

use std::collections::HashMap;

use crate::constants::NTAG_PAGE_LEN;
use crate::device::{Device, Initialized};
use crate::ntag;
use crate::types::PageData;
use crate::{Error, Result};

/// Anything that can hand out one 4-byte page.
pub trait PageSource {
    fn read_page(&mut self, page: u8) -> Result<PageData>;
}

impl PageSource for Device<Initialized> {
    fn read_page(&mut self, page: u8) -> Result<PageData> {
        let bytes = ntag::read_page(self, page, NTAG_PAGE_LEN)?;
        let mut data = [0u8; NTAG_PAGE_LEN];
        data.copy_from_slice(&bytes);
        Ok(data)
    }
}

/// Pages already read during one scan.
#[derive(Debug, Default)]
pub struct PageCache {
    pages: HashMap<u8, PageData>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, page: u8) -> Option<&PageData> {
        self.pages.get(&page)
    }

    /// Cached contents of `page`, reading it from `source` on a miss.
    pub fn fetch<S: PageSource + ?Sized>(&mut self, source: &mut S, page: u8) -> Result<PageData> {
        if let Some(data) = self.pages.get(&page) {
            return Ok(*data);
        }
        let data = source.read_page(page)?;
        self.pages.insert(page, data);
        Ok(data)
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Sequential byte reader over pages `start..=last`.
pub struct PageCursor<'a, S: PageSource + ?Sized> {
    source: &'a mut S,
    cache: &'a mut PageCache,
    start: u8,
    last: u8,
    position: usize,
}

impl<'a, S: PageSource + ?Sized> PageCursor<'a, S> {
    pub fn new(source: &'a mut S, cache: &'a mut PageCache, start: u8, last: u8) -> Self {
        Self {
            source,
            cache,
            start,
            last,
            position: 0,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn next_byte(&mut self) -> Result<u8> {
        let page = usize::from(self.start) + self.position / NTAG_PAGE_LEN;
        if page > usize::from(self.last) {
            return Err(Error::TagFormat(format!(
                "record stream runs past page {:#04x}",
                self.last
            )));
        }
        let data = self.cache.fetch(&mut *self.source, page as u8)?;
        let byte = data[self.position % NTAG_PAGE_LEN];
        self.position += 1;
        Ok(byte)
    }
}
