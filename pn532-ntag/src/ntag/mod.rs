// pn532-ntag/src/ntag/mod.rs

use crate::device::{Device, Initialized};
use crate::types::{PageData, Password, Uid};
use crate::Result;

pub mod config;
pub mod model;
pub mod operations;

pub use model::{ModelPages, NtagModel};
pub use operations::{
    authenticate, clear_password, data_exchange, discover_uid, get_model, is_locked, read_page,
    reset_card, set_password, set_rf_field_strength, write_page,
};

/// A detected NTAG21x tag: its UID and model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ntag {
    uid: Uid,
    model: NtagModel,
}

impl Ntag {
    pub fn new(uid: Uid, model: NtagModel) -> Self {
        Self { uid, model }
    }

    /// Select the tag in the field and read its model.
    pub fn detect(device: &mut Device<Initialized>, timeout_ms: u64) -> Result<Self> {
        let uid = discover_uid(device, timeout_ms)?;
        let model = get_model(device)?;
        Ok(Self { uid, model })
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn model(&self) -> NtagModel {
        self.model
    }

    /// Last user memory page, `None` for unknown models.
    pub fn last_user_page(&self) -> Option<u8> {
        self.model.pages().map(|p| p.last_user)
    }

    pub fn read_page(&self, device: &mut Device<Initialized>, page: u8, len: usize) -> Result<Vec<u8>> {
        read_page(device, page, len)
    }

    pub fn write_page(&self, device: &mut Device<Initialized>, page: u8, data: &PageData) -> Result<()> {
        write_page(device, page, data)
    }

    pub fn authenticate(&self, device: &mut Device<Initialized>, password: &Password) -> Result<()> {
        authenticate(device, password)
    }

    pub fn set_password(
        &self,
        device: &mut Device<Initialized>,
        password: &Password,
        protect_from: u8,
    ) -> Result<()> {
        set_password(device, self.model, password, protect_from)
    }

    pub fn clear_password(&self, device: &mut Device<Initialized>) -> Result<()> {
        clear_password(device, self.model)
    }

    pub fn is_locked(&self, device: &mut Device<Initialized>, page: u8) -> Result<bool> {
        is_locked(device, page)
    }
}
