// pn532-ntag/src/ntag/operations.rs
//! NTAG21x commands relayed through the PN532.
//!
//! Page commands go through InDataExchange to the listed target, the
//! password command through InCommunicateThru.

use crate::constants::{
    MIFARE_CMD_READ, MIFARE_ULTRALIGHT_CMD_WRITE, NTAG_CMD_PWD_AUTH, NTAG_PAGE_LEN, NTAG_READ_LEN,
};
use crate::device::{Device, Initialized};
use crate::ntag::config;
use crate::ntag::model::NtagModel;
use crate::protocol::RfConfigItem;
use crate::types::{PageData, Password, TargetType, Uid};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Select the single ISO14443A tag in the field and return its UID.
pub fn discover_uid(device: &mut Device<Initialized>, timeout_ms: u64) -> Result<Uid> {
    let list = device.list_passive_target(TargetType::Iso14443A106, timeout_ms)?;
    match (list.count, list.first) {
        (1, Some(target)) => {
            log::debug!(
                "found tag {} (ATQA {:02X}{:02X}, SAK {:02X})",
                target.uid,
                target.sens_res[0],
                target.sens_res[1],
                target.sel_res
            );
            Ok(target.uid)
        }
        (found, _) => {
            if found > 1 {
                log::warn!("{} tags in the field, expected exactly one", found);
            }
            Err(Error::TargetCount { found })
        }
    }
}

/// READ `len` bytes (1..=16) starting at `page`.
pub fn read_page(device: &mut Device<Initialized>, page: u8, len: usize) -> Result<Vec<u8>> {
    if page > config::MAX_READ_PAGE {
        return Err(Error::PageOutOfRange {
            page,
            min: 0,
            max: config::MAX_READ_PAGE,
        });
    }
    if len == 0 || len > NTAG_READ_LEN {
        return Err(Error::InvalidArgument(format!(
            "read length {} outside 1..={}",
            len, NTAG_READ_LEN
        )));
    }

    let reply = device.in_data_exchange(
        &[MIFARE_CMD_READ, page],
        config::PAGE_RESPONSE_LEN,
        config::PAGE_TIMEOUT_MS,
    )?;
    reply.check()?;
    if reply.data.len() < len {
        return Err(Error::InvalidLength {
            expected: len,
            actual: reply.data.len(),
        });
    }
    log::trace!("page {:#04x}: {}", page, bytes_to_hex_spaced(&reply.data[..len]));
    Ok(reply.data[..len].to_vec())
}

/// Ultralight WRITE of one page. Pages below 4 are never writable.
pub fn write_page(device: &mut Device<Initialized>, page: u8, data: &PageData) -> Result<()> {
    if !(config::MIN_WRITE_PAGE..=config::MAX_WRITE_PAGE).contains(&page) {
        return Err(Error::PageOutOfRange {
            page,
            min: config::MIN_WRITE_PAGE,
            max: config::MAX_WRITE_PAGE,
        });
    }
    let mut cmd = Vec::with_capacity(2 + NTAG_PAGE_LEN);
    cmd.push(MIFARE_ULTRALIGHT_CMD_WRITE);
    cmd.push(page);
    cmd.extend_from_slice(data);
    // The tag's reply is not inspected; a well-formed frame is enough.
    device.in_data_exchange(&cmd, config::PAGE_RESPONSE_LEN, config::PAGE_TIMEOUT_MS)?;
    log::trace!("wrote page {:#04x}: {}", page, bytes_to_hex_spaced(data));
    Ok(())
}

/// PWD_AUTH with `password`.
pub fn authenticate(device: &mut Device<Initialized>, password: &Password) -> Result<()> {
    let mut cmd = Vec::with_capacity(5);
    cmd.push(NTAG_CMD_PWD_AUTH);
    cmd.extend_from_slice(password.as_bytes());
    let reply = device.in_communicate_thru(&cmd, config::AUTH_RESPONSE_LEN, config::AUTH_TIMEOUT_MS)?;
    if reply.status != 0x00 {
        log::debug!("PWD_AUTH rejected with status {:#04x}", reply.status);
        return Err(Error::AuthenticationFailed {
            status: reply.status,
        });
    }
    log::debug!("PWD_AUTH accepted");
    Ok(())
}

pub fn get_model(device: &mut Device<Initialized>) -> Result<NtagModel> {
    let header = read_page(device, config::CAPACITY_PAGE, NTAG_READ_LEN)?;
    let code = header[config::CAPACITY_BYTE_INDEX];
    let model = NtagModel::from_capacity(code);
    log::debug!("capacity code {:#04x} ({} bytes): {}", code, code as usize * 8, model);
    Ok(model)
}

/// Re-activate the tag with InATR so a fresh PWD_AUTH is required. The
/// chip's status is not checked.
pub fn reset_card(device: &mut Device<Initialized>) -> Result<()> {
    let reply = device.in_atr(0x00, config::ATR_RESPONSE_LEN, config::ATR_TIMEOUT_MS)?;
    log::trace!("InATR status {:#04x}", reply.status);
    Ok(())
}

/// Store `password` and protect every page from `protect_from` on, reads
/// included.
///
/// Steps run in order and stop at the first failure. Nothing is rolled back,
/// so a failure after the first write leaves the new password stored without
/// protection enabled.
pub fn set_password(
    device: &mut Device<Initialized>,
    model: NtagModel,
    password: &Password,
    protect_from: u8,
) -> Result<()> {
    let pages = model.require_pages()?;
    write_page(device, pages.password, password.as_bytes())?;
    reset_card(device)?;
    authenticate(device, password)?;

    let mut cfg = read_config(device, pages.config)?;
    cfg[3] = protect_from;
    cfg[4] |= config::ACCESS_PROT;
    write_config(device, pages.config, &cfg)?;
    log::info!("{} protected from page {:#04x}", model, protect_from);
    Ok(())
}

/// Reset the password to all ones and disable protection. A protected tag
/// must already be authenticated.
pub fn clear_password(device: &mut Device<Initialized>, model: NtagModel) -> Result<()> {
    let pages = model.require_pages()?;
    write_page(device, pages.password, Password::CLEARED.as_bytes())?;

    let mut cfg = read_config(device, pages.config)?;
    cfg[3] = config::AUTH0_DISABLED;
    cfg[4] &= !config::ACCESS_PROT;
    write_config(device, pages.config, &cfg)?;
    log::info!("{} password protection cleared", model);
    Ok(())
}

/// CFG0 and CFG1 as eight bytes.
fn read_config(device: &mut Device<Initialized>, page: u8) -> Result<[u8; 8]> {
    let bytes = read_page(device, page, 2 * NTAG_PAGE_LEN)?;
    let mut cfg = [0u8; 8];
    cfg.copy_from_slice(&bytes);
    Ok(cfg)
}

fn write_config(device: &mut Device<Initialized>, page: u8, cfg: &[u8; 8]) -> Result<()> {
    write_page(device, page, &[cfg[0], cfg[1], cfg[2], cfg[3]])?;
    write_page(device, page + 1, &[cfg[4], cfg[5], cfg[6], cfg[7]])
}

/// Set the 106 kbps type A carrier conductance (CIU_CWGsP), 0..=0x3F.
pub fn set_rf_field_strength(device: &mut Device<Initialized>, level: u8) -> Result<()> {
    if level > config::MAX_RF_FIELD_STRENGTH {
        return Err(Error::InvalidArgument(format!(
            "field strength {:#04x} above {:#04x}",
            level,
            config::MAX_RF_FIELD_STRENGTH
        )));
    }
    let mut regs = RfConfigItem::ANALOG_TYPE_A_106_DEFAULTS;
    regs[RfConfigItem::CW_GSP_INDEX] = level;
    device.rf_configuration(RfConfigItem::AnalogTypeA106(regs))
}

/// Relay raw tag command bytes to the listed target and return the tag's
/// answer.
pub fn data_exchange(device: &mut Device<Initialized>, data: &[u8]) -> Result<Vec<u8>> {
    let reply = device.in_data_exchange(
        data,
        config::EXCHANGE_RESPONSE_LEN,
        config::EXCHANGE_TIMEOUT_MS,
    )?;
    reply.check()?;
    Ok(reply.data)
}

/// Whether `page` refuses to be read, as a protected tag does until
/// PWD_AUTH succeeds.
pub fn is_locked(device: &mut Device<Initialized>, page: u8) -> Result<bool> {
    match read_page(device, page, NTAG_PAGE_LEN) {
        Ok(_) => Ok(false),
        Err(Error::CommandStatus { status }) => {
            log::debug!("page {:#04x} read refused (status {:#04x})", page, status);
            Ok(true)
        }
        Err(e) => Err(e),
    }
}
