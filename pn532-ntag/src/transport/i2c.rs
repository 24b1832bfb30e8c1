// pn532-ntag/src/transport/i2c.rs
//! PN532 on an I2C bus.
//!
//! Every read from the chip starts with a status byte; 0x01 means the
//! message behind it is valid. The same byte answers `is_ready`, so this
//! transport can pace the engine without a dedicated IRQ line.

use std::sync::{Arc, Mutex};

use crate::constants::{
    PN532_I2C_ADDRESS, PN532_I2C_READY, PN532_MAX_FRAME_DATA_LEN, PN532_MIN_FRAME_LEN,
};
use crate::transport::traits::{Transport, TransportKind};
use crate::utils::{bytes_to_hex_spaced, Deadline, SharedClock, SystemClock};
use crate::{Error, Result};

/// Minimal I2C master the transport needs.
pub trait I2cBus {
    fn write(&mut self, address: u16, data: &[u8]) -> Result<()>;

    /// Fill `buf` with one read transaction.
    fn read(&mut self, address: u16, buf: &mut [u8]) -> Result<()>;
}

/// A bus shared with other devices.
impl<B: I2cBus> I2cBus for Arc<Mutex<B>> {
    fn write(&mut self, address: u16, data: &[u8]) -> Result<()> {
        self.lock()
            .map_err(|_| Error::Transport("i2c bus lock poisoned".into()))?
            .write(address, data)
    }

    fn read(&mut self, address: u16, buf: &mut [u8]) -> Result<()> {
        self.lock()
            .map_err(|_| Error::Transport("i2c bus lock poisoned".into()))?
            .read(address, buf)
    }
}

/// Delay between status polls while waiting for a message.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1;

/// Read bound used when the caller passes no timeout.
const UNBOUNDED_READ_FALLBACK_MS: u64 = 100;

pub struct I2cTransport<B: I2cBus> {
    bus: B,
    address: u16,
    poll_interval_ms: u64,
    clock: SharedClock,
}

impl<B: I2cBus> I2cTransport<B> {
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            address: PN532_I2C_ADDRESS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            clock: SystemClock::shared(),
        }
    }

    pub fn with_address(mut self, address: u16) -> Self {
        self.address = address;
        self
    }

    pub fn with_poll_interval(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn address(&self) -> u16 {
        self.address
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn into_inner(self) -> B {
        self.bus
    }
}

impl<B: I2cBus> Transport for I2cTransport<B> {
    fn write(&mut self, frame: &[u8], _timeout_ms: u64) -> Result<()> {
        // TFI + data, the part counted by LEN
        let body = frame.len().saturating_sub(PN532_MIN_FRAME_LEN - 1);
        if body > PN532_MAX_FRAME_DATA_LEN {
            return Err(Error::PayloadTooLarge {
                max: PN532_MAX_FRAME_DATA_LEN,
                actual: body,
            });
        }
        log::trace!("i2c write @{:#04x}: {}", self.address, bytes_to_hex_spaced(frame));
        self.bus.write(self.address, frame)
    }

    fn read(&mut self, len: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        let bound = match timeout_ms {
            0 => UNBOUNDED_READ_FALLBACK_MS,
            t => t,
        };
        let deadline = Deadline::after(&*self.clock, bound);
        let mut buf = vec![0u8; len + 1];
        loop {
            self.bus.read(self.address, &mut buf)?;
            if buf[0] == PN532_I2C_READY {
                break;
            }
            if deadline.is_expired(&*self.clock) {
                log::debug!("i2c read: chip not ready after {} ms", bound);
                return Err(Error::Timeout);
            }
            self.clock.sleep_ms(self.poll_interval_ms);
        }
        buf.remove(0);
        log::trace!("i2c read: {}", bytes_to_hex_spaced(&buf));
        Ok(buf)
    }

    fn kind(&self) -> TransportKind {
        TransportKind::I2c
    }

    fn has_ready_signal(&self) -> bool {
        true
    }

    fn is_ready(&mut self) -> Result<bool> {
        let mut status = [0u8; 1];
        self.bus.read(self.address, &mut status)?;
        Ok(status[0] == PN532_I2C_READY)
    }
}
