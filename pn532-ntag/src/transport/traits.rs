// pn532-ntag/src/transport/traits.rs

use crate::Result;

/// Physical link a transport drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// High-speed UART
    Hsu,
    I2c,
    Mock,
}

/// Transport trait abstracts the byte link away from the protocol engine.
///
/// Writes carry complete frames (preamble through postamble). Reads return
/// one chip message: the 6-byte ACK/NACK or an information frame, cut short
/// when it is longer than `len`.
pub trait Transport {
    /// Write a complete frame.
    fn write(&mut self, frame: &[u8], timeout_ms: u64) -> Result<()>;

    /// Read one message of at most `len` bytes.
    fn read(&mut self, len: usize, timeout_ms: u64) -> Result<Vec<u8>>;

    fn kind(&self) -> TransportKind;

    /// Whether `is_ready` reflects the chip (I2C status byte). Transports
    /// without one leave readiness to their blocking `read`.
    fn has_ready_signal(&self) -> bool {
        false
    }

    /// Poll the chip's ready status. Only meaningful when `has_ready_signal`.
    fn is_ready(&mut self) -> Result<bool> {
        Ok(true)
    }

    /// Bring the chip out of power-down before talking to it.
    fn wake_up(&mut self) -> Result<()> {
        Ok(())
    }

    /// Forget link state tied to the chip's configuration. Called by the
    /// engine whenever it resets the chip.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Open the link and make first contact, before SAM configuration.
    fn init_io(&mut self) -> Result<()> {
        Ok(())
    }

    /// Final link setup once SAM configuration is done (HSU baud switch).
    fn init_extra(&mut self) -> Result<()> {
        Ok(())
    }

    /// Told by the engine when SAM configuration completes or is lost.
    fn set_configured(&mut self, _configured: bool) {}
}
