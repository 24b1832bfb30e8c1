// pn532-ntag/src/transport/hsu.rs
//! PN532 over its high-speed UART (HSU).
//!
//! The chip sleeps until it sees a long 0x55 preamble, so every write issued
//! before SAM configuration is preceded by a wake-up sequence. HSU has no
//! ready line of its own: the blocking read paces the engine.

use crate::constants::{
    PN532_ACK, PN532_HSU_WAKEUP, PN532_NACK, PN532_PREAMBLE, PN532_HEADER_LEN,
};
use crate::protocol::checksum::length_ok;
use crate::protocol::codec::encode_command_frame;
use crate::protocol::{check_ack, Command};
use crate::transport::traits::{Transport, TransportKind};
use crate::types::BaudRate;
use crate::utils::{bytes_to_hex_spaced, Deadline, SharedClock, SystemClock};
use crate::{Error, Result};

/// Byte-level serial port the HSU transport drives.
pub trait SerialLink {
    fn write_all(&mut self, data: &[u8]) -> Result<()>;

    /// Fill `buf` completely or fail with [`Error::Timeout`]. `0` waits forever.
    fn read_exact(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<()>;

    fn set_baud_rate(&mut self, bps: u32) -> Result<()>;

    fn baud_rate(&self) -> u32;

    /// Drop anything sitting in the receive buffer.
    fn clear_input(&mut self) -> Result<()>;

    /// Block until written bytes have left the port.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Settings of the HSU link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsuConfig {
    /// Rate to run at once bring-up completes
    pub baud: BaudRate,
    /// Bound on each firmware probe and handshake read
    pub probe_timeout_ms: u64,
    /// Pause between the host ACK and switching the local UART
    pub baud_switch_delay_ms: u64,
}

impl HsuConfig {
    /// Request `bps`; unsupported rates fall back to 115200 with a warning.
    pub fn with_baud(bps: u32) -> Self {
        Self {
            baud: BaudRate::from_bps_or_default(bps),
            ..Self::default()
        }
    }
}

impl Default for HsuConfig {
    fn default() -> Self {
        Self {
            baud: BaudRate::DEFAULT,
            probe_timeout_ms: 100,
            baud_switch_delay_ms: 20,
        }
    }
}

/// Literal answer to SetSerialBaudRate, sent before the chip switches.
pub const SET_BAUD_RATE_RESPONSE: [u8; 9] = [0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD5, 0x11, 0x1A, 0x00];

pub struct HsuTransport<L: SerialLink> {
    link: L,
    config: HsuConfig,
    used: BaudRate,
    configured: bool,
    clock: SharedClock,
}

impl<L: SerialLink> HsuTransport<L> {
    pub fn new(link: L, config: HsuConfig) -> Self {
        Self {
            link,
            config,
            used: BaudRate::DEFAULT,
            configured: false,
            clock: SystemClock::shared(),
        }
    }

    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    /// Rate the link is currently running at.
    pub fn baud_rate(&self) -> BaudRate {
        self.used
    }

    pub fn wanted_baud_rate(&self) -> BaudRate {
        self.config.baud
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn into_inner(self) -> L {
        self.link
    }

    fn set_local_rate(&mut self, rate: BaudRate) -> Result<()> {
        self.link.set_baud_rate(rate.bps())?;
        self.used = rate;
        Ok(())
    }

    /// Send GetFirmwareVersion and expect the chip's ACK.
    fn probe(&mut self) -> Result<()> {
        let frame = encode_command_frame(&Command::GetFirmwareVersion)?;
        self.write(&frame, self.config.probe_timeout_ms)?;
        let mut head = [0u8; 6];
        self.link.read_exact(&mut head, self.config.probe_timeout_ms)?;
        // ACK-shaped: LEN 00, LCS FF
        if head[3] == 0x00 && head[4] == 0xFF {
            Ok(())
        } else {
            Err(Error::AckMismatch(bytes_to_hex_spaced(&head)))
        }
    }

    fn negotiate_baud_rate(&mut self) -> Result<()> {
        let wanted = self.config.baud;
        let cmd = Command::SetSerialBaudRate { rate: wanted };
        let frame = encode_command_frame(&cmd)?;
        self.write(&frame, self.config.probe_timeout_ms)?;

        let ack = self.read(PN532_ACK.len(), self.config.probe_timeout_ms)?;
        check_ack(&ack)?;

        let resp = self.read(SET_BAUD_RATE_RESPONSE.len(), self.config.probe_timeout_ms)?;
        if resp != SET_BAUD_RATE_RESPONSE {
            return Err(Error::HandshakeMismatch(format!(
                "unexpected SetSerialBaudRate response [{}]",
                bytes_to_hex_spaced(&resp)
            )));
        }

        // The chip switches once it sees our ACK.
        self.write(&PN532_ACK, self.config.probe_timeout_ms)?;
        self.clock.sleep_ms(self.config.baud_switch_delay_ms);
        self.set_local_rate(wanted)?;
        log::info!("HSU link switched to {} bps", wanted.bps());
        Ok(())
    }
}

impl<L: SerialLink> Transport for HsuTransport<L> {
    fn write(&mut self, frame: &[u8], _timeout_ms: u64) -> Result<()> {
        if !self.configured {
            self.wake_up()?;
        }
        self.link.clear_input()?;
        log::trace!("hsu write: {}", bytes_to_hex_spaced(frame));
        self.link.write_all(frame)?;
        self.link.flush()
    }

    fn read(&mut self, len: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        if len < PN532_ACK.len() {
            return Err(Error::InvalidArgument(format!(
                "read buffer of {} bytes cannot hold a frame header",
                len
            )));
        }
        let deadline = Deadline::after(&*self.clock, timeout_ms);

        let mut out = vec![0u8; PN532_ACK.len()];
        self.link.read_exact(&mut out, timeout_ms)?;
        if out == PN532_ACK || out == PN532_NACK {
            log::trace!("hsu read: {}", bytes_to_hex_spaced(&out));
            return Ok(out);
        }
        if out[..3] != PN532_PREAMBLE {
            return Err(Error::FrameFormat(format!(
                "invalid preamble [{}]",
                bytes_to_hex_spaced(&out)
            )));
        }
        let frame_len = out[3];
        if !length_ok(frame_len, out[4]) {
            return Err(Error::ChecksumMismatch {
                expected: 0u8.wrapping_sub(frame_len),
                actual: out[4],
            });
        }

        // Rest of the data, DCS and postamble. The header already holds TFI.
        let remaining = frame_len as usize + 1;
        let room = len - PN532_ACK.len();
        if remaining > room {
            log::warn!(
                "hsu frame of {} bytes exceeds {} byte buffer, truncating",
                PN532_HEADER_LEN + 1 + remaining,
                len
            );
        }
        let mut rest = vec![0u8; remaining.min(room)];
        if !rest.is_empty() {
            let left = match deadline.remaining_ms(&*self.clock) {
                Some(0) => return Err(Error::Timeout),
                Some(ms) => ms,
                None => 0,
            };
            self.link.read_exact(&mut rest, left)?;
        }
        out.extend_from_slice(&rest);
        log::trace!("hsu read: {}", bytes_to_hex_spaced(&out));
        Ok(out)
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Hsu
    }

    fn wake_up(&mut self) -> Result<()> {
        self.link.write_all(&PN532_HSU_WAKEUP)
    }

    fn reset(&mut self) -> Result<()> {
        self.configured = false;
        Ok(())
    }

    fn init_io(&mut self) -> Result<()> {
        self.set_local_rate(BaudRate::DEFAULT)?;
        let first = match self.probe() {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        let wanted = self.config.baud;
        if self.used == wanted {
            return Err(first);
        }
        log::debug!(
            "no answer at {} bps ({}), trying {} bps",
            self.used.bps(),
            first,
            wanted.bps()
        );
        self.set_local_rate(wanted)?;
        self.probe()
    }

    fn init_extra(&mut self) -> Result<()> {
        if self.used == self.config.baud {
            return Ok(());
        }
        self.negotiate_baud_rate()
    }

    fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }
}
