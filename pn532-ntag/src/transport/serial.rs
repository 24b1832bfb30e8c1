// pn532-ntag/src/transport/serial.rs
//! Native serial port backend for [`HsuTransport`](super::hsu::HsuTransport).

use std::io::{ErrorKind as IoErrorKind, Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, DataBits, FlowControl, Parity, StopBits};

use crate::transport::hsu::SerialLink;
use crate::utils::ms;
use crate::{Error, Result};

/// Slice a `0` ("forever") read is split into.
const UNBOUNDED_READ_SLICE_MS: u64 = 1000;

pub struct NativeSerialLink {
    port: Box<dyn serialport::SerialPort>,
    name: String,
    baud_rate: u32,
}

impl NativeSerialLink {
    /// Open `path` at `baud_rate`, 8N1 without flow control.
    pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(path, baud_rate)
            .timeout(ms(UNBOUNDED_READ_SLICE_MS))
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .open()?;
        log::debug!("opened {} at {} bps", path, baud_rate);
        Ok(Self {
            port,
            name: path.to_string(),
            baud_rate,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// List serial ports visible to the OS.
    pub fn available_ports() -> Result<Vec<String>> {
        Ok(serialport::available_ports()?
            .into_iter()
            .map(|p| p.port_name)
            .collect())
    }

    fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.port.set_timeout(timeout)?;
        Ok(())
    }
}

impl SerialLink for NativeSerialLink {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        Ok(())
    }

    fn read_exact(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<()> {
        let unbounded = timeout_ms == 0;
        let slice = if unbounded {
            UNBOUNDED_READ_SLICE_MS
        } else {
            timeout_ms
        };
        self.set_timeout(ms(slice))?;

        let mut filled = 0;
        while filled < buf.len() {
            match self.port.read(&mut buf[filled..]) {
                Ok(0) => return Err(Error::Transport(format!("{} closed", self.name))),
                Ok(n) => filled += n,
                Err(e) if e.kind() == IoErrorKind::TimedOut => {
                    if !unbounded {
                        return Err(Error::Timeout);
                    }
                }
                Err(e) if e.kind() == IoErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn set_baud_rate(&mut self, bps: u32) -> Result<()> {
        self.port.set_baud_rate(bps)?;
        self.baud_rate = bps;
        Ok(())
    }

    fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    fn clear_input(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.port.flush()?;
        Ok(())
    }
}
