// pn532-ntag/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::constants::{PN532_ACK, PN532_I2C_READY, PN532_NACK, PN532_PREAMBLE};
use crate::protocol::{Direction, Frame};
use crate::transport::hsu::SerialLink;
use crate::transport::i2c::I2cBus;
use crate::transport::traits::{Transport, TransportKind};
use crate::{Error, Result};

/// Build the information frame the chip would send for `code` + `data`.
pub fn chip_frame(code: u8, data: &[u8]) -> Result<Vec<u8>> {
    let mut payload = Vec::with_capacity(1 + data.len());
    payload.push(code);
    payload.extend_from_slice(data);
    Frame::encode(Direction::ChipToHost, &payload)
}

#[derive(Debug)]
struct MockState {
    sent: Vec<Vec<u8>>,
    reads: VecDeque<Vec<u8>>,
    ready: VecDeque<bool>,
    ready_signal: bool,
    write_failures: usize,
    resets: usize,
    configured: bool,
}

/// Mock transport for unit tests. It records written frames and returns
/// queued reads. Clones share state, so a test can keep one handle while the
/// device owns another.
#[derive(Debug, Clone)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState {
                sent: Vec::new(),
                reads: VecDeque::new(),
                ready: VecDeque::new(),
                ready_signal: true,
                write_failures: 0,
                resets: 0,
                configured: false,
            })),
        }
    }

    /// Queue raw bytes for the next `read`.
    pub fn push_read(&self, bytes: Vec<u8>) {
        self.state.borrow_mut().reads.push_back(bytes);
    }

    pub fn push_ack(&self) {
        self.push_read(PN532_ACK.to_vec());
    }

    pub fn push_nack(&self) {
        self.push_read(PN532_NACK.to_vec());
    }

    /// Queue a chip response frame.
    pub fn push_response(&self, code: u8, data: &[u8]) -> Result<()> {
        let frame = chip_frame(code, data)?;
        self.push_read(frame);
        Ok(())
    }

    /// Queue an ACK followed by a response frame: one full transaction.
    pub fn push_reply(&self, code: u8, data: &[u8]) -> Result<()> {
        self.push_ack();
        self.push_response(code, data)
    }

    /// Script the next `is_ready` answers; once exhausted the mock is ready.
    pub fn push_ready(&self, ready: bool) {
        self.state.borrow_mut().ready.push_back(ready);
    }

    pub fn set_ready_signal(&self, present: bool) {
        self.state.borrow_mut().ready_signal = present;
    }

    /// Make the next `n` writes fail with a transport error.
    pub fn fail_next_writes(&self, n: usize) {
        self.state.borrow_mut().write_failures = n;
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.borrow().sent.clone()
    }

    /// Opcode + parameters of every written frame that decodes as a command.
    pub fn sent_commands(&self) -> Vec<Vec<u8>> {
        self.state
            .borrow()
            .sent
            .iter()
            .filter_map(|raw| Frame::decode(raw).ok())
            .filter(|f| f.direction == Direction::HostToChip)
            .map(|f| f.payload)
            .collect()
    }

    pub fn clear_sent(&self) {
        self.state.borrow_mut().sent.clear();
    }

    pub fn pending_reads(&self) -> usize {
        self.state.borrow().reads.len()
    }

    pub fn resets(&self) -> usize {
        self.state.borrow().resets
    }

    pub fn is_configured(&self) -> bool {
        self.state.borrow().configured
    }
}

impl Transport for MockTransport {
    fn write(&mut self, frame: &[u8], _timeout_ms: u64) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.write_failures > 0 {
            state.write_failures -= 1;
            return Err(Error::Transport("mock write failure".into()));
        }
        state.sent.push(frame.to_vec());
        Ok(())
    }

    fn read(&mut self, len: usize, _timeout_ms: u64) -> Result<Vec<u8>> {
        match self.state.borrow_mut().reads.pop_front() {
            Some(mut bytes) => {
                bytes.truncate(len);
                Ok(bytes)
            }
            None => Err(Error::Timeout),
        }
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Mock
    }

    fn has_ready_signal(&self) -> bool {
        self.state.borrow().ready_signal
    }

    fn is_ready(&mut self) -> Result<bool> {
        Ok(self.state.borrow_mut().ready.pop_front().unwrap_or(true))
    }

    fn reset(&mut self) -> Result<()> {
        // Queued reads survive so tests can seed the whole bring-up up front.
        let mut state = self.state.borrow_mut();
        state.resets += 1;
        state.configured = false;
        Ok(())
    }

    fn set_configured(&mut self, configured: bool) {
        self.state.borrow_mut().configured = configured;
    }
}

#[derive(Debug)]
struct SerialReply {
    bytes: Vec<u8>,
    switch_to: Option<u32>,
}

#[derive(Debug)]
struct SerialState {
    baud: u32,
    chip_baud: u32,
    rx: VecDeque<u8>,
    replies: VecDeque<SerialReply>,
    pending_switch: Option<u32>,
    written: Vec<Vec<u8>>,
    baud_history: Vec<u32>,
}

/// Scripted UART peer standing in for a PN532 in HSU mode.
///
/// Each frame written while the link runs at the chip's baud rate pops the
/// next scripted reply into the receive buffer. Frames written at any other
/// rate are lost. A reply may schedule a chip-side rate change that takes
/// effect when the host echoes the ACK frame.
#[derive(Debug, Clone)]
pub struct MockSerialLink {
    state: Rc<RefCell<SerialState>>,
}

impl MockSerialLink {
    pub fn new(chip_baud: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(SerialState {
                baud: chip_baud,
                chip_baud,
                rx: VecDeque::new(),
                replies: VecDeque::new(),
                pending_switch: None,
                written: Vec::new(),
                baud_history: Vec::new(),
            })),
        }
    }

    /// Raw bytes the chip sends after the next frame it hears.
    pub fn push_reply(&self, bytes: Vec<u8>) {
        self.state.borrow_mut().replies.push_back(SerialReply {
            bytes,
            switch_to: None,
        });
    }

    /// ACK plus response frame for the next command the chip hears.
    pub fn push_command_reply(&self, code: u8, data: &[u8]) -> Result<()> {
        let mut bytes = PN532_ACK.to_vec();
        bytes.extend(chip_frame(code, data)?);
        self.push_reply(bytes);
        Ok(())
    }

    /// Like `push_reply`, then move the chip to `bps` once the host ACKs.
    pub fn push_switching_reply(&self, bytes: Vec<u8>, bps: u32) {
        self.state.borrow_mut().replies.push_back(SerialReply {
            bytes,
            switch_to: Some(bps),
        });
    }

    pub fn written(&self) -> Vec<Vec<u8>> {
        self.state.borrow().written.clone()
    }

    pub fn chip_baud(&self) -> u32 {
        self.state.borrow().chip_baud
    }

    /// Every rate the host set, in order.
    pub fn baud_history(&self) -> Vec<u32> {
        self.state.borrow().baud_history.clone()
    }
}

impl SerialLink for MockSerialLink {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.written.push(data.to_vec());
        if state.baud != state.chip_baud {
            return Ok(());
        }
        if data == PN532_ACK {
            if let Some(bps) = state.pending_switch.take() {
                state.chip_baud = bps;
            }
            return Ok(());
        }
        if data.starts_with(&PN532_PREAMBLE) {
            if let Some(reply) = state.replies.pop_front() {
                state.rx.extend(reply.bytes);
                state.pending_switch = reply.switch_to;
            }
        }
        Ok(())
    }

    fn read_exact(&mut self, buf: &mut [u8], _timeout_ms: u64) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.rx.len() < buf.len() {
            return Err(Error::Timeout);
        }
        for b in buf.iter_mut() {
            *b = state.rx.pop_front().unwrap_or_default();
        }
        Ok(())
    }

    fn set_baud_rate(&mut self, bps: u32) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.baud = bps;
        state.baud_history.push(bps);
        Ok(())
    }

    fn baud_rate(&self) -> u32 {
        self.state.borrow().baud
    }

    fn clear_input(&mut self) -> Result<()> {
        self.state.borrow_mut().rx.clear();
        Ok(())
    }
}

#[derive(Debug, Default)]
struct I2cState {
    reads: VecDeque<Vec<u8>>,
    written: Vec<(u16, Vec<u8>)>,
    read_calls: usize,
}

/// Scripted I2C bus. Each read returns the next queued buffer, zero padded;
/// with nothing queued the chip reports "busy" (status byte 0x00).
#[derive(Debug, Clone, Default)]
pub struct MockI2cBus {
    state: Rc<RefCell<I2cState>>,
}

impl MockI2cBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw read, status byte included.
    pub fn push_read(&self, bytes: Vec<u8>) {
        self.state.borrow_mut().reads.push_back(bytes);
    }

    /// Queue a ready status byte followed by `message`.
    pub fn push_ready_message(&self, message: &[u8]) {
        let mut bytes = vec![PN532_I2C_READY];
        bytes.extend_from_slice(message);
        self.push_read(bytes);
    }

    pub fn written(&self) -> Vec<(u16, Vec<u8>)> {
        self.state.borrow().written.clone()
    }

    pub fn read_calls(&self) -> usize {
        self.state.borrow().read_calls
    }
}

impl I2cBus for MockI2cBus {
    fn write(&mut self, address: u16, data: &[u8]) -> Result<()> {
        self.state.borrow_mut().written.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, _address: u16, buf: &mut [u8]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.read_calls += 1;
        buf.fill(0);
        if let Some(bytes) = state.reads.pop_front() {
            let n = bytes.len().min(buf.len());
            buf[..n].copy_from_slice(&bytes[..n]);
        }
        Ok(())
    }
}
