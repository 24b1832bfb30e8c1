// pn532-ntag/src/device/handle.rs

use std::marker::PhantomData;

use crate::device::config::{self, DeviceConfig};
use crate::device::pins::OutputLine;
use crate::device::ready::{ReadyStrategy, ReadyWaiter};
use crate::protocol::codec::{self, DecodedResponse};
use crate::protocol::{check_ack, Command, ExchangeReply, Response, RfConfigItem, SamMode, TargetList};
use crate::transport::Transport;
use crate::types::{FirmwareVersion, TargetType};
use crate::utils::SharedClock;
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Target number used before any InListPassiveTarget succeeded.
const DEFAULT_TARGET: u8 = 1;

/// Device handle that enforces initialization state at compile time.
///
/// One transaction is in flight at a time: every method takes `&mut self`
/// and returns only after the chip's response (or an error) was read.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    ready: ReadyWaiter,
    reset_line: Option<Box<dyn OutputLine>>,
    clock: SharedClock,
    config: DeviceConfig,
    target: u8,
    _state: PhantomData<State>,
}

impl<S> Device<S> {
    fn into_state<T>(self) -> Device<T> {
        Device {
            transport: self.transport,
            ready: self.ready,
            reset_line: self.reset_line,
            clock: self.clock,
            config: self.config,
            target: self.target,
            _state: PhantomData,
        }
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    pub fn transport_kind(&self) -> crate::transport::TransportKind {
        self.transport.kind()
    }

    /// Pulse RSTPD_N when a reset line is wired, then drop link state.
    fn hard_reset(&mut self) -> Result<()> {
        if let Some(line) = self.reset_line.as_mut() {
            log::debug!("resetting PN532");
            line.set_low()?;
            self.clock.sleep_ms(self.config.reset_low_ms);
            line.set_high()?;
            self.clock.sleep_ms(self.config.reset_settle_ms);
        }
        self.transport.set_configured(false);
        self.transport.reset()
    }

    /// Write `cmd` and require the chip's ACK.
    fn send_command(&mut self, cmd: &Command) -> Result<()> {
        let frame = codec::encode_command_frame(cmd)?;
        self.transport.write(&frame, self.config.write_timeout_ms)?;
        let wait = self.config.ready_timeout_ms;
        self.wait_ready(wait)?;
        let raw = self.transport.read(6, self.read_timeout(wait))?;
        check_ack(&raw).inspect_err(|e| {
            log::debug!("command {:#04x} not acknowledged: {}", cmd.command_code(), e);
        })
    }

    /// Wait for and decode the response to `cmd`, reading at most `max_len`
    /// bytes. A frame cut short by `max_len` is accepted unverified.
    fn read_response(
        &mut self,
        cmd: &Command,
        max_len: usize,
        timeout_ms: u64,
    ) -> Result<DecodedResponse> {
        self.wait_ready(timeout_ms)?;
        let raw = self.transport.read(max_len, self.read_timeout(timeout_ms))?;
        let decoded = codec::decode_response_frame(cmd.command_code(), &raw)?;
        if decoded.truncated {
            log::debug!(
                "response to {:#04x} truncated at {} bytes",
                cmd.command_code(),
                raw.len()
            );
        }
        Ok(decoded)
    }

    fn transact(&mut self, cmd: Command, max_len: usize, timeout_ms: u64) -> Result<Response> {
        self.send_command(&cmd)?;
        Ok(self.read_response(&cmd, max_len, timeout_ms)?.response)
    }

    fn wait_ready(&mut self, timeout_ms: u64) -> Result<()> {
        self.ready
            .wait(&mut *self.transport, &*self.clock, timeout_ms)
    }

    /// Without a ready signal the read itself has to span the wait.
    fn read_timeout(&self, wait_ms: u64) -> u64 {
        match self.ready.strategy() {
            ReadyStrategy::Deferred => wait_ms,
            _ => self.config.read_timeout_ms,
        }
    }

    fn sam_configuration(&mut self) -> Result<()> {
        let cmd = Command::SamConfiguration {
            mode: SamMode::Normal,
            timeout: config::SAM_TIMEOUT,
            use_irq: true,
        };
        let wait = self.config.sam_ready_timeout_ms;
        self.transact(cmd, config::STATUS_RESPONSE_LEN, wait)?;
        Ok(())
    }

    fn bring_up(&mut self) -> Result<()> {
        self.hard_reset()?;
        self.transport.init_io()?;
        self.ready.clear();
        self.sam_configuration()?;
        self.transport.set_configured(true);
        self.transport.init_extra()
    }
}

impl Device<Uninitialized> {
    pub(crate) fn from_parts(
        transport: Box<dyn Transport>,
        ready: ReadyWaiter,
        reset_line: Option<Box<dyn OutputLine>>,
        clock: SharedClock,
        config: DeviceConfig,
    ) -> Self {
        Self {
            transport,
            ready,
            reset_line,
            clock,
            config,
            target: DEFAULT_TARGET,
            _state: PhantomData,
        }
    }

    /// Create a Device from an existing Transport instance with default
    /// settings. The ready strategy follows the transport's capabilities.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Result<Self> {
        crate::device::DeviceBuilder::new()
            .with_transport(transport)
            .build_uninitialized()
    }

    /// Run the bring-up sequence: hard reset, link bring-up, SAM
    /// configuration (normal mode, IRQ) and the post-SAM link step.
    /// Retried as a whole `config.init_attempts` times.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let attempts = self.config.init_attempts;
        self.initialize_with_retries(attempts)
    }

    pub fn initialize_with_retries(mut self, attempts: u32) -> Result<Device<Initialized>> {
        let attempts = attempts.max(1);
        let mut last = None;
        for attempt in 1..=attempts {
            match self.bring_up() {
                Ok(()) => {
                    log::info!("PN532 initialized ({:?})", self.transport.kind());
                    return Ok(self.into_state());
                }
                Err(e) => {
                    log::warn!("bring-up attempt {}/{} failed: {}", attempt, attempts, e);
                    last = Some(e);
                }
            }
        }
        Err(last.unwrap_or(Error::Timeout))
    }
}

impl Device<Initialized> {
    /// Hard-reset the chip. SAM configuration is lost, so the device has to
    /// be initialized again.
    pub fn reset(mut self) -> Result<Device<Uninitialized>> {
        self.hard_reset()?;
        self.ready.clear();
        self.target = DEFAULT_TARGET;
        Ok(self.into_state())
    }

    /// Execute a command and return the parsed response.
    pub fn execute(&mut self, cmd: Command, max_len: usize, timeout_ms: u64) -> Result<Response> {
        self.transact(cmd, max_len, timeout_ms)
    }

    /// Send a command that only expects the chip's ACK.
    pub fn execute_ack_only(&mut self, cmd: Command) -> Result<()> {
        self.send_command(&cmd)
    }

    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        let wait = self.config.sam_ready_timeout_ms;
        match self.transact(Command::GetFirmwareVersion, config::FIRMWARE_RESPONSE_LEN, wait)? {
            Response::FirmwareVersion(v) => Ok(v),
            other => Err(unexpected(0x03, &other)),
        }
    }

    /// MxRtyPassiveActivation: how often InListPassiveTarget retries
    /// before reporting no target (0xFF = forever).
    pub fn set_passive_activation_retries(&mut self, retries: u8) -> Result<()> {
        self.send_command(&Command::RfConfiguration(RfConfigItem::MaxRetries {
            atr: 0xFF,
            psl: 0x01,
            passive_activation: retries,
        }))
    }

    /// Send an RFConfiguration item and wait for its (empty) answer.
    pub fn rf_configuration(&mut self, item: RfConfigItem) -> Result<()> {
        let wait = self.config.ready_timeout_ms;
        self.transact(Command::RfConfiguration(item), config::STATUS_RESPONSE_LEN, wait)?;
        Ok(())
    }

    /// Poll until a target of `target_type` enters the field. Returns the
    /// number of targets the chip reported. `timeout_ms = 0` waits forever.
    pub fn wait_for_card(&mut self, target_type: TargetType, timeout_ms: u64) -> Result<u8> {
        let cmd = Command::InAutoPoll {
            polls: 0xFF,
            period: 0x01,
            target_type,
        };
        match self.transact(cmd, config::AUTO_POLL_RESPONSE_LEN, timeout_ms)? {
            Response::InAutoPoll { targets } => Ok(targets),
            other => Err(unexpected(0x61, &other)),
        }
    }

    /// InListPassiveTarget for one target. On success the chip-assigned
    /// target number is remembered for later exchanges.
    pub fn list_passive_target(
        &mut self,
        target_type: TargetType,
        timeout_ms: u64,
    ) -> Result<TargetList> {
        let cmd = Command::InListPassiveTarget {
            max_targets: 1,
            target_type,
        };
        let list = match self.transact(cmd, config::LIST_TARGET_RESPONSE_LEN, timeout_ms)? {
            Response::InListPassiveTarget(list) => list,
            other => return Err(unexpected(0x4B, &other)),
        };
        if let Some(t) = &list.first {
            self.target = t.target;
        }
        Ok(list)
    }

    /// Target number InDataExchange currently addresses.
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Relay `data` to the listed target. The status byte is returned
    /// unchecked; see [`ExchangeReply::check`].
    pub fn in_data_exchange(
        &mut self,
        data: &[u8],
        max_len: usize,
        timeout_ms: u64,
    ) -> Result<ExchangeReply> {
        let cmd = Command::InDataExchange {
            target: self.target,
            data: data.to_vec(),
        };
        match self.transact(cmd, max_len, timeout_ms)? {
            Response::InDataExchange(reply) => Ok(reply),
            other => Err(unexpected(0x41, &other)),
        }
    }

    /// Send raw bytes into the field, bypassing the chip's protocol logic.
    pub fn in_communicate_thru(
        &mut self,
        data: &[u8],
        max_len: usize,
        timeout_ms: u64,
    ) -> Result<ExchangeReply> {
        let cmd = Command::InCommunicateThru {
            data: data.to_vec(),
        };
        match self.transact(cmd, max_len, timeout_ms)? {
            Response::InCommunicateThru(reply) => Ok(reply),
            other => Err(unexpected(0x43, &other)),
        }
    }

    /// InATR towards `target`; the reply is returned as read.
    pub fn in_atr(&mut self, target: u8, max_len: usize, timeout_ms: u64) -> Result<ExchangeReply> {
        match self.transact(Command::InAtr { target }, max_len, timeout_ms)? {
            Response::InAtr(reply) => Ok(reply),
            other => Err(unexpected(0x51, &other)),
        }
    }
}

fn unexpected(expected: u8, got: &Response) -> Error {
    Error::FrameFormat(format!(
        "expected response {:#04x}, decoded {:?}",
        expected, got
    ))
}
