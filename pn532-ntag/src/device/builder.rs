// pn532-ntag/src/device/builder.rs

use crate::device::config::DeviceConfig;
use crate::device::handle::{Device, Uninitialized};
use crate::device::pins::OutputLine;
use crate::device::ready::{ReadyStrategy, ReadyWaiter};
use crate::transport::Transport;
use crate::utils::{SharedClock, SystemClock};
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    reset_line: Option<Box<dyn OutputLine>>,
    ready: Option<ReadyStrategy>,
    clock: Option<SharedClock>,
    config: DeviceConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Wire the chip's RSTPD_N line; without one, reset is link-level only.
    pub fn with_reset_line(mut self, line: Box<dyn OutputLine>) -> Self {
        self.reset_line = Some(line);
        self
    }

    /// Override the ready strategy. Defaults to the transport's status
    /// signal when it has one, otherwise to its blocking read.
    pub fn with_ready(mut self, strategy: ReadyStrategy) -> Self {
        self.ready = Some(strategy);
        self
    }

    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_init_attempts(mut self, attempts: u32) -> Self {
        self.config.init_attempts = attempts;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        let transport = self
            .transport
            .ok_or_else(|| Error::Transport("no transport configured".into()))?;
        let strategy = match self.ready {
            Some(s) => s,
            None if transport.has_ready_signal() => ReadyStrategy::TransportStatus,
            None => ReadyStrategy::Deferred,
        };
        let ready = ReadyWaiter::new(strategy)
            .with_timing(self.config.poll_interval_ms, self.config.poll_settle_ms);
        let clock = self.clock.unwrap_or_else(SystemClock::shared);
        Ok(Device::from_parts(
            transport,
            ready,
            self.reset_line,
            clock,
            self.config,
        ))
    }
}
