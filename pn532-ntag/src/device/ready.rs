// pn532-ntag/src/device/ready.rs
//! Waiting for the chip to have something to say.
//!
//! Every strategy returns `Ok(())` only once the chip signalled ready, or
//! [`Error::Timeout`] when the bound elapses. A timeout of `0` waits forever.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TrySendError};

use crate::device::config;
use crate::device::pins::InputLine;
use crate::transport::Transport;
use crate::utils::{ms, Clock, Deadline};
use crate::{Error, Result};

/// Sending half of the IRQ event slot. Cheap to clone; `notify` never blocks,
/// so it can run from an interrupt or GPIO callback thread.
#[derive(Debug, Clone)]
pub struct IrqNotifier {
    tx: SyncSender<()>,
}

impl IrqNotifier {
    /// Record a falling edge. Extra edges while one is pending are dropped.
    pub fn notify(&self) {
        match self.tx.try_send(()) {
            Ok(()) | Err(TrySendError::Full(())) => {}
            Err(TrySendError::Disconnected(())) => {
                log::trace!("irq edge after the waiter was dropped");
            }
        }
    }
}

/// Receiving half of the IRQ event slot, owned by the engine.
#[derive(Debug)]
pub struct IrqReceiver {
    rx: Receiver<()>,
}

impl IrqReceiver {
    fn wait(&self, timeout_ms: u64) -> Result<()> {
        if timeout_ms == 0 {
            return self
                .rx
                .recv()
                .map_err(|_| Error::Transport("irq notifier dropped".into()));
        }
        match self.rx.recv_timeout(ms(timeout_ms)) {
            Ok(()) => Ok(()),
            Err(RecvTimeoutError::Timeout) => Err(Error::Timeout),
            Err(RecvTimeoutError::Disconnected) => {
                Err(Error::Transport("irq notifier dropped".into()))
            }
        }
    }

    /// Drop any edge left over from before a reset.
    fn drain(&self) {
        while self.rx.try_recv().is_ok() {}
    }
}

/// Single-slot IRQ event channel.
pub fn irq_channel() -> (IrqNotifier, IrqReceiver) {
    let (tx, rx) = mpsc::sync_channel(1);
    (IrqNotifier { tx }, IrqReceiver { rx })
}

/// How the engine learns a response is waiting.
pub enum ReadyStrategy {
    /// Trust the transport's blocking read (HSU without an IRQ line).
    Deferred,
    /// Poll [`Transport::is_ready`] (I2C status byte).
    TransportStatus,
    /// Sample the IRQ line; low means ready.
    Poll(Box<dyn InputLine>),
    /// Block on edges delivered through [`irq_channel`].
    Interrupt(IrqReceiver),
}

impl std::fmt::Debug for ReadyStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Deferred => "Deferred",
            Self::TransportStatus => "TransportStatus",
            Self::Poll(_) => "Poll",
            Self::Interrupt(_) => "Interrupt",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct ReadyWaiter {
    strategy: ReadyStrategy,
    poll_interval_ms: u64,
    settle_ms: u64,
}

impl ReadyWaiter {
    pub fn new(strategy: ReadyStrategy) -> Self {
        Self {
            strategy,
            poll_interval_ms: config::GPIO_POLL_INTERVAL_MS,
            settle_ms: config::GPIO_SETTLE_MS,
        }
    }

    pub fn with_timing(mut self, poll_interval_ms: u64, settle_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self.settle_ms = settle_ms;
        self
    }

    pub fn strategy(&self) -> &ReadyStrategy {
        &self.strategy
    }

    /// Block until the chip is ready or `timeout_ms` elapses.
    pub fn wait(
        &mut self,
        transport: &mut dyn Transport,
        clock: &dyn Clock,
        timeout_ms: u64,
    ) -> Result<()> {
        match &mut self.strategy {
            ReadyStrategy::Deferred => Ok(()),
            ReadyStrategy::TransportStatus => {
                poll_until(clock, timeout_ms, self.poll_interval_ms, || transport.is_ready())
            }
            ReadyStrategy::Poll(line) => {
                clock.sleep_ms(self.settle_ms);
                poll_until(clock, timeout_ms, self.poll_interval_ms, || line.is_low())
            }
            ReadyStrategy::Interrupt(rx) => rx.wait(timeout_ms),
        }
    }

    /// Forget pending ready events; called whenever the chip is reset.
    pub fn clear(&mut self) {
        if let ReadyStrategy::Interrupt(rx) = &self.strategy {
            rx.drain();
        }
    }
}

fn poll_until<F>(clock: &dyn Clock, timeout_ms: u64, interval_ms: u64, mut ready: F) -> Result<()>
where
    F: FnMut() -> Result<bool>,
{
    let deadline = Deadline::after(clock, timeout_ms);
    loop {
        if ready()? {
            return Ok(());
        }
        if deadline.is_expired(clock) {
            return Err(Error::Timeout);
        }
        clock.sleep_ms(interval_ms);
    }
}
