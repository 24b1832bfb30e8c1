// pn532-ntag/src/device/pins.rs
//! Reset and IRQ lines as seen by the engine.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::Result;

/// Push-pull output, used for the chip's RSTPD_N line.
pub trait OutputLine {
    fn set_high(&mut self) -> Result<()>;
    fn set_low(&mut self) -> Result<()>;
}

/// Level input, used for the chip's active-low P70_IRQ line.
pub trait InputLine {
    fn is_low(&mut self) -> Result<bool>;
}

/// Adapter from `embedded-hal` 1.0 digital pins.
#[cfg(feature = "embedded-hal")]
pub struct HalPin<P>(pub P);

#[cfg(feature = "embedded-hal")]
fn hal_error<E: embedded_hal::digital::Error>(e: E) -> crate::Error {
    crate::Error::Transport(format!("gpio: {:?}", e.kind()))
}

#[cfg(feature = "embedded-hal")]
impl<P: embedded_hal::digital::OutputPin> OutputLine for HalPin<P> {
    fn set_high(&mut self) -> Result<()> {
        self.0.set_high().map_err(hal_error)
    }

    fn set_low(&mut self) -> Result<()> {
        self.0.set_low().map_err(hal_error)
    }
}

#[cfg(feature = "embedded-hal")]
impl<P: embedded_hal::digital::InputPin> InputLine for HalPin<P> {
    fn is_low(&mut self) -> Result<bool> {
        self.0.is_low().map_err(hal_error)
    }
}

/// Output line that records every level it is driven to (`true` = high).
#[derive(Debug, Clone, Default)]
pub struct RecordingLine {
    levels: Rc<RefCell<Vec<bool>>>,
}

impl RecordingLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn levels(&self) -> Vec<bool> {
        self.levels.borrow().clone()
    }
}

impl OutputLine for RecordingLine {
    fn set_high(&mut self) -> Result<()> {
        self.levels.borrow_mut().push(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.levels.borrow_mut().push(false);
        Ok(())
    }
}

/// Input line replaying scripted levels; low (asserted) once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLine {
    lows: Rc<RefCell<VecDeque<bool>>>,
    samples: Rc<RefCell<usize>>,
}

impl ScriptedLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `n` high (not ready) samples.
    pub fn push_high(&self, n: usize) {
        let mut lows = self.lows.borrow_mut();
        lows.extend(std::iter::repeat(false).take(n));
    }

    pub fn push_low(&self) {
        self.lows.borrow_mut().push_back(true);
    }

    /// Number of times the line was sampled.
    pub fn samples(&self) -> usize {
        *self.samples.borrow()
    }
}

impl InputLine for ScriptedLine {
    fn is_low(&mut self) -> Result<bool> {
        *self.samples.borrow_mut() += 1;
        Ok(self.lows.borrow_mut().pop_front().unwrap_or(true))
    }
}
