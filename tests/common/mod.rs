//! Shared test fixtures: recording pins and a controller built from them.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use claw_motion::{ClawConfig, ClawController, ClawPins};
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

#[derive(Default)]
struct PinLog {
    high: Cell<bool>,
    rising_edges: Cell<u32>,
    writes: Cell<u32>,
    failing: Cell<bool>,
}

/// Pin that records its level and counts rising edges.
///
/// Clones share state, so a test keeps one handle while the controller owns
/// the other.
#[derive(Clone, Default)]
pub struct SimPin {
    log: Rc<PinLog>,
}

impl SimPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current physical level.
    pub fn is_set_high(&self) -> bool {
        self.log.high.get()
    }

    /// Drive the level seen by `InputPin` reads.
    pub fn drive(&self, high: bool) {
        self.log.high.set(high);
    }

    pub fn rising_edges(&self) -> u32 {
        self.log.rising_edges.get()
    }

    pub fn writes(&self) -> u32 {
        self.log.writes.get()
    }

    /// Make every subsequent operation fail.
    pub fn set_failing(&self, failing: bool) {
        self.log.failing.set(failing);
    }

    fn write(&mut self, high: bool) -> Result<(), ErrorKind> {
        if self.log.failing.get() {
            return Err(ErrorKind::Other);
        }
        if high && !self.log.high.get() {
            self.log.rising_edges.set(self.log.rising_edges.get() + 1);
        }
        self.log.high.set(high);
        self.log.writes.set(self.log.writes.get() + 1);
        Ok(())
    }
}

impl ErrorType for SimPin {
    type Error = ErrorKind;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.log.failing.get() {
            return Err(ErrorKind::Other);
        }
        Ok(self.log.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

pub type SimController = ClawController<SimPin, SimPin, SimPin, SimPin, SimPin, SimPin, SimPin>;

/// Test-side handles to every line of a [`SimController`].
#[derive(Clone)]
pub struct Rig {
    pub step: SimPin,
    pub dir: SimPin,
    pub enable: SimPin,
    pub enable_indicator: SimPin,
    pub estop: SimPin,
    pub fault_indicator: SimPin,
    pub heartbeat: SimPin,
}

impl Rig {
    pub fn new() -> Self {
        let rig = Self {
            step: SimPin::new(),
            dir: SimPin::new(),
            enable: SimPin::new(),
            enable_indicator: SimPin::new(),
            estop: SimPin::new(),
            fault_indicator: SimPin::new(),
            heartbeat: SimPin::new(),
        };
        // Estop is active-low by default; start released
        rig.estop.drive(true);
        rig
    }

    pub fn pins(&self) -> ClawPins<SimPin, SimPin, SimPin, SimPin, SimPin, SimPin, SimPin> {
        ClawPins {
            step: self.step.clone(),
            dir: self.dir.clone(),
            enable: self.enable.clone(),
            enable_indicator: self.enable_indicator.clone(),
            estop: self.estop.clone(),
            fault_indicator: self.fault_indicator.clone(),
            heartbeat: self.heartbeat.clone(),
        }
    }

    /// Press (`true`) or release the active-low estop button.
    pub fn press_estop(&self, pressed: bool) {
        self.estop.drive(!pressed);
    }
}

/// Controller on default configuration plus its test handles.
pub fn controller() -> (SimController, Rig) {
    controller_with(ClawConfig::default())
}

pub fn controller_with(config: ClawConfig) -> (SimController, Rig) {
    let rig = Rig::new();
    let claw = ClawController::new(config, rig.pins()).expect("controller should build");
    (claw, rig)
}

/// Run `n` fine ticks.
pub fn run_fine(claw: &mut SimController, n: u32) {
    for _ in 0..n {
        claw.on_fine_tick().expect("fine tick");
    }
}

/// Run `n` coarse ticks.
pub fn run_coarse(claw: &mut SimController, n: u32) {
    for _ in 0..n {
        claw.on_coarse_tick().expect("coarse tick");
    }
}
