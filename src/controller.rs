//! Claw controller: owns the stepper entity and every I/O component.
//!
//! All mutation happens through `&mut self` on the main loop. The timer
//! interrupt only touches the [`TickSource`], so no locking is needed.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::command::StatusReport;
use crate::config::{validate_config, ClawConfig};
use crate::error::{MotorError, Result};
use crate::indicator::Heartbeat;
use crate::motion::{PulsePhase, StepGenerator};
use crate::motor::{EnableGate, EstopInterlock, EstopStatus, Snapshot, StepperState};
use crate::tick::TickSource;

/// Hardware lines used by the controller.
pub struct ClawPins<STEP, DIR, EN, ELED, ESTOP, FLED, HB> {
    /// Step pulse output.
    pub step: STEP,
    /// Direction output.
    pub dir: DIR,
    /// Driver enable output.
    pub enable: EN,
    /// Enable indicator LED.
    pub enable_indicator: ELED,
    /// Estop input.
    pub estop: ESTOP,
    /// Fault indicator LED.
    pub fault_indicator: FLED,
    /// Heartbeat LED.
    pub heartbeat: HB,
}

/// Work done by one [`ClawController::service`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Serviced {
    /// Interlock status, if a coarse tick was processed.
    pub coarse: Option<EstopStatus>,
    /// Whether a fine tick was processed.
    pub fine: bool,
}

/// Single-axis claw controller.
pub struct ClawController<STEP, DIR, EN, ELED, ESTOP, FLED, HB>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    ELED: OutputPin,
    ESTOP: InputPin,
    FLED: OutputPin,
    HB: OutputPin,
{
    state: StepperState,
    generator: StepGenerator<STEP, DIR>,
    gate: EnableGate<EN, ELED>,
    interlock: EstopInterlock<ESTOP, FLED>,
    heartbeat: Heartbeat<HB>,
    config: ClawConfig,
}

impl<STEP, DIR, EN, ELED, ESTOP, FLED, HB> ClawController<STEP, DIR, EN, ELED, ESTOP, FLED, HB>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    ELED: OutputPin,
    ESTOP: InputPin,
    FLED: OutputPin,
    HB: OutputPin,
{
    /// Validate `config`, take ownership of the pins, and drive every line to
    /// its safe level.
    ///
    /// Lines are initialized in a fixed order: driver enable first, then
    /// step/direction, then the indicators.
    ///
    /// # Errors
    ///
    /// Returns a configuration error, or the pin error of the first line that
    /// could not be driven.
    pub fn new(
        config: ClawConfig,
        pins: ClawPins<STEP, DIR, EN, ELED, ESTOP, FLED, HB>,
    ) -> Result<Self> {
        validate_config(&config)?;

        let mut controller = Self {
            state: StepperState::new(config.limits, config.timing.default_period, config.timing.min_period),
            generator: StepGenerator::new(pins.step, pins.dir, config.motor.invert_direction),
            gate: EnableGate::new(pins.enable, pins.enable_indicator, &config.motor),
            interlock: EstopInterlock::new(pins.estop, pins.fault_indicator, &config.interlock),
            heartbeat: Heartbeat::new(pins.heartbeat, &config.indicator),
            config,
        };

        controller.gate.set_enabled(&mut controller.state, false)?;
        controller.generator.init()?;
        controller.interlock.init()?;
        controller.heartbeat.init()?;

        info!(
            "claw controller ready, range [{}, {}]",
            controller.config.limits.min_position,
            controller.config.limits.max_position
        );
        Ok(controller)
    }

    /// Reset position and pacing period; motion stops and the driver is disabled.
    ///
    /// # Errors
    ///
    /// Validation errors leave the state unchanged.
    pub fn initialize(&mut self, initial_position: i64, pacing_period: u32) -> Result<()> {
        self.state.initialize(initial_position, pacing_period)?;
        self.gate.set_enabled(&mut self.state, false)?;
        Ok(())
    }

    /// Set the target position and start moving.
    pub fn set_target(&mut self, position: i64) -> Result<()> {
        self.state.set_target(position)?;
        debug!("target {}", position);
        Ok(())
    }

    /// Move relative to the current position.
    pub fn move_by(&mut self, delta: i64) -> Result<()> {
        self.state.move_by(delta)?;
        debug!("target {}", self.state.target());
        Ok(())
    }

    /// Set the pacing period in fine ticks.
    pub fn set_pacing_period(&mut self, period: u32) -> Result<()> {
        self.state.set_pacing_period(period)?;
        Ok(())
    }

    /// Set the pacing period in microseconds, truncated to whole fine ticks.
    ///
    /// # Errors
    ///
    /// Returns `PeriodTooShort` (in microseconds) below the minimum period.
    pub fn set_pacing_period_us(&mut self, period_us: u32) -> Result<()> {
        let timing = &self.config.timing;
        let min_us = timing.min_period_us();
        if period_us < min_us {
            return Err(MotorError::PeriodTooShort {
                period: period_us,
                min: min_us,
            }
            .into());
        }
        self.state.set_pacing_period(timing.us_to_ticks(period_us))?;
        Ok(())
    }

    /// Stop in place.
    pub fn stop(&mut self) {
        self.state.stop();
    }

    /// Redefine the current position without moving.
    pub fn set_position(&mut self, position: i64) -> Result<()> {
        self.state.set_position(position)?;
        Ok(())
    }

    /// Enable or disable the driver.
    ///
    /// Disabling also freezes any move in place.
    ///
    /// # Errors
    ///
    /// Enabling is rejected with `EstopActive` while the interlock is faulted.
    pub fn set_enabled(&mut self, enable: bool) -> Result<()> {
        if enable && self.interlock.is_faulted() {
            return Err(MotorError::EstopActive.into());
        }
        if !enable {
            self.state.stop();
        }
        self.gate.set_enabled(&mut self.state, enable)?;
        info!("stepper {}", if enable { "enabled" } else { "disabled" });
        Ok(())
    }

    /// Read-only view of the stepper entity.
    #[inline]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Status report with the period in microseconds.
    pub fn status(&self) -> StatusReport {
        let snapshot = self.state.snapshot();
        StatusReport {
            snapshot,
            period_us: self.config.timing.ticks_to_us(snapshot.period),
        }
    }

    /// Process one fine tick. Returns whether the stepper is still moving.
    pub fn on_fine_tick(&mut self) -> Result<bool> {
        Ok(self.generator.tick(&mut self.state)?)
    }

    /// Process one coarse tick: interlock, enable refresh, heartbeat.
    pub fn on_coarse_tick(&mut self) -> Result<EstopStatus> {
        let status = self.interlock.poll(&mut self.state, &mut self.gate)?;
        self.gate.refresh(self.state.is_enabled())?;
        self.heartbeat.tick()?;
        Ok(status)
    }

    /// Drain at most one coarse and one fine tick from `ticks`.
    ///
    /// Call once per main-loop iteration; any backlog is left for later calls.
    pub fn service(&mut self, ticks: &TickSource) -> Result<Serviced> {
        let mut serviced = Serviced::default();
        if ticks.take_coarse() {
            serviced.coarse = Some(self.on_coarse_tick()?);
        }
        if ticks.take_fine() {
            self.on_fine_tick()?;
            serviced.fine = true;
        }
        Ok(serviced)
    }

    /// Require the driver to be enabled before accepting a move.
    pub(crate) fn require_enabled(&self) -> Result<()> {
        if self.state.is_enabled() {
            Ok(())
        } else {
            Err(MotorError::Disabled.into())
        }
    }

    /// Change the heartbeat blink period in coarse ticks.
    pub fn set_heartbeat_period(&mut self, period: u32) -> Result<()> {
        self.heartbeat.set_period(period)?;
        Ok(())
    }

    /// Heartbeat blink period in coarse ticks.
    #[inline]
    pub fn heartbeat_period(&self) -> u32 {
        self.heartbeat.period()
    }

    /// Interlock status from the most recent coarse tick.
    #[inline]
    pub fn estop_status(&self) -> EstopStatus {
        self.interlock.status()
    }

    /// Current step pulse phase.
    #[inline]
    pub fn pulse_phase(&self) -> PulsePhase {
        self.generator.phase(&self.state)
    }

    /// The stepper entity.
    #[inline]
    pub fn state(&self) -> &StepperState {
        &self.state
    }

    /// The validated configuration.
    #[inline]
    pub fn config(&self) -> &ClawConfig {
        &self.config
    }

    /// Release all pins.
    pub fn release(self) -> ClawPins<STEP, DIR, EN, ELED, ESTOP, FLED, HB> {
        let (step, dir) = self.generator.release();
        let (enable, enable_indicator) = self.gate.release();
        let (estop, fault_indicator) = self.interlock.release();
        ClawPins {
            step,
            dir,
            enable,
            enable_indicator,
            estop,
            fault_indicator,
            heartbeat: self.heartbeat.release(),
        }
    }
}
