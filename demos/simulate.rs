//! Host simulation of the claw controller.
//!
//! A background thread plays the timer interrupt while the main loop services
//! ticks and feeds a scripted console session through the line reader.
//!
//! Run with: `cargo run --example simulate`

use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use claw_motion::{
    ClawConfig, ClawController, ClawPins, CommandLineReader, EstopStatus, LineEvent, Result,
    TickSource,
};

static TICKS: TickSource = TickSource::new(100);

/// Output pin that remembers its level.
#[derive(Clone, Default)]
struct SimPin(Rc<Cell<bool>>);

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.0.set(true);
        Ok(())
    }
}

impl embedded_hal::digital::InputPin for SimPin {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

const SCRIPT: &[&str] = &[
    "get_stepper_status",
    "move_stepper_absolute 100",
    "enable_stepper",
    "set_stepper_period 80",
    "move_stepper_absolute 100",
    "claw_set 1",
    "move_stepper_bump_down",
    "move_stepper_relative -50",
    "get_stepper_status",
];

fn main() -> Result<()> {
    println!("=== Claw Controller Simulation ===\n");

    let estop = SimPin::default();
    // Active-low input, released
    estop.0.set(true);

    let mut claw = ClawController::new(
        ClawConfig::default(),
        ClawPins {
            step: SimPin::default(),
            dir: SimPin::default(),
            enable: SimPin::default(),
            enable_indicator: SimPin::default(),
            estop: estop.clone(),
            fault_indicator: SimPin::default(),
            heartbeat: SimPin::default(),
        },
    )?;

    thread::spawn(|| loop {
        for _ in 0..100 {
            TICKS.on_timer_interrupt();
        }
        thread::sleep(Duration::from_millis(1));
    });

    let mut reader = CommandLineReader::new();
    for line in SCRIPT {
        println!("> {}", line);
        for byte in line.bytes().chain(core::iter::once(b'\n')) {
            if reader.feed(byte) == LineEvent::Complete {
                match claw.handle_line(&reader.take_line()) {
                    Ok(response) => println!("{}", response),
                    Err(e) => println!("Error: {}", e),
                }
            }
        }
        run_until_idle(&mut claw)?;
        println!();
    }

    println!("> (estop pressed during a move)");
    claw.handle_line("move_stepper_relative 400")?;
    for _ in 0..2000 {
        claw.service(&TICKS)?;
    }
    estop.0.set(false);
    while claw.service(&TICKS)?.coarse != Some(EstopStatus::Active) {}
    println!("{}", claw.status());
    match claw.handle_line("enable_stepper") {
        Ok(response) => println!("{}", response),
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}

/// Service ticks until the current move finishes.
fn run_until_idle<STEP, DIR, EN, ELED, ESTOP, FLED, HB>(
    claw: &mut ClawController<STEP, DIR, EN, ELED, ESTOP, FLED, HB>,
) -> Result<()>
where
    STEP: embedded_hal::digital::OutputPin,
    DIR: embedded_hal::digital::OutputPin,
    EN: embedded_hal::digital::OutputPin,
    ELED: embedded_hal::digital::OutputPin,
    ESTOP: embedded_hal::digital::InputPin,
    FLED: embedded_hal::digital::OutputPin,
    HB: embedded_hal::digital::OutputPin,
{
    while claw.snapshot().moving && claw.snapshot().enabled {
        claw.service(&TICKS)?;
    }
    Ok(())
}
