//! Host simulation of the stepper firmware.
//!
//! Runs the scheduler from a 1 ms software alarm on one thread and feeds
//! bytes typed on stdin to the command interpreter on another, the way the
//! timer and receive interrupts share state on the microcontroller.
//!
//! Run with: `cargo run --example host_sim -- [config.toml]`

use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use bipolar_stepper::{
    config::CoilPinout, load_config, Command, CommandInterpreter, MotionState, PeriodicSchedule,
    PhaseDriver, Scheduler, SystemConfig, USAGE,
};

/// Simulated GPIO output.
#[derive(Debug)]
struct SimPin {
    level: bool,
}

impl SimPin {
    fn new() -> Self {
        Self { level: false }
    }
}

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.level = false;
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.level = true;
        Ok(())
    }
}

fn describe(pins: &CoilPinout, levels: [bool; 4]) -> String {
    pins.as_array()
        .iter()
        .zip(levels)
        .map(|(gpio, high)| format!("GPIO{}={}", gpio, u8::from(high)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SystemConfig::default(),
    };

    let state = MotionState::from_config(&config.drive);
    let interpreter = CommandInterpreter::from_config(&state, &config.drive);

    let driver = PhaseDriver::builder()
        .coil_a1(SimPin::new())
        .coil_a2(SimPin::new())
        .coil_b1(SimPin::new())
        .coil_b2(SimPin::new())
        .release_on_build(true)
        .build()
        .expect("Failed to build phase driver");
    let mut scheduler = Scheduler::new(&state, driver).with_period(config.drive.timer_period);

    let done = AtomicBool::new(false);
    let start = Instant::now();

    print!("{}", USAGE);
    println!(
        "Step period: {} ms ({} drive)",
        config.drive.initial_step_period().as_millis(),
        config.drive.initial_drive_mode
    );

    std::thread::scope(|s| {
        // Timer interrupt
        s.spawn(|| {
            let mut schedule = PeriodicSchedule::new(0, config.drive.timer_period);
            while !done.load(Ordering::Acquire) {
                let now = start.elapsed().as_micros() as u64;
                while schedule.fire(now, || {
                    let before = scheduler.net_steps();
                    // Excluded from the grouped single-rotation write, as on the target.
                    let reschedule = critical_section::with(|_| scheduler.on_timer());
                    if scheduler.net_steps() != before {
                        if let Some(pattern) = scheduler.driver().last_applied() {
                            println!(
                                "step {:>4} pos {} {}",
                                scheduler.net_steps(),
                                scheduler.position().value(),
                                describe(&config.pins, pattern.as_array())
                            );
                        }
                    }
                    reschedule
                })
                .is_some()
                {}

                let wait = schedule.next_deadline_us().saturating_sub(now);
                std::thread::sleep(Duration::from_micros(wait));
            }
        });

        // Receive interrupt
        let mut stdin = std::io::stdin().lock();
        let mut byte = [0u8; 1];
        while let Ok(1) = stdin.read(&mut byte) {
            if interpreter.handle(byte[0]) == Some(Command::PrintUsage) {
                print!("{}", USAGE);
            }
        }
        done.store(true, Ordering::Release);
    });

    println!("Stopped after {} net steps", scheduler.net_steps());

    if let Err(e) = scheduler.release() {
        eprintln!("Failed to release coils: {}", e);
    }
    let (a1, a2, b1, b2) = scheduler.into_driver().into_pins();
    println!(
        "Coils released: {}",
        describe(&config.pins, [a1.level, a2.level, b1.level, b2.level])
    );
}
