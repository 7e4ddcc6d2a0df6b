//! Own-ship flight dynamics for the RIO trainer.
//!
//! A bounded, rate-limited PID controller, the throttle to target-speed
//! table, and the `Aircraft` integrator that ties them together.

pub mod aircraft;
pub mod flight_model;
pub mod pid;

pub use rio_core as core;

pub use aircraft::{Aircraft, FlightConfig, InitialFlightState};
pub use flight_model::{Breakpoint, FlightModelError, ThrottleTable};
pub use pid::{PidController, PidGains};
