//! Thermal/load model and autopilot trajectories.
//!
//! All functions are pure; the load jitter takes the RNG as a parameter so
//! tests can seed it. The thermal model is a first-order IIR filter toward a
//! linear target, not a physically exact model, so assertions on temperature
//! should be tolerance-based rather than exact over many ticks.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::types::ControlState;

/// Baseline temperature with all controls at zero (C).
pub const AMBIENT_TEMPERATURE: f64 = 35.0;
/// Heating contribution per percent of power.
pub const POWER_HEAT_FACTOR: f64 = 0.45;
/// Heating contribution per Hz above the frequency knee.
pub const FREQUENCY_HEAT_FACTOR: f64 = 0.1;
/// Clocking below this frequency adds no heat (Hz).
pub const FREQUENCY_HEAT_KNEE: f64 = 300.0;
/// Cooling contribution per percent of cooling.
pub const COOLING_FACTOR: f64 = 0.35;
/// Fraction of the remaining gap closed per tick.
pub const TEMPERATURE_SMOOTHING: f64 = 0.15;
/// Bound of the uniform jitter applied to the load read-out (percent).
pub const LOAD_JITTER: f64 = 1.0;

/// Autopilot power trajectory: slow oscillation around 70 percent.
const AUTOPILOT_POWER_CENTER: f64 = 70.0;
const AUTOPILOT_POWER_AMPLITUDE: f64 = 10.0;
const AUTOPILOT_POWER_RATE: f64 = 0.5;
/// Autopilot frequency trajectory: oscillation around the heat knee.
const AUTOPILOT_FREQUENCY_CENTER: f64 = 300.0;
const AUTOPILOT_FREQUENCY_AMPLITUDE: f64 = 20.0;
const AUTOPILOT_FREQUENCY_RATE: f64 = 0.3;

/// Steady-state temperature for the given control settings.
pub fn target_temperature(controls: &ControlState) -> f64 {
    AMBIENT_TEMPERATURE + POWER_HEAT_FACTOR * controls.power + FREQUENCY_HEAT_FACTOR * (controls.frequency - FREQUENCY_HEAT_KNEE).max(0.0)
        - COOLING_FACTOR * controls.cooling
}

/// One smoothing step of the temperature toward its target.
pub fn step_temperature(current: f64, target: f64) -> f64 {
    current + (target - current) * TEMPERATURE_SMOOTHING
}

/// Power the autopilot commands at the given elapsed time (seconds).
pub fn autopilot_power(elapsed: f64) -> f64 {
    AUTOPILOT_POWER_CENTER + AUTOPILOT_POWER_AMPLITUDE * (elapsed * AUTOPILOT_POWER_RATE).sin()
}

/// Frequency the autopilot commands at the given elapsed time (seconds).
pub fn autopilot_frequency(elapsed: f64) -> f64 {
    AUTOPILOT_FREQUENCY_CENTER + AUTOPILOT_FREQUENCY_AMPLITUDE * (elapsed * AUTOPILOT_FREQUENCY_RATE).cos()
}

/// Load read-out: power plus a bounded uniform jitter, clamped to 0..=100.
pub fn load_percent<R: Rng>(power: f64, rng: &mut R) -> f64 {
    let jitter = Uniform::new_inclusive(-LOAD_JITTER, LOAD_JITTER).sample(rng);
    (power + jitter).clamp(0.0, 100.0)
}
