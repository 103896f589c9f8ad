//! Tick-driven core of the WERA simulation.
//!
//! The engine owns everything the simulation mutates: the latest control
//! snapshot from the UI, the two mode flags, the bridge and the thermal
//! state. One `tick` performs, in order: clock advance, autopilot override,
//! data-link handling, physics update. The RNG is a type parameter so tests
//! can run the whole engine deterministically.

use log::{debug, info};
use rand::Rng;

use super::bridge::{Directive, TelemetryBridge};
use super::physics;
use super::types::{ControlState, LinkStatus, OperatingMode, Telemetry, TelemetryFrame};

/// Device temperature at power-on (C).
pub const INITIAL_TEMPERATURE: f64 = 40.0;

pub struct SimulationEngine<R: Rng> {
    controls: ControlState,
    autopilot: bool,
    link_enabled: bool,
    bridge: TelemetryBridge,
    temperature: f64,
    /// Virtual clock, seconds since the simulation started.
    elapsed: f64,
    directive: Option<Directive>,
    link: LinkStatus,
    rng: R,
}

impl<R: Rng> SimulationEngine<R> {
    pub fn new(controls: ControlState, initial_temperature: f64, rng: R) -> Self {
        Self {
            controls,
            autopilot: false,
            link_enabled: false,
            bridge: TelemetryBridge::new(),
            temperature: initial_temperature,
            elapsed: 0.0,
            directive: None,
            link: LinkStatus::Offline,
            rng,
        }
    }

    /// Replace the control snapshot. When autopilot is on, power and
    /// frequency are overwritten again on the next tick.
    pub fn set_controls(&mut self, controls: ControlState) {
        self.controls = controls;
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        if self.autopilot != enabled {
            debug!("autopilot {}", if enabled { "engaged" } else { "disengaged" });
        }
        self.autopilot = enabled;
    }

    pub fn set_link_enabled(&mut self, enabled: bool) {
        self.link_enabled = enabled;
    }

    pub fn mode(&self) -> OperatingMode {
        if self.autopilot { OperatingMode::Auto } else { OperatingMode::Manual }
    }

    /// Advance the simulation by `dt` seconds and return the derived display
    /// state for this tick.
    pub fn tick(&mut self, dt: f64) -> TelemetryFrame {
        self.elapsed += dt;

        if self.autopilot {
            self.controls.power = physics::autopilot_power(self.elapsed);
            self.controls.frequency = physics::autopilot_frequency(self.elapsed);
        }

        if self.link_enabled {
            if !self.bridge.is_connected() {
                let ack = self.bridge.connect();
                info!("data link up ({}): {}", ack.status, ack.message);
                self.link = LinkStatus::Connected;
            }
            // The bridge sees the temperature as it stands before this
            // tick's physics update.
            let snapshot = Telemetry {
                temperature: self.temperature,
                power: self.controls.power,
                mode: self.mode(),
            };
            if let Some(response) = self.bridge.sync(&snapshot) {
                if self.directive != Some(response.directive) {
                    debug!("directive changed (ack {}): {}", response.ack, response.directive);
                }
                self.directive = Some(response.directive);
            }
        } else if self.bridge.is_connected() {
            let ack = self.bridge.disconnect();
            info!("data link down ({}): {}", ack.status, ack.message);
            self.link = LinkStatus::Disconnected;
            self.directive = None;
        }

        let target = physics::target_temperature(&self.controls);
        self.temperature = physics::step_temperature(self.temperature, target);
        let load = physics::load_percent(self.controls.power, &mut self.rng);

        TelemetryFrame {
            load,
            temperature: self.temperature,
            power: self.controls.power,
            frequency: self.controls.frequency,
            directive: self.directive,
            link: self.link,
        }
    }
}
