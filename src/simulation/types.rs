//! Type definitions for the simulation.
//!
//! Contains the data structures shared between the simulation task and the
//! UI:
//! - Operator input state (sliders and mode toggles)
//! - Telemetry snapshot sent over the bridge
//! - Derived per-tick display frame and its literal line formats

use super::bridge::Directive;

/// Temperature (C) above which the read-out switches to the alarm color.
pub const TEMPERATURE_ALARM_THRESHOLD: f64 = 85.0;

/// Operator-controlled inputs. Each value is clamped to its range by the
/// slider that produces it; the simulation does not re-validate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    /// Power setting, 0..=100 percent.
    pub power: f64,
    /// Cooling setting, 0..=100 percent.
    pub cooling: f64,
    /// Core clock, 0..=500 Hz.
    pub frequency: f64,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            power: 50.0,
            cooling: 50.0,
            frequency: 200.0,
        }
    }
}

/// Whether power and frequency come from the operator or the autopilot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    Auto,
    Manual,
}

impl OperatingMode {
    /// Wire name of the mode as reported to the bridge.
    pub fn as_str(self) -> &'static str {
        match self {
            OperatingMode::Auto => "AUTO",
            OperatingMode::Manual => "MAN",
        }
    }
}

/// Snapshot handed to the bridge on each sync.
///
/// The temperature is the pre-physics value of the current tick, i.e. the
/// value the operator currently sees, not the one computed later in the same
/// tick.
#[derive(Debug, Clone, Copy)]
pub struct Telemetry {
    pub temperature: f64,
    pub power: f64,
    pub mode: OperatingMode,
}

/// Data-link state as presented on the console. `Disconnected` is distinct
/// from `Offline`: the link was up at some point and has been taken down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStatus {
    #[default]
    Offline,
    Connected,
    Disconnected,
}

impl LinkStatus {
    pub fn display_line(self) -> &'static str {
        match self {
            LinkStatus::Offline => "NET: OFFLINE",
            LinkStatus::Connected => "NET: CONNECTED",
            LinkStatus::Disconnected => "NET: DISCONNECTED",
        }
    }
}

/// Derived display state written back by the simulation every tick.
#[derive(Debug, Clone)]
pub struct TelemetryFrame {
    /// Jittered load read-out, already clamped to 0..=100.
    pub load: f64,
    /// Smoothed device temperature (C).
    pub temperature: f64,
    /// Effective power this tick (autopilot-driven when autopilot is on).
    pub power: f64,
    /// Effective frequency this tick.
    pub frequency: f64,
    /// Last directive received over the link, cleared on disconnect.
    pub directive: Option<Directive>,
    pub link: LinkStatus,
}

impl TelemetryFrame {
    /// `LOAD: <int>%` (truncated, matching the read-out).
    pub fn load_line(&self) -> String {
        format!("LOAD: {}%", self.load as i64)
    }

    /// `TEMP: <value to 1 decimal> C`
    pub fn temperature_line(&self) -> String {
        format!("TEMP: {:.1} C", self.temperature)
    }

    /// `CMD: <directive>`, or `CMD: ---` when no directive is latched.
    pub fn directive_line(&self) -> String {
        match self.directive {
            Some(directive) => format!("CMD: {}", directive),
            None => "CMD: ---".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(load: f64, temperature: f64, directive: Option<Directive>, link: LinkStatus) -> TelemetryFrame {
        TelemetryFrame {
            load,
            temperature,
            power: 0.0,
            frequency: 0.0,
            directive,
            link,
        }
    }

    #[test]
    fn load_line_truncates_to_integer_percent() {
        assert_eq!(frame(42.7, 0.0, None, LinkStatus::Offline).load_line(), "LOAD: 42%");
        assert_eq!(frame(0.0, 0.0, None, LinkStatus::Offline).load_line(), "LOAD: 0%");
        assert_eq!(frame(100.0, 0.0, None, LinkStatus::Offline).load_line(), "LOAD: 100%");
    }

    #[test]
    fn temperature_line_has_one_decimal() {
        assert_eq!(frame(0.0, 63.26, None, LinkStatus::Offline).temperature_line(), "TEMP: 63.3 C");
        assert_eq!(frame(0.0, 40.0, None, LinkStatus::Offline).temperature_line(), "TEMP: 40.0 C");
    }

    #[test]
    fn directive_line_shows_placeholder_when_absent() {
        assert_eq!(frame(0.0, 0.0, None, LinkStatus::Offline).directive_line(), "CMD: ---");
        assert_eq!(
            frame(0.0, 0.0, Some(Directive::WarnHighTemp), LinkStatus::Connected).directive_line(),
            "CMD: WARN: HIGH TEMP"
        );
    }

    #[test]
    fn link_status_lines() {
        assert_eq!(LinkStatus::Offline.display_line(), "NET: OFFLINE");
        assert_eq!(LinkStatus::Connected.display_line(), "NET: CONNECTED");
        assert_eq!(LinkStatus::Disconnected.display_line(), "NET: DISCONNECTED");
    }

    #[test]
    fn mode_wire_names() {
        assert_eq!(OperatingMode::Auto.as_str(), "AUTO");
        assert_eq!(OperatingMode::Manual.as_str(), "MAN");
    }
}
