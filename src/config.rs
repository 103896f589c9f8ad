//! Console configuration loading.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::simulation::ControlState;

/// Runtime configuration for the console.
///
/// Every field has a default, so the config file is optional and may be
/// partial. Keys are kebab-case.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConsoleConfig {
    /// Interval between simulation ticks, in milliseconds.
    pub tick_interval_ms: u64,
    /// Power slider position at startup (0-100).
    pub initial_power: f64,
    /// Cooling slider position at startup (0-100).
    pub initial_cooling: f64,
    /// Frequency slider position at startup (0-500 Hz).
    pub initial_frequency: f64,
    /// Device temperature at startup (C).
    pub initial_temperature: f64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        let controls = ControlState::default();
        Self {
            tick_interval_ms: 200,
            initial_power: controls.power,
            initial_cooling: controls.cooling,
            initial_frequency: controls.frequency,
            initial_temperature: crate::simulation::engine::INITIAL_TEMPERATURE,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from a TOML file; fall back to the defaults when
    /// the file does not exist.
    pub fn load_or_default(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(config_path).with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }

    pub fn initial_controls(&self) -> ControlState {
        ControlState {
            power: self.initial_power,
            cooling: self.initial_cooling,
            frequency: self.initial_frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_device_power_on_state() {
        let config = ConsoleConfig::default();
        assert_eq!(config.tick_interval_ms, 200);
        assert_eq!(config.initial_controls(), ControlState::default());
        assert_eq!(config.initial_temperature, 40.0);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let config: ConsoleConfig = toml::from_str("tick-interval-ms = 100\ninitial-power = 75.0\n").unwrap();
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.initial_power, 75.0);
        assert_eq!(config.initial_cooling, 50.0);
        assert_eq!(config.initial_frequency, 200.0);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = ConsoleConfig::load_or_default(Path::new("/nonexistent/wera.toml")).unwrap();
        assert_eq!(config.tick_interval_ms, ConsoleConfig::default().tick_interval_ms);
    }
}
