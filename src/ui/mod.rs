// UI module for the WERA operator console
//
// This module organizes the UI into separate components:
// - `telemetry_panel`: live read-outs (load, temperature, link, directive)
// - `control_panel`: sliders, mode toggles and shutdown
// - `app_state`: application state management and main update loop

pub mod app_state;
pub mod control_panel;
pub mod telemetry_panel;

use crate::simulation::{ControlState, TelemetryFrame};

pub use app_state::AppState;

/// Events published by the simulation for the UI.
#[derive(Debug)]
pub enum UIRefreshState {
    TelemetryUpdated(TelemetryFrame),
}

/// Operator input forwarded to the simulation.
#[derive(Debug)]
pub enum UICommand {
    ControlsChanged(ControlState),
    SetAutopilot(bool),
    SetLinkEnabled(bool),
}
