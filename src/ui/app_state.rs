//! Application state management and the main update loop.
//!
//! The UI owns the raw input state (slider positions, toggle flags) and
//! forwards snapshots of it to the simulation; derived values only ever
//! arrive back as complete `TelemetryFrame`s. Nothing here computes
//! simulation values.

use eframe::egui;
use std::time::Duration;

use crate::ui::{UICommand, UIRefreshState, control_panel, telemetry_panel};
use crate::{UICommandChannelSender, UIRefreshChannelReceiver};
use crate::simulation::{ControlState, TelemetryFrame};

pub struct AppState {
    ui_refresh_rx: UIRefreshChannelReceiver,
    ui_command_tx: UICommandChannelSender,
    /// Raw input state owned by the UI; the simulation reads snapshots.
    pub controls: ControlState,
    pub autopilot: bool,
    pub link_enabled: bool,
    /// Last frame written back by the simulation; `None` until the first tick.
    pub frame: Option<TelemetryFrame>,
}

impl AppState {
    pub fn new(rx: UIRefreshChannelReceiver, tx: UICommandChannelSender, controls: ControlState) -> Self {
        Self {
            ui_refresh_rx: rx,
            ui_command_tx: tx,
            controls,
            autopilot: false,
            link_enabled: false,
            frame: None,
        }
    }

    pub(crate) fn send_command(&self, command: UICommand) {
        let _ = self.ui_command_tx.try_send(command);
    }
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Repaint periodically so simulation ticks are visible without input
        ctx.request_repaint_after(Duration::from_millis(50));

        while let Ok(msg) = self.ui_refresh_rx.try_receive() {
            match msg {
                UIRefreshState::TelemetryUpdated(frame) => {
                    if self.autopilot {
                        // Power and frequency are driven; mirror them on the
                        // sliders so the operator sees the trajectory.
                        self.controls.power = frame.power;
                        self.controls.frequency = frame.frequency;
                    }
                    self.frame = Some(frame);
                }
            }
        }

        telemetry_panel::render(ctx, self);
        control_panel::render(ctx, self);
    }
}
