//! # Control Panel - Sliders and Mode Toggles
//!
//! Central panel with the three control sliders, the autopilot and data-link
//! toggles, and the shutdown button. Every input change is forwarded to the
//! simulation as a command; this panel never mutates derived state.

use eframe::egui;

use crate::ui::{AppState, UICommand};

/// Render the central panel with the operator controls.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Controls");
        ui.separator();

        let mut changed = false;
        changed |= ui
            .add(egui::Slider::new(&mut state.controls.power, 0.0..=100.0).text("Power (%)"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut state.controls.cooling, 0.0..=100.0).text("Cooling (%)"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut state.controls.frequency, 0.0..=500.0).text("Frequency (Hz)"))
            .changed();
        if changed {
            state.send_command(UICommand::ControlsChanged(state.controls));
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.toggle_value(&mut state.autopilot, "AUTOPILOT").changed() {
                state.send_command(UICommand::SetAutopilot(state.autopilot));
            }
            if ui.toggle_value(&mut state.link_enabled, "DATA LINK").changed() {
                state.send_command(UICommand::SetLinkEnabled(state.link_enabled));
            }
        });

        ui.add_space(20.0);
        if ui.button("SHUT DOWN").clicked() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
