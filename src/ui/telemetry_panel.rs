//! # Telemetry Panel - Live Read-outs
//!
//! Fixed-height top panel showing the four telemetry lines (load,
//! temperature, link status, directive) and the power bar. Severity
//! treatment: the temperature line flips to the alarm color above the
//! threshold, a critical directive renders red.

use eframe::egui;
use egui::Color32;

use crate::simulation::LinkStatus;
use crate::simulation::types::TEMPERATURE_ALARM_THRESHOLD;
use crate::ui::AppState;

const LOAD_COLOR: Color32 = Color32::from_rgb(255, 102, 102);
const TEMP_NOMINAL_COLOR: Color32 = Color32::from_rgb(0, 255, 0);
const DIRECTIVE_COLOR: Color32 = Color32::from_rgb(0, 255, 255);
const OFFLINE_COLOR: Color32 = Color32::from_rgb(128, 128, 128);
const CONNECTED_COLOR: Color32 = Color32::from_rgb(0, 255, 0);
const DISCONNECTED_COLOR: Color32 = Color32::from_rgb(255, 128, 0);

/// Render the top panel with the telemetry read-outs.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("telemetry").exact_height(170.0).show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("[ WERA 3.0 ]").color(Color32::from_rgb(0, 255, 128)).strong());
        });
        ui.separator();

        let Some(frame) = &state.frame else {
            ui.centered_and_justified(|ui| {
                ui.label("Waiting for first telemetry tick...");
            });
            return;
        };

        let temp_color = if frame.temperature > TEMPERATURE_ALARM_THRESHOLD {
            Color32::RED
        } else {
            TEMP_NOMINAL_COLOR
        };
        let link_color = match frame.link {
            LinkStatus::Offline => OFFLINE_COLOR,
            LinkStatus::Connected => CONNECTED_COLOR,
            LinkStatus::Disconnected => DISCONNECTED_COLOR,
        };
        let directive_color = match &frame.directive {
            Some(directive) if directive.is_critical() => Color32::RED,
            _ => DIRECTIVE_COLOR,
        };

        ui.label(egui::RichText::new(frame.load_line()).monospace().strong().color(LOAD_COLOR));
        ui.label(egui::RichText::new(frame.temperature_line()).monospace().strong().color(temp_color));
        ui.label(egui::RichText::new(frame.link.display_line()).monospace().color(link_color));
        ui.label(egui::RichText::new(frame.directive_line()).monospace().color(directive_color));

        ui.add_space(6.0);
        // The bar mirrors the effective power, not the jittered load
        ui.add(egui::ProgressBar::new((frame.power / 100.0) as f32));
    });
}
