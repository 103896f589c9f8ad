//! Embassy task driving the simulation at a fixed cadence.
//!
//! The task owns the engine and is the only writer of derived state. It
//! sleeps until the next tick or until the UI sends a command, whichever
//! comes first; commands update the engine immediately, ticks publish a
//! telemetry frame on the refresh channel. The tick delta is measured, not
//! assumed, so a late wake-up does not slow the virtual clock down.

use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ConsoleConfig;
use crate::simulation::engine::SimulationEngine;
use crate::ui::{UICommand, UIRefreshState};
use crate::{UICommandChannelReceiver, UIRefreshChannelSender};

#[embassy_executor::task]
pub async fn simulation_task(config: ConsoleConfig, ui_refresh_tx: UIRefreshChannelSender, ui_command_rx: UICommandChannelReceiver) {
    let tick_interval = Duration::from_millis(config.tick_interval_ms);
    let mut engine = SimulationEngine::new(config.initial_controls(), config.initial_temperature, StdRng::from_entropy());

    info!("simulation started, tick interval {} ms", config.tick_interval_ms);

    let mut last_tick = Instant::now();
    let mut next_tick = last_tick + tick_interval;
    loop {
        match select(ui_command_rx.receive(), Timer::at(next_tick)).await {
            Either::First(command) => match command {
                UICommand::ControlsChanged(controls) => engine.set_controls(controls),
                UICommand::SetAutopilot(enabled) => engine.set_autopilot(enabled),
                UICommand::SetLinkEnabled(enabled) => engine.set_link_enabled(enabled),
            },
            Either::Second(()) => {
                let now = Instant::now();
                let dt = (now - last_tick).as_micros() as f64 / 1_000_000.0;
                last_tick = now;
                next_tick += tick_interval;

                let frame = engine.tick(dt);
                // Drop the frame rather than stall the loop if the UI is
                // not draining the channel.
                let _ = ui_refresh_tx.try_send(UIRefreshState::TelemetryUpdated(frame));
            }
        }
    }
}
