use eframe::egui;
use embassy_executor::{Executor, Spawner};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use env_logger::Builder;
use log::{LevelFilter, error, info};
use std::path::Path;
use std::thread;

use crate::config::ConsoleConfig;
use crate::ui::{AppState, UICommand, UIRefreshState};

mod config;
mod simulation;
mod ui;

const UI_REFRESH_CHANNEL_SIZE: usize = 100;
type UIRefreshChannel = embassy_sync::channel::Channel<CriticalSectionRawMutex, UIRefreshState, UI_REFRESH_CHANNEL_SIZE>;
pub(crate) type UIRefreshChannelReceiver = embassy_sync::channel::Receiver<'static, CriticalSectionRawMutex, UIRefreshState, UI_REFRESH_CHANNEL_SIZE>;
pub(crate) type UIRefreshChannelSender = embassy_sync::channel::Sender<'static, CriticalSectionRawMutex, UIRefreshState, UI_REFRESH_CHANNEL_SIZE>;

const UI_COMMAND_CHANNEL_SIZE: usize = 100;
type UICommandChannel = embassy_sync::channel::Channel<CriticalSectionRawMutex, UICommand, UI_COMMAND_CHANNEL_SIZE>;
pub(crate) type UICommandChannelReceiver = embassy_sync::channel::Receiver<'static, CriticalSectionRawMutex, UICommand, UI_COMMAND_CHANNEL_SIZE>;
pub(crate) type UICommandChannelSender = embassy_sync::channel::Sender<'static, CriticalSectionRawMutex, UICommand, UI_COMMAND_CHANNEL_SIZE>;

fn embassy_init(spawner: Spawner, config: ConsoleConfig, ui_refresh_tx: UIRefreshChannelSender, ui_command_rx: UICommandChannelReceiver) {
    let _ = spawner.spawn(simulation::simulation_task(config, ui_refresh_tx, ui_command_rx));
}

fn main() {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("wera_console"), LevelFilter::Debug)
        .init();

    info!("Starting up");

    let config = match ConsoleConfig::load_or_default(Path::new("wera.toml")) {
        Ok(config) => config,
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(1);
        }
    };
    let initial_controls = config.initial_controls();

    let ui_refresh_channel: &'static UIRefreshChannel = Box::leak(Box::new(UIRefreshChannel::new()));
    let ui_command_channel: &'static UICommandChannel = Box::leak(Box::new(UICommandChannel::new()));

    let ui_refresh_tx = ui_refresh_channel.sender();
    let ui_refresh_rx = ui_refresh_channel.receiver();
    let ui_command_tx = ui_command_channel.sender();
    let ui_command_rx = ui_command_channel.receiver();

    // Spawn the Embassy executor on a dedicated background thread
    let _sim_handle = thread::Builder::new()
        .name("sim-executor".to_string())
        .spawn(move || {
            // Leak the executor to satisfy the 'static lifetime required by run()
            let executor: &'static mut Executor = Box::leak(Box::new(Executor::new()));
            executor.run(|spawner| embassy_init(spawner, config, ui_refresh_tx, ui_command_rx));
        })
        .expect("failed to spawn simulation thread");

    // Start the GUI on the main thread (required on macOS)
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    let _ = eframe::run_native(
        "WERA Operator Console",
        native_options,
        Box::new(move |_cc| Ok(Box::new(AppState::new(ui_refresh_rx, ui_command_tx, initial_controls)))),
    );
}
