//! WERA simulation core.
//!
//! Everything with computable behavior lives here, independent of the UI:
//! - `types`: control/telemetry data structures and display line formats
//! - `physics`: thermal model, load jitter and autopilot trajectories
//! - `bridge`: mock remote link returning acks and directives
//! - `engine`: the per-tick update combining the above
//! - `task`: the Embassy task that runs the engine on a timer
//!
//! The main entry point is `simulation_task`, spawned on the Embassy
//! executor. It communicates with the UI only through the channels defined
//! in the crate root.

pub mod bridge;
pub mod engine;
pub mod physics;
pub mod task;
pub mod types;

pub use task::simulation_task;

pub use types::{ControlState, LinkStatus, TelemetryFrame};
