//! Headless demo: generates one building per category and logs a summary.
//!
//! Environment:
//! - `SKYLINE_SEED`: base seed for the street (default 42).
//! - `SKYLINE_PARAMS`: path to a JSON file of `FacadeParams` overrides.
//! - `RUST_LOG`: log filter, e.g. `RUST_LOG=rendering=debug`.

mod street;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_once()),
            LogPlugin::default(),
        ))
        .add_plugins(street::StreetPlugin)
        .run();
}
