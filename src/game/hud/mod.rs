use bevy::prelude::*;
use crate::game::config::LayoutConfigPlugin;
use crate::game::sketch::SketchSet;

mod components;
mod setup;
mod commands;

pub use components::{ActionButton, HudRoot, BUTTON_HOVER, BUTTON_IDLE};
pub use setup::rebuild_buttons;
pub use commands::{button_system, action_button_handler, keyboard_shortcuts};

/// Buttons along the bottom of the canvas, built from the layout asset
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(LayoutConfigPlugin)
           .add_systems(Update, rebuild_buttons)
           .add_systems(Update, (
               button_system,
               action_button_handler,
               keyboard_shortcuts,
           ).in_set(SketchSet::Input));
    }
}
