use bevy::prelude::*;
use crate::game::sketch::SketchAction;

/// Root marker component for HUD elements
#[derive(Component)]
pub struct HudRoot;

/// Button that fires a sketch action when pressed
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionButton(pub SketchAction);

/// Button fill when idle (#6290C8)
pub const BUTTON_IDLE: Color = Color::srgb(98.0 / 255.0, 144.0 / 255.0, 200.0 / 255.0);

/// Button fill under the cursor (#0A3200)
pub const BUTTON_HOVER: Color = Color::srgb(10.0 / 255.0, 50.0 / 255.0, 0.0);
