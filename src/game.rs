use bevy::prelude::*;

pub mod config;
pub mod hud;
pub mod sketch;
pub mod visuals;

use config::SketchConfig;
use hud::HudPlugin;
use sketch::SketchCorePlugin;
use visuals::VisualsPlugin;

/// Headless sketch state plus the HUD and rendering on top of it
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SketchCorePlugin,
            HudPlugin,
            VisualsPlugin,
        ))
        .add_systems(Startup, log_controls.after(sketch::init_sketch));
    }
}

fn log_controls(config: Res<SketchConfig>) {
    info!("Controls: buttons or keys 1-5 (add, remove, search info, toggle mode, operation info)");
    info!(
        "The swarm deploys at {} members and locks the controls until it has left the canvas",
        config.swarm_capacity
    );
}
