mod components;
mod resources;
mod systems;

use bevy::prelude::*;
use crate::game::config::SketchConfig;
use crate::game::sketch::{init_sketch, SketchSet};

pub use components::{CentralNanobot, DescriptionPanelRoot, DescriptionText, SwarmSprite};
pub use resources::ModeImages;

use resources::load_mode_images;
use systems::{setup_scene, sync_central_nanobot, sync_description_panel, sync_swarm_sprites};

/// Canvas background (#0A2463)
pub const BACKGROUND: Color = Color::srgb(10.0 / 255.0, 36.0 / 255.0, 99.0 / 255.0);

/// Draws the sketch state: central nanobot, swarm sprites and the description overlay
pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
           .add_systems(Startup, (load_mode_images, setup_scene).chain().after(init_sketch))
           .add_systems(Update, (
               sync_swarm_sprites,
               sync_central_nanobot,
               sync_description_panel,
           ).in_set(SketchSet::Present));
    }
}

/// Convert canvas coordinates (origin top-left, y down) to 2D world
/// coordinates for a camera centered on the canvas.
pub fn canvas_to_world(config: &SketchConfig, canvas: Vec2) -> Vec2 {
    Vec2::new(
        canvas.x - config.canvas_width / 2.0,
        config.canvas_height / 2.0 - canvas.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_corners_map_to_world() {
        let config = SketchConfig::default();
        assert_eq!(canvas_to_world(&config, Vec2::ZERO), Vec2::new(-400.0, 350.0));
        assert_eq!(canvas_to_world(&config, Vec2::new(400.0, 350.0)), Vec2::ZERO);
        assert_eq!(canvas_to_world(&config, Vec2::new(800.0, 700.0)), Vec2::new(400.0, -350.0));
    }
}
