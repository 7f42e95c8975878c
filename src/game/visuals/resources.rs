use bevy::prelude::*;
use crate::game::config::SketchConfig;
use crate::game::sketch::Mode;

/// Image handles for both nanobot modes, loaded once at startup
#[derive(Resource)]
pub struct ModeImages {
    pub search: Handle<Image>,
    pub operation: Handle<Image>,
}

impl ModeImages {
    pub fn for_mode(&self, mode: Mode) -> &Handle<Image> {
        match mode {
            Mode::Search => &self.search,
            Mode::Operation => &self.operation,
        }
    }
}

pub(super) fn load_mode_images(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SketchConfig>,
) {
    commands.insert_resource(ModeImages {
        search: asset_server.load(Mode::Search.image_path(&config).to_string()),
        operation: asset_server.load(Mode::Operation.image_path(&config).to_string()),
    });
    info!("Loading nanobot images {} and {}", config.search_image, config.operation_image);
}
