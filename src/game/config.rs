use bevy::prelude::*;
use bevy_common_assets::ron::RonAssetPlugin;
use serde::{Deserialize, Serialize};

pub const SKETCH_CONFIG_PATH: &str = "assets/sketch_config.ron";

/// Static configuration loaded once at startup. Canvas geometry, swarm rules
/// and asset names do not change while the sketch runs.
#[derive(Resource, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SketchConfig {
    // Canvas
    pub canvas_width: f32,
    pub canvas_height: f32,

    // Swarm
    pub swarm_capacity: usize,
    pub deploy_step: f32,
    pub offscreen_margin: f32,
    pub spawn_margin_x: f32,
    pub spawn_y_min: f32,
    pub spawn_y_max: f32,
    pub member_width: f32,
    pub member_height_search: f32,
    pub member_height_operation: f32,

    // Central nanobot bob, offsets are measured up from the canvas middle
    pub bob_speed: f32,
    pub bob_start_offset: f32,
    pub bob_low_offset: f32,
    pub bob_high_offset: f32,

    // Assets
    pub search_image: String,
    pub operation_image: String,

    /// Fixed seed for member placement. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 700.0,
            swarm_capacity: 30,
            deploy_step: 12.0,
            offscreen_margin: 100.0,
            spawn_margin_x: 100.0,
            spawn_y_min: 150.0,
            spawn_y_max: 450.0,
            member_width: 70.0,
            member_height_search: 75.0,
            member_height_operation: 126.0,
            bob_speed: 0.5,
            bob_start_offset: 60.0,
            bob_low_offset: 45.0,
            bob_high_offset: 75.0,
            search_image: "SearchMode.png".to_string(),
            operation_image: "OperationMode.png".to_string(),
            rng_seed: None,
        }
    }
}

impl SketchConfig {
    /// Y coordinate past which a deploying member is dropped.
    pub fn exit_y(&self) -> f32 {
        self.canvas_height + self.offscreen_margin
    }
}

/// Load the sketch configuration synchronously at startup.
/// A config already present in the world (inserted by a test or an embedding
/// app) wins over the file on disk.
pub fn load_sketch_config(mut commands: Commands, existing: Option<Res<SketchConfig>>) {
    if existing.is_some() {
        debug!("SketchConfig already present, skipping {}", SKETCH_CONFIG_PATH);
        return;
    }

    match std::fs::read_to_string(SKETCH_CONFIG_PATH) {
        Ok(contents) => match ron::from_str::<SketchConfig>(&contents) {
            Ok(config) => {
                info!("Loaded sketch config from {}", SKETCH_CONFIG_PATH);
                commands.insert_resource(config);
            }
            Err(e) => {
                error!("Failed to parse sketch config: {}", e);
                error!("Using default SketchConfig");
                commands.insert_resource(SketchConfig::default());
            }
        },
        Err(e) => {
            error!("Failed to read {}: {}", SKETCH_CONFIG_PATH, e);
            error!("Using default SketchConfig");
            commands.insert_resource(SketchConfig::default());
        }
    }
}

/// One entry of the declarative button layout. Positions are button centers
/// in canvas coordinates.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ButtonSpec {
    pub id: u8,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Button layout, hot-reloadable while the sketch runs.
#[derive(Deserialize, Serialize, Asset, TypePath, Clone, Debug, Default)]
pub struct ButtonLayout {
    pub buttons: Vec<ButtonSpec>,
}

#[derive(Resource)]
pub struct ButtonLayoutHandle(pub Handle<ButtonLayout>);

pub struct LayoutConfigPlugin;

impl Plugin for LayoutConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<ButtonLayout>::new(&["button_layout.ron"]))
            .add_systems(Startup, setup_button_layout);
    }
}

fn setup_button_layout(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handle = asset_server.load("button_layout.ron");
    commands.insert_resource(ButtonLayoutHandle(handle));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: SketchConfig = ron::from_str("(swarm_capacity: 5, rng_seed: Some(7))").unwrap();
        assert_eq!(config.swarm_capacity, 5);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.canvas_height, 700.0);
        assert_eq!(config.deploy_step, 12.0);
    }

    #[test]
    fn test_shipped_config_parses() {
        let contents = std::fs::read_to_string(SKETCH_CONFIG_PATH).unwrap();
        let config: SketchConfig = ron::from_str(&contents).unwrap();
        assert_eq!(config, SketchConfig::default());
    }

    #[test]
    fn test_shipped_layout_covers_every_action() {
        let contents = std::fs::read_to_string("assets/button_layout.ron").unwrap();
        let layout: ButtonLayout = ron::from_str(&contents).unwrap();
        let mut ids: Vec<u8> = layout.buttons.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_mode_images_ship_as_png() {
        let config = SketchConfig::default();
        for name in [&config.search_image, &config.operation_image] {
            let bytes = std::fs::read(format!("assets/{}", name)).unwrap();
            assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "{} is not a PNG", name);
        }
    }

    #[test]
    fn test_exit_y_adds_margin() {
        assert_eq!(SketchConfig::default().exit_y(), 800.0);
    }
}
