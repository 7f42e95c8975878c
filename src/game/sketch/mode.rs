use serde::{Deserialize, Serialize};

use crate::game::config::SketchConfig;

/// Which face of the nanobot is shown. Search is the compact, mobile form;
/// Operation opens the tool bay and is drawn taller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Search,
    Operation,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Search => Mode::Operation,
            Mode::Operation => Mode::Search,
        }
    }

    pub fn image_path(self, config: &SketchConfig) -> &str {
        match self {
            Mode::Search => &config.search_image,
            Mode::Operation => &config.operation_image,
        }
    }

    /// Render height of a swarm member in this mode.
    pub fn member_height(self, config: &SketchConfig) -> f32 {
        match self {
            Mode::Search => config.member_height_search,
            Mode::Operation => config.member_height_operation,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Search => "search",
            Mode::Operation => "operation",
        }
    }
}
