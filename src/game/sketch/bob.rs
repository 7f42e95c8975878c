use bevy::prelude::*;

use crate::game::config::SketchConfig;

/// Idle animation of the central nanobot: a slow vertical bob between two
/// bounds around the canvas middle.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CentralBob {
    /// Current center y in canvas coordinates.
    pub y: f32,
    pub speed: f32,
    /// Lowest point on screen (largest y).
    pub low: f32,
    /// Highest point on screen (smallest y).
    pub high: f32,
}

impl CentralBob {
    pub fn from_config(config: &SketchConfig) -> Self {
        let middle = config.canvas_height / 2.0;
        Self {
            y: middle - config.bob_start_offset,
            speed: config.bob_speed.abs(),
            low: middle - config.bob_low_offset,
            high: middle - config.bob_high_offset,
        }
    }

    /// Move one frame and bounce off whichever bound was reached.
    pub fn step(&mut self) {
        self.y += self.speed;
        if self.y >= self.low {
            self.speed = -self.speed.abs();
        }
        if self.y <= self.high {
            self.speed = self.speed.abs();
        }
    }
}

impl Default for CentralBob {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}
