use bevy::math::Vec2;

use crate::game::config::SketchConfig;

use super::mode::Mode;

pub const SEARCH_TEXT: &str = "The nanobots start in a hyper-mobile \"search mode\", where \
they are the most capable of traversing the body. They utilize an array of 10 cameras \
around their carapace to get a 360 degree visualization of their surroundings.";

pub const OPERATION_TEXT: &str = "Once a nanobot has reached its designated target, it will \
shift into \"operation mode\" by opening the storage module in its tip. Inside the nanobot \
is an array of miniature tools used for conducting medical aid on the body. These tools \
consist of 2 calipers/claws, a medical saw, a scalpel, and a syringe for administering \
antibiotics and healing medication to any wounds.";

pub const PANEL_SIZE: Vec2 = Vec2::new(230.0, 300.0);
pub const PANEL_TEXT_SIZE: Vec2 = Vec2::new(150.0, 250.0);
pub const PANEL_EDGE_INSET: f32 = 160.0;
pub const PANEL_RISE: f32 = 90.0;

/// Description overlay: shown or hidden, and which mode it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DescriptionPanel {
    pub visible: bool,
    pub topic: Mode,
}

impl DescriptionPanel {
    /// Flip visibility and point the panel at `topic`.
    ///
    /// Pressing the other topic's button while a panel is open hides it.
    pub fn toggle(&mut self, topic: Mode) {
        self.visible = !self.visible;
        self.topic = topic;
    }

    pub fn text(&self) -> &'static str {
        match self.topic {
            Mode::Search => SEARCH_TEXT,
            Mode::Operation => OPERATION_TEXT,
        }
    }

    /// Panel center in canvas coordinates. Each description sits above its
    /// own button, search on the left edge and operation on the right.
    pub fn center(&self, config: &SketchConfig) -> Vec2 {
        let x = match self.topic {
            Mode::Search => PANEL_EDGE_INSET,
            Mode::Operation => config.canvas_width - PANEL_EDGE_INSET,
        };
        Vec2::new(x, config.canvas_height / 2.0 - PANEL_RISE)
    }
}
