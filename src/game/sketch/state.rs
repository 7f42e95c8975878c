use bevy::prelude::*;
use rand::Rng;

use super::action::SketchAction;
use super::description::DescriptionPanel;
use super::mode::Mode;
use super::swarm::{SpawnArea, Swarm};

/// Everything the sketch mutates in response to input, in one place.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SketchState {
    pub swarm: Swarm,
    pub mode: Mode,
    pub panel: DescriptionPanel,
}

impl SketchState {
    /// All controls are locked while the swarm deploys.
    pub fn accepts_input(&self) -> bool {
        !self.swarm.is_deploying()
    }

    /// State transition for one action. Rejected actions return the state
    /// unchanged.
    pub fn apply<R: Rng + ?Sized>(
        mut self,
        action: SketchAction,
        spawn: &SpawnArea,
        rng: &mut R,
    ) -> Self {
        if !self.accepts_input() {
            return self;
        }

        match action {
            SketchAction::AddMember => {
                self.swarm.add_member(spawn.sample(rng));
            }
            SketchAction::RemoveMember => {
                self.swarm.remove_member();
            }
            SketchAction::ToggleSearchDescription => self.panel.toggle(Mode::Search),
            SketchAction::ToggleMode => self.mode = self.mode.toggled(),
            SketchAction::ToggleOperationDescription => self.panel.toggle(Mode::Operation),
        }
        self
    }
}
