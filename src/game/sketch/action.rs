use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Every user action the sketch understands. Ids are stable and match the
/// `id` field of the button layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SketchAction {
    AddMember,
    RemoveMember,
    ToggleSearchDescription,
    ToggleMode,
    ToggleOperationDescription,
}

impl SketchAction {
    pub const ALL: [SketchAction; 5] = [
        SketchAction::AddMember,
        SketchAction::RemoveMember,
        SketchAction::ToggleSearchDescription,
        SketchAction::ToggleMode,
        SketchAction::ToggleOperationDescription,
    ];

    pub fn id(self) -> u8 {
        match self {
            SketchAction::AddMember => 0,
            SketchAction::RemoveMember => 1,
            SketchAction::ToggleSearchDescription => 2,
            SketchAction::ToggleMode => 3,
            SketchAction::ToggleOperationDescription => 4,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}

/// A button press or shortcut, consumed once per frame before the swarm ticks.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionPressed(pub SketchAction);
