use bevy::prelude::*;
use crate::game::sketch::{ActionPressed, SketchAction};
use super::components::*;

/// Handle button visual feedback on interaction
pub fn button_system(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, mut color) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed | Interaction::Hovered => {
                *color = BackgroundColor(BUTTON_HOVER);
            }
            Interaction::None => {
                *color = BackgroundColor(BUTTON_IDLE);
            }
        }
    }
}

/// Turn button presses into sketch actions
pub fn action_button_handler(
    interaction_query: Query<
        (&Interaction, &ActionButton),
        (Changed<Interaction>, With<Button>),
    >,
    mut actions: MessageWriter<ActionPressed>,
) {
    for (interaction, button) in &interaction_query {
        if *interaction == Interaction::Pressed {
            actions.write(ActionPressed(button.0));
        }
    }
}

/// Number keys 1-5 press the buttons in id order
pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut actions: MessageWriter<ActionPressed>,
) {
    const SHORTCUTS: [KeyCode; 5] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
    ];

    for (key, action) in SHORTCUTS.into_iter().zip(SketchAction::ALL) {
        if keys.just_pressed(key) {
            actions.write(ActionPressed(action));
        }
    }
}
