use bevy::prelude::*;
use crate::game::config::{ButtonLayout, ButtonLayoutHandle, ButtonSpec};
use crate::game::sketch::SketchAction;
use super::components::*;

/// Macro to spawn an absolutely positioned action button with a label
macro_rules! spawn_action_button {
    ($parent:expr, $spec:expr, $action:expr) => {
        $parent.spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px($spec.x - $spec.width / 2.0),
                top: Val::Px($spec.y - $spec.height / 2.0),
                width: Val::Px($spec.width),
                height: Val::Px($spec.height),
                border: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BorderColor::from(Color::WHITE),
            BackgroundColor(BUTTON_IDLE),
            ActionButton($action),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new($spec.label.clone()),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
    };
}

/// (Re)spawn the buttons whenever the layout asset loads or changes
pub fn rebuild_buttons(
    mut commands: Commands,
    layout_handle: Option<Res<ButtonLayoutHandle>>,
    layouts: Res<Assets<ButtonLayout>>,
    mut events: MessageReader<AssetEvent<ButtonLayout>>,
    roots: Query<Entity, With<HudRoot>>,
) {
    let Some(layout_handle) = layout_handle else {
        return;
    };

    let mut changed = false;
    for event in events.read() {
        if event.is_modified(layout_handle.0.id()) || event.is_loaded_with_dependencies(layout_handle.0.id()) {
            changed = true;
        }
    }
    if !changed {
        return;
    }
    let Some(layout) = layouts.get(&layout_handle.0) else {
        return;
    };

    for entity in roots.iter() {
        commands.entity(entity).despawn();
    }

    let buttons = resolve_buttons(&layout.buttons);
    info!("Spawning {} buttons from layout", buttons.len());

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            for (spec, action) in buttons {
                spawn_action_button!(parent, spec, action);
            }
        });
}

/// Pair layout entries with their actions, dropping unknown ids
pub(super) fn resolve_buttons(specs: &[ButtonSpec]) -> Vec<(&ButtonSpec, SketchAction)> {
    specs
        .iter()
        .filter_map(|spec| match SketchAction::from_id(spec.id) {
            Some(action) => Some((spec, action)),
            None => {
                warn!("Skipping button '{}' with unknown id {}", spec.label, spec.id);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: u8, label: &str) -> ButtonSpec {
        ButtonSpec { id, label: label.to_string(), x: 0.0, y: 0.0, width: 10.0, height: 10.0 }
    }

    #[test]
    fn test_unknown_button_ids_are_skipped() {
        let specs = vec![spec(0, "Add"), spec(9, "Bogus"), spec(3, "Mode")];
        let resolved = resolve_buttons(&specs);
        let actions: Vec<_> = resolved.iter().map(|(_, a)| *a).collect();
        assert_eq!(actions, vec![SketchAction::AddMember, SketchAction::ToggleMode]);
    }
}
