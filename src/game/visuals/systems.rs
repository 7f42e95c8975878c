use bevy::prelude::*;
use crate::game::config::SketchConfig;
use crate::game::sketch::{CentralBob, SketchState, PANEL_SIZE, PANEL_TEXT_SIZE};

use super::canvas_to_world;
use super::components::*;
use super::resources::ModeImages;

const SWARM_Z: f32 = 0.0;
const CENTRAL_Z: f32 = 10.0;

/// Spawns the camera, the central nanobot and the (hidden) description overlay
pub(super) fn setup_scene(
    mut commands: Commands,
    images: Res<ModeImages>,
    bob: Res<CentralBob>,
    config: Res<SketchConfig>,
) {
    commands.spawn(Camera2d);

    let center = canvas_to_world(&config, Vec2::new(config.canvas_width / 2.0, bob.y));
    commands.spawn((
        // NOLINT: Handle::clone() is cheap (Arc-based ref count)
        Sprite::from_image(images.search.clone()),
        Transform::from_xyz(center.x, center.y, CENTRAL_Z),
        CentralNanobot,
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(PANEL_SIZE.x),
                height: Val::Px(PANEL_SIZE.y),
                border: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba_u8(57, 32, 97, 180)),
            BorderColor::from(Color::WHITE),
            Visibility::Hidden,
            DescriptionPanelRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                TextLayout::new_with_justify(Justify::Center),
                Node {
                    width: Val::Px(PANEL_TEXT_SIZE.x),
                    max_height: Val::Px(PANEL_TEXT_SIZE.y),
                    ..default()
                },
                DescriptionText,
            ));
        });
}

/// Keeps one sprite per swarm member, positioned and sized for the current mode.
///
/// Sprites are indexed like the members they draw, so the swarm shrinking
/// from either end (pop or deployment exit) only ever drops the highest
/// indices.
pub(super) fn sync_swarm_sprites(
    mut commands: Commands,
    sketch: Res<SketchState>,
    images: Res<ModeImages>,
    config: Res<SketchConfig>,
    mut sprites: Query<(Entity, &SwarmSprite, &mut Transform, &mut Sprite)>,
) {
    if !sketch.is_changed() {
        return;
    }

    let members = sketch.swarm.members();
    let size = Vec2::new(config.member_width, sketch.mode.member_height(&config));
    let image = images.for_mode(sketch.mode);
    let mut drawn = vec![false; members.len()];

    for (entity, index, mut transform, mut sprite) in sprites.iter_mut() {
        let Some(member) = members.get(index.0) else {
            commands.entity(entity).despawn();
            continue;
        };
        drawn[index.0] = true;

        let p = canvas_to_world(&config, Vec2::new(member.x, member.y));
        transform.translation = Vec3::new(p.x, p.y, SWARM_Z);
        sprite.custom_size = Some(size);
        if sprite.image != *image {
            // NOLINT: Handle::clone() is cheap (Arc-based ref count)
            sprite.image = image.clone();
        }
    }

    for (index, member) in members.iter().enumerate() {
        if drawn[index] {
            continue;
        }
        let p = canvas_to_world(&config, Vec2::new(member.x, member.y));
        commands.spawn((
            Sprite {
                // NOLINT: Handle::clone() is cheap (Arc-based ref count)
                image: image.clone(),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(p.x, p.y, SWARM_Z),
            SwarmSprite(index),
        ));
    }
}

/// Moves the central nanobot along its bob and swaps its image with the mode
pub(super) fn sync_central_nanobot(
    bob: Res<CentralBob>,
    sketch: Res<SketchState>,
    images: Res<ModeImages>,
    config: Res<SketchConfig>,
    mut query: Query<(&mut Transform, &mut Sprite), With<CentralNanobot>>,
) {
    let center = canvas_to_world(&config, Vec2::new(config.canvas_width / 2.0, bob.y));
    for (mut transform, mut sprite) in query.iter_mut() {
        transform.translation.x = center.x;
        transform.translation.y = center.y;

        if sketch.is_changed() {
            let image = images.for_mode(sketch.mode);
            if sprite.image != *image {
                // NOLINT: Handle::clone() is cheap (Arc-based ref count)
                sprite.image = image.clone();
            }
        }
    }
}

/// Shows, hides and repositions the description overlay
pub(super) fn sync_description_panel(
    sketch: Res<SketchState>,
    config: Res<SketchConfig>,
    mut panels: Query<(&mut Node, &mut Visibility), With<DescriptionPanelRoot>>,
    mut texts: Query<&mut Text, With<DescriptionText>>,
) {
    if !sketch.is_changed() {
        return;
    }

    let panel = sketch.panel;
    let center = panel.center(&config);
    for (mut node, mut visibility) in panels.iter_mut() {
        *visibility = if panel.visible { Visibility::Visible } else { Visibility::Hidden };
        node.left = Val::Px(center.x - PANEL_SIZE.x / 2.0);
        node.top = Val::Px(center.y - PANEL_SIZE.y / 2.0);
    }
    for mut text in texts.iter_mut() {
        text.0 = panel.text().to_string();
    }
}
