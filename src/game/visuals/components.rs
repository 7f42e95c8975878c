use bevy::prelude::*;

/// The large nanobot in the middle of the canvas
#[derive(Component)]
pub struct CentralNanobot;

/// Sprite drawn for the swarm member at this index
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwarmSprite(pub usize);

/// Root node of the description overlay
#[derive(Component)]
pub struct DescriptionPanelRoot;

#[derive(Component)]
pub struct DescriptionText;
