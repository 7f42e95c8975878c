/// Sketch core - the state the buttons drive and the per-frame animation
///
/// This module is organized into:
/// - action: the closed set of user actions and the message that carries them
/// - state: `SketchState` and the action transition
/// - swarm: background swarm lifecycle and deployment
/// - mode: search/operation mode toggle
/// - description: the description overlay state and texts
/// - bob: idle animation of the central nanobot
///
/// Nothing here touches rendering, so the plugin runs headless under
/// `MinimalPlugins`.

mod action;
mod bob;
mod description;
mod mode;
mod state;
mod swarm;


use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::config::{load_sketch_config, SketchConfig};

pub use action::{ActionPressed, SketchAction};
pub use bob::CentralBob;
pub use description::{DescriptionPanel, OPERATION_TEXT, PANEL_SIZE, PANEL_TEXT_SIZE, SEARCH_TEXT};
pub use mode::Mode;
pub use state::SketchState;
pub use swarm::{Position, SpawnArea, Swarm, SwarmPhase, SwarmRules, TickReport};

/// Frame ordering: input is collected, actions are applied, the swarm
/// animates, visuals catch up, and the central nanobot steps after it has
/// been drawn.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SketchSet {
    Input,
    Dispatch,
    Animate,
    Present,
    Settle,
}

/// Random source for member placement.
#[derive(Resource)]
pub struct SketchRng(pub StdRng);

/// Rules derived from [`SketchConfig`] once at startup.
#[derive(Resource, Debug, Clone)]
pub struct SketchRules {
    pub swarm: SwarmRules,
    pub spawn: SpawnArea,
}

pub struct SketchCorePlugin;

impl Plugin for SketchCorePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ActionPressed>()
            .configure_sets(
                Update,
                (
                    SketchSet::Input,
                    SketchSet::Dispatch,
                    SketchSet::Animate,
                    SketchSet::Present,
                    SketchSet::Settle,
                )
                    .chain(),
            )
            .add_systems(Startup, (load_sketch_config, init_sketch).chain())
            .add_systems(Update, dispatch_actions.in_set(SketchSet::Dispatch))
            .add_systems(Update, advance_swarm.in_set(SketchSet::Animate))
            .add_systems(Update, advance_bob.in_set(SketchSet::Settle));
    }
}

pub fn init_sketch(mut commands: Commands, config: Res<SketchConfig>) {
    let rng = match config.rng_seed {
        Some(seed) => {
            info!("Seeding swarm placement with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    commands.insert_resource(SketchRng(rng));
    commands.insert_resource(SketchRules {
        swarm: SwarmRules::from_config(&config),
        spawn: SpawnArea::from_config(&config),
    });
    commands.insert_resource(CentralBob::from_config(&config));
    commands.insert_resource(SketchState::default());

    info!(
        "Sketch ready: {}x{} canvas, swarm capacity {}",
        config.canvas_width, config.canvas_height, config.swarm_capacity
    );
}

/// Apply every action pressed since the last frame, in order.
pub fn dispatch_actions(
    mut actions: MessageReader<ActionPressed>,
    mut sketch: ResMut<SketchState>,
    mut rng: ResMut<SketchRng>,
    rules: Res<SketchRules>,
) {
    for ActionPressed(action) in actions.read() {
        if !sketch.accepts_input() {
            debug!("Ignoring {:?} while the swarm is deploying", action);
            continue;
        }

        let state = std::mem::take(&mut *sketch);
        *sketch = state.apply(*action, &rules.spawn, &mut rng.0);
        debug!(
            "{:?} -> {} members, {} mode, panel {}",
            action,
            sketch.swarm.len(),
            sketch.mode.label(),
            if sketch.panel.visible { "shown" } else { "hidden" }
        );
    }
}

pub fn advance_swarm(mut sketch: ResMut<SketchState>, rules: Res<SketchRules>) {
    // Idle ticks leave the swarm untouched, so skip change detection for them.
    if !sketch.swarm.is_deploying() && sketch.swarm.len() < rules.swarm.capacity {
        return;
    }

    let report = sketch.swarm.tick(&rules.swarm);
    match report.transition {
        Some(SwarmPhase::Deploying) => {
            info!("Swarm reached {} members, deploying", rules.swarm.capacity)
        }
        Some(SwarmPhase::Idle) => info!("Swarm deployed, controls unlocked"),
        None => {}
    }
    if report.removed > 0 {
        debug!("{} members left the canvas, {} remain", report.removed, report.moved);
    }
}

pub fn advance_bob(mut bob: ResMut<CentralBob>) {
    bob.step();
}
