use bevy::prelude::*;
use nanobot_swarm::game::config::SketchConfig;
use nanobot_swarm::game::sketch::{
    ActionPressed, CentralBob, Mode, SketchAction, SketchCorePlugin, SketchState,
};

/// Headless app with the sketch core and a fixed placement seed
fn sketch_app(config: SketchConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(config);
    app.add_plugins(SketchCorePlugin);

    // Startup
    app.update();
    app
}

fn seeded_config() -> SketchConfig {
    SketchConfig {
        rng_seed: Some(7),
        ..SketchConfig::default()
    }
}

fn press(app: &mut App, action: SketchAction) {
    app.world_mut().write_message(ActionPressed(action));
}

fn state(app: &App) -> &SketchState {
    app.world().resource::<SketchState>()
}

#[test]
fn test_inserted_config_is_kept() {
    let app = sketch_app(SketchConfig {
        swarm_capacity: 3,
        ..seeded_config()
    });
    assert_eq!(app.world().resource::<SketchConfig>().swarm_capacity, 3);
}

#[test]
fn test_random_add_remove_sequences_below_capacity() {
    let mut rng = fastrand::Rng::with_seed(11);

    for _ in 0..20 {
        let mut app = sketch_app(seeded_config());
        let mut expected: usize = 0;

        for _ in 0..60 {
            let action = if rng.bool() && expected < 29 {
                expected += 1;
                SketchAction::AddMember
            } else {
                expected = expected.saturating_sub(1);
                SketchAction::RemoveMember
            };
            press(&mut app, action);
            app.update();

            assert_eq!(state(&app).swarm.len(), expected);
            assert!(!state(&app).swarm.is_deploying());
        }
    }
}

#[test]
fn test_thirtieth_member_deploys_then_swarm_drains() {
    let mut app = sketch_app(seeded_config());

    for _ in 0..29 {
        press(&mut app, SketchAction::AddMember);
    }
    app.update();
    assert_eq!(state(&app).swarm.len(), 29);
    assert!(!state(&app).swarm.is_deploying());

    press(&mut app, SketchAction::AddMember);
    app.update();
    assert!(state(&app).swarm.is_deploying());

    // Controls are locked while deploying
    let len = state(&app).swarm.len();
    let before: Vec<f32> = state(&app).swarm.members().iter().map(|m| m.y).collect();
    press(&mut app, SketchAction::RemoveMember);
    press(&mut app, SketchAction::AddMember);
    press(&mut app, SketchAction::ToggleMode);
    app.update();
    assert_eq!(state(&app).swarm.len(), len);
    assert_eq!(state(&app).mode, Mode::Search);
    for (member, y) in state(&app).swarm.members().iter().zip(before) {
        assert_eq!(member.y, y + 12.0);
    }

    // Members spawn no higher than y = 150, so 56 ticks clear the canvas
    for _ in 0..56 {
        app.update();
    }
    assert_eq!(state(&app).swarm.len(), 0);
    assert!(!state(&app).swarm.is_deploying());

    // Unlocked again
    press(&mut app, SketchAction::AddMember);
    app.update();
    assert_eq!(state(&app).swarm.len(), 1);
}

#[test]
fn test_actions_apply_in_press_order_within_a_frame() {
    let mut app = sketch_app(seeded_config());

    press(&mut app, SketchAction::AddMember);
    press(&mut app, SketchAction::AddMember);
    press(&mut app, SketchAction::RemoveMember);
    press(&mut app, SketchAction::ToggleOperationDescription);
    press(&mut app, SketchAction::ToggleMode);
    app.update();

    let sketch = state(&app);
    assert_eq!(sketch.swarm.len(), 1);
    assert!(sketch.panel.visible);
    assert_eq!(sketch.panel.topic, Mode::Operation);
    assert_eq!(sketch.mode, Mode::Operation);
}

#[test]
fn test_same_seed_places_members_identically() {
    let mut first = sketch_app(seeded_config());
    let mut second = sketch_app(seeded_config());

    for app in [&mut first, &mut second] {
        for _ in 0..10 {
            press(app, SketchAction::AddMember);
        }
        app.update();
    }

    assert_eq!(state(&first).swarm.members(), state(&second).swarm.members());
}

#[test]
fn test_central_bob_moves_every_frame() {
    let mut app = sketch_app(seeded_config());
    let start = app.world().resource::<CentralBob>().y;

    app.update();
    let next = app.world().resource::<CentralBob>().y;

    assert_ne!(start, next);
    assert!((next - start).abs() <= 0.5 + f32::EPSILON);
}
