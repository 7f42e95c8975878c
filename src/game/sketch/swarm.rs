//! Background swarm: members are added and removed by hand until the swarm
//! reaches capacity, then every member is marched off the bottom of the
//! canvas and the swarm empties itself.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::game::config::SketchConfig;

/// Member position in canvas coordinates (origin top-left, y grows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwarmPhase {
    #[default]
    Idle,
    Deploying,
}

/// Capacity and motion parameters for a swarm tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmRules {
    pub capacity: usize,
    pub step: f32,
    pub exit_y: f32,
}

impl SwarmRules {
    pub fn from_config(config: &SketchConfig) -> Self {
        Self {
            capacity: config.swarm_capacity,
            step: config.deploy_step,
            exit_y: config.exit_y(),
        }
    }
}

impl Default for SwarmRules {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

/// Region new members are dropped into.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnArea {
    pub x: RangeInclusive<f32>,
    pub y: RangeInclusive<f32>,
}

impl SpawnArea {
    pub fn from_config(config: &SketchConfig) -> Self {
        let x_min = config.spawn_margin_x;
        let x_max = (config.canvas_width - config.spawn_margin_x).max(x_min);
        let y_max = config.spawn_y_max.max(config.spawn_y_min);
        Self {
            x: x_min..=x_max,
            y: config.spawn_y_min..=y_max,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(
            rng.random_range(self.x.clone()),
            rng.random_range(self.y.clone()),
        )
    }
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

/// What a single tick did, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub moved: usize,
    pub removed: usize,
    /// New phase, if the tick changed it.
    pub transition: Option<SwarmPhase>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Swarm {
    members: Vec<Position>,
    deploying: bool,
}

impl Swarm {
    pub fn members(&self) -> &[Position] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_deploying(&self) -> bool {
        self.deploying
    }

    pub fn phase(&self) -> SwarmPhase {
        if self.deploying {
            SwarmPhase::Deploying
        } else {
            SwarmPhase::Idle
        }
    }

    /// Appends a member. Capacity is checked by the next [`Swarm::tick`],
    /// not here. Returns `false` while deploying.
    pub fn add_member(&mut self, position: Position) -> bool {
        if self.deploying {
            return false;
        }
        self.members.push(position);
        true
    }

    /// Pops the most recently added member.
    pub fn remove_member(&mut self) -> Option<Position> {
        if self.deploying {
            return None;
        }
        self.members.pop()
    }

    /// Advance one frame.
    ///
    /// Below capacity and idle, nothing moves. Otherwise the swarm is
    /// deploying: members still above `exit_y` step down, the rest are
    /// dropped, and an empty swarm returns to idle. Every member is visited
    /// exactly once per tick.
    pub fn tick(&mut self, rules: &SwarmRules) -> TickReport {
        if !self.deploying && self.members.len() < rules.capacity {
            return TickReport::default();
        }

        let before_phase = self.phase();
        self.deploying = true;

        let before = self.members.len();
        self.members.retain_mut(|member| {
            if member.y < rules.exit_y {
                member.y += rules.step;
                true
            } else {
                false
            }
        });
        let removed = before - self.members.len();

        if self.members.is_empty() {
            self.deploying = false;
        }

        let after_phase = self.phase();
        TickReport {
            moved: self.members.len(),
            removed,
            transition: (before_phase != after_phase).then_some(after_phase),
        }
    }
}
