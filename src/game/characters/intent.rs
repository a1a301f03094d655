// Per-frame intent: what a character wants to do, from input or a heuristic

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::facing::Facing;
use crate::core::math::has_axis_input;
use crate::engine::input::{Action, InputState};

/// Enemy jumps over a target closer than `attack_range` times this
pub const JUMP_OVER_RANGE_SCALE: f32 = 1.5;
/// Horizontal speed of a jump-over relative to move speed
pub const JUMP_OVER_SPEED_SCALE: f32 = 1.2;
/// A draw above this triggers a jump-over
pub const JUMP_OVER_CHANCE_GATE: f32 = 0.7;
/// A draw above this triggers an attack while engaging
pub const ATTACK_CHANCE_GATE: f32 = 0.5;

/// One frame of intent
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intent {
    /// Signed quantity the facing is resolved from
    pub face_x: f32,
    /// Horizontal movement in move-speed units (player axis, enemy chase)
    pub move_x: f32,
    pub attack: bool,
    pub block_down: bool,
    pub block_up: bool,
    pub roll: bool,
    pub jump: bool,
}

/// What a controller lets its intent source see this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perception {
    pub position: Vec2,
    pub facing: Facing,
    pub grounded: bool,
    pub rolling: bool,
    pub attack_ready: bool,
    pub roll_ready: bool,
    pub jump_ready: bool,
    pub attack_range: f32,
    /// Position of the tracked target, if it still exists
    pub target: Option<Vec2>,
}

/// Produces a character's intent each frame
///
/// `None` means "no decision this frame"; the controller skips its
/// transitions but keeps running deferred actions.
pub trait IntentSource {
    fn intent(&mut self, perception: &Perception) -> Option<Intent>;
}

/// Uniform draws in [0, 1)
pub trait UnitRandom {
    fn unit(&mut self) -> f32;
}

impl UnitRandom for ChaCha8Rng {
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Intent read from the player's input state
pub struct PlayerIntentSource<'a> {
    input: &'a InputState,
}

impl<'a> PlayerIntentSource<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self { input }
    }
}

impl IntentSource for PlayerIntentSource<'_> {
    fn intent(&mut self, _perception: &Perception) -> Option<Intent> {
        let axis = self.input.horizontal_axis();
        let axis = if has_axis_input(axis) { axis } else { 0.0 };

        Some(Intent {
            face_x: axis,
            move_x: axis,
            attack: self.input.just_pressed(Action::Attack),
            block_down: self.input.just_pressed(Action::Block),
            block_up: self.input.just_released(Action::Block),
            roll: self.input.just_pressed(Action::Roll),
            jump: self.input.just_pressed(Action::Jump),
        })
    }
}

/// Proximity heuristic against a single target
///
/// In priority order: jump over a close target, chase a distant one, or
/// engage (attack, else roll). Draws are taken only at the gates actually
/// reached, so a scripted source lines up with the decisions.
#[derive(Debug, Clone)]
pub struct EnemyIntentSource<R: UnitRandom> {
    rng: R,
}

impl EnemyIntentSource<ChaCha8Rng> {
    /// Deterministic source for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: UnitRandom> EnemyIntentSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: UnitRandom> IntentSource for EnemyIntentSource<R> {
    fn intent(&mut self, p: &Perception) -> Option<Intent> {
        let target = p.target?;
        let dx = target.x - p.position.x;
        let mut intent = Intent {
            face_x: dx,
            ..Intent::default()
        };

        if p.rolling {
            return Some(intent);
        }

        // Facing this frame, after resolution
        let facing = Facing::from_delta(dx).unwrap_or(p.facing);
        let distance = p.position.distance(target);

        if distance < p.attack_range * JUMP_OVER_RANGE_SCALE
            && p.grounded
            && p.jump_ready
            && self.rng.unit() > JUMP_OVER_CHANCE_GATE
        {
            intent.jump = true;
            intent.move_x = -facing.sign() * JUMP_OVER_SPEED_SCALE;
        } else if distance > p.attack_range {
            intent.move_x = facing.sign();
        } else if p.attack_ready && self.rng.unit() > ATTACK_CHANCE_GATE {
            intent.attack = true;
        } else if p.roll_ready {
            intent.roll = true;
        }

        Some(intent)
    }
}
