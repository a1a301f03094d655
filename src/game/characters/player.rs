// Player character controller

use glam::Vec2;

use super::animation::{AnimFloat, LocomotionAnim};
use super::character::{CharacterBody, CharacterController, CharacterCore, Outputs};
use super::combo::ComboCounter;
use super::intent::{IntentSource, Perception};
use super::tuning::CharacterTuning;
use crate::core::math::has_axis_input;

/// How long the axis must stay released before `Idle` is shown
pub const IDLE_DELAY: f32 = 0.05;

/// Input-driven controller: attacks in a 3-step combo, blocks, rolls, jumps
#[derive(Debug, Clone)]
pub struct PlayerController {
    core: CharacterCore,
    combo: ComboCounter,
    /// Jump edge waiting for the next physics step
    jump_requested: bool,
    idle_delay: f32,
    /// Horizontal axis from the last frame, applied in the fixed step
    axis: f32,
}

impl PlayerController {
    pub fn new(tuning: CharacterTuning, hitbox_offset_x: Option<f32>) -> Self {
        Self {
            core: CharacterCore::new("player", tuning, hitbox_offset_x),
            combo: ComboCounter::new(),
            jump_requested: false,
            idle_delay: 0.0,
            axis: 0.0,
        }
    }

    pub fn combo(&self) -> &ComboCounter {
        &self.combo
    }

    pub fn jump_requested(&self) -> bool {
        self.jump_requested
    }

    /// What the player can do right now
    ///
    /// The player has no roll or jump cooldowns, so readiness is the state
    /// check alone. There is no tracked target. Input-driven sources read the
    /// buttons and ignore all of this.
    pub fn perception(&self, body: &dyn CharacterBody) -> Perception {
        Perception {
            position: body.position(),
            facing: self.core.facing(),
            grounded: self.core.is_grounded(),
            rolling: self.core.is_rolling(),
            attack_ready: self.combo.can_attack(),
            roll_ready: !self.core.is_rolling() && !self.core.is_jumping(),
            jump_ready: self.core.is_grounded() && !self.core.is_rolling(),
            attack_range: self.core.tuning.attack_range,
            target: None,
        }
    }

    /// Per rendered frame: timers, facing, then actions
    pub fn update(
        &mut self,
        dt: f32,
        source: &mut dyn IntentSource,
        body: &mut dyn CharacterBody,
        out: &mut Outputs<'_>,
    ) {
        self.combo.tick(dt);
        self.core.tick_deferred(dt, out);

        let perception = self.perception(body);
        let Some(intent) = source.intent(&perception) else {
            return;
        };

        self.core.resolve_facing(intent.face_x, out);
        self.axis = intent.move_x;

        if intent.attack && self.combo.can_attack() && !self.core.is_rolling() {
            let step = self.combo.advance();
            self.core.attack(step, out);
        }

        if intent.block_down && !self.core.is_rolling() {
            self.core.block_down(out);
        }
        if intent.block_up {
            self.core.block_up(out);
        }

        if intent.roll && !self.core.is_rolling() {
            let duration = self.core.tuning.roll_duration;
            self.core.start_roll(duration, body, out);
        }

        if intent.jump {
            self.jump_requested = true;
        }

        if has_axis_input(self.axis) {
            self.idle_delay = IDLE_DELAY;
            out.animator.set_locomotion(LocomotionAnim::Move);
        } else {
            self.idle_delay -= dt;
            if self.idle_delay < 0.0 {
                out.animator.set_locomotion(LocomotionAnim::Idle);
            }
        }
    }
}

impl CharacterController for PlayerController {
    fn core(&self) -> &CharacterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut CharacterCore {
        &mut self.core
    }

    fn fixed_update(&mut self, body: &mut dyn CharacterBody, out: &mut Outputs<'_>) {
        if self.core.is_rolling() {
            self.core.hold_roll_velocity(body);
        } else {
            let mut velocity = body.velocity();
            velocity.x = self.axis * self.core.tuning.move_speed;
            body.set_velocity(velocity);
        }

        if self.jump_requested {
            if self.core.is_grounded() && !self.core.is_rolling() {
                let velocity = Vec2::new(body.velocity().x, self.core.tuning.jump_force);
                self.core.jump(velocity, body, out);
            } else {
                // A request that finds the player airborne or rolling still
                // drops the grounded flag
                self.core.leave_ground(out.animator);
            }
            self.jump_requested = false;
        }

        out.animator.set_float(AnimFloat::AirSpeedY, body.velocity().y);
    }
}
