// Enemy character controller

use glam::Vec2;

use super::animation::{AnimFloat, LocomotionAnim};
use super::character::{CharacterBody, CharacterController, CharacterCore, Outputs};
use super::intent::{IntentSource, Perception};
use super::tuning::CharacterTuning;
use crate::core::math::has_axis_input;
use crate::core::CooldownTimer;

/// Enemy attacks always play the first combo step
const ENEMY_ATTACK_STEP: u8 = 1;

/// Heuristic-driven controller that chases, engages and jumps over a target
#[derive(Debug, Clone)]
pub struct EnemyController {
    core: CharacterCore,
    attack_cooldown: CooldownTimer,
    roll_cooldown: CooldownTimer,
    jump_cooldown: CooldownTimer,
}

impl EnemyController {
    pub fn new(tuning: CharacterTuning, hitbox_offset_x: Option<f32>) -> Self {
        Self {
            core: CharacterCore::new("enemy", tuning, hitbox_offset_x),
            attack_cooldown: CooldownTimer::ready_now(),
            roll_cooldown: CooldownTimer::ready_now(),
            jump_cooldown: CooldownTimer::ready_now(),
        }
    }

    pub fn attack_cooldown(&self) -> &CooldownTimer {
        &self.attack_cooldown
    }

    pub fn roll_cooldown(&self) -> &CooldownTimer {
        &self.roll_cooldown
    }

    pub fn jump_cooldown(&self) -> &CooldownTimer {
        &self.jump_cooldown
    }

    /// Per rendered frame
    ///
    /// `target` is the tracked character's position, `None` once it is gone.
    /// Without a target only the running roll and hitbox window advance.
    pub fn update(
        &mut self,
        dt: f32,
        source: &mut dyn IntentSource,
        target: Option<Vec2>,
        body: &mut dyn CharacterBody,
        out: &mut Outputs<'_>,
    ) {
        self.core.tick_deferred(dt, out);

        if target.is_none() {
            log::trace!("{} has no target", self.core.name);
            return;
        }

        self.attack_cooldown.tick(dt);
        self.roll_cooldown.tick(dt);
        self.jump_cooldown.tick(dt);

        let perception = Perception {
            position: body.position(),
            facing: self.core.facing(),
            grounded: self.core.is_grounded(),
            rolling: self.core.is_rolling(),
            attack_ready: self.attack_cooldown.ready(),
            roll_ready: self.roll_cooldown.ready(),
            jump_ready: self.jump_cooldown.ready(),
            attack_range: self.core.tuning.attack_range,
            target,
        };
        let Some(intent) = source.intent(&perception) else {
            return;
        };

        self.core.resolve_facing(intent.face_x, out);

        if self.core.is_rolling() {
            return;
        }

        let tuning = self.core.tuning;
        let mut velocity = body.velocity();

        if intent.jump {
            let velocity = Vec2::new(intent.move_x * tuning.move_speed, tuning.jump_force);
            self.jump_cooldown.reset(tuning.jump_cooldown);
            self.core.jump(velocity, body, out);
        } else if has_axis_input(intent.move_x) {
            velocity.x = intent.move_x * tuning.move_speed;
            body.set_velocity(velocity);
            out.animator.set_locomotion(LocomotionAnim::Move);
        } else {
            velocity.x = 0.0;
            body.set_velocity(velocity);
            out.animator.set_locomotion(LocomotionAnim::Idle);

            if intent.attack {
                self.attack_cooldown.reset(tuning.attack_cooldown);
                self.core.attack(ENEMY_ATTACK_STEP, out);
            } else if intent.roll {
                if self.core.start_roll(tuning.roll_duration, body, out) {
                    self.roll_cooldown.reset(tuning.roll_cooldown);
                }
            }
        }
    }
}

impl CharacterController for EnemyController {
    fn core(&self) -> &CharacterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut CharacterCore {
        &mut self.core
    }

    fn fixed_update(&mut self, body: &mut dyn CharacterBody, out: &mut Outputs<'_>) {
        self.core.hold_roll_velocity(body);
        out.animator.set_float(AnimFloat::AirSpeedY, body.velocity().y);
    }
}
