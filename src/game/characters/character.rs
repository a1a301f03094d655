// State and behaviour shared by every character controller

use glam::Vec2;

use super::animation::{AnimBool, AnimTrigger, Animator};
use super::facing::{Facing, FacingResolver};
use super::ground::GroundContactTracker;
use super::hitbox::{HitboxRig, HitboxScheduler};
use super::state::{ActionEvent, ActionState, ActionStateMachine};
use super::tuning::CharacterTuning;

/// The physics body a controller steers
pub trait CharacterBody {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
}

/// Where a controller sends its presentation commands
pub struct Outputs<'a> {
    pub animator: &'a mut dyn Animator,
    /// Absent for characters without an attack rig
    pub hitbox: Option<&'a mut dyn HitboxRig>,
}

impl<'a> Outputs<'a> {
    pub fn new(animator: &'a mut dyn Animator, hitbox: Option<&'a mut dyn HitboxRig>) -> Self {
        Self { animator, hitbox }
    }
}

/// Facing, grounded flag, action state and hitbox window of one character
#[derive(Debug, Clone)]
pub struct CharacterCore {
    /// Character name (for logging)
    pub name: String,
    pub tuning: CharacterTuning,
    facing: FacingResolver,
    ground: GroundContactTracker,
    action: ActionStateMachine,
    hitbox: HitboxScheduler,
}

impl CharacterCore {
    /// `hitbox_offset_x` is the authored local offset of the attack hitbox, if any
    pub fn new(name: &str, tuning: CharacterTuning, hitbox_offset_x: Option<f32>) -> Self {
        let facing = match hitbox_offset_x {
            Some(offset) => FacingResolver::new(Facing::Right).with_hitbox_offset(offset),
            None => FacingResolver::new(Facing::Right),
        };

        Self {
            name: name.to_string(),
            tuning,
            facing,
            ground: GroundContactTracker::new(),
            action: ActionStateMachine::new(),
            hitbox: HitboxScheduler::new(),
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing.facing()
    }

    pub fn is_grounded(&self) -> bool {
        self.ground.is_grounded()
    }

    pub fn action(&self) -> ActionState {
        self.action.state()
    }

    pub fn is_rolling(&self) -> bool {
        self.action.is_rolling()
    }

    pub fn is_blocking(&self) -> bool {
        self.action.state().is_blocking()
    }

    pub fn is_jumping(&self) -> bool {
        self.action.state().is_airborne()
    }

    pub fn hitbox(&self) -> &HitboxScheduler {
        &self.hitbox
    }

    /// Run the deferred actions: roll expiry and hitbox expiry
    pub fn tick_deferred(&mut self, dt: f32, out: &mut Outputs<'_>) {
        let was_rolling = self.action.is_rolling();
        self.action.apply(ActionEvent::Tick(dt));
        if was_rolling && !self.action.is_rolling() {
            log::debug!("{} roll finished", self.name);
        }

        self.hitbox.tick(dt, out.hitbox.as_deref_mut());
    }

    /// Update facing from a signed horizontal quantity and mirror sprite and hitbox
    pub fn resolve_facing(&mut self, face_x: f32, out: &mut Outputs<'_>) -> Facing {
        let facing = self.facing.resolve(face_x);
        out.animator.set_mirrored(facing.is_mirrored());
        if let Some(offset_x) = self.facing.hitbox_offset_x() {
            if let Some(rig) = out.hitbox.as_deref_mut() {
                rig.set_offset_x(offset_x);
            }
        }
        facing
    }

    /// Play attack `combo_step` and open its hitbox window
    pub fn attack(&mut self, combo_step: u8, out: &mut Outputs<'_>) {
        log::debug!("{} attack {}", self.name, combo_step);
        out.animator.trigger(AnimTrigger::Attack(combo_step));
        self.hitbox.schedule(
            self.tuning.hitbox_active_time,
            combo_step,
            out.hitbox.as_deref_mut(),
        );
    }

    /// Raise the block; ignored while rolling
    pub fn block_down(&mut self, out: &mut Outputs<'_>) -> bool {
        let was_blocking = self.is_blocking();
        self.action.apply(ActionEvent::BlockDown);
        if was_blocking || !self.is_blocking() {
            return false;
        }
        log::debug!("{} blocking", self.name);
        out.animator.trigger(AnimTrigger::Block);
        out.animator.set_bool(AnimBool::IdleBlock, true);
        true
    }

    /// Lower the block, also cancelling a block queued behind a roll
    pub fn block_up(&mut self, out: &mut Outputs<'_>) {
        self.action.apply(ActionEvent::BlockUp);
        out.animator.set_bool(AnimBool::IdleBlock, false);
    }

    /// Start a roll along the current facing
    ///
    /// Refused while a roll or a jump is already in progress.
    pub fn start_roll(
        &mut self,
        duration: f32,
        body: &mut dyn CharacterBody,
        out: &mut Outputs<'_>,
    ) -> bool {
        let direction = self.facing();
        if !self.action.apply(ActionEvent::Roll {
            direction,
            duration,
        }) {
            return false;
        }
        log::debug!("{} rolling {:?}", self.name, direction);
        out.animator.trigger(AnimTrigger::Roll);
        self.hold_roll_velocity(body);
        true
    }

    /// Keep the roll speed up; locomotion does not write velocity mid-roll
    pub fn hold_roll_velocity(&self, body: &mut dyn CharacterBody) {
        if let Some(direction) = self.action.state().roll_direction() {
            let mut velocity = body.velocity();
            velocity.x = direction.sign() * self.tuning.roll_force;
            body.set_velocity(velocity);
        }
    }

    /// Launch with `velocity` and leave the ground
    pub fn jump(&mut self, velocity: Vec2, body: &mut dyn CharacterBody, out: &mut Outputs<'_>) {
        log::debug!("{} jump ({:.2}, {:.2})", self.name, velocity.x, velocity.y);
        body.set_velocity(velocity);
        self.action.apply(ActionEvent::Jump);
        self.leave_ground(out.animator);
        out.animator.trigger(AnimTrigger::Jump);
    }

    pub fn on_contact_stay(&mut self, normal_y: f32, animator: &mut dyn Animator) {
        if self.ground.on_contact_stay(normal_y) {
            self.action.apply(ActionEvent::Land);
            animator.set_bool(AnimBool::Grounded, true);
        }
    }

    pub fn on_contact_exit(&mut self, animator: &mut dyn Animator) {
        if self.ground.on_contact_exit() {
            animator.set_bool(AnimBool::Grounded, false);
        }
    }

    /// Clear grounded after a jump
    pub fn leave_ground(&mut self, animator: &mut dyn Animator) {
        self.ground.leave_ground();
        animator.set_bool(AnimBool::Grounded, false);
    }
}

/// Common surface of the player and enemy controllers
pub trait CharacterController {
    fn core(&self) -> &CharacterCore;
    fn core_mut(&mut self) -> &mut CharacterCore;

    /// Per physics step: velocity and jump application
    fn fixed_update(&mut self, body: &mut dyn CharacterBody, out: &mut Outputs<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::testing::{KinematicBody, RecordingAnimator, RecordingHitbox};
    use crate::game::characters::tuning::ENEMY_TUNING;

    #[test]
    fn test_roll_velocity_and_expiry() {
        let mut core = CharacterCore::new("knight", ENEMY_TUNING, None);
        let mut body = KinematicBody::default();
        let mut animator = RecordingAnimator::default();
        let mut out = Outputs::new(&mut animator, None);

        core.resolve_facing(-1.0, &mut out);
        assert!(core.start_roll(0.5, &mut body, &mut out));
        assert_eq!(body.velocity.x, -6.0);
        // Second roll request is ignored
        assert!(!core.start_roll(0.5, &mut body, &mut out));

        core.tick_deferred(0.3, &mut out);
        assert!(core.is_rolling());
        core.tick_deferred(0.3, &mut out);
        assert!(!core.is_rolling());
        drop(out);
        assert_eq!(animator.triggers, vec![AnimTrigger::Roll]);
    }

    #[test]
    fn test_block_suppressed_while_rolling() {
        let mut core = CharacterCore::new("knight", ENEMY_TUNING, None);
        let mut body = KinematicBody::default();
        let mut animator = RecordingAnimator::default();
        let mut out = Outputs::new(&mut animator, None);

        core.start_roll(0.5, &mut body, &mut out);
        assert!(!core.block_down(&mut out));
        assert!(core.is_rolling());
        assert!(!core.is_blocking());
    }

    #[test]
    fn test_facing_moves_hitbox_and_mirrors_sprite() {
        let mut core = CharacterCore::new("knight", ENEMY_TUNING, Some(0.8));
        let mut animator = RecordingAnimator::default();
        let mut rig = RecordingHitbox::default();
        let mut out = Outputs::new(&mut animator, Some(&mut rig));

        core.resolve_facing(-2.0, &mut out);
        drop(out);
        assert_eq!(rig.offset_x, Some(-0.8));
        assert_eq!(animator.mirrored, Some(true));
    }

    #[test]
    fn test_attack_opens_window_for_hitbox_time() {
        let mut core = CharacterCore::new("knight", ENEMY_TUNING, Some(0.8));
        let mut animator = RecordingAnimator::default();
        let mut rig = RecordingHitbox::default();
        let mut out = Outputs::new(&mut animator, Some(&mut rig));

        core.attack(1, &mut out);
        assert!(core.hitbox().is_active());
        core.tick_deferred(0.21, &mut out);
        assert!(!core.hitbox().is_active());
        drop(out);
        assert_eq!(rig.collider_history, vec![true, false]);
        assert_eq!(animator.triggers, vec![AnimTrigger::Attack(1)]);
    }

    #[test]
    fn test_no_roll_during_jump() {
        let mut core = CharacterCore::new("knight", ENEMY_TUNING, None);
        let mut body = KinematicBody::default();
        let mut animator = RecordingAnimator::default();

        core.on_contact_stay(1.0, &mut animator);
        let mut out = Outputs::new(&mut animator, None);
        core.jump(Vec2::new(0.0, 7.0), &mut body, &mut out);
        assert!(core.is_jumping());
        assert!(!core.is_grounded());
        assert!(!core.start_roll(0.5, &mut body, &mut out));
        assert!(!core.is_rolling());
        drop(out);

        core.on_contact_stay(1.0, &mut animator);
        assert!(!core.is_jumping());
        let mut out = Outputs::new(&mut animator, None);
        assert!(core.start_roll(0.5, &mut body, &mut out));
    }

    #[test]
    fn test_block_during_jump_resumes_on_landing() {
        let mut core = CharacterCore::new("knight", ENEMY_TUNING, None);
        let mut body = KinematicBody::default();
        let mut animator = RecordingAnimator::default();

        core.on_contact_stay(1.0, &mut animator);
        let mut out = Outputs::new(&mut animator, None);
        core.jump(Vec2::new(0.0, 7.0), &mut body, &mut out);
        assert!(core.block_down(&mut out));
        // A second press is not a new block
        assert!(!core.block_down(&mut out));
        drop(out);
        assert_eq!(
            animator
                .triggers
                .iter()
                .filter(|t| **t == AnimTrigger::Block)
                .count(),
            1
        );

        core.on_contact_stay(1.0, &mut animator);
        assert!(!core.is_jumping());
        assert!(core.is_blocking());
    }

    #[test]
    fn test_grounded_changes_reach_animator() {
        let mut core = CharacterCore::new("knight", ENEMY_TUNING, None);
        let mut animator = RecordingAnimator::default();

        core.on_contact_stay(1.0, &mut animator);
        core.on_contact_stay(1.0, &mut animator);
        assert!(core.is_grounded());
        core.on_contact_exit(&mut animator);
        assert!(!core.is_grounded());
        assert_eq!(
            animator.bools,
            vec![(AnimBool::Grounded, true), (AnimBool::Grounded, false)]
        );
    }
}
