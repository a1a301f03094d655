// Test doubles for the controller collaborators

use glam::Vec2;

use super::animation::{AnimBool, AnimFloat, AnimTrigger, Animator, LocomotionAnim};
use super::character::CharacterBody;
use super::hitbox::HitboxRig;
use super::intent::UnitRandom;

/// Body that only stores what it is told
#[derive(Debug, Default, Clone)]
pub struct KinematicBody {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl KinematicBody {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
        }
    }
}

impl CharacterBody for KinematicBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

/// Records every animation command
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    pub locomotion: Vec<LocomotionAnim>,
    pub triggers: Vec<AnimTrigger>,
    pub bools: Vec<(AnimBool, bool)>,
    pub floats: Vec<(AnimFloat, f32)>,
    pub mirrored: Option<bool>,
}

impl RecordingAnimator {
    pub fn last_locomotion(&self) -> Option<LocomotionAnim> {
        self.locomotion.last().copied()
    }

    pub fn last_bool(&self, param: AnimBool) -> Option<bool> {
        self.bools
            .iter()
            .rev()
            .find(|(p, _)| *p == param)
            .map(|(_, value)| *value)
    }
}

impl Animator for RecordingAnimator {
    fn set_locomotion(&mut self, state: LocomotionAnim) {
        self.locomotion.push(state);
    }

    fn trigger(&mut self, trigger: AnimTrigger) {
        self.triggers.push(trigger);
    }

    fn set_bool(&mut self, param: AnimBool, value: bool) {
        self.bools.push((param, value));
    }

    fn set_float(&mut self, param: AnimFloat, value: f32) {
        self.floats.push((param, value));
    }

    fn set_mirrored(&mut self, mirrored: bool) {
        self.mirrored = Some(mirrored);
    }
}

/// Records hitbox switching
#[derive(Debug, Default)]
pub struct RecordingHitbox {
    pub collider_enabled: bool,
    pub visual_enabled: bool,
    pub collider_history: Vec<bool>,
    pub offset_x: Option<f32>,
}

impl HitboxRig for RecordingHitbox {
    fn set_collider_enabled(&mut self, enabled: bool) {
        self.collider_enabled = enabled;
        self.collider_history.push(enabled);
    }

    fn set_visual_enabled(&mut self, enabled: bool) {
        self.visual_enabled = enabled;
    }

    fn set_offset_x(&mut self, offset_x: f32) {
        self.offset_x = Some(offset_x);
    }
}

/// Hands out a fixed list of draws; running out is a test bug
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<f32>,
    taken: usize,
}

impl ScriptedRandom {
    pub fn new(draws: &[f32]) -> Self {
        Self {
            draws: draws.to_vec(),
            taken: 0,
        }
    }

    pub fn draws_taken(&self) -> usize {
        self.taken
    }
}

impl UnitRandom for ScriptedRandom {
    fn unit(&mut self) -> f32 {
        let draw = self.draws[self.taken];
        self.taken += 1;
        draw
    }
}
