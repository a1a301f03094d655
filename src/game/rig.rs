// Adapters from the character controllers to the rapier world

use glam::Vec2;
use rapier2d::prelude::*;

use crate::engine::physics::{ColliderHandle, PhysicsWorld, RigidBodyHandle};
use crate::game::characters::{CharacterBody, HitboxRig};

/// A rigid body in the physics world, seen as a character body
pub struct RapierBody<'w> {
    world: &'w mut PhysicsWorld,
    handle: RigidBodyHandle,
}

impl<'w> RapierBody<'w> {
    pub fn new(world: &'w mut PhysicsWorld, handle: RigidBodyHandle) -> Self {
        Self { world, handle }
    }
}

impl CharacterBody for RapierBody<'_> {
    fn position(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
            .unwrap_or(Vec2::ZERO)
    }

    fn velocity(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
            .unwrap_or(Vec2::ZERO)
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle) {
            body.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }
}

/// Attack sensor attached to a character body
///
/// Controllers flip it while the body is borrowed, so the requested state is
/// buffered here and written to the collider by `apply_to`.
#[derive(Debug, Clone)]
pub struct SensorHitbox {
    collider: ColliderHandle,
    offset_x: f32,
    offset_y: f32,
    enabled: bool,
    visual_enabled: bool,
}

impl SensorHitbox {
    pub fn new(collider: ColliderHandle, offset_x: f32, offset_y: f32) -> Self {
        Self {
            collider,
            offset_x,
            offset_y,
            enabled: false,
            visual_enabled: false,
        }
    }

    pub fn collider(&self) -> ColliderHandle {
        self.collider
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a debug overlay should draw the hitbox
    pub fn is_visual_enabled(&self) -> bool {
        self.visual_enabled
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    /// Push the buffered state to the collider
    pub fn apply_to(&self, world: &mut PhysicsWorld) {
        if let Some(collider) = world.get_collider_mut(self.collider) {
            collider.set_enabled(self.enabled);
            collider.set_position_wrt_parent(Isometry::translation(self.offset_x, self.offset_y));
        }
    }
}

impl HitboxRig for SensorHitbox {
    fn set_collider_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_visual_enabled(&mut self, enabled: bool) {
        self.visual_enabled = enabled;
    }

    fn set_offset_x(&mut self, offset_x: f32) {
        self.offset_x = offset_x;
    }
}
