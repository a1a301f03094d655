// Facing direction and hitbox mirroring

use crate::core::math::{direction_sign, mirror_offset};

/// Horizontal direction a character looks in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Sprites are authored facing right
    pub fn is_mirrored(&self) -> bool {
        matches!(self, Self::Left)
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Facing for a signed horizontal quantity, `None` when it is zero
    pub fn from_delta(delta: f32) -> Option<Self> {
        let sign = direction_sign(delta);
        if sign > 0.0 {
            Some(Self::Right)
        } else if sign < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }
}

/// Keeps a character's facing and where its hitbox sits
///
/// The hitbox's authored offset is remembered once; every resolve places it
/// on the facing side, so flipping never accumulates sign errors.
#[derive(Debug, Clone, Default)]
pub struct FacingResolver {
    facing: Facing,
    hitbox_offset_x: Option<f32>,
}

impl FacingResolver {
    pub fn new(facing: Facing) -> Self {
        Self {
            facing,
            hitbox_offset_x: None,
        }
    }

    /// Remember the hitbox's authored local x offset
    pub fn with_hitbox_offset(mut self, offset_x: f32) -> Self {
        self.hitbox_offset_x = Some(offset_x);
        self
    }

    /// Update facing from a signed horizontal quantity; zero keeps it
    pub fn resolve(&mut self, delta: f32) -> Facing {
        if let Some(facing) = Facing::from_delta(delta) {
            self.facing = facing;
        }
        self.facing
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Hitbox x offset on the current facing side, if there is a hitbox
    pub fn hitbox_offset_x(&self) -> Option<f32> {
        self.hitbox_offset_x
            .map(|authored| mirror_offset(authored, self.facing.sign()))
    }
}
