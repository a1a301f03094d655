// Character system
//
// This module contains the two fighters' controllers and their parts:
// - Shared character core (facing, grounded, action state, hitbox window)
// - Player and enemy controllers and their intent sources
// - Tunables and their RON loader
// - Animation commands and the clip player

pub mod animation;
pub mod character;
pub mod combo;
pub mod enemy;
pub mod facing;
pub mod ground;
pub mod hitbox;
pub mod intent;
pub mod player;
pub mod state;
pub mod tuning;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use animation::{AnimBool, AnimFloat, AnimTrigger, AnimationPlayer, Animator, LocomotionAnim};
pub use character::{CharacterBody, CharacterController, CharacterCore, Outputs};
pub use enemy::EnemyController;
pub use facing::Facing;
pub use hitbox::HitboxRig;
pub use intent::{EnemyIntentSource, IntentSource, PlayerIntentSource, UnitRandom};
pub use player::PlayerController;
pub use state::{ActionEvent, ActionState};
pub use tuning::{CharacterTuning, TuningError, TuningFile, ENEMY_TUNING, PLAYER_TUNING};
