// Character tunables
//
// Each character instance carries its own copy; the presets below are the
// knight's values for the player and the enemy.

use ron::extensions::Extensions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::animation::ROLL_CLIP_DURATION;

/// Per-instance tunables for a character controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterTuning {
    // Movement
    /// Horizontal speed while moving (units/second)
    pub move_speed: f32,
    /// Vertical velocity set by a jump
    pub jump_force: f32,
    /// Horizontal speed held during a roll
    pub roll_force: f32,
    /// How long a roll lasts in seconds
    pub roll_duration: f32,

    // Combat
    /// Distance at which the enemy stops chasing and engages
    pub attack_range: f32,
    /// How long an attack hitbox stays live
    pub hitbox_active_time: f32,

    // Cooldowns (enemy decision gating)
    pub roll_cooldown: f32,
    pub attack_cooldown: f32,
    pub jump_cooldown: f32,
}

/// Player knight
pub const PLAYER_TUNING: CharacterTuning = CharacterTuning {
    move_speed: 5.0,
    jump_force: 7.5,
    roll_force: 6.0,
    roll_duration: ROLL_CLIP_DURATION,

    attack_range: 1.5,
    hitbox_active_time: 0.2,

    roll_cooldown: 2.0,
    attack_cooldown: 1.0,
    jump_cooldown: 2.0,
};

/// Enemy knight: slower, rolls for a flat half second
pub const ENEMY_TUNING: CharacterTuning = CharacterTuning {
    move_speed: 3.0,
    jump_force: 7.0,
    roll_force: 6.0,
    roll_duration: 0.5,

    attack_range: 1.5,
    hitbox_active_time: 0.2,

    roll_cooldown: 2.0,
    attack_cooldown: 1.0,
    jump_cooldown: 2.0,
};

/// Errors raised while loading tunables
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("{character}.{field} must be positive, got {value}")]
    NonPositive {
        character: &'static str,
        field: &'static str,
        value: f32,
    },
}

impl CharacterTuning {
    /// Reject zero, negative and NaN values
    pub fn validate(&self, character: &'static str) -> Result<(), TuningError> {
        let fields = [
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("roll_force", self.roll_force),
            ("roll_duration", self.roll_duration),
            ("attack_range", self.attack_range),
            ("hitbox_active_time", self.hitbox_active_time),
            ("roll_cooldown", self.roll_cooldown),
            ("attack_cooldown", self.attack_cooldown),
            ("jump_cooldown", self.jump_cooldown),
        ];

        for (field, value) in fields {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NonPositive {
                    character,
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Fields a tuning file sets for one character; the rest keep the preset
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TuningOverrides {
    move_speed: Option<f32>,
    jump_force: Option<f32>,
    roll_force: Option<f32>,
    roll_duration: Option<f32>,
    attack_range: Option<f32>,
    hitbox_active_time: Option<f32>,
    roll_cooldown: Option<f32>,
    attack_cooldown: Option<f32>,
    jump_cooldown: Option<f32>,
}

impl TuningOverrides {
    fn apply(self, preset: CharacterTuning) -> CharacterTuning {
        CharacterTuning {
            move_speed: self.move_speed.unwrap_or(preset.move_speed),
            jump_force: self.jump_force.unwrap_or(preset.jump_force),
            roll_force: self.roll_force.unwrap_or(preset.roll_force),
            roll_duration: self.roll_duration.unwrap_or(preset.roll_duration),
            attack_range: self.attack_range.unwrap_or(preset.attack_range),
            hitbox_active_time: self
                .hitbox_active_time
                .unwrap_or(preset.hitbox_active_time),
            roll_cooldown: self.roll_cooldown.unwrap_or(preset.roll_cooldown),
            attack_cooldown: self.attack_cooldown.unwrap_or(preset.attack_cooldown),
            jump_cooldown: self.jump_cooldown.unwrap_or(preset.jump_cooldown),
        }
    }
}

/// On-disk layout: one optional override block per character
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TuningOverridesFile {
    player: TuningOverrides,
    enemy: TuningOverrides,
}

/// Tunables for both fighters
#[derive(Debug, Clone, PartialEq)]
pub struct TuningFile {
    pub player: CharacterTuning,
    pub enemy: CharacterTuning,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            player: PLAYER_TUNING,
            enemy: ENEMY_TUNING,
        }
    }
}

impl TuningFile {
    /// Parse and validate tunables from RON text
    ///
    /// Fields left out of a block keep that character's preset
    /// (`PLAYER_TUNING` or `ENEMY_TUNING`).
    pub fn from_ron(text: &str) -> Result<Self, TuningError> {
        let overrides: TuningOverridesFile = ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(text)?;

        let file = Self {
            player: overrides.player.apply(PLAYER_TUNING),
            enemy: overrides.enemy.apply(ENEMY_TUNING),
        };
        file.player.validate("player")?;
        file.enemy.validate("enemy")?;
        Ok(file)
    }

    /// Load tunables from a RON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_ron(&text)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(file)
    }
}
