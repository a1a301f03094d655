// Character animation: controller-facing commands and a sprite clip player

use std::collections::HashMap;

/// Frames in the roll clip
pub const ROLL_CLIP_FRAMES: usize = 8;
/// Playback rate of the roll clip
pub const ROLL_CLIP_FPS: f32 = 14.0;
/// How long one roll lasts: the roll clip played through once
pub const ROLL_CLIP_DURATION: f32 = ROLL_CLIP_FRAMES as f32 / ROLL_CLIP_FPS;

/// Looping ground animation requested by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionAnim {
    #[default]
    Idle,
    Move,
}

/// One-shot animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimTrigger {
    /// Combo step 1..=3
    Attack(u8),
    Roll,
    Jump,
    Block,
}

impl AnimTrigger {
    /// Name as used by the animation rig ("Attack1", "Roll", ...)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Attack(1) => "Attack1",
            Self::Attack(2) => "Attack2",
            Self::Attack(_) => "Attack3",
            Self::Roll => "Roll",
            Self::Jump => "Jump",
            Self::Block => "Block",
        }
    }

    /// Clip played for this trigger
    pub fn clip_name(&self) -> &'static str {
        match self {
            Self::Attack(1) => "attack1",
            Self::Attack(2) => "attack2",
            Self::Attack(_) => "attack3",
            Self::Roll => "roll",
            Self::Jump => "jump",
            Self::Block => "block",
        }
    }
}

/// Boolean animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimBool {
    Grounded,
    IdleBlock,
}

impl AnimBool {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grounded => "Grounded",
            Self::IdleBlock => "IdleBlock",
        }
    }
}

/// Float animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimFloat {
    AirSpeedY,
}

impl AnimFloat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AirSpeedY => "AirSpeedY",
        }
    }
}

/// Presentation commands a controller emits
///
/// Fire and forget: implementations never report failure back.
pub trait Animator {
    fn set_locomotion(&mut self, state: LocomotionAnim);
    fn trigger(&mut self, trigger: AnimTrigger);
    fn set_bool(&mut self, param: AnimBool, value: bool);
    fn set_float(&mut self, param: AnimFloat, value: f32);
    fn set_mirrored(&mut self, mirrored: bool);
}

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "idle", "run", "roll")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    /// Create a new animation clip
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Plays character clips driven by `Animator` commands
///
/// One-shot clips (attacks, roll, jump, block) play to their end; otherwise
/// the base clip is picked from the current parameters: airborne beats
/// blocking, blocking beats locomotion.
#[derive(Debug)]
pub struct AnimationPlayer {
    /// All available animations
    animations: HashMap<String, AnimationClip>,
    /// Currently playing animation name
    current_animation: String,
    /// Current frame index
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    /// Whether a one-shot clip owns playback
    one_shot_active: bool,
    /// Whether the sprite should be flipped horizontally
    flip_horizontal: bool,

    // Parameters set by the controller
    locomotion: LocomotionAnim,
    grounded: bool,
    idle_block: bool,
    air_speed_y: f32,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            one_shot_active: false,
            flip_horizontal: false,
            locomotion: LocomotionAnim::Idle,
            grounded: false,
            idle_block: false,
            air_speed_y: 0.0,
        }
    }

    /// Create an animation player with the knight clip set
    pub fn with_standard_animations() -> Self {
        let mut player = Self::new();

        player.add_animation(AnimationClip::looping("idle", 8, 10.0));
        player.add_animation(AnimationClip::looping("run", 10, 14.0));
        player.add_animation(AnimationClip::looping("block_idle", 8, 10.0));
        player.add_animation(AnimationClip::looping("rise", 3, 10.0));
        player.add_animation(AnimationClip::looping("fall", 4, 10.0));
        player.add_animation(AnimationClip::one_shot("attack1", 6, 14.0));
        player.add_animation(AnimationClip::one_shot("attack2", 6, 14.0));
        player.add_animation(AnimationClip::one_shot("attack3", 8, 14.0));
        player.add_animation(AnimationClip::one_shot(
            "roll",
            ROLL_CLIP_FRAMES,
            ROLL_CLIP_FPS,
        ));
        player.add_animation(AnimationClip::one_shot("jump", 3, 12.0));
        player.add_animation(AnimationClip::one_shot("block", 5, 12.0));

        player.play("idle");
        player
    }

    /// Add an animation clip
    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Play an animation by name, keeping the frame if it is already playing
    pub fn play(&mut self, name: &str) {
        if self.current_animation != name {
            self.play_from_start(name);
        }
    }

    /// Play an animation from its first frame
    pub fn play_from_start(&mut self, name: &str) {
        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;
    }

    /// Advance playback (called every frame)
    pub fn update(&mut self, dt: f32) {
        if !self.one_shot_active {
            let base = self.base_clip();
            self.play(base);
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return;
        };

        self.frame_timer += dt;
        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // One-shot finished: hand playback back to the base clip
                    self.current_frame = clip.frame_count - 1;
                    self.one_shot_active = false;
                    break;
                }
            }
        }
    }

    /// Clip the parameters currently ask for when no one-shot is playing
    fn base_clip(&self) -> &'static str {
        if !self.grounded {
            if self.air_speed_y > 0.0 {
                "rise"
            } else {
                "fall"
            }
        } else if self.idle_block {
            "block_idle"
        } else {
            match self.locomotion {
                LocomotionAnim::Idle => "idle",
                LocomotionAnim::Move => "run",
            }
        }
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    /// Get the current frame index
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Get horizontal flip state
    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Get the clip info for an animation
    pub fn clip(&self, name: &str) -> Option<&AnimationClip> {
        self.animations.get(name)
    }
}

impl Animator for AnimationPlayer {
    fn set_locomotion(&mut self, state: LocomotionAnim) {
        self.locomotion = state;
    }

    fn trigger(&mut self, trigger: AnimTrigger) {
        let clip = trigger.clip_name();
        if self.animations.contains_key(clip) {
            self.play_from_start(clip);
            self.one_shot_active = true;
        } else {
            log::warn!("No clip for trigger {}", trigger.name());
        }
    }

    fn set_bool(&mut self, param: AnimBool, value: bool) {
        match param {
            AnimBool::Grounded => self.grounded = value,
            AnimBool::IdleBlock => self.idle_block = value,
        }
    }

    fn set_float(&mut self, param: AnimFloat, value: f32) {
        match param {
            AnimFloat::AirSpeedY => self.air_speed_y = value,
        }
    }

    fn set_mirrored(&mut self, mirrored: bool) {
        self.flip_horizontal = mirrored;
    }
}
