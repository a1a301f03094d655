/// Game loop timing and control system
///
/// Runs controllers once per rendered frame with the real frame time and
/// physics at a fixed 60 Hz, using an accumulator to decide how many fixed
/// steps each frame owes.
use std::time::{Duration, Instant};

/// Target physics/update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of physics steps per frame to prevent spiral of death
const MAX_PHYSICS_STEPS: u32 = 5;

/// Longest frame time fed to the controllers (e.g. after a window drag)
const MAX_FRAME_DELTA: f32 = 0.1;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// What a single frame should simulate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Variable frame time for controller updates (seconds)
    pub delta: f32,
    /// Number of fixed physics steps to run this frame
    pub fixed_steps: u32,
}

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the game is paused
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total fixed steps executed
    step_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            step_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame using the wall clock
    pub fn begin_frame(&mut self) -> FrameTiming {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of elapsed time and report what to simulate
    pub fn advance(&mut self, frame_time: Duration) -> FrameTiming {
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        // If paused, nothing moves and no time is banked
        if self.paused {
            return FrameTiming {
                delta: 0.0,
                fixed_steps: 0,
            };
        }

        self.accumulator += frame_time;

        let mut fixed_steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && fixed_steps < MAX_PHYSICS_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            fixed_steps += 1;
        }

        // Drop whatever could not be caught up so the next frame starts clean
        if fixed_steps == MAX_PHYSICS_STEPS && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::debug!(
                "Frame took {:?}, dropping {:?} of simulation",
                frame_time,
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.step_count += fixed_steps as u64;

        FrameTiming {
            delta: frame_time.as_secs_f32().min(MAX_FRAME_DELTA),
            fixed_steps,
        }
    }

    /// Get the fixed timestep for physics updates (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of fixed steps executed
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn update_fps(&mut self) {
        let total: Duration = self.frame_times.iter().sum();
        let average = total.as_secs_f32() / self.frame_times.len().max(1) as f32;
        self.current_fps = if average > 0.0 { 1.0 / average } else { 0.0 };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
