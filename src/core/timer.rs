// Frame-driven timers used to gate actions

/// Countdown used for cooldown gating
///
/// The remaining time is allowed to go negative; a negative or zero value is
/// simply "ready". Nothing is clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CooldownTimer {
    remaining: f32,
}

impl CooldownTimer {
    /// Create a timer that is ready immediately
    pub fn ready_now() -> Self {
        Self { remaining: 0.0 }
    }

    /// Create a timer that becomes ready after `duration` seconds
    pub fn with_remaining(duration: f32) -> Self {
        Self { remaining: duration }
    }

    /// Advance the timer by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.remaining -= dt;
    }

    /// Whether the gated action may be used again
    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Start a new cooldown of `duration` seconds
    pub fn reset(&mut self, duration: f32) {
        self.remaining = duration;
    }

    /// Time left before the timer is ready (negative once overdue)
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// Counts elapsed time upward since the last restart
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stopwatch {
    elapsed: f32,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
