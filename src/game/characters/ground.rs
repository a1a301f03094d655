// Contact-driven grounded flag

/// A contact counts as ground when its normal points at least this far up
pub const GROUND_NORMAL_THRESHOLD: f32 = 0.5;

/// Tracks whether a character stands on something
///
/// There is no per-contact bookkeeping: leaving any contact clears the flag
/// even if another ground contact persists. It comes back on that contact's
/// next stay event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundContactTracker {
    grounded: bool,
}

impl GroundContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A contact persisted; `normal_y` is the surface normal seen from the character.
    /// Returns true when the flag changed.
    pub fn on_contact_stay(&mut self, normal_y: f32) -> bool {
        if normal_y > GROUND_NORMAL_THRESHOLD && !self.grounded {
            self.grounded = true;
            return true;
        }
        false
    }

    /// A contact ended. Returns true when the flag changed.
    pub fn on_contact_exit(&mut self) -> bool {
        let changed = self.grounded;
        self.grounded = false;
        changed
    }

    /// Drop the flag because the character just jumped
    pub fn leave_ground(&mut self) {
        self.grounded = false;
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }
}
