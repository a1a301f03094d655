// Per-frame input state

use super::action::Action;
use std::collections::HashSet;

/// Pressed / just-pressed / just-released actions for the current frame
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Actions whose press edge happened this frame
    just_pressed: HashSet<Action>,

    /// Actions whose release edge happened this frame
    just_released: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Raw horizontal axis in [-1, 1]
    ///
    /// Holding both directions cancels out to 0.
    pub fn horizontal_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.is_pressed(Action::MoveLeft) {
            axis -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            axis += 1.0;
        }
        axis
    }

    /// Register an action press (repeats while held are ignored)
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Forget this frame's edges; call once the frame has consumed them
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }
}
