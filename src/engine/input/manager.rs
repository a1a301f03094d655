// Input manager - turns winit events into per-frame input state

use super::action::{Action, InputSource, COMBAT_ACTIONS};
use super::bindings::InputBindings;
use super::state::InputState;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Coordinates bindings and input state for the local player
#[derive(Debug)]
pub struct InputManager {
    bindings: InputBindings,
    state: InputState,
    keyboard_combat: bool,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_bindings(InputBindings::with_defaults())
    }

    /// Create an input manager with a custom binding table
    pub fn with_bindings(bindings: InputBindings) -> Self {
        Self {
            bindings,
            state: InputState::new(),
            keyboard_combat: false,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            if event.repeat {
                return;
            }
            self.process_source(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_event(&mut self, state: ElementState, button: MouseButton) {
        self.process_source(InputSource::mouse(button), state);
    }

    fn process_source(&mut self, source: InputSource, element_state: ElementState) {
        let Some(action) = self.bindings.action_for(source) else {
            return;
        };

        match element_state {
            ElementState::Pressed => self.state.press(action),
            ElementState::Released => self.state.release(action),
        }
    }

    /// Finish the frame; call once after the game has read the state
    pub fn update(&mut self) {
        self.state.end_frame();
    }

    /// Input state for the current frame
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Check if an action was pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.state.just_pressed(action)
    }

    /// Switch combat between the mouse layout and J/K/L; returns true when
    /// the keyboard layout is now active
    ///
    /// Held combat actions are released, since their new sources are not
    /// down and the old ones will never report a release.
    pub fn toggle_combat_layout(&mut self) -> bool {
        self.keyboard_combat = !self.keyboard_combat;
        if self.keyboard_combat {
            self.bindings.use_keyboard_combat();
        } else {
            self.bindings.reset_to_defaults();
        }

        for action in COMBAT_ACTIONS {
            self.state.release(action);
        }

        log::info!(
            "Combat layout: {} (attack on {:?})",
            if self.keyboard_combat { "keyboard" } else { "mouse" },
            self.bindings.sources_for(Action::Attack)
        );
        self.keyboard_combat
    }

    /// Release everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
