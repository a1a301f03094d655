// Game action definitions and mappings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Combat
    Attack, // Left mouse
    Block,  // Right mouse (held)
    Roll,

    // Meta actions
    Pause,
    Menu,
    /// Switch combat between mouse buttons and keys
    SwapCombatLayout,
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard/mouse bindings for the local player
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Horizontal axis (WASD and arrows)
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::Space), Action::Jump),
        (InputSource::key(KeyCode::ShiftLeft), Action::Roll),
        // Combat (mouse buttons)
        (InputSource::mouse(MouseButton::Left), Action::Attack),
        (InputSource::mouse(MouseButton::Right), Action::Block),
        // Meta
        (InputSource::key(KeyCode::KeyP), Action::Pause),
        (InputSource::key(KeyCode::Escape), Action::Menu),
        (InputSource::key(KeyCode::F1), Action::SwapCombatLayout),
    ]
}

/// Actions that move between layouts when combat switches to the keyboard
pub const COMBAT_ACTIONS: [Action; 3] = [Action::Attack, Action::Block, Action::Roll];

/// Keyboard-only combat keys, for playing without a mouse
pub fn keyboard_combat_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyJ), Action::Attack),
        (InputSource::key(KeyCode::KeyK), Action::Block),
        (InputSource::key(KeyCode::KeyL), Action::Roll),
    ]
}
