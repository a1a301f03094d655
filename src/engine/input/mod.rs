// Input handling system
//
// Keyboard and mouse events from winit are mapped through a binding table
// into game actions, then collected into a per-frame `InputState` that the
// player controller polls.
//
// ## Architecture
//
// - `action`: Game actions and the default key/mouse bindings
// - `bindings`: Remappable action bindings
// - `state`: Per-frame pressed / just-pressed / just-released tracking
// - `manager`: Turns winit events into state changes
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
// input.process_mouse_event(state, button);
//
// // Read it during the frame
// if input.state().just_pressed(Action::Roll) {
//     // roll!
// }
//
// // At the end of each frame
// input.update();
// ```

pub mod action;
pub mod bindings;
pub mod manager;
pub mod state;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use bindings::InputBindings;
pub use manager::InputManager;
pub use state::InputState;
