// Input binding table and remapping

use super::action::{
    default_bindings, keyboard_combat_bindings, Action, InputSource, COMBAT_ACTIONS,
};
use std::collections::HashMap;

/// Maps input sources (keys/buttons) to game actions
///
/// One source drives at most one action; an action may have several sources
/// (e.g. `A` and `ArrowLeft` both move left).
#[derive(Debug, Clone, Default)]
pub struct InputBindings {
    bindings: HashMap<InputSource, Action>,
}

impl InputBindings {
    /// Create an empty binding table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a binding table with the default layout
    pub fn with_defaults() -> Self {
        Self::from_bindings(default_bindings())
    }

    /// Create a binding table from a list of pairs
    pub fn from_bindings(pairs: Vec<(InputSource, Action)>) -> Self {
        let mut bindings = Self::new();
        for (source, action) in pairs {
            bindings.bind(source, action);
        }
        bindings
    }

    /// Bind a source to an action, replacing whatever it was bound to before
    pub fn bind(&mut self, source: InputSource, action: Action) {
        if let Some(previous) = self.bindings.insert(source, action) {
            if previous != action {
                log::debug!("Rebound {:?}: {:?} -> {:?}", source, previous, action);
            }
        }
    }

    /// Remove every source bound to an action
    pub fn unbind_action(&mut self, action: Action) {
        self.bindings.retain(|_, bound| *bound != action);
    }

    /// Get the action bound to an input source
    pub fn action_for(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to an action
    pub fn sources_for(&self, action: Action) -> Vec<InputSource> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(source, _)| *source)
            .collect()
    }

    /// Restore the default layout
    pub fn reset_to_defaults(&mut self) {
        *self = Self::with_defaults();
    }

    /// Move attack, block and roll from their default sources to J/K/L
    pub fn use_keyboard_combat(&mut self) {
        for action in COMBAT_ACTIONS {
            self.unbind_action(action);
        }
        for (source, action) in keyboard_combat_bindings() {
            self.bind(source, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_action() {
        let mut bindings = InputBindings::new();
        let source = InputSource::key(KeyCode::KeyJ);
        bindings.bind(source, Action::Attack);
        assert_eq!(bindings.action_for(source), Some(Action::Attack));
    }

    #[test]
    fn test_rebind_source() {
        let mut bindings = InputBindings::new();
        let source = InputSource::key(KeyCode::KeyK);
        bindings.bind(source, Action::Attack);
        bindings.bind(source, Action::Roll);

        assert_eq!(bindings.action_for(source), Some(Action::Roll));
        assert!(bindings.sources_for(Action::Attack).is_empty());
    }

    #[test]
    fn test_unbind_action_removes_all_sources() {
        let mut bindings = InputBindings::with_defaults();
        assert_eq!(bindings.sources_for(Action::MoveLeft).len(), 2);

        bindings.unbind_action(Action::MoveLeft);
        assert!(bindings.sources_for(Action::MoveLeft).is_empty());
        assert_eq!(bindings.sources_for(Action::MoveRight).len(), 2);
    }

    #[test]
    fn test_keyboard_combat_replaces_mouse_and_shift() {
        let mut bindings = InputBindings::with_defaults();
        bindings.use_keyboard_combat();

        assert_eq!(bindings.action_for(InputSource::mouse(MouseButton::Left)), None);
        assert_eq!(bindings.action_for(InputSource::mouse(MouseButton::Right)), None);
        assert_eq!(bindings.action_for(InputSource::key(KeyCode::ShiftLeft)), None);
        assert_eq!(
            bindings.sources_for(Action::Attack),
            vec![InputSource::key(KeyCode::KeyJ)]
        );
        assert_eq!(
            bindings.action_for(InputSource::key(KeyCode::KeyK)),
            Some(Action::Block)
        );
        // Movement is untouched
        assert_eq!(bindings.sources_for(Action::MoveLeft).len(), 2);
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut bindings = InputBindings::new();
        bindings.bind(InputSource::key(KeyCode::KeyZ), Action::Jump);
        bindings.reset_to_defaults();

        assert_eq!(bindings.action_for(InputSource::key(KeyCode::KeyZ)), None);
        assert_eq!(
            bindings.action_for(InputSource::key(KeyCode::Space)),
            Some(Action::Jump)
        );
    }
}
