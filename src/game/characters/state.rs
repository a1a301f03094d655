// Character action state machine

use super::facing::Facing;

/// What a character is doing, apart from moving and attacking
///
/// The states exclude each other by construction: a character rolling cannot
/// also be blocking or in a jump, and the roll carries its own clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActionState {
    /// Free movement; attacks and jumps are allowed
    #[default]
    Locomotion,
    /// Holding block
    Blocking,
    /// Committed roll, not cancellable
    Rolling {
        direction: Facing,
        elapsed: f32,
        duration: f32,
        /// Block was still held when the roll started
        resume_block: bool,
    },
    /// Launched by a jump; only landing leaves it
    Airborne { blocking: bool },
}

/// Inputs to the action state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionEvent {
    BlockDown,
    BlockUp,
    Roll { direction: Facing, duration: f32 },
    Jump,
    Land,
    Tick(f32),
}

impl ActionState {
    pub fn is_rolling(&self) -> bool {
        matches!(self, Self::Rolling { .. })
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Blocking | Self::Airborne { blocking: true })
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Airborne { .. })
    }

    /// Whether locomotion may write horizontal velocity
    pub fn can_move(&self) -> bool {
        !self.is_rolling()
    }

    /// Direction of the current roll
    pub fn roll_direction(&self) -> Option<Facing> {
        match self {
            Self::Rolling { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    /// Transition function: the state after `event`
    pub fn next(self, event: ActionEvent) -> Self {
        match (self, event) {
            (Self::Locomotion, ActionEvent::BlockDown) => Self::Blocking,
            (Self::Blocking, ActionEvent::BlockUp) => Self::Locomotion,

            (Self::Locomotion, ActionEvent::Jump) => Self::Airborne { blocking: false },
            (Self::Blocking, ActionEvent::Jump) => Self::Airborne { blocking: true },
            (Self::Airborne { .. }, ActionEvent::BlockDown) => Self::Airborne { blocking: true },
            (Self::Airborne { .. }, ActionEvent::BlockUp) => Self::Airborne { blocking: false },
            (Self::Airborne { blocking }, ActionEvent::Land) => {
                if blocking {
                    Self::Blocking
                } else {
                    Self::Locomotion
                }
            }

            (Self::Locomotion | Self::Blocking, ActionEvent::Roll { direction, duration }) => {
                Self::Rolling {
                    direction,
                    elapsed: 0.0,
                    duration,
                    resume_block: self.is_blocking(),
                }
            }

            (
                Self::Rolling {
                    direction,
                    elapsed,
                    duration,
                    ..
                },
                ActionEvent::BlockUp,
            ) => Self::Rolling {
                direction,
                elapsed,
                duration,
                resume_block: false,
            },

            (
                Self::Rolling {
                    direction,
                    elapsed,
                    duration,
                    resume_block,
                },
                ActionEvent::Tick(dt),
            ) => {
                let elapsed = elapsed + dt;
                if elapsed > duration {
                    if resume_block {
                        Self::Blocking
                    } else {
                        Self::Locomotion
                    }
                } else {
                    Self::Rolling {
                        direction,
                        elapsed,
                        duration,
                        resume_block,
                    }
                }
            }

            // Duplicate rolls, rolls and jumps mid-jump or mid-roll, block
            // presses mid-roll, landings without a jump, redundant edges
            (state, _) => state,
        }
    }

    /// Short label for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Locomotion => "locomotion",
            Self::Blocking => "blocking",
            Self::Rolling { .. } => "rolling",
            Self::Airborne { .. } => "airborne",
        }
    }
}

/// Holds the current action state and how long it has lasted
#[derive(Debug, Clone, Default)]
pub struct ActionStateMachine {
    current_state: ActionState,
    previous_state: ActionState,
    state_time: f32,
}

impl ActionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state
    pub fn state(&self) -> ActionState {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> ActionState {
        self.previous_state
    }

    /// Get time spent in current state
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    pub fn is_rolling(&self) -> bool {
        self.current_state.is_rolling()
    }

    /// Feed an event; returns true when the state kind changed
    pub fn apply(&mut self, event: ActionEvent) -> bool {
        if let ActionEvent::Tick(dt) = event {
            self.state_time += dt;
        }

        let next = self.current_state.next(event);
        let changed = std::mem::discriminant(&next) != std::mem::discriminant(&self.current_state);
        if changed {
            log::debug!(
                "Action state {} -> {}",
                self.current_state.name(),
                next.name()
            );
            self.previous_state = self.current_state;
            self.state_time = 0.0;
        }
        self.current_state = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(direction: Facing) -> ActionEvent {
        ActionEvent::Roll {
            direction,
            duration: 0.5,
        }
    }

    #[test]
    fn test_initial_state() {
        let sm = ActionStateMachine::new();
        assert_eq!(sm.state(), ActionState::Locomotion);
    }

    #[test]
    fn test_block_down_up() {
        let mut sm = ActionStateMachine::new();
        assert!(sm.apply(ActionEvent::BlockDown));
        assert!(sm.state().is_blocking());
        assert!(sm.apply(ActionEvent::BlockUp));
        assert_eq!(sm.state(), ActionState::Locomotion);
        assert!(sm.state().can_move());
    }

    #[test]
    fn test_roll_ignores_duplicate_roll() {
        let state = ActionState::Locomotion.next(roll(Facing::Left));
        let state = state.next(ActionEvent::Tick(0.2));
        let again = state.next(roll(Facing::Right));
        assert_eq!(again, state);
        assert_eq!(again.roll_direction(), Some(Facing::Left));
    }

    #[test]
    fn test_roll_excludes_block() {
        let mut state = ActionState::Locomotion.next(roll(Facing::Right));
        state = state.next(ActionEvent::BlockDown);
        assert!(state.is_rolling());
        assert!(!state.is_blocking());
        assert!(!state.can_move());
    }

    #[test]
    fn test_roll_ends_strictly_after_duration() {
        let mut sm = ActionStateMachine::new();
        sm.apply(roll(Facing::Right));
        sm.apply(ActionEvent::Tick(0.25));
        sm.apply(ActionEvent::Tick(0.25));
        // elapsed == duration: still rolling
        assert!(sm.is_rolling());
        assert!(sm.apply(ActionEvent::Tick(0.01)));
        assert_eq!(sm.state(), ActionState::Locomotion);
        assert!(sm.previous_state().is_rolling());
    }

    #[test]
    fn test_held_block_resumes_after_roll() {
        let mut state = ActionState::Blocking.next(roll(Facing::Left));
        state = state.next(ActionEvent::Tick(0.6));
        assert_eq!(state, ActionState::Blocking);
    }

    #[test]
    fn test_block_released_during_roll() {
        let mut state = ActionState::Blocking.next(roll(Facing::Left));
        state = state.next(ActionEvent::BlockUp);
        state = state.next(ActionEvent::Tick(0.6));
        assert_eq!(state, ActionState::Locomotion);
    }

    #[test]
    fn test_no_roll_while_airborne() {
        let state = ActionState::Locomotion.next(ActionEvent::Jump);
        assert!(state.is_airborne());
        let state = state.next(roll(Facing::Right));
        assert_eq!(state, ActionState::Airborne { blocking: false });
        assert!(!state.is_rolling());

        // No roll state can also be in a jump
        let rolling = ActionState::Locomotion.next(roll(Facing::Right));
        assert_eq!(rolling.next(ActionEvent::Jump), rolling);
    }

    #[test]
    fn test_only_landing_ends_a_jump() {
        let mut sm = ActionStateMachine::new();
        assert!(sm.apply(ActionEvent::Jump));
        assert!(!sm.apply(ActionEvent::Tick(5.0)));
        assert!(!sm.apply(ActionEvent::BlockUp));
        assert!(!sm.apply(ActionEvent::Jump));
        assert!(sm.state().is_airborne());

        assert!(sm.apply(ActionEvent::Land));
        assert_eq!(sm.state(), ActionState::Locomotion);
        // Landing while already on the ground changes nothing
        assert!(!sm.apply(ActionEvent::Land));
    }

    #[test]
    fn test_block_carries_through_a_jump() {
        let state = ActionState::Blocking.next(ActionEvent::Jump);
        assert!(state.is_blocking());
        assert_eq!(state.next(ActionEvent::Land), ActionState::Blocking);

        let state = ActionState::Locomotion
            .next(ActionEvent::Jump)
            .next(ActionEvent::BlockDown);
        assert!(state.is_blocking());
        let state = state.next(ActionEvent::BlockUp);
        assert_eq!(state.next(ActionEvent::Land), ActionState::Locomotion);
    }

    #[test]
    fn test_tick_outside_roll_keeps_state() {
        let mut sm = ActionStateMachine::new();
        sm.apply(ActionEvent::BlockDown);
        assert!(!sm.apply(ActionEvent::Tick(0.3)));
        approx::assert_relative_eq!(sm.state_time(), 0.3);
    }
}
