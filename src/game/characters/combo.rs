// Player attack combo counter

use crate::core::Stopwatch;

/// Attacks closer together than this are ignored
pub const MIN_ATTACK_SPACING: f32 = 0.25;
/// A pause longer than this starts the combo over
pub const COMBO_RESET_GAP: f32 = 1.0;
/// Number of distinct attack steps
pub const COMBO_LENGTH: u8 = 3;

/// Cycles attacks 1, 2, 3, 1, ... and drops back to 1 after a pause
#[derive(Debug, Clone, Default)]
pub struct ComboCounter {
    /// Last step played, 0 before the first attack
    index: u8,
    since_last: Stopwatch,
}

impl ComboCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, dt: f32) {
        self.since_last.tick(dt);
    }

    /// Whether enough time passed since the previous attack
    pub fn can_attack(&self) -> bool {
        self.since_last.elapsed() > MIN_ATTACK_SPACING
    }

    /// Register an attack and return its step (1..=3)
    pub fn advance(&mut self) -> u8 {
        self.index = (self.index % COMBO_LENGTH) + 1;
        if self.since_last.elapsed() > COMBO_RESET_GAP {
            self.index = 1;
        }
        self.since_last.restart();
        self.index
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn time_since_last_attack(&self) -> f32 {
        self.since_last.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_gate() {
        let mut combo = ComboCounter::new();
        assert!(!combo.can_attack());
        combo.tick(0.25);
        assert!(!combo.can_attack());
        combo.tick(0.01);
        assert!(combo.can_attack());
    }

    #[test]
    fn test_combo_cycles_then_wraps() {
        let mut combo = ComboCounter::new();
        let mut steps = Vec::new();
        for _ in 0..4 {
            combo.tick(0.3);
            assert!(combo.can_attack());
            steps.push(combo.advance());
        }
        assert_eq!(steps, vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_long_pause_resets_combo() {
        let mut combo = ComboCounter::new();
        combo.tick(0.3);
        combo.advance();
        combo.tick(0.3);
        assert_eq!(combo.advance(), 2);

        combo.tick(1.2);
        assert_eq!(combo.advance(), 1);
        approx::assert_relative_eq!(combo.time_since_last_attack(), 0.0);
    }
}
