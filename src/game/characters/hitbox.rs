// Attack hitbox windows

use crate::core::CooldownTimer;

/// The collider (and optional visual) an attack switches on
pub trait HitboxRig {
    fn set_collider_enabled(&mut self, enabled: bool);

    /// Debug visual; rigs without one ignore it
    fn set_visual_enabled(&mut self, _enabled: bool) {}

    /// Local x offset of the hitbox relative to its character
    fn set_offset_x(&mut self, offset_x: f32);
}

/// A live hitbox window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitboxWindow {
    /// Combo step that opened the window
    pub combo_step: u8,
    remaining: CooldownTimer,
}

impl HitboxWindow {
    pub fn remaining(&self) -> f32 {
        self.remaining.remaining()
    }
}

/// Opens hitbox windows and closes them when they run out
///
/// At most one window is live. Scheduling while one is open replaces it:
/// the old one is closed first and the new countdown starts from full.
#[derive(Debug, Clone, Default)]
pub struct HitboxScheduler {
    window: Option<HitboxWindow>,
}

impl HitboxScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a window for `duration` seconds; does nothing without a rig
    pub fn schedule(
        &mut self,
        duration: f32,
        combo_step: u8,
        rig: Option<&mut (dyn HitboxRig + '_)>,
    ) {
        let Some(rig) = rig else {
            return;
        };

        if self.window.take().is_some() {
            close(rig);
        }

        rig.set_collider_enabled(true);
        rig.set_visual_enabled(true);
        self.window = Some(HitboxWindow {
            combo_step,
            remaining: CooldownTimer::with_remaining(duration),
        });
    }

    /// Count the live window down, closing it once it runs out
    pub fn tick(&mut self, dt: f32, rig: Option<&mut (dyn HitboxRig + '_)>) {
        let Some(window) = self.window.as_mut() else {
            return;
        };

        window.remaining.tick(dt);
        if window.remaining.ready() {
            self.window = None;
            if let Some(rig) = rig {
                close(rig);
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.window.is_some()
    }

    pub fn window(&self) -> Option<&HitboxWindow> {
        self.window.as_ref()
    }
}

fn close(rig: &mut dyn HitboxRig) {
    rig.set_collider_enabled(false);
    rig.set_visual_enabled(false);
}
