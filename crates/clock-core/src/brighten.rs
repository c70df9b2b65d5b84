use crate::constants::DECAY_PER_TICK;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrightenPhase {
    Idle,
    Decaying,
}

/// Key-press flash: jumps to full brightness, then decays linearly to rest.
///
/// The owner drives `tick` from a timer that should only run while the phase
/// is `Decaying`; `trigger` and `tick` report when that timer has to be
/// started or stopped.
#[derive(Clone, Debug, Default)]
pub struct BrightenAnimation {
    progress: f64,
}

impl BrightenAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current intensity in [0, 1].
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn phase(&self) -> BrightenPhase {
        if self.progress > 0.0 {
            BrightenPhase::Decaying
        } else {
            BrightenPhase::Idle
        }
    }

    /// Restart the flash at full intensity. Returns true when the animation
    /// was idle, i.e. the decay timer needs starting.
    pub fn trigger(&mut self) -> bool {
        let was_idle = self.phase() == BrightenPhase::Idle;
        self.progress = 1.0;
        was_idle
    }

    /// Advance one decay step. Idle stays idle.
    pub fn tick(&mut self) -> BrightenPhase {
        if self.progress > 0.0 {
            self.progress = (self.progress - DECAY_PER_TICK).max(0.0);
        }
        self.phase()
    }
}
