//! Tick-driven pause countdown for step one.
//!
//! No threads and no wall clock: the caller delivers one tick per second
//! and reacts to the returned event.

/// Countdown state.
#[derive(Debug, Default)]
pub struct PauseTimer {
    running: bool,
    left: u32,
}

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// Not running; the tick was ignored.
    Idle,
    /// Seconds remaining after this tick.
    Running { left: u32 },
    /// Reached zero on this tick; the timer stopped itself.
    Finished,
}

impl PauseTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn seconds_left(&self) -> u32 {
        self.left
    }

    /// Start counting down from `seconds`.
    pub fn start(&mut self, seconds: u32) {
        self.running = true;
        self.left = seconds;
    }

    /// Stop without clearing the remaining time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and clear.
    pub fn reset(&mut self) {
        self.running = false;
        self.left = 0;
    }

    /// Advance one second.
    pub fn tick(&mut self) -> TimerEvent {
        if !self.running {
            return TimerEvent::Idle;
        }
        self.left = self.left.saturating_sub(1);
        if self.left == 0 {
            self.running = false;
            return TimerEvent::Finished;
        }
        TimerEvent::Running { left: self.left }
    }
}
