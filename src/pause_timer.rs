use std::time::Duration;

use bevy::time::{Timer, TimerMode};

/// Deferred resume for a paused [`StatManager`](crate::stat_manager::StatManager).
///
/// Advanced cooperatively by the owner on the tick thread. Holds at most one pending
/// resume: scheduling again replaces the pending one, so the last pause wins.
#[derive(Debug, Clone, Default)]
pub struct PauseTimer {
    pending: Option<Timer>,
}

impl PauseTimer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn schedule(&mut self, duration: Duration) {
        self.pending = Some(Timer::new(duration, TimerMode::Once));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending resume fires, if any.
    pub fn remaining(&self) -> Option<Duration> {
        self.pending.as_ref().map(Timer::remaining)
    }

    /// Advances the pending resume. Returns `true` exactly once, on the call where it
    /// elapses.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.pending.as_mut() else {
            return false;
        };

        timer.tick(delta);
        if !timer.finished() {
            return false;
        }

        self.pending = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_duration() {
        let mut timer = PauseTimer::new();
        assert!(!timer.tick(Duration::from_secs(10)));

        timer.schedule(Duration::from_secs(2));
        assert!(timer.is_pending());
        assert!(!timer.tick(Duration::from_millis(1500)));
        assert_eq!(timer.remaining(), Some(Duration::from_millis(500)));
        assert!(timer.tick(Duration::from_millis(500)));
        assert!(!timer.is_pending());
        assert!(!timer.tick(Duration::from_secs(5)));
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let mut timer = PauseTimer::new();
        timer.schedule(Duration::from_secs(1));
        assert!(!timer.tick(Duration::from_millis(900)));

        timer.schedule(Duration::from_secs(1));
        assert!(!timer.tick(Duration::from_millis(900)));
        assert!(timer.tick(Duration::from_millis(100)));
    }

    #[test]
    fn test_zero_duration_resumes_on_next_tick() {
        let mut timer = PauseTimer::new();
        timer.schedule(Duration::ZERO);
        assert!(timer.tick(Duration::ZERO));
    }
}
