use std::time::{Duration, Instant};

/// Upper bound on how long the event loop blocks when no clock is on screen
pub const IDLE_POLL: Duration = Duration::from_millis(500);

/// Drives the once-per-interval redraw of running clocks. Only armed while
/// the active view shows elapsed time.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the ticker; a running ticker keeps its schedule
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Start or stop to match whether a clock is visible
    pub fn set_active(&mut self, active: bool, now: Instant) {
        if active {
            self.start(now);
        } else {
            self.stop();
        }
    }

    /// How long the event loop may wait for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.next_due {
            Some(due) => due.saturating_duration_since(now),
            None => IDLE_POLL,
        }
    }

    /// True once per elapsed interval; reschedules itself
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_ticker_never_fires() {
        let mut ticker = Ticker::new(Duration::from_millis(1000));
        let now = Instant::now();

        assert!(!ticker.is_running());
        assert!(!ticker.fire(now + Duration::from_secs(5)));
        assert_eq!(ticker.poll_timeout(now), IDLE_POLL);
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut ticker = Ticker::new(Duration::from_millis(1000));
        let now = Instant::now();
        ticker.start(now);

        assert!(!ticker.fire(now + Duration::from_millis(500)));
        assert_eq!(
            ticker.poll_timeout(now + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
        assert!(ticker.fire(now + Duration::from_millis(1000)));
        assert!(!ticker.fire(now + Duration::from_millis(1500)));
        assert!(ticker.fire(now + Duration::from_millis(2000)));
    }

    #[test]
    fn test_set_active_toggles() {
        let mut ticker = Ticker::new(Duration::from_millis(1000));
        let now = Instant::now();

        ticker.set_active(true, now);
        assert!(ticker.is_running());
        ticker.set_active(false, now);
        assert!(!ticker.is_running());
    }
}
