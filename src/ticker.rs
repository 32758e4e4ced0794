use std::time::{Duration, Instant};

/// A cancellable, re-armable recurring schedule.  At most one schedule is
/// live at a time; arming replaces whatever was armed before.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Ticker {
    schedule: Option<Schedule>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Schedule {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    pub(crate) fn new() -> Ticker {
        Ticker::default()
    }

    /// Start ticking every `interval`, with the first tick due one interval
    /// after `now`.  Any previously-armed schedule is cancelled.
    pub(crate) fn arm(&mut self, interval: Duration, now: Instant) {
        self.schedule = Some(Schedule {
            interval,
            next: now + interval,
        });
    }

    /// Cancel the current schedule, if any
    pub(crate) fn disarm(&mut self) {
        self.schedule = None;
    }

    /// Return how long until the next tick is due, or `None` if nothing is
    /// armed.  A tick that is already due yields `Duration::ZERO`.
    pub(crate) fn time_until(&self, now: Instant) -> Option<Duration> {
        self.schedule
            .map(|s| s.next.saturating_duration_since(now))
    }

    /// If a tick is due at `now`, consume it and return `true`.  The next
    /// deadline is one interval after the consumed one; if that's already in
    /// the past (because the caller fell behind), it's pushed to one interval
    /// after `now` instead so that missed ticks aren't delivered in a burst.
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        let Some(ref mut s) = self.schedule else {
            return false;
        };
        if now < s.next {
            return false;
        }
        s.next += s.interval;
        if s.next <= now {
            s.next = now + s.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn unarmed_never_fires() {
        let mut t = Ticker::new();
        let now = Instant::now();
        assert_eq!(t.time_until(now), None);
        assert!(!t.fire(now + 1000 * MS));
    }

    #[test]
    fn fires_once_per_interval() {
        let mut t = Ticker::new();
        let start = Instant::now();
        t.arm(200 * MS, start);
        assert_eq!(t.time_until(start), Some(200 * MS));
        assert!(!t.fire(start + 199 * MS));
        assert!(t.fire(start + 200 * MS));
        assert!(!t.fire(start + 200 * MS));
        assert_eq!(t.time_until(start + 250 * MS), Some(150 * MS));
        assert!(t.fire(start + 400 * MS));
    }

    #[test]
    fn late_caller_gets_one_tick_not_a_burst() {
        let mut t = Ticker::new();
        let start = Instant::now();
        t.arm(100 * MS, start);
        assert!(t.fire(start + 1000 * MS));
        assert!(!t.fire(start + 1050 * MS));
        assert!(t.fire(start + 1100 * MS));
    }

    #[test]
    fn rearming_replaces_schedule() {
        let mut t = Ticker::new();
        let start = Instant::now();
        t.arm(200 * MS, start);
        t.arm(190 * MS, start + 50 * MS);
        assert_eq!(t.time_until(start + 50 * MS), Some(190 * MS));
        assert!(!t.fire(start + 200 * MS));
        assert!(t.fire(start + 240 * MS));
        assert!(!t.fire(start + 300 * MS));
    }

    #[test]
    fn disarm_cancels() {
        let mut t = Ticker::new();
        let start = Instant::now();
        t.arm(50 * MS, start);
        t.disarm();
        assert_eq!(t.time_until(start), None);
        assert!(!t.fire(start + 500 * MS));
    }
}
