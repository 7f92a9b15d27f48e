// core/timer.rs
//
// One-shot deferred payloads, advanced by the fixed step.
//
// Usage:
//   let mut timers = TimerScheduler::new();
//   timers.schedule(1.0, MyEvent::Respawn);
//   for due in timers.tick(dt) { handle(due); }
//
// There is no cancel: a payload that may fire after the world moved on must be
// handled idempotently by whoever receives it.

/// Handle returned by [`TimerScheduler::schedule`], useful for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u32);

#[derive(Debug, Clone)]
struct PendingTimer<T> {
    id: TimerId,
    remaining: f32,
    payload: T,
}

/// Holds `(remaining, payload)` pairs and releases payloads once their delay ran out.
#[derive(Debug, Clone)]
pub struct TimerScheduler<T> {
    pending: Vec<PendingTimer<T>>,
    next_id: u32,
}

impl<T> TimerScheduler<T> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 1,
        }
    }

    /// Schedule `payload` to be released after `delay` seconds of scaled game time.
    /// A non-positive delay releases it on the next tick.
    pub fn schedule(&mut self, delay: f32, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            remaining: delay.max(0.0),
            payload,
        });
        id
    }

    /// Advance every timer by `dt` and return the payloads that came due,
    /// in scheduling order.
    pub fn tick(&mut self, dt: f32) -> Vec<T> {
        let mut due = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending.len());
        for mut timer in self.pending.drain(..) {
            timer.remaining -= dt;
            if timer.remaining <= 0.0 {
                due.push(timer.payload);
            } else {
                still_pending.push(timer);
            }
        }
        self.pending = still_pending;
        due
    }

    /// Seconds left on a pending timer, `None` once it fired.
    pub fn remaining(&self, id: TimerId) -> Option<f32> {
        self.pending.iter().find(|t| t.id == id).map(|t| t.remaining)
    }

    /// Iterate over pending payloads with their remaining time.
    pub fn iter(&self) -> impl Iterator<Item = (f32, &T)> {
        self.pending.iter().map(|t| (t.remaining, &t.payload))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for TimerScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let mut timers = TimerScheduler::new();
        let id = timers.schedule(0.5, "respawn");

        assert!(timers.tick(0.25).is_empty());
        assert_eq!(timers.remaining(id), Some(0.25));
        assert_eq!(timers.tick(0.25), vec!["respawn"]);
        assert_eq!(timers.remaining(id), None);
        assert!(timers.tick(1.0).is_empty());
    }

    #[test]
    fn independent_timers_fire_separately() {
        let mut timers = TimerScheduler::new();
        timers.schedule(0.25, 1);
        timers.schedule(3.0, 2);
        timers.schedule(0.25, 3);

        assert_eq!(timers.tick(0.5), vec![1, 3]);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.tick(2.5), vec![2]);
        assert!(timers.is_empty());
    }

    #[test]
    fn zero_delay_fires_next_tick() {
        let mut timers = TimerScheduler::new();
        timers.schedule(-1.0, ());
        assert_eq!(timers.tick(0.0).len(), 1);
    }

    #[test]
    fn zero_dt_holds_timers() {
        let mut timers = TimerScheduler::new();
        timers.schedule(0.1, ());
        for _ in 0..100 {
            assert!(timers.tick(0.0).is_empty());
        }
        assert_eq!(timers.iter().count(), 1);
    }
}
