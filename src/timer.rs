//! Pending-timer queue for the reveal/auto-hide pair.
//!
//! Two timer kinds exist and at most one of each is live at a time:
//! scheduling a kind replaces any previous timer of that kind. Timers
//! never fire on their own; the owner calls [`TimerQueue::process`] with
//! the current instant and acts on the kinds returned.

use std::collections::VecDeque;
use std::time::Instant;

/// What a pending timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Reveal,
    AutoHide,
}

impl TimerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reveal => "reveal",
            Self::AutoHide => "auto-hide",
        }
    }
}

/// A scheduled one-shot timer.
#[derive(Debug)]
struct PendingTimer {
    id: u64,
    kind: TimerKind,
    fire_at: Instant,
    cancelled: bool,
}

/// Queue of pending timers with per-kind replacement.
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: VecDeque<PendingTimer>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire at `at`, cancelling any live timer of the
    /// same kind. Returns the timer id.
    pub fn schedule(&mut self, kind: TimerKind, at: Instant) -> u64 {
        self.cancel(kind);
        self.next_id += 1;
        let id = self.next_id;
        self.timers.push_back(PendingTimer {
            id,
            kind,
            fire_at: at,
            cancelled: false,
        });
        id
    }

    /// Cancel the live timer of `kind`, if any.
    pub fn cancel(&mut self, kind: TimerKind) {
        for timer in self.timers.iter_mut() {
            if timer.kind == kind {
                timer.cancelled = true;
            }
        }
    }

    pub fn cancel_all(&mut self) {
        for timer in self.timers.iter_mut() {
            timer.cancelled = true;
        }
    }

    /// Number of live timers.
    pub fn pending(&self) -> usize {
        self.timers.iter().filter(|t| !t.cancelled).count()
    }

    /// Whether a live timer of `kind` exists.
    pub fn is_scheduled(&self, kind: TimerKind) -> bool {
        self.timers.iter().any(|t| !t.cancelled && t.kind == kind)
    }

    /// Deadline of the live timer of `kind`, if any.
    pub fn deadline(&self, kind: TimerKind) -> Option<Instant> {
        self.timers
            .iter()
            .find(|t| !t.cancelled && t.kind == kind)
            .map(|t| t.fire_at)
    }

    /// Nearest live deadline, for owners that sleep between passes.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers
            .iter()
            .filter(|t| !t.cancelled)
            .map(|t| t.fire_at)
            .min()
    }

    /// Drop cancelled timers and fire the due ones.
    ///
    /// Returns the kinds that fired, in deadline order.
    pub fn process(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut kept = VecDeque::with_capacity(self.timers.len());
        let mut due = Vec::new();
        for timer in self.timers.drain(..) {
            if timer.cancelled {
                continue;
            }
            if timer.fire_at <= now {
                due.push(timer);
            } else {
                kept.push_back(timer);
            }
        }
        self.timers = kept;
        due.sort_by_key(|t| (t.fire_at, t.id));
        due.into_iter().map(|t| t.kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn schedule_replaces_same_kind() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(TimerKind::Reveal, now + Duration::from_millis(800));
        queue.schedule(TimerKind::Reveal, now + Duration::from_millis(1600));
        assert_eq!(queue.pending(), 1);

        // Only the replacement fires, and only once due.
        assert!(queue.process(now + Duration::from_millis(1000)).is_empty());
        assert_eq!(
            queue.process(now + Duration::from_millis(1700)),
            vec![TimerKind::Reveal]
        );
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn kinds_are_independent() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(TimerKind::Reveal, now + Duration::from_millis(800));
        queue.schedule(TimerKind::AutoHide, now + Duration::from_secs(6));
        assert_eq!(queue.pending(), 2);
        assert!(queue.is_scheduled(TimerKind::Reveal));
        assert!(queue.is_scheduled(TimerKind::AutoHide));

        assert_eq!(
            queue.process(now + Duration::from_secs(1)),
            vec![TimerKind::Reveal]
        );
        assert!(queue.is_scheduled(TimerKind::AutoHide));
    }

    #[test]
    fn late_process_fires_in_deadline_order() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(TimerKind::AutoHide, now + Duration::from_secs(6));
        queue.schedule(TimerKind::Reveal, now + Duration::from_millis(800));
        assert_eq!(
            queue.process(now + Duration::from_secs(10)),
            vec![TimerKind::Reveal, TimerKind::AutoHide]
        );
    }

    #[test]
    fn cancel_all_silences_everything() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(TimerKind::Reveal, now + Duration::from_millis(800));
        queue.schedule(TimerKind::AutoHide, now + Duration::from_secs(6));
        queue.cancel_all();
        assert_eq!(queue.pending(), 0);
        assert!(queue.process(now + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn next_deadline_is_min_live() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        assert_eq!(queue.next_deadline(), None);
        queue.schedule(TimerKind::AutoHide, now + Duration::from_secs(6));
        queue.schedule(TimerKind::Reveal, now + Duration::from_millis(800));
        assert_eq!(queue.next_deadline(), Some(now + Duration::from_millis(800)));
        queue.cancel(TimerKind::Reveal);
        assert_eq!(queue.next_deadline(), Some(now + Duration::from_secs(6)));
    }
}
