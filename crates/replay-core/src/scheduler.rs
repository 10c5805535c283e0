//! Sorted list of deferred actions keyed by virtual fire time.
//!
//! Ties on fire time are broken by registration order, so a playback whose
//! offsets never decrease always comes out in the order it went in.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::time::Duration;

/// Identifies one `schedule_playback` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaybackId(pub u64);

impl fmt::Display for PlaybackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scheduled<T> {
    pub fire_at: Duration,
    pub playback: PlaybackId,
    pub item: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BTreeMap<(Duration, u64), (PlaybackId, T)>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, fire_at: Duration, playback: PlaybackId, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((fire_at, seq), (playback, item));
    }

    /// Removes and returns everything due at `now`, earliest first.
    pub fn pop_due(&mut self, now: Duration) -> Vec<Scheduled<T>> {
        let mut due = Vec::new();
        while let Some(entry) = self.queue.first_entry() {
            let (fire_at, _) = *entry.key();
            if fire_at > now {
                break;
            }
            let (playback, item) = entry.remove();
            due.push(Scheduled {
                fire_at,
                playback,
                item,
            });
        }
        due
    }

    /// Drops every pending item of `playback`. Returns how many were dropped.
    pub fn cancel(&mut self, playback: PlaybackId) -> usize {
        let before = self.queue.len();
        self.queue.retain(|_, (owner, _)| *owner != playback);
        before - self.queue.len()
    }

    pub fn clear(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }

    pub fn pending_for(&self, playback: PlaybackId) -> usize {
        self.queue
            .values()
            .filter(|(owner, _)| *owner == playback)
            .count()
    }

    /// Playbacks that still have pending items, in id order.
    pub fn playbacks(&self) -> Vec<PlaybackId> {
        self.queue
            .values()
            .map(|(owner, _)| *owner)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn next_fire_at(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(fire_at, _)| *fire_at)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn pops_in_time_then_registration_order() {
        let mut s = Scheduler::new();
        let p = PlaybackId(1);
        s.schedule(ms(100), p, "c");
        s.schedule(ms(0), p, "a");
        s.schedule(ms(0), p, "b");
        s.schedule(ms(100), p, "d");

        assert!(s.pop_due(Duration::ZERO).iter().map(|d| d.item).eq(["a", "b"]));
        assert!(s.pop_due(ms(99)).is_empty());
        assert!(s.pop_due(ms(100)).iter().map(|d| d.item).eq(["c", "d"]));
        assert!(s.is_empty());
    }

    #[test]
    fn cancel_only_touches_one_playback() {
        let mut s = Scheduler::new();
        s.schedule(ms(10), PlaybackId(1), 1);
        s.schedule(ms(20), PlaybackId(2), 2);
        s.schedule(ms(30), PlaybackId(1), 3);

        assert_eq!(s.playbacks(), vec![PlaybackId(1), PlaybackId(2)]);
        assert_eq!(s.cancel(PlaybackId(1)), 2);
        assert_eq!(s.pending_for(PlaybackId(1)), 0);
        assert_eq!(s.next_fire_at(), Some(ms(20)));
        assert_eq!(s.len(), 1);
    }
}
