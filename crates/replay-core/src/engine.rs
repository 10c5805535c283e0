use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::entry::{Category, LogEntry};
use crate::scheduler::{PlaybackId, Scheduler};
use crate::timeline::Timeline;
use crate::view::{LogView, RenderedLine};

/// What happens when a playback is requested while another is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Both playbacks run; their lines interleave by fire time.
    Interleave,
    /// Pending lines of earlier playbacks are dropped.
    #[default]
    CancelPrevious,
    /// The new playback is refused.
    RejectWhileActive,
}

impl OverlapPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            OverlapPolicy::Interleave => "interleave",
            OverlapPolicy::CancelPrevious => "cancel-previous",
            OverlapPolicy::RejectWhileActive => "reject-while-active",
        }
    }
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlapPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "interleave" => Ok(OverlapPolicy::Interleave),
            "cancel-previous" | "cancel" => Ok(OverlapPolicy::CancelPrevious),
            "reject-while-active" | "reject" => Ok(OverlapPolicy::RejectWhileActive),
            other => bail!("unknown overlap policy '{other}'"),
        }
    }
}

/// Plays timed scripts into a log view.
///
/// Nothing is emitted from `schedule_playback` itself; scheduled lines are
/// drained by [`ReplayEngine::tick`], which the owner calls from its loop
/// (or via [`crate::driver::run_until_idle`]).
pub struct ReplayEngine<V: LogView> {
    view: Option<V>,
    clock: Arc<dyn Clock>,
    scheduler: Scheduler<LogEntry>,
    policy: OverlapPolicy,
    next_playback: u64,
    transcript: VecDeque<String>,
    transcript_limit: Option<usize>,
}

impl<V: LogView> ReplayEngine<V> {
    pub fn new(view: Option<V>, clock: Arc<dyn Clock>) -> Self {
        Self {
            view,
            clock,
            scheduler: Scheduler::new(),
            policy: OverlapPolicy::default(),
            next_playback: 1,
            transcript: VecDeque::new(),
            transcript_limit: None,
        }
    }

    /// Keeps only the most recent `lines` messages in the transcript.
    pub fn with_transcript_limit(mut self, lines: usize) -> Self {
        self.transcript_limit = Some(lines.max(1));
        self
    }

    pub fn with_policy(mut self, policy: OverlapPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: OverlapPolicy) {
        self.policy = policy;
    }

    pub fn view(&self) -> Option<&V> {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> Option<&mut V> {
        self.view.as_mut()
    }

    pub fn attach_view(&mut self, view: V) -> Option<V> {
        self.view.replace(view)
    }

    pub fn detach_view(&mut self) -> Option<V> {
        self.view.take()
    }

    /// Registers every entry at its cumulative offset from now.
    pub fn schedule_playback(&mut self, timeline: impl Into<Timeline>) -> Result<PlaybackId> {
        let timeline = timeline.into();

        if self.is_active() {
            match self.policy {
                OverlapPolicy::Interleave => {}
                OverlapPolicy::CancelPrevious => {
                    let dropped = self.scheduler.clear();
                    debug!(dropped, "cancelled in-flight playback");
                }
                OverlapPolicy::RejectWhileActive => {
                    let active = self.active_playbacks();
                    bail!(
                        "playback already in flight ({} pending line(s) in {})",
                        self.scheduler.len(),
                        active
                            .iter()
                            .map(PlaybackId::to_string)
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                }
            }
        }

        let id = PlaybackId(self.next_playback);
        self.next_playback += 1;

        let base = self.clock.now();
        for (offset, entry) in timeline.scheduled() {
            self.scheduler.schedule(base + offset, id, entry.clone());
        }
        debug!(
            playback = %id,
            entries = timeline.len(),
            duration_ms = timeline.total_duration().as_millis() as u64,
            "scheduled playback"
        );
        Ok(id)
    }

    /// Emits every line that is due. Returns how many fired.
    pub fn tick(&mut self) -> usize {
        let due = self.scheduler.pop_due(self.clock.now());
        let fired = due.len();
        for scheduled in due {
            trace!(playback = %scheduled.playback, at_ms = scheduled.fire_at.as_millis() as u64, "fire");
            self.emit(&scheduled.item.message, scheduled.item.category);
        }
        fired
    }

    /// Emits a line right away, bypassing the schedule.
    pub fn emit(&mut self, message: &str, category: Category) {
        let Some(view) = self.view.as_mut() else {
            trace!(%category, "no log view attached; line dropped");
            return;
        };
        view.append(RenderedLine::new(message, category));
        self.transcript.push_back(message.to_string());
        if let Some(limit) = self.transcript_limit {
            while self.transcript.len() > limit {
                self.transcript.pop_front();
            }
        }
    }

    /// Empties the view and the transcript. Pending lines still fire.
    pub fn clear(&mut self) {
        if let Some(view) = self.view.as_mut() {
            view.clear();
        }
        self.transcript.clear();
    }

    pub fn cancel(&mut self, playback: PlaybackId) -> usize {
        self.scheduler.cancel(playback)
    }

    pub fn cancel_all(&mut self) -> usize {
        self.scheduler.clear()
    }

    pub fn is_active(&self) -> bool {
        !self.scheduler.is_empty()
    }

    pub fn active_playbacks(&self) -> Vec<PlaybackId> {
        self.scheduler.playbacks()
    }

    pub fn pending(&self) -> usize {
        self.scheduler.len()
    }

    pub fn pending_for(&self, playback: PlaybackId) -> usize {
        self.scheduler.pending_for(playback)
    }

    pub fn next_fire_at(&self) -> Option<Duration> {
        self.scheduler.next_fire_at()
    }

    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_fire_at()
            .map(|at| at.saturating_sub(self.clock.now()))
    }

    /// Raw messages emitted since the last clear, one per line.
    pub fn transcript(&self) -> String {
        self.transcript.iter().map(|m| format!("{m}\n")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::view::MemoryLogView;

    fn engine() -> (ReplayEngine<MemoryLogView>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let engine = ReplayEngine::new(Some(MemoryLogView::new()), clock.clone());
        (engine, clock)
    }

    fn texts(engine: &ReplayEngine<MemoryLogView>) -> Vec<String> {
        engine
            .view()
            .map(|v| v.texts().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[test]
    fn schedule_does_not_emit_synchronously() {
        let (mut engine, _clock) = engine();
        engine
            .schedule_playback(vec![LogEntry::immediate("now", Category::Info)])
            .unwrap();
        assert!(texts(&engine).is_empty());
        assert_eq!(engine.tick(), 1);
        assert_eq!(texts(&engine), vec!["now"]);
    }

    #[test]
    fn offsets_count_from_schedule_time() {
        let (mut engine, clock) = engine();
        clock.advance(Duration::from_secs(5));
        engine
            .schedule_playback(vec![LogEntry::new(200, "late", Category::Info)])
            .unwrap();
        assert_eq!(engine.next_fire_at(), Some(Duration::from_millis(5200)));
        assert_eq!(engine.time_until_next(), Some(Duration::from_millis(200)));
    }

    #[test]
    fn missing_view_drops_silently() {
        let clock = Arc::new(ManualClock::new());
        let mut engine: ReplayEngine<MemoryLogView> = ReplayEngine::new(None, clock);
        engine
            .schedule_playback(vec![LogEntry::immediate("lost", Category::Error)])
            .unwrap();
        assert_eq!(engine.tick(), 1);
        assert!(engine.transcript().is_empty());
        assert!(!engine.is_active());
    }

    #[test]
    fn transcript_keeps_raw_messages_until_clear() {
        let (mut engine, _clock) = engine();
        engine.emit("\\nheader", Category::System);
        engine.emit("body", Category::Info);
        assert_eq!(engine.transcript(), "\\nheader\nbody\n");
        engine.clear();
        assert_eq!(engine.transcript(), "");
        assert!(texts(&engine).is_empty());
    }

    #[test]
    fn transcript_limit_drops_oldest_messages() {
        let clock = Arc::new(ManualClock::new());
        let mut engine =
            ReplayEngine::new(Some(MemoryLogView::new()), clock).with_transcript_limit(2);
        for message in ["one", "two", "three"] {
            engine.emit(message, Category::Info);
        }
        assert_eq!(engine.transcript(), "two\nthree\n");
        assert_eq!(texts(&engine).len(), 3);
    }

    #[test]
    fn detached_view_misses_lines_until_reattached() {
        let (mut engine, clock) = engine();
        engine
            .schedule_playback(vec![
                LogEntry::immediate("first", Category::Info),
                LogEntry::new(100, "second", Category::Info),
            ])
            .unwrap();
        engine.tick();

        let detached = engine.detach_view().unwrap();
        assert_eq!(detached.texts(), vec!["first"]);
        clock.advance(Duration::from_millis(100));
        assert_eq!(engine.tick(), 1);
        assert_eq!(engine.transcript(), "first\n");

        assert!(engine.attach_view(MemoryLogView::new()).is_none());
        engine.emit("third", Category::Info);
        assert_eq!(texts(&engine), vec!["third"]);
    }

    #[test]
    fn policy_change_applies_to_next_schedule() {
        let (mut engine, _clock) = engine();
        engine
            .schedule_playback(vec![LogEntry::new(50, "a", Category::Info)])
            .unwrap();
        engine.set_policy(OverlapPolicy::RejectWhileActive);
        assert_eq!(engine.policy(), OverlapPolicy::RejectWhileActive);
        assert!(engine
            .schedule_playback(vec![LogEntry::new(50, "b", Category::Info)])
            .is_err());
        assert_eq!(engine.pending(), 1);
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!("interleave".parse::<OverlapPolicy>().unwrap(), OverlapPolicy::Interleave);
        assert_eq!("Cancel_Previous".parse::<OverlapPolicy>().unwrap(), OverlapPolicy::CancelPrevious);
        assert_eq!("reject".parse::<OverlapPolicy>().unwrap(), OverlapPolicy::RejectWhileActive);
        assert!("sometimes".parse::<OverlapPolicy>().is_err());
    }
}
