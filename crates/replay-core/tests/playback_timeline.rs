use std::sync::Arc;
use std::time::Duration;

use replay_core::driver::run_until_idle;
use replay_core::{
    Category, Clock, LogEntry, LogView, ManualClock, MemoryLogView, OverlapPolicy, ReplayEngine,
    Timeline, TokioClock,
};

fn manual_engine(policy: OverlapPolicy) -> (ReplayEngine<MemoryLogView>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let engine = ReplayEngine::new(Some(MemoryLogView::new()), clock.clone()).with_policy(policy);
    (engine, clock)
}

fn texts(engine: &ReplayEngine<MemoryLogView>) -> Vec<String> {
    engine
        .view()
        .map(|v| v.texts().into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}

fn script(prefix: &str, delays: &[u64]) -> Timeline {
    delays
        .iter()
        .enumerate()
        .map(|(i, d)| LogEntry::new(*d, format!("{prefix}{i}"), Category::Info))
        .collect()
}

#[test]
fn test_two_line_scenario_respects_delay() {
    let (mut engine, clock) = manual_engine(OverlapPolicy::Interleave);
    engine
        .schedule_playback(vec![
            LogEntry::new(0, "A", Category::Info),
            LogEntry::new(100, "B", Category::Success),
        ])
        .unwrap();

    engine.tick();
    assert_eq!(texts(&engine), vec!["A"]);

    clock.advance(Duration::from_millis(99));
    engine.tick();
    assert_eq!(texts(&engine), vec!["A"], "B must not fire before 100ms");

    clock.advance(Duration::from_millis(1));
    engine.tick();
    assert_eq!(texts(&engine), vec!["A", "B"]);
    assert!(!engine.is_active());

    let view = engine.view().unwrap();
    assert_eq!(view.lines()[1].icon, "✅");
    assert!(view.is_scrolled_to_latest());
}

#[test]
fn test_emitted_order_matches_declared_order() {
    let delays = [0, 0, 30, 0, 5, 0, 0, 120, 1, 0];
    let (mut engine, clock) = manual_engine(OverlapPolicy::Interleave);
    engine.schedule_playback(script("line", &delays)).unwrap();

    // Jump straight past the end: everything fires in a single tick.
    clock.advance(Duration::from_secs(10));
    assert_eq!(engine.tick(), delays.len());

    let expected: Vec<String> = (0..delays.len()).map(|i| format!("line{i}")).collect();
    assert_eq!(texts(&engine), expected);
}

#[test]
fn test_stepwise_ticks_preserve_order() {
    let delays = [10, 0, 10, 0, 0, 10];
    let (mut engine, clock) = manual_engine(OverlapPolicy::Interleave);
    engine.schedule_playback(script("s", &delays)).unwrap();

    let mut seen = 0;
    while engine.is_active() {
        clock.advance(Duration::from_millis(1));
        engine.tick();
        let now = texts(&engine);
        assert!(now.len() >= seen);
        seen = now.len();
    }
    assert_eq!(texts(&engine), vec!["s0", "s1", "s2", "s3", "s4", "s5"]);
    assert_eq!(clock.now(), Duration::from_millis(30));
}

#[test]
fn test_clear_leaves_view_empty() {
    let (mut engine, _clock) = manual_engine(OverlapPolicy::Interleave);
    engine.emit("something", Category::Info);
    engine.clear();
    assert!(texts(&engine).is_empty());
    assert_eq!(engine.transcript(), "");
}

#[test]
fn test_clear_does_not_cancel_in_flight_playback() {
    let (mut engine, clock) = manual_engine(OverlapPolicy::Interleave);
    engine.schedule_playback(script("p", &[0, 50])).unwrap();
    engine.tick();
    engine.clear();

    clock.advance(Duration::from_millis(50));
    engine.tick();
    assert_eq!(texts(&engine), vec!["p1"]);
}

#[test]
fn test_interleave_policy_merges_by_fire_time() {
    let (mut engine, clock) = manual_engine(OverlapPolicy::Interleave);
    engine.schedule_playback(script("a", &[0, 100, 100])).unwrap();
    clock.advance(Duration::from_millis(50));
    engine.schedule_playback(script("b", &[0, 100])).unwrap();

    clock.advance(Duration::from_secs(1));
    engine.tick();
    assert_eq!(texts(&engine), vec!["a0", "b0", "a1", "b1", "a2"]);
}

#[test]
fn test_cancel_previous_policy_drops_pending_lines() {
    let (mut engine, clock) = manual_engine(OverlapPolicy::CancelPrevious);
    let first = engine.schedule_playback(script("a", &[0, 100, 100])).unwrap();
    engine.tick();

    let second = engine.schedule_playback(script("b", &[10])).unwrap();
    assert_ne!(first, second);
    assert_eq!(engine.pending_for(first), 0);
    assert_eq!(engine.active_playbacks(), vec![second]);

    clock.advance(Duration::from_secs(1));
    engine.tick();
    assert_eq!(texts(&engine), vec!["a0", "b0"]);
}

#[test]
fn test_reject_policy_refuses_while_active() {
    let (mut engine, clock) = manual_engine(OverlapPolicy::RejectWhileActive);
    engine.schedule_playback(script("a", &[0, 100])).unwrap();
    assert!(engine.schedule_playback(script("b", &[0])).is_err());

    clock.advance(Duration::from_millis(100));
    engine.tick();
    assert!(!engine.is_active());
    assert!(engine.schedule_playback(script("b", &[0])).is_ok());
}

#[test]
fn test_explicit_cancel() {
    let (mut engine, clock) = manual_engine(OverlapPolicy::Interleave);
    let a = engine.schedule_playback(script("a", &[10, 10])).unwrap();
    engine.schedule_playback(script("b", &[10])).unwrap();
    assert_eq!(engine.cancel(a), 2);

    clock.advance(Duration::from_millis(100));
    engine.tick();
    assert_eq!(texts(&engine), vec!["b0"]);
    assert_eq!(engine.cancel_all(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_driver_plays_in_real_time() {
    let clock = Arc::new(TokioClock::new());
    let mut engine = ReplayEngine::new(Some(MemoryLogView::new()), clock.clone());
    engine
        .schedule_playback(vec![
            LogEntry::new(0, "A", Category::Info),
            LogEntry::new(100, "B", Category::Success),
            LogEntry::new(250, "C", Category::Server),
        ])
        .unwrap();

    let started = tokio::time::Instant::now();
    let fired = run_until_idle(&mut engine).await;

    assert_eq!(fired, 3);
    assert_eq!(texts(&engine), vec!["A", "B", "C"]);
    assert!(started.elapsed() >= Duration::from_millis(350));
}
