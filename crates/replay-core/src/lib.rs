//! Replay timeline engine: plays ordered, timed scripts of log lines into a
//! log view without blocking the caller.

pub mod clock;
pub mod driver;
pub mod engine;
pub mod entry;
pub mod scheduler;
pub mod timeline;
pub mod view;

pub use clock::{Clock, ManualClock, TokioClock};
pub use engine::{OverlapPolicy, ReplayEngine};
pub use entry::{Category, LogEntry};
pub use scheduler::{PlaybackId, Scheduled, Scheduler};
pub use timeline::Timeline;
pub use view::{LogView, MemoryLogView, RenderedLine};
