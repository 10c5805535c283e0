//! Non-interactive commands: replay to stdout, list/show/save files.

use anyhow::{anyhow, bail, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use demo_content::{demo_timeline, messages, save_all, AssetRegistry, DirectorySink};
use replay_core::driver::run_until_idle;
use replay_core::{Category, LogView, RenderedLine, ReplayEngine, Timeline, TokioClock};

use crate::settings::AppSettings;

/// Prints every line as it is emitted.
pub struct StdoutLogView<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> StdoutLogView<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LogView for StdoutLogView<W> {
    fn append(&mut self, line: RenderedLine) {
        // A closed pipe just ends the output
        if writeln!(self.out, "{}", line.display()).and_then(|_| self.out.flush()).is_ok() {
            self.written += 1;
        }
    }

    fn clear(&mut self) {
        self.written = 0;
    }

    fn is_scrolled_to_latest(&self) -> bool {
        true
    }
}

pub async fn play(settings: &AppSettings, script: Option<PathBuf>, speed: Option<f64>) -> Result<usize> {
    let timeline = match script.or_else(|| settings.script_path.clone()) {
        Some(path) => Timeline::load(path)?,
        None => demo_timeline(),
    };
    let timeline = timeline.scaled(speed.unwrap_or(settings.speed))?;
    info!(
        entries = timeline.len(),
        duration_ms = timeline.total_duration().as_millis() as u64,
        "replaying script"
    );

    let clock = Arc::new(TokioClock::new());
    let mut engine = ReplayEngine::new(Some(StdoutLogView::new(io::stdout())), clock)
        .with_policy(settings.overlap_policy);
    engine.schedule_playback(timeline)?;
    Ok(run_until_idle(&mut engine).await)
}

pub fn list_files(out: &mut impl Write) -> Result<()> {
    let registry = AssetRegistry::builtin();
    let width = registry.names().iter().map(|n| n.len()).max().unwrap_or(0);
    for asset in registry.iter() {
        writeln!(
            out,
            "{:<width$}  {:>6} bytes  {:>4} lines",
            asset.name,
            asset.size(),
            asset.line_count(),
            width = width
        )?;
    }
    Ok(())
}

pub fn show_file(name: &str, out: &mut impl Write) -> Result<()> {
    let registry = AssetRegistry::builtin();
    let asset = registry.get(name).ok_or_else(|| {
        anyhow!(
            "unknown file '{name}' (available: {})",
            registry.names().join(", ")
        )
    })?;
    out.write_all(asset.contents.as_bytes())?;
    Ok(())
}

pub async fn save_files(settings: &AppSettings, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| settings.download_dir.clone());
    let registry = AssetRegistry::builtin();
    let report = save_all(&registry, &DirectorySink::new(&dir)).await;

    let mut view = StdoutLogView::new(io::stdout());
    for name in &report.saved {
        view.append(RenderedLine::new(
            &format!("{}", dir.join(name).display()),
            Category::Output,
        ));
    }
    for (name, error) in &report.failed {
        view.append(RenderedLine::new(&format!("{name}: {error}"), Category::Error));
    }
    if !report.is_complete() {
        bail!("{} of {} file(s) could not be saved", report.failed.len(), registry.len());
    }
    view.append(RenderedLine::new(messages::FILES_SAVED, Category::Success));
    Ok(())
}
