use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use demo_content::{
    demo_timeline, file_creation_timeline, highlight_python, messages, save_all, AssetRegistry,
    AssetSink, DirectorySink, SaveReport, Token,
};
use replay_core::{Category, Clock, PlaybackId, ReplayEngine, Timeline};

use crate::constants::{MAX_LOG_LINES, PAGE_SCROLL};
use crate::log_view::PaneLogView;
use crate::settings::AppSettings;
use crate::types::{FileListing, Mode, ScrollDirection};

/// Read-only, highlighted view of one file asset.
pub struct Preview {
    pub name: String,
    pub lines: Vec<Vec<Token>>,
    pub scroll: usize,
}

impl Preview {
    fn scroll(&mut self, direction: ScrollDirection, amount: usize) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll = match direction {
            ScrollDirection::Up | ScrollDirection::PageUp => self.scroll.saturating_sub(amount),
            ScrollDirection::Down | ScrollDirection::PageDown => (self.scroll + amount).min(max),
            ScrollDirection::Home => 0,
            ScrollDirection::End => max,
        };
    }
}

/// Application context: owns the replay engine, the file assets and the UI
/// state. Every trigger action goes through here.
pub struct App {
    pub engine: ReplayEngine<PaneLogView>,
    pub registry: AssetRegistry,
    pub settings: AppSettings,
    pub file_list: Vec<FileListing>,
    pub selected: usize,
    pub preview: Option<Preview>,
    pub mode: Mode,
    script: Timeline,
}

impl App {
    pub fn new(settings: AppSettings, clock: Arc<dyn Clock>) -> Result<Self> {
        let script = match &settings.script_path {
            Some(path) => {
                info!(path = %path.display(), "using custom replay script");
                Timeline::load(path)?
            }
            None => demo_timeline(),
        };
        Ok(Self::with_parts(settings, clock, AssetRegistry::builtin(), script))
    }

    pub fn with_parts(
        settings: AppSettings,
        clock: Arc<dyn Clock>,
        registry: AssetRegistry,
        script: Timeline,
    ) -> Self {
        let engine = ReplayEngine::new(Some(PaneLogView::new()), clock)
            .with_policy(settings.overlap_policy)
            .with_transcript_limit(MAX_LOG_LINES);
        let mut app = Self {
            engine,
            registry,
            settings,
            file_list: Vec::new(),
            selected: 0,
            preview: None,
            mode: Mode::Browsing,
            script,
        };
        app.populate_file_list();
        app
    }

    pub fn log_view(&self) -> Option<&PaneLogView> {
        self.engine.view()
    }

    pub fn tick(&mut self) -> usize {
        self.engine.tick()
    }

    pub fn populate_file_list(&mut self) {
        self.file_list = self
            .registry
            .iter()
            .map(|asset| FileListing {
                name: asset.name.clone(),
                size: asset.size(),
                lines: asset.line_count(),
            })
            .collect();
        self.selected = self.selected.min(self.file_list.len().saturating_sub(1));
    }

    /// Refreshes the file list and replays the file creation announcements.
    pub fn create_files(&mut self) -> Option<PlaybackId> {
        self.populate_file_list();
        let timeline = file_creation_timeline(&self.registry);
        self.start_playback(timeline, "file creation")
    }

    pub fn run_demo(&mut self) -> Option<PlaybackId> {
        let timeline = self.script.clone();
        self.start_playback(timeline, "demo")
    }

    fn start_playback(&mut self, timeline: Timeline, label: &str) -> Option<PlaybackId> {
        self.engine.set_policy(self.settings.overlap_policy);
        let scheduled = timeline
            .scaled(self.settings.speed)
            .and_then(|timeline| self.engine.schedule_playback(timeline));
        match scheduled {
            Ok(id) => {
                info!(playback = %id, label, "playback started");
                Some(id)
            }
            Err(e) => {
                warn!(label, error = %e, "playback not started");
                self.engine.emit(&format!("{label} not started: {e}"), Category::Warning);
                None
            }
        }
    }

    pub fn cancel_playback(&mut self) -> usize {
        let dropped = self.engine.cancel_all();
        if dropped > 0 {
            info!(dropped, "playback cancelled");
            self.engine
                .emit(&format!("playback cancelled ({dropped} line(s) skipped)"), Category::Warning);
        }
        dropped
    }

    pub fn clear_log(&mut self) {
        self.engine.clear();
        self.engine.emit(messages::TERMINAL_CLEARED, Category::Info);
    }

    pub async fn save_all_files(&mut self) -> SaveReport {
        let sink = DirectorySink::new(self.settings.download_dir.clone());
        self.save_all_to(&sink).await
    }

    pub async fn save_all_to(&mut self, sink: &dyn AssetSink) -> SaveReport {
        let report = save_all(&self.registry, sink).await;
        for (name, error) in &report.failed {
            self.engine
                .emit(&format!("failed to save {name}: {error}"), Category::Error);
        }
        if report.is_complete() {
            self.engine.emit(messages::FILES_SAVED, Category::Success);
        }
        report
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.file_list.get(self.selected).map(|f| f.name.as_str())
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.file_list.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn open_preview(&mut self) {
        let Some(asset) = self.selected_name().and_then(|name| self.registry.get(name)) else {
            return;
        };
        self.preview = Some(Preview {
            name: asset.name.clone(),
            lines: highlight_python(&asset.contents),
            scroll: 0,
        });
        self.mode = Mode::Previewing;
    }

    pub fn close_overlay(&mut self) {
        self.preview = None;
        self.mode = Mode::Browsing;
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::ShowingHelp => Mode::Browsing,
            _ => {
                self.preview = None;
                Mode::ShowingHelp
            }
        };
    }

    pub fn handle_scroll(&mut self, direction: ScrollDirection) {
        let amount = match direction {
            ScrollDirection::PageUp | ScrollDirection::PageDown => PAGE_SCROLL,
            _ => 1,
        };
        match (&self.mode, self.preview.as_mut()) {
            (Mode::Previewing, Some(preview)) => preview.scroll(direction, amount),
            _ => {
                if let Some(view) = self.engine.view_mut() {
                    view.scroll(direction, amount);
                }
            }
        }
    }

    pub fn status_line(&self) -> String {
        if self.engine.is_active() {
            let eta = self
                .engine
                .time_until_next()
                .map(|d| d.as_millis())
                .unwrap_or_default();
            format!(
                "▶ playing: {} line(s) pending, next in {}ms  [{}]",
                self.engine.pending(),
                eta,
                self.engine.policy()
            )
        } else {
            format!("idle  [{}]  speed x{}", self.engine.policy(), self.settings.speed)
        }
    }
}
