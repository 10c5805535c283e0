mod components;
mod layout;
mod log_pane;
mod preview;
mod styles;

use ratatui::Frame;

use crate::app::App;
use crate::types::Mode;
use components::{FileListPane, HelpOverlay, KeyBar, StatusLine};
use layout::LayoutManager;
use log_pane::LogPane;
use preview::PreviewOverlay;

pub struct UI;

impl UI {
    pub fn draw(frame: &mut Frame, app: &App) {
        let chunks = LayoutManager::create_main_layout(frame.area());

        FileListPane::render(frame, &chunks.files, app);
        LogPane::render(frame, &chunks.log, app);
        StatusLine::render(frame, &chunks.status, app);
        KeyBar::render(frame, &chunks.keys);

        match app.mode {
            Mode::Previewing => PreviewOverlay::render(frame, app),
            Mode::ShowingHelp => HelpOverlay::render(frame),
            Mode::Browsing => {}
        }
    }
}
