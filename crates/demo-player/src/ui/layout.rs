use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FILE_LIST_WIDTH_PERCENT, OVERLAY_HEIGHT_PERCENT, OVERLAY_WIDTH_PERCENT};

pub struct MainLayout {
    pub files: Rect,
    pub log: Rect,
    pub status: Rect,
    pub keys: Rect,
}

pub struct LayoutManager;

impl LayoutManager {
    pub fn create_main_layout(area: Rect) -> MainLayout {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Panels
                Constraint::Length(1), // Playback status
                Constraint::Length(1), // Key bar
            ])
            .split(area);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(FILE_LIST_WIDTH_PERCENT),
                Constraint::Percentage(100 - FILE_LIST_WIDTH_PERCENT),
            ])
            .split(main_chunks[0]);

        MainLayout {
            files: content_chunks[0],
            log: content_chunks[1],
            status: main_chunks[1],
            keys: main_chunks[2],
        }
    }

    pub fn centered_rect(area: Rect) -> Rect {
        Self::centered_rect_with_size(OVERLAY_WIDTH_PERCENT, OVERLAY_HEIGHT_PERCENT, area)
    }

    pub fn centered_rect_with_size(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - height_percent) / 2),
                Constraint::Percentage(height_percent),
                Constraint::Percentage((100 - height_percent) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - width_percent) / 2),
                Constraint::Percentage(width_percent),
                Constraint::Percentage((100 - width_percent) / 2),
            ])
            .split(vertical[1])[1]
    }
}
