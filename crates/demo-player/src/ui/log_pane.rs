use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use replay_core::RenderedLine;

use super::styles::Styles;
use crate::app::App;
use crate::log_view::PaneLogView;

pub struct LogPane;

impl LogPane {
    pub fn render(frame: &mut Frame, area: &Rect, app: &App) {
        let height = area.height.saturating_sub(2) as usize; // Account for borders
        let items = match app.log_view() {
            Some(view) => Self::visible_items(view, height),
            None => Vec::new(),
        };
        let list = Self::create_list(items, app.log_view());

        frame.render_widget(list, *area);
    }

    /// Embedded line breaks make one log line span several rows.
    fn visible_items(view: &PaneLogView, height: usize) -> Vec<ListItem<'static>> {
        let mut rows: Vec<(String, Style)> = Vec::new();
        let mut first_row_of_offset = 0;
        for (idx, line) in view.lines().iter().enumerate() {
            if idx == view.scroll.offset {
                first_row_of_offset = rows.len();
            }
            rows.extend(Self::line_rows(line));
        }

        let total = rows.len();
        let start = if view.scroll.auto_scroll {
            total.saturating_sub(height)
        } else {
            first_row_of_offset.min(total.saturating_sub(height))
        };
        let end = (start + height).min(total);

        rows.drain(start..end)
            .map(|(text, style)| ListItem::new(Line::from(text)).style(style))
            .collect()
    }

    fn line_rows(line: &RenderedLine) -> Vec<(String, Style)> {
        let style = Styles::for_category(line.category);
        line.rows().into_iter().map(|row| (row, style)).collect()
    }

    fn create_list<'a>(items: Vec<ListItem<'a>>, view: Option<&PaneLogView>) -> List<'a> {
        let mut block = Block::default()
            .title(" Terminal ")
            .borders(Borders::ALL)
            .border_style(Styles::border());

        // Scroll indicator when not following the newest line
        if let Some(view) = view.filter(|v| !v.scroll.auto_scroll) {
            let total = view.len();
            let position = view.scroll.offset + 1;
            block = block.title(format!(
                " Terminal [{}/{}] (End for latest) ",
                position.min(total),
                total
            ));
        }

        List::new(items).block(block).style(Styles::default())
    }
}
