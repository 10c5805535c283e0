use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::layout::LayoutManager;
use super::styles::Styles;
use crate::app::App;

pub struct FileListPane;

impl FileListPane {
    pub fn render(frame: &mut Frame, area: &Rect, app: &App) {
        let items: Vec<ListItem> = app
            .file_list
            .iter()
            .enumerate()
            .map(|(idx, file)| {
                let style = if idx == app.selected {
                    Styles::selected()
                } else {
                    Styles::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("📄 {}", file.name), style),
                    Span::styled(format!("  {} lines", file.lines), Styles::dimmed()),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Project files ")
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        );
        frame.render_widget(list, *area);
    }
}

pub struct StatusLine;

impl StatusLine {
    pub fn render(frame: &mut Frame, area: &Rect, app: &App) {
        let style = if app.engine.is_active() {
            Styles::playing()
        } else {
            Styles::dimmed()
        };
        frame.render_widget(Paragraph::new(app.status_line()).style(style), *area);
    }
}

const SHORTCUTS: &[(&str, &str)] = &[
    ("f", "Create project files"),
    ("r", "Run the demonstration"),
    ("c", "Clear terminal"),
    ("s", "Save all files to disk"),
    ("x", "Cancel playback"),
    ("↑/↓", "Select file / scroll preview"),
    ("Enter", "Preview selected file"),
    ("PgUp/PgDn", "Scroll terminal"),
    ("Home/End", "Oldest / latest line"),
    ("Esc", "Close overlay"),
    ("?", "Toggle this help"),
    ("q/Ctrl+C", "Quit"),
];

pub struct KeyBar;

impl KeyBar {
    pub fn render(frame: &mut Frame, area: &Rect) {
        let spans: Vec<Span> = SHORTCUTS
            .iter()
            .take(5)
            .chain(SHORTCUTS.iter().rev().take(2).rev())
            .flat_map(|(key, desc)| {
                [
                    Span::styled(format!(" {key} "), Styles::help_key()),
                    Span::styled(format!("{desc} "), Styles::help_desc()),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), *area);
    }
}

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame) {
        let area = LayoutManager::centered_rect_with_size(50, 60, frame.area());
        let lines: Vec<Line> = SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:<10}"), Styles::help_key()),
                    Span::styled(*desc, Styles::help_desc()),
                ])
            })
            .collect();

        let widget = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Shortcuts ")
                    .borders(Borders::ALL)
                    .style(Styles::help_title()),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, area);
        frame.render_widget(widget, area);
    }
}
