use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::LayoutManager;
use super::styles::Styles;
use crate::app::{App, Preview};

pub struct PreviewOverlay;

impl PreviewOverlay {
    pub fn render(frame: &mut Frame, app: &App) {
        let Some(preview) = app.preview.as_ref() else {
            return;
        };
        let area = LayoutManager::centered_rect(frame.area());
        frame.render_widget(Clear, area);
        frame.render_widget(Self::create_paragraph(preview, area), area);
    }

    fn create_paragraph(preview: &Preview, area: Rect) -> Paragraph<'static> {
        let height = area.height.saturating_sub(2) as usize;
        let number_width = preview.lines.len().to_string().len();

        let lines: Vec<Line<'static>> = preview
            .lines
            .iter()
            .enumerate()
            .skip(preview.scroll)
            .take(height)
            .map(|(idx, tokens)| {
                let mut spans = vec![Span::styled(
                    format!("{:>width$} ", idx + 1, width = number_width),
                    Styles::dimmed(),
                )];
                spans.extend(
                    tokens
                        .iter()
                        .map(|t| Span::styled(t.text.clone(), Styles::for_token(t.kind))),
                );
                Line::from(spans)
            })
            .collect();

        let title = format!(
            " {} [{}/{}] (Esc to close) ",
            preview.name,
            (preview.scroll + 1).min(preview.lines.len()),
            preview.lines.len()
        );

        Paragraph::new(lines).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Styles::overlay_border()),
        )
    }
}
