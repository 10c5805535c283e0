use replay_core::{LogView, RenderedLine};

use crate::constants::MAX_LOG_LINES;
use crate::types::{ScrollDirection, ScrollState};

/// Log pane contents. Bounded; follows the newest line unless the user has
/// scrolled away.
#[derive(Debug, Default)]
pub struct PaneLogView {
    lines: Vec<RenderedLine>,
    pub scroll: ScrollState,
}

impl PaneLogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    pub fn scroll(&mut self, direction: ScrollDirection, amount: usize) {
        let max = self.max_offset();
        self.scroll.apply(direction, amount, max);
    }
}

impl LogView for PaneLogView {
    fn append(&mut self, line: RenderedLine) {
        if self.lines.len() >= MAX_LOG_LINES {
            self.lines.remove(0);
            self.scroll.offset = self.scroll.offset.saturating_sub(1);
        }
        self.lines.push(line);
        let max = self.max_offset();
        self.scroll.scroll_to_bottom(max);
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.scroll.reset();
    }

    fn is_scrolled_to_latest(&self) -> bool {
        self.scroll.auto_scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replay_core::Category;

    #[test]
    fn append_jumps_back_to_latest() {
        let mut view = PaneLogView::new();
        for text in ["a", "b", "c"] {
            view.append(RenderedLine::new(text, Category::Info));
        }
        view.scroll(ScrollDirection::Up, 2);
        assert!(!view.is_scrolled_to_latest());

        view.append(RenderedLine::new("d", Category::Info));
        assert!(view.is_scrolled_to_latest());
        assert_eq!(view.scroll.offset, 3);
    }

    #[test]
    fn stays_bounded() {
        let mut view = PaneLogView::new();
        for i in 0..MAX_LOG_LINES + 5 {
            view.append(RenderedLine::new(&i.to_string(), Category::Info));
        }
        assert_eq!(view.len(), MAX_LOG_LINES);
        assert_eq!(view.texts()[0], "5");
    }
}
