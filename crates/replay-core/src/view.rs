use crate::entry::Category;

/// Two-character marker scripts use for an embedded line break.
pub const NEWLINE_MARKER: &str = "\\n";

/// A log line ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub category: Category,
    pub icon: &'static str,
    pub text: String,
}

impl RenderedLine {
    /// Expands [`NEWLINE_MARKER`], except in `Code` lines which carry file
    /// contents verbatim.
    pub fn new(message: &str, category: Category) -> Self {
        let text = match category {
            Category::Code => message.to_string(),
            _ => message.replace(NEWLINE_MARKER, "\n"),
        };
        Self {
            category,
            icon: category.icon(),
            text,
        }
    }

    pub fn display(&self) -> String {
        format!("{} {}", self.icon, self.text)
    }

    /// Display text split at embedded line breaks.
    pub fn rows(&self) -> Vec<String> {
        self.display().split('\n').map(str::to_string).collect()
    }
}

/// Append-only sink the engine emits into.
pub trait LogView {
    /// Appends a line and moves the view to it.
    fn append(&mut self, line: RenderedLine);
    fn clear(&mut self);
    fn is_scrolled_to_latest(&self) -> bool;
}

/// Unbounded in-memory view.
#[derive(Debug, Default)]
pub struct MemoryLogView {
    lines: Vec<RenderedLine>,
    scroll: usize,
}

impl MemoryLogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    /// Rendered texts, without icons.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn scroll_position(&self) -> usize {
        self.scroll
    }

    pub fn scroll_to(&mut self, position: usize) {
        self.scroll = position.min(self.lines.len().saturating_sub(1));
    }
}

impl LogView for MemoryLogView {
    fn append(&mut self, line: RenderedLine) {
        self.lines.push(line);
        self.scroll = self.lines.len() - 1;
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.scroll = 0;
    }

    fn is_scrolled_to_latest(&self) -> bool {
        self.lines.is_empty() || self.scroll + 1 == self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_newline_markers() {
        let line = RenderedLine::new("\\n--- Teste 1/5 ---", Category::Info);
        assert_eq!(line.text, "\n--- Teste 1/5 ---");
        assert_eq!(line.rows(), vec!["💡 ".to_string(), "--- Teste 1/5 ---".to_string()]);
    }

    #[test]
    fn append_scrolls_to_latest() {
        let mut view = MemoryLogView::new();
        view.append(RenderedLine::new("a", Category::Info));
        view.append(RenderedLine::new("b", Category::Info));
        view.scroll_to(0);
        assert!(!view.is_scrolled_to_latest());
        view.append(RenderedLine::new("c", Category::Info));
        assert!(view.is_scrolled_to_latest());
        assert_eq!(view.scroll_position(), 2);
    }

    #[test]
    fn code_lines_keep_backslash_n() {
        let source = "print(\"a\\nb\")";
        let line = RenderedLine::new(source, Category::Code);
        assert_eq!(line.text, source);
        assert_eq!(line.rows().len(), 1);
    }
}
