#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Previewing,
    ShowingHelp,
}

#[derive(Debug, Clone)]
pub struct ScrollState {
    pub offset: usize,
    pub auto_scroll: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
        self.auto_scroll = false;
    }

    pub fn scroll_down(&mut self, amount: usize, max: usize) {
        self.offset = std::cmp::min(self.offset + amount, max);
        // Back at the bottom: follow new lines again
        if self.offset >= max {
            self.auto_scroll = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_scroll = false;
    }

    pub fn scroll_to_bottom(&mut self, max: usize) {
        self.offset = max;
        self.auto_scroll = true;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.auto_scroll = true;
    }

    pub fn apply(&mut self, direction: ScrollDirection, amount: usize, max: usize) {
        match direction {
            ScrollDirection::Up | ScrollDirection::PageUp => self.scroll_up(amount),
            ScrollDirection::Down | ScrollDirection::PageDown => self.scroll_down(amount, max),
            ScrollDirection::Home => self.scroll_to_top(),
            ScrollDirection::End => self.scroll_to_bottom(max),
        }
    }
}

/// One row of the file list panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListing {
    pub name: String,
    pub size: usize,
    pub lines: usize,
}
