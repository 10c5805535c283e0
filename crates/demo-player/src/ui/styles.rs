use demo_content::TokenKind;
use ratatui::style::{Color, Modifier, Style};
use replay_core::Category;

pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn overlay_border() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn playing() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_key() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_desc() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn help_title() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn for_category(category: Category) -> Style {
        match category {
            Category::Success => Style::default().fg(Color::Green),
            Category::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Category::Warning => Style::default().fg(Color::Yellow),
            Category::Server => Style::default().fg(Color::Blue),
            Category::Client => Style::default().fg(Color::LightGreen),
            Category::System => Style::default().fg(Color::Magenta),
            Category::Input => Style::default().fg(Color::Cyan),
            Category::Output => Style::default().fg(Color::LightCyan),
            Category::Code => Style::default().fg(Color::Gray),
            Category::Info => Self::default(),
        }
    }

    pub fn for_token(kind: TokenKind) -> Style {
        match kind {
            TokenKind::Comment => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            TokenKind::Keyword => Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            TokenKind::Builtin => Style::default().fg(Color::LightBlue),
            TokenKind::String => Style::default().fg(Color::Green),
            TokenKind::Plain => Self::default(),
        }
    }
}
