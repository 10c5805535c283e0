use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::types::{Mode, ScrollDirection};

pub struct InputHandler;

impl InputHandler {
    /// Returns `true` when the application should quit.
    pub async fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
        if !Self::is_valid_event(key) {
            return Ok(false);
        }

        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            return Ok(true);
        }

        Self::handle_key_press(app, key).await
    }

    fn is_valid_event(key: KeyEvent) -> bool {
        matches!(key.kind, KeyEventKind::Press)
    }

    async fn handle_key_press(app: &mut App, key: KeyEvent) -> Result<bool> {
        if let Some(direction) = Self::scroll_direction(key.code) {
            app.handle_scroll(direction);
            return Ok(false);
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => return Ok(true),
            (KeyCode::Esc, _) => app.close_overlay(),
            (KeyCode::Char('?'), _) => app.toggle_help(),
            (KeyCode::Up, _) if app.mode == Mode::Previewing => app.handle_scroll(ScrollDirection::Up),
            (KeyCode::Down, _) if app.mode == Mode::Previewing => {
                app.handle_scroll(ScrollDirection::Down)
            }
            _ if app.mode != Mode::Browsing => {}
            (KeyCode::Up, _) => app.select_previous(),
            (KeyCode::Down, _) => app.select_next(),
            (KeyCode::Enter, _) => app.open_preview(),
            (KeyCode::Char('f'), KeyModifiers::NONE) => {
                app.create_files();
            }
            (KeyCode::Char('r'), KeyModifiers::NONE) => {
                app.run_demo();
            }
            (KeyCode::Char('c'), KeyModifiers::NONE) => app.clear_log(),
            (KeyCode::Char('s'), KeyModifiers::NONE) => {
                app.save_all_files().await;
            }
            (KeyCode::Char('x'), KeyModifiers::NONE) => {
                app.cancel_playback();
            }
            _ => {}
        }
        Ok(false)
    }

    /// Paging keys scroll the preview when it is open, the log pane otherwise.
    fn scroll_direction(code: KeyCode) -> Option<ScrollDirection> {
        match code {
            KeyCode::PageUp => Some(ScrollDirection::PageUp),
            KeyCode::PageDown => Some(ScrollDirection::PageDown),
            KeyCode::Home => Some(ScrollDirection::Home),
            KeyCode::End => Some(ScrollDirection::End),
            _ => None,
        }
    }
}
