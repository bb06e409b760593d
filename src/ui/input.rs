use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Global keys, consulted only when the active view did not consume the key.
pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => Some(AppMessage::Quit),
            (KeyCode::Esc, _) => Some(AppMessage::CloseOverlay),
            (KeyCode::F(1), _) => Some(AppMessage::SetSidebarIndex(0)),
            (KeyCode::F(2), _) => Some(AppMessage::SetSidebarIndex(1)),
            (KeyCode::F(3), _) => Some(AppMessage::SetSidebarIndex(2)),
            _ => None,
        }
    }
}
