use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear},
};

use crate::{
    ui::{
        components::lyrics::LyricsWidget,
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// Full-screen lyrics, shown as a router overlay above the mixer.
pub struct LyricsModal {
    text: String,
    scroll: usize,
}

impl LyricsModal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scroll: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn close(&mut self) -> Action {
        Action::CloseOverlay
    }

    fn max_scroll(&self) -> usize {
        self.text.lines().count().saturating_sub(1)
    }
}

#[async_trait]
impl View for LyricsModal {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Lyrics ")
            .title_bottom(" Esc close · ↑/↓ scroll ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(colors::PRIMARY))
            .style(Style::default().bg(colors::BACKGROUND));
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(LyricsWidget::new(&self.text).scroll(self.scroll), inner);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc | KeyCode::Enter, _) => Some(self.close()),
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => Some(self.close()),
            (KeyCode::Up | KeyCode::Char('k'), _) => {
                self.scroll = self.scroll.saturating_sub(1);
                Some(Action::None)
            }
            (KeyCode::Down | KeyCode::Char('j'), _) => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
                Some(Action::None)
            }
            _ => Some(Action::None),
        }
    }
}
