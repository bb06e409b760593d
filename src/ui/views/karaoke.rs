use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::{
    karaoke::KaraokeSession,
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// Owns its karaoke session, so unmounting the view stops the ticker.
#[derive(Default)]
pub struct Karaoke {
    session: KaraokeSession,
}

impl Karaoke {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl View for Karaoke {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(area);

        let label_style = if self.session.is_running() {
            Style::default()
                .fg(colors::SECONDARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::MUTED)
        };

        f.render_widget(
            Paragraph::new(self.session.label())
                .alignment(Alignment::Center)
                .style(label_style),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new(format!("{}s", self.session.elapsed_count()))
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD)),
            chunks[3],
        );
        f.render_widget(
            Paragraph::new("Enter / Space: toggle")
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors::NEUTRAL)),
            chunks[4],
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.session.toggle();
                Some(Action::None)
            }
            _ => None,
        }
    }
}
