use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::{
    player::DOCUMENT_FILE,
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

#[derive(Default)]
pub struct About;

#[async_trait]
impl View for About {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let config = ctx.api.config();
        let lines = vec![
            Line::from("Mixterious — YouTube → MP3"),
            Line::from(""),
            Line::styled(
                format!("Endpoint: /{}  ·  Bitrate: {} kbps", config.endpoint, config.bitrate_kbps),
                Style::default().fg(colors::MUTED),
            ),
            Line::styled(
                format!(
                    "Player document: {}",
                    ctx.cache_dir.join(DOCUMENT_FILE).display()
                ),
                Style::default().fg(colors::MUTED),
            ),
        ];

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    async fn handle_input(
        &mut self,
        _key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        None
    }
}
