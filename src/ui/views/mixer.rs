use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    config::{ClientConfig, Endpoint},
    event::events::Event,
    player::PlayerSurface,
    session::{DispatchState, DispatchStatus, InputField, SessionInput},
    ui::{
        components::{
            alert::Alert,
            lyrics::{LyricsPanel, LyricsWidget},
            spinner::Spinner,
            text_input::TextInput,
        },
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// "Create + Play": collects the base address and query, dispatches, and shows the result.
pub struct Mixer {
    input: SessionInput,
    focus: InputField,
    endpoint: Endpoint,
    example_base: String,
    dispatch: DispatchState,
    player: Option<PlayerSurface>,
    lyrics: LyricsPanel,
    alert: Option<Alert>,
}

impl Mixer {
    pub fn new(config: &ClientConfig, preferred_base: Option<&str>) -> Self {
        Self {
            input: SessionInput::new(preferred_base.unwrap_or(&config.local_base)),
            focus: InputField::default(),
            endpoint: config.endpoint,
            example_base: config.local_base.clone(),
            dispatch: DispatchState::default(),
            player: None,
            lyrics: LyricsPanel::default(),
            alert: None,
        }
    }

    fn submit(&mut self, ctx: &AppContext) {
        if self.dispatch.is_busy() {
            return;
        }

        match self.input.prepare(ctx.api.config()) {
            Ok(request) => {
                self.dispatch.begin();
                self.player = None;
                self.lyrics.clear();
                let _ = ctx.event_tx.send(Event::Dispatch(request));
            }
            Err(e) => self.alert = Some(Alert::from(&e)),
        }
    }

    fn render_button(&self, f: &mut Frame, area: Rect) {
        let (label, style) = if self.dispatch.is_busy() {
            ("Working…", Style::default().bg(colors::NEUTRAL).fg(colors::MUTED))
        } else {
            (
                "Create + Play  ⏎",
                Style::default()
                    .bg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::TOP | Borders::BOTTOM).style(style));
        f.render_widget(button, area);
    }

    fn render_result(&self, f: &mut Frame, area: Rect) {
        if self.dispatch.is_busy() {
            let spinner = Spinner::new()
                .with_style(Style::default().fg(colors::SECONDARY))
                .with_label("Processing…");
            f.render_widget(spinner, area);
            return;
        }

        let Some(player) = &self.player else {
            let hint = match self.dispatch.status() {
                DispatchStatus::Failed(message) => Line::from(Span::styled(
                    format!("Last attempt failed: {}", message),
                    Style::default().fg(colors::ERROR),
                )),
                _ => Line::from(Span::styled(
                    "Fill in both fields and press Enter. ↑/↓ switch fields.",
                    Style::default().fg(colors::MUTED),
                )),
            };
            f.render_widget(
                Paragraph::new(hint).wrap(Wrap { trim: true }),
                area,
            );
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(area);

        let title = self
            .dispatch
            .media()
            .map(|m| m.title.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled");

        let info = vec![
            Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                player.address(),
                Style::default().fg(colors::SECONDARY),
            )),
            Line::from(Span::styled(
                "Ctrl+O open player · Ctrl+B open in browser · Ctrl+L full-screen lyrics",
                Style::default().fg(colors::MUTED),
            )),
        ];
        f.render_widget(
            Paragraph::new(info).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Player")
                    .border_style(Style::default().fg(colors::NEUTRAL)),
            ),
            chunks[0],
        );

        let lyrics_block = Block::default()
            .borders(Borders::ALL)
            .title("Lyrics")
            .border_style(Style::default().fg(colors::NEUTRAL));
        let lyrics_inner = lyrics_block.inner(chunks[1]);
        f.render_widget(lyrics_block, chunks[1]);
        f.render_widget(LyricsWidget::new(self.lyrics.display_text()), lyrics_inner);
    }
}

#[async_trait]
impl View for Mixer {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(area);

        f.render_widget(
            TextInput::new(" API Base ", &self.input.api_base)
                .placeholder(&self.example_base)
                .focused(self.focus == InputField::ApiBase),
            chunks[0],
        );
        let query_title = format!(" {} ", self.endpoint.query_label());
        f.render_widget(
            TextInput::new(&query_title, &self.input.query)
                .placeholder("https://www.youtube.com/watch?v=...")
                .focused(self.focus == InputField::Query),
            chunks[1],
        );
        self.render_button(f, chunks[2]);
        self.render_result(f, chunks[3]);

        if let Some(alert) = &self.alert {
            f.render_widget(alert, area);
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.alert.take().is_some() {
            return Some(Action::None);
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('o'), KeyModifiers::CONTROL) => {
                Some(self.player.clone().map_or(Action::None, Action::OpenPlayer))
            }
            (KeyCode::Char('b'), KeyModifiers::CONTROL) => Some(
                self.player
                    .as_ref()
                    .map_or(Action::None, |p| Action::OpenExternal(p.address().to_string())),
            ),
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => Some(self.lyrics.expand()),
            (KeyCode::Enter, _) => {
                self.submit(ctx);
                Some(Action::None)
            }
            (KeyCode::Up | KeyCode::Down, _) => {
                self.focus = self.focus.toggle();
                Some(Action::None)
            }
            (KeyCode::Backspace, _) => {
                self.input.pop(self.focus);
                Some(Action::None)
            }
            (KeyCode::Char(c), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push_str(self.focus, c.encode_utf8(&mut [0; 4]));
                Some(Action::None)
            }
            _ => None,
        }
    }

    fn handle_paste(&mut self, text: &str) {
        let line = text.lines().next().unwrap_or_default();
        self.input.push_str(self.focus, line);
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::PreferredBaseResolved(base) => {
                self.input.adopt_preferred_base(base);
            }
            Event::DispatchCompleted(result) => {
                if !self.dispatch.is_busy() {
                    return;
                }
                if let Some(e) = self.dispatch.complete(result.clone()) {
                    self.alert = Some(Alert::from(&e));
                    return;
                }
                if let Some(media) = self.dispatch.media() {
                    match &mut self.player {
                        Some(player) => player.set_address(media.playback_address.as_str()),
                        None => self.player = Some(PlayerSurface::new(media.playback_address.as_str())),
                    }
                    self.lyrics.set_text(media.lyrics_text.as_str());
                }
            }
            Event::PlayerOpenFailed(message) => {
                self.alert = Some(Alert::new("Error", message.as_str()));
            }
            _ => {}
        }
    }
}
