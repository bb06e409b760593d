use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    event::events::Event,
    player::PlayerSurface,
    ui::{context::AppContext, state::AppState},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    OpenLyrics(String),
    CloseOverlay,
    OpenPlayer(PlayerSurface),
    OpenExternal(String),
    None,
}

#[async_trait]
pub trait View: Send {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext);

    /// `Some` means the key was consumed, even if the action is `Action::None`.
    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action>;

    fn handle_paste(&mut self, _text: &str) {}

    async fn on_event(&mut self, _event: &Event, _ctx: &AppContext) {}
}
