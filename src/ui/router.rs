use crate::event::events::Event;
use crate::ui::context::AppContext;
use crate::ui::state::AppState;
use crate::ui::traits::{Action, View};
use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

/// Holds the mounted view and an optional full-screen overlay drawn on top of it.
pub struct Router {
    pub view: Box<dyn View>,
    pub overlay: Option<Box<dyn View>>,
}

impl Router {
    pub fn new(initial_view: Box<dyn View>) -> Self {
        Self {
            view: initial_view,
            overlay: None,
        }
    }

    /// Unmounts the current view; anything it owns (timers, tasks) is dropped with it.
    pub fn replace(&mut self, view: Box<dyn View>) {
        self.overlay = None;
        self.view = view;
    }

    pub fn set_overlay(&mut self, view: Box<dyn View>) {
        self.overlay = Some(view);
    }

    pub fn clear_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        self.view.render(f, area, state, ctx);
    }

    pub fn render_overlay(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        if let Some(overlay) = &mut self.overlay {
            overlay.render(f, area, state, ctx);
        }
    }

    pub async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if let Some(overlay) = &mut self.overlay {
            overlay.handle_input(key, state, ctx).await
        } else {
            self.view.handle_input(key, state, ctx).await
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if let Some(overlay) = &mut self.overlay {
            overlay.handle_paste(text);
        } else {
            self.view.handle_paste(text);
        }
    }

    pub async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        self.view.on_event(event, ctx).await;

        if let Some(overlay) = &mut self.overlay {
            overlay.on_event(event, ctx).await;
        }
    }
}
