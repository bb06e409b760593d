use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

use crate::{
    event::events::Event,
    player::launcher,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        traits::Action,
        tui::{TerminalEvent, Tui},
        views::LyricsModal,
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {
                let _ = app.ctx.event_tx.send(Event::Initialize);
            }
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Paste(text) => app.router.handle_paste(&text),
            TerminalEvent::Resize(_, _) => {}
            TerminalEvent::Tick => {
                return Ok(app.has_focus);
            }
        }

        Ok(true)
    }

    pub async fn handle_action(app: &mut App, evt: Event) {
        app.router.on_event(&evt, &app.ctx).await;

        match evt {
            Event::Initialize => {
                if !app.ctx.api.config().probe_health {
                    return;
                }
                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();
                app.task_manager.spawn(
                    "health_probe",
                    tokio::spawn(async move {
                        let base = api.resolve_preferred_base().await;
                        let _ = tx.send(Event::PreferredBaseResolved(base));
                    }),
                );
            }
            Event::PreferredBaseResolved(base) => {
                app.state.data.preferred_base = Some(base);
            }
            Event::Dispatch(request) => {
                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();
                app.task_manager.spawn(
                    "dispatch",
                    tokio::spawn(async move {
                        let result = api.dispatch(&request).await;
                        let _ = tx.send(Event::DispatchCompleted(result));
                    }),
                );
            }
            Event::DispatchCompleted(Ok(media)) => {
                info!("Dispatch succeeded: {}", media.playback_address);
            }
            Event::DispatchCompleted(Err(e)) => {
                info!("Dispatch failed: {}", e);
            }
            Event::PlayerOpenFailed(e) => {
                warn!("Failed to open player: {}", e);
            }
        }
    }

    async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        match evt.code {
            KeyCode::Char('c') if evt.modifiers == KeyModifiers::CONTROL => {
                app.update(AppMessage::Quit);
                return;
            }
            KeyCode::Tab => {
                app.update(AppMessage::NextSidebarItem);
                return;
            }
            KeyCode::BackTab => {
                app.update(AppMessage::PreviousSidebarItem);
                return;
            }
            _ => {}
        }

        let action = app.router.handle_input(evt, &app.state, &app.ctx).await;

        if let Some(action) = action {
            Self::dispatch_action(app, action).await;
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt) {
            app.update(msg);
        }
    }

    async fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::OpenLyrics(text) => {
                app.router.set_overlay(Box::new(LyricsModal::new(text)));
            }
            Action::CloseOverlay => app.router.clear_overlay(),
            Action::OpenPlayer(surface) => {
                let opened = surface
                    .write_to(&app.ctx.cache_dir)
                    .and_then(|path| launcher::open_target(path));
                if let Err(e) = opened {
                    let _ = app.ctx.event_tx.send(Event::PlayerOpenFailed(e.to_string()));
                }
            }
            Action::OpenExternal(target) => {
                if let Err(e) = launcher::open_target(&target) {
                    let _ = app.ctx.event_tx.send(Event::PlayerOpenFailed(e.to_string()));
                }
            }
            Action::None => {}
        }
    }
}
