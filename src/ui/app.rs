use std::sync::Arc;

use flume::Receiver;
use ratatui::Frame;
use tracing::info;

use crate::{
    config::ClientConfig,
    event::events::Event,
    http::ApiService,
    util::{log::get_cache_dir, task::TaskManager},
};

use super::{
    context::AppContext,
    layout::AppLayout,
    message::AppMessage,
    router::Router,
    state::{AppState, Route},
    traits::View,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
    views::{About, Karaoke, Mixer},
};

pub struct App {
    pub router: Router,
    pub state: AppState,
    pub ctx: AppContext,
    pub event_rx: Receiver<Event>,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: ClientConfig) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new(config)?);
        let ctx = AppContext {
            api,
            event_tx,
            cache_dir: get_cache_dir(),
        };
        let state = AppState::default();
        let router = Router::new(Self::view_for(state.ui.current_route, &state, &ctx));

        Ok(Self {
            router,
            state,
            ctx,
            event_rx,
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.paste(true);
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        let mut should_render = true;
        while !self.should_quit {
            if should_render {
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }

            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::NavigateTo(route) => {
                if route == self.state.ui.current_route {
                    return;
                }
                info!("Navigating to {:?}", route);
                self.state.ui.current_route = route;
                self.state.ui.sidebar_index = route.index();
                let view = Self::view_for(route, &self.state, &self.ctx);
                self.router.replace(view);
            }
            AppMessage::NextSidebarItem => {
                let next = Route::from_index(self.state.ui.sidebar_index + 1);
                self.update(AppMessage::NavigateTo(next));
            }
            AppMessage::PreviousSidebarItem => {
                let prev =
                    Route::from_index(self.state.ui.sidebar_index + Route::ALL.len() - 1);
                self.update(AppMessage::NavigateTo(prev));
            }
            AppMessage::SetSidebarIndex(index) => {
                self.update(AppMessage::NavigateTo(Route::from_index(index)));
            }
            AppMessage::CloseOverlay => self.router.clear_overlay(),
        }
    }

    fn view_for(route: Route, state: &AppState, ctx: &AppContext) -> Box<dyn View> {
        match route {
            Route::Mixer => Box::new(Mixer::new(
                ctx.api.config(),
                state.data.preferred_base.as_deref(),
            )),
            Route::Karaoke => Box::new(Karaoke::new()),
            Route::About => Box::new(About),
        }
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}
