use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ui::{app::App, components::sidebar::Sidebar, state::Route},
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        if self.app.router.has_overlay() {
            self.app
                .router
                .render_overlay(f, area, &self.app.state, &self.app.ctx);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let main_area = chunks[0];
        let footer_area = chunks[1];

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(1)])
            .split(main_area);

        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];
        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title("mixterious")
            .title_alignment(Alignment::Center);

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title(format!(" {} ", self.app.state.ui.current_route.title()));

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        let content_inner = content_block.inner(content_area);

        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);

        let sidebar_items = Route::ALL.iter().map(|r| r.title()).collect();
        f.render_widget(
            Sidebar::new(sidebar_items, self.app.state.ui.sidebar_index),
            sidebar_inner,
        );

        self.app
            .router
            .render(f, content_inner, &self.app.state, &self.app.ctx);

        let config = self.app.ctx.api.config();
        let base = match &self.app.state.data.preferred_base {
            Some(base) => base.as_str(),
            None if config.probe_health => "probing…",
            None => config.local_base.as_str(),
        };
        let footer = Line::from(vec![
            Span::styled(
                " Tab/F1-F3 switch view · Ctrl+C quit ",
                Style::default().fg(colors::NEUTRAL),
            ),
            Span::styled(
                format!("· preferred API: {}", base),
                Style::default().fg(colors::MUTED),
            ),
        ]);
        f.render_widget(Paragraph::new(footer), footer_area);
    }
}
