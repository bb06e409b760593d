use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::{http::error::DispatchError, ui::util::centered_rect, util::colors};

/// Blocking message box; the owning view swallows the next key to dismiss it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&DispatchError> for Alert {
    fn from(e: &DispatchError) -> Self {
        Self::new(e.alert_title(), e.to_string())
    }
}

impl Widget for &Alert {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(area, 60, 40);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(colors::ERROR)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(colors::SURFACE));

        let text = vec![
            Line::from(self.message.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to dismiss",
                Style::default().fg(colors::MUTED),
            )),
        ];

        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(popup, buf);
    }
}
