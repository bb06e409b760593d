use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

/// Single-line bordered input; long values keep their tail visible.
pub struct TextInput<'a> {
    title: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            placeholder: "",
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> Widget for TextInput<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title)
            .border_style(border_style)
            .style(Style::default().bg(colors::SURFACE));
        let inner_w = block.inner(area).width as usize;

        let line = if self.value.is_empty() {
            Line::from(Span::styled(
                self.placeholder,
                Style::default().fg(colors::NEUTRAL),
            ))
        } else {
            let cursor = if self.focused { "▏" } else { "" };
            let mut shown = format!("{}{}", self.value, cursor);
            while UnicodeWidthStr::width(shown.as_str()) > inner_w && !shown.is_empty() {
                shown.remove(0);
            }
            Line::from(shown)
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
