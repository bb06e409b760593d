use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::traits::Action;
use crate::util::colors;

pub const PLACEHOLDER: &str = "No lyrics available";

/// Compact lyrics panel fed by the last successful dispatch.
///
/// An empty text shows [`PLACEHOLDER`] whether or not anything was fetched yet.
#[derive(Debug, Clone, Default)]
pub struct LyricsPanel {
    text: String,
}

impl LyricsPanel {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_placeholder(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn display_text(&self) -> &str {
        if self.is_placeholder() {
            PLACEHOLDER
        } else {
            &self.text
        }
    }

    /// Opens the full-screen view with the same text; the panel itself is left untouched.
    pub fn expand(&self) -> Action {
        Action::OpenLyrics(self.display_text().to_string())
    }
}

/// Renders text centered line by line, starting `scroll` lines down.
pub struct LyricsWidget<'a> {
    text: &'a str,
    scroll: usize,
    dimmed: bool,
}

impl<'a> LyricsWidget<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            scroll: 0,
            dimmed: text == PLACEHOLDER,
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl<'a> Widget for LyricsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let style = if self.dimmed {
            Style::default()
                .fg(colors::MUTED)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default()
        };

        let lines: Vec<&str> = self.text.lines().skip(self.scroll).collect();
        let block_h = lines.len().min(area.height as usize) as u16;
        let start_row = area.y + area.height.saturating_sub(block_h) / 2;

        for (i, line) in lines.iter().take(area.height as usize).enumerate() {
            let line_w = UnicodeWidthStr::width(*line) as u16;
            let x = area.x + area.width.saturating_sub(line_w) / 2;
            let y = start_row + i as u16;
            buf.set_stringn(x, y, line, area.width as usize, style);
        }
    }
}
