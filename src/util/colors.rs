use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x002f6dfc);
pub const SECONDARY: Color = Color::from_u32(0x007fb0ff);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const MUTED: Color = Color::from_u32(0x00bdbdbd);
pub const BACKGROUND: Color = Color::from_u32(0x000b0b0b);
pub const SURFACE: Color = Color::from_u32(0x001c1c1e);
pub const ERROR: Color = Color::from_u32(0x00ff6b6b);
