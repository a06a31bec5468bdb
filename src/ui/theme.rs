use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const WORK_ACCENT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const REST_ACCENT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const PAUSE_ACCENT: Color = Color::Rgb(0xea, 0xb3, 0x08);
