use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(13, 18, 16);
pub const SURFACE: Color = Color::Rgb(19, 28, 24);
pub const BORDER: Color = Color::Rgb(38, 58, 48);
pub const BORDER_FOCUS: Color = Color::Rgb(64, 168, 120);
pub const TEXT: Color = Color::Rgb(210, 228, 218);
pub const TEXT_DIM: Color = Color::Rgb(110, 132, 120);
pub const EMERALD: Color = Color::Rgb(64, 168, 120);
pub const GOLD: Color = Color::Rgb(198, 166, 80);
pub const AMBER: Color = Color::Rgb(212, 140, 62);
pub const RED: Color = Color::Rgb(186, 84, 64);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn emerald() -> Style {
    Style::default().fg(EMERALD)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}
