use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::User;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, city: &str, user: Option<&User>) {
    let title_line = Line::from(vec![
        Span::styled("  🕌  ", theme::emerald()),
        Span::styled("WaktuSholat", theme::emerald().add_modifier(Modifier::BOLD)),
    ]);

    let greeting = match user {
        Some(user) => format!("Assalamu'alaikum, {}", user.display_name()),
        None => "Assalamu'alaikum".to_string(),
    };
    let info_line = Line::from(vec![
        Span::styled(greeting, theme::gold()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(city.to_string(), theme::dim()),
    ]);

    let text = vec![title_line, Line::from(""), info_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::emerald().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
