use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::DateInfo;
use crate::tui::theme;
use crate::tui::Fetch;

/// Gregorian + Hijri date strings, exactly as the schedule API
/// formatted them.
pub fn render<T>(frame: &mut Frame, area: Rect, date: Option<&DateInfo>, fetch: &Fetch<T>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let line = match date {
        Some(date) => Line::from(vec![
            Span::styled(date.gregorian.clone(), theme::bold()),
            Span::styled("  ·  ", theme::dim()),
            Span::styled(format!("{} H", date.hijri), theme::amber()),
        ]),
        None if fetch.is_loading() => Line::from(Span::styled("Memuat...", theme::dim())),
        None => Line::from(Span::styled("—", theme::dim())),
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
