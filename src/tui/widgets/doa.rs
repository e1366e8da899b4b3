use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::data::doa::Doa;
use crate::tui::theme;

/// One supplication: title, Arabic text, latin transliteration and the
/// Indonesian translation.
pub fn render(frame: &mut Frame, area: Rect, doa: &Doa) {
    let block = Block::default()
        .title(Span::styled(" Doa Harian ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            doa.title,
            theme::emerald().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(doa.arabic, theme::gold())),
        Line::from(""),
        Line::from(Span::styled(
            doa.latin,
            theme::amber().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("\"{}\"", doa.translation), theme::dim())),
        Line::from(""),
        Line::from(Span::styled("[r] doa lain", theme::dim())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
