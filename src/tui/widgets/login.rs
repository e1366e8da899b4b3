use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme;

/// Login card shown while the session is anonymous. Mirrors the web
/// app's Auth page: an OAuth redirect flow and the demo fallback.
pub fn render(frame: &mut Frame, area: Rect, signing_in: bool, oauth_url: Option<&str>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::emerald())
        .style(theme::surface());

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🕌  WaktuSholat",
            theme::emerald().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Selamat Datang", theme::bold())),
        Line::from(Span::styled(
            "Masuk untuk melihat jadwal sholat, arah kiblat, dan Al-Qur'an",
            theme::dim(),
        )),
        Line::from(""),
    ];

    if signing_in {
        lines.push(Line::from(Span::styled("Memproses...", theme::amber())));
    } else {
        lines.push(Line::from(vec![
            Span::styled("[g] ", theme::gold()),
            Span::styled("Masuk dengan Google", theme::dim()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("[Enter] ", theme::gold()),
            Span::styled("Lanjutkan sebagai Demo", theme::dim()),
        ]));
    }

    if let Some(url) = oauth_url {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Buka tautan ini di browser untuk menyelesaikan login:",
            theme::dim(),
        )));
        lines.push(Line::from(Span::styled(url.to_string(), theme::amber())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[Esc] keluar", theme::dim())));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
