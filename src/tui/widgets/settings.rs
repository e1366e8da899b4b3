use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::User;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, notifications_enabled: bool, user: Option<&User>) {
    let block = Block::default()
        .title(Span::styled(" Pengaturan ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let (toggle_icon, toggle_style, toggle_label) = if notifications_enabled {
        ("●", theme::emerald(), "aktif")
    } else {
        ("○", theme::dim(), "nonaktif")
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Notifikasi", theme::bold())),
        Line::from(vec![
            Span::styled(format!("  {} ", toggle_icon), toggle_style),
            Span::styled(
                format!("Pengingat 5 menit sebelum waktu sholat — {}", toggle_label),
                theme::dim(),
            ),
            Span::styled("   [n] ubah", theme::gold()),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Akun", theme::bold())),
    ];

    match user {
        Some(user) => {
            lines.push(Line::from(vec![
                Span::styled("  ", theme::dim()),
                Span::styled(user.display_name().to_string(), theme::emerald()),
                Span::styled(format!("  <{}>", user.email), theme::dim()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("  [o] ", theme::gold()),
                Span::styled("keluar dari akun", theme::dim()),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled("  Belum masuk", theme::dim())));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
