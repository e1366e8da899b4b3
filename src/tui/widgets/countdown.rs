use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigTextBuilder, PixelSize};

use crate::models::PrayerData;
use crate::prayer_times::NextPrayer;
use crate::tui::theme;
use crate::tui::Fetch;
use crate::utils::format::format_time;

/// Countdown card: the next prayer's name and a large ticking
/// `H:MM:SS`. Mirrors the layout of the web app's CountdownCard.
pub fn render(frame: &mut Frame, area: Rect, next: Option<&NextPrayer>, fetch: &Fetch<PrayerData>) {
    let block = Block::default()
        .title(Span::styled(" Sholat Berikutnya ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::emerald())
        .style(theme::surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(next) = next else {
        let text = match fetch {
            Fetch::Loading => Line::from(Span::styled("  Memuat jadwal...", theme::dim())),
            Fetch::Failed(msg) => Line::from(vec![
                Span::styled("  ✗ ", theme::red()),
                Span::styled(msg.clone(), theme::red()),
                Span::styled("  ·  [r] muat ulang", theme::dim()),
            ]),
            _ => Line::from(Span::styled("  Belum ada jadwal", theme::dim())),
        };
        frame.render_widget(Paragraph::new(vec![Line::from(""), text]), inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // prayer name
            Constraint::Min(4),    // big digits
            Constraint::Length(1), // "menuju HH:MM"
        ])
        .split(inner);

    let name = Paragraph::new(Line::from(Span::styled(
        format!("  {}", next.name.display_name().to_uppercase()),
        theme::gold().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(name, chunks[0]);

    let digits = BigTextBuilder::default()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(theme::EMERALD))
        .lines(vec![next.time_remaining.clone().into()])
        .build();
    match digits {
        Ok(big) => frame.render_widget(big, chunks[1]),
        // Degraded fallback keeps the countdown readable on tiny panes.
        Err(_) => frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  {}", next.time_remaining),
                theme::emerald().add_modifier(Modifier::BOLD),
            ))),
            chunks[1],
        ),
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("  menuju ", theme::dim()),
        Span::styled(format_time(next.time), theme::amber()),
    ]));
    frame.render_widget(footer, chunks[2]);
}
