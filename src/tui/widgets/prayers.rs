use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::PrayerTimes;
use crate::prayer_times::NextPrayer;
use crate::tui::theme;
use crate::utils::format::format_time;

/// The five daily prayers with their times. Prayers already passed
/// today render dim, the upcoming one is highlighted. When the
/// resolver has wrapped to tomorrow's Fajr, the whole day is done and
/// every row dims.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    times: Option<&PrayerTimes>,
    next: Option<&NextPrayer>,
    today: NaiveDate,
) {
    let block = Block::default()
        .title(Span::styled(" Jadwal Sholat ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let Some(times) = times else {
        let placeholder = ListItem::new(Line::from(Span::styled("  --:--", theme::dim())));
        frame.render_widget(List::new(vec![placeholder]).block(block), area);
        return;
    };

    let next_today = next.filter(|n| n.at.date() == today);

    let mut upcoming = false;
    let items: Vec<ListItem> = times
        .entries()
        .into_iter()
        .map(|(name, time)| {
            let is_next = next_today.map(|n| n.name) == Some(name);
            if is_next {
                upcoming = true;
            }

            let (icon, name_style) = if is_next {
                ("●", theme::emerald().add_modifier(Modifier::BOLD))
            } else if upcoming {
                ("○", theme::bold())
            } else {
                ("○", theme::dim())
            };

            let time_style = if is_next { theme::emerald() } else { theme::dim() };

            ListItem::new(Line::from(vec![
                Span::styled(format!("  {} ", icon), time_style),
                Span::styled(format!("{:<9}", name.display_name()), name_style),
                Span::styled(format_time(time), time_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
