use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::models::{Surah, SurahDetail};
use crate::tui::theme;
use crate::tui::Fetch;
use crate::utils::format::pad_to_width;

pub fn render_list(
    frame: &mut Frame,
    area: Rect,
    surahs: &Fetch<Vec<Surah>>,
    state: &mut ListState,
) {
    let block = Block::default()
        .title(Span::styled(" Al-Qur'an ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let surahs = match surahs {
        Fetch::Ready(surahs) => surahs,
        Fetch::Loading => {
            let lines = vec![Line::from(""), Line::from(Span::styled("  Memuat daftar surah...", theme::dim()))];
            frame.render_widget(Paragraph::new(lines).block(block), area);
            return;
        }
        Fetch::Failed(msg) => {
            let lines = vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("  ✗ ", theme::red()),
                    Span::styled(msg.clone(), theme::red()),
                ]),
                Line::from(Span::styled("  [r] muat ulang", theme::dim())),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), area);
            return;
        }
        Fetch::Idle => {
            frame.render_widget(Paragraph::new("").block(block), area);
            return;
        }
    };

    // Arabic names are right-aligned by display width, not byte length.
    let arabic_width = surahs
        .iter()
        .map(|s| unicode_width::UnicodeWidthStr::width(s.name.as_str()))
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = surahs
        .iter()
        .map(|surah| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:>3}  ", surah.number), theme::dim()),
                Span::styled(format!("{:<22}", surah.english_name), theme::bold()),
                Span::styled(
                    format!("{:<12}", format!("{} ayat", surah.number_of_ayahs)),
                    theme::dim(),
                ),
                Span::styled(format!("{:<10}", surah.revelation_label()), theme::dim()),
                Span::styled(pad_to_width(&surah.name, arabic_width), theme::gold()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::emerald().add_modifier(Modifier::BOLD))
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, area, state);
}

pub fn render_detail(frame: &mut Frame, area: Rect, detail: &Fetch<SurahDetail>, scroll: u16) {
    let (title, lines) = match detail {
        Fetch::Ready(surah) => {
            let mut lines = vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("  {} ", surah.name), theme::gold().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("— {}", surah.english_name_translation),
                        theme::dim(),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} ayat · {}",
                        surah.number_of_ayahs,
                        surah.revelation_label()
                    ),
                    theme::dim(),
                )),
                Line::from(""),
            ];
            for ayah in &surah.ayahs {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:>3}. ", ayah.number_in_surah), theme::emerald()),
                    Span::styled(ayah.text.clone(), theme::base()),
                ]));
                lines.push(Line::from(""));
            }
            (format!(" {}. {} ", surah.number, surah.english_name), lines)
        }
        Fetch::Loading => (
            " Surah ".to_string(),
            vec![Line::from(""), Line::from(Span::styled("  Memuat surah...", theme::dim()))],
        ),
        Fetch::Failed(msg) => (
            " Surah ".to_string(),
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("  ✗ ", theme::red()),
                    Span::styled(msg.clone(), theme::red()),
                ]),
                Line::from(Span::styled("  [r] muat ulang  ·  [Esc] kembali", theme::dim())),
            ],
        ),
        Fetch::Idle => (" Surah ".to_string(), Vec::new()),
    };

    let block = Block::default()
        .title(Span::styled(title, theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
