use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::data::qibla;
use crate::tui::theme;

const GRID_W: usize = 25;
const GRID_H: usize = 11;

/// ASCII compass: a dotted ring with the cardinal points (U/T/S/B) and
/// a marker on the rim at the qibla bearing for the selected city.
pub fn render(frame: &mut Frame, area: Rect, city: &str) {
    let bearing = qibla::bearing_for(city);

    let block = Block::default()
        .title(Span::styled(" Arah Kiblat ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let mut lines = vec![Line::from("")];
    lines.extend(compass_lines(bearing));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{}°", bearing), theme::emerald().add_modifier(Modifier::BOLD)),
        Span::styled(" dari Utara", theme::dim()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Hadap Utara, lalu putar searah jarum jam {}°", bearing),
        theme::dim(),
    )));
    lines.push(Line::from(Span::styled(format!("Kota: {}", city), theme::dim())));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Rasterize the ring onto a small character grid. Terminal cells are
/// roughly twice as tall as wide, hence the 2:1 radii.
fn compass_lines(bearing: u16) -> Vec<Line<'static>> {
    let cx = (GRID_W / 2) as f64;
    let cy = (GRID_H / 2) as f64;
    let rx = cx - 1.0;
    let ry = cy - 0.5;

    let mut grid = vec![vec![' '; GRID_W]; GRID_H];
    let plot = |grid: &mut Vec<Vec<char>>, angle_deg: f64, c: char| {
        let rad = angle_deg.to_radians();
        let x = (cx + rx * rad.sin()).round() as usize;
        let y = (cy - ry * rad.cos()).round() as usize;
        if y < GRID_H && x < GRID_W {
            grid[y][x] = c;
        }
    };

    for step in 0..24 {
        plot(&mut grid, f64::from(step) * 15.0, '·');
    }
    plot(&mut grid, 0.0, 'U');
    plot(&mut grid, 90.0, 'T');
    plot(&mut grid, 180.0, 'S');
    plot(&mut grid, 270.0, 'B');
    grid[GRID_H / 2][GRID_W / 2] = '+';
    plot(&mut grid, f64::from(bearing), '◆');

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|c| match c {
                    '◆' => Span::styled("◆", theme::emerald().add_modifier(Modifier::BOLD)),
                    'U' => Span::styled("U", theme::gold().add_modifier(Modifier::BOLD)),
                    'T' | 'S' | 'B' => Span::styled(c.to_string(), theme::gold()),
                    '+' => Span::styled("+", theme::dim()),
                    _ => Span::styled(c.to_string(), theme::dim()),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
