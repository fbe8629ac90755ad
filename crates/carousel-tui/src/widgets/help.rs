use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

/// Key binding overlay
pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let keys = &app.config.keymap;

        let rows: Vec<(String, &str)> = vec![
            (format!("{} / <Right>", keys.next), "next"),
            (format!("{} / <Left>", keys.prev), "previous"),
            ("1-9".to_string(), "jump to frame"),
            (format!("{} / <Home>", keys.reset), "first frame"),
            (format!("{} / <End>", keys.last_frame), "last frame"),
            (keys.toggle_mode.clone(), "frame/tile stepping"),
            (keys.quit.clone(), "quit"),
        ];

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>14}  ", key),
                        Style::default().fg(theme.focus).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(what, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();

        let area = frame.area();
        let height = (lines.len() as u16 + 2).min(area.height);
        let width = 44u16.min(area.width);
        let popup = centered_rect(width, height, area);

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
