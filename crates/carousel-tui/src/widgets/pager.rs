use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Prev/next affordances and one dot per frame
pub struct PagerWidget;

impl PagerWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let affordances = app.carousel.affordances();
        let state = app.carousel.state();

        let control = |label: &'static str, disabled: bool| {
            if disabled {
                Span::styled(label, Style::default().fg(theme.disabled))
            } else {
                Span::styled(label, Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
            }
        };

        let mut spans = vec![control("< prev", affordances.prev_disabled), Span::raw("   ")];

        // Dots need two columns each; fall back to a label when they don't fit
        let dots_width = state.frame_count * 2;
        if dots_width + 20 <= area.width as usize {
            for n in 1..=state.frame_count {
                let (glyph, style) = if n == state.frame_number {
                    ("●", Style::default().fg(theme.focus))
                } else {
                    ("○", Style::default().fg(theme.grey1))
                };
                spans.push(Span::styled(glyph, style));
                spans.push(Span::raw(" "));
            }
        } else {
            spans.push(Span::styled(
                app.carousel.status().frame_label(),
                Style::default().fg(theme.fg0),
            ));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::raw("  "));
        spans.push(control("next >", affordances.next_disabled));

        let pager = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.bg0));
        frame.render_widget(pager, area);
    }
}
