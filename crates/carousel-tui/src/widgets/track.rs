use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use carousel_core::Card;

use super::truncate_to_width;
use crate::app::App;

/// The strip of cards, shifted left by the (animated) offset
pub struct TrackWidget;

impl TrackWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, offset: u16) {
        let theme = &app.theme;
        let block = Block::default()
            .title(format!(" {} ", app.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey0))
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if app.carousel.tiles().is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No cards",
                Style::default().fg(theme.grey1),
            )));
            frame.render_widget(empty, inner);
            return;
        }

        let card_height = app.config.ui.card_height.max(3).min(inner.height);
        let top = inner.y + (inner.height.saturating_sub(card_height)) / 2;
        let width = app.tile_columns() as i32;
        let cur_tile = app.carousel.state().cur_tile;

        for (i, card) in app.carousel.tiles().iter().enumerate() {
            let left = i as i32 * width - offset as i32;
            let right = left + width;
            if right <= 0 || left >= inner.width as i32 {
                continue;
            }
            let x0 = left.max(0) as u16;
            let x1 = right.min(inner.width as i32) as u16;
            let rect = Rect::new(inner.x + x0, top, x1 - x0, card_height);
            Self::render_card(frame, rect, app, card, i, cur_tile == Some(i));
        }
    }

    fn render_card(
        frame: &mut Frame,
        rect: Rect,
        app: &App,
        card: &Card,
        position: usize,
        current: bool,
    ) {
        let theme = &app.theme;

        if card.filler {
            frame.render_widget(Block::default().style(Style::default().bg(theme.filler)), rect);
            return;
        }

        let (border, text) = if current {
            (
                Style::default().fg(theme.focus).add_modifier(Modifier::BOLD),
                Style::default().fg(theme.fg1),
            )
        } else if card.visible {
            (Style::default().fg(theme.grey1), Style::default().fg(theme.fg0))
        } else {
            (Style::default().fg(theme.grey0), Style::default().fg(theme.grey0))
        };

        let label_width = rect.width.saturating_sub(4) as usize;
        let title = truncate_to_width(&format!("{} {}", position + 1, card.title), label_width);

        let block = Block::default()
            .title(Span::styled(format!(" {} ", title), border))
            .borders(Borders::ALL)
            .border_style(border)
            .style(Style::default().bg(if card.visible { theme.bg1 } else { theme.bg0 }));

        let body = Paragraph::new(card.body.as_str())
            .style(text)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, rect);
    }
}
