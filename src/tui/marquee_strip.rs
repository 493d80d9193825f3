//! Autoscrolling category strip widget.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Category strip widget
pub struct MarqueeStrip;

impl MarqueeStrip {
    fn block(paused: bool, theme: &Theme) -> Block<'static> {
        let title = if paused {
            " Categories (paused) "
        } else {
            " Categories "
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background))
    }

    /// Area the strip cells are drawn into, inside the border.
    pub fn viewport(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Render the strip at the controller's current offset.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = Self::block(state.marquee.is_paused(), theme);
        let viewport = block.inner(area);
        f.render_widget(block, area);

        let active = state.active_category_index();
        let cells = state
            .strip
            .visible_cells(state.marquee.offset(), viewport.width as usize);

        let spans: Vec<Span> = cells
            .into_iter()
            .map(|cell| {
                let style = match cell.slot {
                    Some(slot) if Some(slot) == active => Style::default()
                        .fg(theme.active)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                    Some(_) => Style::default().fg(theme.inactive),
                    None => Style::default().fg(theme.text_muted),
                };
                Span::styled(cell.ch.to_string(), style)
            })
            .collect();

        f.render_widget(Paragraph::new(Line::from(spans)), viewport);
    }
}
