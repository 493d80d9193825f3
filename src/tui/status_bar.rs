//! Status bar widget for displaying status messages, filters, and hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::marquee::MarqueePhase;

use super::{AppState, PopupType, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            ))
        };

        let status = Paragraph::new(vec![
            message_line,
            Self::filters_line(state, theme),
            Self::hints_line(state, theme),
        ])
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(status, area);
    }

    /// Active filters and the strip state.
    fn filters_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let selection = &state.selection;
        let label = Style::default().fg(theme.primary);
        let value = Style::default().fg(theme.text);

        let rating = selection
            .min_rating
            .map_or_else(|| "any".to_string(), |r| format!("≥ {r:.1}"));
        let prep = selection
            .max_prep_minutes
            .map_or_else(|| "any".to_string(), |m| format!("≤ {m} min"));
        let strip = match state.marquee.phase() {
            MarqueePhase::Starting => "starting",
            MarqueePhase::Running => "scrolling",
            MarqueePhase::Paused => "paused",
            MarqueePhase::Unmounted => "stopped",
        };

        Line::from(vec![
            Span::styled("Service: ", label),
            Span::styled(selection.service_type.to_string(), value),
            Span::raw("  "),
            Span::styled("Sort: ", label),
            Span::styled(selection.sort_key.to_string(), value),
            Span::raw("  "),
            Span::styled("Rating: ", label),
            Span::styled(rating, value),
            Span::raw("  "),
            Span::styled("Time: ", label),
            Span::styled(prep, value),
            Span::raw("  "),
            Span::styled("Strip: ", label),
            Span::styled(strip, Style::default().fg(theme.text_muted)),
        ])
    }

    /// Key hints for the context in focus.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match state.active_popup {
            Some(PopupType::ItemDetail) => &[
                ("+/-", "Quantity"),
                ("Tab", "Instructions"),
                ("Enter", "Add"),
                ("Esc", "Cancel"),
            ],
            Some(PopupType::CartPanel) => &[
                ("↑↓", "Select"),
                ("+/-", "Quantity"),
                ("Enter", "Checkout"),
                ("Esc", "Close"),
            ],
            Some(PopupType::HelpOverlay) => &[("↑↓", "Scroll"), ("?/Esc", "Close")],
            None => &[
                ("Tab", "Category"),
                ("↑↓", "Dish"),
                ("Enter", "Details"),
                ("a", "Add"),
                ("c", "Cart"),
                ("?", "Help"),
            ],
        };

        let mut spans: Vec<Span<'static>> = vec![Span::styled(
            "Help: ",
            Style::default().fg(theme.primary),
        )];
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(*action, Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }
}
