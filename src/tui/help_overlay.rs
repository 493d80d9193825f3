//! Help overlay listing every shortcut, organized by section.
//!
//! Content comes from [`crate::shortcuts::HELP_SECTIONS`]; this module only
//! lays it out and scrolls it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::constants::APP_NAME;
use crate::shortcuts::HELP_SECTIONS;

use super::component::Component;
use super::Theme;

/// Width of the key column.
const KEY_COLUMN: usize = 18;

/// Events emitted by the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOverlayEvent {
    /// Overlay dismissed
    Closed,
}

/// Help overlay component state.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    scroll_offset: usize,
    total_lines: usize,
}

impl HelpOverlay {
    /// Creates the overlay scrolled to the top.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            total_lines: Self::help_content(&Theme::default()).len(),
        }
    }

    /// First visible line.
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    const fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.total_lines.saturating_sub(1));
    }

    fn help_content(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{APP_NAME} - Help"),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for section in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                format!("═══ {} ═══", section.title),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            for entry in section.entries {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<KEY_COLUMN$}", entry.keys),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled(entry.description, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "The category strip pauses while you use the mouse and resumes shortly after.",
            Style::default().fg(theme.text_muted),
        )));
        lines.push(Line::from(Span::styled(
            "Press '?' or Esc to close • ↑↓ to scroll",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpOverlay {
    type Event = HelpOverlayEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => return Some(HelpOverlayEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::End => self.scroll_offset = self.total_lines.saturating_sub(1),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Centered modal, 60% width and 80% height
        let width = (area.width * 60) / 100;
        let height = (area.height * 80) / 100;
        let modal_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };
        f.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content = Self::help_content(theme);
        let visible_height = chunks[0].height.saturating_sub(2) as usize;

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text))
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));
        f.render_widget(paragraph, chunks[0]);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);
        f.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }
}
