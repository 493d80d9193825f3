//! Cart panel: lists cart entries with per-line +/- and the order total.
//!
//! The panel reads the cart owned by `AppState` and asks for changes through
//! events, so the cart has a single owner.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{format_money, Cart};

use super::component::ContextualComponent;
use super::{centered_rect, Theme};

/// Events emitted by the cart panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPanelEvent {
    /// Add one portion of the dish with this id
    Increment(u32),
    /// Remove one portion of the dish with this id
    Decrement(u32),
    /// Proceed to checkout
    Checkout,
    /// Close the panel
    Closed,
}

/// Cart panel component state.
#[derive(Debug, Clone, Default)]
pub struct CartPanel {
    selected: usize,
}

impl CartPanel {
    /// Opens the panel with the first line highlighted.
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Highlighted line, clamped to the current cart.
    pub fn selected(&self, cart: &Cart) -> Option<usize> {
        let len = cart.entries().len();
        (len > 0).then(|| self.selected.min(len - 1))
    }

    fn selected_id(&self, cart: &Cart) -> Option<u32> {
        self.selected(cart).map(|index| cart.entries()[index].item.id)
    }
}

impl ContextualComponent for CartPanel {
    type Context = Cart;
    type Event = CartPanelEvent;

    fn handle_input(&mut self, key: KeyEvent, cart: &Cart) -> Option<Self::Event> {
        if let Some(index) = self.selected(cart) {
            self.selected = index;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('c' | 'q') => Some(CartPanelEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < cart.entries().len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char('+') | KeyCode::Right => {
                self.selected_id(cart).map(CartPanelEvent::Increment)
            }
            KeyCode::Char('-' | 'x') | KeyCode::Left => {
                self.selected_id(cart).map(CartPanelEvent::Decrement)
            }
            KeyCode::Enter if !cart.is_empty() => Some(CartPanelEvent::Checkout),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, cart: &Cart) {
        let dialog_area = centered_rect(70, 70, area);
        f.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(" Your Order ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Entries
                Constraint::Length(3), // Total
                Constraint::Length(1), // Help
            ])
            .split(inner);

        if cart.is_empty() {
            let empty = Paragraph::new("Your cart is empty")
                .style(Style::default().fg(theme.text_muted))
                .alignment(Alignment::Center);
            f.render_widget(empty, chunks[0]);
        } else {
            let items: Vec<ListItem> = cart
                .entries()
                .iter()
                .map(|entry| {
                    let mut lines = vec![Line::from(vec![
                        Span::styled(
                            format!("{:>3} × ", entry.quantity),
                            Style::default().fg(theme.text_secondary),
                        ),
                        Span::styled(
                            format!("{:<26}", entry.item.name),
                            Style::default().fg(theme.text),
                        ),
                        Span::styled(
                            format!("{:>9}", entry.item.display_price()),
                            Style::default().fg(theme.text_muted),
                        ),
                        Span::styled(
                            format!("{:>11}", format_money(&entry.line_total())),
                            Style::default().fg(theme.text),
                        ),
                    ])];
                    if let Some(instructions) = &entry.instructions {
                        lines.push(Line::from(Span::styled(
                            format!("      “{instructions}”"),
                            Style::default()
                                .fg(theme.text_muted)
                                .add_modifier(Modifier::ITALIC),
                        )));
                    }
                    ListItem::new(lines)
                })
                .collect();

            let list = List::new(items).highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            );
            let mut list_state = ListState::default();
            list_state.select(self.selected(cart));
            f.render_stateful_widget(list, chunks[0], &mut list_state);
        }

        let total = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} items   ", cart.total_item_count()),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled("Total: ", Style::default().fg(theme.text)),
            Span::styled(
                cart.display_total(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(Block::default().borders(Borders::TOP));
        f.render_widget(total, chunks[1]);

        let key_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", key_style),
            Span::raw(" Select  "),
            Span::styled("+/-", key_style),
            Span::raw(" Quantity  "),
            Span::styled("Enter", key_style),
            Span::raw(" Checkout  "),
            Span::styled("Esc", key_style),
            Span::raw(" Close"),
        ]))
        .style(Style::default().fg(theme.text));
        f.render_widget(help, chunks[2]);
    }
}
