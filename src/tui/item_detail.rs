//! Dish detail dialog.
//!
//! Shows everything about one dish and collects a quantity (never below 1)
//! and optional free-text instructions before adding it to the cart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::{format_money, MenuItem};

use super::component::Component;
use super::{centered_rect, Theme};

/// Longest instructions text accepted.
pub const MAX_INSTRUCTIONS_LEN: usize = 200;

/// Events emitted by the detail dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemDetailEvent {
    /// Add the dish to the cart
    Confirmed {
        /// Dish id
        item_id: u32,
        /// Portions to add, at least 1
        quantity: u32,
        /// Trimmed instructions, if any were typed
        instructions: Option<String>,
    },
    /// Closed without adding
    Cancelled,
}

/// Which input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    /// +/- adjust the quantity
    Quantity,
    /// Typing edits the instructions
    Instructions,
}

/// Dish detail component state.
#[derive(Debug, Clone)]
pub struct ItemDetail {
    item: MenuItem,
    quantity: u32,
    instructions: String,
    focus: DetailField,
}

impl ItemDetail {
    /// Opens the dialog for `item` with a quantity of 1.
    pub fn new(item: &MenuItem) -> Self {
        Self {
            item: item.clone(),
            quantity: 1,
            instructions: String::new(),
            focus: DetailField::Quantity,
        }
    }

    /// Portions currently selected.
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Instructions typed so far.
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Field with focus.
    pub const fn focus(&self) -> DetailField {
        self.focus
    }

    fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    fn confirm(&self) -> ItemDetailEvent {
        let trimmed = self.instructions.trim();
        ItemDetailEvent::Confirmed {
            item_id: self.item.id,
            quantity: self.quantity,
            instructions: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }
}

impl Component for ItemDetail {
    type Event = ItemDetailEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match (key.code, self.focus) {
            (KeyCode::Esc, _) => return Some(ItemDetailEvent::Cancelled),
            (KeyCode::Enter, _) => return Some(self.confirm()),
            (KeyCode::Tab | KeyCode::BackTab, DetailField::Quantity) => {
                self.focus = DetailField::Instructions;
            }
            (KeyCode::Tab | KeyCode::BackTab, DetailField::Instructions) => {
                self.focus = DetailField::Quantity;
            }

            (KeyCode::Char('+') | KeyCode::Up | KeyCode::Right, DetailField::Quantity) => {
                self.increment();
            }
            (KeyCode::Char('-') | KeyCode::Down | KeyCode::Left, DetailField::Quantity) => {
                self.decrement();
            }

            (KeyCode::Backspace, DetailField::Instructions) => {
                self.instructions.pop();
            }
            (KeyCode::Char(c), DetailField::Instructions)
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                if self.instructions.chars().count() < MAX_INSTRUCTIONS_LEN {
                    self.instructions.push(c);
                }
            }
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(60, 70, area);
        f.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.item.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Artwork
                Constraint::Min(3),    // Description + facts
                Constraint::Length(3), // Quantity
                Constraint::Length(3), // Instructions
                Constraint::Length(1), // Help
            ])
            .split(inner);

        let artwork = Paragraph::new(self.item.artwork().label().to_string())
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(artwork, chunks[0]);

        let facts = vec![
            Line::from(Span::styled(
                self.item.description.as_str(),
                Style::default().fg(theme.text),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    self.item.display_price(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "   ★ {:.1}   {}   {}",
                        self.item.rating, self.item.prep_time, self.item.category
                    ),
                    Style::default().fg(theme.text_secondary),
                ),
            ]),
        ];
        f.render_widget(Paragraph::new(facts).wrap(Wrap { trim: true }), chunks[1]);

        let focused = |field: DetailField| {
            if self.focus == field {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.text_muted)
            }
        };

        let line_total = self.item.price_for(self.quantity);
        let quantity = Paragraph::new(Line::from(vec![
            Span::styled("  -  ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                self.quantity.to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  +  ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                format!("  {}", format_money(&line_total)),
                Style::default().fg(theme.text),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quantity ")
                .border_style(focused(DetailField::Quantity)),
        );
        f.render_widget(quantity, chunks[2]);

        let cursor = if self.focus == DetailField::Instructions { "█" } else { "" };
        let instructions = Paragraph::new(format!("{}{cursor}", self.instructions))
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Special instructions (optional) ")
                    .border_style(focused(DetailField::Instructions)),
            );
        f.render_widget(instructions, chunks[3]);

        let key_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("+/-", key_style),
            Span::raw(" Quantity  "),
            Span::styled("Tab", key_style),
            Span::raw(" Switch field  "),
            Span::styled("Enter", key_style),
            Span::raw(" Add to cart  "),
            Span::styled("Esc", key_style),
            Span::raw(" Cancel"),
        ]))
        .style(Style::default().fg(theme.text));
        f.render_widget(help, chunks[4]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn item() -> MenuItem {
        MenuItem {
            id: 4,
            name: "Chocolate Soufflé".to_string(),
            description: "Warm, airy, and rich".to_string(),
            price: BigDecimal::from_str("15.00").unwrap(),
            image_ref: String::new(),
            category: "Dessert".to_string(),
            rating: 4.9,
            prep_time: "25 min".to_string(),
        }
    }

    fn press(detail: &mut ItemDetail, code: KeyCode) -> Option<ItemDetailEvent> {
        detail.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quantity_never_drops_below_one() {
        let mut detail = ItemDetail::new(&item());
        press(&mut detail, KeyCode::Char('-'));
        press(&mut detail, KeyCode::Down);
        assert_eq!(detail.quantity(), 1);

        press(&mut detail, KeyCode::Char('+'));
        press(&mut detail, KeyCode::Up);
        press(&mut detail, KeyCode::Char('-'));
        assert_eq!(detail.quantity(), 2);
    }

    #[test]
    fn test_confirm_without_instructions() {
        let mut detail = ItemDetail::new(&item());
        press(&mut detail, KeyCode::Char('+'));
        assert_eq!(
            press(&mut detail, KeyCode::Enter),
            Some(ItemDetailEvent::Confirmed {
                item_id: 4,
                quantity: 2,
                instructions: None,
            })
        );
    }

    #[test]
    fn test_typing_goes_to_instructions_only_when_focused() {
        let mut detail = ItemDetail::new(&item());
        press(&mut detail, KeyCode::Char('n'));
        assert_eq!(detail.instructions(), "");

        press(&mut detail, KeyCode::Tab);
        assert_eq!(detail.focus(), DetailField::Instructions);
        for c in " no nuts ".chars() {
            press(&mut detail, KeyCode::Char(c));
        }
        // +/- are text while typing instructions
        press(&mut detail, KeyCode::Char('+'));
        press(&mut detail, KeyCode::Backspace);
        assert_eq!(detail.quantity(), 1);

        assert_eq!(
            press(&mut detail, KeyCode::Enter),
            Some(ItemDetailEvent::Confirmed {
                item_id: 4,
                quantity: 1,
                instructions: Some("no nuts".to_string()),
            })
        );
    }

    #[test]
    fn test_instructions_are_capped() {
        let mut detail = ItemDetail::new(&item());
        press(&mut detail, KeyCode::Tab);
        for _ in 0..MAX_INSTRUCTIONS_LEN + 20 {
            press(&mut detail, KeyCode::Char('a'));
        }
        assert_eq!(detail.instructions().len(), MAX_INSTRUCTIONS_LEN);
    }

    #[test]
    fn test_escape_cancels() {
        let mut detail = ItemDetail::new(&item());
        assert_eq!(
            press(&mut detail, KeyCode::Esc),
            Some(ItemDetailEvent::Cancelled)
        );
    }
}
