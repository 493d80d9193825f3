//! Dish list and preview pane.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::models::MenuItem;

use super::{AppState, Theme};

/// Menu list widget
pub struct MenuList;

impl MenuList {
    fn split(area: Rect) -> [Rect; 2] {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(area);
        [chunks[0], chunks[1]]
    }

    /// Area the dish rows are drawn into, inside the list border.
    pub fn list_viewport(area: Rect) -> Rect {
        Block::default()
            .borders(Borders::ALL)
            .inner(Self::split(area)[0])
    }

    /// First row shown when `selected` is highlighted in a list `height` rows tall.
    pub fn scroll_offset(selected: usize, height: u16) -> usize {
        let height = usize::from(height.max(1));
        (selected + 1).saturating_sub(height)
    }

    /// Render the filtered, ordered dishes with a preview of the highlighted one.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let chunks = Self::split(area);

        let items = state.visible_items();
        let title = format!(
            " {} · {} dishes · {} ",
            state.active_category_label(),
            items.len(),
            state.selection.sort_key
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));

        if items.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  No dishes match.",
                    Style::default().fg(theme.text_secondary),
                )),
                Line::from(Span::styled(
                    "  Pick another category or press Esc to clear filters.",
                    Style::default().fg(theme.text_muted),
                )),
            ])
            .block(block);
            f.render_widget(empty, chunks[0]);
        } else {
            let rows: Vec<ListItem> = items
                .iter()
                .map(|item| Self::row(item, state.cart.quantity_of(item.id), theme))
                .collect();
            let list = List::new(rows)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");
            let selected = state.selected_index.min(items.len() - 1);
            let height = Self::list_viewport(area).height;
            let mut list_state = ListState::default()
                .with_offset(Self::scroll_offset(selected, height))
                .with_selected(Some(selected));
            f.render_stateful_widget(list, chunks[0], &mut list_state);
        }

        Self::render_preview(f, chunks[1], state.highlighted_item(), theme);
    }

    fn row(item: &MenuItem, in_cart: u32, theme: &Theme) -> ListItem<'static> {
        let mut spans = vec![
            Span::styled(format!("{:<24}", item.name), Style::default().fg(theme.text)),
            Span::styled(
                format!("{:>8}", item.display_price()),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                format!("  ★ {:.1}", item.rating),
                Style::default().fg(theme.warning),
            ),
            Span::styled(
                format!("  {:<8}", item.prep_time),
                Style::default().fg(theme.text_secondary),
            ),
        ];
        if in_cart > 0 {
            spans.push(Span::styled(
                format!(" ×{in_cart}"),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        ListItem::new(Line::from(spans))
    }

    fn render_preview(f: &mut Frame, area: Rect, item: Option<&MenuItem>, theme: &Theme) {
        let block = Block::default()
            .title(" Details ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));

        let Some(item) = item else {
            f.render_widget(block, area);
            return;
        };

        let lines = vec![
            Line::from(Span::styled(
                item.name.as_str(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                item.artwork().label().to_string(),
                Style::default().fg(theme.text_muted),
            )),
            Line::from(""),
            Line::from(Span::styled(
                item.description.as_str(),
                Style::default().fg(theme.text),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Category  ", Style::default().fg(theme.text_muted)),
                Span::styled(item.category.as_str(), Style::default().fg(theme.text)),
            ]),
            Line::from(vec![
                Span::styled("Rating    ", Style::default().fg(theme.text_muted)),
                Span::styled(format!("★ {:.1}", item.rating), Style::default().fg(theme.text)),
            ]),
            Line::from(vec![
                Span::styled("Time      ", Style::default().fg(theme.text_muted)),
                Span::styled(item.prep_time.as_str(), Style::default().fg(theme.text)),
            ]),
            Line::from(vec![
                Span::styled("Price     ", Style::default().fg(theme.text_muted)),
                Span::styled(
                    item.display_price(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        f.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}
