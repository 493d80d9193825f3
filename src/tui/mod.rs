//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod cart_panel;
pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod item_detail;
pub mod marquee_strip;
pub mod menu_list;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::{APP_NAME, APP_TAGLINE};
use crate::marquee::{MarqueeController, StripLayout};
use crate::models::{Cart, MenuItem, MenuSelection};
use crate::services::{Catalog, MenuQuery};
use crate::shortcuts::ShortcutRegistry;

// Re-export TUI components
pub use cart_panel::CartPanel;
pub use component::{Component, ContextualComponent};
pub use help_overlay::HelpOverlay;
pub use item_detail::ItemDetail;
pub use marquee_strip::MarqueeStrip;
pub use menu_list::MenuList;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Cells moved by one manual scroll step of the strip.
pub const STRIP_SCROLL_STEP: f64 = 4.0;

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Dish detail dialog
    ItemDetail,
    /// Cart panel
    CartPanel,
    /// Help overlay popup
    HelpOverlay,
}

/// Active component - holds the currently active popup component
///
/// Only one component can be active at a time.
#[derive(Debug)]
pub enum ActiveComponent {
    /// Dish detail dialog
    ItemDetail(ItemDetail),
    /// Cart panel
    CartPanel(CartPanel),
    /// Help overlay component
    HelpOverlay(HelpOverlay),
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Menu loaded at startup
    pub catalog: Catalog,
    /// Dishes the user has chosen
    pub cart: Cart,
    /// Category, filters, and ordering of the menu view
    pub selection: MenuSelection,

    // Category strip
    /// Cell layout of one copy of the strip
    pub strip: StripLayout,
    /// Scroll animation state
    pub marquee: MarqueeController,
    /// Viewport of the strip as last drawn, for mouse hit-testing
    pub strip_area: Rect,
    /// Dish rows as last drawn
    pub menu_area: Rect,
    /// Cart badge as last drawn
    pub cart_badge_area: Rect,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Highlighted row of the menu view
    pub selected_index: usize,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// Key bindings of the main view
    pub shortcuts: ShortcutRegistry,
    /// Application configuration
    pub config: Config,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the storefront state and mounts the strip animation at `now`.
    pub fn new(catalog: Catalog, config: Config, now: Instant) -> Self {
        let labels: Vec<&str> = catalog
            .categories()
            .iter()
            .map(|category| category.label.as_str())
            .collect();
        let strip = StripLayout::new(&labels);
        let marquee = MarqueeController::mount(config.marquee.settings(), now);
        let theme = Theme::from_mode(config.ui.theme_mode);
        let selection = MenuSelection::with_sort(config.ui.default_sort);
        let show_help = config.ui.show_help_on_startup;

        let mut state = Self {
            catalog,
            cart: Cart::new(),
            selection,
            strip,
            marquee,
            strip_area: Rect::default(),
            menu_area: Rect::default(),
            cart_badge_area: Rect::default(),
            theme,
            selected_index: 0,
            active_popup: None,
            active_component: None,
            status_message: "Press ? for help".to_string(),
            error_message: None,
            shortcuts: ShortcutRegistry::new(),
            config,
            should_quit: false,
        };

        if show_help {
            state.open_help_overlay();
        }
        state
    }

    /// Dishes in the current view, filtered and ordered.
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        self.catalog.query(&MenuQuery::from(&self.selection))
    }

    /// Dish under the list cursor.
    pub fn highlighted_item(&self) -> Option<&MenuItem> {
        let items = self.visible_items();
        items
            .get(self.selected_index.min(items.len().saturating_sub(1)))
            .copied()
    }

    /// Strip slot of the active category, if it is on the strip.
    pub fn active_category_index(&self) -> Option<usize> {
        self.catalog
            .categories()
            .iter()
            .position(|category| category.filter() == self.selection.active_category)
    }

    /// Label shown for the active category.
    pub fn active_category_label(&self) -> &str {
        self.active_category_index()
            .and_then(|index| self.catalog.categories().get(index))
            .map_or_else(
                || self.selection.active_category.value(),
                |category| category.label.as_str(),
            )
    }

    /// Makes the category in strip slot `index` active.
    pub fn select_category(&mut self, index: usize) {
        let Some(category) = self.catalog.categories().get(index) else {
            return;
        };
        let label = category.label.clone();
        self.selection.active_category = category.filter();
        self.selected_index = 0;
        tracing::debug!(category = %label, "category selected");
        self.set_status(format!("Showing {label}"));
    }

    /// Selects the next (or previous) category on the strip, wrapping around.
    pub fn cycle_category(&mut self, forward: bool) {
        let count = self.catalog.categories().len();
        if count == 0 {
            return;
        }
        let next = match self.active_category_index() {
            Some(index) if forward => (index + 1) % count,
            Some(index) => (index + count - 1) % count,
            None => 0,
        };
        self.select_category(next);
    }

    /// Moves the list cursor by `delta` rows, stopping at either end.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible_items().len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index
                .min(len - 1)
                .saturating_add_signed(delta)
                .min(len - 1)
        };
    }

    /// Keeps the list cursor inside the current view.
    pub fn clamp_selection(&mut self) {
        self.move_selection(0);
    }

    /// Adds `quantity` portions of a dish to the cart.
    pub fn add_to_cart(&mut self, item_id: u32, quantity: u32, instructions: Option<&str>) {
        let Some(item) = self.catalog.get(item_id) else {
            self.set_error(format!("Dish {item_id} is not on the menu"));
            return;
        };
        self.cart.add(item, quantity, instructions);
        let message = format!("Added {quantity} × {} to your order", item.name);
        self.set_status(message);
    }

    /// Removes one portion of a dish from the cart.
    pub fn remove_from_cart(&mut self, item_id: u32) {
        let name = self
            .catalog
            .get(item_id)
            .map_or_else(|| format!("dish {item_id}"), |item| item.name.clone());
        if self.cart.quantity_of(item_id) == 0 {
            self.set_status(format!("{name} is not in your order"));
            return;
        }
        self.cart.remove_one(item_id);
        self.set_status(format!("Removed one {name}"));
    }

    /// Checkout stub: reports the order summary.
    pub fn checkout(&mut self) {
        let summary = self.cart.checkout();
        self.set_status(format!(
            "Checkout is coming soon. Your order: {} items, {} lines, {} total",
            summary.item_count, summary.lines, summary.total
        ));
    }

    /// Feeds the strip width to the controller once the strip has a viewport.
    pub fn measure_strip(&mut self) {
        if self.strip_area.width == 0 {
            return;
        }
        let width = self.strip.copy_width() as f64;
        if self.marquee.half_content_width() != Some(width) {
            self.marquee.measure(width);
        }
    }

    /// Strip slot under a terminal cell, if the cell is inside the strip.
    pub fn strip_slot_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.strip_area.contains(Position::new(column, row)) {
            return None;
        }
        self.strip.slot_at(
            self.marquee.offset(),
            usize::from(column - self.strip_area.x),
        )
    }

    /// Index into [`Self::visible_items`] of the dish row under a terminal cell.
    pub fn menu_row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.menu_area.contains(Position::new(column, row)) {
            return None;
        }
        let len = self.visible_items().len();
        let selected = self.selected_index.min(len.saturating_sub(1));
        let index = MenuList::scroll_offset(selected, self.menu_area.height)
            + usize::from(row - self.menu_area.y);
        (index < len).then_some(index)
    }

    /// Whether a terminal cell is on the cart badge.
    pub fn cart_badge_at(&self, column: u16, row: u16) -> bool {
        self.cart_badge_area.contains(Position::new(column, row))
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        tracing::warn!(%error, "error shown to user");
        self.error_message = Some(error);
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    // === Component Management Methods (Component Trait Pattern) ===

    /// Open the detail dialog for the highlighted dish
    pub fn open_item_detail(&mut self) {
        let Some(item) = self.highlighted_item() else {
            self.set_status("No dish selected");
            return;
        };
        let detail = ItemDetail::new(item);
        self.active_component = Some(ActiveComponent::ItemDetail(detail));
        self.active_popup = Some(PopupType::ItemDetail);
    }

    /// Open the cart panel
    pub fn open_cart_panel(&mut self) {
        self.active_component = Some(ActiveComponent::CartPanel(CartPanel::new()));
        self.active_popup = Some(PopupType::CartPanel);
    }

    /// Open the help overlay component
    pub fn open_help_overlay(&mut self) {
        self.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay::new()));
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Close the currently active component
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
///
/// Each iteration drains pending input first, so a pause requested by the
/// user lands before the strip advances, then ticks the strip and draws.
pub fn run_tui<B: Backend>(state: &mut AppState, terminal: &mut Terminal<B>) -> Result<()> {
    let frame_interval = state.config.marquee.frame_interval();

    loop {
        if event::poll(frame_interval)? {
            loop {
                let now = Instant::now();
                if handle_event(state, event::read()?, now)? {
                    state.should_quit = true;
                }
                if state.should_quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }

        state.marquee.tick(Instant::now());
        terminal.draw(|f| render(f, state))?;
    }

    state.marquee.unmount();
    Ok(())
}

/// Routes one terminal event. Returns `true` when the user asked to quit.
pub fn handle_event(state: &mut AppState, event: Event, now: Instant) -> Result<bool> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(state, key),
        Event::Mouse(mouse) => {
            handlers::handle_mouse_event(state, mouse, now);
            Ok(false)
        }
        // Resize is picked up by the next draw
        _ => Ok(false),
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &mut AppState) {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Category strip
            Constraint::Min(8),    // Menu
            Constraint::Length(5), // Status bar
        ])
        .split(f.area());

    state.strip_area = MarqueeStrip::viewport(chunks[1]);
    state.menu_area = MenuList::list_viewport(chunks[2]);
    state.cart_badge_area = cart_badge_area(chunks[0], &cart_badge_text(&state.cart));
    state.measure_strip();

    let state: &AppState = state;
    let theme = &state.theme;

    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    render_title_bar(f, chunks[0], state);
    MarqueeStrip::render(f, chunks[1], state, theme);
    MenuList::render(f, chunks[2], state, theme);
    StatusBar::render(f, chunks[3], state, theme);

    if let Some(component) = &state.active_component {
        render_popup(f, component, state);
    }

    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, theme);
    }
}

/// Render title bar with the cart badge
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(APP_TAGLINE, Style::default().fg(theme.text_muted)),
    ]));
    f.render_widget(title, inner);

    let badge_style = if state.cart.is_empty() {
        Style::default().fg(theme.text_secondary).bg(theme.surface)
    } else {
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    };
    let badge = Paragraph::new(Line::from(Span::styled(
        cart_badge_text(&state.cart),
        badge_style,
    )))
    .alignment(Alignment::Right);
    f.render_widget(badge, inner);
}

fn cart_badge_text(cart: &Cart) -> String {
    format!(
        " Cart {} · {} ",
        cart.total_item_count(),
        cart.display_total()
    )
}

/// Where the right-aligned badge lands inside the title bar.
fn cart_badge_area(title_area: Rect, text: &str) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(title_area);
    let width = u16::try_from(text.chars().count())
        .unwrap_or(u16::MAX)
        .min(inner.width);
    Rect::new(inner.right() - width, inner.y, width, inner.height.min(1))
}

/// Render active popup
fn render_popup(f: &mut Frame, component: &ActiveComponent, state: &AppState) {
    let area = f.area();
    match component {
        ActiveComponent::ItemDetail(detail) => detail.render(f, area, &state.theme),
        ActiveComponent::CartPanel(panel) => panel.render(f, area, &state.theme, &state.cart),
        ActiveComponent::HelpOverlay(help) => help.render(f, area, &state.theme),
    }
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(Span::styled(error.to_string(), Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter/Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Dismiss"),
        ]),
    ];

    let dialog = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(dialog, area);
}

/// Helper to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    // Route to popup handler if popup is active
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    handlers::handle_main_input(state, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marquee::MarqueePhase;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn state() -> (AppState, Instant) {
        let now = Instant::now();
        let catalog = Catalog::embedded().unwrap();
        (AppState::new(catalog, Config::default(), now), now)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_on_all_with_everything_visible() {
        let (state, _) = state();
        assert_eq!(state.active_category_index(), Some(0));
        assert_eq!(state.active_category_label(), "All");
        assert_eq!(state.visible_items().len(), state.catalog.items().len());
        assert_eq!(state.marquee.phase(), MarqueePhase::Starting);
    }

    #[test]
    fn test_cycle_category_wraps() {
        let (mut state, _) = state();
        let count = state.catalog.categories().len();

        state.cycle_category(false);
        assert_eq!(state.active_category_index(), Some(count - 1));
        state.cycle_category(true);
        assert_eq!(state.active_category_index(), Some(0));
    }

    #[test]
    fn test_selecting_category_filters_and_resets_cursor() {
        let (mut state, _) = state();
        state.selected_index = 3;
        let desserts = state
            .catalog
            .categories()
            .iter()
            .position(|c| c.label == "Desserts")
            .unwrap();

        state.select_category(desserts);
        assert_eq!(state.selected_index, 0);
        assert!(state
            .visible_items()
            .iter()
            .all(|item| item.category == "Dessert"));
        assert_eq!(state.active_category_label(), "Desserts");
    }

    #[test]
    fn test_move_selection_stops_at_ends() {
        let (mut state, _) = state();
        let len = state.visible_items().len();
        state.move_selection(-1);
        assert_eq!(state.selected_index, 0);
        state.move_selection(100);
        assert_eq!(state.selected_index, len - 1);
    }

    #[test]
    fn test_add_and_remove_through_state() {
        let (mut state, _) = state();
        state.add_to_cart(1, 2, Some("extra parmesan"));
        assert_eq!(state.cart.quantity_of(1), 2);
        assert!(state.status_message.contains("Truffle Risotto"));

        state.remove_from_cart(1);
        assert_eq!(state.cart.quantity_of(1), 1);

        state.remove_from_cart(2);
        assert!(state.status_message.contains("not in your order"));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_unknown_dish_is_an_error() {
        let (mut state, _) = state();
        state.add_to_cart(999, 1, None);
        assert!(state.error_message.is_some());
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_checkout_reports_summary_and_keeps_cart() {
        let (mut state, _) = state();
        state.add_to_cart(1, 1, None);
        state.add_to_cart(2, 1, None);
        state.checkout();
        assert!(state.status_message.contains("$63.00"));
        assert_eq!(state.cart.total_item_count(), 2);
    }

    #[test]
    fn test_strip_is_measured_only_after_layout() {
        let (mut state, _) = state();
        state.measure_strip();
        assert_eq!(state.marquee.half_content_width(), None);

        state.strip_area = Rect::new(1, 4, 60, 1);
        state.measure_strip();
        assert_eq!(
            state.marquee.half_content_width(),
            Some(state.strip.copy_width() as f64)
        );
    }

    #[test]
    fn test_render_records_strip_viewport() {
        let (mut state, _) = state();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &mut state)).unwrap();

        assert_eq!(state.strip_area, Rect::new(1, 4, 98, 1));
        assert!(state.marquee.half_content_width().is_some());

        let buffer = terminal.backend().buffer().clone();
        let strip_row: String = (1..99)
            .map(|x| buffer[(x, 4)].symbol().to_string())
            .collect();
        assert!(strip_row.starts_with(" All "));
    }

    #[test]
    fn test_render_records_click_targets() {
        let (mut state, _) = state();
        state.add_to_cart(1, 2, None);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &mut state)).unwrap();

        let badge = state.cart_badge_area;
        assert_eq!(badge.right(), 99);
        assert!(state.cart_badge_at(badge.x, 1));
        assert!(!state.cart_badge_at(badge.x.saturating_sub(1), 1));

        let first_row = state.menu_area.y;
        assert_eq!(state.menu_row_at(state.menu_area.x, first_row), Some(0));
        assert_eq!(state.menu_row_at(state.menu_area.x, first_row + 2), Some(2));
        assert_eq!(state.menu_row_at(0, first_row), None);
    }

    #[test]
    fn test_error_overlay_blocks_input_until_dismissed() {
        let (mut state, _) = state();
        state.set_error("boom");
        assert!(!handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());
        assert!(!state.should_quit);

        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_help_on_startup() {
        let mut config = Config::default();
        config.ui.show_help_on_startup = true;
        let state = AppState::new(Catalog::embedded().unwrap(), config, Instant::now());
        assert_eq!(state.active_popup, Some(PopupType::HelpOverlay));
    }
}
