//! Popup input handlers.
//!
//! Each popup is a component that turns keys into events; the handlers here
//! apply those events to [`AppState`].

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use crate::tui::cart_panel::CartPanelEvent;
use crate::tui::help_overlay::HelpOverlayEvent;
use crate::tui::item_detail::ItemDetailEvent;
use crate::tui::{ActiveComponent, AppState, Component, ContextualComponent};

/// Handle input for the active popup
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match &mut state.active_component {
        Some(ActiveComponent::ItemDetail(detail)) => {
            if let Some(event) = detail.handle_input(key) {
                handle_item_detail_event(state, event);
            }
        }
        Some(ActiveComponent::CartPanel(panel)) => {
            if let Some(event) = panel.handle_input(key, &state.cart) {
                handle_cart_panel_event(state, event);
            }
        }
        Some(ActiveComponent::HelpOverlay(help)) => {
            if let Some(HelpOverlayEvent::Closed) = help.handle_input(key) {
                state.close_component();
                state.set_status("Press ? for help");
            }
        }
        None => {
            // Popup flag without a component: Escape closes it
            if key.code == KeyCode::Esc {
                state.close_component();
            }
        }
    }
    Ok(false)
}

fn handle_item_detail_event(state: &mut AppState, event: ItemDetailEvent) {
    match event {
        ItemDetailEvent::Confirmed {
            item_id,
            quantity,
            instructions,
        } => {
            state.close_component();
            state.add_to_cart(item_id, quantity, instructions.as_deref());
        }
        ItemDetailEvent::Cancelled => {
            state.close_component();
            state.set_status("Cancelled");
        }
    }
}

fn handle_cart_panel_event(state: &mut AppState, event: CartPanelEvent) {
    match event {
        CartPanelEvent::Increment(id) => {
            if let Some(item) = state.catalog.get(id) {
                state.cart.add_one(item);
            }
        }
        CartPanelEvent::Decrement(id) => state.cart.remove_one(id),
        CartPanelEvent::Checkout => {
            state.close_component();
            state.checkout();
        }
        CartPanelEvent::Closed => state.close_component(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::Catalog;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::time::Instant;

    fn state() -> AppState {
        AppState::new(Catalog::embedded().unwrap(), Config::default(), Instant::now())
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_popup_input(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_item_detail_confirm_adds_with_instructions() {
        let mut state = state();
        let id = state.highlighted_item().unwrap().id;
        state.open_item_detail();

        press(&mut state, KeyCode::Char('+'));
        press(&mut state, KeyCode::Tab);
        for c in "no nuts".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Enter);

        assert!(state.active_popup.is_none());
        assert_eq!(state.cart.quantity_of(id), 2);
        assert_eq!(
            state.cart.entries()[0].instructions.as_deref(),
            Some("no nuts")
        );
    }

    #[test]
    fn test_item_detail_cancel_leaves_cart_alone() {
        let mut state = state();
        state.open_item_detail();
        press(&mut state, KeyCode::Esc);
        assert!(state.active_popup.is_none());
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_cart_panel_adjusts_quantities() {
        let mut state = state();
        state.add_to_cart(3, 1, None);
        state.open_cart_panel();

        press(&mut state, KeyCode::Char('+'));
        assert_eq!(state.cart.quantity_of(3), 2);

        press(&mut state, KeyCode::Char('-'));
        press(&mut state, KeyCode::Char('-'));
        assert!(state.cart.is_empty());
        assert!(state.active_popup.is_some());
    }

    #[test]
    fn test_cart_panel_checkout_closes_and_reports() {
        let mut state = state();
        state.add_to_cart(1, 1, None);
        state.open_cart_panel();
        press(&mut state, KeyCode::Enter);

        assert!(state.active_popup.is_none());
        assert!(state.status_message.contains("$28.00"));
    }

    #[test]
    fn test_help_overlay_closes_on_escape() {
        let mut state = state();
        state.open_help_overlay();
        press(&mut state, KeyCode::Esc);
        assert!(state.active_component.is_none());
    }
}
