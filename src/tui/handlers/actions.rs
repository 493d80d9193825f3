//! Action dispatch for the main view.

use std::time::Instant;

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::{AppState, STRIP_SCROLL_STEP};

/// Dispatch an action to its handler. Returns `true` when the app should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation
        Action::NavigateUp => state.move_selection(-1),
        Action::NavigateDown => state.move_selection(1),
        Action::JumpToFirst => state.selected_index = 0,
        Action::JumpToLast => state.move_selection(isize::MAX),

        // Category strip
        Action::NextCategory => state.cycle_category(true),
        Action::PreviousCategory => state.cycle_category(false),
        Action::SelectCategory(index) => {
            let index = usize::from(index);
            if index < state.catalog.categories().len() {
                state.select_category(index);
            } else {
                state.set_status(format!("No category {}", index + 1));
            }
        }
        Action::ScrollStripBack => state.marquee.scroll_by(-STRIP_SCROLL_STEP, Instant::now()),
        Action::ScrollStripForward => state.marquee.scroll_by(STRIP_SCROLL_STEP, Instant::now()),

        // Cart
        Action::OpenItemDetail => state.open_item_detail(),
        Action::QuickAdd => match state.highlighted_item().map(|item| item.id) {
            Some(id) => state.add_to_cart(id, 1, None),
            None => state.set_status("No dish selected"),
        },
        Action::RemoveOne => match state.highlighted_item().map(|item| item.id) {
            Some(id) => state.remove_from_cart(id),
            None => state.set_status("No dish selected"),
        },
        Action::OpenCart => state.open_cart_panel(),

        // Filters
        Action::CycleSort => {
            state.selection.sort_key = state.selection.sort_key.next();
            state.selected_index = 0;
            let sort = state.selection.sort_key;
            state.set_status(format!("Sorted by {sort}"));
        }
        Action::CycleMinRating => {
            state.selection.cycle_min_rating();
            state.clamp_selection();
        }
        Action::CycleMaxPrep => {
            state.selection.cycle_max_prep();
            state.clamp_selection();
        }
        Action::ToggleServiceType => {
            state.selection.service_type = state.selection.service_type.toggled();
            let service = state.selection.service_type;
            state.set_status(format!("Service: {service}"));
        }

        // General
        Action::ToggleHelp => state.open_help_overlay(),
        Action::Cancel => {
            state.selection.min_rating = None;
            state.selection.max_prep_minutes = None;
            state.clamp_selection();
            state.set_status("Filters cleared");
        }
        Action::Quit => {
            tracing::info!("quit requested");
            return Ok(true);
        }
    }
    Ok(false)
}
