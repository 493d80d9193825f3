//! Mouse input: strip clicks, wheel scrolling, and pausing the strip.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::marquee::Interaction;
use crate::tui::{AppState, STRIP_SCROLL_STEP};

/// Handle a mouse event at `now`.
///
/// Any press or wheel turn pauses the strip. A left click selects a strip
/// label, opens a dish row, or opens the cart from its badge. The wheel over
/// the strip scrolls it by hand.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    let over_strip = state.strip_slot_at(mouse.column, mouse.row);
    let on_strip_row = state.strip_area.height > 0
        && mouse.row >= state.strip_area.y
        && mouse.row < state.strip_area.bottom();

    match mouse.kind {
        MouseEventKind::Down(button) => {
            state.marquee.interact(Interaction::PointerDown, now);
            if button != MouseButton::Left
                || state.active_popup.is_some()
                || state.error_message.is_some()
            {
                return;
            }
            if let Some(slot) = over_strip {
                state.select_category(slot);
            } else if let Some(index) = state.menu_row_at(mouse.column, mouse.row) {
                state.selected_index = index;
                state.open_item_detail();
            } else if state.cart_badge_at(mouse.column, mouse.row) {
                state.open_cart_panel();
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft if on_strip_row => {
            state.marquee.scroll_by(-STRIP_SCROLL_STEP, now);
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight if on_strip_row => {
            state.marquee.scroll_by(STRIP_SCROLL_STEP, now);
        }
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => {
            state.marquee.interact(Interaction::Wheel, now);
            if state.active_popup.is_none() && state.error_message.is_none() {
                let delta = if matches!(
                    mouse.kind,
                    MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft
                ) {
                    -1
                } else {
                    1
                };
                state.move_selection(delta);
            }
        }
        // Moves, drags, and releases leave the strip alone
        _ => {}
    }
}
