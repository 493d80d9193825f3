//! Centralized shortcut and action system.
//!
//! Key bindings, the actions they trigger, and the help text shown for them
//! live together here so the help overlay and the status bar never drift
//! from what the handlers actually do.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Every action a user can take from the main storefront view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === MENU NAVIGATION ===
    /// Highlight the previous dish
    NavigateUp,
    /// Highlight the next dish
    NavigateDown,
    /// Highlight the first dish
    JumpToFirst,
    /// Highlight the last dish
    JumpToLast,

    // === CATEGORY STRIP ===
    /// Select the next category label
    NextCategory,
    /// Select the previous category label
    PreviousCategory,
    /// Select the nth category label (zero-based)
    SelectCategory(u8),
    /// Scroll the strip backwards by hand
    ScrollStripBack,
    /// Scroll the strip forwards by hand
    ScrollStripForward,

    // === CART ===
    /// Open the detail view of the highlighted dish
    OpenItemDetail,
    /// Add one portion of the highlighted dish
    QuickAdd,
    /// Remove one portion of the highlighted dish
    RemoveOne,
    /// Open the cart panel
    OpenCart,

    // === FILTERS ===
    /// Cycle the ordering
    CycleSort,
    /// Cycle the minimum rating filter
    CycleMinRating,
    /// Cycle the maximum preparation time filter
    CycleMaxPrep,
    /// Switch between individual and catering service
    ToggleServiceType,

    // === GENERAL ===
    /// Show or hide the help overlay
    ToggleHelp,
    /// Clear filters
    Cancel,
    /// Leave the application
    Quit,
}

/// Shortcut registry that maps key events to actions for a given context.
pub struct ShortcutRegistry {
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys held
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a `KeyEvent`.
    ///
    /// Shift is folded into the character for printable keys, so `?` matches
    /// whether or not the terminal reports the shift.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = if matches!(event.code, KeyCode::Char(_)) {
            event.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            event.modifiers
        };
        Self {
            code: event.code,
            modifiers,
        }
    }
}

/// Context name of the main storefront view.
pub const MAIN: &str = "main";

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN;

        // === MENU NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);

        // === CATEGORY STRIP ===
        self.register(ctx, K::Tab, M::NONE, Action::NextCategory);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousCategory);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousCategory);
        self.register(ctx, K::Right, M::NONE, Action::NextCategory);
        self.register(ctx, K::Left, M::NONE, Action::PreviousCategory);
        self.register(ctx, K::Char('l'), M::NONE, Action::NextCategory);
        self.register(ctx, K::Char('h'), M::NONE, Action::PreviousCategory);
        for (index, digit) in (0u8..9).zip('1'..='9') {
            self.register(ctx, K::Char(digit), M::NONE, Action::SelectCategory(index));
        }
        self.register(ctx, K::Char('['), M::NONE, Action::ScrollStripBack);
        self.register(ctx, K::Char(']'), M::NONE, Action::ScrollStripForward);

        // === CART ===
        self.register(ctx, K::Enter, M::NONE, Action::OpenItemDetail);
        self.register(ctx, K::Char('a'), M::NONE, Action::QuickAdd);
        self.register(ctx, K::Char('+'), M::NONE, Action::QuickAdd);
        self.register(ctx, K::Char('x'), M::NONE, Action::RemoveOne);
        self.register(ctx, K::Char('-'), M::NONE, Action::RemoveOne);
        self.register(ctx, K::Char('c'), M::NONE, Action::OpenCart);

        // === FILTERS ===
        self.register(ctx, K::Char('s'), M::NONE, Action::CycleSort);
        self.register(ctx, K::Char('r'), M::NONE, Action::CycleMinRating);
        self.register(ctx, K::Char('t'), M::NONE, Action::CycleMaxPrep);
        self.register(ctx, K::Char('v'), M::NONE, Action::ToggleServiceType);

        // === GENERAL ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// One documented shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    /// Keys as shown to the user
    pub keys: &'static str,
    /// What the keys do
    pub description: &'static str,
}

/// A titled group of shortcuts in the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpSection {
    /// Section heading
    pub title: &'static str,
    /// Shortcuts in display order
    pub entries: &'static [HelpEntry],
}

const fn entry(keys: &'static str, description: &'static str) -> HelpEntry {
    HelpEntry { keys, description }
}

/// Everything the help overlay documents.
pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "MENU",
        entries: &[
            entry("Up/Down, j/k", "Highlight previous/next dish"),
            entry("Home/End", "Jump to first/last dish"),
            entry("Enter", "Open dish details (quantity, instructions)"),
            entry("a / +", "Add one portion to the cart"),
            entry("x / -", "Remove one portion from the cart"),
        ],
    },
    HelpSection {
        title: "CATEGORIES",
        entries: &[
            entry("Tab/Shift+Tab", "Select next/previous category"),
            entry("Left/Right, h/l", "Select previous/next category"),
            entry("1-9", "Select a category by position"),
            entry("Click", "Select the category under the pointer"),
            entry("[ / ]", "Scroll the strip by hand"),
            entry("Wheel", "Scroll the strip when over it"),
        ],
    },
    HelpSection {
        title: "FILTERS",
        entries: &[
            entry("s", "Cycle ordering (recommended, rating, price, time)"),
            entry("r", "Cycle minimum rating"),
            entry("t", "Cycle maximum preparation time"),
            entry("v", "Switch individual / catering service"),
            entry("Esc", "Clear rating and time filters"),
        ],
    },
    HelpSection {
        title: "CART",
        entries: &[
            entry("c", "Open the cart"),
            entry("Up/Down", "Highlight a cart line"),
            entry("+ / -", "Change the quantity of the highlighted line"),
            entry("Enter", "Proceed to checkout"),
            entry("Esc", "Close the cart"),
        ],
    },
    HelpSection {
        title: "GENERAL",
        entries: &[
            entry("?", "Toggle this help"),
            entry("q, Ctrl+C", "Quit"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(MAIN, key(KeyCode::Up)),
            Some(Action::NavigateUp)
        );
        assert_eq!(
            registry.lookup(MAIN, key(KeyCode::Tab)),
            Some(Action::NextCategory)
        );
        assert_eq!(
            registry.lookup(MAIN, key(KeyCode::Char('c'))),
            Some(Action::OpenCart)
        );
        assert_eq!(
            registry.lookup(
                MAIN,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_digits_select_categories() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(MAIN, key(KeyCode::Char('1'))),
            Some(Action::SelectCategory(0))
        );
        assert_eq!(
            registry.lookup(MAIN, key(KeyCode::Char('9'))),
            Some(Action::SelectCategory(8))
        );
        assert_eq!(registry.lookup(MAIN, key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_shifted_characters_match() {
        let registry = ShortcutRegistry::new();
        let shifted = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(registry.lookup(MAIN, shifted), Some(Action::ToggleHelp));
    }

    #[test]
    fn test_unknown_context_has_no_bindings() {
        let registry = ShortcutRegistry::new();
        assert_eq!(registry.lookup("cart", key(KeyCode::Up)), None);
    }

    #[test]
    fn test_help_sections_are_populated() {
        assert!(HELP_SECTIONS.iter().all(|section| !section.entries.is_empty()));
    }
}
