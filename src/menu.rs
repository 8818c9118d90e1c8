//! Accessible hamburger menu state machine.
//!
//! The menu's open state mirrors a checkbox-like toggle. Every open/close
//! goes through one primitive that keeps the trigger's `aria-expanded`
//! attribute and the document root's open marker in sync, so the three
//! never drift apart. Focus moves to the first navigation link on open and
//! back to the trigger on close.

/// Where keyboard focus should land after a menu transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// No focus change requested yet.
    Unchanged,
    /// The first link inside the navigation.
    FirstLink,
    /// The menu trigger.
    Trigger,
}

/// Controller for the accessible hamburger menu.
#[derive(Debug)]
pub struct MenuController {
    open: bool,
    aria_expanded: bool,
    root_marker: bool,
    focus: FocusTarget,
}

impl MenuController {
    /// A closed menu with attributes already reflecting the closed state.
    pub fn new() -> Self {
        Self {
            open: false,
            aria_expanded: false,
            root_marker: false,
            focus: FocusTarget::Unchanged,
        }
    }

    // Single primitive for state + attribute sync.
    fn apply(&mut self, open: bool) {
        self.open = open;
        self.aria_expanded = open;
        self.root_marker = open;
        log::debug!("menu {}", if open { "opened" } else { "closed" });
    }

    /// The toggle's checked state changed.
    pub fn on_toggle(&mut self, checked: bool) {
        self.apply(checked);
        self.focus = if checked {
            FocusTarget::FirstLink
        } else {
            FocusTarget::Trigger
        };
    }

    /// A navigation link was clicked. Closes the menu without grabbing
    /// focus back: navigation is taking over.
    pub fn on_nav_link_click(&mut self) {
        if self.open {
            self.apply(false);
        }
    }

    /// Escape was pressed anywhere in the document.
    pub fn on_escape(&mut self) {
        if self.open {
            self.apply(false);
            self.focus = FocusTarget::Trigger;
        }
    }

    /// A click landed somewhere in the document. `inside_menu` is true for
    /// clicks on the navigation, the trigger, or the toggle itself.
    pub fn on_document_click(&mut self, inside_menu: bool) {
        if self.open && !inside_menu {
            self.apply(false);
            self.focus = FocusTarget::Trigger;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value of the trigger's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> bool {
        self.aria_expanded
    }

    /// Whether the document root carries the open marker.
    pub fn root_marker(&self) -> bool {
        self.root_marker
    }

    /// Focus target requested by the last transition.
    pub fn focus(&self) -> FocusTarget {
        self.focus
    }
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new()
    }
}
