//! Keyboard mapping for the demo loop.
//!
//! Keys stand in for the browser events the behavior layer would receive:
//! digits are clicks on category-carrying elements, letters simulate
//! pointer and visibility changes on the hero region, and the menu keys
//! drive the hamburger controller.

use crossterm::event::{KeyCode, KeyEvent};

use vitrine::hero::{HeroEvent, ImageCatalog};

/// Action derived from a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoAction {
    /// Forward an event to the hero driver.
    Hero(HeroEvent),
    /// Flip the menu toggle.
    MenuToggle,
    /// Escape pressed with the menu possibly open.
    MenuEscape,
    /// A click outside the menu region.
    MenuOutsideClick,
    /// Leave the demo.
    Quit,
    /// Key not bound to anything.
    None,
}

/// Map a key event to a demo action.
///
/// Bindings:
/// - `1`..`9`: select the Nth catalog category
/// - `p`: pointer enters the hero (pause rotation)
/// - `l`: pointer leaves the hero (resume rotation)
/// - `v`: hero section scrolls into view
/// - `m`: toggle the menu
/// - `Esc`: send Escape to the menu
/// - `o`: click outside the menu
/// - `q`: quit
pub fn handle_key_event(event: KeyEvent, catalog: Option<&ImageCatalog>) -> DemoAction {
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => DemoAction::Quit,
        KeyCode::Esc => DemoAction::MenuEscape,
        KeyCode::Char('m') | KeyCode::Char('M') => DemoAction::MenuToggle,
        KeyCode::Char('o') | KeyCode::Char('O') => DemoAction::MenuOutsideClick,
        KeyCode::Char('p') | KeyCode::Char('P') => DemoAction::Hero(HeroEvent::PointerEnter),
        KeyCode::Char('l') | KeyCode::Char('L') => DemoAction::Hero(HeroEvent::PointerLeave),
        KeyCode::Char('v') | KeyCode::Char('V') => DemoAction::Hero(HeroEvent::Visibility(1.0)),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let catalog = match catalog {
                Some(catalog) => catalog,
                None => return DemoAction::None,
            };
            let position = match c.to_digit(10) {
                Some(0) | None => return DemoAction::None,
                Some(n) => (n - 1) as usize,
            };
            if position < catalog.len() {
                let key = catalog.entry_at(position).key.clone();
                DemoAction::Hero(HeroEvent::Select(key))
            } else {
                DemoAction::None
            }
        }
        _ => DemoAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn catalog() -> ImageCatalog {
        ImageCatalog::from_entries(vec![
            ("home".to_string(), "a.jpg".to_string()),
            ("productos".to_string(), "b.jpg".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn test_quit_key() {
        let catalog = catalog();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), Some(&catalog)),
            DemoAction::Quit
        );
    }

    #[test]
    fn test_digit_selects_category_by_position() {
        let catalog = catalog();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1')), Some(&catalog)),
            DemoAction::Hero(HeroEvent::Select("home".to_string()))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('2')), Some(&catalog)),
            DemoAction::Hero(HeroEvent::Select("productos".to_string()))
        );
    }

    #[test]
    fn test_digit_out_of_range_is_ignored() {
        let catalog = catalog();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('9')), Some(&catalog)),
            DemoAction::None
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('0')), Some(&catalog)),
            DemoAction::None
        );
    }

    #[test]
    fn test_digit_without_catalog_is_ignored() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1')), None),
            DemoAction::None
        );
    }

    #[test]
    fn test_pointer_and_visibility_keys() {
        let catalog = catalog();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('p')), Some(&catalog)),
            DemoAction::Hero(HeroEvent::PointerEnter)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('l')), Some(&catalog)),
            DemoAction::Hero(HeroEvent::PointerLeave)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('v')), Some(&catalog)),
            DemoAction::Hero(HeroEvent::Visibility(1.0))
        );
    }

    #[test]
    fn test_menu_keys() {
        let catalog = catalog();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('m')), Some(&catalog)),
            DemoAction::MenuToggle
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Esc), Some(&catalog)),
            DemoAction::MenuEscape
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('o')), Some(&catalog)),
            DemoAction::MenuOutsideClick
        );
    }

    #[test]
    fn test_unbound_key_is_none() {
        let catalog = catalog();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('x')), Some(&catalog)),
            DemoAction::None
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Tab), Some(&catalog)),
            DemoAction::None
        );
    }
}
