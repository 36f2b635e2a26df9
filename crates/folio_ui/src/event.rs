use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ElementId;

/// Events a driver can feed into a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Primary-button activation of an element.
    Click(ElementId),
    /// Keyboard key pressed while the page has focus.
    KeyDown(Key),
    /// Virtual clock advanced by this much.
    Tick(Duration),
}

/// Payload of a click subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// The element that was actually clicked.
    pub target: ElementId,
    /// The element the handler is attached to (the target or one of its ancestors).
    pub current_target: ElementId,
}

impl ClickEvent {
    /// True when the click landed on the subscribed element itself rather than a descendant.
    pub fn is_direct(&self) -> bool {
        self.target == self.current_target
    }
}

/// Keyboard keys (simplified set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a key.
    ///
    /// Returns `None` for keys outside the supported set (modifiers, function keys, ...).
    pub fn from_dom_key(key: &str) -> Option<Self> {
        let key = match key {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Tab" => Key::Tab,
            " " | "Spacebar" => Key::Space,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_arrow_keys() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom_key("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_dom_key("Escape"), Some(Key::Escape));
        // Legacy IE/Edge names
        assert_eq!(Key::from_dom_key("Esc"), Some(Key::Escape));
        assert_eq!(Key::from_dom_key("Left"), Some(Key::Left));
    }

    #[test]
    fn test_dom_printable_keys() {
        assert_eq!(Key::from_dom_key("a"), Some(Key::Char('a')));
        assert_eq!(Key::from_dom_key(" "), Some(Key::Space));
        assert_eq!(Key::from_dom_key("Shift"), None);
        assert_eq!(Key::from_dom_key("F5"), None);
    }

    #[test]
    fn test_click_event_direct() {
        let el = ElementId::from_raw(4);
        let child = ElementId::from_raw(5);
        assert!(ClickEvent {
            target: el,
            current_target: el
        }
        .is_direct());
        assert!(!ClickEvent {
            target: child,
            current_target: el
        }
        .is_direct());
    }
}
