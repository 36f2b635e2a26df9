//! Customizable keybindings for the lightbox.
//!
//! Keys are only honoured while the lightbox is open; the controller checks
//! that, this module just maps keys to actions.

use folio_ui::Key;
use serde::{Deserialize, Serialize};

use crate::message::LightboxMessage;

/// Keybinding configuration for the lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightboxKeyBindings {
    /// Hotkey closing the lightbox
    pub close: Key,
    /// Hotkey showing the previous image
    pub previous: Key,
    /// Hotkey showing the next image
    pub next: Key,
}

impl Default for LightboxKeyBindings {
    fn default() -> Self {
        Self {
            close: Key::Escape,
            previous: Key::Left,
            next: Key::Right,
        }
    }
}

impl LightboxKeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the lightbox action that corresponds to a key press, if any.
    pub fn action_for_key(&self, key: Key) -> Option<LightboxMessage> {
        if key == self.close {
            Some(LightboxMessage::Close)
        } else if key == self.previous {
            Some(LightboxMessage::Previous)
        } else if key == self.next {
            Some(LightboxMessage::Next)
        } else {
            None
        }
    }

    /// Check if a key is already used by a binding other than `exclude`.
    /// Returns a description of what it's used for, if anything.
    pub fn key_conflict(&self, key: Key, exclude: Option<LightboxMessage>) -> Option<&'static str> {
        [
            (LightboxMessage::Close, self.close, "Close"),
            (LightboxMessage::Previous, self.previous, "Previous image"),
            (LightboxMessage::Next, self.next, "Next image"),
        ]
        .into_iter()
        .find(|(action, bound, _)| Some(*action) != exclude && *bound == key)
        .map(|(_, _, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = LightboxKeyBindings::new();
        assert_eq!(bindings.action_for_key(Key::Escape), Some(LightboxMessage::Close));
        assert_eq!(bindings.action_for_key(Key::Left), Some(LightboxMessage::Previous));
        assert_eq!(bindings.action_for_key(Key::Right), Some(LightboxMessage::Next));
        assert_eq!(bindings.action_for_key(Key::Enter), None);
    }

    #[test]
    fn test_key_conflict() {
        let bindings = LightboxKeyBindings::default();
        assert_eq!(bindings.key_conflict(Key::Left, None), Some("Previous image"));
        assert_eq!(
            bindings.key_conflict(Key::Left, Some(LightboxMessage::Previous)),
            None
        );
        assert_eq!(bindings.key_conflict(Key::Char('x'), None), None);
    }

    #[test]
    fn test_bindings_serde() {
        let bindings = LightboxKeyBindings {
            close: Key::Char('q'),
            ..Default::default()
        };
        let json = serde_json::to_string(&bindings).unwrap();
        let back: LightboxKeyBindings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bindings);
        assert_eq!(back.action_for_key(Key::Char('q')), Some(LightboxMessage::Close));
    }
}
