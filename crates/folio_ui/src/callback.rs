//! Callback abstraction for surface event subscriptions
//!
//! Surfaces never call back into application code directly. Instead every
//! subscription carries a `Callback` that turns the raw event into an optional
//! application message, and the surface hands that message to whatever drives
//! the application (a test, the native runner, or the browser dispatcher).
//!
//! # Examples
//!
//! ```
//! use folio_ui::{Handler, Key};
//!
//! #[derive(Debug, PartialEq)]
//! enum Message {
//!     Close,
//! }
//!
//! let on_key: Handler<Key, Message> =
//!     Handler::new(|key| (key == Key::Escape).then_some(Message::Close));
//!
//! assert_eq!(on_key.emit(Key::Escape), Some(Message::Close));
//! assert_eq!(on_key.emit(Key::Enter), None);
//! ```

use std::fmt;

/// A callback wrapper that encapsulates an optional event handler.
///
/// # Type Parameters
///
/// - `T`: The event payload handed to the callback (click info, key, ...)
/// - `M`: The value the callback produces
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(value)` if the callback is set, or `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

// =============================================================================
// Message-producing handler
// =============================================================================

/// A callback that may or may not produce a message for a given event.
///
/// This is what every surface subscription takes: most events are only
/// interesting under some condition (a backdrop click whose target is the
/// backdrop itself, a key that is actually bound, ...).
pub type Handler<T, M> = Callback<T, Option<M>>;

impl<T, M> Handler<T, M> {
    /// Run the handler and flatten "no handler" and "no message" into `None`.
    pub fn emit(&self, value: T) -> Option<M> {
        self.call(value).flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_callback_never_emits() {
        let handler: Handler<u32, u32> = Handler::none();
        assert!(handler.is_none());
        assert_eq!(handler.emit(3), None);
    }

    #[test]
    fn test_handler_filters_events() {
        let handler: Handler<u32, &'static str> =
            Handler::new(|n| (n % 2 == 0).then_some("even"));
        assert!(handler.is_some());
        assert_eq!(handler.emit(4), Some("even"));
        assert_eq!(handler.emit(5), None);
    }

    #[test]
    fn test_debug_reports_set_state() {
        let set: Callback<(), ()> = Callback::new(|_| ());
        assert_eq!(format!("{:?}", set), "Callback { set: true }");
        let unset: Callback<(), ()> = Callback::default();
        assert_eq!(format!("{:?}", unset), "Callback { set: false }");
    }
}
