//! The rendering surface a controller draws on and subscribes to.

use std::time::Duration;

use crate::{ClickEvent, ElementId, ElementKind, Handler, Key, Selector};

/// A tree of elements that can be built, queried, styled and listened to.
///
/// The trait is deliberately narrow: it is everything a page widget needs and
/// nothing tied to a particular markup language. Queries return elements in
/// document order and only see elements attached under the root.
///
/// Event subscriptions take a [`Handler`] producing `Self::Message`; the surface
/// delivers produced messages to its driver.
pub trait Surface {
    /// Message type produced by event handlers.
    type Message: 'static;

    /// The page root (the body).
    fn root(&self) -> ElementId;

    /// First attached element matching the selector.
    fn find(&mut self, selector: &Selector) -> Option<ElementId> {
        self.find_all(selector).into_iter().next()
    }

    /// Every attached element matching the selector, in document order.
    fn find_all(&mut self, selector: &Selector) -> Vec<ElementId>;

    /// Create a detached element.
    fn create(&mut self, kind: ElementKind) -> ElementId;

    /// Append `child` as the last child of `parent`, moving it if already attached.
    fn append_child(&mut self, parent: ElementId, child: ElementId);

    /// Detach every child of `element`.
    fn clear_children(&mut self, element: ElementId);

    /// Replace the content of `element` with a single run of text.
    fn set_text(&mut self, element: ElementId, text: &str);

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    fn add_class(&mut self, element: ElementId, class: &str);

    fn remove_class(&mut self, element: ElementId, class: &str);

    fn set_style(&mut self, element: ElementId, property: &str, value: &str);

    /// Show or hide an element without detaching it.
    fn set_visible(&mut self, element: ElementId, visible: bool);

    /// Move keyboard focus to `element`.
    fn focus(&mut self, element: ElementId);

    /// Suspend (or restore) scrolling of the page underneath overlays.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Subscribe to clicks on `element` or any of its descendants.
    fn on_click(&mut self, element: ElementId, handler: Handler<ClickEvent, Self::Message>);

    /// Subscribe to clicks inside `container` that land on (or inside) an element
    /// matching `selector`. The handler receives that matching element.
    ///
    /// Matching happens at click time, so elements rendered after subscribing
    /// are covered too.
    fn on_delegated_click(
        &mut self,
        container: ElementId,
        selector: Selector,
        handler: Handler<ElementId, Self::Message>,
    );

    /// Subscribe to key presses anywhere on the page.
    fn on_key_down(&mut self, handler: Handler<Key, Self::Message>);

    /// Deliver `message` once `delay` has elapsed.
    fn schedule(&mut self, delay: Duration, message: Self::Message);
}
