//! Modal image viewer over the currently rendered project images.
//!
//! [`LightboxState`] is the pure two-state machine (Closed / Open with an index
//! into a snapshot of image URLs). [`Lightbox`] owns the state plus the overlay
//! elements and keeps the surface in sync with it.

use folio_ui::{ClickEvent, ElementId, ElementKind, Handler, Selector, Surface};
use thiserror::Error;

use crate::config::GalleryConfig;
use crate::constants::{attrs, classes, ids};
use crate::message::{GalleryMessage, LightboxMessage};

/// Reasons the lightbox refuses to open.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LightboxError {
    #[error("No images to show")]
    NoImages,

    #[error("Image index {index} out of bounds for {len} images")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Navigation state of the lightbox.
///
/// While open, `current_index < image_urls.len()` always holds and navigation
/// never wraps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxState {
    image_urls: Vec<String>,
    current_index: usize,
    is_open: bool,
    /// Element to give focus back to on close
    last_focused: Option<ElementId>,
}

impl LightboxState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on `image_urls[index]`, remembering `opener` for focus restoration.
    pub fn open(
        &mut self,
        image_urls: Vec<String>,
        index: usize,
        opener: ElementId,
    ) -> Result<(), LightboxError> {
        if image_urls.is_empty() {
            return Err(LightboxError::NoImages);
        }
        if index >= image_urls.len() {
            return Err(LightboxError::IndexOutOfBounds {
                index,
                len: image_urls.len(),
            });
        }
        self.image_urls = image_urls;
        self.current_index = index;
        self.is_open = true;
        self.last_focused = Some(opener);
        Ok(())
    }

    /// Step forward. Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if self.is_open && self.has_next() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Step back. Returns whether the index moved.
    pub fn previous(&mut self) -> bool {
        if self.is_open && self.has_previous() {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Close, handing back the element that opened the lightbox.
    /// Returns `None` if it was already closed.
    pub fn close(&mut self) -> Option<ElementId> {
        if !self.is_open {
            return None;
        }
        self.is_open = false;
        self.last_focused.take()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_url(&self) -> Option<&str> {
        if self.is_open {
            self.image_urls.get(self.current_index).map(String::as_str)
        } else {
            None
        }
    }

    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    pub fn last_focused(&self) -> Option<ElementId> {
        self.last_focused
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.image_urls.len()
    }
}

/// Overlay elements, created once and reused for the page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxElements {
    pub overlay: ElementId,
    pub close: ElementId,
    pub previous: ElementId,
    pub image: ElementId,
    pub next: ElementId,
}

/// The lightbox widget.
#[derive(Debug, Default)]
pub struct Lightbox {
    state: LightboxState,
    elements: Option<LightboxElements>,
    /// Subscriptions are attached exactly once
    bound: bool,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn elements(&self) -> Option<&LightboxElements> {
        self.elements.as_ref()
    }

    /// Make sure the overlay exists and is wired to `container`'s triggers.
    ///
    /// Called after every render; creation and subscriptions happen on the
    /// first call only.
    pub fn rebind<S: Surface<Message = GalleryMessage>>(
        &mut self,
        surface: &mut S,
        container: ElementId,
        config: &GalleryConfig,
    ) {
        let elements = match self.elements {
            Some(elements) => elements,
            None => {
                let elements = build_overlay(surface, config);
                self.elements = Some(elements);
                elements
            }
        };

        if self.bound {
            return;
        }
        self.bound = true;

        let close = || Some(GalleryMessage::Lightbox(LightboxMessage::Close));
        surface.on_click(elements.close, Handler::new(move |_| close()));
        surface.on_click(
            elements.overlay,
            Handler::new(move |event: ClickEvent| event.is_direct().then(close).flatten()),
        );
        surface.on_click(
            elements.previous,
            Handler::new(|_| Some(LightboxMessage::Previous.into())),
        );
        surface.on_click(
            elements.next,
            Handler::new(|_| Some(LightboxMessage::Next.into())),
        );

        let bindings = config.keybindings.clone();
        surface.on_key_down(Handler::new(move |key| {
            bindings.action_for_key(key).map(GalleryMessage::from)
        }));

        surface.on_delegated_click(
            container,
            Selector::attribute(attrs::LIGHTBOX),
            Handler::new(|trigger| Some(GalleryMessage::TriggerActivated(trigger))),
        );

        log::debug!("Lightbox bindings attached");
    }

    /// Open on the image behind `trigger`.
    ///
    /// The image list is rebuilt from every trigger currently on the surface,
    /// in document order, so it always reflects what is rendered right now.
    pub fn open_from<S: Surface>(&mut self, surface: &mut S, trigger: ElementId) {
        let Some(elements) = self.elements else {
            log::warn!("Lightbox trigger {} activated before the lightbox exists", trigger);
            return;
        };

        let mut image_urls = Vec::new();
        let mut index = None;
        for candidate in surface.find_all(&Selector::attribute(attrs::LIGHTBOX)) {
            let Some(url) = surface.attribute(candidate, "href") else {
                continue;
            };
            if candidate == trigger {
                index = Some(image_urls.len());
            }
            image_urls.push(url);
        }

        let Some(index) = index else {
            log::warn!("Lightbox trigger {} is not a rendered image link", trigger);
            return;
        };

        if let Err(e) = self.state.open(image_urls, index, trigger) {
            log::warn!("Lightbox not opened: {}", e);
            return;
        }

        log::debug!(
            "Lightbox opened at {}/{}",
            index + 1,
            self.state.image_urls().len()
        );
        self.show_current(surface, &elements);
        surface.add_class(elements.overlay, classes::ACTIVE);
        surface.set_scroll_locked(true);
        surface.focus(elements.close);
    }

    /// Apply a navigation or dismissal message. Ignored while closed.
    pub fn handle<S: Surface>(&mut self, surface: &mut S, message: LightboxMessage) {
        let Some(elements) = self.elements else {
            return;
        };
        if !self.state.is_open() {
            return;
        }

        match message {
            LightboxMessage::Close => {
                let opener = self.state.close();
                surface.remove_class(elements.overlay, classes::ACTIVE);
                surface.set_scroll_locked(false);
                if let Some(opener) = opener {
                    surface.focus(opener);
                }
                log::debug!("Lightbox closed");
            }
            LightboxMessage::Previous => {
                if self.state.previous() {
                    self.show_current(surface, &elements);
                }
            }
            LightboxMessage::Next => {
                if self.state.next() {
                    self.show_current(surface, &elements);
                }
            }
        }
    }

    fn show_current<S: Surface>(&self, surface: &mut S, elements: &LightboxElements) {
        if let Some(url) = self.state.current_url() {
            surface.set_attribute(elements.image, "src", url);
        }
        surface.set_visible(elements.previous, self.state.has_previous());
        surface.set_visible(elements.next, self.state.has_next());
    }
}

fn build_overlay<S: Surface>(surface: &mut S, config: &GalleryConfig) -> LightboxElements {
    let text = &config.text;

    let overlay = surface.create(ElementKind::Block);
    surface.set_attribute(overlay, "id", ids::LIGHTBOX_OVERLAY);
    surface.add_class(overlay, classes::LIGHTBOX_OVERLAY);
    surface.set_attribute(overlay, "role", "dialog");
    surface.set_attribute(overlay, "aria-modal", "true");
    surface.set_attribute(overlay, "aria-label", &text.lightbox_label);

    let content = surface.create(ElementKind::Block);
    surface.add_class(content, classes::LIGHTBOX_CONTENT);

    let close = surface.create(ElementKind::Button);
    surface.add_class(close, classes::LIGHTBOX_CLOSE);
    surface.set_attribute(close, "aria-label", &text.close_label);
    surface.set_text(close, &text.close_symbol);

    let previous = icon_button(surface, classes::LIGHTBOX_PREV, &text.previous_label, classes::ICON_PREV);

    let image = surface.create(ElementKind::Image);
    surface.add_class(image, classes::LIGHTBOX_IMAGE);
    surface.set_attribute(image, "src", "");
    surface.set_attribute(image, "alt", "");

    let next = icon_button(surface, classes::LIGHTBOX_NEXT, &text.next_label, classes::ICON_NEXT);

    for element in [close, previous, image, next] {
        surface.append_child(content, element);
    }
    surface.append_child(overlay, content);
    let root = surface.root();
    surface.append_child(root, overlay);

    log::debug!("Lightbox overlay created");
    LightboxElements {
        overlay,
        close,
        previous,
        image,
        next,
    }
}

fn icon_button<S: Surface>(surface: &mut S, class: &str, label: &str, icon_classes: &[&str]) -> ElementId {
    let button = surface.create(ElementKind::Button);
    surface.add_class(button, class);
    surface.set_attribute(button, "aria-label", label);
    let icon = surface.create(ElementKind::Icon);
    for icon_class in icon_classes {
        surface.add_class(icon, icon_class);
    }
    surface.append_child(button, icon);
    button
}
