//! Browser surface backed by `web-sys` (wasm32 only).
//!
//! Elements handed out by this surface are registered in a per-surface table
//! and tagged with a `data-folio-id` attribute, so that the same DOM element
//! always maps back to the same [`ElementId`] no matter how it was reached
//! (query, event target, creation). Registrations below an element are dropped
//! when its content is cleared or replaced.
//!
//! Messages produced by event handlers and timers go to a [`Dispatcher`],
//! which the application connects to its update function once it owns the
//! surface.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent, Node, Window};

use crate::registry::Tagged;
use crate::{ClickEvent, ElementId, ElementKind, Handler, Key, Selector, Surface, SurfaceError};

const ID_ATTRIBUTE: &str = "data-folio-id";

/// Shared sink for messages produced outside the application's call stack.
pub struct Dispatcher<M> {
    sink: Rc<RefCell<Option<Box<dyn Fn(M)>>>>,
}

impl<M> Clone for Dispatcher<M> {
    fn clone(&self) -> Self {
        Self {
            sink: Rc::clone(&self.sink),
        }
    }
}

impl<M> Dispatcher<M> {
    fn new() -> Self {
        Self {
            sink: Rc::new(RefCell::new(None)),
        }
    }

    /// Route every future message to `sink`.
    pub fn connect<F>(&self, sink: F)
    where
        F: Fn(M) + 'static,
    {
        *self.sink.borrow_mut() = Some(Box::new(sink));
    }

    /// Deliver a message, dropping it if nothing is connected yet.
    pub fn dispatch(&self, message: M) {
        match self.sink.borrow().as_ref() {
            Some(sink) => sink(message),
            None => log::warn!("Dispatcher: message dropped, no sink connected"),
        }
    }
}

type Registry = crate::registry::Registry<Element>;

impl Tagged for Element {
    fn tag(&self) -> Option<u32> {
        self.get_attribute(ID_ATTRIBUTE)?.parse().ok()
    }

    fn set_tag(&self, tag: u32) {
        // Failing to tag only costs identity on later lookups
        let _ = self.set_attribute(ID_ATTRIBUTE, &tag.to_string());
    }

    fn is_same(&self, other: &Self) -> bool {
        let other: &Node = other;
        self.is_same_node(Some(other))
    }
}

fn css_selector(selector: &Selector) -> String {
    match selector {
        Selector::Id(id) => format!("#{}", id),
        Selector::Class(class) => format!(".{}", class),
        Selector::Attribute(name) => format!("[{}]", name),
    }
}

fn tag_name(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Block => "div",
        ElementKind::Image => "img",
        ElementKind::Link => "a",
        ElementKind::Button => "button",
        ElementKind::Heading => "h3",
        ElementKind::Paragraph => "p",
        ElementKind::Label => "span",
        ElementKind::Icon => "i",
    }
}

/// [`Surface`] over the live browser document.
pub struct DomSurface<M> {
    window: Window,
    document: Document,
    body: ElementId,
    registry: Rc<RefCell<Registry>>,
    dispatcher: Dispatcher<M>,
    click_listeners: Vec<Closure<dyn FnMut(MouseEvent)>>,
    key_listeners: Vec<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl<M: 'static> DomSurface<M> {
    /// Attach to the current window's document.
    pub fn new() -> crate::Result<Self> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let document = window.document().ok_or(SurfaceError::NoDocument)?;
        let body: Element = document.body().ok_or(SurfaceError::NoDocument)?.into();

        let registry = Rc::new(RefCell::new(Registry::default()));
        let body = registry.borrow_mut().register(body);

        Ok(Self {
            window,
            document,
            body,
            registry,
            dispatcher: Dispatcher::new(),
            click_listeners: Vec::new(),
            key_listeners: Vec::new(),
        })
    }

    /// Handle for connecting the application's update function.
    pub fn dispatcher(&self) -> Dispatcher<M> {
        self.dispatcher.clone()
    }

    fn element(&self, id: ElementId) -> Option<Element> {
        let element = self.registry.borrow().get(id).cloned();
        if element.is_none() {
            log::warn!("DomSurface: unknown element {}", id);
        }
        element
    }

    fn html_element(&self, id: ElementId) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }

    /// Drop the registrations of every tagged element below `element`, ahead
    /// of its content being replaced.
    fn release_descendants(&self, element: &Element) {
        let list = match element.query_selector_all(&format!("[{}]", ID_ATTRIBUTE)) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("DomSurface: failed to collect descendants: {:?}", e);
                return;
            }
        };
        let mut registry = self.registry.borrow_mut();
        let released = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter(|descendant| registry.release(descendant))
            .count();
        log::trace!("DomSurface: released {} elements, {} live", released, registry.len());
    }

    fn body_style(&self, property: &str, value: Option<&str>) {
        let Some(body) = self.html_element(self.body) else {
            return;
        };
        let style = body.style();
        let result = match value {
            Some(value) => style.set_property(property, value),
            None => style.remove_property(property).map(|_| ()),
        };
        if let Err(e) = result {
            log::warn!("DomSurface: failed to update body style: {:?}", e);
        }
    }
}

fn warn_js<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(e) = result {
        log::warn!("DomSurface: {} failed: {:?}", what, e);
    }
}

impl<M: 'static> Surface for DomSurface<M> {
    type Message = M;

    fn root(&self) -> ElementId {
        self.body
    }

    fn find(&mut self, selector: &Selector) -> Option<ElementId> {
        let found = match selector {
            Selector::Id(id) => self.document.get_element_by_id(id),
            other => self
                .document
                .query_selector(&css_selector(other))
                .ok()
                .flatten(),
        };
        found.map(|el| self.registry.borrow_mut().register(el))
    }

    fn find_all(&mut self, selector: &Selector) -> Vec<ElementId> {
        let list = match self.document.query_selector_all(&css_selector(selector)) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("DomSurface: query {:?} failed: {:?}", selector, e);
                return Vec::new();
            }
        };
        let mut registry = self.registry.borrow_mut();
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|el| registry.register(el))
            .collect()
    }

    fn create(&mut self, kind: ElementKind) -> ElementId {
        let element = self
            .document
            .create_element(tag_name(kind))
            .expect("static tag names are valid");
        self.registry.borrow_mut().register(element)
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if let (Some(parent), Some(child)) = (self.element(parent), self.element(child)) {
            warn_js("append_child", parent.append_child(&child));
        }
    }

    fn clear_children(&mut self, element: ElementId) {
        if let Some(element) = self.element(element) {
            self.release_descendants(&element);
            element.set_text_content(None);
        }
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        if let Some(element) = self.element(element) {
            self.release_descendants(&element);
            element.set_text_content(Some(text));
        }
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(element) = self.element(element) {
            warn_js("set_attribute", element.set_attribute(name, value));
        }
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.element(element)?.get_attribute(name)
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(element) = self.element(element) {
            warn_js("add_class", element.class_list().add_1(class));
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(element) = self.element(element) {
            warn_js("remove_class", element.class_list().remove_1(class));
        }
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        if let Some(element) = self.html_element(element) {
            warn_js("set_style", element.style().set_property(property, value));
        }
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) {
        let display = if visible { "block" } else { "none" };
        self.set_style(element, "display", display);
    }

    fn focus(&mut self, element: ElementId) {
        if let Some(element) = self.html_element(element) {
            warn_js("focus", element.focus());
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.body_style("overflow", locked.then_some("hidden"));
    }

    fn on_click(&mut self, element: ElementId, handler: Handler<ClickEvent, M>) {
        let Some(target_element) = self.element(element) else {
            return;
        };
        let registry = Rc::clone(&self.registry);
        let dispatcher = self.dispatcher.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| registry.borrow_mut().register(el));
            let Some(target) = target else {
                return;
            };
            if let Some(message) = handler.emit(ClickEvent {
                target,
                current_target: element,
            }) {
                dispatcher.dispatch(message);
            }
        });
        warn_js(
            "add click listener",
            target_element
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()),
        );
        self.click_listeners.push(closure);
    }

    fn on_delegated_click(
        &mut self,
        container: ElementId,
        selector: Selector,
        handler: Handler<ElementId, M>,
    ) {
        let Some(container_element) = self.element(container) else {
            return;
        };
        let css = css_selector(&selector);
        let registry = Rc::clone(&self.registry);
        let dispatcher = self.dispatcher.clone();
        let scope = container_element.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let matched = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&css).ok().flatten())
                .filter(|el| {
                    let node: &Node = el;
                    scope.contains(Some(node))
                });
            let Some(matched) = matched else {
                return;
            };
            let matched = registry.borrow_mut().register(matched);
            if let Some(message) = handler.emit(matched) {
                event.prevent_default();
                dispatcher.dispatch(message);
            }
        });
        warn_js(
            "add delegated click listener",
            container_element
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()),
        );
        self.click_listeners.push(closure);
    }

    fn on_key_down(&mut self, handler: Handler<Key, M>) {
        let dispatcher = self.dispatcher.clone();
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let Some(key) = Key::from_dom_key(&event.key()) else {
                return;
            };
            if let Some(message) = handler.emit(key) {
                dispatcher.dispatch(message);
            }
        });
        warn_js(
            "add keydown listener",
            self.document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref()),
        );
        self.key_listeners.push(closure);
    }

    fn schedule(&mut self, delay: Duration, message: M) {
        let dispatcher = self.dispatcher.clone();
        let callback = Closure::once_into_js(move || dispatcher.dispatch(message));
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        warn_js(
            "set_timeout",
            self.window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    millis,
                ),
        );
    }
}
