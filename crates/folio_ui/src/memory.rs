//! In-memory surface used by tests and the native runner.
//!
//! Elements live in an arena indexed by [`ElementId`]. Detached elements stay
//! in the arena (so their handles remain valid) but are invisible to queries,
//! the same way a live document behaves.
//!
//! Events are not delivered on their own: a driver calls [`MemorySurface::fire`]
//! (or one of the typed helpers) and receives the messages the subscribed
//! handlers produced, in dispatch order.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::Duration;

use crate::{ClickEvent, ElementId, ElementKind, Event, Handler, Key, Selector, Surface};

const ROOT: ElementId = ElementId::from_raw(0);

#[derive(Debug)]
struct Node {
    kind: ElementKind,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    text: Option<String>,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    visible: bool,
}

impl Node {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            text: None,
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            styles: BTreeMap::new(),
            visible: true,
        }
    }

    fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.attributes.get("id") == Some(id),
            Selector::Class(class) => self.classes.iter().any(|c| c == class),
            Selector::Attribute(name) => self.attributes.contains_key(name),
        }
    }
}

struct Delegation<M> {
    container: ElementId,
    selector: Selector,
    handler: Handler<ElementId, M>,
}

struct Timer<M> {
    due: Duration,
    seq: u64,
    message: M,
}

/// Arena-backed [`Surface`] with a virtual clock.
pub struct MemorySurface<M> {
    nodes: Vec<Node>,
    focused: Option<ElementId>,
    scroll_locked: bool,
    click_handlers: Vec<(ElementId, Handler<ClickEvent, M>)>,
    delegations: Vec<Delegation<M>>,
    key_handlers: Vec<Handler<Key, M>>,
    timers: Vec<Timer<M>>,
    now: Duration,
    timer_seq: u64,
}

impl<M: 'static> Default for MemorySurface<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: 'static> MemorySurface<M> {
    /// Create a surface containing only the root element.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(ElementKind::Block)],
            focused: None,
            scroll_locked: false,
            click_handlers: Vec::new(),
            delegations: Vec::new(),
            key_handlers: Vec::new(),
            timers: Vec::new(),
            now: Duration::ZERO,
            timer_seq: 0,
        }
    }

    fn node(&self, element: ElementId) -> Option<&Node> {
        self.nodes.get(element.raw() as usize)
    }

    fn node_mut(&mut self, element: ElementId) -> Option<&mut Node> {
        let node = self.nodes.get_mut(element.raw() as usize);
        if node.is_none() {
            log::warn!("MemorySurface: unknown element {}", element);
        }
        node
    }

    /// Create an element and append it to `parent` in one step.
    pub fn add(&mut self, parent: ElementId, kind: ElementKind) -> ElementId {
        let element = self.create(kind);
        self.append_child(parent, element);
        element
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    pub fn kind(&self, element: ElementId) -> Option<ElementKind> {
        self.node(element).map(|n| n.kind)
    }

    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.node(element).and_then(|n| n.parent)
    }

    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.node(element).map_or(&[], |n| n.children.as_slice())
    }

    pub fn text(&self, element: ElementId) -> Option<&str> {
        self.node(element).and_then(|n| n.text.as_deref())
    }

    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.node(element)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.node(element)
            .and_then(|n| n.styles.get(property))
            .map(String::as_str)
    }

    pub fn is_visible(&self, element: ElementId) -> bool {
        self.node(element).is_some_and(|n| n.visible)
    }

    /// Whether the element is reachable from the root.
    pub fn is_attached(&self, element: ElementId) -> bool {
        let mut current = Some(element);
        while let Some(id) = current {
            if id == ROOT {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Number of event subscriptions of every kind.
    pub fn listener_count(&self) -> usize {
        self.click_handlers.len() + self.delegations.len() + self.key_handlers.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Concatenated text of the element and all its descendants, in document order.
    pub fn text_content(&self, element: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(element, &mut out);
        out
    }

    fn collect_text(&self, element: ElementId, out: &mut String) {
        if let Some(text) = self.text(element) {
            out.push_str(text);
        }
        for &child in self.children(element) {
            self.collect_text(child, out);
        }
    }

    /// Indented one-line-per-element dump of the attached tree.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(ROOT, 0, &mut out);
        out
    }

    fn outline_into(&self, element: ElementId, depth: usize, out: &mut String) {
        let Some(node) = self.node(element) else {
            return;
        };
        let _ = write!(out, "{}{}", "  ".repeat(depth), node.kind.name());
        for class in &node.classes {
            let _ = write!(out, " .{}", class);
        }
        for (name, value) in &node.attributes {
            let _ = write!(out, " [{}={}]", name, value);
        }
        if let Some(text) = &node.text {
            let _ = write!(out, " {:?}", text);
        }
        if !node.visible {
            out.push_str(" (hidden)");
        }
        out.push('\n');
        for &child in &node.children {
            self.outline_into(child, depth + 1, out);
        }
    }

    fn collect_matching(&self, element: ElementId, selector: &Selector, out: &mut Vec<ElementId>) {
        let Some(node) = self.node(element) else {
            return;
        };
        if node.matches(selector) {
            out.push(element);
        }
        for &child in &node.children {
            self.collect_matching(child, selector, out);
        }
    }

    /// `element` and its ancestors, innermost first.
    fn ancestors_inclusive(&self, element: ElementId) -> Vec<ElementId> {
        let mut path = Vec::new();
        let mut current = Some(element);
        while let Some(id) = current {
            path.push(id);
            current = self.parent(id);
        }
        path
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Feed one event to the surface and collect the produced messages.
    pub fn fire(&mut self, event: Event) -> Vec<M> {
        match event {
            Event::Click(target) => self.click(target),
            Event::KeyDown(key) => self.key_down(key),
            Event::Tick(elapsed) => self.advance(elapsed),
        }
    }

    /// Click `target`, bubbling through its ancestors.
    pub fn click(&self, target: ElementId) -> Vec<M> {
        let path = self.ancestors_inclusive(target);
        let mut messages = Vec::new();

        for &current in &path {
            for (element, handler) in &self.click_handlers {
                if *element == current {
                    messages.extend(handler.emit(ClickEvent {
                        target,
                        current_target: current,
                    }));
                }
            }

            for delegation in &self.delegations {
                if delegation.container != current {
                    continue;
                }
                let matched = path
                    .iter()
                    .take_while(|&&id| id != current)
                    .chain(std::iter::once(&current))
                    .copied()
                    .find(|&id| self.node(id).is_some_and(|n| n.matches(&delegation.selector)));
                if let Some(matched) = matched {
                    messages.extend(delegation.handler.emit(matched));
                }
            }
        }

        messages
    }

    /// Press `key` at page level.
    pub fn key_down(&self, key: Key) -> Vec<M> {
        self.key_handlers
            .iter()
            .filter_map(|handler| handler.emit(key))
            .collect()
    }

    /// Advance the virtual clock and collect messages from timers that came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<M> {
        self.now += elapsed;
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.timers)
                .into_iter()
                .partition(|timer| timer.due <= now);
        self.timers = pending;
        due.sort_by_key(|timer| (timer.due, timer.seq));
        due.into_iter().map(|timer| timer.message).collect()
    }
}

impl<M: 'static> Surface for MemorySurface<M> {
    type Message = M;

    fn root(&self) -> ElementId {
        ROOT
    }

    fn find_all(&mut self, selector: &Selector) -> Vec<ElementId> {
        let mut found = Vec::new();
        self.collect_matching(ROOT, selector, &mut found);
        found
    }

    fn create(&mut self, kind: ElementKind) -> ElementId {
        let id = ElementId::from_raw(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind));
        id
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if child == ROOT || self.ancestors_inclusive(parent).contains(&child) {
            log::warn!("MemorySurface: refusing to append {} under {}", child, parent);
            return;
        }
        if self.node(parent).is_none() || self.node(child).is_none() {
            log::warn!("MemorySurface: unknown element in append {} -> {}", child, parent);
            return;
        }
        if let Some(old_parent) = self.parent(child) {
            if let Some(node) = self.node_mut(old_parent) {
                node.children.retain(|&c| c != child);
            }
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    fn clear_children(&mut self, element: ElementId) {
        let children = match self.node_mut(element) {
            Some(node) => {
                node.text = None;
                std::mem::take(&mut node.children)
            }
            None => return,
        };
        for child in children {
            if let Some(node) = self.node_mut(child) {
                node.parent = None;
            }
        }
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        self.clear_children(element);
        if let Some(node) = self.node_mut(element) {
            node.text = Some(text.to_string());
        }
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(node) = self.node_mut(element) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.node(element)
            .and_then(|n| n.attributes.get(name))
            .cloned()
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.node_mut(element) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.node_mut(element) {
            node.classes.retain(|c| c != class);
        }
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        if let Some(node) = self.node_mut(element) {
            node.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) {
        if let Some(node) = self.node_mut(element) {
            node.visible = visible;
        }
    }

    fn focus(&mut self, element: ElementId) {
        self.focused = Some(element);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn on_click(&mut self, element: ElementId, handler: Handler<ClickEvent, M>) {
        self.click_handlers.push((element, handler));
    }

    fn on_delegated_click(
        &mut self,
        container: ElementId,
        selector: Selector,
        handler: Handler<ElementId, M>,
    ) {
        self.delegations.push(Delegation {
            container,
            selector,
            handler,
        });
    }

    fn on_key_down(&mut self, handler: Handler<Key, M>) {
        self.key_handlers.push(handler);
    }

    fn schedule(&mut self, delay: Duration, message: M) {
        self.timer_seq += 1;
        self.timers.push(Timer {
            due: self.now + delay,
            seq: self.timer_seq,
            message,
        });
    }
}
