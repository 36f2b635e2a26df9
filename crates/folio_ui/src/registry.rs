//! Mapping between backend element handles and [`ElementId`]s.
//!
//! Each registered element carries its id as a tag (an attribute on the DOM
//! element), so the same element reached through a query, an event target or
//! creation maps back to the same id. A tag is only trusted when the element
//! stored under it is the very same node; copies of tagged markup get a fresh
//! id. Ids are never reused.

use std::collections::HashMap;

use crate::ElementId;

/// A backend element that can carry an id tag.
pub trait Tagged {
    /// The id tag currently on the element, if any.
    fn tag(&self) -> Option<u32>;

    /// Write `tag` onto the element, replacing any previous one.
    fn set_tag(&self, tag: u32);

    /// Whether `self` and `other` are the same underlying node.
    fn is_same(&self, other: &Self) -> bool;
}

/// Live elements keyed by id.
#[derive(Debug)]
pub struct Registry<E> {
    elements: HashMap<u32, E>,
    next_id: u32,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self {
            elements: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<E: Tagged> Registry<E> {
    /// Id of `element`, registering it if it is not known yet.
    pub fn register(&mut self, element: E) -> ElementId {
        if let Some(raw) = element.tag() {
            if self
                .elements
                .get(&raw)
                .is_some_and(|known| known.is_same(&element))
            {
                return ElementId::from_raw(raw);
            }
        }

        let raw = self.next_id;
        self.next_id += 1;
        element.set_tag(raw);
        self.elements.insert(raw, element);
        ElementId::from_raw(raw)
    }

    pub fn get(&self, id: ElementId) -> Option<&E> {
        self.elements.get(&id.raw())
    }

    /// Forget `element` if it is registered under its tag.
    /// Returns whether anything was removed.
    pub fn release(&mut self, element: &E) -> bool {
        let Some(raw) = element.tag() else {
            return false;
        };
        if self
            .elements
            .get(&raw)
            .is_some_and(|known| known.is_same(element))
        {
            self.elements.remove(&raw);
            true
        } else {
            false
        }
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
