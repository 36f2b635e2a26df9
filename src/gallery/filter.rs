//! Category filter controls.
//!
//! Controls are whatever elements on the page carry the filter-button class;
//! each holds its key in the filter attribute. Exactly one control is marked
//! active at a time.

use folio_ui::{ElementId, Handler, Selector, Surface};

use super::FilterKey;
use crate::constants::{attrs, classes};
use crate::message::GalleryMessage;

/// The set of filter controls found on the page.
#[derive(Debug, Default)]
pub struct FilterBar {
    controls: Vec<(ElementId, FilterKey)>,
    bound: bool,
}

impl FilterBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover the controls and subscribe to them. Only the first call has any effect.
    pub fn bind<S: Surface<Message = GalleryMessage>>(&mut self, surface: &mut S) {
        if self.bound {
            return;
        }
        self.bound = true;

        for control in surface.find_all(&Selector::class(classes::FILTER_BUTTON)) {
            let Some(value) = surface.attribute(control, attrs::FILTER) else {
                log::warn!("Filter control {} has no {} attribute", control, attrs::FILTER);
                continue;
            };
            let key = FilterKey::from_control_value(&value);
            let message_key = key.clone();
            surface.on_click(
                control,
                Handler::new(move |_| {
                    Some(GalleryMessage::FilterSelected {
                        control,
                        key: message_key.clone(),
                    })
                }),
            );
            self.controls.push((control, key));
        }

        log::debug!("Bound {} filter controls", self.controls.len());
    }

    pub fn controls(&self) -> &[(ElementId, FilterKey)] {
        &self.controls
    }

    /// Mark `control` active and every other control inactive.
    pub fn select<S: Surface>(&self, surface: &mut S, control: ElementId) {
        for &(other, _) in &self.controls {
            surface.remove_class(other, classes::ACTIVE);
        }
        surface.add_class(control, classes::ACTIVE);
    }

    /// Mark the first control carrying `key` active, if there is one.
    pub fn sync_active<S: Surface>(&self, surface: &mut S, key: &FilterKey) {
        if let Some(&(control, _)) = self.controls.iter().find(|(_, k)| k == key) {
            self.select(surface, control);
        }
    }
}
