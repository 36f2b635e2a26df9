//! The project gallery: loading, card rendering, category filtering and the
//! image lightbox, driven by [`GalleryController`].

mod filter;
mod lightbox;
mod render;
mod state;

#[cfg(test)]
mod tests;

pub use filter::FilterBar;
pub use lightbox::{Lightbox, LightboxElements, LightboxError, LightboxState};
pub use render::{Rendered, render_load_failure, render_projects};
pub use state::{FilterKey, GalleryState, filter_indices};

use folio_ui::{ElementId, Event, MemorySurface, Selector, Surface};

use crate::config::GalleryConfig;
use crate::data::{DataSource, LoadError, load_document};
use crate::message::GalleryMessage;
use crate::model::SiteDocument;

/// Owns the gallery state and the surface it is drawn on.
pub struct GalleryController<S: Surface<Message = GalleryMessage>> {
    surface: S,
    config: GalleryConfig,
    container: ElementId,
    state: GalleryState,
    filters: FilterBar,
    lightbox: Lightbox,
    /// Bumped by every filter; only the timer carrying the latest one renders
    transition_generation: u64,
    /// Set by a filter, cleared once its transition renders
    transition_pending: bool,
}

impl<S: Surface<Message = GalleryMessage>> GalleryController<S> {
    /// Attach to the container named in `config`.
    ///
    /// Returns `None` when the page has no such container; the gallery is
    /// simply absent on that page.
    pub fn new(mut surface: S, config: GalleryConfig) -> Option<Self> {
        let Some(container) = surface.find(&Selector::id(config.container_id.as_str())) else {
            log::debug!("No #{} on this page, gallery disabled", config.container_id);
            return None;
        };

        Some(Self {
            surface,
            config,
            container,
            state: GalleryState::new(),
            filters: FilterBar::new(),
            lightbox: Lightbox::new(),
            transition_generation: 0,
            transition_pending: false,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn filters(&self) -> &FilterBar {
        &self.filters
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn is_transition_pending(&self) -> bool {
        self.transition_pending
    }

    /// Generation of the most recent filter transition.
    pub fn transition_generation(&self) -> u64 {
        self.transition_generation
    }

    /// Fetch the data document from `source` and render it.
    ///
    /// Holds `self` across the fetch; callers that share the controller fetch
    /// with [`load_document`] themselves and hand the result to
    /// [`finish_load`](Self::finish_load).
    pub async fn load<D: DataSource>(&mut self, source: &D) {
        let result = load_document(source, &self.config.data_path).await;
        self.finish_load(result);
    }

    /// Apply the outcome of a document fetch.
    ///
    /// Failures are reported inline in the container and never propagated.
    pub fn finish_load(&mut self, result: Result<SiteDocument, LoadError>) {
        let document = match result {
            Ok(document) => document,
            Err(e) => {
                log::error!("Failed to load projects: {}", e);
                render_load_failure(&mut self.surface, self.container, &self.config);
                return;
            }
        };

        let Some(projects) = document.projects else {
            log::warn!("Data document has no project list, gallery left unchanged");
            return;
        };

        log::info!("Loaded {} projects", projects.len());
        self.state.set_projects(projects);
        self.render_visible();
        self.filters.bind(&mut self.surface);
        self.filters.sync_active(&mut self.surface, &FilterKey::All);
    }

    /// Make `key` the active filter and start the fade transition.
    pub fn apply_filter(&mut self, key: FilterKey) {
        let count = self.state.apply_filter(key);
        log::debug!("Filter {} matches {} projects", self.state.active_filter(), count);

        self.transition_generation += 1;
        self.transition_pending = true;
        self.surface.set_style(self.container, "opacity", "0");
        self.surface.schedule(
            self.config.transition(),
            GalleryMessage::TransitionElapsed(self.transition_generation),
        );
    }

    /// Apply one message.
    pub fn update(&mut self, message: GalleryMessage) {
        match message {
            GalleryMessage::TriggerActivated(trigger) => {
                self.lightbox.open_from(&mut self.surface, trigger);
            }
            GalleryMessage::FilterSelected { control, key } => {
                self.filters.select(&mut self.surface, control);
                self.apply_filter(key);
            }
            GalleryMessage::TransitionElapsed(generation) => {
                // A newer filter restarted the fade; its own timer renders
                if !self.transition_pending || generation != self.transition_generation {
                    return;
                }
                self.transition_pending = false;
                self.render_visible();
                self.surface.set_style(self.container, "opacity", "1");
            }
            GalleryMessage::Lightbox(message) => {
                self.lightbox.handle(&mut self.surface, message);
            }
        }
    }

    fn render_visible(&mut self) {
        let projects: Vec<_> = self.state.visible_projects().collect();
        let rendered = render_projects(&mut self.surface, self.container, &projects, &self.config);
        log::debug!("Rendered {} cards", rendered.card_count());
        self.lightbox
            .rebind(&mut self.surface, self.container, &self.config);
    }
}

impl GalleryController<MemorySurface<GalleryMessage>> {
    /// Feed `event` to the surface and apply every message it produces.
    /// Returns the number of messages applied.
    pub fn dispatch(&mut self, event: Event) -> usize {
        let messages = self.surface.fire(event);
        let count = messages.len();
        for message in messages {
            self.update(message);
        }
        count
    }
}
