//! Folio - portfolio project gallery
//!
//! Loads portfolio projects from the site's JSON data document and presents
//! them as cards with category filtering and an image lightbox. The gallery is
//! drawn on a [`folio_ui::Surface`]: the live browser document on wasm32, or an
//! in-memory page for tests and the headless native runner.

pub mod config;
pub mod constants;
pub mod data;
pub mod gallery;
pub mod keybindings;
pub mod message;
pub mod model;
mod scaffold;

pub use config::{ConfigError, GalleryConfig, GalleryText, LogLevel};
pub use data::{DataSource, LoadError, StaticSource, load_document};
pub use gallery::{FilterKey, GalleryController, GalleryState};
pub use keybindings::LightboxKeyBindings;
pub use message::{GalleryMessage, LightboxMessage};
pub use model::{Project, SiteDocument};
pub use scaffold::page_scaffold;

#[cfg(not(target_arch = "wasm32"))]
pub use data::FileSource;

#[cfg(target_arch = "wasm32")]
pub use data::HttpSource;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
