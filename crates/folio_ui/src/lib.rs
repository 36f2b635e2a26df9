//! folio_ui - a narrow, markup-agnostic rendering surface
//!
//! Page widgets build and query element trees, subscribe to clicks and keys,
//! and schedule deferred messages through the [`Surface`] trait. Two surfaces
//! are provided: [`MemorySurface`] for tests and headless runs, and (on wasm32)
//! `DomSurface` over the live browser document.

mod callback;
mod element;
mod error;
mod event;
mod memory;
#[cfg(any(target_arch = "wasm32", test))]
mod registry;
mod surface;

#[cfg(target_arch = "wasm32")]
mod web;

pub use callback::{Callback, Handler};
pub use element::{ElementId, ElementKind, Selector};
pub use error::{Result, SurfaceError};
pub use event::{ClickEvent, Event, Key};
pub use memory::MemorySurface;
pub use surface::Surface;

#[cfg(target_arch = "wasm32")]
pub use web::{Dispatcher, DomSurface};
