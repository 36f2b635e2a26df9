//! Retrieval of the site data document.
//!
//! A [`DataSource`] turns a relative path into the raw document text; the
//! gallery then parses its own view of it with [`load_document`]. Sources:
//!
//! - [`StaticSource`]: documents held in memory (tests, embedding)
//! - [`FileSource`]: documents read from a directory (native only)
//! - [`HttpSource`]: one GET through the browser's `fetch` (wasm32 only)

mod error;
mod source;

pub use error::LoadError;
pub use source::{DataSource, StaticSource, load_document};

#[cfg(not(target_arch = "wasm32"))]
pub use source::FileSource;

#[cfg(target_arch = "wasm32")]
pub use source::HttpSource;
