//! Data models for the portfolio gallery.

mod project;

pub use project::{Project, SiteDocument};
