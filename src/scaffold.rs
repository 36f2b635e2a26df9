//! A minimal in-memory page for headless runs.

use folio_ui::{ElementKind, MemorySurface, Surface};

use crate::constants::{attrs, classes, ids};
use crate::message::GalleryMessage;

/// Build a page holding a filter bar with one control per value in
/// `filter_values`, followed by an empty gallery container.
pub fn page_scaffold(filter_values: &[&str]) -> MemorySurface<GalleryMessage> {
    let mut surface = MemorySurface::new();
    let root = surface.root();

    let bar = surface.add(root, ElementKind::Block);
    for &value in filter_values {
        let control = surface.add(bar, ElementKind::Button);
        surface.add_class(control, classes::FILTER_BUTTON);
        surface.set_attribute(control, attrs::FILTER, value);
        surface.set_text(control, value);
    }

    let container = surface.add(root, ElementKind::Block);
    surface.set_attribute(container, "id", ids::PROJECTS_GRID);
    surface
}
