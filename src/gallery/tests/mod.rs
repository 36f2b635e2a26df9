//! Scenario tests for the gallery controller, run against a `MemorySurface`.

mod lightbox_tests;
mod load_tests;

use std::time::Duration;

use folio_ui::{ElementId, ElementKind, Event, MemorySurface, Surface};

use super::GalleryController;
use crate::config::GalleryConfig;
use crate::constants::{attrs, classes, ids};
use crate::data::StaticSource;
use crate::message::GalleryMessage;
use crate::model::Project;

pub(super) type TestSurface = MemorySurface<GalleryMessage>;
pub(super) type TestController = GalleryController<TestSurface>;

/// Filter control values placed on the scaffold page, in order.
pub(super) const FILTER_VALUES: [&str; 3] = ["all", "web", "design"];

/// A page with a filter bar and an empty gallery container.
pub(super) fn scaffold_page() -> TestSurface {
    crate::scaffold::page_scaffold(&FILTER_VALUES)
}

/// Projects with categories `[web, web, design]`.
pub(super) fn sample_projects() -> Vec<Project> {
    vec![
        Project::new("Loja Online", "web", "img/loja.jpg")
            .with_description("Catálogo com carrinho")
            .with_thumbnail("img/loja-thumb.jpg")
            .with_technology("HTML")
            .with_technology("CSS"),
        Project::new("Blog Pessoal", "web", "img/blog.jpg")
            .with_description("Blog estático")
            .with_technology("JavaScript"),
        Project::new("Identidade Visual", "design", "img/logo.jpg")
            .with_description("Logo e paleta")
            .with_technology("Figma"),
    ]
}

/// `count` projects in a single category.
pub(super) fn numbered_projects(count: usize) -> Vec<Project> {
    (0..count)
        .map(|i| Project::new(format!("Projeto {}", i), "web", format!("img/{}.jpg", i)))
        .collect()
}

pub(super) fn document_json(projects: &[Project]) -> String {
    serde_json::json!({ "projetos": projects }).to_string()
}

/// A controller on the scaffold page with `projects` already loaded.
pub(super) fn loaded_controller(projects: &[Project]) -> TestController {
    let config = GalleryConfig::default();
    let source = StaticSource::new().with_document(config.data_path.clone(), document_json(projects));
    let mut controller = GalleryController::new(scaffold_page(), config).unwrap();
    pollster::block_on(controller.load(&source));
    controller
}

pub(super) fn filter_control(controller: &TestController, value: &str) -> ElementId {
    controller
        .filters()
        .controls()
        .iter()
        .find(|(_, key)| key.as_str() == value)
        .map(|&(control, _)| control)
        .unwrap()
}

/// Click the filter control for `value` and let the transition finish.
pub(super) fn select_filter(controller: &mut TestController, value: &str) {
    let control = filter_control(controller, value);
    controller.dispatch(Event::Click(control));
    let transition = controller.config().transition();
    controller.dispatch(Event::Tick(transition + Duration::from_millis(1)));
}

/// Cards currently in the container.
pub(super) fn cards(controller: &TestController) -> Vec<ElementId> {
    let container = controller.container();
    controller
        .surface()
        .children(container)
        .iter()
        .copied()
        .filter(|&child| controller.surface().has_class(child, classes::CARD))
        .collect()
}

/// Titles of the rendered cards, in document order.
pub(super) fn card_titles(controller: &TestController) -> Vec<String> {
    let surface = controller.surface();
    cards(controller)
        .into_iter()
        .map(|card| {
            let heading = find_descendant(surface, card, ElementKind::Heading).unwrap();
            surface.text_content(heading)
        })
        .collect()
}

/// Lightbox triggers currently rendered, in document order.
pub(super) fn triggers(controller: &mut TestController) -> Vec<ElementId> {
    controller
        .surface_mut()
        .find_all(&folio_ui::Selector::attribute(attrs::LIGHTBOX))
}

/// Depth-first search for the first descendant of `kind`.
pub(super) fn find_descendant(
    surface: &TestSurface,
    element: ElementId,
    kind: ElementKind,
) -> Option<ElementId> {
    for &child in surface.children(element) {
        if surface.kind(child) == Some(kind) {
            return Some(child);
        }
        if let Some(found) = find_descendant(surface, child, kind) {
            return Some(found);
        }
    }
    None
}
