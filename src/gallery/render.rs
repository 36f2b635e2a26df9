//! Project card rendering.
//!
//! Card layout:
//!
//! ```text
//! card (.project-card, data-category, animation-delay)
//! ├── image block (.project-image)
//! │   ├── thumbnail (lazy)
//! │   └── overlay (.project-overlay)
//! │       └── link (.view-project, href = full image, data-lightbox)
//! │           ├── icon
//! │           └── label
//! └── info block (.project-info)
//!     ├── heading (title)
//!     ├── paragraph (description)
//!     └── tags (.project-tags) ── one .tag per technology
//! ```

use folio_ui::{ElementId, ElementKind, Surface};

use crate::config::GalleryConfig;
use crate::constants::{attrs, classes};
use crate::model::Project;

/// What a render pass put into the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// The "no results" notice
    Empty,
    /// One card per project, in order
    Cards(Vec<ElementId>),
}

impl Rendered {
    pub fn card_count(&self) -> usize {
        match self {
            Rendered::Empty => 0,
            Rendered::Cards(cards) => cards.len(),
        }
    }
}

/// Replace the container content with cards for `projects`.
pub fn render_projects<S: Surface>(
    surface: &mut S,
    container: ElementId,
    projects: &[&Project],
    config: &GalleryConfig,
) -> Rendered {
    surface.clear_children(container);

    if projects.is_empty() {
        let notice = surface.create(ElementKind::Paragraph);
        surface.add_class(notice, classes::NO_PROJECTS);
        surface.set_text(notice, &config.text.no_results);
        surface.append_child(container, notice);
        return Rendered::Empty;
    }

    let cards = projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let card = render_card(surface, project, index, config);
            surface.append_child(container, card);
            card
        })
        .collect();

    Rendered::Cards(cards)
}

fn child<S: Surface>(surface: &mut S, parent: ElementId, kind: ElementKind, class: &str) -> ElementId {
    let element = surface.create(kind);
    if !class.is_empty() {
        surface.add_class(element, class);
    }
    surface.append_child(parent, element);
    element
}

fn render_card<S: Surface>(
    surface: &mut S,
    project: &Project,
    index: usize,
    config: &GalleryConfig,
) -> ElementId {
    let card = surface.create(ElementKind::Block);
    surface.add_class(card, classes::CARD);
    surface.set_attribute(card, attrs::CATEGORY, &project.category);
    let delay = config.stagger_delay(index);
    surface.set_style(card, "animation-delay", &format!("{}ms", delay.as_millis()));

    // Image block
    let image_block = child(surface, card, ElementKind::Block, classes::CARD_IMAGE);
    let thumbnail = child(surface, image_block, ElementKind::Image, "");
    surface.set_attribute(thumbnail, "src", &project.thumbnail_url);
    surface.set_attribute(thumbnail, "alt", &project.title);
    surface.set_attribute(thumbnail, "loading", "lazy");

    let overlay = child(surface, image_block, ElementKind::Block, classes::CARD_OVERLAY);
    let link = child(surface, overlay, ElementKind::Link, classes::CARD_LINK);
    surface.set_attribute(link, "href", &project.full_image_url);
    surface.set_attribute(link, attrs::LIGHTBOX, attrs::LIGHTBOX_GALLERY);
    let icon = child(surface, link, ElementKind::Icon, "");
    for class in classes::ICON_VIEW {
        surface.add_class(icon, class);
    }
    let label = child(surface, link, ElementKind::Label, "");
    surface.set_text(label, &format!(" {}", config.text.view_project));

    // Info block
    let info = child(surface, card, ElementKind::Block, classes::CARD_INFO);
    let title = child(surface, info, ElementKind::Heading, "");
    surface.set_text(title, &project.title);
    let description = child(surface, info, ElementKind::Paragraph, "");
    surface.set_text(description, &project.description);

    let tags = child(surface, info, ElementKind::Block, classes::CARD_TAGS);
    for technology in &project.technologies {
        let tag = child(surface, tags, ElementKind::Label, classes::TAG);
        surface.set_text(tag, technology);
    }

    card
}

/// Replace the container content with a plain error text.
pub fn render_load_failure<S: Surface>(surface: &mut S, container: ElementId, config: &GalleryConfig) {
    surface.set_text(container, &config.text.load_failed);
}
