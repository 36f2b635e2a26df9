//! Marker names shared between the gallery and the page markup.
//!
//! Stylesheets and the static page refer to these exact names, so they are
//! fixed rather than configurable.

/// Default location of the site data document
pub const DEFAULT_DATA_PATH: &str = "data/projetos.json";

/// Control value selecting every category
pub const ALL_FILTER: &str = "all";

/// Element ids.
pub mod ids {
    /// Container hosting the project cards
    pub const PROJECTS_GRID: &str = "projects-grid";
    /// Lightbox backdrop, created on first use
    pub const LIGHTBOX_OVERLAY: &str = "lightbox-overlay";
}

/// Attributes.
pub mod attrs {
    /// Marks an element as a lightbox trigger; value is the gallery name
    pub const LIGHTBOX: &str = "data-lightbox";
    /// Gallery name written into [`LIGHTBOX`]
    pub const LIGHTBOX_GALLERY: &str = "projects";
    /// Category of a rendered card
    pub const CATEGORY: &str = "data-category";
    /// Filter key carried by a filter control
    pub const FILTER: &str = "data-filter";
}

/// Classes.
pub mod classes {
    /// Marks the selected filter control and the open lightbox
    pub const ACTIVE: &str = "active";
    pub const FILTER_BUTTON: &str = "filter-btn";
    pub const NO_PROJECTS: &str = "no-projects";

    pub const CARD: &str = "project-card";
    pub const CARD_IMAGE: &str = "project-image";
    pub const CARD_OVERLAY: &str = "project-overlay";
    pub const CARD_LINK: &str = "view-project";
    pub const CARD_INFO: &str = "project-info";
    pub const CARD_TAGS: &str = "project-tags";
    pub const TAG: &str = "tag";

    pub const LIGHTBOX_OVERLAY: &str = "lightbox-overlay";
    pub const LIGHTBOX_CONTENT: &str = "lightbox-content";
    pub const LIGHTBOX_CLOSE: &str = "lightbox-close";
    pub const LIGHTBOX_PREV: &str = "lightbox-prev";
    pub const LIGHTBOX_IMAGE: &str = "lightbox-image";
    pub const LIGHTBOX_NEXT: &str = "lightbox-next";

    /// Icon font classes
    pub const ICON_VIEW: &[&str] = &["bi", "bi-eye"];
    pub const ICON_PREV: &[&str] = &["bi", "bi-chevron-left"];
    pub const ICON_NEXT: &[&str] = &["bi", "bi-chevron-right"];
}
