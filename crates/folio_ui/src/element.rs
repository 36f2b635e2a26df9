//! Element handles, kinds and selectors shared by every surface.

use std::fmt;

/// Opaque handle to an element owned by a surface.
///
/// Handles are only meaningful for the surface that produced them. They stay
/// valid after the element is detached, which is what lets a controller keep
/// a reference to "the element that had focus" across re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    /// Wrap a raw surface-specific index.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw surface-specific index.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What an element is for, independent of any markup language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Generic grouping box
    Block,
    /// Raster image
    Image,
    /// Navigable link
    Link,
    /// Pressable control
    Button,
    /// Section heading
    Heading,
    /// Paragraph of text
    Paragraph,
    /// Short inline run of text
    Label,
    /// Decorative glyph
    Icon,
}

impl ElementKind {
    /// Lowercase name used in outlines and logs.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Block => "block",
            ElementKind::Image => "image",
            ElementKind::Link => "link",
            ElementKind::Button => "button",
            ElementKind::Heading => "heading",
            ElementKind::Paragraph => "paragraph",
            ElementKind::Label => "label",
            ElementKind::Icon => "icon",
        }
    }
}

/// Ways of locating elements on a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Element whose unique id equals the value
    Id(String),
    /// Elements carrying the class
    Class(String),
    /// Elements carrying the attribute, whatever its value
    Attribute(String),
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    pub fn attribute(name: impl Into<String>) -> Self {
        Self::Attribute(name.into())
    }
}
