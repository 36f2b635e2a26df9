//! Portfolio project records and the site data document that carries them.
//!
//! # File Format
//!
//! The site ships a single JSON document shared by every widget on the page.
//! The gallery only reads `projetos`; the other arrays belong to other widgets
//! and are ignored here.
//!
//! ```json
//! {
//!   "projetos": [
//!     {
//!       "titulo": "Loja Online",
//!       "descricao": "Catálogo com carrinho",
//!       "categoria": "web",
//!       "imagem": "img/loja-thumb.jpg",
//!       "imagemFull": "img/loja.jpg",
//!       "tecnologias": ["HTML", "CSS", "JavaScript"]
//!     }
//!   ],
//!   "faq": [...],
//!   "servicos": [...]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// One portfolio entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    /// Exact-match filter key
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "imagem")]
    pub thumbnail_url: String,
    /// Image shown in the lightbox
    #[serde(rename = "imagemFull")]
    pub full_image_url: String,
    /// Technology tags, in display order
    #[serde(rename = "tecnologias")]
    pub technologies: Vec<String>,
}

impl Project {
    /// Create a project with no technology tags.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        full_image_url: impl Into<String>,
    ) -> Self {
        let full_image_url = full_image_url.into();
        Self {
            title: title.into(),
            description: String::new(),
            category: category.into(),
            thumbnail_url: full_image_url.clone(),
            full_image_url,
            technologies: Vec::new(),
        }
    }

    /// Builder: set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set the thumbnail URL.
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = url.into();
        self
    }

    /// Builder: append a technology tag.
    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technologies.push(technology.into());
        self
    }
}

/// The gallery's view of the site data document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteDocument {
    /// Absent when the page's data file carries no portfolio section.
    #[serde(rename = "projetos", default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

impl SiteDocument {
    /// Parse the document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
