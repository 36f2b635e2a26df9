//! Data source trait and its implementations.

use std::collections::HashMap;

use web_time::Instant;

use super::LoadError;
use crate::model::SiteDocument;

/// Something that can produce the text of a document given its relative path.
///
/// Fetches are one-shot: no retries, no timeout, no cancellation.
pub trait DataSource {
    /// Retrieve the raw document text stored under `path`.
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, LoadError>>;
}

/// Fetch `path` from `source` and parse it as a [`SiteDocument`].
pub async fn load_document<D: DataSource>(
    source: &D,
    path: &str,
) -> Result<SiteDocument, LoadError> {
    let start = Instant::now();
    let result = source.fetch(path).await;
    log::debug!(
        "Fetched {} in {:.1}ms",
        path,
        start.elapsed().as_secs_f64() * 1000.0
    );
    let document = SiteDocument::from_json(&result?)?;
    Ok(document)
}

/// Documents held in memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<String, String>,
}

impl StaticSource {
    /// Create an empty source; every fetch fails with `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: serve `text` under `path`.
    pub fn with_document(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(path.into(), text.into());
        self
    }
}

impl DataSource for StaticSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::not_found(path))
    }
}

/// Documents read from disk, relative to a root directory (native only).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSource {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSource {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DataSource for FileSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let full_path = self.root.join(path);
        log::debug!("Reading data document {:?}", full_path);
        std::fs::read_to_string(&full_path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => LoadError::not_found(path),
            _ => LoadError::Io {
                path: path.to_string(),
                source,
            },
        })
    }
}

/// One unauthenticated GET through the browser's `fetch` (wasm32 only).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

#[cfg(target_arch = "wasm32")]
impl DataSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let js_error = |e: wasm_bindgen::JsValue| LoadError::fetch(path, format!("{:?}", e));

        let window = web_sys::window().ok_or_else(|| LoadError::fetch(path, "no window"))?;
        let response = JsFuture::from(window.fetch_with_str(path))
            .await
            .map_err(js_error)?;
        let response: web_sys::Response = response.dyn_into().map_err(js_error)?;

        if !response.ok() {
            return Err(LoadError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }

        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        body.as_string()
            .ok_or_else(|| LoadError::fetch(path, "response body is not text"))
    }
}
