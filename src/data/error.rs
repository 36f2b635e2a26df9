//! Error types for data document loading.

use thiserror::Error;

/// Errors that can occur while retrieving or parsing the site data document.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The transport itself failed (network down, CORS, aborted request)
    #[error("Fetch of '{path}' failed: {message}")]
    Fetch {
        /// Requested path
        path: String,
        /// Transport-level description
        message: String,
    },

    /// The server answered with a non-success status
    #[error("Fetch of '{path}' returned HTTP {status}")]
    Status {
        /// Requested path
        path: String,
        /// HTTP status code
        status: u16,
    },

    /// No document is available under the path
    #[error("Document not found: '{path}'")]
    NotFound {
        /// Requested path
        path: String,
    },

    /// I/O error reading a local document
    #[error("I/O error reading '{path}': {source}")]
    Io {
        /// Requested path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not have the expected shape
    #[error("Malformed document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// Create a transport error.
    pub fn fetch(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }
}
