use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("No global window object available")]
    NoWindow,

    #[error("Window has no document or body")]
    NoDocument,
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
