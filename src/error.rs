use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The original left grid allocation unchecked, we surface it.
    #[error("could not allocate {bytes} bytes for a grid buffer")]
    Allocation { bytes: usize },

    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not encode image: {0}")]
    Image(#[from] image::ImageError),
}
