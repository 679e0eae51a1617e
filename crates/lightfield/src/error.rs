use crate::buffer::ImageSize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LightFieldError {
    #[error("light field has no views")]
    NoViews,

    #[error("grid dimensions must be non-zero (got {rows}x{cols})")]
    EmptyGrid { rows: u32, cols: u32 },

    #[error("a {rows}x{cols} grid needs {expected} views, but {found} were given")]
    GridMismatch {
        rows: u32,
        cols: u32,
        expected: usize,
        found: usize,
    },

    #[error("cannot infer a grid shape for {views} views; pass rows and cols explicitly")]
    AmbiguousGrid { views: usize },

    #[error("failed to decode view {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("view {view} is {found}, expected {expected} like the first view")]
    SizeMismatch {
        view: String,
        expected: ImageSize,
        found: ImageSize,
    },

    #[error("failed to list views in {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, LightFieldError>;
