use crate::error::{LightFieldError, Result};
use image::ImageFormat;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One view image on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewInfo {
    path: PathBuf,
    name: String,
}

impl ViewInfo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name, used to order views found in a directory.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Lists the image files directly inside `dir`, sorted by file name.
///
/// Files are kept only when their extension names a format this build can
/// decode; other files, including images of disabled formats, are skipped.
pub fn discover_views(dir: &Path) -> Result<Vec<ViewInfo>> {
    let mut views = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|source| LightFieldError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if !is_decodable(entry.path()) {
            log::debug!("Skipping {}: not a decodable image", entry.path().display());
            continue;
        }

        views.push(ViewInfo::new(entry.path()));
    }

    views.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("Found {} views in {}", views.len(), dir.display());
    Ok(views)
}

fn is_decodable(path: &Path) -> bool {
    ImageFormat::from_path(path).map_or(false, |format| format.reading_enabled())
}

/// Expands command-line style input into views.
///
/// A single directory is searched with [`discover_views`]; anything else is
/// taken as the view files themselves, in the given order.
pub fn collect_views<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ViewInfo>> {
    if let [single] = paths {
        let single = single.as_ref();
        if single.is_dir() {
            return discover_views(single);
        }
    }
    Ok(paths.iter().map(|p| ViewInfo::new(p.as_ref())).collect())
}
