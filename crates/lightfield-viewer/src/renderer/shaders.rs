//! Loads the refocus shader sources from a configurable directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const VERTEX_SHADER_FILE: &str = "lightfield.vert.wgsl";
pub const FRAGMENT_SHADER_FILE: &str = "lightfield.frag.wgsl";

/// WGSL sources of the refocus program.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex_path: PathBuf,
    pub vertex: String,
    pub fragment_path: PathBuf,
    pub fragment: String,
}

impl ShaderSources {
    /// Reads both stages from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let vertex_path = dir.join(VERTEX_SHADER_FILE);
        let fragment_path = dir.join(FRAGMENT_SHADER_FILE);

        let vertex = std::fs::read_to_string(&vertex_path)
            .with_context(|| format!("failed to read vertex shader {}", vertex_path.display()))?;
        let fragment = std::fs::read_to_string(&fragment_path).with_context(|| {
            format!("failed to read fragment shader {}", fragment_path.display())
        })?;

        log::debug!("Loaded shader sources from {}", dir.display());

        Ok(Self {
            vertex_path,
            vertex,
            fragment_path,
            fragment,
        })
    }
}
