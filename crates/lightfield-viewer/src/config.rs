use crate::{
    camera::DragMode,
    viewer::{DEFAULT_APERTURE, DEFAULT_FOCUS},
};
use clap::Parser;
use std::path::PathBuf;

/// Shaders shipped with the crate.
pub const DEFAULT_SHADER_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders");

/// `lightfield-viewer` - interactive refocusing of a light-field image grid.
///
/// Views are tiled into a 3D texture and blended by a refocus shader. Drag
/// with the left mouse button to move the virtual camera across the grid.
#[derive(Parser, Debug, Clone)]
#[command(name = "lightfield-viewer", version, about, long_about = None)]
pub struct Config {
    /// A directory of view images, or the view images themselves in row-major
    /// grid order.
    ///
    /// Without any views the window opens empty; drop a directory on it to
    /// load one.
    pub views: Vec<PathBuf>,

    /// Number of rows in the camera grid.
    ///
    /// When omitted it is derived from the view count.
    #[arg(long)]
    pub rows: Option<u32>,

    /// Number of columns in the camera grid.
    #[arg(long)]
    pub cols: Option<u32>,

    /// Directory holding `lightfield.vert.wgsl` and `lightfield.frag.wgsl`.
    #[arg(long, env = "LIGHTFIELD_SHADER_DIR", default_value = DEFAULT_SHADER_DIR)]
    pub shader_dir: PathBuf,

    /// Initial focus parameter.
    #[arg(long, default_value_t = DEFAULT_FOCUS, allow_negative_numbers = true)]
    pub focus: f32,

    /// Initial aperture size, in grid cells.
    #[arg(long, default_value_t = DEFAULT_APERTURE)]
    pub aperture: f32,

    /// How mouse drags move the camera.
    #[arg(long, value_enum, default_value_t = DragMode::Anchored)]
    pub drag_mode: DragMode,

    /// Hide the parameter panel.
    #[arg(long)]
    pub no_ui: bool,
}
