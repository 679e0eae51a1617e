//! Light-field loading: a grid of views of one scene, tiled into a single RGB buffer.
//!
//! - Views are ordered row-major over a `rows x cols` camera grid.
//! - Every view must have the same pixel size as the first one.
//! - Alpha and high bit depths are dropped; each pixel is 3 bytes (R, G, B).
//!
//! Buffer layout (tightly packed, no row padding):
//!   byte ((k * height + y) * width + x) * 3 + c
//!     k : view index in [0, rows * cols)
//!     y : row within the view, top to bottom
//!     x : column within the view, left to right
//!     c : 0 = red, 1 = green, 2 = blue
//!
//! A texture of extent (width, height, rows * cols) built from this buffer has
//! one depth slice per view.

pub mod buffer;
pub mod error;
pub mod grid;
pub mod load;
pub mod source;

pub use buffer::{ImageSize, LightFieldBuffer, CHANNELS};
pub use error::{LightFieldError, Result};
pub use grid::GridShape;
pub use load::{decode_view, load_light_field};
pub use source::{collect_views, discover_views, ViewInfo};
