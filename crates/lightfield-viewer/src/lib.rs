// src/lib.rs
//! Interactive light-field refocusing viewer.
//!
//! Views of a light field are tiled into a 3D texture and blended by a
//! refocus shader whose focus, aperture and camera position are driven by the
//! user through mouse drags and an egui panel.

pub mod app;
pub mod camera;
pub mod config;
pub mod data;
pub mod renderer;
pub mod timer;
pub mod ui;
pub mod viewer;
