//! Refocus parameters and light-field metadata shown by the viewer.

use crate::{camera::Camera, data::LightFieldUniformsStd140};
use lightfield::{GridShape, ImageSize};
use winit::dpi::LogicalSize;

/// Height of the preferred window size, in logical pixels.
pub const SIZE_HINT_HEIGHT: u32 = 512;

pub const DEFAULT_FOCUS: f32 = 0.0;
pub const DEFAULT_APERTURE: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct ViewerState {
    focus: f32,
    aperture: f32,
    pub camera: Camera,
    shape: Option<GridShape>,
    image_size: ImageSize,
}

impl ViewerState {
    pub fn new(focus: f32, aperture: f32) -> Self {
        Self {
            focus,
            aperture,
            camera: Camera::new(),
            shape: None,
            image_size: ImageSize::new(1, 1),
        }
    }

    #[inline]
    pub fn focus_point(&self) -> f32 {
        self.focus
    }

    /// Any value is accepted, including negative and non-finite ones.
    pub fn set_focus_point(&mut self, value: f32) {
        self.focus = value;
    }

    #[inline]
    pub fn aperture_size(&self) -> f32 {
        self.aperture
    }

    /// Any value is accepted; the shader decides what it means.
    pub fn set_aperture_size(&mut self, value: f32) {
        self.aperture = value;
    }

    /// Records the grid and view size of a freshly uploaded light field.
    pub fn set_light_field(&mut self, shape: GridShape, image_size: ImageSize) {
        self.shape = Some(shape);
        self.image_size = image_size;
    }

    #[inline]
    pub fn shape(&self) -> Option<GridShape> {
        self.shape
    }

    #[inline]
    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.shape.is_some()
    }

    /// Row-major index of the view closest to the camera, the one the refocus
    /// shader falls back to when the aperture covers no view.
    pub fn nearest_view(&self) -> Option<usize> {
        let shape = self.shape?;
        let span = glam::DVec2::new((shape.cols - 1) as f64, (shape.rows - 1) as f64);
        // WGSL `round` ties to even.
        let cell = (self.camera.position() * span).to_array().map(f64::round_ties_even);
        let col = (cell[0].max(0.0) as u32).min(shape.cols - 1);
        let row = (cell[1].max(0.0) as u32).min(shape.rows - 1);
        Some(shape.index(row, col))
    }

    /// Preferred window size: fixed height, width following the view aspect ratio.
    pub fn size_hint(&self) -> LogicalSize<u32> {
        let h = SIZE_HINT_HEIGHT;
        let w = (h as u64 * self.image_size.width as u64 / self.image_size.height.max(1) as u64) as u32;
        LogicalSize::new(w, h)
    }

    pub fn minimum_size_hint(&self) -> LogicalSize<u32> {
        self.size_hint()
    }

    /// Packs the current parameters for the refocus shader.
    pub fn uniforms(&self) -> LightFieldUniformsStd140 {
        let position = self.camera.position();
        let (rows, cols) = self
            .shape
            .map_or((0, 0), |s| (s.rows as i32, s.cols as i32));

        LightFieldUniformsStd140 {
            focus_point: self.focus,
            aperture_size: self.aperture,
            camera_position_x: position.x as f32,
            camera_position_y: position.y as f32,
            rows,
            cols,
            _pad: [0; 2],
        }
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS, DEFAULT_APERTURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn size_hint_is_square_before_load() {
        let viewer = ViewerState::default();
        assert_eq!(viewer.size_hint(), LogicalSize::new(512, 512));
        assert_eq!(viewer.minimum_size_hint(), viewer.size_hint());
        assert!(!viewer.is_loaded());
    }

    #[test]
    fn size_hint_follows_view_aspect() {
        let mut viewer = ViewerState::default();
        viewer.set_light_field(GridShape::new(9, 9).unwrap(), ImageSize::new(1024, 512));
        assert_eq!(viewer.size_hint(), LogicalSize::new(1024, 512));

        viewer.set_light_field(GridShape::new(2, 2).unwrap(), ImageSize::new(300, 400));
        assert_eq!(viewer.size_hint(), LogicalSize::new(384, 512));
    }

    #[test]
    fn minimum_size_follows_portrait_views() {
        let mut viewer = ViewerState::default();
        viewer.set_light_field(GridShape::new(2, 2).unwrap(), ImageSize::new(300, 400));
        assert_eq!(viewer.minimum_size_hint(), LogicalSize::new(384, 512));
        assert!(viewer.minimum_size_hint().width < ViewerState::default().size_hint().width);
    }

    #[test]
    fn nearest_view_tracks_camera() {
        let mut viewer = ViewerState::default();
        assert_eq!(viewer.nearest_view(), None);

        let shape = GridShape::new(3, 5).unwrap();
        viewer.set_light_field(shape, ImageSize::new(8, 8));
        assert_eq!(viewer.nearest_view(), Some(shape.index(1, 2)));

        viewer.camera.offset(DVec2::new(1.0, -1.0));
        assert_eq!(viewer.nearest_view(), Some(shape.index(0, 4)));
        assert_eq!(shape.cell(4), (0, 4));

        viewer.camera.offset(DVec2::new(-1.0, 1.0));
        assert_eq!(viewer.nearest_view(), Some(shape.index(2, 0)));
    }

    #[test]
    fn nearest_view_of_single_row() {
        let mut viewer = ViewerState::default();
        viewer.set_light_field(GridShape::new(1, 4).unwrap(), ImageSize::new(8, 8));
        viewer.camera.offset(DVec2::new(0.5, 0.0));
        assert_eq!(viewer.nearest_view(), Some(3));
    }

    #[test]
    fn setters_store_values_unclamped() {
        let mut viewer = ViewerState::default();
        assert_eq!(viewer.focus_point(), DEFAULT_FOCUS);
        assert_eq!(viewer.aperture_size(), DEFAULT_APERTURE);

        for v in [-12.5, 0.0, 1e9, f32::MIN_POSITIVE] {
            viewer.set_focus_point(v);
            viewer.set_aperture_size(-v);
            assert_eq!(viewer.focus_point(), v);
            assert_eq!(viewer.aperture_size(), -v);
        }
    }

    #[test]
    fn uniforms_carry_state() {
        let mut viewer = ViewerState::new(0.25, 3.0);
        viewer.set_light_field(GridShape::new(5, 7).unwrap(), ImageSize::new(8, 8));
        viewer.camera.offset(DVec2::new(0.25, -0.5));

        let u = viewer.uniforms();
        assert_eq!(u.focus_point, 0.25);
        assert_eq!(u.aperture_size, 3.0);
        assert_eq!((u.camera_position_x, u.camera_position_y), (0.75, 0.0));
        assert_eq!((u.rows, u.cols), (5, 7));
    }
}
