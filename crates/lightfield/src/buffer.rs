//! Tiled RGB storage for all views of a light field.

use crate::error::{LightFieldError, Result};
use crate::grid::GridShape;
use image::RgbImage;
use std::fmt;

/// Bytes per pixel in the tiled buffer.
pub const CHANNELS: usize = 3;

/// Pixel extent of a single view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(image: &RgbImage) -> Self {
        Self::new(image.width(), image.height())
    }

    #[inline]
    pub fn pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// All views of a light field packed as `[view][y][x][rgb]`.
#[derive(Debug, Clone)]
pub struct LightFieldBuffer {
    shape: GridShape,
    size: ImageSize,
    data: Vec<u8>,
}

impl LightFieldBuffer {
    /// Allocates a zeroed buffer for `shape.views()` views of `size` pixels.
    pub fn allocate(shape: GridShape, size: ImageSize) -> Self {
        let len = shape.views() * size.pixels() * CHANNELS;
        Self {
            shape,
            size,
            data: vec![0; len],
        }
    }

    /// Copies `image` into the slice of view `k`.
    ///
    /// `label` names the view in the error when its size differs from the
    /// buffer's view size; nothing is written in that case.
    pub fn write_view<F>(&mut self, k: usize, image: &RgbImage, label: F) -> Result<()>
    where
        F: FnOnce() -> String,
    {
        let found = ImageSize::of(image);
        if found != self.size {
            return Err(LightFieldError::SizeMismatch {
                view: label(),
                expected: self.size,
                found,
            });
        }

        // RgbImage rows are already tightly packed RGB, top to bottom.
        self.view_mut(k).copy_from_slice(image.as_raw());
        Ok(())
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[inline]
    pub fn image_size(&self) -> ImageSize {
        self.size
    }

    /// Number of bytes in one view.
    #[inline]
    pub fn view_len(&self) -> usize {
        self.size.pixels() * CHANNELS
    }

    /// Byte offset of the red channel of pixel (`x`, `y`) in view `k`.
    #[inline]
    pub fn offset(&self, k: usize, x: u32, y: u32) -> usize {
        let (w, h) = (self.size.width as usize, self.size.height as usize);
        ((k * h + y as usize) * w + x as usize) * CHANNELS
    }

    pub fn pixel(&self, k: usize, x: u32, y: u32) -> [u8; 3] {
        let o = self.offset(k, x, y);
        [self.data[o], self.data[o + 1], self.data[o + 2]]
    }

    pub fn view(&self, k: usize) -> &[u8] {
        let len = self.view_len();
        &self.data[k * len..(k + 1) * len]
    }

    fn view_mut(&mut self, k: usize) -> &mut [u8] {
        let len = self.view_len();
        &mut self.data[k * len..(k + 1) * len]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Same layout with an opaque alpha byte after every pixel, for GPU
    /// formats that have no 3-channel 8-bit variant.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() / CHANNELS * 4);
        for px in self.data.chunks_exact(CHANNELS) {
            out.extend_from_slice(px);
            out.push(u8::MAX);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn tile(shape: GridShape, images: &[RgbImage]) -> Result<LightFieldBuffer> {
        shape.check_views(images.len())?;

        let mut buffer = LightFieldBuffer::allocate(shape, ImageSize::of(&images[0]));
        for (k, image) in images.iter().enumerate() {
            buffer.write_view(k, image, || format!("#{k}"))?;
        }
        Ok(buffer)
    }

    /// Every pixel gets a colour derived from its view and coordinates.
    fn patterned(k: u8, width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([k, (x * 7 + y) as u8, (y * 11 + x * 3 + k as u32) as u8])
        })
    }

    #[test]
    fn bytes_follow_documented_layout() {
        let (w, h) = (5, 3);
        let shape = GridShape::new(2, 3).unwrap();
        let images: Vec<_> = (0..6).map(|k| patterned(k, w, h)).collect();

        let buffer = tile(shape, &images).unwrap();
        let bytes = buffer.as_bytes();
        assert_eq!(bytes.len(), 2 * 3 * (h * w) as usize * 3);

        for (k, image) in images.iter().enumerate() {
            for y in 0..h {
                for x in 0..w {
                    let px = image.get_pixel(x, y).0;
                    for c in 0..3 {
                        let i = ((k * h as usize + y as usize) * w as usize + x as usize) * 3 + c;
                        assert_eq!(bytes[i], px[c], "view {k} pixel ({x},{y}) channel {c}");
                    }
                    assert_eq!(buffer.pixel(k, x, y), px);
                }
            }
        }
    }

    #[test]
    fn mismatched_view_is_rejected() {
        let shape = GridShape::new(1, 3).unwrap();
        let images = vec![patterned(0, 4, 4), patterned(1, 4, 4), patterned(2, 4, 5)];

        let err = tile(shape, &images).unwrap_err();
        match err {
            LightFieldError::SizeMismatch {
                view,
                expected,
                found,
            } => {
                assert_eq!(view, "#2");
                assert_eq!(expected, ImageSize::new(4, 4));
                assert_eq!(found, ImageSize::new(4, 5));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn failed_write_leaves_view_untouched() {
        let shape = GridShape::new(1, 2).unwrap();
        let mut buffer = LightFieldBuffer::allocate(shape, ImageSize::new(2, 2));
        assert!(buffer
            .write_view(1, &patterned(9, 3, 2), || "wide".into())
            .is_err());
        assert!(buffer.view(1).iter().all(|&b| b == 0));
    }

    #[test]
    fn view_count_is_checked_before_tiling() {
        let shape = GridShape::new(2, 2).unwrap();
        let images = vec![patterned(0, 2, 2); 3];
        assert!(matches!(
            tile(shape, &images),
            Err(LightFieldError::GridMismatch { expected: 4, found: 3, .. })
        ));
    }

    #[test]
    fn rgba_expansion_adds_opaque_alpha() {
        let shape = GridShape::new(1, 1).unwrap();
        let image = RgbImage::from_pixel(2, 1, Rgb([10, 20, 30]));
        let buffer = tile(shape, &[image]).unwrap();

        assert_eq!(buffer.to_rgba8(), vec![10, 20, 30, 255, 10, 20, 30, 255]);
    }
}
