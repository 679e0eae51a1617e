use crate::buffer::{ImageSize, LightFieldBuffer};
use crate::error::{LightFieldError, Result};
use crate::grid::GridShape;
use crate::source::ViewInfo;
use image::RgbImage;

/// Decodes one view to 8-bit RGB.
pub fn decode_view(view: &ViewInfo) -> Result<RgbImage> {
    image::open(view.path())
        .map(|img| img.to_rgb8())
        .map_err(|source| LightFieldError::Decode {
            path: view.path().to_path_buf(),
            source,
        })
}

/// Decodes every view in list order and tiles them into one buffer.
///
/// The first view fixes the image size; any later view of another size fails
/// the whole load. The grid/view count check runs before anything is decoded.
pub fn load_light_field(views: &[ViewInfo], shape: GridShape) -> Result<LightFieldBuffer> {
    shape.check_views(views.len())?;

    let first = decode_view(&views[0])?;
    let size = ImageSize::of(&first);
    log::info!(
        "Loading {} views ({}x{} grid) of {}",
        views.len(),
        shape.rows,
        shape.cols,
        size
    );

    let mut buffer = LightFieldBuffer::allocate(shape, size);
    buffer.write_view(0, &first, || views[0].path().display().to_string())?;
    drop(first);

    for (k, view) in views.iter().enumerate().skip(1) {
        let image = decode_view(view)?;
        buffer.write_view(k, &image, || view.path().display().to_string())?;
    }

    log::info!("Tiled light field buffer: {} bytes", buffer.as_bytes().len());
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::path::Path;

    fn write_view(dir: &Path, name: &str, width: u32, height: u32, seed: u8) -> ViewInfo {
        let path = dir.join(name);
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([seed, x as u8 * 10, y as u8 * 20])
        })
        .save(&path)
        .unwrap();
        ViewInfo::new(path)
    }

    #[test]
    fn loads_views_in_list_order() {
        let dir = tempfile::tempdir().unwrap();
        let views: Vec<_> = (0..4u8)
            .map(|k| write_view(dir.path(), &format!("v{k}.png"), 3, 2, k * 50))
            .collect();

        let buffer = load_light_field(&views, GridShape::new(2, 2).unwrap()).unwrap();
        assert_eq!(buffer.image_size(), ImageSize::new(3, 2));
        assert_eq!(buffer.as_bytes().len(), 4 * 3 * 2 * 3);
        for k in 0..4 {
            assert_eq!(buffer.pixel(k, 2, 1), [k as u8 * 50, 20, 20]);
        }
    }

    #[test]
    fn size_mismatch_names_the_view() {
        let dir = tempfile::tempdir().unwrap();
        let views = vec![
            write_view(dir.path(), "a.png", 4, 4, 0),
            write_view(dir.path(), "b.png", 4, 3, 1),
        ];

        let err = load_light_field(&views, GridShape::new(1, 2).unwrap()).unwrap_err();
        match err {
            LightFieldError::SizeMismatch { view, found, .. } => {
                assert!(view.ends_with("b.png"));
                assert_eq!(found, ImageSize::new(4, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn undecodable_view_fails() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("broken.png");
        std::fs::write(&bogus, b"not a png").unwrap();

        let err = load_light_field(&[ViewInfo::new(&bogus)], GridShape::new(1, 1).unwrap())
            .unwrap_err();
        assert!(matches!(err, LightFieldError::Decode { path, .. } if path == bogus));
    }

    #[test]
    fn grid_mismatch_fails_before_decoding() {
        // The paths do not exist, so any decode attempt would surface as Decode.
        let views = vec![ViewInfo::new("missing_a.png"), ViewInfo::new("missing_b.png")];
        assert!(matches!(
            load_light_field(&views, GridShape::new(2, 2).unwrap()),
            Err(LightFieldError::GridMismatch { .. })
        ));
        assert!(matches!(
            load_light_field(&[], GridShape::new(1, 1).unwrap()),
            Err(LightFieldError::NoViews)
        ));
    }
}
