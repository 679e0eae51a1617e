use crate::error::{LightFieldError, Result};

/// Dimensions of the camera grid the views were captured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub rows: u32,
    pub cols: u32,
}

impl GridShape {
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LightFieldError::EmptyGrid { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Picks a grid for `views` images when the caller gives only part of it.
    ///
    /// Both given: used as is. One given: the other is `views / given` when it
    /// divides evenly. None given: a square grid when `views` is a perfect square.
    pub fn resolve(rows: Option<u32>, cols: Option<u32>, views: usize) -> Result<Self> {
        if views == 0 {
            return Err(LightFieldError::NoViews);
        }

        let shape = match (rows, cols) {
            (Some(0), _) | (_, Some(0)) => {
                return Err(LightFieldError::EmptyGrid {
                    rows: rows.unwrap_or(0),
                    cols: cols.unwrap_or(0),
                });
            }
            (Some(r), Some(c)) => Self::new(r, c)?,
            (Some(r), None) => Self::new(r, divide_evenly(views, r)?)?,
            (None, Some(c)) => Self::new(divide_evenly(views, c)?, c)?,
            (None, None) => {
                let side = (views as f64).sqrt().round() as u32;
                if (side as usize) * (side as usize) != views {
                    return Err(LightFieldError::AmbiguousGrid { views });
                }
                Self::new(side, side)?
            }
        };

        shape.check_views(views)?;
        Ok(shape)
    }

    /// Number of views the grid holds.
    #[inline]
    pub fn views(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major view index of grid cell (`row`, `col`).
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Grid cell (`row`, `col`) of view index `k`.
    #[inline]
    pub fn cell(&self, k: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((k / cols) as u32, (k % cols) as u32)
    }

    /// Fails unless exactly `views` images fill the grid.
    pub fn check_views(&self, views: usize) -> Result<()> {
        if views == 0 {
            return Err(LightFieldError::NoViews);
        }
        if views != self.views() {
            return Err(LightFieldError::GridMismatch {
                rows: self.rows,
                cols: self.cols,
                expected: self.views(),
                found: views,
            });
        }
        Ok(())
    }
}

fn divide_evenly(views: usize, given: u32) -> Result<u32> {
    if views % given as usize != 0 {
        return Err(LightFieldError::AmbiguousGrid { views });
    }
    Ok((views / given as usize) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            GridShape::new(0, 4),
            Err(LightFieldError::EmptyGrid { rows: 0, cols: 4 })
        ));
    }

    #[test]
    fn index_and_cell_are_row_major() {
        let shape = GridShape::new(3, 4).unwrap();
        assert_eq!(shape.index(0, 3), 3);
        assert_eq!(shape.index(2, 1), 9);
        assert_eq!(shape.cell(9), (2, 1));
        assert_eq!(shape.views(), 12);
    }

    #[test]
    fn view_count_must_fill_grid() {
        let shape = GridShape::new(2, 3).unwrap();
        assert!(shape.check_views(6).is_ok());
        assert!(matches!(
            shape.check_views(5),
            Err(LightFieldError::GridMismatch { expected: 6, found: 5, .. })
        ));
        assert!(matches!(shape.check_views(0), Err(LightFieldError::NoViews)));
    }

    #[test]
    fn resolve_infers_missing_dimension() {
        assert_eq!(
            GridShape::resolve(None, None, 81).unwrap(),
            GridShape { rows: 9, cols: 9 }
        );
        assert_eq!(
            GridShape::resolve(Some(2), None, 8).unwrap(),
            GridShape { rows: 2, cols: 4 }
        );
        assert_eq!(
            GridShape::resolve(None, Some(8), 16).unwrap(),
            GridShape { rows: 2, cols: 8 }
        );
    }

    #[test]
    fn resolve_rejects_unusable_counts() {
        assert!(matches!(
            GridShape::resolve(None, None, 12),
            Err(LightFieldError::AmbiguousGrid { views: 12 })
        ));
        assert!(matches!(
            GridShape::resolve(Some(5), None, 12),
            Err(LightFieldError::AmbiguousGrid { views: 12 })
        ));
        assert!(matches!(
            GridShape::resolve(Some(3), Some(3), 8),
            Err(LightFieldError::GridMismatch { .. })
        ));
        assert!(matches!(
            GridShape::resolve(Some(0), None, 4),
            Err(LightFieldError::EmptyGrid { rows: 0, .. })
        ));
        assert!(matches!(
            GridShape::resolve(None, None, 0),
            Err(LightFieldError::NoViews)
        ));
    }
}
