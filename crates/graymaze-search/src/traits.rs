use graymaze_core::{Point, Range, Raster};

/// Read-only, bounds-checked access to a rectangular grid of elevations.
///
/// The searches only ever read through this trait, so any 2D source can be
/// searched without copying it into a [`Raster`]. A cell for which
/// [`elevation`](ElevationMap::elevation) returns `None` is never entered.
pub trait ElevationMap {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Elevation at `p`, or `None` outside the grid.
    fn elevation(&self, p: Point) -> Option<u8>;

    /// The grid rectangle `[0, 0] - [width, height)`.
    fn bounds(&self) -> Range {
        Range::new(0, 0, self.width() as i32, self.height() as i32)
    }

    /// Whether `p` is an open cell of a binary maze (value 0).
    fn is_background(&self, p: Point) -> bool {
        self.elevation(p) == Some(0)
    }
}

impl ElevationMap for Raster {
    #[inline]
    fn width(&self) -> usize {
        Raster::width(self)
    }

    #[inline]
    fn height(&self) -> usize {
        Raster::height(self)
    }

    #[inline]
    fn elevation(&self, p: Point) -> Option<u8> {
        self.get(p)
    }
}
