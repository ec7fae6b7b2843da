//! The [`Raster`] type: a dense, row-major grid of 8-bit values.
//!
//! A raster doubles as an elevation map (any value 0..=255) and as a binary
//! maze (0 is open background, anything else is wall).

use std::fmt;

use crate::geom::{Point, Range};

/// A dense 2D grid of `u8` values, stored row-major (`y * width + x`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Raster {
    values: Vec<u8>,
    width: usize,
    height: usize,
}

impl Raster {
    /// Create a new raster filled with zeros.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create a new raster with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            values: vec![value; width * height],
            width,
            height,
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(width: usize, height: usize, values: Vec<u8>) -> Result<Self, RasterError> {
        let expected = width * height;
        if values.len() != expected {
            return Err(RasterError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            values,
            width,
            height,
        })
    }

    /// Build a raster from rows of equal length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, RasterError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut values = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(RasterError::RaggedRows {
                    expected: width,
                    actual: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            values,
            width,
            height,
        })
    }

    /// Parse a binary maze drawn with `#` for walls and any other
    /// character for background. Rows are separated by newlines.
    pub fn from_ascii(text: &str) -> Result<Self, RasterError> {
        let rows: Vec<Vec<u8>> = text
            .lines()
            .map(|line| line.chars().map(|c| u8::from(c == '#')).collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the raster has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The bounding range `[0, 0] - [width, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Whether `p` lies inside the raster.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Read the value at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<u8> {
        self.index(p).map(|i| self.values[i])
    }

    /// Set the value at `p`. No-op if `p` is out of bounds.
    pub fn set(&mut self, p: Point, value: u8) {
        if let Some(i) = self.index(p) {
            self.values[i] = value;
        }
    }

    /// Set every cell of `rng` (clipped to the raster) to `value`.
    pub fn fill_range(&mut self, rng: Range, value: u8) {
        for p in self.bounds().intersect(rng) {
            self.set(p, value);
        }
    }

    /// Fill the raster using a function of each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> u8) {
        for p in self.bounds() {
            self.set(p, f(p));
        }
    }

    /// The row-major backing buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }

    /// Iterate over `(Point, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u8)> + '_ {
        self.bounds().iter().zip(self.values.iter().copied())
    }
}

/// Errors raised when building a [`Raster`] from existing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The buffer length does not equal `width * height`.
    SizeMismatch { expected: usize, actual: usize },
    /// A row's length differs from the first row's.
    RaggedRows { expected: usize, actual: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "raster: expected {expected} values, got {actual}")
            }
            Self::RaggedRows { expected, actual } => {
                write!(f, "raster: row of width {actual}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for RasterError {}
