//! RGB overlay target: [`Color`] and [`RgbImage`].

use crate::geom::{Point, Range};
use crate::raster::Raster;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// A neutral gray with all three components equal to `v`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::from_rgb(v, v, v)
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// RgbImage
// ---------------------------------------------------------------------------

/// A dense row-major image of [`Color`] pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
}

impl RgbImage {
    /// Create an image filled with `color`.
    pub fn new(width: usize, height: usize, color: Color) -> Self {
        Self {
            pixels: vec![color; width * height],
            width,
            height,
        }
    }

    /// Gray rendering of an elevation raster: each value is replicated into
    /// the three channels.
    pub fn from_gray(raster: &Raster) -> Self {
        Self {
            pixels: raster.as_slice().iter().map(|&v| Color::gray(v)).collect(),
            width: raster.width(),
            height: raster.height(),
        }
    }

    /// Rendering of a binary maze: background white, walls black.
    pub fn from_binary(raster: &Raster) -> Self {
        Self {
            pixels: raster
                .as_slice()
                .iter()
                .map(|&v| if v == 0 { Color::WHITE } else { Color::BLACK })
                .collect(),
            width: raster.width(),
            height: raster.height(),
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The bounding range of the image.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Read the pixel at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Color> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// Set the pixel at `p`. No-op if out of bounds.
    pub fn set(&mut self, p: Point, color: Color) {
        if let Some(i) = self.index(p) {
            self.pixels[i] = color;
        }
    }

    /// The row-major pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}
