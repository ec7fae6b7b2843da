//! Search and overlay settings.

use graymaze_core::Color;

/// Distance used when snapping a binary-maze goal onto open background.
pub const DEFAULT_SNAP_RADIUS: u32 = 5;

/// Colours used to paint a path onto an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    pub start: Color,
    pub path: Color,
    pub goal: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            start: Color::RED,
            path: Color::GREEN,
            goal: Color::BLUE,
        }
    }
}

/// Tunables for a [`MazeSearch`](crate::MazeSearch).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Rings scanned around a binary-maze goal that sits on a wall. The
    /// goal moves to the first background cell found at Chebyshev distance
    /// `1..snap_radius`.
    pub snap_radius: u32,
    pub palette: Palette,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            snap_radius: DEFAULT_SNAP_RADIUS,
            palette: Palette::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_snap_radius(mut self, snap_radius: u32) -> Self {
        self.snap_radius = snap_radius;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
