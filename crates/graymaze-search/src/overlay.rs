//! Path overlays on RGB copies of a maze.
//!
//! Nothing here affects a search; these helpers only paint results for
//! inspection. Every function returns a new image and leaves its inputs
//! untouched.

use graymaze_core::{Color, Point, Raster, RgbImage};

use crate::config::Palette;
use crate::maze::MazeSearch;
use crate::path::Path;

/// Gray rendering of `grid` with `path` painted in the default palette:
/// start red, intermediate cells green, goal blue.
pub fn render_overlay(grid: &Raster, path: &Path) -> RgbImage {
    draw_path(&RgbImage::from_gray(grid), path.points(), &Palette::default())
}

/// Copy of `base` with `points` painted: the first point in
/// `palette.start`, the last in `palette.goal` and the rest in
/// `palette.path`. A single point only gets the start colour.
pub fn draw_path(base: &RgbImage, points: &[Point], palette: &Palette) -> RgbImage {
    let mut img = base.clone();
    let n = points.len();
    for (i, &p) in points.iter().enumerate() {
        let color = if i == 0 {
            palette.start
        } else if i + 1 < n {
            palette.path
        } else {
            palette.goal
        };
        img.set(p, color);
    }
    img
}

/// Copy of `base` with each path painted in its own colour. Returns `None`
/// when `paths` is empty.
///
/// Colours run along a ramp from red through green to blue, so paths drawn
/// later in the slice land towards the blue end.
pub fn draw_paths<P: AsRef<[Point]>>(base: &RgbImage, paths: &[P]) -> Option<RgbImage> {
    if paths.is_empty() {
        return None;
    }
    let mut img = base.clone();
    for (i, path) in paths.iter().enumerate() {
        let color = ramp_color(i, paths.len());
        for &p in path.as_ref() {
            img.set(p, color);
        }
    }
    Some(img)
}

/// Copy of `base` with every cell in `cells` painted in `palette.path`.
///
/// Pair with [`MazeSearch::explored`](crate::MazeSearch::explored) to show
/// how much of a maze a failed search covered.
pub fn draw_explored(
    base: &RgbImage,
    cells: impl IntoIterator<Item = Point>,
    palette: &Palette,
) -> RgbImage {
    let mut img = base.clone();
    for p in cells {
        img.set(p, palette.path);
    }
    img
}

impl MazeSearch {
    /// Like [`render_overlay`], but painted in this search's
    /// [`SearchConfig::palette`](crate::SearchConfig::palette).
    pub fn render_overlay(&self, grid: &Raster, path: &Path) -> RgbImage {
        draw_path(&RgbImage::from_gray(grid), path.points(), &self.config.palette)
    }

    /// [`draw_path`] in the configured palette.
    pub fn draw_path(&self, base: &RgbImage, points: &[Point]) -> RgbImage {
        draw_path(base, points, &self.config.palette)
    }

    /// Copy of `base` with the cells reached by the last search painted in
    /// the configured path colour.
    pub fn draw_explored(&self, base: &RgbImage) -> RgbImage {
        draw_explored(base, self.explored(), &self.config.palette)
    }
}

/// Colour of path `i` out of `n`. Red fades out and blue fades in across
/// the set, with green peaking in the middle.
fn ramp_color(i: usize, n: usize) -> Color {
    let (i, n) = (i as i64, n as i64);
    let r = (255 - 255 * (2 * i) / (n + 1)).max(0);
    let b = (255 * (3 + 2 * i - n) / (n + 1)).clamp(0, 255);
    let g = if i < n / 2 {
        (255 * 2 * i / (n + 1)).min(255)
    } else {
        (255 - 255 * (2 * i - n) / n).clamp(0, 255)
    };
    Color::from_rgb(r as u8, g as u8, b as u8)
}
