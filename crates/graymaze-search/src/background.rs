use graymaze_core::{Point, Range};

use crate::traits::ElevationMap;

/// Find an open (value 0) cell near `p` in a binary maze.
///
/// Returns `p` itself if it is open. Otherwise scans square rings of
/// Chebyshev radius `1..max_radius` around `p`, each ring row by row from the
/// top, and returns the first open cell. Rings are clipped to the grid.
pub fn nearest_background<M: ElevationMap + ?Sized>(
    maze: &M,
    p: Point,
    max_radius: u32,
) -> Option<Point> {
    if maze.is_background(p) {
        return Some(p);
    }
    let bounds = maze.bounds();
    // No grid cell lies beyond the ring through the farthest corner.
    let reach = |v: i32, lo: i32, hi: i32| {
        v.saturating_sub(lo)
            .saturating_abs()
            .max(v.saturating_sub(hi - 1).saturating_abs())
    };
    let far_x = reach(p.x, bounds.min.x, bounds.max.x);
    let far_y = reach(p.y, bounds.min.y, bounds.max.y);
    let limit = far_x.max(far_y).saturating_add(1);
    let max_radius = i32::try_from(max_radius).unwrap_or(i32::MAX).min(limit);
    for r in 1..max_radius {
        let found = Range::around(p, r)
            .intersect(bounds)
            .iter()
            .filter(|q| (q.x - p.x).abs() == r || (q.y - p.y).abs() == r)
            .find(|&q| maze.is_background(q));
        if found.is_some() {
            return found;
        }
    }
    None
}
