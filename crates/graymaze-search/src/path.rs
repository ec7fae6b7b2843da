use graymaze_core::Point;

use crate::traits::ElevationMap;

/// A minimal-cost route through a maze, ordered from start to goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub(crate) points: Vec<Point>,
    pub(crate) cost: u32,
}

impl Path {
    /// The visited cells, start first and goal last.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Cumulative cost of the route.
    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Number of cells, both endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Cost of moving between adjacent cells of elevations `from` and `to`.
///
/// Always at least 1, so every step makes progress.
#[inline]
pub fn step_cost(from: u8, to: u8) -> u32 {
    1 + u32::from(from.abs_diff(to))
}

/// Total cost of walking `points` on `grid`.
///
/// Returns `None` for an empty walk, a walk that leaves the grid, or one
/// containing a step that is not a single cardinal move.
pub fn path_cost<M: ElevationMap + ?Sized>(grid: &M, points: &[Point]) -> Option<u32> {
    let (first, rest) = points.split_first()?;
    let mut prev = (*first, grid.elevation(*first)?);
    let mut total: u32 = 0;
    for &p in rest {
        if !prev.0.is_adjacent(p) {
            return None;
        }
        let e = grid.elevation(p)?;
        total = total.saturating_add(step_cost(prev.1, e));
        prev = (p, e);
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graymaze_core::Raster;

    #[test]
    fn step_cost_is_one_plus_difference() {
        assert_eq!(step_cost(0, 0), 1);
        assert_eq!(step_cost(10, 3), 8);
        assert_eq!(step_cost(3, 10), 8);
        assert_eq!(step_cost(0, 255), 256);
    }

    #[test]
    fn path_cost_of_walks() {
        let g = Raster::from_rows(&[[0u8, 5, 0], [0, 0, 0]]).unwrap();
        let flat = [Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)];
        assert_eq!(path_cost(&g, &flat), Some(2));
        let over = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        assert_eq!(path_cost(&g, &over), Some(12));
        assert_eq!(path_cost(&g, &[Point::new(2, 1)]), Some(0));
        assert_eq!(path_cost(&g, &[]), None);
    }

    #[test]
    fn path_cost_rejects_bad_walks() {
        let g = Raster::new(3, 3);
        let diagonal = [Point::new(0, 0), Point::new(1, 1)];
        assert_eq!(path_cost(&g, &diagonal), None);
        let outside = [Point::new(2, 2), Point::new(3, 2)];
        assert_eq!(path_cost(&g, &outside), None);
    }

    #[test]
    fn path_accessors() {
        let path = Path {
            points: vec![Point::new(1, 1), Point::new(2, 1)],
            cost: 1,
        };
        assert_eq!(path.len(), 2);
        assert!(!path.is_empty());
        assert_eq!(path.start(), Some(Point::new(1, 1)));
        assert_eq!(path.goal(), Some(Point::new(2, 1)));
        assert_eq!((&path).into_iter().count(), 2);
        assert_eq!(path.into_points().len(), 2);
    }
}
