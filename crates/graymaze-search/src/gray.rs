use std::collections::BinaryHeap;

use graymaze_core::{Direction, Point};

use crate::error::SearchError;
use crate::maze::{MazeSearch, QueueEntry};
use crate::path::{Path, step_cost};
use crate::traits::ElevationMap;

impl MazeSearch {
    /// Least-cost 4-connected path from `start` to `goal` over a grayscale
    /// elevation grid.
    ///
    /// Moving between neighbours costs `1 + |Δelevation|`. Both endpoints
    /// must satisfy `0 < x < W` and `0 < y < H`. The search stops as soon
    /// as the goal leaves the frontier. Among several paths of equal cost,
    /// which one is returned is unspecified; the cost is not.
    pub fn gray_path<M: ElevationMap + ?Sized>(
        &mut self,
        grid: &M,
        start: Point,
        goal: Point,
    ) -> Result<Path, SearchError> {
        self.prepare(grid)?;
        let si = self.interior_idx(start)?;
        let gi = self.interior_idx(goal)?;
        let start_elevation = grid.elevation(start).ok_or_else(|| self.invalid(start))?;

        log::debug!(
            "gray search {start} -> {goal} on {}x{} grid",
            self.width,
            self.height
        );

        self.dist[si] = 0;
        if si == gi {
            return Ok(Path {
                points: vec![start],
                cost: 0,
            });
        }

        let mut open: BinaryHeap<QueueEntry> = BinaryHeap::new();
        open.push(QueueEntry {
            idx: si,
            cost: 0,
            elevation: start_elevation,
        });

        let found = loop {
            let Some(current) = open.pop() else {
                break false;
            };
            if current.idx == gi {
                break true;
            }
            // Skip stale entries.
            if current.cost > self.dist[current.idx] {
                continue;
            }

            let cp = self.point(current.idx);
            for d in Direction::ALL {
                let np = cp.step(d);
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let Some(e) = grid.elevation(np) else {
                    continue;
                };
                let tentative = current
                    .cost
                    .saturating_add(step_cost(current.elevation, e));
                if tentative >= self.dist[ni] {
                    continue;
                }
                self.dist[ni] = tentative;
                self.parent[ni] = Some(d.opposite());
                open.push(QueueEntry {
                    idx: ni,
                    cost: tentative,
                    elevation: e,
                });
            }
        };

        if !found {
            log::info!("no path found from {start} to {goal}");
            return Err(SearchError::Unreachable { start, goal });
        }

        let points = self.trace_back(start, goal)?;
        let cost = self.dist[gi];
        log::info!(
            "path found from {start} to {goal}: {} cells, cost {cost}",
            points.len()
        );
        Ok(Path { points, cost })
    }
}

/// Least-cost path over a grayscale elevation grid, with fresh working maps.
///
/// See [`MazeSearch::gray_path`].
pub fn search<M: ElevationMap + ?Sized>(
    grid: &M,
    start: Point,
    goal: Point,
) -> Result<Path, SearchError> {
    MazeSearch::new().gray_path(grid, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::UNREACHABLE;
    use crate::path::path_cost;
    use graymaze_core::{Range, Raster};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn manhattan(a: Point, b: Point) -> u32 {
        a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
    }

    fn assert_valid_path(grid: &Raster, path: &Path, start: Point, goal: Point) {
        assert_eq!(path.start(), Some(start));
        assert_eq!(path.goal(), Some(goal));
        assert_eq!(path_cost(grid, path.points()), Some(path.cost()));
    }

    /// Exhaustive minimum over all simple 4-connected walks costing less
    /// than `bound`; returns `bound` when there is none.
    fn brute_force_cost(grid: &Raster, start: Point, goal: Point, bound: u32) -> u32 {
        fn walk(
            grid: &Raster,
            cur: Point,
            goal: Point,
            acc: u32,
            seen: &mut [bool],
            best: &mut u32,
        ) {
            if acc >= *best {
                return;
            }
            if cur == goal {
                *best = acc;
                return;
            }
            let ce = grid.get(cur).unwrap();
            for np in cur.neighbors_4() {
                let Some(i) = grid.index(np) else {
                    continue;
                };
                if seen[i] {
                    continue;
                }
                seen[i] = true;
                let ne = grid.get(np).unwrap();
                walk(grid, np, goal, acc + step_cost(ce, ne), seen, best);
                seen[i] = false;
            }
        }
        let mut seen = vec![false; grid.width() * grid.height()];
        seen[grid.index(start).unwrap()] = true;
        let mut best = bound;
        walk(grid, start, goal, 0, &mut seen, &mut best);
        best
    }

    #[test_log::test]
    fn zero_grid_manhattan_scenario() {
        let grid = Raster::new(5, 5);
        let (start, goal) = (Point::new(1, 1), Point::new(3, 3));
        let path = search(&grid, start, goal).unwrap();
        assert_eq!(path.cost(), 4);
        assert_eq!(path.len(), 5);
        assert_valid_path(&grid, &path, start, goal);
    }

    #[test]
    fn uniform_grid_cost_is_manhattan() {
        let mut rng = StdRng::seed_from_u64(11);
        for level in [0u8, 17, 255] {
            let grid = Raster::filled(9, 7, level);
            for _ in 0..20 {
                let start = Point::new(rng.random_range(1..9), rng.random_range(1..7));
                let goal = Point::new(rng.random_range(1..9), rng.random_range(1..7));
                let path = search(&grid, start, goal).unwrap();
                assert_eq!(path.cost(), manhattan(start, goal));
                assert_eq!(path.len() as u32, manhattan(start, goal) + 1);
                assert_valid_path(&grid, &path, start, goal);
            }
        }
    }

    #[test]
    fn same_start_and_goal() {
        let grid = Raster::filled(4, 4, 9);
        for p in Range::new(1, 1, 4, 4) {
            let path = search(&grid, p, p).unwrap();
            assert_eq!(path.points(), &[p]);
            assert_eq!(path.cost(), 0);
        }
    }

    #[test]
    fn matches_brute_force_on_small_grids() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..12 {
            let mut grid = Raster::new(5, 5);
            grid.fill_fn(|_| rng.random_range(0..6u8) * 10);
            let start = Point::new(rng.random_range(1..5), rng.random_range(1..5));
            let goal = Point::new(rng.random_range(1..5), rng.random_range(1..5));
            let path = search(&grid, start, goal).unwrap();
            assert_valid_path(&grid, &path, start, goal);
            // No simple walk is cheaper than the returned path.
            assert_eq!(
                brute_force_cost(&grid, start, goal, path.cost()),
                path.cost()
            );
        }
    }

    #[test]
    fn wall_detour_scenario() {
        // A wall of 100 across row 2 except for a gap at column 4.
        let mut grid = Raster::new(5, 5);
        grid.fill_range(Range::new(0, 2, 4, 3), 100);
        let (start, goal) = (Point::new(1, 1), Point::new(1, 3));
        let path = search(&grid, start, goal).unwrap();
        // Going over the wall costs 101 + 101; the detour through the gap
        // costs 3 + 2 + 3 = 8.
        assert_eq!(path.cost(), 8);
        assert!(path.iter().all(|&p| grid.get(p) == Some(0)));
        assert!(path.points().contains(&Point::new(4, 2)));
        assert_valid_path(&grid, &path, start, goal);
    }

    #[test]
    fn pays_for_a_cheap_wall() {
        // A full-width ridge of height 1 must be crossed.
        let mut grid = Raster::new(5, 5);
        grid.fill_range(Range::new(0, 2, 5, 3), 1);
        let path = search(&grid, Point::new(1, 1), Point::new(1, 3)).unwrap();
        assert_eq!(path.cost(), 4);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn cost_is_monotone_under_elevation_increase() {
        let (start, goal) = (Point::new(1, 2), Point::new(5, 2));
        let mut last = 0;
        for h in [0u8, 1, 2, 5, 50, 200] {
            // Channel along row 2; raising (3, 2) increases the only
            // straight route's cost.
            let mut grid = Raster::filled(7, 5, 3);
            grid.fill_range(Range::new(1, 2, 6, 3), 0);
            grid.set(Point::new(3, 2), h);
            let cost = search(&grid, start, goal).unwrap().cost();
            assert!(cost >= last, "cost {cost} dropped below {last} at h = {h}");
            last = cost;
        }
    }

    #[test]
    fn repeated_search_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Raster::new(12, 9);
        grid.fill_fn(|_| rng.random_range(0..=255u8));
        let mut ms = MazeSearch::new();
        let (start, goal) = (Point::new(1, 1), Point::new(10, 7));
        let a = ms.gray_path(&grid, start, goal).unwrap();
        let b = ms.gray_path(&grid, start, goal).unwrap();
        assert_eq!(a.cost(), b.cost());
        assert_eq!(a.cost(), search(&grid, start, goal).unwrap().cost());
    }

    #[test]
    fn independent_searches_share_a_grid() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Raster::new(16, 16);
        grid.fill_fn(|_| rng.random_range(0..=255u8));
        let goals = [Point::new(14, 14), Point::new(1, 14), Point::new(14, 1)];
        let costs: Vec<u32> = std::thread::scope(|s| {
            let handles: Vec<_> = goals
                .iter()
                .map(|&g| {
                    let grid = &grid;
                    s.spawn(move || search(grid, Point::new(1, 1), g).unwrap().cost())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for (g, c) in goals.iter().zip(costs) {
            assert_eq!(search(&grid, Point::new(1, 1), *g).unwrap().cost(), c);
        }
    }

    #[test]
    fn distance_map_after_search() {
        let grid = Raster::new(6, 6);
        let mut ms = MazeSearch::new();
        let path = ms.gray_path(&grid, Point::new(1, 1), Point::new(4, 1)).unwrap();
        assert_eq!(ms.distance_at(Point::new(1, 1)), 0);
        assert_eq!(ms.distance_at(Point::new(4, 1)), path.cost());
        assert_eq!(ms.distance_at(Point::new(2, 1)), 1);
        assert_eq!(ms.distance_at(Point::new(-1, 1)), UNREACHABLE);
        assert!(ms.explored().count() >= path.len());
    }

    #[test]
    fn border_cells_are_traversed() {
        // Row 0 and column 0 cannot be endpoints but can be walked through.
        let mut grid = Raster::filled(5, 5, 200);
        grid.fill_range(Range::new(0, 0, 5, 1), 0);
        grid.set(Point::new(1, 1), 0);
        grid.set(Point::new(3, 1), 0);
        let path = search(&grid, Point::new(1, 1), Point::new(3, 1)).unwrap();
        assert_eq!(path.cost(), 4);
        assert!(path.points().contains(&Point::new(2, 0)));
    }

    #[test]
    fn rejects_invalid_input() {
        let grid = Raster::new(5, 5);
        assert_eq!(
            search(&Raster::new(0, 0), Point::new(1, 1), Point::new(1, 1)),
            Err(SearchError::InvalidGrid {
                width: 0,
                height: 0
            })
        );
        for bad in [
            Point::new(0, 2),
            Point::new(2, 0),
            Point::new(5, 2),
            Point::new(2, 5),
            Point::new(-3, 2),
        ] {
            assert_eq!(
                search(&grid, bad, Point::new(2, 2)),
                Err(SearchError::InvalidCoordinate {
                    point: bad,
                    width: 5,
                    height: 5
                })
            );
            assert!(matches!(
                search(&grid, Point::new(2, 2), bad),
                Err(SearchError::InvalidCoordinate { .. })
            ));
        }
        // Single-column grid has no valid endpoints.
        assert!(search(&Raster::new(1, 5), Point::new(0, 1), Point::new(0, 2)).is_err());
    }

    /// An elevation map whose cells around `goal` cannot be entered.
    struct Moat {
        inner: Raster,
        moat: Range,
        goal: Point,
    }

    impl ElevationMap for Moat {
        fn width(&self) -> usize {
            self.inner.width()
        }

        fn height(&self) -> usize {
            self.inner.height()
        }

        fn elevation(&self, p: Point) -> Option<u8> {
            if self.moat.contains(p) && p != self.goal {
                None
            } else {
                self.inner.get(p)
            }
        }
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let goal = Point::new(4, 4);
        let grid = Moat {
            inner: Raster::new(7, 7),
            moat: Range::new(3, 3, 6, 6),
            goal,
        };
        let start = Point::new(1, 1);
        let mut ms = MazeSearch::new();
        assert_eq!(
            ms.gray_path(&grid, start, goal),
            Err(SearchError::Unreachable { start, goal })
        );
        assert_eq!(ms.distance_at(goal), UNREACHABLE);
        assert!(ms.explored().all(|p| !grid.moat.contains(p)));
        assert_eq!(ms.explored().count(), 49 - 9);
    }
}
