use std::collections::VecDeque;

use graymaze_core::{Direction, Point};

use crate::background::nearest_background;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::maze::MazeSearch;
use crate::path::Path;
use crate::traits::ElevationMap;

impl MazeSearch {
    /// Shortest path through a binary maze by breadth-first search.
    ///
    /// Cells with value 0 are open; anything else is wall. Each step costs
    /// 1, so the returned cost is the number of moves. `start` must be an
    /// open cell with `0 < x < W` and `0 < y < H`. A `goal` on a wall is
    /// first moved to the nearest open cell within
    /// [`SearchConfig::snap_radius`]; the returned path ends at that cell.
    pub fn binary_path<M: ElevationMap + ?Sized>(
        &mut self,
        maze: &M,
        start: Point,
        goal: Point,
    ) -> Result<Path, SearchError> {
        self.prepare(maze)?;
        let si = self.interior_idx(start)?;
        if self.idx(goal).is_none() {
            return Err(self.invalid(goal));
        }
        if !maze.is_background(start) {
            return Err(SearchError::StartOnWall(start));
        }
        let goal = nearest_background(maze, goal, self.config.snap_radius).unwrap_or(goal);

        log::debug!(
            "binary search {start} -> {goal} on {}x{} maze",
            self.width,
            self.height
        );

        let mut queue: VecDeque<usize> = VecDeque::new();
        self.seen[si] = true;
        self.dist[si] = 0;
        queue.push_back(si);

        let mut found = false;
        while let Some(ci) = queue.pop_front() {
            let cp = self.point(ci);
            if cp == goal {
                found = true;
                break;
            }
            let next = self.dist[ci] + 1;
            for d in Direction::ALL {
                let np = cp.step(d);
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.seen[ni] {
                    continue;
                }
                self.seen[ni] = true;
                if !maze.is_background(np) {
                    continue;
                }
                self.dist[ni] = next;
                self.parent[ni] = Some(d.opposite());
                queue.push_back(ni);
            }
        }

        if !found {
            log::info!(
                "no path found from {start} to {goal}, {} cells explored",
                self.explored().count()
            );
            return Err(SearchError::Unreachable { start, goal });
        }

        let points = self.trace_back(start, goal)?;
        let cost = self.distance_at(goal);
        log::info!("path found from {start} to {goal}: {cost} steps");
        Ok(Path { points, cost })
    }
}

/// Shortest path through a binary maze, with fresh working maps and the
/// default [`SearchConfig`].
///
/// See [`MazeSearch::binary_path`].
pub fn search_binary<M: ElevationMap + ?Sized>(
    maze: &M,
    start: Point,
    goal: Point,
) -> Result<Path, SearchError> {
    MazeSearch::with_config(SearchConfig::default()).binary_path(maze, start, goal)
}
