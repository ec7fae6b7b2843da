use graymaze_core::{Direction, Point};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::traits::ElevationMap;

/// Sentinel value meaning "not reached" in the distance map.
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Frontier entry for the gray search
// ---------------------------------------------------------------------------

/// A heap entry: a cell index, the cumulative cost it was pushed with and
/// the elevation of that cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct QueueEntry {
    pub(crate) idx: usize,
    pub(crate) cost: u32,
    pub(crate) elevation: u8,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// MazeSearch
// ---------------------------------------------------------------------------

/// Owner of the working maps used by the maze searches.
///
/// Holds a distance map and a parent-direction map sized to the last grid
/// searched. Buffers are kept between calls, so repeated searches on grids
/// of the same or smaller size do not reallocate. After a search the maps
/// can be inspected with [`distance_at`](Self::distance_at) and
/// [`explored`](Self::explored).
#[derive(Debug, Default)]
pub struct MazeSearch {
    pub(crate) config: SearchConfig,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) dist: Vec<u32>,
    // Direction from each reached cell back to its parent; `None` at the
    // start and at unreached cells.
    pub(crate) parent: Vec<Option<Direction>>,
    // Binary search bookkeeping: cells already looked at, walls included.
    pub(crate) seen: Vec<bool>,
}

impl MazeSearch {
    /// Create a search with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search with the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration this search was created with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Distance-map value at `p` from the last search, or [`UNREACHABLE`]
    /// if `p` was not reached or lies outside the last grid.
    pub fn distance_at(&self, p: Point) -> u32 {
        match self.idx(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Cells reached by the last search, in row-major order.
    pub fn explored(&self) -> impl Iterator<Item = Point> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != UNREACHABLE)
            .map(|(i, _)| self.point(i))
    }

    // -----------------------------------------------------------------------
    // Shared helpers
    // -----------------------------------------------------------------------

    /// Reset the working maps for a grid of the given size.
    pub(crate) fn prepare<M: ElevationMap + ?Sized>(
        &mut self,
        grid: &M,
    ) -> Result<(), SearchError> {
        let (width, height) = (grid.width(), grid.height());
        if width == 0 || height == 0 {
            // Leave nothing from an earlier search behind.
            self.width = 0;
            self.height = 0;
            self.dist.clear();
            self.parent.clear();
            self.seen.clear();
            return Err(SearchError::InvalidGrid { width, height });
        }
        let len = width * height;
        self.width = width;
        self.height = height;
        self.dist.clear();
        self.dist.resize(len, UNREACHABLE);
        self.parent.clear();
        self.parent.resize(len, None);
        self.seen.clear();
        self.seen.resize(len, false);
        Ok(())
    }

    /// Index of a search endpoint, which must satisfy `0 < x < W` and
    /// `0 < y < H`.
    pub(crate) fn interior_idx(&self, p: Point) -> Result<usize, SearchError> {
        if p.x > 0 && p.y > 0 {
            if let Some(i) = self.idx(p) {
                return Ok(i);
            }
        }
        Err(self.invalid(p))
    }

    pub(crate) fn invalid(&self, p: Point) -> SearchError {
        SearchError::InvalidCoordinate {
            point: p,
            width: self.width,
            height: self.height,
        }
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Walk parent directions from `goal` back to `start`, returning the
    /// cells in start-to-goal order.
    pub(crate) fn trace_back(
        &self,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>, SearchError> {
        let mut points = Vec::new();
        let mut cur = goal;
        // A cell can appear at most once on a parent chain.
        let limit = self.dist.len();
        loop {
            points.push(cur);
            if cur == start {
                break;
            }
            let step = self
                .idx(cur)
                .and_then(|i| self.parent[i])
                .filter(|_| points.len() <= limit);
            let Some(d) = step else {
                return Err(SearchError::Unreachable { start, goal });
            };
            cur = cur.step(d);
            log::trace!("trace back to {cur}, dist = {}", self.distance_at(cur));
        }
        points.reverse();
        Ok(points)
    }
}
