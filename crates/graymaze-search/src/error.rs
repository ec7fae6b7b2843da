use std::fmt;

use graymaze_core::Point;

/// Reasons a maze search can fail.
///
/// A search either returns a complete minimal path or one of these; partial
/// paths are never produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The grid has no cells.
    InvalidGrid { width: usize, height: usize },
    /// A start or goal point lies outside the cells the search accepts.
    InvalidCoordinate {
        point: Point,
        width: usize,
        height: usize,
    },
    /// The start of a binary maze search is a wall cell.
    StartOnWall(Point),
    /// The frontier emptied before the goal was reached.
    Unreachable { start: Point, goal: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { width, height } => {
                write!(f, "search: invalid grid of size {width}x{height}")
            }
            Self::InvalidCoordinate {
                point,
                width,
                height,
            } => write!(
                f,
                "search: point {point} not valid for a {width}x{height} grid"
            ),
            Self::StartOnWall(p) => write!(f, "search: start {p} is not a background cell"),
            Self::Unreachable { start, goal } => {
                write!(f, "search: no path from {start} to {goal}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
