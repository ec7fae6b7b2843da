//! Least-cost path search over raster mazes.
//!
//! A maze is any rectangular grid of 8-bit values read through
//! [`ElevationMap`]. Two searches are provided:
//!
//! - **Gray maze** ([`search`], [`MazeSearch::gray_path`]): Dijkstra over
//!   4-connected cells where a step costs `1 + |Δelevation|`.
//! - **Binary maze** ([`search_binary`], [`MazeSearch::binary_path`]):
//!   breadth-first search over open (zero) cells, walls impassable.
//!
//! Both return a [`Path`] ordered from start to goal together with its
//! cost. [`MazeSearch`] keeps its distance and parent-direction maps between
//! calls, so repeated searches reuse buffers and the last search can be
//! inspected afterwards.
//!
//! The [`overlay`] module paints paths onto RGB copies of a maze.
//!
//! ```
//! use graymaze_core::{Point, Raster};
//!
//! let grid = Raster::new(5, 5);
//! let path = graymaze_search::search(&grid, Point::new(1, 1), Point::new(3, 3)).unwrap();
//! assert_eq!(path.cost(), 4);
//! assert_eq!(path.len(), 5);
//! ```

mod background;
mod binary;
mod config;
mod error;
mod gray;
mod maze;
pub mod overlay;
mod path;
mod traits;

pub use background::nearest_background;
pub use binary::search_binary;
pub use config::{DEFAULT_SNAP_RADIUS, Palette, SearchConfig};
pub use error::SearchError;
pub use gray::search;
pub use maze::{MazeSearch, UNREACHABLE};
pub use overlay::{draw_explored, draw_path, draw_paths, render_overlay};
pub use path::{Path, path_cost, step_cost};
pub use traits::ElevationMap;
