//! **graymaze-core**: core types for raster maze search.
//!
//! This crate provides the foundational types used across the *graymaze*
//! workspace: geometry primitives, a dense 8-bit raster that serves both as
//! an elevation map and as a binary maze, and an RGB image for path
//! overlays.

pub mod geom;
pub mod image;
pub mod raster;

pub use geom::{Direction, Point, Range};
pub use image::{Color, RgbImage};
pub use raster::{Raster, RasterError};
