//! Maze generators for pathviz grids.
//!
//! Provides two generators:
//! - **Recursive backtracking**: fills the grid with walls, then carves a
//!   spanning tree of corridors two cells at a time from the start cell.
//! - **Recursive division**: repeatedly bisects open regions with a wall
//!   that has a single opening.
//!
//! Both run through [`MazeGen`], which owns the random source. The start and
//! end cells are never blocked.

mod algo;
mod backtracking;
mod division;
mod mazegen;

pub use algo::MazeAlgo;
pub use mazegen::MazeGen;
