//! **pathviz-core**: grid model shared by the pathviz search and maze
//! engines.
//!
//! This crate provides geometry primitives, the [`Cell`] record, the dense
//! [`Grid`], and the [`GridAdapter`] contract every engine runs against,
//! together with the [`StepObserver`] hook used to pace or record a run.

pub mod adapter;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod neighbors;
pub mod observer;

pub use adapter::GridAdapter;
pub use cell::Cell;
pub use error::{GridError, UnknownAlgo, algo_key};
pub use geom::{Point, Range};
pub use grid::Grid;
pub use neighbors::{Adjacency, DIRECTIONS};
pub use observer::{Recorder, StepObserver};

/// An ordered sequence of cells from start to end inclusive.
///
/// An empty path means the search finished without reaching the end.
pub type Path = Vec<Point>;
