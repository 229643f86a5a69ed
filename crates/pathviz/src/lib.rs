//! **pathviz**: pathfinding and maze generation visualizer kernel.
//!
//! Re-exports the grid model from [`pathviz_core`], the search strategies
//! from [`pathviz_paths`] and the maze generators from [`pathviz_maze`], and
//! adds the caller-facing layer on top:
//!
//! - [`run_path_search`] / [`run_maze_generation`]: pick a strategy by name
//!   and run it on any [`GridAdapter`].
//! - [`Visualizer`]: a session owning a [`Grid`], paced by a [`Speed`].
//!
//! ```
//! use pathviz::{Speed, Visualizer, VisualizerConfig};
//!
//! let mut vis = Visualizer::new(VisualizerConfig {
//!     speed: Speed::Ludicrous,
//!     seed: Some(7),
//!     ..VisualizerConfig::default()
//! })?;
//! vis.generate_maze("Recursive Division")?;
//! let report = vis.find_path("A Star")?;
//! assert!(report.solution_length() > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Nothing here installs a logger; events go through the `log` facade.

mod config;
mod engine;
mod error;
mod pacing;
mod visualizer;

pub use config::VisualizerConfig;
pub use engine::{run_maze_generation, run_path_search};
pub use error::EngineError;
pub use pacing::{Pacer, Speed};
pub use visualizer::{SearchReport, Visualizer};

pub use pathviz_core::{
    Adjacency, Cell, Grid, GridAdapter, GridError, Path, Point, Range, Recorder, StepObserver,
    UnknownAlgo,
};
pub use pathviz_maze::{MazeAlgo, MazeGen};
pub use pathviz_paths::{PathAlgo, PathSearch, PriorityQueue, QueueEntry, find_path, manhattan};
