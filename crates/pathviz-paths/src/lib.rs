//! Path search strategies over a pathviz grid.
//!
//! This crate finds a path from a grid's start cell to its end cell with one
//! of five strategies:
//!
//! - **A\*** ranked by prefix length plus Manhattan distance ([`PathSearch::astar`])
//! - **Dijkstra** with unit step cost ([`PathSearch::dijkstra`])
//! - **Breadth-first** over a FIFO of prefixes ([`PathSearch::breadth_first`])
//! - **Depth-first** growing a single backtracking path ([`PathSearch::depth_first`])
//! - **Greedy best-first** ranked by Manhattan distance alone ([`PathSearch::greedy_best_first`])
//!
//! All strategies run through [`PathSearch`], which reuses a neighbor buffer
//! and counts examined cells. Each examined cell is marked visited on the
//! grid and reported to a [`StepObserver`](pathviz_core::StepObserver) exactly
//! once; the end cell is never marked.
//!
//! | Strategy | Shortest path |
//! |---|---|
//! | A\* | yes, in cardinal mode |
//! | Dijkstra | yes |
//! | Breadth-first | yes |
//! | Depth-first | no |
//! | Greedy best-first | no |

mod algo;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod greedy;
mod queue;
mod search;

pub use algo::PathAlgo;
pub use distance::manhattan;
pub use queue::{PriorityQueue, QueueEntry};
pub use search::{PathSearch, find_path};
