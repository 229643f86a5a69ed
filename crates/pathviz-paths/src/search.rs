use std::collections::HashMap;

use pathviz_core::{Adjacency, GridAdapter, GridError, Path, Point, StepObserver};

use crate::PathAlgo;
use crate::queue::{PriorityQueue, QueueEntry};

/// What a ranking function sees when a neighbor is pushed on a priority
/// frontier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Step {
    /// The neighbor being enqueued.
    pub(crate) cell: Point,
    /// Length in cells of the prefix it extends (start counts as 1).
    pub(crate) depth: i32,
    /// Priority the prefix was dequeued with.
    pub(crate) parent: i32,
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Coordinator for path searches on a [`GridAdapter`].
///
/// `PathSearch` owns the scratch neighbor buffer shared by all strategies
/// and counts the cells examined by the most recent run.
///
/// Every strategy works on path prefixes: frontier entries carry the full
/// path from the start. A neighbor equal to the end cell terminates the run
/// as soon as it is generated, and the end cell is never marked visited.
#[derive(Debug, Clone)]
pub struct PathSearch {
    pub(crate) nbuf: Vec<Point>,
    pub(crate) checked: usize,
}

impl Default for PathSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl PathSearch {
    /// Create a new `PathSearch`.
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(8),
            checked: 0,
        }
    }

    /// Number of cells examined by the last run.
    #[inline]
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Clear the grid's visited markers and run `algo`.
    pub fn run<G, O>(&mut self, algo: PathAlgo, grid: &mut G, obs: &mut O) -> Result<Path, GridError>
    where
        G: GridAdapter + ?Sized,
        O: StepObserver + ?Sized,
    {
        grid.clear_visited();
        let path = match algo {
            PathAlgo::AStar => self.astar(grid, obs),
            PathAlgo::Dijkstra => self.dijkstra(grid, obs),
            PathAlgo::BreadthFirst => self.breadth_first(grid, obs),
            PathAlgo::DepthFirst => self.depth_first(grid, obs),
            PathAlgo::GreedyBestFirst => self.greedy_best_first(grid, obs),
        }?;
        if path.is_empty() {
            log::debug!("{algo}: no path after checking {} cells", self.checked);
        } else {
            log::debug!(
                "{algo}: path of {} cells after checking {} cells",
                path.len(),
                self.checked
            );
        }
        Ok(path)
    }

    /// Validate the endpoints and reset the per-run counter.
    pub(crate) fn begin<G>(&mut self, grid: &G) -> Result<(Point, Point), GridError>
    where
        G: GridAdapter + ?Sized,
    {
        self.checked = 0;
        grid.endpoints()
    }

    /// Mark `p` visited and notify the observer.
    #[inline]
    pub(crate) fn visit<G, O>(&mut self, grid: &mut G, obs: &mut O, p: Point)
    where
        G: GridAdapter + ?Sized,
        O: StepObserver + ?Sized,
    {
        grid.mark_visited(p);
        obs.visited(p);
        self.checked += 1;
    }

    /// Shared loop of the priority-driven strategies.
    ///
    /// The frontier is a [`PriorityQueue`] of prefixes; the lowest priority
    /// prefix is expanded next and each extension is ranked by `rank`.
    ///
    /// Without `reopen` a cell is closed the moment it is first generated.
    /// With `reopen` a visited cell may be pushed again through a strictly
    /// shorter prefix, and prefixes superseded that way are dropped when
    /// dequeued. Visited markers and observer calls still happen once per
    /// cell either way.
    pub(crate) fn ranked_search<G, O>(
        &mut self,
        grid: &mut G,
        obs: &mut O,
        reopen: bool,
        rank: impl Fn(Step) -> i32,
    ) -> Result<Path, GridError>
    where
        G: GridAdapter + ?Sized,
        O: StepObserver + ?Sized,
    {
        let (start, end) = self.begin(grid)?;
        let filter = if reopen {
            Adjacency {
                ignore_blocked: true,
                ignore_visited: false,
            }
        } else {
            Adjacency::UNEXPLORED
        };

        let mut open: PriorityQueue<Path> = PriorityQueue::new();
        open.enqueue(vec![start], 0);
        // Shortest prefix length seen per cell, only tracked with `reopen`.
        let mut best: HashMap<Point, usize> = HashMap::new();

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(QueueEntry {
                item: prefix,
                priority,
            }) = open.dequeue_low()
            else {
                break 'search Vec::new();
            };
            let Some(&last) = prefix.last() else {
                continue;
            };
            if best.get(&last).is_some_and(|&len| len < prefix.len()) {
                continue;
            }

            nbuf.clear();
            grid.adjacent(last, filter, &mut nbuf);

            for &n in nbuf.iter() {
                if n == end {
                    let mut path = prefix;
                    path.push(end);
                    break 'search path;
                }
                if reopen {
                    let len = prefix.len() + 1;
                    if best.get(&n).is_some_and(|&b| b <= len) {
                        continue;
                    }
                    best.insert(n, len);
                }
                if !grid.cell(n).is_some_and(|c| c.visited) {
                    self.visit(grid, obs, n);
                }
                let p = rank(Step {
                    cell: n,
                    depth: prefix.len() as i32,
                    parent: priority,
                });
                let mut next = prefix.clone();
                next.push(n);
                open.enqueue(next, p);
            }
        };

        self.nbuf = nbuf;
        Ok(found)
    }
}

/// Run `algo` once with a fresh [`PathSearch`].
///
/// Visited markers are cleared first, so calling this twice on an unmodified
/// grid yields the same path.
pub fn find_path<G, O>(algo: PathAlgo, grid: &mut G, obs: &mut O) -> Result<Path, GridError>
where
    G: GridAdapter + ?Sized,
    O: StepObserver + ?Sized,
{
    PathSearch::new().run(algo, grid, obs)
}
