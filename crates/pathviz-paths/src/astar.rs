use pathviz_core::{GridAdapter, GridError, Path, StepObserver};

use crate::PathSearch;
use crate::distance::manhattan;

impl PathSearch {
    /// Find a path from start to end using A*.
    ///
    /// Prefixes are ranked by `f = g + h`, where `g` is the prefix length in
    /// cells and `h` the Manhattan distance from the new cell to the end.
    /// Shortest in cardinal mode. In diagonal mode the heuristic is no longer
    /// admissible and the result may be longer than optimal.
    ///
    /// A cell already visited is pushed again when a shorter prefix reaches
    /// it, otherwise the first (possibly longer) prefix would win.
    ///
    /// Expects the grid's visited markers to be clear; [`PathSearch::run`]
    /// takes care of that. Returns an empty path when the end is
    /// unreachable.
    pub fn astar<G, O>(&mut self, grid: &mut G, obs: &mut O) -> Result<Path, GridError>
    where
        G: GridAdapter + ?Sized,
        O: StepObserver + ?Sized,
    {
        let (_, end) = grid.endpoints()?;
        self.ranked_search(grid, obs, true, |step| {
            step.depth + manhattan(step.cell, end)
        })
    }
}
