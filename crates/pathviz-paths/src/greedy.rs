use pathviz_core::{GridAdapter, GridError, Path, StepObserver};

use crate::PathSearch;
use crate::distance::manhattan;

impl PathSearch {
    /// Find a path from start to end using greedy best-first search.
    ///
    /// Prefixes are ranked by the Manhattan distance from their last cell to
    /// the end and nothing else. Fast to reach the end on open grids, but the
    /// path is not guaranteed to be shortest.
    pub fn greedy_best_first<G, O>(&mut self, grid: &mut G, obs: &mut O) -> Result<Path, GridError>
    where
        G: GridAdapter + ?Sized,
        O: StepObserver + ?Sized,
    {
        let (_, end) = grid.endpoints()?;
        self.ranked_search(grid, obs, false, |step| manhattan(step.cell, end))
    }
}
