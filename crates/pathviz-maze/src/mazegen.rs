use pathviz_core::{GridAdapter, GridError, StepObserver};
use rand::Rng;

use crate::MazeAlgo;

/// Maze generator operating on any [`GridAdapter`].
///
/// The generator only holds the random source; the grid is borrowed for the
/// duration of each run.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new MazeGen drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Run `algo` on `grid`, reporting carved cells and placed walls to
    /// `obs`.
    ///
    /// The grid must have valid, distinct endpoints. Existing walls are left
    /// as they are; callers wanting a fresh maze clear them first.
    pub fn generate<G, O>(&mut self, algo: MazeAlgo, grid: &mut G, obs: &mut O) -> Result<(), GridError>
    where
        G: GridAdapter + ?Sized,
        O: StepObserver + ?Sized,
    {
        grid.endpoints()?;
        match algo {
            MazeAlgo::RecursiveBacktracking => self.recursive_backtracking(grid, obs)?,
            MazeAlgo::RecursiveDivision => self.recursive_division(grid, obs)?,
        }
        log::debug!("{algo}: generated on a {}x{} grid", grid.size().x, grid.size().y);
        Ok(())
    }
}
