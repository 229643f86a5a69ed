//! Name-based entry points, the way a strategy picker drives the engines.

use pathviz_core::{GridAdapter, Path, StepObserver};
use pathviz_maze::{MazeAlgo, MazeGen};
use pathviz_paths::{PathAlgo, find_path};
use rand::Rng;

use crate::EngineError;

/// Run the path search strategy called `name` on `grid`.
///
/// `name` is a strategy label such as `"A Star"` or a short name such as
/// `"bfs"`. Visited markers are cleared before the run. An empty path means
/// the end is unreachable.
pub fn run_path_search<G, O>(name: &str, grid: &mut G, obs: &mut O) -> Result<Path, EngineError>
where
    G: GridAdapter + ?Sized,
    O: StepObserver + ?Sized,
{
    let algo: PathAlgo = name.parse()?;
    Ok(find_path(algo, grid, obs)?)
}

/// Run the maze generator called `name` on `grid`, drawing from `rng`.
pub fn run_maze_generation<G, R, O>(
    name: &str,
    grid: &mut G,
    rng: &mut R,
    obs: &mut O,
) -> Result<(), EngineError>
where
    G: GridAdapter + ?Sized,
    R: Rng,
    O: StepObserver + ?Sized,
{
    let algo: MazeAlgo = name.parse()?;
    MazeGen::with_rng(rng).generate(algo, grid, obs)?;
    Ok(())
}
