use pathviz_core::{GridAdapter, GridError, Point, StepObserver};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::MazeGen;

/// Two-cell jumps between lattice cells; the cell in between is the wall
/// that gets knocked out.
const JUMPS: [Point; 4] = [
    Point::new(2, 0),
    Point::new(-2, 0),
    Point::new(0, 2),
    Point::new(0, -2),
];

impl<R: Rng> MazeGen<R> {
    /// Carve a maze by randomized depth-first backtracking.
    ///
    /// Every cell but the start and end is blocked first. Starting from the
    /// start cell, a random jump to a still-blocked cell two steps away is
    /// taken, opening the target and the cell in between; when no jump is
    /// left the carve path backs up one cell. The end counts as a target
    /// until it has been joined once.
    ///
    /// Every cell on the start's parity lattice ends up connected to the
    /// start. An end cell off that lattice is joined only if a corridor
    /// happens to pass through it.
    pub fn recursive_backtracking<G, O>(&mut self, grid: &mut G, obs: &mut O) -> Result<(), GridError>
    where
        G: GridAdapter + ?Sized,
        O: StepObserver + ?Sized,
    {
        let (start, end) = grid.endpoints()?;
        grid.fill_blocked()?;

        let mut jumps = JUMPS;
        let mut path = vec![start];
        let mut end_joined = false;
        let mut carved = 0usize;

        while let Some(&cur) = path.last() {
            jumps.shuffle(&mut self.rng);
            let next = jumps.iter().map(|&d| (cur + d, cur + d / 2)).find(|&(t, _)| {
                t != start
                    && match grid.cell(t) {
                        Some(c) => c.blocked || (t == end && !end_joined),
                        None => false,
                    }
            });

            match next {
                Some((target, between)) => {
                    grid.set_blocked(between, false)?;
                    grid.set_blocked(target, false)?;
                    if target == end || between == end {
                        end_joined = true;
                    }
                    obs.carved(target);
                    path.push(target);
                    carved += 1;
                }
                None => {
                    path.pop();
                }
            }
        }

        log::trace!("backtracking: {carved} jumps carved, end joined: {end_joined}");
        Ok(())
    }
}
