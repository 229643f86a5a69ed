use std::collections::VecDeque;

use pathviz_core::{Adjacency, GridAdapter, GridError, Path, StepObserver};

use crate::PathSearch;

impl PathSearch {
    /// Find a path from start to end using breadth-first search.
    ///
    /// The frontier is a FIFO queue of prefixes, so cells are examined in
    /// order of distance from the start and the first path to reach the end
    /// is a shortest one.
    pub fn breadth_first<G, O>(&mut self, grid: &mut G, obs: &mut O) -> Result<Path, GridError>
    where
        G: GridAdapter + ?Sized,
        O: StepObserver + ?Sized,
    {
        let (start, end) = self.begin(grid)?;

        let mut queue: VecDeque<Path> = VecDeque::new();
        queue.push_back(vec![start]);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(prefix) = queue.pop_front() else {
                break 'search Vec::new();
            };
            let Some(&last) = prefix.last() else {
                continue;
            };

            nbuf.clear();
            grid.adjacent(last, Adjacency::UNEXPLORED, &mut nbuf);

            for &n in nbuf.iter() {
                if n == end {
                    let mut path = prefix;
                    path.push(end);
                    break 'search path;
                }
                self.visit(grid, obs, n);
                let mut next = prefix.clone();
                next.push(n);
                queue.push_back(next);
            }
        };

        self.nbuf = nbuf;
        Ok(found)
    }
}
