use pathviz_core::{GridAdapter, GridError, Path, StepObserver};

use crate::PathSearch;

impl PathSearch {
    /// Find a path from start to end using Dijkstra's algorithm.
    ///
    /// Every step costs 1, so each extension is ranked one above the prefix
    /// it came from. Equal ranks leave in insertion order, which makes the
    /// search expand in rings around the start and always return a shortest
    /// path.
    ///
    /// Expects the grid's visited markers to be clear. Returns an empty path
    /// when the end is unreachable.
    pub fn dijkstra<G, O>(&mut self, grid: &mut G, obs: &mut O) -> Result<Path, GridError>
    where
        G: GridAdapter + ?Sized,
        O: StepObserver + ?Sized,
    {
        self.ranked_search(grid, obs, false, |step| step.parent + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{Grid, Point, Recorder};

    #[test]
    fn straight_line_on_open_grid() {
        let mut g = Grid::with_endpoints(5, 5, Point::new(0, 2), Point::new(4, 2)).unwrap();
        let path = PathSearch::new().dijkstra(&mut g, &mut ()).unwrap();
        let expected: Vec<Point> = (0..5).map(|x| Point::new(x, 2)).collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn walled_off_end_gives_empty_path() {
        let mut g = Grid::parse("S#E").unwrap();
        let mut rec = Recorder::new();
        let mut search = PathSearch::new();
        let path = search.dijkstra(&mut g, &mut rec).unwrap();
        assert!(path.is_empty());
        assert_eq!(search.checked(), 0);
        assert!(rec.visited.is_empty());
    }

    #[test]
    fn floods_wider_than_astar() {
        let mut g = Grid::with_endpoints(15, 15, Point::new(0, 7), Point::new(14, 7)).unwrap();
        let mut search = PathSearch::new();
        let path = search.dijkstra(&mut g, &mut ()).unwrap();
        assert_eq!(path.len(), 15);
        let flooded = search.checked();

        g.clear_visited();
        search.astar(&mut g, &mut ()).unwrap();
        assert!(search.checked() < flooded);
    }
}
