use pathviz_core::{Adjacency, GridAdapter, GridError, Path, StepObserver};

use crate::PathSearch;

impl PathSearch {
    /// Find a path from start to end using depth-first search.
    ///
    /// A single path is grown by always stepping to the first unexplored
    /// neighbor of its last cell. At a dead end the last cell is dropped and
    /// the search resumes from the one before it; once the start itself is
    /// dropped there is no path. The result is rarely shortest.
    pub fn depth_first<G, O>(&mut self, grid: &mut G, obs: &mut O) -> Result<Path, GridError>
    where
        G: GridAdapter + ?Sized,
        O: StepObserver + ?Sized,
    {
        let (start, end) = self.begin(grid)?;

        let mut path: Path = vec![start];
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(&last) = path.last() {
            nbuf.clear();
            grid.adjacent(last, Adjacency::UNEXPLORED, &mut nbuf);
            match nbuf.first() {
                Some(&n) if n == end => {
                    path.push(end);
                    break;
                }
                Some(&n) => {
                    self.visit(grid, obs, n);
                    path.push(n);
                }
                None => {
                    path.pop();
                }
            }
        }

        self.nbuf = nbuf;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{Grid, Point, Recorder};

    #[test]
    fn prefers_the_first_direction() {
        // Right is tried first, so the open row is followed straight through.
        let mut g = Grid::with_endpoints(5, 3, Point::new(0, 1), Point::new(4, 1)).unwrap();
        let path = PathSearch::new().depth_first(&mut g, &mut ()).unwrap();
        let expected: Vec<Point> = (0..5).map(|x| Point::new(x, 1)).collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn backs_out_of_a_dead_end() {
        let mut g = Grid::parse(
            "\
S...
.###
....
###E",
        )
        .unwrap();
        let mut rec = Recorder::new();
        let path = PathSearch::new().depth_first(&mut g, &mut rec).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
                Point::new(3, 2),
                Point::new(3, 3),
            ]
        );
        // The top corridor was explored before being abandoned.
        assert_eq!(&rec.visited[..3], &[Point::new(1, 0), Point::new(2, 0), Point::new(3, 0)]);
        assert!(g.at(Point::new(3, 0)).unwrap().visited);
    }

    #[test]
    fn unreachable_end_empties_the_path() {
        let mut g = Grid::parse(
            "\
S..
.##
.#E",
        )
        .unwrap();
        let mut rec = Recorder::new();
        let path = PathSearch::new().depth_first(&mut g, &mut rec).unwrap();
        assert!(path.is_empty());
        assert_eq!(rec.visited.len(), 4);
    }
}
