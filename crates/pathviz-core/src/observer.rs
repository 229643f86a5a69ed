//! Step notifications emitted while an algorithm runs.
//!
//! Search and maze engines are synchronous. Anything that wants to animate
//! or pace a run (delays, redraws, counters) hooks in here instead.

use crate::geom::Point;

/// Receives one call per engine step.
///
/// Every method has an empty default, so `()` is the no-op observer used by
/// tests and headless callers.
pub trait StepObserver {
    /// A search examined `p` for the first time in this run.
    fn visited(&mut self, _p: Point) {}

    /// A maze generator opened `p`.
    fn carved(&mut self, _p: Point) {}

    /// A maze generator placed a wall over `cells`.
    fn wall(&mut self, _cells: &[Point]) {}
}

impl StepObserver for () {}

impl<O: StepObserver + ?Sized> StepObserver for &mut O {
    fn visited(&mut self, p: Point) {
        (**self).visited(p);
    }

    fn carved(&mut self, p: Point) {
        (**self).carved(p);
    }

    fn wall(&mut self, cells: &[Point]) {
        (**self).wall(cells);
    }
}

/// Observer that keeps every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    pub visited: Vec<Point>,
    pub carved: Vec<Point>,
    pub walls: Vec<Vec<Point>>,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepObserver for Recorder {
    fn visited(&mut self, p: Point) {
        self.visited.push(p);
    }

    fn carved(&mut self, p: Point) {
        self.carved.push(p);
    }

    fn wall(&mut self, cells: &[Point]) {
        self.walls.push(cells.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_order() {
        let mut rec = Recorder::new();
        rec.visited(Point::new(1, 0));
        rec.visited(Point::new(0, 1));
        rec.carved(Point::new(2, 2));
        rec.wall(&[Point::new(3, 0), Point::new(3, 1)]);
        assert_eq!(rec.visited, vec![Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(rec.carved, vec![Point::new(2, 2)]);
        assert_eq!(rec.walls.len(), 1);
        assert_eq!(rec.walls[0].len(), 2);
    }

    #[test]
    fn mut_ref_forwards() {
        fn notify<O: StepObserver>(mut obs: O) {
            obs.visited(Point::new(4, 4));
        }
        let mut rec = Recorder::new();
        notify(&mut rec);
        assert_eq!(rec.visited, vec![Point::new(4, 4)]);
    }
}
