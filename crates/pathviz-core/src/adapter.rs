//! The [`GridAdapter`] contract the search and maze engines run against.

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::neighbors::{self, Adjacency};

/// Grid access needed by the engines.
///
/// Implementors provide storage access; neighbor enumeration, wall placement
/// and bulk marker operations come as provided methods built on top of it.
pub trait GridAdapter {
    /// The rectangle covered by the grid.
    fn bounds(&self) -> Range;

    /// The start cell, if the grid has one.
    fn start(&self) -> Option<Point>;

    /// The end cell, if the grid has one.
    fn end(&self) -> Option<Point>;

    /// Whether diagonal neighbors are enumerated.
    fn allow_diagonal(&self) -> bool;

    /// The cell at `p`, or `None` if out of bounds.
    fn cell(&self, p: Point) -> Option<&Cell>;

    /// Set the search-local visited marker. Out-of-bounds points are ignored.
    fn set_visited(&mut self, p: Point, visited: bool);

    /// Set the blocked flag of the cell at `p`.
    ///
    /// Blocking the start or end cell fails with
    /// [`GridError::EndpointConflict`].
    fn set_blocked(&mut self, p: Point, blocked: bool) -> Result<(), GridError>;

    /// Size as a `Point` (x = columns, y = rows).
    fn size(&self) -> Point {
        self.bounds().size()
    }

    /// Whether `p` is the start or the end cell.
    fn is_endpoint(&self, p: Point) -> bool {
        self.start() == Some(p) || self.end() == Some(p)
    }

    /// Return `(start, end)` after checking both exist, lie on the grid and
    /// differ.
    fn endpoints(&self) -> Result<(Point, Point), GridError> {
        let start = self.start().ok_or(GridError::MissingStart)?;
        let end = self.end().ok_or(GridError::MissingEnd)?;
        let bounds = self.bounds();
        if !bounds.contains(start) {
            return Err(GridError::OutOfBounds(start));
        }
        if !bounds.contains(end) {
            return Err(GridError::OutOfBounds(end));
        }
        if start == end {
            return Err(GridError::StartIsEnd(start));
        }
        Ok((start, end))
    }

    /// Append the neighbors of `p` that pass `filter` into `buf`.
    ///
    /// The caller clears `buf` before calling. Out-of-bounds cells and the
    /// start cell are never returned.
    fn adjacent(&self, p: Point, filter: Adjacency, buf: &mut Vec<Point>) {
        let start = self.start();
        for &d in neighbors::directions(self.allow_diagonal()) {
            let n = p + d;
            let Some(cell) = self.cell(n) else {
                continue;
            };
            if filter.ignore_blocked && cell.blocked {
                continue;
            }
            if filter.ignore_visited && cell.visited {
                continue;
            }
            if Some(n) == start {
                continue;
            }
            buf.push(n);
        }
    }

    /// Mark `p` as examined by the current run.
    fn mark_visited(&mut self, p: Point) {
        self.set_visited(p, true);
    }

    /// Reset every visited marker before a new run.
    fn clear_visited(&mut self) {
        for p in self.bounds() {
            self.set_visited(p, false);
        }
    }

    /// Block every cell of a wall, leaving the start and end cells open.
    ///
    /// All cells are checked before anything is mutated: a point outside the
    /// grid fails the whole wall with [`GridError::OutOfBounds`]. Returns the
    /// number of cells blocked.
    fn block_wall(&mut self, cells: &[Point]) -> Result<usize, GridError> {
        if let Some(&p) = cells.iter().find(|&&p| self.cell(p).is_none()) {
            log::warn!("wall of {} cells rejected: {p} is off the grid", cells.len());
            return Err(GridError::OutOfBounds(p));
        }
        let mut n = 0;
        for &p in cells {
            if self.is_endpoint(p) {
                continue;
            }
            self.set_blocked(p, true)?;
            n += 1;
        }
        Ok(n)
    }

    /// Block every cell except the start and end.
    fn fill_blocked(&mut self) -> Result<(), GridError> {
        for p in self.bounds() {
            if !self.is_endpoint(p) {
                self.set_blocked(p, true)?;
            }
        }
        Ok(())
    }
}
