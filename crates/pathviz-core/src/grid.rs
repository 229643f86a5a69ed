//! The [`Grid`] type: a dense row-major array of [`Cell`] records.
//!
//! The grid owns every cell; algorithms address cells by [`Point`] through
//! the [`GridAdapter`] implementation and never hold cell copies.

use std::fmt;

use crate::adapter::GridAdapter;
use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A `columns × rows` grid with exactly one start and one end cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Point,
    end: Point,
    allow_diagonal: bool,
}

/// Initial endpoint placement: middle row, a quarter in from each side.
fn default_endpoints(columns: i32, rows: i32) -> (Point, Point) {
    let row = rows / 2;
    let start = Point::new(columns / 4, row);
    let mut end = Point::new(columns - (columns + 3) / 4, row);
    if end == start {
        // Single column: fall back to the last cell, or the first one.
        end = Point::new(columns - 1, rows - 1);
        if end == start {
            end = Point::ZERO;
        }
    }
    (start, end)
}

fn check_size(columns: i32, rows: i32) -> Result<(), GridError> {
    if columns < 1 || rows < 1 || (columns as i64) * (rows as i64) < 2 {
        return Err(GridError::InvalidSize { columns, rows });
    }
    Ok(())
}

impl Grid {
    /// Create an open grid with the start and end placed on the middle row.
    pub fn new(columns: i32, rows: i32) -> Result<Self, GridError> {
        check_size(columns, rows)?;
        let (start, end) = default_endpoints(columns, rows);
        Self::with_endpoints(columns, rows, start, end)
    }

    /// Create an open grid with explicit endpoints.
    pub fn with_endpoints(
        columns: i32,
        rows: i32,
        start: Point,
        end: Point,
    ) -> Result<Self, GridError> {
        check_size(columns, rows)?;
        let bounds = Range::sized(columns, rows);
        for p in [start, end] {
            if !bounds.contains(p) {
                return Err(GridError::OutOfBounds(p));
            }
        }
        if start == end {
            return Err(GridError::StartIsEnd(start));
        }
        Ok(Self {
            cells: vec![Cell::OPEN; bounds.len()],
            bounds,
            start,
            end,
            allow_diagonal: false,
        })
    }

    /// Build a grid from an ASCII layout.
    ///
    /// `#` is a blocked cell, `.` an open one, `S` the start and `E` the end.
    /// Every line must have the same width. Leading and trailing whitespace
    /// of the whole string is trimmed, individual lines are not.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut width: Option<usize> = None;
        let mut blocked = Vec::new();
        let mut start = None;
        let mut end = None;
        let mut rows = 0;

        for (y, line) in s.lines().enumerate() {
            let mut x = 0;
            for ch in line.chars() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    '#' => blocked.push(pos),
                    '.' => {}
                    'S' => {
                        if start.replace(pos).is_some() {
                            return Err(GridError::DuplicateEndpoint { ch, pos });
                        }
                    }
                    'E' => {
                        if end.replace(pos).is_some() {
                            return Err(GridError::DuplicateEndpoint { ch, pos });
                        }
                    }
                    _ => return Err(GridError::InvalidChar { ch, pos }),
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(GridError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let columns = width.unwrap_or(0) as i32;
        check_size(columns, rows)?;
        let start = start.ok_or(GridError::MissingStart)?;
        let end = end.ok_or(GridError::MissingEnd)?;
        let mut grid = Self::with_endpoints(columns, rows, start, end)?;
        for p in blocked {
            grid.set_blocked(p, true)?;
        }
        Ok(grid)
    }

    /// Convert a point to a flat index. Returns `None` if out of range.
    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width() + p.x) as usize)
    }

    /// Number of columns.
    pub fn columns(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is on the grid and not blocked.
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// Toggle 4- vs 8-neighbor adjacency.
    pub fn set_allow_diagonal(&mut self, allow: bool) {
        self.allow_diagonal = allow;
    }

    /// Move the start cell. It cannot land on a blocked cell or the end.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        self.check_endpoint_target(p, self.end)?;
        self.start = p;
        Ok(())
    }

    /// Move the end cell. It cannot land on a blocked cell or the start.
    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        self.check_endpoint_target(p, self.start)?;
        self.end = p;
        Ok(())
    }

    fn check_endpoint_target(&self, p: Point, other: Point) -> Result<(), GridError> {
        let cell = self.at(p).ok_or(GridError::OutOfBounds(p))?;
        if p == other {
            return Err(GridError::EndpointConflict(p));
        }
        if cell.blocked {
            return Err(GridError::Blocked(p));
        }
        Ok(())
    }

    /// Flip the blocked flag of a non-endpoint cell, returning the new value.
    pub fn toggle_blocked(&mut self, p: Point) -> Result<bool, GridError> {
        let blocked = !self.at(p).ok_or(GridError::OutOfBounds(p))?.blocked;
        self.set_blocked(p, blocked)?;
        Ok(blocked)
    }

    /// Clear visited and in-path markers left by a previous search.
    pub fn clear_path(&mut self) {
        for c in self.cells.iter_mut() {
            c.visited = false;
            c.in_path = false;
        }
    }

    /// Unblock every cell.
    pub fn clear_blocks(&mut self) {
        for c in self.cells.iter_mut() {
            c.blocked = false;
        }
    }

    /// Restore every cell to its default and put the endpoints back in their
    /// initial places.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::OPEN);
        let (start, end) = default_endpoints(self.columns(), self.rows());
        self.start = start;
        self.end = end;
    }

    /// Replace the grid with an open one of a new size, keeping the
    /// adjacency mode.
    pub fn resize(&mut self, columns: i32, rows: i32) -> Result<(), GridError> {
        let allow_diagonal = self.allow_diagonal;
        *self = Self::new(columns, rows)?;
        self.allow_diagonal = allow_diagonal;
        log::debug!("grid resized to {columns}x{rows}");
        Ok(())
    }

    /// Flag every cell of `path` as part of the found path.
    pub fn mark_path(&mut self, path: &[Point]) {
        for &p in path {
            if let Some(i) = self.index(p) {
                self.cells[i].in_path = true;
            }
        }
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, Cell) -> bool) -> usize {
        self.iter().filter(|&(p, c)| f(p, c)).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl GridAdapter for Grid {
    fn bounds(&self) -> Range {
        self.bounds
    }

    fn start(&self) -> Option<Point> {
        Some(self.start)
    }

    fn end(&self) -> Option<Point> {
        Some(self.end)
    }

    fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    fn set_visited(&mut self, p: Point, visited: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i].visited = visited;
        }
    }

    fn set_blocked(&mut self, p: Point, blocked: bool) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        if blocked && (p == self.start || p == self.end) {
            return Err(GridError::EndpointConflict(p));
        }
        self.cells[i].blocked = blocked;
        Ok(())
    }

    fn clear_visited(&mut self) {
        for c in self.cells.iter_mut() {
            c.visited = false;
        }
    }
}

impl fmt::Display for Grid {
    /// Render as ASCII: `S`/`E` endpoints, `#` blocked, `*` path, `+`
    /// visited, `.` open.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.columns() {
                let p = Point::new(x, y);
                let ch = if p == self.start {
                    'S'
                } else if p == self.end {
                    'E'
                } else {
                    match self.at(p) {
                        Some(c) if c.blocked => '#',
                        Some(c) if c.in_path => '*',
                        Some(c) if c.visited => '+',
                        _ => '.',
                    }
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLED: &str = "\
S.#..
..#..
....E";

    #[test]
    fn new_places_endpoints_on_middle_row() {
        let g = Grid::new(30, 20).unwrap();
        assert_eq!(g.columns(), 30);
        assert_eq!(g.rows(), 20);
        assert_eq!(g.start(), Some(Point::new(7, 10)));
        assert_eq!(g.end(), Some(Point::new(22, 10)));
        assert!(!g.allow_diagonal());
    }

    #[test]
    fn single_column_grid_keeps_endpoints_apart() {
        let g = Grid::new(1, 2).unwrap();
        let (s, e) = g.endpoints().unwrap();
        assert_ne!(s, e);
        let g = Grid::new(1, 5).unwrap();
        let (s, e) = g.endpoints().unwrap();
        assert_eq!(s, Point::new(0, 2));
        assert_eq!(e, Point::new(0, 4));
    }

    #[test]
    fn too_small_grids_are_rejected() {
        assert_eq!(
            Grid::new(1, 1),
            Err(GridError::InvalidSize { columns: 1, rows: 1 })
        );
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, -1).is_err());
    }

    #[test]
    fn with_endpoints_validates() {
        assert_eq!(
            Grid::with_endpoints(3, 3, Point::new(1, 1), Point::new(1, 1)),
            Err(GridError::StartIsEnd(Point::new(1, 1)))
        );
        assert_eq!(
            Grid::with_endpoints(3, 3, Point::new(0, 0), Point::new(3, 0)),
            Err(GridError::OutOfBounds(Point::new(3, 0)))
        );
    }

    #[test]
    fn parse_and_display_round_trip() {
        let g = Grid::parse(WALLED).unwrap();
        assert_eq!(g.columns(), 5);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.end(), Some(Point::new(4, 2)));
        assert!(!g.is_open(Point::new(2, 0)));
        assert!(!g.is_open(Point::new(2, 1)));
        assert!(g.is_open(Point::new(2, 2)));
        assert_eq!(g.to_string(), WALLED);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Grid::parse("S.\n..E"),
            Err(GridError::InconsistentWidth { line: 1, expected: 2, found: 3 })
        ));
        assert!(matches!(
            Grid::parse("S.x\n..E"),
            Err(GridError::InvalidChar { ch: 'x', .. })
        ));
        assert_eq!(Grid::parse("...\n..E"), Err(GridError::MissingStart));
        assert_eq!(Grid::parse("S..\n..."), Err(GridError::MissingEnd));
        assert!(matches!(
            Grid::parse("SS.\n..E"),
            Err(GridError::DuplicateEndpoint { ch: 'S', .. })
        ));
    }

    #[test]
    fn endpoints_cannot_be_blocked() {
        let mut g = Grid::parse(WALLED).unwrap();
        assert_eq!(
            g.set_blocked(Point::new(0, 0), true),
            Err(GridError::EndpointConflict(Point::new(0, 0)))
        );
        assert_eq!(
            g.toggle_blocked(Point::new(4, 2)),
            Err(GridError::EndpointConflict(Point::new(4, 2)))
        );
        assert_eq!(g.toggle_blocked(Point::new(1, 1)), Ok(true));
        assert_eq!(g.toggle_blocked(Point::new(1, 1)), Ok(false));
    }

    #[test]
    fn moving_endpoints() {
        let mut g = Grid::parse(WALLED).unwrap();
        assert_eq!(
            g.set_start(Point::new(2, 0)),
            Err(GridError::Blocked(Point::new(2, 0)))
        );
        assert_eq!(
            g.set_start(Point::new(4, 2)),
            Err(GridError::EndpointConflict(Point::new(4, 2)))
        );
        assert_eq!(
            g.set_end(Point::new(9, 9)),
            Err(GridError::OutOfBounds(Point::new(9, 9)))
        );
        g.set_start(Point::new(1, 2)).unwrap();
        g.set_end(Point::new(4, 0)).unwrap();
        assert_eq!(g.endpoints(), Ok((Point::new(1, 2), Point::new(4, 0))));
    }

    #[test]
    fn adjacent_order_and_filters() {
        let mut g = Grid::parse(
            "\
...
.S.
..E",
        )
        .unwrap();
        let mut buf = Vec::new();
        g.adjacent(Point::new(1, 0), crate::Adjacency::ALL, &mut buf);
        // right, (down is start), left
        assert_eq!(buf, vec![Point::new(2, 0), Point::new(0, 0)]);

        g.set_blocked(Point::new(2, 0), true).unwrap();
        g.mark_visited(Point::new(0, 0));
        buf.clear();
        g.adjacent(Point::new(1, 0), crate::Adjacency::UNEXPLORED, &mut buf);
        assert!(buf.is_empty());

        g.set_allow_diagonal(true);
        buf.clear();
        g.adjacent(Point::new(1, 2), crate::Adjacency::ALL, &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(2, 2),
                Point::new(0, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn fill_and_block_wall() {
        let mut g = Grid::new(4, 3).unwrap();
        g.fill_blocked().unwrap();
        let (s, e) = g.endpoints().unwrap();
        assert_eq!(g.count_fn(|_, c| c.blocked), 10);
        assert!(g.is_open(s) && g.is_open(e));

        g.clear_blocks();
        let wall: Vec<Point> = (0..4).map(|x| Point::new(x, 1)).collect();
        // Row 1 holds both endpoints, so only two cells get blocked.
        assert_eq!(g.block_wall(&wall), Ok(2));
        assert!(g.is_open(s));

        let bad = [Point::new(0, 0), Point::new(0, 7)];
        assert_eq!(
            g.block_wall(&bad),
            Err(GridError::OutOfBounds(Point::new(0, 7)))
        );
        // Nothing was blocked by the failed wall.
        assert!(g.is_open(Point::new(0, 0)));
    }

    #[test]
    fn clear_path_and_reset() {
        let mut g = Grid::new(6, 4).unwrap();
        g.mark_visited(Point::new(0, 0));
        g.mark_path(&[Point::new(1, 0), Point::new(2, 0)]);
        g.set_blocked(Point::new(5, 3), true).unwrap();
        g.set_start(Point::new(0, 3)).unwrap();
        g.clear_path();
        assert_eq!(g.count_fn(|_, c| c.visited || c.in_path), 0);
        assert_eq!(g.count_fn(|_, c| c.blocked), 1);

        g.reset();
        assert_eq!(g.count_fn(|_, c| c != Cell::OPEN), 0);
        assert_eq!(g.start(), Some(Point::new(1, 2)));
    }

    #[test]
    fn resize_keeps_adjacency_mode() {
        let mut g = Grid::new(4, 4).unwrap();
        g.set_allow_diagonal(true);
        g.resize(10, 6).unwrap();
        assert_eq!(g.bounds(), Range::sized(10, 6));
        assert!(g.allow_diagonal());
        assert!(g.resize(1, 1).is_err());
    }

    #[test]
    fn display_marks_search_state() {
        let mut g = Grid::parse("S..E").unwrap();
        g.mark_visited(Point::new(1, 0));
        g.mark_path(&[Point::new(2, 0)]);
        assert_eq!(g.to_string(), "S+*E");
    }
}
