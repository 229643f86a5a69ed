use std::fmt;

use crate::geom::Point;

/// Errors raised by grid construction, editing and adapter preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid cannot hold distinct start and end cells.
    InvalidSize { columns: i32, rows: i32 },
    /// A point does not resolve to a cell of the grid.
    OutOfBounds(Point),
    /// The operation would block, or overlap, the start or end cell.
    EndpointConflict(Point),
    /// An endpoint cannot be moved onto a blocked cell.
    Blocked(Point),
    /// The grid has no start cell.
    MissingStart,
    /// The grid has no end cell.
    MissingEnd,
    /// Start and end are the same cell.
    StartIsEnd(Point),
    /// ASCII layout lines have different widths.
    InconsistentWidth { line: usize, expected: usize, found: usize },
    /// ASCII layout contains a character outside `#.SE`.
    InvalidChar { ch: char, pos: Point },
    /// ASCII layout declares a second start (`S`) or end (`E`).
    DuplicateEndpoint { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { columns, rows } => {
                write!(f, "grid: invalid size {columns}x{rows}, need room for a start and an end")
            }
            Self::OutOfBounds(p) => write!(f, "grid: cell {p} is out of bounds"),
            Self::EndpointConflict(p) => write!(f, "grid: cell {p} is the start or end cell"),
            Self::Blocked(p) => write!(f, "grid: cell {p} is blocked"),
            Self::MissingStart => f.write_str("grid: no start cell"),
            Self::MissingEnd => f.write_str("grid: no end cell"),
            Self::StartIsEnd(p) => write!(f, "grid: start and end are both {p}"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateEndpoint { ch, pos } => {
                write!(f, "grid: second \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A strategy name that matches no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgo {
    pub name: String,
}

impl UnknownAlgo {
    /// Wrap the unrecognised name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for UnknownAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported algorithm: \u{201c}{}\u{201d}", self.name)
    }
}

impl std::error::Error for UnknownAlgo {}

/// Reduce a strategy name to a lookup key: lowercase alphanumerics and `*`.
///
/// `"Greedy Best-First"`, `"greedy_best_first"` and `"GreedyBestFirst"` all
/// map to `"greedybestfirst"`.
pub fn algo_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '*')
        .flat_map(char::to_lowercase)
        .collect()
}
