//! The [`Cell`] record stored by a grid.

/// State of a single grid cell.
///
/// Whether a cell is the start or the end is a property of the grid, not of
/// the cell, so a grid can never hold two of either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Impassable.
    pub blocked: bool,
    /// Examined by the current search run.
    pub visited: bool,
    /// Part of the last path found.
    pub in_path: bool,
}

impl Cell {
    /// An open, unvisited cell.
    pub const OPEN: Self = Self {
        blocked: false,
        visited: false,
        in_path: false,
    };

    /// Whether the cell can be walked through.
    #[inline]
    pub const fn is_open(self) -> bool {
        !self.blocked
    }
}
