use crate::geom::Point;

/// Neighbor offsets in enumeration order: right, down, left, up, then the
/// diagonals down-left, up-left, down-right, up-right.
///
/// The first four are used in cardinal mode, all eight in diagonal mode.
pub const DIRECTIONS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(-1, 1),
    Point::new(-1, -1),
    Point::new(1, 1),
    Point::new(1, -1),
];

/// Offsets to enumerate for the given adjacency mode.
#[inline]
pub fn directions(diagonal: bool) -> &'static [Point] {
    if diagonal {
        &DIRECTIONS
    } else {
        &DIRECTIONS[..4]
    }
}

/// Filter applied by [`GridAdapter::adjacent`](crate::GridAdapter::adjacent).
///
/// Out-of-bounds cells and the start cell are always dropped; these flags
/// additionally drop blocked and already-visited cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Adjacency {
    pub ignore_blocked: bool,
    pub ignore_visited: bool,
}

impl Adjacency {
    /// Keep every in-bounds neighbor except the start cell.
    pub const ALL: Self = Self {
        ignore_blocked: false,
        ignore_visited: false,
    };

    /// Keep only open neighbors not yet visited in the current run.
    pub const UNEXPLORED: Self = Self {
        ignore_blocked: true,
        ignore_visited: true,
    };
}
