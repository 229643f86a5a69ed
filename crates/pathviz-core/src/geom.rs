//! Cell coordinates and grid bounds.
//!
//! A [`Point`] addresses a cell as `(column, row)` with rows counted
//! downward. A [`Range`] is the half-open block of cells a grid covers.

use std::fmt;
use std::ops::{Add, Div, Sub};

/// A cell coordinate, or an offset between two cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    // Row-major, matching the grid's storage order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Halves a two-cell jump into the step to the cell in between.
impl Div<i32> for Point {
    type Output = Self;
    #[inline]
    fn div(self, rhs: i32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// Cells from `min` (inclusive) to `max` (exclusive) on both axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The bounds of a `columns` x `rows` grid anchored at the origin.
    /// Negative sizes give an empty range.
    #[inline]
    pub fn sized(columns: i32, rows: i32) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(columns.max(0), rows.max(0)),
        }
    }

    /// `(columns, rows)` as a point.
    #[inline]
    pub fn size(self) -> Point {
        self.max - self.min
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Every cell in row-major order, the grid's storage order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major iterator over the cells of a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    len: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.len {
            return None;
        }
        let w = self.range.width() as usize;
        let offset = Point::new((self.next % w) as i32, (self.next / w) as i32);
        self.next += 1;
        Some(self.range.min + offset)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}
