use pathviz_core::Point;

/// Manhattan (L1) distance between two points: `|Δcolumn| + |Δrow|`.
///
/// Admissible for 4-neighbor movement only; in diagonal mode it can
/// overestimate.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
