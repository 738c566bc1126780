use tilepath_core::Point;

/// Manhattan (L1) distance between two points, in tiles.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points, in tiles.
///
/// This is the minimum number of 8-directional steps between `a` and `b`.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
