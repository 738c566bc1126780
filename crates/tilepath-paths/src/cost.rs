use tilepath_core::Point;

use crate::neighbors::offset_cost;

/// Cost of an axis-aligned step.
pub const LINEAR_COST: i32 = 10;
/// Cost of a diagonal step.
pub const DIAGONAL_COST: i32 = 14;

/// A path: the tiles visited after leaving the origin, ending at the
/// destination. An empty path means origin and destination coincide.
pub type Path = Vec<Point>;

/// Cost of a single step between two adjacent tiles.
///
/// `from` and `to` must be 8-adjacent and distinct.
#[inline]
pub fn step_cost(from: Point, to: Point) -> i32 {
    let d = to - from;
    debug_assert!(
        d != Point::ZERO && d.x.abs() <= 1 && d.y.abs() <= 1,
        "step {from} -> {to} is not between adjacent tiles"
    );
    offset_cost(d)
}

/// Total movement cost of walking `path` starting from `origin`.
pub fn path_cost(origin: Point, path: &[Point]) -> i32 {
    let mut prev = origin;
    let mut total = 0;
    for &p in path {
        total += step_cost(prev, p);
        prev = p;
    }
    total
}
