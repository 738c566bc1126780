use std::collections::HashSet;

use tilepath_core::Point;

/// Check that `path` is a well-formed walk.
///
/// Every consecutive pair must be 8-adjacent and distinct, and no tile may
/// appear twice. Empty and single-tile paths are valid.
pub fn is_valid(path: &[Point]) -> bool {
    let steps_ok = path.windows(2).all(|w| {
        let d = w[1] - w[0];
        d != Point::ZERO && (-1..=1).contains(&d.x) && (-1..=1).contains(&d.y)
    });
    if !steps_ok {
        return false;
    }

    let mut seen = HashSet::with_capacity(path.len());
    path.iter().all(|&p| seen.insert(p))
}
