use tilepath_core::Point;

use crate::cost::{DIAGONAL_COST, LINEAR_COST};

/// An adjacent tile together with the cost of stepping onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    pub pos: Point,
    pub cost: i32,
}

/// The eight neighbor offsets, row-major over dy then dx, skipping (0, 0).
///
/// Searches rely on this order being fixed for reproducible tie-breaking.
pub const OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

/// Cost of moving by a unit `offset`: linear along an axis, diagonal otherwise.
#[inline]
pub(crate) const fn offset_cost(offset: Point) -> i32 {
    if offset.x == 0 || offset.y == 0 {
        LINEAR_COST
    } else {
        DIAGONAL_COST
    }
}

/// Return the 8-directional neighbors of `tile`, keeping only those for which
/// `inside_limits` returns `true`.
///
/// Neighbors are yielded in [`OFFSETS`] order.
pub fn neighbors<F>(tile: Point, inside_limits: F) -> impl Iterator<Item = Neighbor>
where
    F: Fn(Point) -> bool,
{
    OFFSETS.into_iter().filter_map(move |offset| {
        let pos = tile + offset;
        inside_limits(pos).then_some(Neighbor {
            pos,
            cost: offset_cost(offset),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within(w: i32, h: i32) -> impl Fn(Point) -> bool {
        move |p: Point| p.x >= 0 && p.x < w && p.y >= 0 && p.y < h
    }

    #[test]
    fn offsets_are_row_major() {
        let mut sorted = OFFSETS;
        sorted.sort();
        assert_eq!(sorted, OFFSETS);
        assert!(!OFFSETS.contains(&Point::ZERO));
    }

    #[test]
    fn interior_tile_has_eight_neighbors() {
        let ns: Vec<Neighbor> = neighbors(Point::new(1, 1), within(3, 3)).collect();
        assert_eq!(ns.len(), 8);
        assert_eq!(
            ns[0],
            Neighbor {
                pos: Point::new(0, 0),
                cost: DIAGONAL_COST
            }
        );
        assert_eq!(
            ns[1],
            Neighbor {
                pos: Point::new(1, 0),
                cost: LINEAR_COST
            }
        );
        assert_eq!(ns.iter().filter(|n| n.cost == LINEAR_COST).count(), 4);
        assert_eq!(ns.iter().filter(|n| n.cost == DIAGONAL_COST).count(), 4);
    }

    #[test]
    fn corner_tile_is_clipped() {
        let ns: Vec<Point> = neighbors(Point::new(0, 0), within(3, 3))
            .map(|n| n.pos)
            .collect();
        assert_eq!(ns, vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn single_tile_grid_has_no_neighbors() {
        assert_eq!(neighbors(Point::ZERO, within(1, 1)).count(), 0);
    }

    #[test]
    fn predicate_filters_arbitrary_tiles() {
        let blocked = Point::new(2, 1);
        let ns: Vec<Point> = neighbors(Point::new(1, 1), |p| p != blocked)
            .map(|n| n.pos)
            .collect();
        assert_eq!(ns.len(), 7);
        assert!(!ns.contains(&blocked));
    }
}
