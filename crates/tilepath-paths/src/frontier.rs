use std::cmp::Ordering;

use tilepath_core::Point;

/// Sentinel distance for tiles not yet reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// A frontier entry, ordered for use in `BinaryHeap` so that the smallest
/// priority pops first. Equal priorities pop in row-major tile order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) priority: i32,
    pub(crate) pos: Point,
}

impl Entry {
    #[inline]
    pub(crate) fn new(priority: i32, pos: Point) -> Self {
        Self { priority, pos }
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
