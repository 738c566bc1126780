use std::collections::{BinaryHeap, HashMap};

use tilepath_core::Point;

use crate::cost::Path;
use crate::frontier::{Entry, UNREACHABLE};
use crate::neighbors::neighbors;
use crate::traits::{FnGrid, TileGrid};

/// Best known distance per discovered tile. Missing tiles are unreachable.
type DistanceMap = HashMap<Point, i32>;

#[inline]
fn distance_at(dist: &DistanceMap, p: Point) -> i32 {
    dist.get(&p).copied().unwrap_or(UNREACHABLE)
}

/// Shortest path from `origin` to `destination` by uniform-cost search.
///
/// Returns the tiles after `origin` up to and including `destination`, an
/// empty path when both are equal, or `None` if `destination` cannot be
/// reached. `origin` itself is not required to be walkable.
pub fn dijkstra_path<G: TileGrid + ?Sized>(
    grid: &G,
    origin: Point,
    destination: Point,
) -> Option<Path> {
    let mut dist = DistanceMap::new();
    let mut frontier = BinaryHeap::new();

    dist.insert(origin, 0);
    frontier.push(Entry::new(0, origin));

    let mut pops = 0usize;
    while let Some(Entry {
        priority: current_dist,
        pos: current,
    }) = frontier.pop()
    {
        pops += 1;
        if current == destination {
            log::trace!(
                "dijkstra {origin} -> {destination}: distance {current_dist}, {pops} pops, {} tiles discovered",
                dist.len()
            );
            return Some(rebuild_path(grid, &dist, origin, destination));
        }

        // Stale entries fall through: their distance can no longer improve
        // any neighbor.
        for n in neighbors(current, |p| grid.inside_limits(p)) {
            if !grid.is_walkable(n.pos) {
                continue;
            }
            let tentative = current_dist + n.cost;
            if tentative < distance_at(&dist, n.pos) {
                dist.insert(n.pos, tentative);
                frontier.push(Entry::new(tentative, n.pos));
            }
        }
    }

    log::trace!(
        "dijkstra {origin} -> {destination}: unreachable after {pops} pops, {} tiles discovered",
        dist.len()
    );
    None
}

/// Walk back from `destination` along tiles whose recorded distance accounts
/// exactly for the step cost.
///
/// # Panics
///
/// Panics if some tile on the way has no such predecessor, which means the
/// distance map is corrupt.
fn rebuild_path<G: TileGrid + ?Sized>(
    grid: &G,
    dist: &DistanceMap,
    origin: Point,
    destination: Point,
) -> Path {
    let mut path = Path::new();
    let mut current = destination;
    let mut current_dist = distance_at(dist, destination);
    assert_ne!(current_dist, UNREACHABLE, "destination {destination} was never reached");

    while current != origin {
        path.push(current);
        let Some(prev) = neighbors(current, |p| grid.inside_limits(p))
            .find(|n| distance_at(dist, n.pos) == current_dist - n.cost)
        else {
            panic!("no predecessor of {current} at distance {current_dist}: distance map is inconsistent");
        };
        current = prev.pos;
        current_dist -= prev.cost;
    }

    path.reverse();
    path
}

/// [`dijkstra_path`] over a pair of grid predicates.
pub fn dijkstra(
    origin: Point,
    destination: Point,
    is_walkable: impl Fn(Point) -> bool,
    inside_limits: impl Fn(Point) -> bool,
) -> Option<Path> {
    dijkstra_path(&FnGrid::new(is_walkable, inside_limits), origin, destination)
}
