use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BinaryHeap, HashMap};

use tilepath_core::Point;

use crate::cost::Path;
use crate::distance::manhattan;
use crate::frontier::Entry;
use crate::neighbors::neighbors;
use crate::traits::{FnGrid, TileGrid};

/// Per-tile A* bookkeeping.
#[derive(Clone, Copy, Debug)]
struct Node {
    /// `None` only for the origin.
    parent: Option<Point>,
    visited: bool,
    g: i32,
    /// Fixed at discovery.
    h: i32,
}

impl Node {
    fn new(g: i32, parent: Option<Point>, pos: Point, destination: Point) -> Self {
        Self {
            parent,
            visited: false,
            g,
            h: manhattan(pos, destination),
        }
    }

    #[inline]
    fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// Compute the shortest path from `origin` to `destination` using A* guided
/// by the Manhattan distance to `destination`.
///
/// The heuristic is measured in tiles while step costs are 10 and 14, so it
/// underestimates heavily and the search stays optimal.
///
/// Returns the tiles after `origin` up to and including `destination`, an
/// empty path when both are equal, or `None` if no path exists.
pub fn astar_path<G: TileGrid + ?Sized>(
    grid: &G,
    origin: Point,
    destination: Point,
) -> Option<Path> {
    let mut nodes: HashMap<Point, Node> = HashMap::new();
    let mut open: BinaryHeap<Entry> = BinaryHeap::new();

    let start = Node::new(0, None, origin, destination);
    open.push(Entry::new(start.f(), origin));
    nodes.insert(origin, start);

    let passable = |p: Point| grid.is_walkable(p) && grid.inside_limits(p);

    let mut expanded = 0usize;
    while let Some(Entry { pos: current, .. }) = open.pop() {
        let Some(node) = nodes.get_mut(&current) else {
            continue;
        };
        // Superseded frontier entry for an already expanded tile.
        if node.visited {
            continue;
        }
        if current == destination {
            let cost = node.g;
            log::trace!(
                "astar {origin} -> {destination}: cost {cost}, {expanded} expanded, {} tiles discovered",
                nodes.len()
            );
            return Some(rebuild_path(&nodes, destination));
        }

        node.visited = true;
        let current_g = node.g;
        expanded += 1;

        for n in neighbors(current, passable) {
            let new_g = current_g + n.cost;
            match nodes.entry(n.pos) {
                MapEntry::Vacant(slot) => {
                    let node = slot.insert(Node::new(new_g, Some(current), n.pos, destination));
                    open.push(Entry::new(node.f(), n.pos));
                }
                MapEntry::Occupied(mut slot) => {
                    let node = slot.get_mut();
                    if node.visited || new_g >= node.g {
                        continue;
                    }
                    node.g = new_g;
                    node.parent = Some(current);
                    open.push(Entry::new(node.f(), n.pos));
                }
            }
        }
    }

    log::trace!(
        "astar {origin} -> {destination}: unreachable after {expanded} expanded, {} tiles discovered",
        nodes.len()
    );
    None
}

/// Follow parent links from `destination` back to the origin.
fn rebuild_path(nodes: &HashMap<Point, Node>, destination: Point) -> Path {
    let mut path = Path::new();
    let mut current = destination;
    while let Some(parent) = nodes[&current].parent {
        path.push(current);
        current = parent;
    }
    path.reverse();
    path
}

/// [`astar_path`] over a pair of grid predicates.
pub fn a_star(
    origin: Point,
    destination: Point,
    is_walkable: impl Fn(Point) -> bool,
    inside_limits: impl Fn(Point) -> bool,
) -> Option<Path> {
    astar_path(&FnGrid::new(is_walkable, inside_limits), origin, destination)
}
