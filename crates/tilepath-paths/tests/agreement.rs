//! Cross-checks of the two searches on generated maps.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tilepath_core::{Point, Tile, TileMap};
use tilepath_paths::{
    Algorithm, DIAGONAL_COST, LINEAR_COST, TileGrid, a_star, astar_path, chebyshev, dijkstra,
    dijkstra_path, is_valid, path_cost,
};

fn random_map(rng: &mut StdRng, width: i32, height: i32, density: f64) -> TileMap {
    let tiles = (0..width * height)
        .map(|_| {
            if rng.random_bool(density) {
                Tile::WALL
            } else {
                Tile::FLOOR
            }
        })
        .collect();
    TileMap::from_tiles(width, height, tiles).unwrap()
}

fn random_point(rng: &mut StdRng, map: &TileMap) -> Point {
    Point::new(
        rng.random_range(0..map.width()),
        rng.random_range(0..map.height()),
    )
}

fn check_path(map: &TileMap, origin: Point, destination: Point, path: &[Point]) {
    assert!(is_valid(path), "invalid path {path:?}");
    assert!(!path.contains(&origin), "path revisits origin");
    if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
        assert!(is_valid(&[origin, first]));
        assert_eq!(last, destination);
    }
    assert!(path.iter().all(|&p| map.is_walkable(p)));
}

#[test]
fn searches_agree_on_random_maps() {
    let mut rng = StdRng::seed_from_u64(0x7113_9a7f);
    let mut reachable = 0;
    for _ in 0..200 {
        let w = rng.random_range(1..24);
        let h = rng.random_range(1..24);
        let map = random_map(&mut rng, w, h, 0.3);
        let origin = random_point(&mut rng, &map);
        let destination = random_point(&mut rng, &map);

        let d = dijkstra_path(&map, origin, destination);
        let a = astar_path(&map, origin, destination);
        assert_eq!(
            d.is_some(),
            a.is_some(),
            "reachability differs for {origin} -> {destination} on\n{map}"
        );
        let (Some(d), Some(a)) = (d, a) else {
            continue;
        };
        reachable += 1;

        check_path(&map, origin, destination, &d);
        check_path(&map, origin, destination, &a);
        assert_eq!(
            path_cost(origin, &d),
            path_cost(origin, &a),
            "cost differs for {origin} -> {destination} on\n{map}"
        );
    }
    assert!(reachable > 20, "only {reachable} reachable samples");
}

#[test]
fn open_map_cost_matches_closed_form() {
    // Without obstacles the optimum is all diagonals first, then straight.
    let map = TileMap::filled(15, 9, Tile::FLOOR);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let origin = random_point(&mut rng, &map);
        let destination = random_point(&mut rng, &map);
        let dx = (destination.x - origin.x).abs();
        let dy = (destination.y - origin.y).abs();
        let diag = dx.min(dy);
        let expected = diag * DIAGONAL_COST + (dx.max(dy) - diag) * LINEAR_COST;

        for alg in Algorithm::ALL {
            let path = alg.find_path(&map, origin, destination).unwrap();
            assert_eq!(path.len() as i32, chebyshev(origin, destination), "{alg}");
            assert_eq!(path_cost(origin, &path), expected, "{alg}");
        }
    }
}

#[test]
fn searches_are_repeatable() {
    let mut rng = StdRng::seed_from_u64(7);
    let map = random_map(&mut rng, 30, 20, 0.25);
    let origin = Point::new(0, 0);
    let destination = Point::new(29, 19);
    for alg in Algorithm::ALL {
        let first = alg.find_path(&map, origin, destination);
        let second = alg.find_path(&map, origin, destination);
        assert_eq!(first, second, "{alg}");
    }
}

#[test]
fn scenario_three_by_three_diagonal() {
    let map = TileMap::parse("___\n___\n___").unwrap();
    for alg in Algorithm::ALL {
        let path = alg.find_path(&map, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(path, vec![Point::new(1, 1), Point::new(2, 2)], "{alg}");
        assert_eq!(path_cost(Point::new(0, 0), &path), 2 * DIAGONAL_COST);
    }
}

#[test]
fn scenario_corridor() {
    let map = TileMap::parse("___").unwrap();
    let origin = Point::new(0, 0);
    let destination = Point::new(2, 0);
    let walkable = |p: Point| map.is_walkable(p);
    let inside = |p: Point| map.has_tile(p);
    for path in [
        dijkstra(origin, destination, walkable, inside),
        a_star(origin, destination, walkable, inside),
    ] {
        let path = path.unwrap();
        assert_eq!(path, vec![Point::new(1, 0), Point::new(2, 0)]);
        assert_eq!(path_cost(origin, &path), 20);
    }
}

#[test]
fn scenario_wall_without_gap() {
    let map = TileMap::parse(
        "\
______
______
######
______",
    )
    .unwrap();
    for alg in Algorithm::ALL {
        assert_eq!(
            alg.find_path(&map, Point::new(2, 0), Point::new(3, 3)),
            None,
            "{alg}"
        );
    }
}

#[test]
fn same_endpoints_give_empty_path() {
    let map = TileMap::filled(4, 4, Tile::FLOOR);
    for alg in Algorithm::ALL {
        assert_eq!(
            alg.find_path(&map, Point::new(2, 3), Point::new(2, 3)),
            Some(vec![]),
            "{alg}"
        );
    }
}

#[test]
fn enclosed_destination_is_unreachable() {
    let map = TileMap::parse(
        "\
_______
__###__
__#_#__
__###__
_______",
    )
    .unwrap();
    for alg in Algorithm::ALL {
        assert_eq!(
            alg.find_path(&map, Point::new(0, 0), Point::new(3, 2)),
            None,
            "{alg}"
        );
    }
}

/// A grid with an unbounded coordinate space clipped by a custom limit.
struct Disc {
    radius: i32,
}

impl TileGrid for Disc {
    fn is_walkable(&self, p: Point) -> bool {
        // A vertical wall with a single gap at the bottom.
        !(p.x == 0 && p.y < self.radius - 1)
    }

    fn inside_limits(&self, p: Point) -> bool {
        p.x * p.x + p.y * p.y <= self.radius * self.radius
    }
}

#[test]
fn custom_grid_with_negative_coordinates() {
    let disc = Disc { radius: 6 };
    let origin = Point::new(-3, -2);
    let destination = Point::new(3, -2);
    let d = dijkstra_path(&disc, origin, destination).unwrap();
    let a = astar_path(&disc, origin, destination).unwrap();
    assert!(d.contains(&Point::new(0, 5)) || d.contains(&Point::new(0, 6)));
    assert_eq!(path_cost(origin, &d), path_cost(origin, &a));
    assert!(is_valid(&d) && is_valid(&a));
}

#[test]
fn shared_map_across_threads() {
    let mut rng = StdRng::seed_from_u64(99);
    let map = random_map(&mut rng, 40, 40, 0.2);
    let pairs: Vec<(Point, Point)> = (0..8)
        .map(|_| (random_point(&mut rng, &map), random_point(&mut rng, &map)))
        .collect();

    let sequential: Vec<_> = pairs
        .iter()
        .map(|&(o, d)| dijkstra_path(&map, o, d).map(|p| path_cost(o, &p)))
        .collect();

    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = pairs
            .iter()
            .map(|&(o, d)| {
                let map = &map;
                s.spawn(move || astar_path(map, o, d).map(|p| path_cost(o, &p)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
