use tilepath_core::{Point, TileMap};

/// Read-only grid queries needed by the searches.
///
/// Both methods must be pure and stable for the duration of a search.
pub trait TileGrid {
    /// Whether a path may step onto `p`.
    fn is_walkable(&self, p: Point) -> bool;

    /// Whether `p` addresses a tile of the grid.
    fn inside_limits(&self, p: Point) -> bool;
}

impl<G: TileGrid + ?Sized> TileGrid for &G {
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        (**self).is_walkable(p)
    }

    #[inline]
    fn inside_limits(&self, p: Point) -> bool {
        (**self).inside_limits(p)
    }
}

impl TileGrid for TileMap {
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        TileMap::is_walkable(self, p)
    }

    #[inline]
    fn inside_limits(&self, p: Point) -> bool {
        self.has_tile(p)
    }
}

/// Adapts a pair of predicates into a [`TileGrid`].
#[derive(Debug, Clone, Copy)]
pub struct FnGrid<W, L> {
    pub is_walkable: W,
    pub inside_limits: L,
}

impl<W, L> FnGrid<W, L>
where
    W: Fn(Point) -> bool,
    L: Fn(Point) -> bool,
{
    pub fn new(is_walkable: W, inside_limits: L) -> Self {
        Self {
            is_walkable,
            inside_limits,
        }
    }
}

impl<W, L> TileGrid for FnGrid<W, L>
where
    W: Fn(Point) -> bool,
    L: Fn(Point) -> bool,
{
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        (self.is_walkable)(p)
    }

    #[inline]
    fn inside_limits(&self, p: Point) -> bool {
        (self.inside_limits)(p)
    }
}
