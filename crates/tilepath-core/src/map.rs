//! Walkable/blocked tile maps and their text format.
//!
//! A map is written as rows of `_` (walkable) and `#` (blocked) characters,
//! one row per line, all rows the same width:
//!
//! ```text
//! ____#
//! _##_#
//! _____
//! ```
//!
//! Spaces, tabs and carriage returns inside a line are ignored, as are blank
//! lines.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::geom::{Point, Range};

/// Character for a walkable tile.
pub const WALKABLE: char = '_';
/// Character for a blocked tile.
pub const BLOCKED: char = '#';

/// Convenient result alias for map loading.
pub type Result<T> = std::result::Result<T, MapError>;

/// Errors raised while loading a [`TileMap`].
#[derive(Debug, Error)]
pub enum MapError {
    /// The map file could not be read.
    #[error("failed to read map file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input contained no tile rows.
    #[error("map contains no tiles")]
    Empty,

    /// A row's width differs from the first row's.
    #[error("map row {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A character other than `_` or `#` was found.
    #[error("invalid tile character {ch:?} at {pos}")]
    InvalidTile { ch: char, pos: Point },

    /// A tile vector whose length does not match the map dimensions.
    #[error("{len} tiles do not fill a {width}x{height} map")]
    SizeMismatch { width: i32, height: i32, len: usize },
}

/// A single map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub walkable: bool,
}

impl Tile {
    pub const FLOOR: Tile = Tile { walkable: true };
    pub const WALL: Tile = Tile { walkable: false };

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            WALKABLE => Some(Self::FLOOR),
            BLOCKED => Some(Self::WALL),
            _ => None,
        }
    }

    /// The character used for this tile in the text format.
    pub fn as_char(self) -> char {
        if self.walkable { WALKABLE } else { BLOCKED }
    }
}

/// A rectangular grid of [`Tile`]s stored row-major, with (0, 0) at the top
/// left.
///
/// The map is immutable once built, so a shared reference can back any
/// number of searches at once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTileMap"))]
pub struct TileMap {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

/// Unchecked wire form of a [`TileMap`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTileMap {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTileMap> for TileMap {
    type Error = MapError;

    fn try_from(raw: RawTileMap) -> Result<Self> {
        let RawTileMap {
            tiles,
            width,
            height,
        } = raw;
        let len = tiles.len();
        TileMap::from_tiles(width, height, tiles).ok_or(MapError::SizeMismatch {
            width,
            height,
            len,
        })
    }
}

impl TileMap {
    /// Create a `width` x `height` map where every tile is `fill`.
    pub fn filled(width: i32, height: i32, fill: Tile) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            tiles: vec![fill; (width * height) as usize],
            width,
            height,
        }
    }

    /// Build a map from a row-major tile vector.
    ///
    /// Returns `None` if `tiles.len()` is not `width * height`.
    pub fn from_tiles(width: i32, height: i32, tiles: Vec<Tile>) -> Option<Self> {
        let area = width.checked_mul(height)?;
        if width < 0 || height < 0 || tiles.len() != area as usize {
            return None;
        }
        Some(Self {
            tiles,
            width,
            height,
        })
    }

    /// Parse a map from its text representation.
    pub fn parse(s: &str) -> Result<Self> {
        let mut tiles = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (line_no, line) in s.lines().enumerate() {
            let row: Vec<char> = line
                .chars()
                .filter(|c| !matches!(c, ' ' | '\t' | '\r'))
                .collect();
            if row.is_empty() {
                continue;
            }
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(MapError::InconsistentWidth {
                        line: line_no + 1,
                        expected: w,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            for (x, &ch) in row.iter().enumerate() {
                let tile = Tile::from_char(ch).ok_or(MapError::InvalidTile {
                    ch,
                    pos: Point::new(x as i32, height as i32),
                })?;
                tiles.push(tile);
            }
            height += 1;
        }

        let width = width.ok_or(MapError::Empty)?;
        Ok(Self {
            tiles,
            width: width as i32,
            height: height as i32,
        })
    }

    /// Read and parse a map file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&text)?;
        log::debug!(
            "loaded map {} ({}x{}, {} walkable)",
            path.display(),
            map.width,
            map.height,
            map.walkable_count()
        );
        Ok(map)
    }

    /// Size as a `Point` (width = x, height = y).
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Width of the map in tiles.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the map in tiles.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The map's bounding range.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` addresses a tile of this map.
    #[inline]
    pub fn has_tile(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        if !self.has_tile(p) {
            return None;
        }
        Some(self.tiles[(p.y * self.width + p.x) as usize])
    }

    /// Whether the tile at `p` exists and is walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.tile(p).is_some_and(|t| t.walkable)
    }

    /// Number of walkable tiles.
    pub fn walkable_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.walkable).count()
    }

    /// Iterate over every position and its tile in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().zip(self.tiles.iter().copied())
    }
}

impl FromStr for TileMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width.max(1) as usize) {
            for tile in row {
                write!(f, "{}", tile.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tilemap_round_trip() {
        let map = TileMap::parse("_#_\n___").unwrap();
        let json = serde_json::to_string(&map).unwrap();
        let back: TileMap = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }

    #[test]
    fn rejects_tiles_not_filling_the_map() {
        let json = r#"{"tiles":[{"walkable":true}],"width":3,"height":3}"#;
        let err = serde_json::from_str::<TileMap>(json).unwrap_err();
        assert!(err.to_string().contains("1 tiles do not fill a 3x3 map"));

        let json = r#"{"tiles":[{"walkable":true}],"width":-1,"height":-1}"#;
        assert!(serde_json::from_str::<TileMap>(json).is_err());
    }
}
