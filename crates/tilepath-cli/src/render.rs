//! Console rendering of a [`TileMap`] with optional endpoints and path.
//!
//! [`MapView`] implements `Display` for plain output and
//! [`MapView::write_colored`] adds crossterm colours.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use tilepath_core::{Point, Tile, TileMap};

/// What is drawn at a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Floor,
    Wall,
    Origin,
    Destination,
    Path,
}

impl Glyph {
    pub fn as_char(self) -> char {
        match self {
            Glyph::Floor => '_',
            Glyph::Wall => '#',
            Glyph::Origin => 'O',
            Glyph::Destination => 'D',
            Glyph::Path => '*',
        }
    }

    fn color(self) -> Color {
        match self {
            Glyph::Floor => Color::DarkGrey,
            Glyph::Wall => Color::Reset,
            Glyph::Origin => Color::Green,
            Glyph::Destination => Color::Red,
            Glyph::Path => Color::Yellow,
        }
    }
}

/// A map prepared for display.
pub struct MapView<'a> {
    map: &'a TileMap,
    targets: Option<(Point, Point)>,
    path: HashSet<Point>,
}

impl<'a> MapView<'a> {
    pub fn new(map: &'a TileMap) -> Self {
        Self {
            map,
            targets: None,
            path: HashSet::new(),
        }
    }

    /// Mark the origin and destination.
    pub fn with_targets(mut self, origin: Point, destination: Point) -> Self {
        self.targets = Some((origin, destination));
        self
    }

    /// Mark the tiles of a path.
    pub fn with_path(mut self, path: &[Point]) -> Self {
        self.path = path.iter().copied().collect();
        self
    }

    /// Endpoints take precedence over the path, the path over terrain.
    pub fn glyph(&self, p: Point, tile: Tile) -> Glyph {
        if let Some((origin, destination)) = self.targets {
            if p == origin {
                return Glyph::Origin;
            }
            if p == destination {
                return Glyph::Destination;
            }
        }
        if self.path.contains(&p) {
            return Glyph::Path;
        }
        if tile.walkable {
            Glyph::Floor
        } else {
            Glyph::Wall
        }
    }

    fn header(&self) -> String {
        let size = self.map.size();
        format!("map size: {}x{}", size.x, size.y)
    }

    /// Glyphs in row-major order, each flagged when it ends its row.
    fn cells(&self) -> impl Iterator<Item = (Glyph, bool)> + '_ {
        let last_x = self.map.size().x - 1;
        self.map
            .iter()
            .map(move |(p, tile)| (self.glyph(p, tile), p.x == last_x))
    }

    /// Write the view with ANSI colours.
    pub fn write_colored(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.header())?;
        let mut row_start = true;
        for (g, row_end) in self.cells() {
            if row_start {
                write!(out, "|")?;
            }
            queue!(out, SetForegroundColor(g.color()), Print(g.as_char()), ResetColor)?;
            if row_end {
                writeln!(out, "|")?;
            }
            row_start = row_end;
        }
        out.flush()
    }

    /// Write the view, coloured or plain.
    pub fn write_to(&self, out: &mut impl Write, color: bool) -> io::Result<()> {
        if color {
            self.write_colored(out)
        } else {
            write!(out, "{self}")?;
            out.flush()
        }
    }
}

impl fmt::Display for MapView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        let mut row_start = true;
        for (g, row_end) in self.cells() {
            if row_start {
                write!(f, "|")?;
            }
            write!(f, "{}", g.as_char())?;
            if row_end {
                writeln!(f, "|")?;
            }
            row_start = row_end;
        }
        Ok(())
    }
}
