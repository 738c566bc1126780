//! **tilepath-cli** — console front end for the tilepath searches.
//!
//! Loads a `_`/`#` map, reads an origin and a destination, and shows the
//! path found by each selected algorithm together with its step count and
//! movement cost.

pub mod input;
pub mod render;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tilepath_core::{Point, TileMap};
use tilepath_paths::{Algorithm, path_cost};

use crate::input::{Endpoint, check_distinct, check_point, prompt_point};
use crate::render::MapView;

/// Command line configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "tilepath", version, about = "Shortest paths on a tile map")]
pub struct Cli {
    /// Map file made of `_` (walkable) and `#` (blocked) rows.
    #[arg(short, long, default_value = "map.txt")]
    pub map: PathBuf,

    /// Search algorithm to run.
    #[arg(short, long, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,

    /// Origin as `X,Y`; prompted for when omitted.
    #[arg(short, long)]
    pub origin: Option<Point>,

    /// Destination as `X,Y`; prompted for when omitted.
    #[arg(short, long)]
    pub destination: Option<Point>,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    Dijkstra,
    Astar,
    Both,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgorithmChoice::Dijkstra => &[Algorithm::Dijkstra],
            AlgorithmChoice::Astar => &[Algorithm::AStar],
            AlgorithmChoice::Both => &Algorithm::ALL,
        }
    }
}

/// Run one session: load the map, obtain the endpoints and print the paths.
///
/// Endpoints missing from `cli` are read from `input`, one line each.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> anyhow::Result<()> {
    let color = !cli.no_color;

    writeln!(out, "loading map from file '{}'", cli.map.display())?;
    let map = TileMap::from_file(&cli.map)
        .with_context(|| format!("could not load map {}", cli.map.display()))?;
    log::info!(
        "map {} loaded: {}x{}",
        cli.map.display(),
        map.width(),
        map.height()
    );
    MapView::new(&map).write_to(out, color)?;
    writeln!(out)?;

    let origin = match cli.origin {
        Some(p) => p,
        None => prompt_point(input, out, Endpoint::Origin)?,
    };
    check_point(&map, Endpoint::Origin, origin)?;

    let destination = match cli.destination {
        Some(p) => p,
        None => prompt_point(input, out, Endpoint::Destination)?,
    };
    check_point(&map, Endpoint::Destination, destination)?;
    check_distinct(origin, destination)?;

    writeln!(out)?;
    MapView::new(&map)
        .with_targets(origin, destination)
        .write_to(out, color)?;

    for &alg in cli.algorithm.algorithms() {
        writeln!(out)?;
        let started = Instant::now();
        let found = alg.find_path(&map, origin, destination);
        log::debug!("{alg} finished in {:?}", started.elapsed());

        match found {
            Some(path) => {
                writeln!(
                    out,
                    "{alg}: {} steps, cost {}",
                    path.len(),
                    path_cost(origin, &path)
                )?;
                MapView::new(&map)
                    .with_targets(origin, destination)
                    .with_path(&path)
                    .write_to(out, color)?;
            }
            None => writeln!(out, "{alg}: No path found")?,
        }
    }
    Ok(())
}
