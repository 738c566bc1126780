//! Reading and checking the endpoints of a search.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tilepath_core::{ParsePointError, Point, TileMap};

/// Which endpoint is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl Endpoint {
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Origin => "origin",
            Endpoint::Destination => "destination",
        }
    }
}

/// Rejected user input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid {} point {point}", .endpoint.name())]
    InvalidPoint { endpoint: Endpoint, point: Point },

    #[error("Origin and destination points cannot be the same")]
    SameEndpoints,

    #[error("could not read {} coordinates", .0.name())]
    Parse(Endpoint, #[source] ParsePointError),

    #[error("input ended before the {} coordinates were given", .0.name())]
    Eof(Endpoint),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Ask for an endpoint on `out` and read it from one line of `input`.
pub fn prompt_point<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    endpoint: Endpoint,
) -> Result<Point, InputError> {
    write!(
        out,
        "Enter the x and y coordinates of the {} point: ",
        endpoint.name()
    )?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof(endpoint));
    }
    line.parse::<Point>()
        .map_err(|e| InputError::Parse(endpoint, e))
}

/// An endpoint must be a walkable tile of the map.
pub fn check_point(map: &TileMap, endpoint: Endpoint, point: Point) -> Result<Point, InputError> {
    if map.has_tile(point) && map.is_walkable(point) {
        Ok(point)
    } else {
        Err(InputError::InvalidPoint { endpoint, point })
    }
}

/// Origin and destination must differ.
pub fn check_distinct(origin: Point, destination: Point) -> Result<(), InputError> {
    if origin == destination {
        return Err(InputError::SameEndpoints);
    }
    Ok(())
}
