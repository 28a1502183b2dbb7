//! Grid-point generation.
//!
//! A grid is an ordered sequence of plane points at which circles will be
//! centered. The order is observable: circles overlap at the default radius
//! and are composited opaquely, so the last circle drawn at any pixel wins.
//! The square grid is shuffled for exactly that reason, and the random grid
//! appends its stochastic cloud after the regular lattice so the texture is
//! painted on top of the baseline coverage.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::rand::Rng;

/// Upper bound on [`generate`]'s grid size. Point counts grow quadratically
/// (hex, square) or faster (random), so larger sizes are rejected rather than
/// silently clamped.
pub const MAX_GRID_SIZE: u32 = 100;

/// A point on the normalized plane, nominally within `[-1, 1]` on each axis.
/// Generators may emit points up to `2 / grid_size` beyond that, so circles
/// whose centers fall just off the plane still cover their edge pixels.
pub type PlanePoint = (f64, f64);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GridType {
    Hex,
    Square,
    Random,
}

impl GridType {
    pub const ALL: [GridType; 3] = [GridType::Hex, GridType::Square, GridType::Random];

    pub fn name(self) -> &'static str {
        match self {
            GridType::Hex => "hex",
            GridType::Square => "square",
            GridType::Random => "random",
        }
    }
}

impl fmt::Display for GridType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GridType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(GridType::Hex),
            "square" => Ok(GridType::Square),
            "random" => Ok(GridType::Random),
            other => Err(Error::UnknownGridType(other.to_owned())),
        }
    }
}

/// Generates the ordered point sequence for one render.
///
/// `grid_size` is the number of points spanning one unit of the plane in one
/// axis (up to a constant factor per grid kind); values outside
/// `[1, MAX_GRID_SIZE]` are a configuration error. The hex grid is fully
/// deterministic; the square and random grids draw from `rng`.
pub fn generate(grid_type: GridType, grid_size: u32, rng: &mut Rng) -> Result<Vec<PlanePoint>, Error> {
    if !(1..=MAX_GRID_SIZE).contains(&grid_size) {
        return Err(Error::GridSizeOutOfRange(grid_size));
    }
    Ok(match grid_type {
        GridType::Hex => hex_grid(grid_size),
        GridType::Square => rng.shuffle(square_lattice(grid_size)),
        GridType::Random => random_grid(grid_size, rng),
    })
}

/// Triangular lattice spanned by `e_i = (1, 0)` and `e_j = (cos 60°, sin 60°)`,
/// scaled by `1 / grid_size` and trimmed to the plane plus its overshoot band.
///
/// The index bounds are deliberately oversized (about a `4/√3` density
/// overhead) so the skewed lattice still covers the corners of the box.
fn hex_grid(grid_size: u32) -> Vec<PlanePoint> {
    let g = f64::from(grid_size);
    let ei = (1.0, 0.0);
    let ej = (60f64.to_radians().cos(), 60f64.to_radians().sin());
    let limit = 1.0 + 2.0 / g;

    let n = i64::from(grid_size) * 2;
    let mut grid = Vec::new();
    for i in -n..=n {
        for j in -n..=n {
            let x = (ei.0 * i as f64 + ej.0 * j as f64) / g;
            let y = (ei.1 * i as f64 + ej.1 * j as f64) / g;
            if (-limit..limit).contains(&x) && (-limit..limit).contains(&y) {
                grid.push((x, y));
            }
        }
    }
    grid
}

/// Regular lattice with spacing `1 / (2 * grid_size)`, unshuffled:
/// `(4 * grid_size + 1)²` points in row-major order.
fn square_lattice(grid_size: u32) -> Vec<PlanePoint> {
    let spacing = 2.0 * f64::from(grid_size);
    let n = i64::from(grid_size) * 2;
    let side = 4 * grid_size as usize + 1;
    let mut grid = Vec::with_capacity(side * side);
    for x in -n..=n {
        for y in -n..=n {
            grid.push((x as f64 / spacing, y as f64 / spacing));
        }
    }
    grid
}

/// The unshuffled square lattice, with `ceil(√grid_size) * grid_size²`
/// independently uniform points from `[-1, 1]²` appended. The lattice
/// guarantees there are no large blank gaps; the cloud adds the texture.
fn random_grid(grid_size: u32, rng: &mut Rng) -> Vec<PlanePoint> {
    let mut grid = square_lattice(grid_size);
    let extra = cloud_len(grid_size);
    grid.reserve(extra);
    for _ in 0..extra {
        let x = rng.uniform(-1.0, 1.0);
        let y = rng.uniform(-1.0, 1.0);
        grid.push((x, y));
    }
    grid
}

fn cloud_len(grid_size: u32) -> usize {
    let factor = f64::from(grid_size).sqrt().ceil() as usize;
    factor * (grid_size as usize).pow(2)
}
