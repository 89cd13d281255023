//! Perspective checkerboard floor.
//!
//! The floor is not a mesh. Each row below the horizon gets a depth of `1/t`,
//! where `t` runs from just above 0 at the horizon to 1 at the bottom row. Tile
//! columns widen with depth and tile rows are depth bands, which together give
//! the converging checkerboard. The classification is computed once and
//! reused for every frame.

use crate::error::{try_filled, StartupError};
use crate::types::{Dims, FloorTile, FLOOR_DEPTH_BANDS, FLOOR_FOV};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorField {
    dims: Dims,
    horizon: u16,
    tiles: Vec<FloorTile>,
}

impl FloorField {
    pub fn build(dims: Dims) -> Self {
        let mut tiles = vec![FloorTile::Sky; dims.cell_count()];
        let horizon = classify(dims, &mut tiles);
        Self {
            dims,
            horizon,
            tiles,
        }
    }

    /// Like [`FloorField::build`], but reports allocation failure.
    pub fn try_build(dims: Dims) -> Result<Self, StartupError> {
        let mut tiles = try_filled(dims.cell_count(), FloorTile::Sky)?;
        let horizon = classify(dims, &mut tiles);
        Ok(Self {
            dims,
            horizon,
            tiles,
        })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Horizon row; it and every row above it are sky.
    pub fn horizon_row(&self) -> u16 {
        self.horizon
    }

    pub fn tiles(&self) -> &[FloorTile] {
        &self.tiles
    }

    pub fn tile(&self, column: u16, row: u16) -> FloorTile {
        if column >= self.dims.columns || row >= self.dims.rows {
            return FloorTile::Sky;
        }
        self.tiles[row as usize * self.dims.columns as usize + column as usize]
    }
}

fn classify(dims: Dims, tiles: &mut [FloorTile]) -> u16 {
    let horizon = dims.horizon_row();
    let columns = dims.columns as usize;
    let floor_h = (dims.rows - horizon) as f32;

    for row in (horizon + 1)..dims.rows {
        let t = (row - horizon) as f32 / floor_h;
        let depth = 1.0 / t;
        let band = (depth * FLOOR_DEPTH_BANDS).floor() as i32;
        let start = row as usize * columns;

        for (col, tile) in tiles[start..start + columns].iter_mut().enumerate() {
            let x = (col as f32 / dims.columns as f32 - 0.5) * depth * FLOOR_FOV;
            let parity = (x.floor() as i32 + band).rem_euclid(2);
            *tile = if parity == 1 {
                FloorTile::Dark
            } else {
                FloorTile::Light
            };
        }
    }

    horizon
}
