//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, so they can
//! be shared by the simulation, the renderer and the input layer alike.
//!
//! # Terminal geometry
//!
//! A terminal cell is subdivided into a 2x4 grid of braille dots:
//!
//! - **Pixel width**: `2 * columns`
//! - **Pixel height**: `4 * rows`
//! - **Minimum size**: 20 columns by 10 rows
//!
//! # Animation constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 33 | Frame interval (~30 FPS) |
//! | `FALL_FRAMES` | 22 | Frames to fall from the bounce apex |
//! | `BOUNCE_DAMPING` | 0.82 | Velocity kept after each impact |
//! | `SQUASH_DECAY` | 0.70 | Per-frame squash relaxation |
//! | `SQUASH_MAX` | 0.5 | Cap on the impact squash factor |
//! | `HORIZON_PERCENT` | 55 | Horizon row as a percentage of rows |
//! | `BOUNCE_HEIGHT_RATIO` | 0.55 | Apex height relative to the horizon |
//!
//! # Examples
//!
//! ```
//! use icosa_types::{CellMode, Dims, FloorTile};
//!
//! let dims = Dims::new(80, 24);
//! assert_eq!(dims.pixel_width(), 160);
//! assert_eq!(dims.pixel_height(), 96);
//! assert_eq!(dims.horizon_row(), 13);
//! assert!(dims.meets_minimum());
//!
//! assert_eq!(CellMode::from(FloorTile::Dark), CellMode::Floor(FloorTile::Dark));
//! ```

/// Minimum usable terminal width in columns.
pub const MIN_COLUMNS: u16 = 20;

/// Minimum usable terminal height in rows.
pub const MIN_ROWS: u16 = 10;

/// Braille dots per cell, horizontally.
pub const DOTS_PER_CELL_X: usize = 2;

/// Braille dots per cell, vertically.
pub const DOTS_PER_CELL_Y: usize = 4;

/// First codepoint of the Unicode braille patterns block.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Frame interval in milliseconds (33ms ≈ 30 FPS).
pub const FRAME_MS: u64 = 33;

/// Horizon position as a percentage of terminal rows, measured from the top.
pub const HORIZON_PERCENT: u16 = 55;

/// Field-of-view multiplier applied to the floor's world x coordinate.
pub const FLOOR_FOV: f32 = 8.0;

/// Depth bands per unit of perspective depth on the floor.
pub const FLOOR_DEPTH_BANDS: f32 = 4.0;

/// Number of vertices in the tetrakis hexahedron.
pub const VERTEX_COUNT: usize = 14;

/// Number of edges in the tetrakis hexahedron.
pub const EDGE_COUNT: usize = 36;

/// Distance of each pyramid apex from the solid's center.
pub const PYRAMID_APEX: f32 = 1.5;

/// Per-frame rotation increments (radians) about the x, y and z axes.
pub const ROTATION_STEP: [f32; 3] = [0.05, 0.07, 0.03];

/// Solid size relative to the smaller pixel dimension.
pub const SOLID_SCALE_RATIO: f32 = 0.45;

/// Lift of the solid's center above the bounce position, relative to scale.
pub const SOLID_LIFT_RATIO: f32 = 0.2;

/// Camera distance used as the base perspective divisor.
pub const CAMERA_DISTANCE: f32 = 5.0;

/// How strongly rotated depth changes the perspective divisor.
pub const PERSPECTIVE_STRENGTH: f32 = 0.3;

/// Bounce apex as a fraction of the horizon's pixel row.
pub const BOUNCE_HEIGHT_RATIO: f32 = 0.55;

/// Frames taken to fall from the apex to the floor.
pub const FALL_FRAMES: f32 = 22.0;

/// Fraction of velocity kept after an impact.
pub const BOUNCE_DAMPING: f32 = 0.82;

/// Reflected velocities below `gravity * BOUNCE_REST_FACTOR` are re-energized.
pub const BOUNCE_REST_FACTOR: f32 = 8.0;

/// Per-frame multiplicative decay of the squash factor.
pub const SQUASH_DECAY: f32 = 0.70;

/// Upper bound for the squash factor.
pub const SQUASH_MAX: f32 = 0.5;

/// 256-color index of dark floor tiles.
pub const DARK_TILE_COLOR: u8 = 236;

/// 256-color index of light floor tiles.
pub const LIGHT_TILE_COLOR: u8 = 252;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    pub columns: u16,
    pub rows: u16,
}

impl Dims {
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Number of character cells.
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Width in braille dots.
    pub fn pixel_width(&self) -> i32 {
        self.columns as i32 * DOTS_PER_CELL_X as i32
    }

    /// Height in braille dots.
    pub fn pixel_height(&self) -> i32 {
        self.rows as i32 * DOTS_PER_CELL_Y as i32
    }

    /// Row index of the horizon. Rows at or above it are sky.
    pub fn horizon_row(&self) -> u16 {
        (self.rows as u32 * HORIZON_PERCENT as u32 / 100) as u16
    }

    /// Whether the terminal is large enough to animate in.
    pub fn meets_minimum(&self) -> bool {
        self.columns >= MIN_COLUMNS && self.rows >= MIN_ROWS
    }
}

/// Floor classification of a character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FloorTile {
    #[default]
    Sky,
    Dark,
    Light,
}

/// Color mode of an encoded cell.
///
/// A cell with any lit dot is drawn in `Solid` mode, otherwise it takes the
/// floor classification underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellMode {
    Floor(FloorTile),
    Solid,
}

impl From<FloorTile> for CellMode {
    fn from(tile: FloorTile) -> Self {
        CellMode::Floor(tile)
    }
}
