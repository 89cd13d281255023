//! Braille dot framebuffer.
//!
//! Each terminal cell holds one byte whose bits select the lit dots of a
//! Unicode braille pattern, so the addressable resolution is 2x4 pixels per
//! cell. The bit assigned to each dot follows the braille block's own dot
//! numbering, which is not row-major:
//!
//! ```text
//! dot 1 (0x01)  dot 4 (0x08)
//! dot 2 (0x02)  dot 5 (0x10)
//! dot 3 (0x04)  dot 6 (0x20)
//! dot 7 (0x40)  dot 8 (0x80)
//! ```

use crate::error::{try_filled, StartupError};
use crate::types::{Dims, BRAILLE_BASE, DOTS_PER_CELL_X, DOTS_PER_CELL_Y};

/// Dot bit for `[x % 2][y % 4]`.
const DOT_BITS: [[u8; DOTS_PER_CELL_Y]; DOTS_PER_CELL_X] =
    [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

/// Glyph for a cell's dot pattern.
pub fn braille_glyph(bits: u8) -> char {
    char::from_u32(BRAILLE_BASE + bits as u32).unwrap_or(' ')
}

/// 2D grid of braille cells addressed in pixel space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    dims: Dims,
    cells: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![0; dims.cell_count()],
        }
    }

    /// Like [`PixelBuffer::new`], but reports allocation failure.
    pub fn try_new(dims: Dims) -> Result<Self, StartupError> {
        Ok(Self {
            dims,
            cells: try_filled(dims.cell_count(), 0)?,
        })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn pixel_width(&self) -> i32 {
        self.dims.pixel_width()
    }

    pub fn pixel_height(&self) -> i32 {
        self.dims.pixel_height()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Dot pattern of the cell at `(column, row)`, or 0 when out of range.
    pub fn cell(&self, column: u16, row: u16) -> u8 {
        if column >= self.dims.columns || row >= self.dims.rows {
            return 0;
        }
        self.cells[row as usize * self.dims.columns as usize + column as usize]
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    #[inline(always)]
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= self.pixel_width() || y >= self.pixel_height() {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let idx = (y / DOTS_PER_CELL_Y) * self.dims.columns as usize + x / DOTS_PER_CELL_X;
        Some((idx, DOT_BITS[x % DOTS_PER_CELL_X][y % DOTS_PER_CELL_Y]))
    }

    /// Light the dot at pixel `(x, y)`. Off-buffer coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        if let Some((idx, bit)) = self.locate(x, y) {
            self.cells[idx] |= bit;
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .is_some_and(|(idx, bit)| self.cells[idx] & bit != 0)
    }

    /// Number of lit dots in the whole buffer.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().map(|c| c.count_ones() as usize).sum()
    }
}
