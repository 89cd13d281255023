//! FrameEncoder: composites the dot buffer over the floor into terminal bytes.
//!
//! Every frame is a full redraw from the home position. A color escape is only
//! written when a cell's mode differs from the previous cell in the same row,
//! so a frame costs roughly one escape per color run instead of one per cell.

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Colors, Print, ResetColor, SetColors},
    QueueableCommand,
};

use crate::error::{try_filled, StartupError};
use crate::fb::{braille_glyph, PixelBuffer};
use crate::floor::FloorField;
use crate::types::{CellMode, Dims, FloorTile, DARK_TILE_COLOR, LIGHT_TILE_COLOR};

/// Row separator. Raw mode disables output post-processing, so the carriage
/// return has to be explicit.
pub const ROW_SEPARATOR: &str = "\r\n";

/// Counters for one encoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Color escapes written, excluding end-of-row resets.
    pub mode_changes: usize,
    /// Cells drawn as braille glyphs.
    pub glyph_cells: usize,
}

/// Upper bound on the encoded size of one frame.
pub fn worst_case_frame_len(dims: Dims) -> usize {
    dims.rows as usize * (dims.columns as usize * 20 + 16) + 64
}

/// Reusable output buffer sized for the worst-case frame.
pub struct FrameEncoder {
    buf: Vec<u8>,
}

impl FrameEncoder {
    pub fn new(dims: Dims) -> Self {
        Self {
            buf: Vec::with_capacity(worst_case_frame_len(dims)),
        }
    }

    /// Like [`FrameEncoder::new`], but reports allocation failure.
    pub fn try_new(dims: Dims) -> Result<Self, StartupError> {
        let mut buf = try_filled(worst_case_frame_len(dims), 0u8)?;
        buf.clear();
        Ok(Self { buf })
    }

    /// Encode a frame, replacing the previous one.
    pub fn encode(&mut self, fb: &PixelBuffer, floor: &FloorField) -> Result<FrameStats> {
        self.buf.clear();
        encode_frame_into(fb, floor, &mut self.buf)
    }

    /// Bytes of the most recently encoded frame.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }
}

/// Encode a full frame into `out`.
///
/// `fb` and `floor` must cover the same dimensions.
pub fn encode_frame_into(
    fb: &PixelBuffer,
    floor: &FloorField,
    out: &mut Vec<u8>,
) -> Result<FrameStats> {
    debug_assert_eq!(fb.dims(), floor.dims());
    let dims = fb.dims();
    let mut stats = FrameStats::default();

    out.queue(cursor::MoveTo(0, 0))?;

    for row in 0..dims.rows {
        let mut current: Option<CellMode> = None;
        for column in 0..dims.columns {
            let bits = fb.cell(column, row);
            let mode = if bits != 0 {
                CellMode::Solid
            } else {
                CellMode::from(floor.tile(column, row))
            };

            if current != Some(mode) {
                write_mode_into(out, mode)?;
                current = Some(mode);
                stats.mode_changes += 1;
            }

            if bits != 0 {
                out.queue(Print(braille_glyph(bits)))?;
                stats.glyph_cells += 1;
            } else {
                out.push(b' ');
            }
        }

        out.queue(ResetColor)?;
        if row + 1 < dims.rows {
            out.extend_from_slice(ROW_SEPARATOR.as_bytes());
        }
    }

    Ok(stats)
}

/// Write the color escape that selects `mode`.
pub fn write_mode_into(out: &mut Vec<u8>, mode: CellMode) -> Result<()> {
    out.queue(SetColors(mode_colors(mode)))?;
    Ok(())
}

fn mode_colors(mode: CellMode) -> Colors {
    match mode {
        CellMode::Floor(FloorTile::Sky) => Colors::new(Color::Reset, Color::Reset),
        CellMode::Floor(FloorTile::Dark) => {
            Colors::new(Color::Reset, Color::AnsiValue(DARK_TILE_COLOR))
        }
        CellMode::Floor(FloorTile::Light) => {
            Colors::new(Color::Reset, Color::AnsiValue(LIGHT_TILE_COLOR))
        }
        CellMode::Solid => Colors::new(Color::Cyan, Color::Reset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_bytes(mode: CellMode) -> Vec<u8> {
        let mut out = Vec::new();
        write_mode_into(&mut out, mode).unwrap();
        out
    }

    #[test]
    fn test_modes_have_distinct_escapes() {
        let modes = [
            CellMode::Floor(FloorTile::Sky),
            CellMode::Floor(FloorTile::Dark),
            CellMode::Floor(FloorTile::Light),
            CellMode::Solid,
        ];
        for (i, a) in modes.iter().enumerate() {
            for b in &modes[i + 1..] {
                assert_ne!(mode_bytes(*a), mode_bytes(*b));
            }
        }
    }

    #[test]
    fn test_blank_sky_row_is_one_escape() {
        // 20x10 terminal: rows 0..=5 are all sky.
        let dims = Dims::new(20, 10);
        let fb = PixelBuffer::new(dims);
        let floor = FloorField::build(dims);
        let mut out = Vec::new();
        encode_frame_into(&fb, &floor, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let first_row = text.split(ROW_SEPARATOR).next().unwrap();
        let sky = String::from_utf8(mode_bytes(CellMode::Floor(FloorTile::Sky))).unwrap();
        assert_eq!(first_row.matches(sky.as_str()).count(), 1);
        assert!(first_row.ends_with(&format!("{}\x1b[0m", " ".repeat(20))));
    }

    #[test]
    fn test_glyph_cells_are_counted() {
        let dims = Dims::new(20, 10);
        let mut fb = PixelBuffer::new(dims);
        fb.set_pixel(0, 0);
        fb.set_pixel(3, 0);
        let floor = FloorField::build(dims);
        let mut out = Vec::new();
        let stats = encode_frame_into(&fb, &floor, &mut out).unwrap();
        assert_eq!(stats.glyph_cells, 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{2801}'));
        assert!(text.contains('\u{2808}'));
    }

    #[test]
    fn test_worst_case_len() {
        assert_eq!(worst_case_frame_len(Dims::new(20, 10)), 10 * (400 + 16) + 64);
    }

    #[test]
    fn test_encoder_reuses_buffer() {
        let dims = Dims::new(20, 10);
        let fb = PixelBuffer::new(dims);
        let floor = FloorField::build(dims);
        let mut enc = FrameEncoder::try_new(dims).unwrap();
        enc.encode(&fb, &floor).unwrap();
        let first = enc.bytes().to_vec();
        enc.encode(&fb, &floor).unwrap();
        assert_eq!(enc.bytes(), first.as_slice());
    }
}
