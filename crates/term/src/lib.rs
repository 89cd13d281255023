//! Terminal rendering module.
//!
//! This is a small, demo-oriented rendering layer. It avoids any widget
//! toolkit and instead draws into a braille dot framebuffer that is composited
//! over a precomputed floor and flushed to the terminal as one byte string.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - 2x4 sub-cell resolution through braille glyphs
//! - Minimal escape output: colors change only on mode transitions

pub mod encoder;
pub mod error;
pub mod fb;
pub mod floor;
pub mod raster;
pub mod renderer;
pub mod scene_view;

pub use icosa_core as core;
pub use icosa_types as types;

pub use encoder::{
    encode_frame_into, worst_case_frame_len, write_mode_into, FrameEncoder, FrameStats,
    ROW_SEPARATOR,
};
pub use error::{check_dims, StartupError};
pub use fb::{braille_glyph, PixelBuffer};
pub use floor::FloorField;
pub use raster::{draw_edges, draw_line};
pub use renderer::{query_dims, restore_terminal, TerminalSession};
pub use scene_view::SceneView;
