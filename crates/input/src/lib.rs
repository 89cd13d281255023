//! Terminal input module.
//!
//! The animation only needs one decision from input: whether to stop. This
//! module classifies `crossterm` events for that decision and paces frames
//! by using the input poll as the frame timer.

pub mod map;
pub mod pacer;

pub use icosa_types as types;

pub use map::is_exit_event;
pub use pacer::{wait_until, FramePacer, InputSource, TerminalInput};
