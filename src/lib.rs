//! icosa (workspace facade crate).
//!
//! Re-exports the member crates as `icosa::{core, input, term, types}` and adds
//! the pieces that tie them into a program: the frame loop, the CLI surface and
//! runtime configuration.

pub mod animation;
pub mod cli;
pub mod config;

pub use icosa_core as core;
pub use icosa_input as input;
pub use icosa_term as term;
pub use icosa_types as types;

pub use animation::Animation;
