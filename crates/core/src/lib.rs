//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the animation's geometry and physics. It has **zero
//! dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same dimensions produce identical frames
//! - **Testable**: Every stage can be stepped headlessly
//! - **Fast**: Projection writes into caller-owned arrays, no per-frame allocation
//!
//! # Module Structure
//!
//! - [`bounce`]: vertical bounce physics with squash-and-stretch
//! - [`solid`]: tetrakis hexahedron topology, rotation and perspective projection
//! - [`scene`]: size-derived configuration and the mutable per-frame state
//!
//! # Example
//!
//! ```
//! use icosa_core::{AnimationConfig, SceneState, ScreenPoint};
//! use icosa_types::{Dims, VERTEX_COUNT};
//!
//! let config = AnimationConfig::for_dims(Dims::new(80, 24));
//! let mut scene = SceneState::new(&config);
//!
//! let mut points = [ScreenPoint::default(); VERTEX_COUNT];
//! scene.advance_physics();
//! scene.project_into(&mut points);
//! scene.finish_frame();
//!
//! assert!(scene.bounce().position >= 0.0);
//! ```

pub mod bounce;
pub mod scene;
pub mod solid;

pub use icosa_types as types;

pub use bounce::{BounceParams, BounceSimulator, BounceState, BounceStep};
pub use scene::{AnimationConfig, SceneState};
pub use solid::{Orientation, Projection, Rotation, ScreenPoint, SolidModel, SOLID_EDGES, SOLID_VERTICES};
