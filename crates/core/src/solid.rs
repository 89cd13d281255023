//! Solid module - tetrakis hexahedron topology, rotation and projection
//!
//! The solid is a cube with a square pyramid erected on each face. Its
//! apexes sit at `PYRAMID_APEX` from the center, outside the unit cube, so the
//! silhouette reads as a spiky ball rather than a box.
//!
//! Projection runs in three stages per vertex:
//!
//! 1. Rotate about x, then y, then z by the accumulated [`Orientation`].
//! 2. Squash: scale the horizontal axes by `1 + squash / 2` and the vertical
//!    axis by `1 - squash`.
//! 3. Perspective: divide by `CAMERA_DISTANCE + z * PERSPECTIVE_STRENGTH`,
//!    where `z` is the rotated depth before squash, and place relative to the
//!    bouncing object center.

use crate::bounce::BounceState;
use crate::types::{
    Dims, CAMERA_DISTANCE, EDGE_COUNT, PERSPECTIVE_STRENGTH, PYRAMID_APEX, ROTATION_STEP,
    SOLID_LIFT_RATIO, SOLID_SCALE_RATIO, VERTEX_COUNT,
};

/// Object-space vertices: 8 cube corners followed by the 6 pyramid apexes
/// (+x, -x, +y, -y, +z, -z).
pub const SOLID_VERTICES: [[f32; 3]; VERTEX_COUNT] = [
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [PYRAMID_APEX, 0.0, 0.0],
    [-PYRAMID_APEX, 0.0, 0.0],
    [0.0, PYRAMID_APEX, 0.0],
    [0.0, -PYRAMID_APEX, 0.0],
    [0.0, 0.0, PYRAMID_APEX],
    [0.0, 0.0, -PYRAMID_APEX],
];

/// Vertex index pairs: 12 cube edges, then 4 edges from each apex to the
/// corners of its face.
pub const SOLID_EDGES: [[usize; 2]; EDGE_COUNT] = [
    [0, 1],
    [0, 2],
    [0, 4],
    [1, 3],
    [1, 5],
    [2, 3],
    [2, 6],
    [3, 7],
    [4, 5],
    [4, 6],
    [5, 7],
    [6, 7],
    // +x
    [8, 0],
    [8, 1],
    [8, 2],
    [8, 3],
    // -x
    [9, 4],
    [9, 5],
    [9, 6],
    [9, 7],
    // +y
    [10, 0],
    [10, 1],
    [10, 4],
    [10, 5],
    // -y
    [11, 2],
    [11, 3],
    [11, 6],
    [11, 7],
    // +z
    [12, 0],
    [12, 2],
    [12, 4],
    [12, 6],
    // -z
    [13, 1],
    [13, 3],
    [13, 5],
    [13, 7],
];

/// Accumulated rotation angles in radians.
///
/// Angles only ever grow; periodicity of sine and cosine takes care of
/// wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Orientation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Apply one frame's worth of rotation.
    pub fn advance(&mut self) {
        self.x += ROTATION_STEP[0];
        self.y += ROTATION_STEP[1];
        self.z += ROTATION_STEP[2];
    }

    /// Precompute sines and cosines for a batch of vertices.
    pub fn rotation(&self) -> Rotation {
        let (s1, c1) = self.x.sin_cos();
        let (s2, c2) = self.y.sin_cos();
        let (s3, c3) = self.z.sin_cos();
        Rotation {
            s1,
            c1,
            s2,
            c2,
            s3,
            c3,
        }
    }
}

/// Composite x-y-z rotation with cached trigonometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    s1: f32,
    c1: f32,
    s2: f32,
    c2: f32,
    s3: f32,
    c3: f32,
}

impl Rotation {
    pub fn apply(&self, [x, y, z]: [f32; 3]) -> [f32; 3] {
        let y1 = y * self.c1 - z * self.s1;
        let z1 = y * self.s1 + z * self.c1;
        let x2 = x * self.c2 + z1 * self.s2;
        let z2 = -x * self.s2 + z1 * self.c2;
        let x3 = x2 * self.c3 - y1 * self.s3;
        let y3 = x2 * self.s3 + y1 * self.c3;
        [x3, y3, z2]
    }
}

/// A projected vertex in braille pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    /// Integer pixel coordinates, truncated toward zero.
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// Screen placement of the solid, derived once from terminal dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Pixels per object-space unit at the base camera distance.
    pub scale: f32,
    /// Horizontal object center.
    pub center_x: f32,
    /// Horizon row in pixels; bounce position is measured up from here.
    pub floor_y: f32,
    /// Extra lift of the object center above the bounce position.
    pub lift: f32,
}

impl Projection {
    pub fn for_dims(dims: Dims) -> Self {
        let pw = dims.pixel_width() as f32;
        let ph = dims.pixel_height() as f32;
        let scale = pw.min(ph) * SOLID_SCALE_RATIO;
        Self {
            scale,
            center_x: pw / 2.0,
            floor_y: dims.horizon_row() as f32 * 4.0,
            lift: scale * SOLID_LIFT_RATIO,
        }
    }

    /// Vertical object center for a given bounce height.
    pub fn center_y(&self, bounce_position: f32) -> f32 {
        self.floor_y - bounce_position - self.lift
    }
}

/// The rendered polyhedron: fixed topology plus a screen projection.
#[derive(Debug, Clone)]
pub struct SolidModel {
    projection: Projection,
}

impl SolidModel {
    pub fn new(projection: Projection) -> Self {
        Self { projection }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn edges(&self) -> &'static [[usize; 2]; EDGE_COUNT] {
        &SOLID_EDGES
    }

    /// Project every vertex into `out`.
    pub fn project_into(
        &self,
        orientation: &Orientation,
        bounce: &BounceState,
        out: &mut [ScreenPoint; VERTEX_COUNT],
    ) {
        let rotation = orientation.rotation();
        let horizontal = 1.0 + bounce.squash * 0.5;
        let vertical = 1.0 - bounce.squash;
        let cx = self.projection.center_x;
        let cy = self.projection.center_y(bounce.position);
        let scale = self.projection.scale;

        for (vertex, slot) in SOLID_VERTICES.iter().zip(out.iter_mut()) {
            let [x, y, z] = rotation.apply(*vertex);
            // Depth comes from the rotated z before squash.
            let d = CAMERA_DISTANCE + z * PERSPECTIVE_STRENGTH;
            let (x, y) = (x * horizontal, y * vertical);
            *slot = ScreenPoint {
                x: cx + (x / d) * scale,
                y: cy + (y / d) * scale,
            };
        }
    }

    pub fn project(
        &self,
        orientation: &Orientation,
        bounce: &BounceState,
    ) -> [ScreenPoint; VERTEX_COUNT] {
        let mut out = [ScreenPoint::default(); VERTEX_COUNT];
        self.project_into(orientation, bounce, &mut out);
        out
    }
}
