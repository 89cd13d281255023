//! SceneView: maps `core::SceneState` into a dot framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{SceneState, ScreenPoint};
use crate::fb::PixelBuffer;
use crate::raster::draw_edges;
use crate::types::VERTEX_COUNT;

/// Projects the solid and rasterizes its wireframe.
#[derive(Debug, Clone)]
pub struct SceneView {
    points: [ScreenPoint; VERTEX_COUNT],
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            points: [ScreenPoint::default(); VERTEX_COUNT],
        }
    }
}

impl SceneView {
    /// Draw the solid's edges on top of whatever `fb` already holds.
    ///
    /// Callers clear the buffer at the start of each frame.
    pub fn render_into(&mut self, scene: &SceneState, fb: &mut PixelBuffer) {
        scene.project_into(&mut self.points);
        draw_edges(fb, &self.points, scene.solid().edges());
    }

    /// Vertices projected by the last `render_into` call.
    pub fn points(&self) -> &[ScreenPoint; VERTEX_COUNT] {
        &self.points
    }
}
