//! Scene module - the single mutable simulation value driven by the frame loop.

use log::{debug, trace};

use crate::bounce::{BounceParams, BounceSimulator, BounceState, BounceStep};
use crate::solid::{Orientation, Projection, ScreenPoint, SolidModel};
use crate::types::{Dims, VERTEX_COUNT};

/// Size-dependent parameters, derived once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub dims: Dims,
    pub projection: Projection,
    pub bounce: BounceParams,
}

impl AnimationConfig {
    pub fn for_dims(dims: Dims) -> Self {
        let projection = Projection::for_dims(dims);
        let bounce = BounceParams::for_floor(projection.floor_y);
        debug!(
            "derived animation config: {}x{} cells, scale={:.2}, apex={:.2}px, gravity={:.4}, launch={:.4}",
            dims.columns,
            dims.rows,
            projection.scale,
            bounce.max_height,
            bounce.gravity,
            bounce.restart_velocity
        );
        Self {
            dims,
            projection,
            bounce,
        }
    }
}

/// Orientation, bounce physics and the solid being animated.
#[derive(Debug, Clone)]
pub struct SceneState {
    orientation: Orientation,
    bounce: BounceSimulator,
    solid: SolidModel,
    frame: u64,
}

impl SceneState {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            orientation: Orientation::default(),
            bounce: BounceSimulator::new(config.bounce),
            solid: SolidModel::new(config.projection),
            frame: 0,
        }
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn bounce(&self) -> &BounceState {
        self.bounce.state()
    }

    pub fn solid(&self) -> &SolidModel {
        &self.solid
    }

    /// Frames completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run this frame's physics step.
    pub fn advance_physics(&mut self) -> BounceStep {
        let step = self.bounce.advance();
        if step == BounceStep::Restart {
            trace!("bounce re-energized at frame {}", self.frame);
        }
        step
    }

    /// Project the solid with the current orientation and bounce state.
    pub fn project_into(&self, out: &mut [ScreenPoint; VERTEX_COUNT]) {
        self.solid
            .project_into(&self.orientation, self.bounce.state(), out);
    }

    /// Close the frame: rotate for the next one.
    pub fn finish_frame(&mut self) {
        self.orientation.advance();
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_links_projection_and_physics() {
        let config = AnimationConfig::for_dims(Dims::new(80, 24));
        assert_eq!(config.projection.floor_y, 52.0);
        assert!((config.bounce.max_height - 52.0 * 0.55).abs() < 1e-4);
    }

    #[test]
    fn test_scene_frame_sequence() {
        let config = AnimationConfig::for_dims(Dims::new(40, 20));
        let mut scene = SceneState::new(&config);
        assert_eq!(scene.frame(), 0);
        assert_eq!(*scene.orientation(), Orientation::default());

        scene.advance_physics();
        assert!(scene.bounce().position < config.bounce.max_height);

        let mut points = [ScreenPoint::default(); VERTEX_COUNT];
        scene.project_into(&mut points);
        assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));

        scene.finish_frame();
        assert_eq!(scene.frame(), 1);
        assert!(scene.orientation().x > 0.0);
    }
}
