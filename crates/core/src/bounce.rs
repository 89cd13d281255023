//! Bounce module - one-dimensional vertical physics with squash-and-stretch
//!
//! Position is measured in braille pixels above the floor. The simulation is a
//! plain explicit Euler step per frame: gravity reduces velocity, velocity moves
//! the position. Hitting the floor clamps the position, records a squash
//! proportional to the impact speed and reflects the velocity with damping.
//!
//! Damping alone would let the bounce settle. Once a reflected velocity drops
//! below `gravity * BOUNCE_REST_FACTOR` it is reset to the launch velocity, so
//! the solid keeps bouncing for as long as the animation runs.

use crate::types::{
    BOUNCE_DAMPING, BOUNCE_HEIGHT_RATIO, BOUNCE_REST_FACTOR, FALL_FRAMES, SQUASH_DECAY, SQUASH_MAX,
};

/// Physics constants, derived once from the horizon's pixel row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceParams {
    /// Apex height in pixels.
    pub max_height: f32,
    /// Velocity lost per frame.
    pub gravity: f32,
    /// Launch speed that reaches `max_height` from the floor.
    pub restart_velocity: f32,
    pub damping: f32,
    pub squash_decay: f32,
}

impl BounceParams {
    /// Derive parameters so a fall from the apex takes `FALL_FRAMES` frames at
    /// any terminal size.
    pub fn for_floor(floor_pixel_row: f32) -> Self {
        let max_height = (floor_pixel_row * BOUNCE_HEIGHT_RATIO).max(0.0);
        let gravity = 2.0 * max_height / (FALL_FRAMES * FALL_FRAMES);
        let restart_velocity = (2.0 * max_height * gravity).sqrt();
        Self {
            max_height,
            gravity,
            restart_velocity,
            damping: BOUNCE_DAMPING,
            squash_decay: SQUASH_DECAY,
        }
    }

    /// Reflected speeds below this are treated as a dissipated bounce.
    pub fn rest_threshold(&self) -> f32 {
        self.gravity * BOUNCE_REST_FACTOR
    }
}

/// Mutable bounce state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceState {
    /// Height above the floor, never negative.
    pub position: f32,
    /// Signed vertical speed, positive is upward.
    pub velocity: f32,
    /// Deformation factor in `[0, SQUASH_MAX]`.
    pub squash: f32,
}

impl BounceState {
    /// Resting at the apex, about to fall.
    pub fn at_apex(params: &BounceParams) -> Self {
        Self {
            position: params.max_height,
            velocity: 0.0,
            squash: 0.0,
        }
    }
}

/// What happened during one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceStep {
    /// No floor contact this frame.
    Airborne,
    /// Hit the floor and rebounded with damped velocity.
    Impact,
    /// Hit the floor with too little energy left; relaunched at full speed.
    Restart,
}

/// Advances a [`BounceState`] once per frame.
#[derive(Debug, Clone)]
pub struct BounceSimulator {
    params: BounceParams,
    state: BounceState,
}

impl BounceSimulator {
    pub fn new(params: BounceParams) -> Self {
        Self {
            state: BounceState::at_apex(&params),
            params,
        }
    }

    pub fn params(&self) -> &BounceParams {
        &self.params
    }

    pub fn state(&self) -> &BounceState {
        &self.state
    }

    /// Step the simulation by one frame.
    pub fn advance(&mut self) -> BounceStep {
        let p = &self.params;
        let s = &mut self.state;

        s.velocity -= p.gravity;
        s.position += s.velocity;

        let mut step = BounceStep::Airborne;
        if s.position <= 0.0 {
            s.position = 0.0;
            s.squash = if p.restart_velocity > 0.0 {
                (s.velocity.abs() / p.restart_velocity * SQUASH_MAX).min(SQUASH_MAX)
            } else {
                0.0
            };
            s.velocity = s.velocity.abs() * p.damping;
            step = BounceStep::Impact;
            if s.velocity < p.rest_threshold() {
                s.velocity = p.restart_velocity;
                step = BounceStep::Restart;
            }
        }

        s.squash *= p.squash_decay;
        step
    }
}
