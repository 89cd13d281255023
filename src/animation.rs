//! The frame loop: simulation, rasterization, encoding and pacing in sequence.
//!
//! [`Animation`] owns every buffer the loop needs, allocated once up front, so
//! a frame is pure computation plus one write. The loop is generic over its
//! input source and output sink and runs headlessly in tests.

use std::time::Instant;

use anyhow::Result;
use log::info;

use icosa_core::{AnimationConfig, SceneState};
use icosa_input::{FramePacer, InputSource};
use icosa_term::{
    check_dims, FloorField, FrameEncoder, FrameStats, PixelBuffer, SceneView, StartupError,
};
use icosa_types::Dims;

pub struct Animation {
    config: AnimationConfig,
    scene: SceneState,
    view: SceneView,
    pixels: PixelBuffer,
    floor: FloorField,
    encoder: FrameEncoder,
}

impl Animation {
    /// Validate the terminal size and allocate all per-run state.
    pub fn new(dims: Dims) -> Result<Self, StartupError> {
        let dims = check_dims(dims)?;
        let config = AnimationConfig::for_dims(dims);
        let pixels = PixelBuffer::try_new(dims)?;
        let floor = FloorField::try_build(dims)?;
        let encoder = FrameEncoder::try_new(dims)?;
        info!(
            "animating on {}x{} cells ({}x{} dots), horizon at row {}",
            dims.columns,
            dims.rows,
            dims.pixel_width(),
            dims.pixel_height(),
            floor.horizon_row()
        );

        Ok(Self {
            scene: SceneState::new(&config),
            config,
            view: SceneView::default(),
            pixels,
            floor,
            encoder,
        })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn view(&self) -> &SceneView {
        &self.view
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn floor(&self) -> &FloorField {
        &self.floor
    }

    /// Bytes of the most recently rendered frame.
    pub fn frame_bytes(&self) -> &[u8] {
        self.encoder.bytes()
    }

    /// Build the next frame: clear, step physics, draw the solid, encode.
    ///
    /// Orientation is left untouched until [`Animation::finish_frame`].
    pub fn render_frame(&mut self) -> Result<FrameStats> {
        self.pixels.clear();
        self.scene.advance_physics();
        self.view.render_into(&self.scene, &mut self.pixels);
        self.encoder.encode(&self.pixels, &self.floor)
    }

    /// Rotate the solid for the next frame.
    pub fn finish_frame(&mut self) {
        self.scene.finish_frame();
    }

    /// Run frames until input arrives. Returns the number of frames shown.
    pub fn run<I, D>(&mut self, input: &mut I, pacer: &mut FramePacer, mut draw: D) -> Result<u64>
    where
        I: InputSource,
        D: FnMut(&[u8]) -> Result<()>,
    {
        loop {
            pacer.start_frame(Instant::now());
            if pacer.input_pending(input)? {
                break;
            }

            self.render_frame()?;
            draw(self.encoder.bytes())?;
            self.finish_frame();

            if pacer.wait(input)? {
                break;
            }
        }

        info!("stopped after {} frames", self.scene.frame());
        Ok(self.scene.frame())
    }
}
