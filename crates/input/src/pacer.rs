//! Frame pacing combined with input polling.
//!
//! The wait for the next frame boundary and the check for a keypress are the
//! same call: input is polled with a timeout that ends at the frame deadline,
//! so a keypress cuts the wait short.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::map::is_exit_event;
use crate::types::FRAME_MS;

/// Source of terminal events.
pub trait InputSource {
    /// Wait up to `timeout` for an event to become readable.
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read one event. Only called after `poll` returned true.
    fn read(&mut self) -> Result<Event>;
}

/// The real terminal's event queue.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// Wait until `deadline` or until an exit event arrives, whichever is first.
///
/// Returns `true` if the animation should stop. A deadline in the past still
/// polls once without blocking.
pub fn wait_until<I: InputSource>(input: &mut I, deadline: Instant) -> Result<bool> {
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !input.poll(remaining)? {
            return Ok(false);
        }
        if is_exit_event(&input.read()?) {
            return Ok(true);
        }
        if remaining.is_zero() {
            return Ok(false);
        }
    }
}

/// Tracks fixed-cadence frame deadlines.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    frame_start: Instant,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(Duration::from_millis(FRAME_MS))
    }
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame_start: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Mark the beginning of a frame.
    pub fn start_frame(&mut self, now: Instant) {
        self.frame_start = now;
    }

    /// When the current frame's time slot ends.
    pub fn deadline(&self) -> Instant {
        self.frame_start + self.interval
    }

    /// Time left in the current frame. Zero once the frame has overrun.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline().saturating_duration_since(now)
    }

    /// Non-blocking check for pending input.
    pub fn input_pending<I: InputSource>(&self, input: &mut I) -> Result<bool> {
        wait_until(input, Instant::now())
    }

    /// Block until the frame deadline, returning early on input.
    pub fn wait<I: InputSource>(&self, input: &mut I) -> Result<bool> {
        wait_until(input, self.deadline())
    }
}
