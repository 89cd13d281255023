//! Headless frame loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use icosa::input::{FramePacer, InputSource};
use icosa::term::{StartupError, ROW_SEPARATOR};
use icosa::types::Dims;
use icosa::Animation;

/// Reports a keypress during the `stop_on`th frame wait. Non-blocking polls
/// (the pending-input check) see nothing unless `pending` is set.
struct ScriptedInput {
    waits: usize,
    stop_on: usize,
    pending: bool,
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        if self.pending {
            return Ok(true);
        }
        if timeout.is_zero() {
            return Ok(false);
        }
        self.waits += 1;
        Ok(self.waits >= self.stop_on)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(Event::Key(KeyEvent::from(KeyCode::Char('x'))))
    }
}

fn slow_pacer() -> FramePacer {
    // Scripted polls never sleep; a long interval keeps every wait non-zero.
    FramePacer::new(Duration::from_secs(10))
}

#[test]
fn test_runs_until_keypress() {
    let dims = Dims::new(80, 24);
    let mut animation = Animation::new(dims).unwrap();
    let mut input = ScriptedInput {
        waits: 0,
        stop_on: 5,
        pending: false,
    };
    let mut frames = Vec::new();
    let shown = animation
        .run(&mut input, &mut slow_pacer(), |bytes| {
            frames.push(bytes.to_vec());
            Ok(())
        })
        .unwrap();

    assert_eq!(shown, 5);
    assert_eq!(frames.len(), 5);
    for frame in &frames {
        let text = std::str::from_utf8(frame).unwrap();
        assert_eq!(text.matches(ROW_SEPARATOR).count(), 23);
    }
    // The solid moves between frames.
    assert_ne!(frames[0], frames[4]);
    assert_eq!(animation.scene().frame(), 5);
}

#[test]
fn test_pending_input_stops_before_first_frame() {
    let mut animation = Animation::new(Dims::new(40, 12)).unwrap();
    let mut input = ScriptedInput {
        waits: 0,
        stop_on: usize::MAX,
        pending: true,
    };
    let mut draws = 0;
    let shown = animation
        .run(&mut input, &mut slow_pacer(), |_| {
            draws += 1;
            Ok(())
        })
        .unwrap();
    assert_eq!(shown, 0);
    assert_eq!(draws, 0);
}

#[test]
fn test_write_failure_stops_the_loop() {
    let mut animation = Animation::new(Dims::new(40, 12)).unwrap();
    let mut input = ScriptedInput {
        waits: 0,
        stop_on: usize::MAX,
        pending: false,
    };
    let result = animation.run(&mut input, &mut slow_pacer(), |_| {
        Err(anyhow::anyhow!("broken pipe"))
    });
    assert!(result.is_err());
}

#[test]
fn test_rejects_small_terminal() {
    for dims in [Dims::new(19, 24), Dims::new(80, 9), Dims::new(0, 0)] {
        match Animation::new(dims) {
            Err(StartupError::TooSmall { columns, rows }) => {
                assert_eq!((columns, rows), (dims.columns, dims.rows));
            }
            other => panic!("expected TooSmall for {dims:?}, got {:?}", other.err()),
        }
    }
}

#[test]
fn test_frame_pipeline_is_deterministic() {
    let dims = Dims::new(64, 20);
    let mut a = Animation::new(dims).unwrap();
    let mut b = Animation::new(dims).unwrap();
    for _ in 0..50 {
        a.render_frame().unwrap();
        b.render_frame().unwrap();
        assert_eq!(a.frame_bytes(), b.frame_bytes());
        a.finish_frame();
        b.finish_frame();
    }
}

#[test]
fn test_bounce_position_holds_through_the_loop() {
    let mut animation = Animation::new(Dims::new(80, 24)).unwrap();
    for _ in 0..500 {
        animation.render_frame().unwrap();
        assert!(animation.scene().bounce().position >= 0.0);
        animation.finish_frame();
    }
}
