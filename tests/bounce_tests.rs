//! Bounce physics invariants across terminal sizes.

use icosa::core::{AnimationConfig, BounceParams, BounceSimulator, BounceStep};
use icosa::types::{Dims, SQUASH_MAX};

fn sizes() -> [Dims; 4] {
    [
        Dims::new(20, 10),
        Dims::new(80, 24),
        Dims::new(132, 43),
        Dims::new(300, 90),
    ]
}

#[test]
fn test_position_never_negative() {
    for dims in sizes() {
        let config = AnimationConfig::for_dims(dims);
        let mut sim = BounceSimulator::new(config.bounce);
        for frame in 0..5000 {
            sim.advance();
            let s = sim.state();
            assert!(s.position >= 0.0, "{dims:?} frame {frame}: {s:?}");
            assert!((0.0..=SQUASH_MAX).contains(&s.squash), "{dims:?} frame {frame}: {s:?}");
        }
    }
}

#[test]
fn test_bounce_never_settles() {
    for dims in sizes() {
        let params = AnimationConfig::for_dims(dims).bounce;
        let mut sim = BounceSimulator::new(params);

        // Let the first bounce sequence lose energy and get re-energized.
        let mut restarted_at = None;
        for frame in 0..600 {
            if sim.advance() == BounceStep::Restart {
                restarted_at = Some(frame);
                break;
            }
        }
        assert!(restarted_at.is_some(), "{dims:?} never re-energized");

        // After a restart the solid climbs back near its starting height.
        let mut peak: f32 = 0.0;
        for _ in 0..60 {
            sim.advance();
            peak = peak.max(sim.state().position);
        }
        assert!(
            peak >= params.max_height * 0.9,
            "{dims:?}: peak {peak} of {}",
            params.max_height
        );
    }
}

#[test]
fn test_velocity_does_not_stay_zero() {
    let mut sim = BounceSimulator::new(BounceParams::for_floor(52.0));
    let mut still_frames = 0;
    let mut longest = 0;
    for _ in 0..2000 {
        sim.advance();
        if sim.state().velocity.abs() < 1e-6 {
            still_frames += 1;
            longest = longest.max(still_frames);
        } else {
            still_frames = 0;
        }
    }
    assert!(longest <= 1);
}

#[test]
fn test_bounce_period_independent_of_size() {
    let first_restart = |dims: Dims| {
        let mut sim = BounceSimulator::new(AnimationConfig::for_dims(dims).bounce);
        (0..1000)
            .position(|_| sim.advance() == BounceStep::Restart)
            .unwrap()
    };
    let a = first_restart(Dims::new(80, 24)) as i64;
    let b = first_restart(Dims::new(300, 90)) as i64;
    assert!((a - b).abs() <= 2, "{a} vs {b}");
}
