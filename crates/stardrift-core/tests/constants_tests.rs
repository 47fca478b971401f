// Host-side tests for constants and their relationships.

use stardrift_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(STAR_COUNT > 0);
    assert!(STAR_SPREAD_RADIUS > 0.0);
    assert!(STAR_SPEED > 0.0 && STAR_SPEED < STAR_SPREAD_RADIUS);
    assert!(FADE_DURATION > 0.0 && FADE_DURATION <= 0.5);
    assert!(PATH_SEGMENTS > 0);
    assert!(PATH_POINTS >= PATH_SEGMENTS);
    assert!(PATH_CONTROL_POINTS.len() >= 2);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
}

#[test]
fn colors_are_normalized() {
    for c in STAR_COLOR.iter().chain(LIGHT_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_is_larger_than_a_star() {
    assert!(GLOW_SIZE > STAR_SIZE);
    assert!((GLOW_SIZE - 0.2).abs() < 1e-6);
}

#[test]
fn fade_zones_do_not_overlap() {
    let fade_in_end = FADE_DURATION * PATH_POINTS as f32;
    let fade_out_start = (1.0 - FADE_DURATION) * PATH_POINTS as f32;
    assert!(fade_in_end < fade_out_start);
}
