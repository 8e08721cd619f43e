// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_field_constants_are_within_reasonable_bounds() {
    assert_eq!(PARTICLE_COUNT, 1500);
    assert!(PARTICLE_SPREAD > 0.0);
    assert!(PARTICLE_SIZE > 0.0);
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
    assert!(PARTICLE_COLOR_HEX <= 0xff_ffff);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sits_outside_the_near_plane_and_sees_the_field() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_Z > CAMERA_NEAR);
    // The far side of the cube must not be clipped
    assert!(CAMERA_Z + PARTICLE_SPREAD / 2.0 < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_constants_have_logical_relationships() {
    assert!(HEADER_SCROLLED_THRESHOLD_PX > 0.0);
    // The fixed header fits inside the scroll-spy lookahead
    assert!(ANCHOR_SCROLL_OFFSET_PX <= SCROLL_SPY_LOOKAHEAD_PX);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(NOTICE_DURATION_MS > 0);
}

#[test]
fn selectors_target_the_expected_markup() {
    assert!(SEL_ANCHORS.starts_with("a[href^="));
    assert_eq!(SEL_REVEAL_TARGETS.split(',').count(), 4);
    assert_ne!(ID_CONTACT_FORM, ID_MODAL_FORM);
    assert_ne!(PLAY_GLYPH, PAUSE_GLYPH);
}
