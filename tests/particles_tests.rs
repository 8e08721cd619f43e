// Host-side tests for the particle field math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use crate::core::constants::*;
use crate::core::particles::*;
use glam::{Vec3, Vec4};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

#[test]
fn scattered_positions_fill_the_cube() {
    let mut rng = StdRng::seed_from_u64(7);
    let positions = scatter_positions(&mut rng, PARTICLE_COUNT);
    assert_eq!(positions.len(), 1500);
    let half = PARTICLE_SPREAD / 2.0;
    for p in &positions {
        for c in p {
            assert!((-half..=half).contains(c), "component {c} out of range");
        }
    }
    // Uniform draw: every octant gets some points
    let mut octants = [0usize; 8];
    for p in &positions {
        let idx = (p[0] > 0.0) as usize | ((p[1] > 0.0) as usize) << 1 | ((p[2] > 0.0) as usize) << 2;
        octants[idx] += 1;
    }
    assert!(octants.iter().all(|&n| n > 100), "{octants:?}");
}

#[test]
fn same_seed_gives_same_field() {
    let a = scatter_positions(&mut StdRng::seed_from_u64(1), 16);
    let b = scatter_positions(&mut StdRng::seed_from_u64(1), 16);
    assert_eq!(a, b);
}

#[test]
fn idle_pointer_advances_both_axes_by_one_step() {
    let mut rot = FieldRotation::default();
    rot.advance(PointerOffset::default());
    assert_eq!(rot.x, ROTATION_STEP);
    assert_eq!(rot.y, ROTATION_STEP);
    for _ in 0..999 {
        rot.advance(PointerOffset::default());
    }
    assert!((rot.x - 1.0).abs() < 1e-3);
    assert!((rot.y - 1.0).abs() < 1e-3);
}

#[test]
fn drift_speed_holds_after_hours_of_spinning() {
    // Roughly 40000 rad of accumulated spin, wrapped into one turn
    let mut rot = FieldRotation {
        x: 40000.0_f32.rem_euclid(TAU),
        y: 16384.0_f32.rem_euclid(TAU),
    };
    for _ in 0..100_000 {
        let before = rot;
        rot.advance(PointerOffset::default());
        let step_x = (rot.x - before.x).rem_euclid(TAU);
        let step_y = (rot.y - before.y).rem_euclid(TAU);
        assert!((step_x - ROTATION_STEP).abs() < 1e-5, "step_x {step_x}");
        assert!((step_y - ROTATION_STEP).abs() < 1e-5, "step_y {step_y}");
    }
}

#[test]
fn angles_stay_within_one_turn() {
    let mut rot = FieldRotation::default();
    let pulls = [
        PointerOffset { x: -5.0, y: -5.0 },
        PointerOffset { x: 5.0, y: 5.0 },
    ];
    for pointer in pulls {
        for _ in 0..20_000 {
            rot.advance(pointer);
            assert!((0.0..TAU).contains(&rot.x), "x {}", rot.x);
            assert!((0.0..TAU).contains(&rot.y), "y {}", rot.y);
        }
    }
}

#[test]
fn pointer_offset_is_relative_to_viewport_center() {
    let p = PointerOffset::from_client(600.0, 300.0, 1000.0, 800.0);
    assert!((p.x - 1.0).abs() < 1e-6);
    assert!((p.y + 1.0).abs() < 1e-6);
    let centered = PointerOffset::from_client(500.0, 400.0, 1000.0, 800.0);
    assert_eq!(centered, PointerOffset::default());
}

#[test]
fn pointer_y_tilts_x_axis_and_pointer_x_turns_y_axis() {
    let mut rot = FieldRotation::default();
    rot.advance(PointerOffset { x: 2.0, y: -1.0 });
    assert!((rot.x - (ROTATION_STEP - POINTER_ROTATION_GAIN)).abs() < 1e-7);
    assert!((rot.y - (ROTATION_STEP + 2.0 * POINTER_ROTATION_GAIN)).abs() < 1e-7);
}

#[test]
fn model_matrix_applies_x_then_y() {
    let rot = FieldRotation {
        x: std::f32::consts::FRAC_PI_2,
        y: std::f32::consts::FRAC_PI_2,
    };
    // Ry first turns +X into -Z, then Rx turns -Z into +Y
    let p = rot.model_matrix().transform_point3(Vec3::X);
    assert!((p - Vec3::Y).length() < 1e-5, "{p:?}");
}

#[test]
fn camera_projects_origin_to_screen_center() {
    let cam = Camera::background(16.0 / 9.0);
    let clip = cam.projection_matrix() * cam.view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
    assert!((clip.w - CAMERA_Z).abs() < 1e-5);
}

#[test]
fn camera_tracks_viewport_aspect() {
    let mut cam = Camera::background(1.0);
    cam.set_viewport(1920.0, 960.0);
    assert!((cam.aspect - 2.0).abs() < 1e-6);
    // Degenerate sizes are ignored
    cam.set_viewport(0.0, 960.0);
    assert!((cam.aspect - 2.0).abs() < 1e-6);
}

#[test]
fn material_matches_the_cyan_additive_sprite() {
    let m = PointMaterial::default();
    assert_eq!(m.color_srgb, [0.0, 188.0 / 255.0, 212.0 / 255.0]);
    assert_eq!(m.opacity, PARTICLE_OPACITY);
    let lin = m.color_linear();
    assert_eq!(lin[0], 0.0);
    assert!(lin[1] < m.color_srgb[1] && lin[2] < m.color_srgb[2]);
    let e = m.view_half_extent(CAMERA_FOV_DEG.to_radians());
    assert!(e > 0.0 && e < m.size);
}

#[test]
fn srgb_conversion_hits_endpoints() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    assert_eq!(hex_to_rgb(0xffffff), [1.0, 1.0, 1.0]);
}
