use super::constants::*;
use glam::{Mat4, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Background camera: on the +Z axis looking toward the origin.
    pub fn background(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Recompute the aspect ratio after the viewport changed.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Pointer displacement from the viewport center, in hundreds of pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub fn from_client(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            x: (client_x - viewport_w / 2.0) / POINTER_OFFSET_DIVISOR,
            y: (client_y - viewport_h / 2.0) / POINTER_OFFSET_DIVISOR,
        }
    }
}

/// Scatter `count` points uniformly inside the cube of side `PARTICLE_SPREAD`.
pub fn scatter_positions(rng: &mut impl Rng, count: usize) -> Vec<[f32; 3]> {
    let mut component = || (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD;
    (0..count)
        .map(|_| [component(), component(), component()])
        .collect()
}

/// Euler rotation of the particle field (X then Y).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldRotation {
    pub x: f32,
    pub y: f32,
}

impl FieldRotation {
    /// One frame: constant drift on both axes plus the pointer term.
    /// Pointer Y tilts around X, pointer X turns around Y. Angles stay in
    /// [0, TAU) so the f32 step keeps its precision on long-lived pages.
    pub fn advance(&mut self, pointer: PointerOffset) {
        self.x = wrap_angle(self.x + ROTATION_STEP + pointer.y * POINTER_ROTATION_GAIN);
        self.y = wrap_angle(self.y + ROTATION_STEP + pointer.x * POINTER_ROTATION_GAIN);
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.x) * Mat4::from_rotation_y(self.y)
    }
}

#[inline]
fn wrap_angle(a: f32) -> f32 {
    let r = a.rem_euclid(TAU);
    // A tiny negative input rounds up to TAU itself
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Look of a single point sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMaterial {
    pub size: f32,
    pub color_srgb: [f32; 3],
    pub opacity: f32,
}

impl Default for PointMaterial {
    fn default() -> Self {
        Self {
            size: PARTICLE_SIZE,
            color_srgb: hex_to_rgb(PARTICLE_COLOR_HEX),
            opacity: PARTICLE_OPACITY,
        }
    }
}

impl PointMaterial {
    pub fn color_linear(&self) -> [f32; 3] {
        self.color_srgb.map(srgb_to_linear)
    }

    /// Half side of the view-space billboard that covers the same number of
    /// pixels as a depth-attenuated point of `size` world units.
    pub fn view_half_extent(&self, fovy_radians: f32) -> f32 {
        0.5 * self.size * (fovy_radians * 0.5).tan()
    }
}

#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
