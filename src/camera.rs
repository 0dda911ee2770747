//! Projection and model-view matrices for the monolith.
//!
//! OpenGL clip-space conventions, column-major storage (glam default).

use std::f32::consts::PI;

use glam::{Mat4, Vec4};

/// Distance the mesh is pushed away from the camera.
pub const MODEL_DISTANCE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    pub const DEFAULT: Self = Self {
        fov_y: PI / 3.0,
        near: 0.1,
        far: 100.0,
    };

    /// Focal scale `1 / tan(fov / 2)`.
    pub fn focal(&self) -> f32 {
        1.0 / (self.fov_y / 2.0).tan()
    }

    pub fn matrix(&self, aspect: f32) -> Mat4 {
        perspective(self.fov_y, aspect, self.near, self.far)
    }
}

impl Default for Perspective {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Standard OpenGL perspective matrix, depth mapped to [-1, 1].
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();

    Mat4::from_cols(
        Vec4::new(f / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, f, 0.0, 0.0),
        Vec4::new(0.0, 0.0, (far + near) / (near - far), -1.0),
        Vec4::new(0.0, 0.0, (2.0 * far * near) / (near - far), 0.0),
    )
}

/// Rotation about Y by `rotation` radians, then a fixed push along -Z.
pub fn model_view(rotation: f32) -> Mat4 {
    let mut m = Mat4::from_rotation_y(rotation);
    m.w_axis = Vec4::new(0.0, 0.0, -MODEL_DISTANCE, 1.0);
    m
}

/// Width over height of a surface in pixels. A zero height is treated as one
/// pixel so the projection stays finite while the canvas is collapsed.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

/// Canvas backing-store size for a CSS size at `ratio` device pixels per CSS
/// pixel. A missing or non-positive ratio counts as 1.
pub fn backing_size(css_width: f64, css_height: f64, ratio: f64) -> (u32, u32) {
    let ratio = if ratio > 0.0 { ratio } else { 1.0 };
    ((css_width * ratio) as u32, (css_height * ratio) as u32)
}
