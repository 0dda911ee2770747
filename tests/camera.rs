use std::f32::consts::PI;

use cosmic_artworks::camera::{
    aspect_ratio, backing_size, model_view, perspective, Perspective,
};
use glam::{Mat4, Vec3, Vec4};

#[test]
fn square_projection_uses_focal_on_both_axes() {
    let m = Perspective::DEFAULT.matrix(1.0);
    let f = 1.0 / (PI / 6.0).tan();
    assert!((m.x_axis.x - f).abs() < 1e-6);
    assert!((m.y_axis.y - f).abs() < 1e-6);
    assert!((Perspective::DEFAULT.focal() - f).abs() < 1e-6);
}

#[test]
fn projection_layout_is_column_major() {
    let (near, far) = (0.1_f32, 100.0_f32);
    let aspect = 16.0 / 9.0;
    let f = 1.0 / (PI / 6.0).tan();
    let cols = perspective(PI / 3.0, aspect, near, far).to_cols_array();

    let expected = [
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (far + near) / (near - far), -1.0,
        0.0, 0.0, (2.0 * far * near) / (near - far), 0.0,
    ];
    for (i, (got, want)) in cols.iter().zip(expected.iter()).enumerate() {
        assert!((got - want).abs() < 1e-5, "element {i}: {got} vs {want}");
    }
}

#[test]
fn model_view_at_rest_is_pure_translation() {
    let m = model_view(0.0);
    assert_eq!(m, Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0)));
}

#[test]
fn model_view_rotates_about_y() {
    let m = model_view(PI / 2.0);
    // +X swings to -Z, then the whole thing is pushed back by 4.
    let p = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
    assert!(p.x.abs() < 1e-6);
    assert!((p.z - -5.0).abs() < 1e-6);
    assert_eq!(m.y_axis, Vec4::Y);
}

#[test]
fn aspect_ratio_survives_collapsed_surface() {
    assert_eq!(aspect_ratio(1920, 1080), 1920.0 / 1080.0);
    assert_eq!(aspect_ratio(300, 0), 300.0);
}

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(1280.0, 720.0, 1.0), (1280, 720));
}

#[test]
fn backing_size_without_a_usable_ratio_uses_css_pixels() {
    assert_eq!(backing_size(800.0, 600.0, 0.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, -1.5), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, f64::NAN), (800, 600));
}

#[test]
fn backing_size_truncates_fractional_pixels() {
    // 1.25 is a common laptop zoom level.
    assert_eq!(backing_size(1001.0, 333.0, 1.25), (1251, 416));
    assert_eq!(backing_size(640.5, 480.7, 1.0), (640, 480));
}
