// Host-side tests for responsive camera placement and resize handling.

use glam::Vec3;
use stardrift_core::viewport::{aspect_ratio, camera_placement, is_wide_screen, react_to_resize};
use stardrift_core::{Camera, CameraConfig, RenderSurface, Viewport};

#[derive(Default)]
struct RecordingSurface {
    sizes: Vec<(u32, u32)>,
}

impl RenderSurface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.sizes.push((width, height));
    }
}

const WIDE: Vec3 = Vec3::new(-1.0, 4.0, 12.0);
const NARROW: Vec3 = Vec3::new(0.0, 4.0, 28.0);
const TARGET: Vec3 = Vec3::new(0.0, 3.0, 0.0);

#[test]
fn aspect_threshold_is_strict() {
    let config = CameraConfig::default();
    assert!(is_wide_screen(1.6, &config));
    assert!(is_wide_screen(0.71, &config));
    assert!(!is_wide_screen(0.7, &config));
    assert!(!is_wide_screen(0.625, &config));
}

#[test]
fn landscape_gets_wide_placement() {
    let placement = camera_placement(Viewport::new(1600, 1000), &CameraConfig::default());
    assert_eq!(placement.eye, WIDE);
    assert_eq!(placement.target, TARGET);
}

#[test]
fn portrait_gets_narrow_placement() {
    let config = CameraConfig::default();
    let placement = camera_placement(Viewport::new(1000, 1600), &config);
    assert_eq!(placement.eye, NARROW);
    assert_eq!(placement.target, TARGET);
    // Exactly at the threshold stays narrow.
    assert_eq!(camera_placement(Viewport::new(700, 1000), &config).eye, NARROW);
    assert_eq!(camera_placement(Viewport::new(701, 1000), &config).eye, WIDE);
}

#[test]
fn resize_updates_camera_and_surface() {
    let config = CameraConfig::default();
    let mut camera = Camera::new(&config, 1.0);
    let mut surface = RecordingSurface::default();

    assert!(react_to_resize(&mut camera, &mut surface, Viewport::new(1000, 1600), &config));
    assert_eq!(camera.eye, NARROW);
    assert!((camera.aspect - 0.625).abs() < 1e-6);

    assert!(react_to_resize(&mut camera, &mut surface, Viewport::new(1600, 1000), &config));
    assert_eq!(camera.eye, WIDE);
    assert_eq!(camera.target, TARGET);
    assert!((camera.aspect - aspect_ratio(1600, 1000)).abs() < 1e-6);

    assert_eq!(surface.sizes, vec![(1000, 1600), (1600, 1000)]);
}

#[test]
fn zero_sized_viewport_is_ignored() {
    let config = CameraConfig::default();
    let mut camera = Camera::new(&config, 1.5);
    let before = camera.clone();
    let mut surface = RecordingSurface::default();

    assert!(!react_to_resize(&mut camera, &mut surface, Viewport::new(0, 900), &config));
    assert!(!react_to_resize(&mut camera, &mut surface, Viewport::new(900, 0), &config));
    assert_eq!(camera, before);
    assert!(surface.sizes.is_empty());
}

#[test]
fn projection_follows_aspect() {
    let config = CameraConfig::default();
    let mut camera = Camera::new(&config, 1.0);
    let mut surface = RecordingSurface::default();
    react_to_resize(&mut camera, &mut surface, Viewport::new(2000, 1000), &config);
    let proj = camera.projection_matrix();
    // x scale is y scale divided by aspect
    assert!((proj.x_axis.x * 2.0 - proj.y_axis.y).abs() < 1e-4);
}

#[test]
fn billboard_axes_are_orthonormal() {
    let camera = Camera::new(&CameraConfig::default(), 1.0);
    let (right, up) = camera.billboard_axes();
    assert!((right.length() - 1.0).abs() < 1e-4);
    assert!((up.length() - 1.0).abs() < 1e-4);
    assert!(right.dot(up).abs() < 1e-4);
}
