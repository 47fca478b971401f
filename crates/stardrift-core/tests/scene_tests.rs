// Host-side tests for scene assembly.

use stardrift_core::{Scene, SceneConfig, TextMesh, Viewport};

#[test]
fn build_places_camera_for_viewport() {
    let config = SceneConfig::default();
    let wide = Scene::build(&config, 1, Viewport::new(1600, 1000)).unwrap();
    assert_eq!(wide.camera.eye, glam::Vec3::new(-1.0, 4.0, 12.0));
    assert!((wide.camera.aspect - 1.6).abs() < 1e-6);

    let tall = Scene::build(&config, 1, Viewport::new(1000, 1600)).unwrap();
    assert_eq!(tall.camera.eye, glam::Vec3::new(0.0, 4.0, 28.0));
}

#[test]
fn build_starts_light_dark_at_path_start() {
    let scene = Scene::build(&SceneConfig::default(), 1, Viewport::new(800, 600)).unwrap();
    assert_eq!(scene.animator.cursor(), 0);
    assert_eq!(scene.light.intensity, 0.0);
    assert_eq!(scene.stars.len(), 30);
    assert!(scene.text().is_none());
    assert_eq!(scene.text_revision(), 0);
}

#[test]
fn advance_moves_stars_and_light() {
    let mut scene = Scene::build(&SceneConfig::default(), 9, Viewport::new(800, 600)).unwrap();
    let stars_before = scene.stars.particles().to_vec();
    scene.advance();
    assert_eq!(scene.animator.cursor(), 1);
    assert_eq!(scene.light.position, scene.animator.path()[0]);
    assert_ne!(scene.stars.particles(), stars_before.as_slice());
}

#[test]
fn inserting_text_bumps_revision() {
    let mut scene = Scene::build(&SceneConfig::default(), 1, Viewport::new(800, 600)).unwrap();
    scene.insert_text(TextMesh::default());
    assert!(scene.text().is_some());
    assert_eq!(scene.text_revision(), 1);
    scene.insert_text(TextMesh::default());
    assert_eq!(scene.text_revision(), 2);
}
