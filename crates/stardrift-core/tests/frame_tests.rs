// Host-side tests for the frame driver and its start/stop control.

use stardrift_core::{
    FrameDriver, FrameError, FrameOutcome, RenderSurface, Scene, SceneConfig, SceneRenderer,
    Viewport,
};
use std::fmt;

#[derive(Debug, PartialEq)]
struct FakeError;

impl fmt::Display for FakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("device lost")
    }
}

/// Records what it was asked to draw. Fails on the frame numbered `fail_at`.
#[derive(Default)]
struct FakeRenderer {
    rendered: Vec<(usize, glam::Vec3)>,
    fail_at: Option<usize>,
    sizes: Vec<(u32, u32)>,
}

impl SceneRenderer for FakeRenderer {
    type Error = FakeError;

    fn render(&mut self, scene: &Scene) -> Result<(), FakeError> {
        if self.fail_at == Some(self.rendered.len()) {
            return Err(FakeError);
        }
        self.rendered
            .push((scene.animator.cursor(), scene.light.position));
        Ok(())
    }
}

impl RenderSurface for FakeRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.sizes.push((width, height));
    }
}

fn scene(seed: u64) -> Scene {
    Scene::build(&SceneConfig::default(), seed, Viewport::new(1600, 1000)).unwrap()
}

fn driver(renderer: FakeRenderer) -> FrameDriver<FakeRenderer> {
    let driver = FrameDriver::new(scene(42), renderer);
    driver.start();
    driver
}

#[test]
fn new_driver_is_stopped() {
    let mut driver = FrameDriver::new(scene(1), FakeRenderer::default());
    assert!(!driver.is_running());
    assert_eq!(driver.frame().unwrap(), FrameOutcome::Stopped);
    assert!(driver.renderer().rendered.is_empty());
}

#[test]
fn frame_advances_before_rendering() {
    let mut driver = driver(FakeRenderer::default());
    let expected_stars = {
        let mut s = scene(42);
        s.stars.step();
        s.stars.particles().to_vec()
    };
    let first_point = driver.scene().animator.path()[0];

    assert_eq!(driver.frame().unwrap(), FrameOutcome::Continue);
    // Renderer saw the light already moved to path[0] and the cursor stepped.
    assert_eq!(driver.renderer().rendered, vec![(1, first_point)]);
    assert_eq!(driver.scene().stars.particles(), expected_stars.as_slice());
}

#[test]
fn runs_1000_frames_until_stopped() {
    let mut driver = driver(FakeRenderer::default());
    for _ in 0..700 {
        assert_eq!(driver.frame().unwrap(), FrameOutcome::Continue);
    }
    assert_eq!(driver.scene().animator.cursor(), 0);
    for _ in 700..1000 {
        assert_eq!(driver.frame().unwrap(), FrameOutcome::Continue);
    }
    assert_eq!(driver.frames(), 1000);
    assert_eq!(driver.scene().animator.cursor(), 450);

    driver.stop();
    assert_eq!(driver.frame().unwrap(), FrameOutcome::Stopped);
    assert_eq!(driver.frames(), 1000);
    assert_eq!(driver.renderer().rendered.len(), 1000);
}

#[test]
fn stop_through_cloned_control() {
    let mut driver = driver(FakeRenderer::default());
    let control = driver.control();
    driver.frame().unwrap();
    control.stop();
    assert!(!driver.is_running());
    assert_eq!(driver.frame().unwrap(), FrameOutcome::Stopped);

    control.start();
    assert_eq!(driver.frame().unwrap(), FrameOutcome::Continue);
    assert_eq!(driver.frames(), 2);
}

#[test]
fn render_error_halts_the_loop() {
    let mut driver = driver(FakeRenderer {
        fail_at: Some(3),
        ..FakeRenderer::default()
    });
    for _ in 0..3 {
        assert_eq!(driver.frame().unwrap(), FrameOutcome::Continue);
    }
    match driver.frame() {
        Err(FrameError::Render(e)) => assert_eq!(e, FakeError),
        other => panic!("expected render error, got {other:?}"),
    }
    assert!(!driver.is_running());
    assert_eq!(driver.frame().unwrap(), FrameOutcome::Stopped);
    assert_eq!(driver.frames(), 3);
}

#[test]
fn resize_reaches_camera_and_surface() {
    let mut driver = driver(FakeRenderer::default());
    assert!(driver.resize(Viewport::new(1000, 1600)));
    assert_eq!(driver.scene().camera.eye, glam::Vec3::new(0.0, 4.0, 28.0));
    assert!(!driver.resize(Viewport::new(0, 0)));
    assert_eq!(driver.renderer().sizes, vec![(1000, 1600)]);
}
