// Host-side tests for the capability gate.

use stardrift_core::{
    launch, ConfigError, FrameOutcome, Launch, Scene, SceneConfig, SceneRenderer, Unsupported,
    Viewport, FALLBACK_MESSAGE,
};

struct NullRenderer;

impl SceneRenderer for NullRenderer {
    type Error = std::convert::Infallible;

    fn render(&mut self, _scene: &Scene) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn viewport() -> Viewport {
    Viewport::new(1280, 800)
}

#[test]
fn supported_renderer_starts_animation() {
    let launched = launch(&SceneConfig::default(), 7, viewport(), Ok(NullRenderer)).unwrap();
    assert!(launched.is_started());
    let Launch::Started(mut driver) = launched else {
        unreachable!()
    };
    assert!(driver.is_running());
    assert_eq!(driver.frame().unwrap(), FrameOutcome::Continue);
}

#[test]
fn missing_capability_shows_fallback_and_never_starts() {
    let renderer: Result<NullRenderer, Unsupported> = Err(Unsupported::new("no adapter"));
    let launched = launch(&SceneConfig::default(), 7, viewport(), renderer).unwrap();
    match launched {
        Launch::Fallback(unsupported) => {
            assert_eq!(unsupported.reason, "no adapter");
            assert!(unsupported.message().starts_with(FALLBACK_MESSAGE));
        }
        Launch::Started(_) => panic!("animation must not start without a renderer"),
    }
}

#[test]
fn invalid_config_fails_before_capability_matters() {
    let mut config = SceneConfig::default();
    config.path.control_points.truncate(1);

    let err = launch(&config, 7, viewport(), Ok(NullRenderer)).err();
    assert_eq!(err, Some(ConfigError::TooFewControlPoints(1)));

    let renderer: Result<NullRenderer, Unsupported> = Err(Unsupported::new("no adapter"));
    let err = launch(&config, 7, viewport(), renderer).err();
    assert_eq!(err, Some(ConfigError::TooFewControlPoints(1)));
}

#[test]
fn fallback_message_mentions_webgpu() {
    assert!(FALLBACK_MESSAGE.contains("WebGPU"));
}
