// Host-side tests for scene configuration parsing and validation.

use stardrift_core::*;

#[test]
fn defaults_match_constants() {
    let config = SceneConfig::default();
    assert_eq!(config.stars.count, STAR_COUNT);
    assert_eq!(config.path.points, PATH_POINTS);
    assert_eq!(config.path.control_points.len(), PATH_CONTROL_POINTS.len());
    assert_eq!(config.light.segments, PATH_SEGMENTS);
    assert_eq!(config.light.segment_skip, SEGMENT_SKIP);
    assert_eq!(config.camera.wide_threshold, WIDE_ASPECT_THRESHOLD);
    assert_eq!(config.text.lines.len(), TEXT_LINES.len());
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = SceneConfig::from_json(
        r#"{ "stars": { "count": 100 }, "light": { "segment_skip": 1 } }"#,
    )
    .unwrap();
    assert_eq!(config.stars.count, 100);
    assert_eq!(config.stars.spread_radius, STAR_SPREAD_RADIUS);
    assert_eq!(config.light.segment_skip, 1);
    assert_eq!(config.light.segments, PATH_SEGMENTS);
    assert_eq!(config.camera, CameraConfig::default());
}

#[test]
fn empty_json_is_default() {
    assert_eq!(SceneConfig::from_json("{}").unwrap(), SceneConfig::default());
}

#[test]
fn malformed_json_is_parse_error() {
    assert!(matches!(
        SceneConfig::from_json("{ \"stars\": "),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        SceneConfig::from_json(r#"{ "stars": { "count": "many" } }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn validation_rejects_bad_values() {
    let mut c = SceneConfig::default();
    c.stars.count = 0;
    assert_eq!(c.validate(), Err(ConfigError::NoStars));

    let mut c = SceneConfig::default();
    c.path.points = 0;
    assert_eq!(c.validate(), Err(ConfigError::NoPathPoints));

    let mut c = SceneConfig::default();
    c.path.control_points = vec![[0.0, 0.0, 0.0]];
    assert_eq!(c.validate(), Err(ConfigError::TooFewControlPoints(1)));

    let mut c = SceneConfig::default();
    c.light.segments = 0;
    assert_eq!(c.validate(), Err(ConfigError::NoPathSegments));

    let mut c = SceneConfig::default();
    c.light.fade_duration = 0.6;
    assert_eq!(c.validate(), Err(ConfigError::FadeDuration(0.6)));

    let mut c = SceneConfig::default();
    c.light.fade_duration = 0.0;
    assert_eq!(c.validate(), Err(ConfigError::FadeDuration(0.0)));

    let mut c = SceneConfig::default();
    c.stars.spread_radius = -1.0;
    assert_eq!(
        c.validate(),
        Err(ConfigError::NotPositive {
            field: "stars.spread_radius",
            value: -1.0
        })
    );
}

#[test]
fn nan_is_not_positive() {
    let mut c = SceneConfig::default();
    c.camera.znear = f32::NAN;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::NotPositive {
            field: "camera.znear",
            ..
        })
    ));
}

#[test]
fn invalid_config_aborts_scene_build() {
    let mut c = SceneConfig::default();
    c.light.segments = 0;
    assert!(Scene::build(&c, 1, Viewport::new(800, 600)).is_err());
}
