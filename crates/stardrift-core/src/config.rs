//! Scene configuration.
//!
//! Every field has a default taken from [`crate::constants`], so a JSON file
//! only needs to name the values it overrides. A config must pass
//! [`SceneConfig::validate`] before a scene is built from it.

use crate::constants::*;
use serde::Deserialize;

/// Errors that abort scene construction before the frame loop starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("path needs at least 2 control points, got {0}")]
    TooFewControlPoints(usize),
    #[error("star count must be greater than zero")]
    NoStars,
    #[error("path point count must be greater than zero")]
    NoPathPoints,
    #[error("path segment count must be greater than zero")]
    NoPathSegments,
    #[error("fade duration must be in (0, 0.5], got {0}")]
    FadeDuration(f32),
    #[error("`{field}` must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("invalid scene config: {0}")]
    Parse(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub count: usize,
    pub spread_radius: f32,
    pub speed: f32,
    pub size: f32,
    pub color: [f32; 3],
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            spread_radius: STAR_SPREAD_RADIUS,
            speed: STAR_SPEED,
            size: STAR_SIZE,
            color: STAR_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub points: usize,
    pub control_points: Vec<[f32; 3]>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            points: PATH_POINTS,
            control_points: PATH_CONTROL_POINTS.to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub color: [f32; 3],
    pub range: f32,
    pub start: [f32; 3],
    pub glow_size: f32,
    pub fade_duration: f32,
    pub segments: usize,
    pub segment_skip: usize,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            color: LIGHT_COLOR,
            range: LIGHT_RANGE,
            start: LIGHT_START,
            glow_size: GLOW_SIZE,
            fade_duration: FADE_DURATION,
            segments: PATH_SEGMENTS,
            segment_skip: SEGMENT_SKIP,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    pub wide_threshold: f32,
    pub wide_eye: [f32; 3],
    pub narrow_eye: [f32; 3],
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            wide_threshold: WIDE_ASPECT_THRESHOLD,
            wide_eye: CAMERA_WIDE_EYE,
            narrow_eye: CAMERA_NARROW_EYE,
            target: CAMERA_TARGET,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub position: [f32; 3],
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub size: f32,
    pub height: f32,
    pub curve_segments: usize,
    pub lines: Vec<TextLine>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            size: TEXT_SIZE,
            height: TEXT_HEIGHT,
            curve_segments: TEXT_CURVE_SEGMENTS,
            lines: TEXT_LINES
                .iter()
                .map(|(text, position)| TextLine {
                    text: (*text).to_string(),
                    position: *position,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub stars: StarConfig,
    pub path: PathConfig,
    pub light: LightConfig,
    pub camera: CameraConfig,
    pub text: TextConfig,
}

impl SceneConfig {
    /// Parse a (possibly partial) JSON config on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stars.count == 0 {
            return Err(ConfigError::NoStars);
        }
        if self.path.points == 0 {
            return Err(ConfigError::NoPathPoints);
        }
        if self.path.control_points.len() < 2 {
            return Err(ConfigError::TooFewControlPoints(
                self.path.control_points.len(),
            ));
        }
        if self.light.segments == 0 {
            return Err(ConfigError::NoPathSegments);
        }
        let fade = self.light.fade_duration;
        if !(fade > 0.0 && fade <= 0.5) {
            return Err(ConfigError::FadeDuration(fade));
        }
        positive("stars.spread_radius", self.stars.spread_radius)?;
        positive("stars.speed", self.stars.speed)?;
        positive("stars.size", self.stars.size)?;
        positive("light.range", self.light.range)?;
        positive("camera.fov_degrees", self.camera.fov_degrees)?;
        positive("camera.znear", self.camera.znear)?;
        positive("camera.zfar", self.camera.zfar)?;
        positive("camera.wide_threshold", self.camera.wide_threshold)?;
        positive("text.size", self.text.size)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
