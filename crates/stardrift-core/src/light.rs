//! Traveling light: a cursor walking the precomputed path, ramping the
//! light's intensity and glow opacity up near the start and down near the
//! end.

use crate::config::{ConfigError, LightConfig};
use crate::path::Path;
use glam::Vec3;

/// Point light with an attached glow sprite. Intensity and opacity move
/// together and stay within \[0, 1\].
#[derive(Clone, Debug, PartialEq)]
pub struct GlowLight {
    pub position: Vec3,
    pub color: Vec3,
    pub range: f32,
    pub intensity: f32,
    pub opacity: f32,
    pub glow_size: f32,
}

impl GlowLight {
    pub fn new(config: &LightConfig) -> Self {
        Self {
            position: Vec3::from(config.start),
            color: Vec3::from(config.color),
            range: config.range,
            intensity: 0.0,
            opacity: 0.0,
            glow_size: config.glow_size,
        }
    }

    fn fade_by(&mut self, delta: f32) {
        self.intensity = (self.intensity + delta).clamp(0.0, 1.0);
        self.opacity = (self.opacity + delta).clamp(0.0, 1.0);
    }

    fn reset_fade(&mut self) {
        self.intensity = 0.0;
        self.opacity = 0.0;
    }
}

/// Ramp boundaries in cursor units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeZones {
    pub fade_in_end: f32,
    pub fade_out_start: f32,
    pub step: f32,
}

impl FadeZones {
    pub fn new(n_points: usize, fade_duration: f32) -> Self {
        let n = n_points as f32;
        Self {
            fade_in_end: fade_duration * n,
            fade_out_start: (1.0 - fade_duration) * n,
            step: 1.0 / (n * fade_duration),
        }
    }

    /// Signed intensity change applied at cursor `i`.
    pub fn delta_at(&self, i: usize) -> f32 {
        let i = i as f32;
        if i < self.fade_in_end {
            self.step
        } else if i > self.fade_out_start {
            -self.step
        } else {
            0.0
        }
    }
}

pub struct TravelingLight {
    path: Path,
    n_points: usize,
    cursor: usize,
    fade: FadeZones,
    segments: usize,
    skip: usize,
}

impl TravelingLight {
    pub fn new(path: Path, config: &LightConfig) -> Result<Self, ConfigError> {
        let n_points = path.steps();
        if n_points == 0 {
            return Err(ConfigError::NoPathPoints);
        }
        if config.segments == 0 {
            return Err(ConfigError::NoPathSegments);
        }
        Ok(Self {
            fade: FadeZones::new(n_points, config.fade_duration),
            path,
            n_points,
            cursor: 0,
            segments: config.segments,
            skip: config.segment_skip,
        })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn fade(&self) -> FadeZones {
        self.fade
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Index of the equal-length path segment containing cursor `i`.
    pub fn passed_segments(&self, i: usize) -> usize {
        i * self.segments / self.n_points
    }

    /// Cursor after one tick starting at `i`. The skip is applied before
    /// the wrap check, so a skip running past the end lands on 0.
    pub fn advance(&self, i: usize) -> usize {
        let mut next = i;
        if self.passed_segments(i) % 2 == 1 {
            next += self.skip;
        }
        next += 1;
        if next >= self.n_points {
            next = 0;
        }
        next
    }

    /// Move `light` to the current path point, apply the fade for this
    /// position and advance the cursor. The tick that wraps the cursor to 0
    /// leaves the light fully dark, so the last fade-out tick drops by the
    /// remaining intensity rather than one step.
    pub fn tick(&mut self, light: &mut GlowLight) {
        let i = self.cursor;
        light.position = self.path[i];
        light.fade_by(self.fade.delta_at(i));

        self.cursor = self.advance(i);
        if self.cursor == 0 {
            light.reset_fade();
        }
    }

    /// Ticks needed to walk the path once from index 0 back to index 0.
    pub fn cycle_len(&self) -> usize {
        let mut i = 0;
        let mut ticks = 0;
        loop {
            i = self.advance(i);
            ticks += 1;
            if i == 0 {
                return ticks;
            }
        }
    }
}
