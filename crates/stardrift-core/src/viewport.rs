//! Responsive camera placement and the resize reaction.

use crate::config::CameraConfig;
use crate::state::Camera;
use glam::Vec3;

/// Current viewport size in device-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.width, self.height)
    }
}

/// Where the camera sits and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPlacement {
    pub eye: Vec3,
    pub target: Vec3,
}

#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height as f32
}

#[inline]
pub fn is_wide_screen(aspect: f32, config: &CameraConfig) -> bool {
    aspect > config.wide_threshold
}

/// Wide viewports get the closer, slightly left placement; tall ones the
/// centered placement further back. The target never changes.
pub fn camera_placement(viewport: Viewport, config: &CameraConfig) -> CameraPlacement {
    let eye = if is_wide_screen(viewport.aspect_ratio(), config) {
        config.wide_eye
    } else {
        config.narrow_eye
    };
    CameraPlacement {
        eye: Vec3::from(eye),
        target: Vec3::from(config.target),
    }
}

/// Output surface whose size follows the viewport.
pub trait RenderSurface {
    fn resize(&mut self, width: u32, height: u32);
}

/// Re-apply the placement policy and projection for `viewport`, then resize
/// `surface` to match it exactly. Zero-sized viewports are ignored.
pub fn react_to_resize<S: RenderSurface + ?Sized>(
    camera: &mut Camera,
    surface: &mut S,
    viewport: Viewport,
    config: &CameraConfig,
) -> bool {
    if viewport.is_empty() {
        return false;
    }
    apply_placement(camera, viewport, config);
    surface.resize(viewport.width, viewport.height);
    log::debug!(
        "[viewport] {}x{} aspect={:.3} eye=({:.1},{:.1},{:.1})",
        viewport.width,
        viewport.height,
        camera.aspect,
        camera.eye.x,
        camera.eye.y,
        camera.eye.z
    );
    true
}

/// Update aspect and placement of `camera` without touching a surface.
pub fn apply_placement(camera: &mut Camera, viewport: Viewport, config: &CameraConfig) {
    if viewport.is_empty() {
        return;
    }
    let placement = camera_placement(viewport, config);
    camera.aspect = viewport.aspect_ratio();
    camera.eye = placement.eye;
    camera.target = placement.target;
}
