//! Capability gate: start the animation only when a renderer exists.

use crate::config::{ConfigError, SceneConfig};
use crate::frame::{FrameDriver, SceneRenderer};
use crate::scene::Scene;
use crate::viewport::Viewport;

pub const FALLBACK_MESSAGE: &str = "Your browser or graphics card does not seem to support WebGPU.";

/// The host cannot provide the rendering capability.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("rendering unsupported: {reason}")]
pub struct Unsupported {
    pub reason: String,
}

impl Unsupported {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Static text shown in place of the animation.
    pub fn message(&self) -> String {
        format!("{FALLBACK_MESSAGE} ({})", self.reason)
    }
}

pub enum Launch<R> {
    Started(FrameDriver<R>),
    Fallback(Unsupported),
}

impl<R> Launch<R> {
    pub fn is_started(&self) -> bool {
        matches!(self, Launch::Started(_))
    }
}

/// Build the scene, then start the frame driver if `renderer` is available.
///
/// Config errors are returned before anything starts. A missing renderer is
/// not an error: it yields [`Launch::Fallback`] and the driver never exists.
pub fn launch<R: SceneRenderer>(
    config: &SceneConfig,
    seed: u64,
    viewport: Viewport,
    renderer: Result<R, Unsupported>,
) -> Result<Launch<R>, ConfigError> {
    let scene = Scene::build(config, seed, viewport)?;
    match renderer {
        Ok(renderer) => {
            let driver = FrameDriver::new(scene, renderer);
            driver.start();
            log::info!("[startup] animation started");
            Ok(Launch::Started(driver))
        }
        Err(unsupported) => {
            log::warn!("[startup] {unsupported}; showing fallback");
            Ok(Launch::Fallback(unsupported))
        }
    }
}
