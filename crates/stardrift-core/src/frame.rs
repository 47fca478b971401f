//! Per-frame orchestration with explicit start/stop control.

use crate::constants::FRAME_STATS_INTERVAL_SEC;
use crate::scene::Scene;
use crate::viewport::{self, RenderSurface, Viewport};
use instant::Instant;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Draws the whole scene from its current camera.
pub trait SceneRenderer {
    type Error: std::fmt::Debug + std::fmt::Display;

    fn render(&mut self, scene: &Scene) -> Result<(), Self::Error>;
}

/// Cloneable run flag checked by the driver between frames.
#[derive(Clone, Debug, Default)]
pub struct LoopControl(Arc<AtomicBool>);

impl LoopControl {
    pub fn start(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was produced; schedule the next one.
    Continue,
    /// The loop is stopped; do not reschedule.
    Stopped,
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError<E: std::fmt::Debug + std::fmt::Display> {
    #[error("render failed: {0}")]
    Render(E),
}

/// Frame counter with a periodic frames-per-second log line.
#[derive(Debug)]
pub struct FrameStats {
    frames: u64,
    window_frames: u32,
    window_start: Instant,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            frames: 0,
            window_frames: 0,
            window_start: Instant::now(),
        }
    }
}

impl FrameStats {
    pub fn record(&mut self) {
        self.frames += 1;
        self.window_frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f64();
        if elapsed >= FRAME_STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps ({} frames total)",
                self.window_frames as f64 / elapsed,
                self.frames
            );
            self.window_frames = 0;
            self.window_start = Instant::now();
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

pub struct FrameDriver<R> {
    scene: Scene,
    renderer: R,
    control: LoopControl,
    stats: FrameStats,
}

impl<R: SceneRenderer> FrameDriver<R> {
    /// A stopped driver; call [`FrameDriver::start`] to begin.
    pub fn new(scene: Scene, renderer: R) -> Self {
        Self {
            scene,
            renderer,
            control: LoopControl::default(),
            stats: FrameStats::default(),
        }
    }

    pub fn control(&self) -> LoopControl {
        self.control.clone()
    }

    pub fn start(&self) {
        self.control.start();
    }

    pub fn stop(&self) {
        self.control.stop();
    }

    pub fn is_running(&self) -> bool {
        self.control.is_running()
    }

    /// Step the stars, tick the light, render once. Returns whether the host
    /// should schedule another frame. A render error stops the loop.
    pub fn frame(&mut self) -> Result<FrameOutcome, FrameError<R::Error>> {
        if !self.control.is_running() {
            return Ok(FrameOutcome::Stopped);
        }
        self.scene.advance();
        if let Err(e) = self.renderer.render(&self.scene) {
            self.control.stop();
            log::error!("[frame] render error, stopping: {}", e);
            return Err(FrameError::Render(e));
        }
        self.stats.record();
        Ok(FrameOutcome::Continue)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }


    pub fn frames(&self) -> u64 {
        self.stats.frames()
    }
}

impl<R: SceneRenderer + RenderSurface> FrameDriver<R> {
    /// Viewport reaction: camera placement, projection and surface size.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        let camera_config = self.scene.config().camera.clone();
        viewport::react_to_resize(
            &mut self.scene.camera,
            &mut self.renderer,
            viewport,
            &camera_config,
        )
    }
}
