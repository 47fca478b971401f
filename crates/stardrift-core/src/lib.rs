pub mod assets;
pub mod config;
pub mod constants;
pub mod frame;
pub mod light;
pub mod particles;
pub mod path;
pub mod random;
pub mod scene;
pub mod startup;
pub mod state;
pub mod text;
pub mod viewport;

#[cfg(feature = "gpu")]
pub mod render;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use config::*;
pub use constants::*;
pub use frame::{FrameDriver, FrameError, FrameOutcome, FrameStats, LoopControl, SceneRenderer};
pub use light::{FadeZones, GlowLight, TravelingLight};
pub use particles::{Particle, ParticleField};
pub use path::{CatmullRomCurve, Path};
pub use scene::Scene;
pub use startup::{launch, Launch, Unsupported, FALLBACK_MESSAGE};
pub use state::Camera;
pub use text::{build_text, FontError, TextMesh, Typeface};
pub use viewport::{CameraPlacement, RenderSurface, Viewport};
