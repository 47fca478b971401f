use crate::config::{ConfigError, SceneConfig};
use crate::light::{GlowLight, TravelingLight};
use crate::particles::ParticleField;
use crate::path;
use crate::state::Camera;
use crate::text::TextMesh;
use crate::viewport::{self, Viewport};
use glam::Vec3;

/// Everything the renderer draws plus the animation state that moves it.
pub struct Scene {
    pub camera: Camera,
    pub stars: ParticleField,
    pub light: GlowLight,
    pub animator: TravelingLight,
    pub star_size: f32,
    pub star_color: Vec3,
    config: SceneConfig,
    text: Option<TextMesh>,
    text_revision: u64,
}

impl Scene {
    /// Validate `config` and build the scene for an initial `viewport`.
    pub fn build(config: &SceneConfig, seed: u64, viewport: Viewport) -> Result<Self, ConfigError> {
        config.validate()?;

        let control_points: Vec<Vec3> = config
            .path
            .control_points
            .iter()
            .map(|p| Vec3::from(*p))
            .collect();
        let path = path::sample(&control_points, config.path.points)?;
        let animator = TravelingLight::new(path, &config.light)?;
        let stars = ParticleField::new(&config.stars, seed)?;

        let mut camera = Camera::new(&config.camera, 1.0);
        viewport::apply_placement(&mut camera, viewport, &config.camera);

        log::info!(
            "[scene] stars={} path_points={} cycle={} ticks camera=({:.1},{:.1},{:.1})",
            stars.len(),
            animator.n_points(),
            animator.cycle_len(),
            camera.eye.x,
            camera.eye.y,
            camera.eye.z
        );

        Ok(Self {
            camera,
            stars,
            light: GlowLight::new(&config.light),
            animator,
            star_size: config.stars.size,
            star_color: Vec3::from(config.stars.color),
            config: config.clone(),
            text: None,
            text_revision: 0,
        })
    }

    /// One animation step: stars first, then the traveling light.
    pub fn advance(&mut self) {
        self.stars.step();
        self.animator.tick(&mut self.light);
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Add the decorative text. Replaces any earlier mesh.
    pub fn insert_text(&mut self, mesh: TextMesh) {
        self.text = Some(mesh);
        self.text_revision += 1;
    }

    pub fn text(&self) -> Option<&TextMesh> {
        self.text.as_ref()
    }

    /// Bumped on every text insertion so renderers know when to re-upload.
    pub fn text_revision(&self) -> u64 {
        self.text_revision
    }
}
