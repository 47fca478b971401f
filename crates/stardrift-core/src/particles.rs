//! Star field: a fixed set of particles drifting in straight lines and
//! respawning on the boundary sphere once they leave it.

use crate::config::{ConfigError, StarConfig};
use crate::random::{random_direction, random_vector};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
}

pub struct ParticleField<R = StdRng> {
    particles: Vec<Particle>,
    spread_radius: f32,
    speed: f32,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn new(config: &StarConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    /// Build a field drawing all positions and velocities from `rng`.
    pub fn with_rng(config: &StarConfig, mut rng: R) -> Result<Self, ConfigError> {
        if config.count == 0 {
            return Err(ConfigError::NoStars);
        }
        let particles = (0..config.count)
            .map(|_| spawn_with(&mut rng, config.spread_radius, config.speed))
            .collect();
        Ok(Self {
            particles,
            spread_radius: config.spread_radius,
            speed: config.speed,
            rng,
        })
    }

    /// A new particle on the boundary sphere moving in a random direction.
    pub fn spawn(&mut self) -> Particle {
        spawn_with(&mut self.rng, self.spread_radius, self.speed)
    }

    /// Advance every particle by its velocity and respawn the ones that left
    /// the spread radius.
    pub fn step(&mut self) {
        let radius = self.spread_radius;
        let speed = self.speed;
        for p in &mut self.particles {
            p.position += p.velocity;
            if p.position.length() > radius {
                *p = spawn_with(&mut self.rng, radius, speed);
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn spread_radius(&self) -> f32 {
        self.spread_radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}

fn spawn_with<R: Rng + ?Sized>(rng: &mut R, radius: f32, speed: f32) -> Particle {
    Particle {
        position: on_sphere(random_direction(rng), radius),
        velocity: random_vector(rng, speed),
    }
}

/// `dir * radius`, nudged inward until its length is no longer rounded above
/// `radius`.
fn on_sphere(dir: Vec3, radius: f32) -> Vec3 {
    let mut p = dir * radius;
    while p.length() > radius {
        p *= 1.0 - f32::EPSILON;
    }
    p
}
