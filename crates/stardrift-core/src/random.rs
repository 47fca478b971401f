use glam::Vec3;
use rand::Rng;

/// Uniformly distributed unit vector.
///
/// Samples the cosine of the polar angle uniformly in \[-1, 1\] and the
/// azimuth uniformly in \[0, 2π).
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let z: f32 = rng.gen_range(-1.0..=1.0);
        let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let r = (1.0 - z * z).max(0.0).sqrt();
        let dir = Vec3::new(r * theta.cos(), r * theta.sin(), z);
        if let Some(unit) = dir.try_normalize() {
            return unit;
        }
    }
}

/// Random direction scaled to `length`.
#[inline]
pub fn random_vector<R: Rng + ?Sized>(rng: &mut R, length: f32) -> Vec3 {
    random_direction(rng) * length
}
