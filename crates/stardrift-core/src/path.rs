//! Light path: a centripetal Catmull-Rom spline through the control points,
//! sampled once into a dense point list.

use crate::config::ConfigError;
use glam::Vec3;

/// Open centripetal Catmull-Rom curve. The first and last segments use
/// reflected phantom points so the curve starts and ends on the outer
/// control points.
#[derive(Clone, Debug)]
pub struct CatmullRomCurve {
    points: Vec<Vec3>,
}

impl CatmullRomCurve {
    pub fn new(points: Vec<Vec3>) -> Result<Self, ConfigError> {
        if points.len() < 2 {
            return Err(ConfigError::TooFewControlPoints(points.len()));
        }
        Ok(Self { points })
    }


    /// Point at parameter `t` in \[0, 1\].
    pub fn point_at(&self, t: f32) -> Vec3 {
        let pts = &self.points;
        let l = pts.len();
        let p = (l - 1) as f32 * t.clamp(0.0, 1.0);
        let mut seg = p.floor() as usize;
        let mut weight = p - seg as f32;
        if seg >= l - 1 {
            seg = l - 2;
            weight = 1.0;
        }

        let p1 = pts[seg];
        let p2 = pts[seg + 1];
        let p0 = if seg > 0 { pts[seg - 1] } else { p1 * 2.0 - p2 };
        let p3 = if seg + 2 < l { pts[seg + 2] } else { p2 * 2.0 - p1 };

        // Centripetal knot spacing: |pi+1 - pi|^0.5
        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);
        if dt1 < 1e-4 {
            dt1 = 1.0;
        }
        if dt0 < 1e-4 {
            dt0 = dt1;
        }
        if dt2 < 1e-4 {
            dt2 = dt1;
        }

        let poly = CubicPoly::nonuniform(p0, p1, p2, p3, dt0, dt1, dt2);
        poly.eval(weight)
    }

    /// `divisions + 1` points evenly spaced by parameter, first and last
    /// included.
    pub fn points(&self, divisions: usize) -> Vec<Vec3> {
        (0..=divisions)
            .map(|d| self.point_at(d as f32 / divisions.max(1) as f32))
            .collect()
    }
}

struct CubicPoly {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl CubicPoly {
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    fn nonuniform(x0: Vec3, x1: Vec3, x2: Vec3, x3: Vec3, dt0: f32, dt1: f32, dt2: f32) -> Self {
        let t1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
        let t2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;
        Self::hermite(x1, x2, t1 * dt1, t2 * dt1)
    }

    fn eval(&self, t: f32) -> Vec3 {
        let t2 = t * t;
        let t3 = t2 * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * t3
    }
}

/// Precomputed, read-only point sequence walked by the traveling light.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    points: Vec<Vec3>,
}

impl Path {
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of steps along the path (one less than the number of points).
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Vec3;

    fn index(&self, index: usize) -> &Vec3 {
        &self.points[index]
    }
}

/// Sample `n_points + 1` positions along the curve through `control_points`.
pub fn sample(control_points: &[Vec3], n_points: usize) -> Result<Path, ConfigError> {
    if n_points == 0 {
        return Err(ConfigError::NoPathPoints);
    }
    let curve = CatmullRomCurve::new(control_points.to_vec())?;
    let points = curve.points(n_points);
    log::debug!(
        "[path] sampled {} points through {} control points",
        points.len(),
        control_points.len()
    );
    Ok(Path { points })
}
