//! Geometry for the decorative "system core": a wireframe icosahedron
//! spinning in front of a fixed starfield.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CORE_RADIUS: f64 = 2.5;
pub const ROT_SPEED_X: f64 = 0.2;
pub const ROT_SPEED_Y: f64 = 0.3;
pub const CAMERA_Z: f64 = 8.0;
pub const FOV_DEGREES: f64 = 75.0;
const FLOAT_AMPLITUDE: f64 = 0.2;
const NEAR_PLANE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    fn distance_sq(&self, other: &Vec3) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        dx * dx + dy * dy + dz * dz
    }
}

pub type Segment = ((f64, f64), (f64, f64));

#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<(usize, usize)>,
}

impl Mesh {
    /// Regular icosahedron with every vertex at distance `radius` from the origin.
    pub fn icosahedron(radius: f64) -> Self {
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        let mut raw = Vec::with_capacity(12);
        for &a in &[-1.0, 1.0] {
            for &b in &[-phi, phi] {
                raw.push(Vec3::new(0.0, a, b));
                raw.push(Vec3::new(a, b, 0.0));
                raw.push(Vec3::new(b, 0.0, a));
            }
        }

        // In the unnormalized (0, ±1, ±φ) form every edge has length 2.
        let mut edges = Vec::with_capacity(30);
        for i in 0..raw.len() {
            for j in (i + 1)..raw.len() {
                if (raw[i].distance_sq(&raw[j]) - 4.0).abs() < 1e-9 {
                    edges.push((i, j));
                }
            }
        }

        let k = radius / raw[0].length();
        let vertices = raw.into_iter().map(|v| v.scale(k)).collect();
        Self { vertices, edges }
    }

    /// Projected wireframe at `elapsed` seconds; edges crossing the near
    /// plane are skipped.
    pub fn frame_at(&self, elapsed: f64) -> Vec<Segment> {
        let ax = elapsed * ROT_SPEED_X;
        let ay = elapsed * ROT_SPEED_Y;
        let bob = elapsed.sin() * FLOAT_AMPLITUDE;

        let projected: Vec<Option<(f64, f64)>> = self
            .vertices
            .iter()
            .map(|v| {
                let mut r = rotate(*v, ax, ay);
                r.y += bob;
                project(r)
            })
            .collect();

        self.edges
            .iter()
            .filter_map(|&(a, b)| Some((projected[a]?, projected[b]?)))
            .collect()
    }
}

/// Rotates about Y, then X.
pub fn rotate(v: Vec3, ax: f64, ay: f64) -> Vec3 {
    let (sy, cy) = ay.sin_cos();
    let x1 = v.x * cy + v.z * sy;
    let z1 = -v.x * sy + v.z * cy;

    let (sx, cx) = ax.sin_cos();
    let y2 = v.y * cx - z1 * sx;
    let z2 = v.y * sx + z1 * cx;

    Vec3::new(x1, y2, z2)
}

/// Perspective projection for a camera at `(0, 0, CAMERA_Z)` looking down -Z.
/// Returns normalized device coordinates where y spans [-1, 1].
pub fn project(v: Vec3) -> Option<(f64, f64)> {
    let depth = CAMERA_Z - v.z;
    if depth < NEAR_PLANE {
        return None;
    }
    let focal = 1.0 / (FOV_DEGREES.to_radians() / 2.0).tan();
    Some((v.x * focal / depth, v.y * focal / depth))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub phase: f64,
}

impl Star {
    pub fn is_lit(&self, elapsed: f64) -> bool {
        (elapsed + self.phase).sin() > -0.3
    }
}

/// Stars in [-1, 1]²; the same seed always yields the same sky.
pub fn starfield(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Star {
            x: rng.random_range(-1.0..=1.0),
            y: rng.random_range(-1.0..=1.0),
            phase: rng.random_range(0.0..std::f64::consts::TAU),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icosahedron_has_12_vertices_30_edges_degree_5() {
        let mesh = Mesh::icosahedron(CORE_RADIUS);
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.edges.len(), 30);
        for i in 0..12 {
            let degree = mesh.edges.iter().filter(|&&(a, b)| a == i || b == i).count();
            assert_eq!(degree, 5, "vertex {i}");
        }
        for v in &mesh.vertices {
            assert!((v.length() - CORE_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec3::new(1.0, -2.0, 0.5);
        let r = rotate(v, 1.3, -0.7);
        assert!((r.length() - v.length()).abs() < 1e-9);
    }

    #[test]
    fn zero_rotation_is_identity() {
        let v = Vec3::new(0.3, 0.4, 0.5);
        assert_eq!(rotate(v, 0.0, 0.0), v);
    }

    #[test]
    fn origin_projects_to_center_and_behind_camera_is_culled() {
        assert_eq!(project(Vec3::new(0.0, 0.0, 0.0)), Some((0.0, 0.0)));
        assert_eq!(project(Vec3::new(0.0, 0.0, CAMERA_Z + 1.0)), None);
    }

    #[test]
    fn frame_stays_within_view() {
        let mesh = Mesh::icosahedron(CORE_RADIUS);
        for t in [0.0, 1.5, 42.0] {
            let segments = mesh.frame_at(t);
            assert_eq!(segments.len(), 30);
            for ((x1, y1), (x2, y2)) in segments {
                for c in [x1, y1, x2, y2] {
                    assert!(c.abs() < 1.0, "t={t} coord {c}");
                }
            }
        }
    }

    #[test]
    fn starfield_is_deterministic_and_bounded() {
        let a = starfield(64, 7);
        assert_eq!(a, starfield(64, 7));
        assert_ne!(a, starfield(64, 8));
        assert!(a.iter().all(|s| s.x.abs() <= 1.0 && s.y.abs() <= 1.0));
    }
}
