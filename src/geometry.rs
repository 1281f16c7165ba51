//! Shared geometry helpers for the scene generators.
//!
//! Thin layer over glam: circle placement in the two working planes and the
//! grid-centering offset used by every lattice-style generator. Linear
//! interpolation and distance come straight from [`Vec3`].

use glam::Vec3;

/// Point on a circle in the xz-plane (y is the cylinder/helix axis).
#[inline]
#[must_use]
pub fn ring_xz(radius: f32, angle: f32, y: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Point on a circle in the xy-plane (flat, camera-facing ring).
#[inline]
#[must_use]
pub fn ring_xy(radius: f32, angle: f32, z: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, angle.sin() * radius, z)
}

/// Coordinate of grid cell `i` out of `n`, spaced by `pitch` and centered
/// on the origin: `(i - n/2 + 0.5) * pitch`.
///
/// For odd `n` the middle cell lands exactly at `0.0`.
#[inline]
#[must_use]
pub fn centered(i: usize, n: usize, pitch: f32) -> f32 {
    (i as f32 - n as f32 / 2.0 + 0.5) * pitch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_odd_grid_has_origin_middle() {
        assert_eq!(centered(1, 3, 1.5), 0.0);
        assert_eq!(centered(0, 3, 1.5), -1.5);
        assert_eq!(centered(2, 3, 1.5), 1.5);
    }

    #[test]
    fn centered_even_grid_straddles_origin() {
        assert_eq!(centered(0, 2, 1.0), -0.5);
        assert_eq!(centered(1, 2, 1.0), 0.5);
    }

    #[test]
    fn ring_points_sit_at_radius() {
        let p = ring_xz(2.0, 1.234, 0.5);
        let planar = (p.x * p.x + p.z * p.z).sqrt();
        assert!((planar - 2.0).abs() < 1e-5);
        assert_eq!(p.y, 0.5);

        let q = ring_xy(3.0, 0.0, -0.5);
        assert_eq!(q, Vec3::new(3.0, 0.0, -0.5));
    }
}
