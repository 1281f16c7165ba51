//! Red blood cell: Evans-Fung biconcave-disc revolution profile.
//!
//! The one scene that is a continuous surface rather than a point graph.
//! Output is a closed 2D polyline in (radius, half-thickness) space; the
//! rendering collaborator sweeps it around the axis (lathe) to produce the
//! 3D solid.

use glam::Vec2;

/// Visual model radius.
const MODEL_RADIUS: f32 = 3.2;
/// Thickness exaggeration for a stronger 3D silhouette.
const THICKNESS_SCALE: f32 = 1.8;
/// Samples per surface pass; high count for smooth curvature.
const SEGMENTS: usize = 128;

/// Evans-Fung (1972) shape coefficients for the human erythrocyte:
/// `z(r) = ±0.5·√(1-r²)·(C0 + C1·r² + C2·r⁴)` for normalized `r ∈ [0, 1]`.
const C0: f32 = 0.207;
/// Quadratic shape coefficient.
const C1: f32 = 2.003;
/// Quartic shape coefficient.
const C2: f32 = -1.123;

/// A closed revolution profile handed to a lathe-style sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct LatheProfile {
    /// Polyline points as (radius, half-thickness), ordered top surface
    /// center→edge then bottom surface edge→center.
    pub points: Vec<Vec2>,
    /// Display title.
    pub title: String,
    /// One-paragraph display description.
    pub description: String,
}

/// Half-thickness of the Evans-Fung profile at normalized radius `r`.
///
/// At `r = 1` the square root vanishes, so the thickness is exactly zero at
/// the rim and the swept silhouette closes without self-intersection.
fn half_thickness(r: f32) -> f32 {
    let r2 = r * r;
    let shape = C0 + C1 * r2 + C2 * r2 * r2;
    0.5 * (1.0 - r2).max(0.0).sqrt() * shape
}

/// Build the biconcave-disc profile.
///
/// The top surface is sampled at uniform steps from center to edge, the
/// bottom surface from edge back to center with the thickness negated; the
/// concatenation is one closed loop starting and ending on the axis.
#[must_use]
pub fn generate() -> LatheProfile {
    let mut points = Vec::with_capacity(2 * (SEGMENTS + 1));

    for i in 0..=SEGMENTS {
        let r = i as f32 / SEGMENTS as f32;
        points.push(Vec2::new(
            r * MODEL_RADIUS,
            half_thickness(r) * MODEL_RADIUS * THICKNESS_SCALE,
        ));
    }
    for i in (0..=SEGMENTS).rev() {
        let r = i as f32 / SEGMENTS as f32;
        points.push(Vec2::new(
            r * MODEL_RADIUS,
            -half_thickness(r) * MODEL_RADIUS * THICKNESS_SCALE,
        ));
    }

    LatheProfile {
        points,
        title: "Erythrocyte (Red Blood Cell)".to_owned(),
        description: "The biconcave disc of a human red blood cell, following \
                      the Evans-Fung shape model. Rendered as a surface of \
                      revolution rather than an atom graph."
            .to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_is_closed_at_the_axis() {
        let p = generate();
        assert_eq!(p.points.len(), 2 * (SEGMENTS + 1));
        let Some(first) = p.points.first() else {
            unreachable!("profile is non-empty");
        };
        let Some(last) = p.points.last() else {
            unreachable!("profile is non-empty");
        };
        assert_eq!(first.x, 0.0, "top pass starts on the axis");
        assert_eq!(last.x, 0.0, "bottom pass ends on the axis");
    }

    #[test]
    fn thickness_vanishes_at_the_rim() {
        let p = generate();
        // Rim samples: end of the top pass and start of the bottom pass.
        let top_rim = p.points[SEGMENTS];
        let bottom_rim = p.points[SEGMENTS + 1];
        assert_eq!(top_rim.x, MODEL_RADIUS);
        assert!(top_rim.y.abs() < 1e-5);
        assert!(bottom_rim.y.abs() < 1e-5);
    }

    #[test]
    fn surfaces_mirror_about_the_midplane() {
        let p = generate();
        let n = p.points.len();
        for i in 0..=SEGMENTS {
            let top = p.points[i];
            let bottom = p.points[n - 1 - i];
            assert_eq!(top.x, bottom.x, "equal r at mirrored indices");
            assert!(
                (top.y + bottom.y).abs() < 1e-6,
                "thickness must negate between surfaces at r = {}",
                top.x
            );
        }
    }

    #[test]
    fn dimple_is_thinner_than_the_shoulder() {
        // The biconcave profile dips at the center and peaks mid-radius.
        let center = half_thickness(0.0);
        let shoulder = half_thickness(0.65);
        assert!(shoulder > center);
    }
}
