//! Buckminsterfullerene (C60) via truncated-icosahedron construction.

use glam::Vec3;

use crate::bonds::infer_bonds;
use crate::structure::{Atom, Structure};

/// Icosahedron edge length is exactly 2 in golden-ratio coordinates; the
/// window tolerates floating-point error on either side.
const EDGE_MIN: f32 = 1.9;
/// Upper edge of the icosahedron-edge detection window.
const EDGE_MAX: f32 = 2.1;

/// Cage bond window. The shortest separation between truncation points is
/// 2/3 (one third of an edge); the pentagon sides are in the same range and
/// the next-nearest distance is well above 0.8. Scale-derived: must be
/// recomputed if the icosahedron coordinates change.
const CAGE_BOND_MIN: f32 = 0.1;
/// Upper edge of the cage bond window.
const CAGE_BOND_MAX: f32 = 0.8;

/// Slate gray carbon.
const CARBON_COLOR: [f32; 3] = [0.28, 0.33, 0.41];

/// The 12 vertices of a regular icosahedron: cyclic permutations of
/// `(0, ±1, ±φ)` with `φ` the golden ratio.
fn icosahedron_vertices() -> Vec<Vec3> {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut verts = Vec::with_capacity(12);
    for s1 in [1.0, -1.0] {
        for s2 in [1.0, -1.0] {
            verts.push(Vec3::new(0.0, s1, s2 * phi));
            verts.push(Vec3::new(s1, s2 * phi, 0.0));
            verts.push(Vec3::new(s1 * phi, 0.0, s2));
        }
    }
    verts
}

/// Build the C60 cage.
///
/// Every icosahedron edge is found by a distance test, then truncated into
/// two points at 1/3 and 2/3 along the edge. Each original vertex thereby
/// dissolves into a pentagon of five points shared among its incident edges;
/// 30 edges × 2 points = 60 carbons. Cage connectivity is re-derived by a
/// second, tighter distance pass.
#[must_use]
pub fn generate() -> Structure {
    let verts = icosahedron_vertices();

    let mut positions = Vec::with_capacity(60);
    for (i, &v1) in verts.iter().enumerate() {
        for &v2 in verts.iter().skip(i + 1) {
            let d = v1.distance(v2);
            if d > EDGE_MIN && d < EDGE_MAX {
                positions.push(v1.lerp(v2, 1.0 / 3.0));
                positions.push(v1.lerp(v2, 2.0 / 3.0));
            }
        }
    }

    let atoms: Vec<Atom> = positions
        .into_iter()
        .enumerate()
        .map(|(idx, pos)| {
            Atom::new(format!("c60-{idx}"), "C", pos, CARBON_COLOR, 0.25)
        })
        .collect();

    let bonds = infer_bonds(&atoms, CAGE_BOND_MIN, CAGE_BOND_MAX);

    Structure {
        atoms,
        bonds,
        title: "Buckminsterfullerene (C60)".to_owned(),
        description: "A truncated icosahedron resembling a soccer ball. The \
                      most famous fullerene, composed of 20 hexagons and 12 \
                      pentagons."
            .to_owned(),
    }
}
