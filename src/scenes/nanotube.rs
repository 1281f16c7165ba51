//! Single-walled carbon nanotube segment: stacked rings on a cylinder.

use std::f32::consts::TAU;

use crate::geometry::{centered, ring_xz};
use crate::structure::{Atom, Bond, Structure};

/// Stacked rings along the tube axis.
const LAYERS: usize = 8;
/// Atoms per ring.
const ATOMS_PER_LAYER: usize = 10;
/// Cylinder radius.
const RADIUS: f32 = 1.5;
/// Vertical separation between rings.
const HEIGHT_STEP: f32 = 0.6;

/// Dark slate carbon.
const CARBON_COLOR: [f32; 3] = [0.12, 0.16, 0.23];

/// Build the tube.
///
/// Each atom bonds to its circular successor within the ring (wrap-around
/// closes the ring) and, below the topmost layer, to the atom at the same
/// angular index one layer up. This approximates a rolled sheet without an
/// explicit wrap geometry; a real nanotube has a chiral offset between
/// layers, deliberately omitted here for visualization simplicity.
#[must_use]
pub fn generate() -> Structure {
    let mut atoms = Vec::with_capacity(LAYERS * ATOMS_PER_LAYER);
    let mut bonds = Vec::new();

    for l in 0..LAYERS {
        let y = centered(l, LAYERS, HEIGHT_STEP);
        for i in 0..ATOMS_PER_LAYER {
            let angle = (i as f32 / ATOMS_PER_LAYER as f32) * TAU;
            let id = format!("n-{l}-{i}");
            atoms.push(Atom::new(
                id.clone(),
                "C",
                ring_xz(RADIUS, angle, y),
                CARBON_COLOR,
                0.3,
            ));

            let ring_next = format!("n-{l}-{}", (i + 1) % ATOMS_PER_LAYER);
            bonds.push(Bond::new(format!("b-h-{l}-{i}"), &id, &ring_next, 1));

            if l + 1 < LAYERS {
                let above = format!("n-{}-{i}", l + 1);
                bonds.push(Bond::new(format!("b-v-{l}-{i}"), &id, &above, 1));
            }
        }
    }

    Structure {
        atoms,
        bonds,
        title: "Carbon Nanotube Segment".to_owned(),
        description: "A rolled hexagonal lattice representing a single-walled \
                      carbon nanotube, highlighting structural rigidity."
            .to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tube_counts() {
        let s = generate();
        assert!(s.validate().is_ok());
        assert_eq!(s.atoms.len(), LAYERS * ATOMS_PER_LAYER);
        // One ring bond per atom, one vertical bond per atom below the top.
        let expected =
            LAYERS * ATOMS_PER_LAYER + (LAYERS - 1) * ATOMS_PER_LAYER;
        assert_eq!(s.bonds.len(), expected);
    }

    #[test]
    fn rings_wrap_around() {
        let s = generate();
        let last = format!("n-0-{}", ATOMS_PER_LAYER - 1);
        assert!(
            s.bonds
                .iter()
                .any(|b| b.source == last && b.target == "n-0-0"),
            "last ring atom must close back to the first"
        );
    }

    #[test]
    fn atoms_sit_on_the_cylinder() {
        let s = generate();
        for atom in &s.atoms {
            let planar =
                (atom.position.x * atom.position.x + atom.position.z * atom.position.z).sqrt();
            assert!((planar - RADIUS).abs() < 1e-5);
        }
    }

    #[test]
    fn middle_layer_atoms_have_degree_four() {
        // Ring predecessor + ring successor + layer above + layer below.
        let s = generate();
        assert_eq!(s.degree("n-3-0"), 4);
        // Topmost layer loses its upward link.
        assert_eq!(s.degree(&format!("n-{}-0", LAYERS - 1)), 3);
    }
}
