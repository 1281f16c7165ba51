//! Caffeine (1,3,7-trimethylxanthine): hand-authored fused-ring topology.
//!
//! The only non-procedural scene. Coordinates are approximated planar
//! positions for the purine core (six-membered pyrimidine fused to a
//! five-membered imidazole), two exocyclic oxygens, and three methyl groups,
//! with declared single/double bond orders matching the reference structure.

use crate::structure::{Atom, Bond, Structure};

/// Blue ring nitrogen.
const N_COLOR: [f32; 3] = [0.23, 0.51, 0.96];
/// Slate ring/methyl carbon.
const C_COLOR: [f32; 3] = [0.20, 0.25, 0.33];
/// Rose exocyclic oxygen.
const O_COLOR: [f32; 3] = [0.88, 0.11, 0.28];

/// Atom table: id, element, position, radius.
const ATOMS: &[(&str, &str, [f32; 3], f32)] = &[
    // Six-membered ring
    ("n1", "N", [-1.2, -0.7, 0.0], 0.4),
    ("c2", "C", [0.0, -1.4, 0.0], 0.5),
    ("n3", "N", [1.2, -0.7, 0.0], 0.4),
    ("c4", "C", [1.2, 0.7, 0.0], 0.5),
    ("c5", "C", [0.0, 1.4, 0.0], 0.5),
    ("c6", "C", [-1.2, 0.7, 0.0], 0.5),
    // Five-membered ring fused at C4-C5
    ("n7", "N", [0.0, 2.8, 0.0], 0.4),
    ("c8", "C", [1.9, 2.1, 0.0], 0.5),
    ("n9", "N", [2.1, 0.7, 0.0], 0.4),
    // Exocyclic oxygens
    ("o2", "O", [0.0, -2.8, 0.0], 0.45),
    ("o6", "O", [-2.4, 1.4, 0.0], 0.45),
    // Methyl carbons on N1, N3, N7
    ("m1", "C", [-2.5, -1.4, 0.5], 0.5),
    ("m3", "C", [2.5, -1.4, -0.5], 0.5),
    ("m7", "C", [-0.5, 4.0, 0.5], 0.5),
];

/// Ring-closure bonds: the pyrimidine and imidazole perimeters.
const RING_BONDS: &[(&str, &str, &str, u8)] = &[
    ("b1", "n1", "c2", 1),
    ("b2", "c2", "n3", 1),
    ("b3", "n3", "c4", 1),
    ("b4", "c4", "c5", 2), // double bond shared between the fused rings
    ("b5", "c5", "c6", 1),
    ("b6", "c6", "n1", 1),
    ("b7", "c5", "n7", 1),
    ("b8", "n7", "c8", 1),
    ("b9", "c8", "n9", 2),
    ("b10", "n9", "c4", 1),
];

/// Substituent bonds: carbonyl oxygens and methyl groups.
const SUBSTITUENT_BONDS: &[(&str, &str, &str, u8)] = &[
    ("b-o2", "c2", "o2", 2),
    ("b-o6", "c6", "o6", 2),
    ("b-m1", "n1", "m1", 1),
    ("b-m3", "n3", "m3", 1),
    ("b-m7", "n7", "m7", 1),
];

/// Build the caffeine molecule from the literal tables.
#[must_use]
pub fn generate() -> Structure {
    let atoms = ATOMS
        .iter()
        .map(|&(id, element, [x, y, z], radius)| {
            let color = match element {
                "N" => N_COLOR,
                "O" => O_COLOR,
                _ => C_COLOR,
            };
            Atom::new(
                id.to_owned(),
                element,
                glam::Vec3::new(x, y, z),
                color,
                radius,
            )
        })
        .collect();

    let bonds = RING_BONDS
        .iter()
        .chain(SUBSTITUENT_BONDS)
        .map(|&(id, source, target, order)| {
            Bond::new(id.to_owned(), source, target, order)
        })
        .collect();

    Structure {
        atoms,
        bonds,
        title: "Caffeine".to_owned(),
        description: "1,3,7-Trimethylxanthine. The world's most popular \
                      psychoactive drug, featuring a fused \
                      pyrimidine-imidazole ring system."
            .to_owned(),
    }
}
