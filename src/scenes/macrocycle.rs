//! Heme-like macrocycle: an aromatic ring with substituents coordinating a
//! central metal.

use std::f32::consts::TAU;

use crate::geometry::ring_xy;
use crate::structure::{Atom, Bond, Structure};

/// Ring atoms on the macrocycle.
const RING_ATOMS: usize = 6;
/// Ring radius.
const RING_RADIUS: f32 = 2.0;
/// Substituents sit one unit further out along the same radius.
const SUBSTITUENT_RADIUS: f32 = RING_RADIUS + 1.0;

/// Slate ring carbon.
const C_COLOR: [f32; 3] = [0.20, 0.25, 0.33];
/// Red oxygen substituent.
const O_COLOR: [f32; 3] = [0.94, 0.27, 0.27];
/// White hydrogen substituent.
const H_COLOR: [f32; 3] = [0.97, 0.98, 0.99];
/// Amber iron center.
const FE_COLOR: [f32; 3] = [0.96, 0.62, 0.04];

/// Build the macrocycle.
///
/// Ring atoms are spaced evenly on a circle in the xy-plane and joined by
/// order-2 bonds (a delocalized, aromatic-like perimeter). Each ring atom
/// carries one substituent further out on its own radius, alternating O and
/// H by index parity and puckered slightly out of plane. A single iron atom
/// at the ring's geometric center is singly bonded to every ring atom,
/// mimicking metal coordination geometry.
#[must_use]
pub fn generate() -> Structure {
    let mut atoms = Vec::with_capacity(RING_ATOMS * 2 + 1);
    let mut bonds = Vec::new();

    for i in 0..RING_ATOMS {
        let angle = (i as f32 / RING_ATOMS as f32) * TAU;
        let id = format!("c-{i}");
        atoms.push(Atom::new(
            id.clone(),
            "C",
            ring_xy(RING_RADIUS, angle, 0.0),
            C_COLOR,
            0.5,
        ));

        let oxygen = i % 2 == 0;
        let sub_id = format!("f-{i}");
        atoms.push(Atom::new(
            sub_id.clone(),
            if oxygen { "O" } else { "H" },
            ring_xy(
                SUBSTITUENT_RADIUS,
                angle,
                if oxygen { 0.5 } else { -0.5 },
            ),
            if oxygen { O_COLOR } else { H_COLOR },
            if oxygen { 0.4 } else { 0.25 },
        ));
        bonds.push(Bond::new(format!("b-f-{i}"), &id, &sub_id, 1));

        let ring_next = format!("c-{}", (i + 1) % RING_ATOMS);
        bonds.push(Bond::new(format!("b-r-{i}"), &id, &ring_next, 2));
    }

    atoms.push(Atom::new(
        "center-fe".to_owned(),
        "Fe",
        glam::Vec3::ZERO,
        FE_COLOR,
        0.7,
    ));
    for i in 0..RING_ATOMS {
        bonds.push(Bond::new(
            format!("b-c-{i}"),
            "center-fe",
            &format!("c-{i}"),
            1,
        ));
    }

    Structure {
        atoms,
        bonds,
        title: "Heme-like Macrocycle".to_owned(),
        description: "An organic metallic complex showing coordination \
                      geometry common in biological catalysis."
            .to_owned(),
    }
}
