//! DNA double helix: paired sugar-phosphate backbones with base rungs.

use std::f32::consts::PI;

use crate::geometry::{centered, ring_xz};
use crate::structure::{Atom, Bond, Structure};

/// Base-pair steps along the helix axis.
const BASE_PAIRS: usize = 12;
/// Backbone radius from the helix axis.
const RADIUS: f32 = 2.0;
/// Vertical rise per step.
const RISE: f32 = 0.6;
/// Turn per step, ~36 degrees.
const ROTATION_PER_STEP: f32 = PI / 5.0;
/// Strand B sits diametrically opposite strand A plus this minor-groove
/// offset, breaking the perfect symmetry of an ideal double helix.
const STRAND_OFFSET: f32 = PI + 0.5;
/// Bases reach inward to this radius.
const INNER_RADIUS: f32 = 0.8;

/// Rose phosphate backbone.
const BACKBONE_COLOR: [f32; 3] = [0.98, 0.44, 0.52];
/// Teal base hint (A/T pairs).
const BASE_COLOR_EVEN: [f32; 3] = [0.18, 0.83, 0.75];
/// Indigo base hint (C/G pairs).
const BASE_COLOR_ODD: [f32; 3] = [0.51, 0.55, 0.97];

/// Build the double helix.
///
/// Per step: two backbone atoms (strands A and B), two base atoms reaching
/// toward the axis at the same angles, vertical backbone links to the
/// previous step, a backbone-to-base link on each strand, and one
/// base-to-base rung standing in for the hydrogen-bonded pairing. Base
/// colors alternate by step parity, with strand B complementary (swapped),
/// suggesting A/T vs C/G without encoding real nucleotide identity.
#[must_use]
pub fn generate() -> Structure {
    let mut atoms = Vec::with_capacity(BASE_PAIRS * 4);
    let mut bonds = Vec::new();

    for i in 0..BASE_PAIRS {
        let angle = i as f32 * ROTATION_PER_STEP;
        let y = centered(i, BASE_PAIRS, RISE);

        let a_id = format!("backbone-a-{i}");
        atoms.push(Atom::new(
            a_id.clone(),
            "P",
            ring_xz(RADIUS, angle, y),
            BACKBONE_COLOR,
            0.5,
        ));

        let b_id = format!("backbone-b-{i}");
        atoms.push(Atom::new(
            b_id.clone(),
            "P",
            ring_xz(RADIUS, angle + STRAND_OFFSET, y),
            BACKBONE_COLOR,
            0.5,
        ));

        let (color_a, color_b) = if i % 2 == 0 {
            (BASE_COLOR_EVEN, BASE_COLOR_ODD)
        } else {
            (BASE_COLOR_ODD, BASE_COLOR_EVEN)
        };

        let base_a_id = format!("base-a-{i}");
        atoms.push(Atom::new(
            base_a_id.clone(),
            "N",
            ring_xz(INNER_RADIUS, angle, y),
            color_a,
            0.35,
        ));

        let base_b_id = format!("base-b-{i}");
        atoms.push(Atom::new(
            base_b_id.clone(),
            "N",
            ring_xz(INNER_RADIUS, angle + STRAND_OFFSET, y),
            color_b,
            0.35,
        ));

        // Vertical backbone links between consecutive steps.
        if i > 0 {
            bonds.push(Bond::new(
                format!("bb-a-v-{i}"),
                &format!("backbone-a-{}", i - 1),
                &a_id,
                1,
            ));
            bonds.push(Bond::new(
                format!("bb-b-v-{i}"),
                &format!("backbone-b-{}", i - 1),
                &b_id,
                1,
            ));
        }

        // Backbone to base, then the base-pair rung.
        bonds.push(Bond::new(format!("b-a-base-{i}"), &a_id, &base_a_id, 1));
        bonds.push(Bond::new(format!("b-b-base-{i}"), &b_id, &base_b_id, 1));
        bonds.push(Bond::new(format!("h-bond-{i}"), &base_a_id, &base_b_id, 1));
    }

    Structure {
        atoms,
        bonds,
        title: "Deoxyribonucleic Acid (DNA)".to_owned(),
        description: "The molecule of life. A double helix formed by base \
                      pairs attached to a sugar-phosphate backbone."
            .to_owned(),
    }
}
