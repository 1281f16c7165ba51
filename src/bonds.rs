//! Distance-threshold bond inference.
//!
//! The reusable primitive behind the fullerene and graphene generators:
//! coordinates there are easiest to derive by direct trigonometric or
//! algebraic placement, so connectivity is recovered afterward from pairwise
//! distances. Generators whose index space already encodes adjacency (cubic
//! lattice, nanotube, helix) emit their bonds directly instead.

use crate::structure::{Atom, Bond};

/// Emit one order-1 bond for every unordered atom pair whose Euclidean
/// distance lies strictly inside `(min_dist, max_dist)`.
///
/// The scan runs over `i < j` index pairs, so no duplicate or
/// reversed-duplicate edge can appear. `min_dist` must be positive; besides
/// excluding degenerate zero-distance pairs it guards against a window that
/// accidentally reaches down to coincident atoms.
///
/// The window is generator-specific: each caller derives its thresholds from
/// its own coordinate scale so that only true nearest-neighbor separations
/// fall in range. If a generator's scale constants change, its window must be
/// re-derived from the new edge lengths, not copied.
#[must_use]
pub fn infer_bonds(atoms: &[Atom], min_dist: f32, max_dist: f32) -> Vec<Bond> {
    let mut bonds = Vec::new();
    for (i, a) in atoms.iter().enumerate() {
        for (j, b) in atoms.iter().enumerate().skip(i + 1) {
            let dist = a.position.distance(b.position);
            if dist > min_dist && dist < max_dist {
                bonds.push(Bond::new(format!("b-{i}-{j}"), &a.id, &b.id, 1));
            }
        }
    }
    bonds
}
