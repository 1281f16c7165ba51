//! Planar graphene sheet: a two-atom-basis honeycomb lattice.

use glam::Vec3;

use crate::bonds::infer_bonds;
use crate::structure::{Atom, Structure};

/// Unit cells per row.
const COLS: usize = 6;
/// Rows of unit cells.
const ROWS: usize = 6;
/// Standard C-C separation in graphene (angstrom-scaled units).
const BOND_LENGTH: f32 = 1.42;

/// Lower bond window edge: excludes coincident atoms.
const BOND_MIN: f32 = 0.1;
/// Upper bond window edge: nearest neighbors sit at exactly `BOND_LENGTH`;
/// the next separation is `√3 × BOND_LENGTH`, so 1.1× leaves generous float
/// slack without admitting second neighbors. Scale-derived from
/// `BOND_LENGTH`; re-derive if that changes.
const BOND_MAX: f32 = BOND_LENGTH * 1.1;

/// Dark slate carbon.
const CARBON_COLOR: [f32; 3] = [0.12, 0.16, 0.23];

/// Build the honeycomb sheet in the z = 0 plane.
///
/// Unit cells sit on a staggered rectangular grid: row pitch
/// `1.5 × BOND_LENGTH`, column pitch `√3 × BOND_LENGTH`, odd rows offset by
/// half the column pitch. Each cell carries the two-atom honeycomb basis,
/// the second atom displaced by `(√3/2, 1/2) × BOND_LENGTH`, which places
/// every nearest neighbor at exactly one bond length. Connectivity is then
/// recovered by a pure distance pass; boundary atoms legitimately end up
/// with fewer than 3 bonds (open sheet edge).
#[must_use]
pub fn generate() -> Structure {
    let dx = BOND_LENGTH * 3.0_f32.sqrt();
    let dy = BOND_LENGTH * 1.5;

    // Center the sheet on the origin.
    let x_mid = (COLS as f32 / 2.0) * dx;
    let y_mid = (ROWS as f32 / 2.0) * dy;

    let mut atoms = Vec::with_capacity(ROWS * COLS * 2);
    for r in 0..ROWS {
        let x_offset = if r % 2 == 1 { dx / 2.0 } else { 0.0 };
        let y = r as f32 * dy - y_mid;
        for c in 0..COLS {
            let x = c as f32 * dx + x_offset - x_mid;
            atoms.push(Atom::new(
                format!("c-{r}-{c}-a"),
                "C",
                Vec3::new(x, y, 0.0),
                CARBON_COLOR,
                0.35,
            ));
            atoms.push(Atom::new(
                format!("c-{r}-{c}-b"),
                "C",
                Vec3::new(x + dx / 2.0, y + BOND_LENGTH / 2.0, 0.0),
                CARBON_COLOR,
                0.35,
            ));
        }
    }

    let bonds = infer_bonds(&atoms, BOND_MIN, BOND_MAX);

    Structure {
        atoms,
        bonds,
        title: "Graphene Sheet".to_owned(),
        description: "A single layer of carbon atoms arranged in a \
                      two-dimensional honeycomb lattice. Known for \
                      exceptional strength and conductivity."
            .to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_is_valid_and_planar() {
        let s = generate();
        assert!(s.validate().is_ok());
        assert_eq!(s.atoms.len(), ROWS * COLS * 2);
        assert!(s.atoms.iter().all(|a| a.position.z == 0.0));
    }

    #[test]
    fn no_atom_exceeds_degree_three() {
        let s = generate();
        for atom in &s.atoms {
            assert!(
                s.degree(&atom.id) <= 3,
                "atom {} has degree {}",
                atom.id,
                s.degree(&atom.id)
            );
        }
    }

    #[test]
    fn interior_atoms_have_degree_three() {
        // Away from the sheet boundary every carbon has its full three
        // neighbors. Use a margin of one bond window from the extents.
        let s = generate();
        let min_x = s.atoms.iter().map(|a| a.position.x).fold(f32::MAX, f32::min);
        let max_x = s.atoms.iter().map(|a| a.position.x).fold(f32::MIN, f32::max);
        let min_y = s.atoms.iter().map(|a| a.position.y).fold(f32::MAX, f32::min);
        let max_y = s.atoms.iter().map(|a| a.position.y).fold(f32::MIN, f32::max);
        let margin = BOND_LENGTH * 1.8;

        let mut interior = 0;
        for atom in &s.atoms {
            let p = atom.position;
            if p.x > min_x + margin
                && p.x < max_x - margin
                && p.y > min_y + margin
                && p.y < max_y - margin
            {
                interior += 1;
                assert_eq!(
                    s.degree(&atom.id),
                    3,
                    "interior atom {} should have degree 3",
                    atom.id
                );
            }
        }
        assert!(interior > 0, "test must cover at least one interior atom");
    }

    #[test]
    fn all_bonds_are_one_bond_length() {
        let s = generate();
        for bond in &s.bonds {
            let (Some(a), Some(b)) = (s.atom(&bond.source), s.atom(&bond.target))
            else {
                unreachable!("validated bonds resolve");
            };
            let d = a.position.distance(b.position);
            assert!(
                (d - BOND_LENGTH).abs() < 1e-3,
                "bond {} spans {d}, expected {BOND_LENGTH}",
                bond.id
            );
        }
    }
}
