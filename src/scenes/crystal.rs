//! Cubic crystal lattice with a distinguished coordination center.

use glam::Vec3;

use crate::geometry::centered;
use crate::structure::{Atom, Bond, Structure};

/// Cells per axis.
const SIZE: usize = 3;
/// Distance between neighboring cells.
const SPACING: f32 = 1.5;

/// Gold tint for the center metal.
const CENTER_COLOR: [f32; 3] = [0.98, 0.75, 0.14];
/// Sky blue for the surrounding halide cells.
const LIGAND_COLOR: [f32; 3] = [0.22, 0.74, 0.97];

/// Build a `SIZE`³ cubic lattice. The geometric center cell is a metal
/// (larger, gold); all others are a uniform halide species. Each cell bonds
/// only to its `+x`, `+y`, `+z` neighbor, which enumerates every axis-aligned
/// nearest-neighbor edge exactly once without a distance pass; boundary cells
/// simply end up with fewer bonds.
#[must_use]
pub fn generate() -> Structure {
    let mut atoms = Vec::with_capacity(SIZE * SIZE * SIZE);
    let mut bonds = Vec::new();

    // Cell-index to atom-id lookup, scoped to this call.
    let mut grid = [[[0usize; SIZE]; SIZE]; SIZE];
    let mut id_counter = 0usize;

    for (x, plane) in grid.iter_mut().enumerate() {
        for (y, row) in plane.iter_mut().enumerate() {
            for (z, cell) in row.iter_mut().enumerate() {
                *cell = id_counter;
                let is_center = x == SIZE / 2 && y == SIZE / 2 && z == SIZE / 2;
                atoms.push(Atom::new(
                    format!("atom-{id_counter}"),
                    if is_center { "Fe" } else { "Cl" },
                    Vec3::new(
                        centered(x, SIZE, SPACING),
                        centered(y, SIZE, SPACING),
                        centered(z, SIZE, SPACING),
                    ),
                    if is_center { CENTER_COLOR } else { LIGAND_COLOR },
                    if is_center { 0.6 } else { 0.4 },
                ));
                id_counter += 1;
            }
        }
    }

    let mut bond_id = 0usize;
    let mut link = |bonds: &mut Vec<Bond>, a: usize, b: usize| {
        bonds.push(Bond::new(
            format!("b-{bond_id}"),
            &format!("atom-{a}"),
            &format!("atom-{b}"),
            1,
        ));
        bond_id += 1;
    };

    for x in 0..SIZE {
        for y in 0..SIZE {
            for z in 0..SIZE {
                let source = grid[x][y][z];
                if x + 1 < SIZE {
                    link(&mut bonds, source, grid[x + 1][y][z]);
                }
                if y + 1 < SIZE {
                    link(&mut bonds, source, grid[x][y + 1][z]);
                }
                if z + 1 < SIZE {
                    link(&mut bonds, source, grid[x][y][z + 1]);
                }
            }
        }
    }

    Structure {
        atoms,
        bonds,
        title: "Perovskite Lattice Structure".to_owned(),
        description: "An idealized representation of a crystal lattice \
                      showing symmetry and connectivity typical of \
                      solid-state materials."
            .to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn lattice_counts() {
        let s = generate();
        assert!(s.validate().is_ok());
        assert_eq!(s.atoms.len(), 27);
        // 3 axis directions, N² lines per axis, N-1 links per line.
        assert_eq!(s.bonds.len(), 54);
    }

    #[test]
    fn single_center_atom_at_origin() {
        let s = generate();
        let centers: Vec<_> =
            s.atoms.iter().filter(|a| a.element == "Fe").collect();
        assert_eq!(centers.len(), 1);
        assert_eq!(centers[0].position, Vec3::ZERO);
        assert_eq!(centers[0].radius, 0.6);
    }

    #[test]
    fn center_atom_has_degree_six() {
        // All 6 axis neighbors of the middle cell exist in a 3x3x3 grid.
        let s = generate();
        let center = s
            .atoms
            .iter()
            .find(|a| a.element == "Fe")
            .map(|a| a.id.clone());
        let Some(center) = center else {
            unreachable!("center atom must exist");
        };
        assert_eq!(s.degree(&center), 6);
    }

    #[test]
    fn corner_atom_has_degree_three() {
        let s = generate();
        // atom-0 is the (0,0,0) corner.
        assert_eq!(s.degree("atom-0"), 3);
    }
}
