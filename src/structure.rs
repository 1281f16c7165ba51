//! Core data model: atoms, bonds, and the structure a generator emits.
//!
//! A [`Structure`] is produced by exactly one generator invocation and is
//! read-only afterward; the rendering collaborator takes ownership wholesale
//! (atoms become instanced spheres, bonds become oriented cylinders).

use glam::Vec3;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::StructureError;

/// A single positioned atom with its display hints.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Unique id within the owning structure.
    pub id: String,
    /// Element symbol ("C", "N", "Fe", ...). A label, not validated chemistry.
    pub element: String,
    /// World-space position.
    pub position: Vec3,
    /// RGB display color.
    pub color: [f32; 3],
    /// Sphere radius display hint, > 0.
    pub radius: f32,
}

impl Atom {
    /// Construct an atom. Convenience over struct-literal noise in the
    /// generators.
    #[must_use]
    pub fn new(
        id: String,
        element: &str,
        position: Vec3,
        color: [f32; 3],
        radius: f32,
    ) -> Self {
        Self {
            id,
            element: element.to_owned(),
            position,
            color,
            radius,
        }
    }
}

/// A pairwise connection between two atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bond {
    /// Unique id within the owning structure.
    pub id: String,
    /// Atom id of one endpoint.
    pub source: String,
    /// Atom id of the other endpoint.
    pub target: String,
    /// Thickness hint in 1..=3. Not a validated chemical bond order.
    pub order: u8,
}

impl Bond {
    /// Construct a bond between two atom ids.
    #[must_use]
    pub fn new(id: String, source: &str, target: &str, order: u8) -> Self {
        Self {
            id,
            source: source.to_owned(),
            target: target.to_owned(),
            order,
        }
    }
}

/// The atom/bond graph produced by one generator invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    /// Atoms in generation order.
    pub atoms: Vec<Atom>,
    /// Bonds in generation order.
    pub bonds: Vec<Bond>,
    /// Display title.
    pub title: String,
    /// One-paragraph display description.
    pub description: String,
}

impl Structure {
    /// Look up an atom by id.
    #[must_use]
    pub fn atom(&self, id: &str) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.id == id)
    }

    /// Number of bonds touching the given atom.
    #[must_use]
    pub fn degree(&self, id: &str) -> usize {
        self.bonds
            .iter()
            .filter(|b| b.source == id || b.target == id)
            .count()
    }

    /// Check the structural invariants every generator must uphold: unique
    /// atom ids, positive radii, bond endpoints that resolve, no self bonds,
    /// no duplicate unordered pair, bond orders in 1..=3.
    ///
    /// # Errors
    ///
    /// Returns the first [`StructureError`] encountered.
    pub fn validate(&self) -> Result<(), StructureError> {
        let mut ids: FxHashMap<&str, usize> = FxHashMap::default();
        for (i, atom) in self.atoms.iter().enumerate() {
            if ids.insert(atom.id.as_str(), i).is_some() {
                return Err(StructureError::DuplicateAtomId {
                    id: atom.id.clone(),
                });
            }
            if atom.radius <= 0.0 {
                return Err(StructureError::NonPositiveRadius {
                    id: atom.id.clone(),
                });
            }
        }

        let mut seen_pairs: FxHashSet<(&str, &str)> = FxHashSet::default();
        for bond in &self.bonds {
            for endpoint in [&bond.source, &bond.target] {
                if !ids.contains_key(endpoint.as_str()) {
                    return Err(StructureError::DanglingBond {
                        bond: bond.id.clone(),
                        atom: endpoint.clone(),
                    });
                }
            }
            if bond.source == bond.target {
                return Err(StructureError::SelfBond {
                    bond: bond.id.clone(),
                });
            }
            if !(1..=3).contains(&bond.order) {
                return Err(StructureError::BadBondOrder {
                    bond: bond.id.clone(),
                    order: bond.order,
                });
            }
            let pair = if bond.source.as_str() <= bond.target.as_str() {
                (bond.source.as_str(), bond.target.as_str())
            } else {
                (bond.target.as_str(), bond.source.as_str())
            };
            if !seen_pairs.insert(pair) {
                return Err(StructureError::DuplicateBond {
                    source: pair.0.to_owned(),
                    target: pair.1.to_owned(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_atoms() -> Vec<Atom> {
        vec![
            Atom::new("a".to_owned(), "C", Vec3::ZERO, [0.2; 3], 0.3),
            Atom::new("b".to_owned(), "C", Vec3::X, [0.2; 3], 0.3),
        ]
    }

    #[test]
    fn valid_structure_passes() {
        let s = Structure {
            atoms: two_atoms(),
            bonds: vec![Bond::new("b0".to_owned(), "a", "b", 1)],
            title: String::new(),
            description: String::new(),
        };
        assert!(s.validate().is_ok());
        assert_eq!(s.degree("a"), 1);
        assert_eq!(s.degree("b"), 1);
    }

    #[test]
    fn dangling_bond_is_rejected() {
        let s = Structure {
            atoms: two_atoms(),
            bonds: vec![Bond::new("b0".to_owned(), "a", "ghost", 1)],
            title: String::new(),
            description: String::new(),
        };
        assert_eq!(
            s.validate(),
            Err(StructureError::DanglingBond {
                bond: "b0".to_owned(),
                atom: "ghost".to_owned(),
            })
        );
    }

    #[test]
    fn reversed_duplicate_pair_is_rejected() {
        let s = Structure {
            atoms: two_atoms(),
            bonds: vec![
                Bond::new("b0".to_owned(), "a", "b", 1),
                Bond::new("b1".to_owned(), "b", "a", 2),
            ],
            title: String::new(),
            description: String::new(),
        };
        assert!(matches!(
            s.validate(),
            Err(StructureError::DuplicateBond { .. })
        ));
    }

    #[test]
    fn self_bond_and_bad_order_are_rejected() {
        let mut s = Structure {
            atoms: two_atoms(),
            bonds: vec![Bond::new("b0".to_owned(), "a", "a", 1)],
            title: String::new(),
            description: String::new(),
        };
        assert!(matches!(s.validate(), Err(StructureError::SelfBond { .. })));

        s.bonds = vec![Bond::new("b0".to_owned(), "a", "b", 4)];
        assert!(matches!(
            s.validate(),
            Err(StructureError::BadBondOrder { order: 4, .. })
        ));
    }
}
