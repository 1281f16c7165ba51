//! The eight scene generators.
//!
//! Each submodule exposes a single parameterless `generate()` returning an
//! immutable value. The generators are mutually independent; dispatch lives
//! in [`crate::catalog`].

pub mod buckyball;
pub mod caffeine;
pub mod crystal;
pub mod dna;
pub mod graphene;
pub mod macrocycle;
pub mod nanotube;
pub mod rbc;
