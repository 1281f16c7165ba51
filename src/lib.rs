// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Geometry math allowances
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! Procedural generation of idealized molecular and crystalline structures.
//!
//! Every scene is synthesized by a deterministic, parameterless generator
//! that produces either a ball-and-stick [`structure::Structure`] (atoms
//! plus bonds) or, for the red blood cell, a [`scenes::rbc::LatheProfile`]
//! meant for a surface-of-revolution sweep. Generation is pure: no I/O, no
//! randomness, no shared state — calling a generator twice yields identical
//! output.
//!
//! # Key entry points
//!
//! - [`catalog::SceneKind`] - the closed set of scenes and the
//!   `generate()` dispatch
//! - [`catalog::CATALOG`] - per-scene UI metadata (labels, descriptions,
//!   view scale)
//! - [`presets::ViewPreset`] - display tuning handed to the renderer
//!
//! # Architecture
//!
//! The geometry kernel ([`geometry`]) and the distance-threshold bond pass
//! ([`bonds`]) are the shared leaves; the eight generators under [`scenes`]
//! are mutually independent and build on them. The rendering pipeline,
//! camera, and UI shell are external collaborators: they consume the
//! structures produced here and contain no generation logic of their own.

pub mod bonds;
pub mod catalog;
pub mod error;
pub mod geometry;
pub mod presets;
pub mod scenes;
pub mod structure;

pub use catalog::{SceneKind, SceneOutput, CATALOG};
pub use error::{MolsceneError, StructureError};
pub use structure::{Atom, Bond, Structure};
