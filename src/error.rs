//! Crate-level error types.

use std::fmt;

/// A structural-invariant violation in a generated [`crate::Structure`].
///
/// Generators uphold these invariants by construction; the checks exist so
/// tests (and debug assertions in downstream consumers) can surface a
/// miscalibrated distance threshold or a broken iteration discipline as a
/// named defect rather than a silently wrong picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// Two atoms share the same id.
    DuplicateAtomId {
        /// The colliding atom id.
        id: String,
    },
    /// An atom has a non-positive display radius.
    NonPositiveRadius {
        /// The offending atom id.
        id: String,
    },
    /// A bond references an atom id not present in the structure.
    DanglingBond {
        /// The offending bond id.
        bond: String,
        /// The unresolved atom id.
        atom: String,
    },
    /// A bond connects an atom to itself.
    SelfBond {
        /// The offending bond id.
        bond: String,
    },
    /// Two bonds cover the same unordered atom pair.
    DuplicateBond {
        /// One endpoint of the repeated pair.
        source: String,
        /// The other endpoint of the repeated pair.
        target: String,
    },
    /// A bond order outside the rendered range 1..=3.
    BadBondOrder {
        /// The offending bond id.
        bond: String,
        /// The declared order.
        order: u8,
    },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAtomId { id } => {
                write!(f, "duplicate atom id: {id}")
            }
            Self::NonPositiveRadius { id } => {
                write!(f, "atom {id} has non-positive radius")
            }
            Self::DanglingBond { bond, atom } => {
                write!(f, "bond {bond} references missing atom {atom}")
            }
            Self::SelfBond { bond } => {
                write!(f, "bond {bond} connects an atom to itself")
            }
            Self::DuplicateBond { source, target } => {
                write!(f, "duplicate bond between {source} and {target}")
            }
            Self::BadBondOrder { bond, order } => {
                write!(f, "bond {bond} has order {order}, expected 1..=3")
            }
        }
    }
}

impl std::error::Error for StructureError {}

/// Errors produced by the molscene crate.
#[derive(Debug)]
pub enum MolsceneError {
    /// A generated structure failed invariant validation.
    Invalid(StructureError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML preset parsing/serialization failure.
    PresetParse(String),
    /// JSON serialization failure (catalog export for the UI shell).
    Json(String),
}

impl fmt::Display for MolsceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "invalid structure: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::PresetParse(msg) => {
                write!(f, "preset parse error: {msg}")
            }
            Self::Json(msg) => write!(f, "JSON error: {msg}"),
        }
    }
}

impl std::error::Error for MolsceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::PresetParse(_) | Self::Json(_) => None,
        }
    }
}

impl From<StructureError> for MolsceneError {
    fn from(e: StructureError) -> Self {
        Self::Invalid(e)
    }
}

impl From<std::io::Error> for MolsceneError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
