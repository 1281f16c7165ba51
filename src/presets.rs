//! View presets: display tuning handed to the rendering collaborator.
//!
//! Generation itself takes no parameters; a preset only scales how the
//! renderer draws the result (overall scene scale, sphere and cylinder
//! multipliers). Presets serialize to/from TOML with `#[serde(default)]`,
//! so a partial file overriding a single field works.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::SceneKind;
use crate::error::MolsceneError;

/// Display tuning for one rendered scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ViewPreset {
    /// Uniform scale applied to the whole structure.
    pub scale: f32,
    /// Multiplier on every atom's sphere radius.
    pub atom_radius_scale: f32,
    /// Multiplier on bond cylinder radii (before the per-bond order factor).
    pub bond_radius_scale: f32,
}

impl Default for ViewPreset {
    fn default() -> Self {
        Self {
            scale: 1.0,
            atom_radius_scale: 1.0,
            bond_radius_scale: 1.0,
        }
    }
}

impl ViewPreset {
    /// Default preset for a scene, seeding `scale` from the catalog's
    /// per-scene view scale.
    #[must_use]
    pub fn for_scene(kind: SceneKind) -> Self {
        Self {
            scale: kind.info().view_scale,
            ..Self::default()
        }
    }

    /// Load a preset from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`MolsceneError::Io`] if the file cannot be read,
    /// [`MolsceneError::PresetParse`] if it is not valid preset TOML.
    pub fn load(path: &Path) -> Result<Self, MolsceneError> {
        let content = std::fs::read_to_string(path).map_err(MolsceneError::Io)?;
        toml::from_str(&content)
            .map_err(|e| MolsceneError::PresetParse(e.to_string()))
    }

    /// Save the preset to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`MolsceneError::PresetParse`] on serialization failure,
    /// [`MolsceneError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), MolsceneError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolsceneError::PresetParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolsceneError::Io)?;
        }
        std::fs::write(path, content).map_err(MolsceneError::Io)
    }
}
