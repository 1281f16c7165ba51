//! Scene catalog: the closed set of scenes, their UI metadata, and the
//! generator dispatch.
//!
//! A [`SceneKind`] is the sole interface the UI/rendering collaborator needs:
//! it selects a generator, and [`SceneKind::generate`] runs it. Dispatch is a
//! flat match — no trait objects, since every generator shares the single
//! capability of producing one immutable value.

use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MolsceneError;
use crate::scenes::rbc::LatheProfile;
use crate::scenes::{
    buckyball, caffeine, crystal, dna, graphene, macrocycle, nanotube, rbc,
};
use crate::structure::Structure;

/// The eight structure classes the library can generate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SceneKind {
    /// Cubic crystal lattice with a coordination center.
    CrystalLattice,
    /// Metallo-organic macrocycle.
    OrganicMacro,
    /// Rolled carbon nanotube segment.
    NanoTube,
    /// Planar honeycomb sheet.
    Graphene,
    /// C60 truncated-icosahedron cage.
    Buckyball,
    /// Paired-backbone double helix.
    DnaHelix,
    /// Biconcave-disc revolution profile.
    Rbc,
    /// Hand-authored fused-ring heteroaromatic.
    Caffeine,
}

/// What a generator hands to the rendering collaborator: a ball-and-stick
/// graph for seven scenes, a lathe profile for the red blood cell.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneOutput {
    /// Atoms to instance as spheres, bonds as oriented cylinders.
    Molecule(Structure),
    /// 2D profile to sweep around the axis.
    Lathe(LatheProfile),
}

impl SceneKind {
    /// All scene kinds in catalog (display) order.
    pub const ALL: [Self; 8] = [
        Self::CrystalLattice,
        Self::OrganicMacro,
        Self::NanoTube,
        Self::Graphene,
        Self::Buckyball,
        Self::DnaHelix,
        Self::Rbc,
        Self::Caffeine,
    ];

    /// Run this scene's generator.
    ///
    /// Deterministic and side-effect-free: the same kind always produces an
    /// identical value, with no parameters, randomness, or external state.
    #[must_use]
    pub fn generate(self) -> SceneOutput {
        let output = match self {
            Self::CrystalLattice => SceneOutput::Molecule(crystal::generate()),
            Self::OrganicMacro => {
                SceneOutput::Molecule(macrocycle::generate())
            }
            Self::NanoTube => SceneOutput::Molecule(nanotube::generate()),
            Self::Graphene => SceneOutput::Molecule(graphene::generate()),
            Self::Buckyball => SceneOutput::Molecule(buckyball::generate()),
            Self::DnaHelix => SceneOutput::Molecule(dna::generate()),
            Self::Rbc => SceneOutput::Lathe(rbc::generate()),
            Self::Caffeine => SceneOutput::Molecule(caffeine::generate()),
        };
        match &output {
            SceneOutput::Molecule(s) => debug!(
                "generated {:?}: {} atoms, {} bonds",
                self,
                s.atoms.len(),
                s.bonds.len()
            ),
            SceneOutput::Lathe(p) => debug!(
                "generated {:?}: {} profile points",
                self,
                p.points.len()
            ),
        }
        output
    }

    /// Catalog metadata for this kind.
    ///
    /// `CATALOG` shares the ordering of [`Self::ALL`]; a test pins the two
    /// tables together.
    #[must_use]
    pub fn info(self) -> &'static SceneInfo {
        let idx = match self {
            Self::CrystalLattice => 0,
            Self::OrganicMacro => 1,
            Self::NanoTube => 2,
            Self::Graphene => 3,
            Self::Buckyball => 4,
            Self::DnaHelix => 5,
            Self::Rbc => 6,
            Self::Caffeine => 7,
        };
        &CATALOG[idx]
    }
}

/// UI-facing metadata for one scene: bilingual labels and the overall view
/// scale the renderer applies to the generated structure.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SceneInfo {
    /// The scene this entry describes.
    pub kind: SceneKind,
    /// Short English label.
    pub label: &'static str,
    /// Short Chinese label.
    pub label_cn: &'static str,
    /// One-line English description.
    pub description: &'static str,
    /// One-line Chinese description.
    pub description_cn: &'static str,
    /// Uniform scale hint for the rendering collaborator.
    pub view_scale: f32,
}

/// The scene catalog in display order.
pub const CATALOG: [SceneInfo; 8] = [
    SceneInfo {
        kind: SceneKind::CrystalLattice,
        label: "Lattice",
        label_cn: "晶格结构",
        description: "Crystalline solid state structure. Orderly arrangement.",
        description_cn: "晶体固态结构。展现原子的有序排列。",
        view_scale: 1.2,
    },
    SceneInfo {
        kind: SceneKind::OrganicMacro,
        label: "Macrocycle",
        label_cn: "大环分子",
        description: "Complex organometallic systems. Catalytic beauty.",
        description_cn: "复杂的有机金属系统。展现催化化学之美。",
        view_scale: 1.3,
    },
    SceneInfo {
        kind: SceneKind::NanoTube,
        label: "Nanotube",
        label_cn: "纳米管",
        description: "Carbon allotrope formations. High tensile strength.",
        description_cn: "碳同素异形体结构。展现极高的抗拉强度。",
        view_scale: 1.5,
    },
    SceneInfo {
        kind: SceneKind::Graphene,
        label: "Graphene",
        label_cn: "石墨烯",
        description: "2D Hexagonal Lattice. High conductivity.",
        description_cn: "二维蜂窝状晶格。极高的导电性与强度。",
        view_scale: 1.0,
    },
    SceneInfo {
        kind: SceneKind::Buckyball,
        label: "C60",
        label_cn: "巴基球",
        description: "Buckminsterfullerene. Spherical geometry.",
        description_cn: "富勒烯 C60。标志性的球形截角二十面体结构。",
        view_scale: 0.8,
    },
    SceneInfo {
        kind: SceneKind::DnaHelix,
        label: "DNA",
        label_cn: "DNA",
        description: "Biological double helix polymer. The code of life.",
        description_cn: "生物双螺旋聚合物。生命的密码。",
        view_scale: 1.2,
    },
    SceneInfo {
        kind: SceneKind::Rbc,
        label: "RBC",
        label_cn: "红细胞",
        description: "Red Blood Cell. Biconcave disc without nucleus.",
        description_cn: "红细胞。无细胞核的双凹圆盘状结构。",
        view_scale: 1.0,
    },
    SceneInfo {
        kind: SceneKind::Caffeine,
        label: "Caffeine",
        label_cn: "咖啡因",
        description: "1,3,7-Trimethylxanthine. Stimulating alkaloid.",
        description_cn: "1,3,7-三甲基黄嘌呤。一种兴奋性生物碱。",
        view_scale: 1.0,
    },
];

/// Serialize the catalog as JSON for the UI shell.
///
/// # Errors
///
/// Returns [`MolsceneError::Json`] if serialization fails (not expected for
/// the static table).
pub fn catalog_json() -> Result<String, MolsceneError> {
    serde_json::to_string_pretty(&CATALOG)
        .map_err(|e| MolsceneError::Json(e.to_string()))
}

/// Generate the JSON Schema describing the UI-exposed catalog entries.
#[must_use]
pub fn catalog_schema() -> schemars::Schema {
    schemars::schema_for!(SceneInfo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_kind_once() {
        assert_eq!(CATALOG.len(), SceneKind::ALL.len());
        for kind in SceneKind::ALL {
            assert_eq!(
                CATALOG.iter().filter(|i| i.kind == kind).count(),
                1,
                "{kind:?} must appear exactly once"
            );
        }
    }

    #[test]
    fn every_molecule_scene_validates() {
        for kind in SceneKind::ALL {
            match kind.generate() {
                SceneOutput::Molecule(s) => {
                    assert!(
                        s.validate().is_ok(),
                        "{kind:?} produced an invalid structure"
                    );
                    assert!(!s.atoms.is_empty());
                    assert!(!s.title.is_empty());
                }
                SceneOutput::Lathe(p) => {
                    assert_eq!(kind, SceneKind::Rbc);
                    assert!(!p.points.is_empty());
                }
            }
        }
    }

    #[test]
    fn info_lookup_matches_catalog_order() {
        for kind in SceneKind::ALL {
            assert_eq!(kind.info().kind, kind);
        }
    }

    #[test]
    fn generation_is_idempotent_for_all_kinds() {
        for kind in SceneKind::ALL {
            assert_eq!(kind.generate(), kind.generate(), "{kind:?}");
        }
    }

    #[test]
    fn kind_serializes_like_the_scene_identifier() {
        let json = serde_json::to_string(&SceneKind::CrystalLattice);
        assert_eq!(json.ok().as_deref(), Some("\"CRYSTAL_LATTICE\""));
        let back: Result<SceneKind, _> = serde_json::from_str("\"DNA_HELIX\"");
        assert_eq!(back.ok(), Some(SceneKind::DnaHelix));
    }

    #[test]
    fn catalog_json_is_well_formed() {
        let Ok(json) = catalog_json() else {
            unreachable!("static catalog always serializes");
        };
        let parsed: Result<serde_json::Value, _> = serde_json::from_str(&json);
        assert!(parsed.is_ok());
    }
}
