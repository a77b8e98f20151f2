//! # Prism-Layer Thickness Distribution
//!
//! Derives the full set of prism-layer parameters from whichever one the
//! user knows. A boundary-layer mesh stack is characterized by five
//! quantities - layer count, total thickness, stretch parameter, near-wall
//! thickness, and last/first thickness ratio - of which the count and total
//! are always given and exactly one of the remaining three is the "known"
//! input. The other two are computed under the selected stretching law.
//!
//! Use a consistent length unit for the total and near-wall thicknesses;
//! all other quantities are dimensionless.
//!
//! ## Example
//!
//! ```rust
//! use aero_core::calculations::prism_layer::{calculate, KnownParameter, PrismLayerInput};
//! use aero_core::equations::StretchingLaw;
//!
//! let input = PrismLayerInput {
//!     label: "Wing prism stack".to_string(),
//!     num_layers: 20,
//!     total_thickness: 0.05,
//!     law: StretchingLaw::GeometricProgression,
//!     known: KnownParameter::NearWallThickness(1.0e-5),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.stretch_factor > 1.0);
//! assert!(result.near_wall_thickness <= input.total_thickness);
//! ```
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "Wing prism stack",
//!   "num_layers": 20,
//!   "total_thickness": 0.05,
//!   "law": "GeometricProgression",
//!   "known": { "mode": "NearWallThickness", "value": 1.0e-5 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::StretchingLaw;
use crate::errors::{CalcError, CalcResult};

/// The single distribution parameter supplied by the user; the other two
/// are outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value")]
pub enum KnownParameter {
    /// Growth factor (GP) or clustering strength (HT); must exceed 1
    StretchFactor(f64),
    /// First-layer thickness, in the same unit as the total thickness
    NearWallThickness(f64),
    /// Last-layer / first-layer thickness ratio; at least 1
    ThicknessRatio(f64),
}

impl KnownParameter {
    /// Name of the distribution mode, matching the host UI selector.
    pub fn mode_name(self) -> &'static str {
        match self {
            KnownParameter::StretchFactor(_) => "Stretch Factor",
            KnownParameter::NearWallThickness(_) => "Wall Thickness",
            KnownParameter::ThicknessRatio(_) => "Thickness Ratio",
        }
    }
}

/// Input parameters for the prism-layer calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrismLayerInput {
    /// User label for this calculation (e.g. "Fuselage prism stack")
    pub label: String,

    /// Number of prism layers (at least 2)
    pub num_layers: u32,

    /// Total stack thickness, in any consistent length unit
    pub total_thickness: f64,

    /// Layer-growth law
    pub law: StretchingLaw,

    /// The one distribution parameter being specified
    pub known: KnownParameter,
}

impl Default for PrismLayerInput {
    /// The values the host tool seeds its form with.
    fn default() -> Self {
        PrismLayerInput {
            label: String::new(),
            num_layers: 2,
            total_thickness: 1.0,
            law: StretchingLaw::GeometricProgression,
            known: KnownParameter::StretchFactor(1.5),
        }
    }
}

impl PrismLayerInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.num_layers < 2 {
            return Err(CalcError::invalid_input(
                "num_layers",
                self.num_layers.to_string(),
                "At least 2 layers are required",
            ));
        }
        if self.total_thickness <= 0.0 {
            return Err(CalcError::invalid_input(
                "total_thickness",
                self.total_thickness.to_string(),
                "Total thickness must be positive",
            ));
        }
        match self.known {
            KnownParameter::StretchFactor(s) => {
                if s <= 1.0 {
                    return Err(CalcError::invalid_input(
                        "stretch_factor",
                        s.to_string(),
                        "Stretch factor must exceed 1",
                    ));
                }
            }
            KnownParameter::NearWallThickness(d1) => {
                if d1 <= 0.0 || d1 > self.total_thickness {
                    return Err(CalcError::invalid_input(
                        "near_wall_thickness",
                        d1.to_string(),
                        "Near-wall thickness must be positive and no larger than the total thickness",
                    ));
                }
            }
            KnownParameter::ThicknessRatio(r) => {
                if r < 1.0 {
                    return Err(CalcError::invalid_input(
                        "thickness_ratio",
                        r.to_string(),
                        "Thickness ratio must be at least 1",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Results from the prism-layer calculator: the complete distribution, with
/// the known input echoed alongside the two derived quantities.
///
/// ## JSON Example
///
/// ```json
/// {
///   "stretch_factor": 1.337,
///   "near_wall_thickness": 0.001,
///   "thickness_ratio": 250.9
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrismLayerResult {
    /// Stretch parameter of the active law
    pub stretch_factor: f64,
    /// First-layer thickness, same unit as the total thickness
    pub near_wall_thickness: f64,
    /// Last-layer / first-layer thickness ratio
    pub thickness_ratio: f64,
}

/// Derive the two unknown distribution parameters from the known one.
///
/// This is a pure function of its input; every law/mode combination is
/// dispatched through an exhaustive match.
///
/// # Arguments
///
/// * `input` - Layer count, total thickness, law, and the known parameter
///
/// # Returns
///
/// * `Ok(PrismLayerResult)` - The complete distribution
/// * `Err(CalcError)` - Structured error: invalid input, unreachable
///   parameter combination, or solver non-convergence
pub fn calculate(input: &PrismLayerInput) -> CalcResult<PrismLayerResult> {
    input.validate()?;

    let n = input.num_layers;
    let total = input.total_thickness;
    let law = input.law;

    let (stretch_factor, near_wall_thickness, thickness_ratio) = match input.known {
        KnownParameter::StretchFactor(s) => {
            let near_wall = law.near_wall_from_stretch(n, total, s)?;
            let ratio = law.ratio_from_stretch(n, s)?;
            (s, near_wall, ratio)
        }
        KnownParameter::NearWallThickness(d1) => {
            let stretch = law.stretch_from_near_wall(n, total, d1)?;
            let ratio = law.ratio_from_stretch(n, stretch)?;
            (stretch, d1, ratio)
        }
        KnownParameter::ThicknessRatio(r) => {
            let stretch = law.stretch_from_ratio(n, r)?;
            let near_wall = law.near_wall_from_stretch(n, total, stretch)?;
            (stretch, near_wall, r)
        }
    };

    Ok(PrismLayerResult {
        stretch_factor,
        near_wall_thickness,
        thickness_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gp_input(known: KnownParameter) -> PrismLayerInput {
        PrismLayerInput {
            label: "Test stack".to_string(),
            num_layers: 20,
            total_thickness: 1.0,
            law: StretchingLaw::GeometricProgression,
            known,
        }
    }

    fn ht_input(known: KnownParameter) -> PrismLayerInput {
        PrismLayerInput {
            law: StretchingLaw::HyperbolicTangent,
            ..gp_input(known)
        }
    }

    #[test]
    fn test_gp_near_wall_known_scenario() {
        // N=20, T=1.0, d1=0.001 must give s > 1 that reproduces d1
        let input = gp_input(KnownParameter::NearWallThickness(0.001));
        let result = calculate(&input).unwrap();

        assert!(result.stretch_factor > 1.0);
        assert!((result.near_wall_thickness - 0.001).abs() < 1e-12);

        let rederived = StretchingLaw::GeometricProgression
            .near_wall_from_stretch(20, 1.0, result.stretch_factor)
            .unwrap();
        assert!(
            (rederived - 0.001).abs() / 0.001 < 1e-4,
            "rederived d1 = {}",
            rederived
        );
    }

    #[test]
    fn test_gp_stretch_known() {
        let input = gp_input(KnownParameter::StretchFactor(1.2));
        let result = calculate(&input).unwrap();

        // R = 1.2^19
        assert!((result.thickness_ratio - 1.2f64.powi(19)).abs() < 1e-9);
        assert!(result.near_wall_thickness > 0.0);
        assert!(result.near_wall_thickness <= input.total_thickness);
    }

    #[test]
    fn test_gp_ratio_known() {
        let input = gp_input(KnownParameter::ThicknessRatio(32.0));
        let result = calculate(&input).unwrap();

        // s = 32^(1/19)
        assert!((result.stretch_factor - 32f64.powf(1.0 / 19.0)).abs() < 1e-12);
        assert!(result.near_wall_thickness > 0.0);
    }

    #[test]
    fn test_ht_stretch_known() {
        let input = PrismLayerInput {
            num_layers: 10,
            ..ht_input(KnownParameter::StretchFactor(2.0))
        };
        let result = calculate(&input).unwrap();

        assert!(result.near_wall_thickness > 0.0);
        assert!(result.near_wall_thickness < 0.1); // below uniform spacing
        assert!(result.thickness_ratio > 1.0);
    }

    #[test]
    fn test_ht_near_wall_known_round_trip() {
        let forward = calculate(&PrismLayerInput {
            num_layers: 10,
            ..ht_input(KnownParameter::StretchFactor(2.0))
        })
        .unwrap();

        let inverse = calculate(&PrismLayerInput {
            num_layers: 10,
            ..ht_input(KnownParameter::NearWallThickness(forward.near_wall_thickness))
        })
        .unwrap();

        assert!(
            (inverse.stretch_factor - 2.0).abs() < 1e-4,
            "recovered F = {}",
            inverse.stretch_factor
        );
    }

    #[test]
    fn test_ht_ratio_known_round_trip() {
        let forward = calculate(&PrismLayerInput {
            num_layers: 10,
            ..ht_input(KnownParameter::StretchFactor(2.0))
        })
        .unwrap();

        let inverse = calculate(&PrismLayerInput {
            num_layers: 10,
            ..ht_input(KnownParameter::ThicknessRatio(forward.thickness_ratio))
        })
        .unwrap();

        assert!(
            (inverse.stretch_factor - 2.0).abs() < 1e-4,
            "recovered F = {}",
            inverse.stretch_factor
        );
        assert!(
            (inverse.near_wall_thickness - forward.near_wall_thickness).abs() < 1e-5
        );
    }

    #[test]
    fn test_single_layer_rejected() {
        let input = PrismLayerInput {
            num_layers: 1,
            ..gp_input(KnownParameter::ThicknessRatio(2.0))
        };
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_non_positive_total_thickness_rejected() {
        let input = PrismLayerInput {
            total_thickness: 0.0,
            ..gp_input(KnownParameter::StretchFactor(1.5))
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_stretch_at_most_one_rejected() {
        let input = gp_input(KnownParameter::StretchFactor(1.0));
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_near_wall_exceeding_total_rejected() {
        let input = gp_input(KnownParameter::NearWallThickness(1.5));
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_ratio_below_one_rejected() {
        let input = gp_input(KnownParameter::ThicknessRatio(0.5));
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_default_matches_seeded_form() {
        let input = PrismLayerInput::default();
        assert_eq!(input.num_layers, 2);
        assert_eq!(input.total_thickness, 1.0);
        assert_eq!(input.known, KnownParameter::StretchFactor(1.5));

        let result = calculate(&input).unwrap();
        // N=2, s=1.5: d1 = T*(0.5)/(1.25) = 0.4, R = 1.5
        assert!((result.near_wall_thickness - 0.4).abs() < 1e-12);
        assert!((result.thickness_ratio - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(
            KnownParameter::NearWallThickness(0.1).mode_name(),
            "Wall Thickness"
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = gp_input(KnownParameter::NearWallThickness(0.001));
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: PrismLayerInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.known, roundtrip.known);
        assert_eq!(input.num_layers, roundtrip.num_layers);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("stretch_factor"));
        assert!(json.contains("thickness_ratio"));
    }
}
