//! # Setup Calculators
//!
//! This module contains the CFD setup calculators. Each calculator follows
//! the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` / surface type - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<_, CalcError>` - Pure calculation function
//!
//! All calculators are stateless and reentrant; every call is a pure
//! function of its arguments with no shared state, so they are safe to
//! invoke concurrently without coordination.
//!
//! ## Available Calculators
//!
//! - [`prism_layer`] - Boundary-layer thickness-distribution solver
//! - [`wall_spacing`] - Target-Y+ near-wall cell thickness
//! - [`airfoil`] - NACA 4/5-digit surface coordinate generation

pub mod airfoil;
pub mod prism_layer;
pub mod wall_spacing;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use airfoil::{AirfoilInput, AirfoilSurface};
pub use prism_layer::{KnownParameter, PrismLayerInput, PrismLayerResult};
pub use wall_spacing::{WallSpacingInput, WallSpacingResult};

/// Enum wrapper for all calculator input types.
///
/// This allows a host application to store heterogeneous calculator
/// invocations in a single collection while maintaining type safety and
/// clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Prism-layer thickness distribution
    PrismLayer(PrismLayerInput),
    /// Wall Y+ near-wall spacing
    WallSpacing(WallSpacingInput),
    /// NACA airfoil surface generation
    Airfoil(AirfoilInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::PrismLayer(p) => &p.label,
            CalculationItem::WallSpacing(w) => &w.label,
            CalculationItem::Airfoil(a) => &a.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::PrismLayer(_) => "PrismLayer",
            CalculationItem::WallSpacing(_) => "WallSpacing",
            CalculationItem::Airfoil(_) => "Airfoil",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accessors() {
        let item = CalculationItem::WallSpacing(WallSpacingInput {
            label: "Y+ check".to_string(),
            ..WallSpacingInput::default()
        });
        assert_eq!(item.label(), "Y+ check");
        assert_eq!(item.calc_type(), "WallSpacing");
    }

    #[test]
    fn test_item_serialization_is_tagged() {
        let item = CalculationItem::Airfoil(AirfoilInput::default());
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"Airfoil\""));

        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.calc_type(), "Airfoil");
    }
}
