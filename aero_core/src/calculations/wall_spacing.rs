//! # Wall Y+ Near-Wall Spacing
//!
//! Converts a target non-dimensional wall distance (Y+) into a physical
//! first-cell thickness using an empirical flat-plate skin-friction
//! correlation. Forward-only: flow properties in, Reynolds number and
//! near-wall thickness out.
//!
//! Use a consistent unit system for all inputs (e.g. MKS). The reported
//! thickness is the full first-cell thickness; since Y+ is referenced to
//! the cell-centroid distance, which sits at half the cell height, the
//! conversion carries a factor of 2:
//!
//! ```text
//! Re = rho * U * Lref / mu
//! Cf = correlation(Re)
//! d1 = 2 * y_plus * mu / (rho * U * sqrt(Cf / 2))
//! ```
//!
//! ## Example
//!
//! ```rust
//! use aero_core::calculations::wall_spacing::{calculate, WallSpacingInput};
//!
//! // air at 25 C over a 1 m plate, targeting Y+ = 1
//! let input = WallSpacingInput::default();
//! let result = calculate(&input).unwrap();
//!
//! assert!(result.reynolds_number > 6.0e4);
//! assert!(result.near_wall_thickness > 0.0);
//! ```
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "Flat plate Y+ check",
//!   "velocity": 1.0,
//!   "density": 1.184,
//!   "dynamic_viscosity": 1.885e-5,
//!   "reference_length": 1.0,
//!   "target_y_plus": 1.0,
//!   "correlation": "Schlichting"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::SkinFrictionCorrelation;
use crate::errors::{CalcError, CalcResult};

/// Input parameters for the wall-spacing calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSpacingInput {
    /// User label for this calculation
    pub label: String,

    /// Freestream velocity
    pub velocity: f64,

    /// Fluid density
    pub density: f64,

    /// Dynamic viscosity
    pub dynamic_viscosity: f64,

    /// Reference length for the Reynolds number
    pub reference_length: f64,

    /// Target non-dimensional wall distance
    pub target_y_plus: f64,

    /// Skin-friction correlation to evaluate
    pub correlation: SkinFrictionCorrelation,
}

impl Default for WallSpacingInput {
    /// The values the host tool seeds its form with: air at 25 C, unit
    /// velocity and length, Y+ = 1, Schlichting correlation.
    fn default() -> Self {
        WallSpacingInput {
            label: String::new(),
            velocity: 1.0,
            density: 1.184,
            dynamic_viscosity: 1.885e-5,
            reference_length: 1.0,
            target_y_plus: 1.0,
            correlation: SkinFrictionCorrelation::Schlichting,
        }
    }
}

impl WallSpacingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("velocity", self.velocity),
            ("density", self.density),
            ("dynamic_viscosity", self.dynamic_viscosity),
            ("reference_length", self.reference_length),
            ("target_y_plus", self.target_y_plus),
        ];
        for (name, value) in fields {
            if !(value > 0.0) {
                return Err(CalcError::invalid_input(
                    name,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Reynolds number `Re = rho * U * Lref / mu`.
    pub fn reynolds_number(&self) -> f64 {
        self.density * self.velocity * self.reference_length / self.dynamic_viscosity
    }
}

/// Results from the wall-spacing calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "reynolds_number": 6.281e4,
///   "skin_friction_coefficient": 4.43e-3,
///   "near_wall_thickness": 6.77e-4
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSpacingResult {
    /// Freestream Reynolds number
    pub reynolds_number: f64,
    /// Skin-friction coefficient from the selected correlation
    pub skin_friction_coefficient: f64,
    /// Full first-cell thickness achieving the target Y+
    pub near_wall_thickness: f64,
}

/// Compute the near-wall cell thickness for a target Y+.
///
/// # Arguments
///
/// * `input` - Flow properties, target Y+, and correlation selection
///
/// # Returns
///
/// * `Ok(WallSpacingResult)` - Re, Cf, and the first-cell thickness
/// * `Err(CalcError)` - Non-positive input, or a Reynolds number outside
///   the selected correlation's domain
pub fn calculate(input: &WallSpacingInput) -> CalcResult<WallSpacingResult> {
    input.validate()?;

    let re = input.reynolds_number();
    let cf = input.correlation.cf(re)?;

    // friction velocity over freestream velocity is sqrt(Cf/2); the leading 2
    // converts the centroid wall distance into a full cell thickness
    let near_wall = 2.0 * input.target_y_plus * input.dynamic_viscosity
        / (input.density * input.velocity * (0.5 * cf).sqrt());

    if !near_wall.is_finite() {
        return Err(CalcError::domain_error(
            "wall_spacing",
            "near-wall thickness is not finite for these inputs",
        ));
    }

    Ok(WallSpacingResult {
        reynolds_number: re,
        skin_friction_coefficient: cf,
        near_wall_thickness: near_wall,
    })
}
