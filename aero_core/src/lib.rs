//! # aero_core - CFD Setup Calculation Engine
//!
//! `aero_core` provides the meshing and geometry calculators used to set up
//! external aerodynamic CFD cases: prism-layer (boundary-layer mesh)
//! thickness distributions, target-Y+ near-wall spacing, and NACA airfoil
//! surface coordinates. All inputs and outputs are JSON-serializable so the
//! host application (forms, wizards, CAD layers) can shuttle values in and
//! out without touching the numerics.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results;
//!   nothing is retained between calls
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings; no NaN or
//!   infinity ever escapes a public function
//! - **Thin Core**: Raw-text parsing, display formatting, and persistence
//!   belong to the caller
//!
//! ## Quick Start
//!
//! ```rust
//! use aero_core::calculations::prism_layer::{calculate, KnownParameter, PrismLayerInput};
//! use aero_core::equations::StretchingLaw;
//!
//! let input = PrismLayerInput {
//!     label: "Wing stack".to_string(),
//!     num_layers: 20,
//!     total_thickness: 0.05,
//!     law: StretchingLaw::GeometricProgression,
//!     known: KnownParameter::NearWallThickness(1.0e-5),
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("stretch factor: {:.3}", result.stretch_factor);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The calculator Input/Result types and entry points
//! - [`equations`] - The underlying closed-form and iterative relations
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;

// Re-export commonly used types at crate root for convenience
pub use calculations::airfoil::{generate_surface, validate_designation};
pub use calculations::{AirfoilInput, AirfoilSurface, CalculationItem};
pub use calculations::{KnownParameter, PrismLayerInput, PrismLayerResult};
pub use calculations::{WallSpacingInput, WallSpacingResult};
pub use equations::{SkinFrictionCorrelation, StretchingLaw};
pub use errors::{CalcError, CalcResult};
