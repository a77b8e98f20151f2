//! # Engineering Formulas
//!
//! Pure closed-form and iterative relations underlying the calculators.
//! Everything here is a function of its arguments only; validation of
//! user-facing inputs happens in [`crate::calculations`], while these
//! routines guard only against mathematically undefined evaluations.
//!
//! ## Modules
//!
//! - [`stretching`] - Prism-layer growth laws (GP and tanh), forward and inverse
//! - [`skin_friction`] - Empirical flat-plate Cf(Re) correlations
//! - [`airfoil`] - NACA 4/5-digit thickness and camber-line closed forms

pub mod airfoil;
pub mod skin_friction;
pub mod stretching;

pub use skin_friction::SkinFrictionCorrelation;
pub use stretching::StretchingLaw;
