//! # Prism-Layer Stretching Laws
//!
//! Forward and inverse relationships for the two supported 1-D layer-growth
//! laws. Both laws relate the same five quantities; given any one of
//! {stretch parameter, near-wall thickness, thickness ratio} the other two
//! follow.
//!
//! ## Notation
//!
//! - `N` = Number of prism layers (N >= 2)
//! - `T` = Total prism-layer stack thickness
//! - `d1` = First-layer (near-wall) thickness
//! - `s` = Stretch parameter (growth factor for GP, tanh clustering
//!   strength for HT)
//! - `R` = Thickness ratio, last-layer thickness / first-layer thickness
//!
//! ## Geometric Progression (GP)
//!
//! Layer `i` has thickness `d1 * s^(i-1)`, so:
//!
//! ```text
//! d1 = T * (s - 1) / (s^N - 1)
//! R  = s^(N-1)
//! ```
//!
//! `s` from `R` is closed-form; `s` from `d1` needs a fixed-point iteration.
//!
//! ## Hyperbolic Tangent (HT)
//!
//! Normalized cumulative position `xi = i/N` is mapped through
//!
//! ```text
//! s(xi) = 1 + tanh(F * (xi - 1)) / tanh(F)
//! ```
//!
//! giving `d1 = T * s(1/N)` and `R = (1 - s(1 - 1/N)) / s(1/N)`. Both
//! inversions are iterative; the ratio inversion uses a secant update with
//! adaptive under-relaxation because the residual is poorly conditioned for
//! extreme targets.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Iteration cap for the GP near-wall inversion
const GP_MAX_ITERATIONS: usize = 20;

/// Convergence tolerance on the GP stretch iterate
const GP_TOLERANCE: f64 = 1e-5;

/// Fixed iteration count for both HT inversions.
///
/// The HT inverse paths run the full count without an early-exit tolerance
/// check; only the finiteness of the final iterate is verified.
const HT_ITERATIONS: usize = 50;

/// The functional form of the layer-thickness distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StretchingLaw {
    /// Constant growth factor between consecutive layers
    GeometricProgression,
    /// Layer interfaces clustered toward the wall via a tanh mapping
    HyperbolicTangent,
}

impl StretchingLaw {
    /// Near-wall thickness `d1` from the stretch parameter.
    pub fn near_wall_from_stretch(self, n: u32, total: f64, stretch: f64) -> CalcResult<f64> {
        match self {
            StretchingLaw::GeometricProgression => gp_near_wall_from_stretch(n, total, stretch),
            StretchingLaw::HyperbolicTangent => ht_near_wall_from_stretch(n, total, stretch),
        }
    }

    /// Stretch parameter from the near-wall thickness `d1` (iterative).
    pub fn stretch_from_near_wall(self, n: u32, total: f64, near_wall: f64) -> CalcResult<f64> {
        match self {
            StretchingLaw::GeometricProgression => gp_stretch_from_near_wall(n, total, near_wall),
            StretchingLaw::HyperbolicTangent => ht_stretch_from_near_wall(n, total, near_wall),
        }
    }

    /// Stretch parameter from the thickness ratio `R`.
    pub fn stretch_from_ratio(self, n: u32, ratio: f64) -> CalcResult<f64> {
        match self {
            StretchingLaw::GeometricProgression => gp_stretch_from_ratio(n, ratio),
            StretchingLaw::HyperbolicTangent => ht_stretch_from_ratio(n, ratio),
        }
    }

    /// Thickness ratio `R` from the stretch parameter.
    pub fn ratio_from_stretch(self, n: u32, stretch: f64) -> CalcResult<f64> {
        match self {
            StretchingLaw::GeometricProgression => gp_ratio_from_stretch(n, stretch),
            StretchingLaw::HyperbolicTangent => ht_ratio_from_stretch(n, stretch),
        }
    }

    /// Human-readable name matching the selector the host UI presents.
    pub fn name(self) -> &'static str {
        match self {
            StretchingLaw::GeometricProgression => "Geometric Progression",
            StretchingLaw::HyperbolicTangent => "Hyperbolic Tangent",
        }
    }
}

// =============================================================================
// GEOMETRIC PROGRESSION
// =============================================================================

/// GP forward relation: `d1 = T * (s - 1) / (s^N - 1)`
fn gp_near_wall_from_stretch(n: u32, total: f64, stretch: f64) -> CalcResult<f64> {
    let nd = f64::from(n);
    let d1 = total * (stretch - 1.0) / (stretch.powf(nd) - 1.0);
    ensure_finite(d1, "gp_near_wall_from_stretch", "stretch parameter too close to 1")
}

/// GP inverse via fixed-point iteration on
/// `s <- ((T/d1) * (s - 1) + 1)^(1/N)`, seeded at `s = 1.5`.
///
/// The fixed point is bounded and the map contracts for physical inputs;
/// hitting the cap without converging is reported as a solver failure
/// rather than returning the unconverged iterate.
///
/// The contraction rate worsens as `N` shrinks (approaching `(s+1)/(2s)`
/// at `N = 2`), so very small layer counts with a moderate stretch can
/// exhaust the cap: `N = 2, T = 1, d1 = 1/3` (the `s = 2` fixed point)
/// reports NonConvergence instead of the root.
fn gp_stretch_from_near_wall(n: u32, total: f64, near_wall: f64) -> CalcResult<f64> {
    let exponent = 1.0 / f64::from(n);
    let spread = total / near_wall;
    let mut stretch = 1.5;
    for _ in 0..GP_MAX_ITERATIONS {
        let base = spread * (stretch - 1.0) + 1.0;
        if base <= 0.0 {
            return Err(CalcError::domain_error(
                "gp_stretch_from_near_wall",
                "iterate left the domain of the fixed-point map",
            ));
        }
        let next = base.powf(exponent);
        let delta = (next - stretch).abs();
        stretch = next;
        if delta < GP_TOLERANCE {
            return Ok(stretch);
        }
    }
    Err(CalcError::non_convergence(
        "gp_stretch_from_near_wall",
        GP_MAX_ITERATIONS,
    ))
}

/// GP ratio inverse (closed form): `s = R^(1/(N-1))`
///
/// Only defined for `N > 1`; a single layer has no last/first ratio.
fn gp_stretch_from_ratio(n: u32, ratio: f64) -> CalcResult<f64> {
    if n < 2 {
        return Err(CalcError::invalid_input(
            "num_layers",
            n.to_string(),
            "Ratio inversion requires at least 2 layers",
        ));
    }
    if ratio <= 0.0 {
        return Err(CalcError::domain_error(
            "gp_stretch_from_ratio",
            "thickness ratio must be positive",
        ));
    }
    Ok((ratio.ln() / (f64::from(n) - 1.0)).exp())
}

/// GP ratio forward (closed form): `R = s^(N-1)`
fn gp_ratio_from_stretch(n: u32, stretch: f64) -> CalcResult<f64> {
    ensure_finite(
        stretch.powf(f64::from(n) - 1.0),
        "gp_ratio_from_stretch",
        "stretch parameter produced a non-finite ratio",
    )
}

// =============================================================================
// HYPERBOLIC TANGENT
// =============================================================================

/// HT forward relation: `d1 = T * (1 + tanh(F * (1/N - 1)) / tanh(F))`
fn ht_near_wall_from_stretch(n: u32, total: f64, stretch: f64) -> CalcResult<f64> {
    let fac = 1.0 / f64::from(n) - 1.0;
    let denom = stretch.tanh();
    if denom == 0.0 {
        return Err(CalcError::domain_error(
            "ht_near_wall_from_stretch",
            "stretch parameter must be non-zero",
        ));
    }
    ensure_finite(
        total * (1.0 + (stretch * fac).tanh() / denom),
        "ht_near_wall_from_stretch",
        "forward relation produced a non-finite thickness",
    )
}

/// HT inverse via fixed-point iteration on
/// `F <- atanh((d1/T - 1) * tanh(F)) / (1/N - 1)`, seeded at `F = 1.0`.
///
/// Runs the full fixed iteration count with no early exit; a final iterate
/// that left the atanh domain or went non-finite is reported as an error
/// rather than returned.
fn ht_stretch_from_near_wall(n: u32, total: f64, near_wall: f64) -> CalcResult<f64> {
    let fac = 1.0 / f64::from(n) - 1.0;
    let s1 = near_wall / total;
    let mut stretch: f64 = 1.0;
    for _ in 0..HT_ITERATIONS {
        let arg = (s1 - 1.0) * stretch.tanh();
        if arg.abs() >= 1.0 {
            return Err(CalcError::domain_error(
                "ht_stretch_from_near_wall",
                "atanh argument left (-1, 1); thickness combination is unreachable",
            ));
        }
        stretch = arg.atanh() / fac;
    }
    if !stretch.is_finite() {
        return Err(CalcError::non_convergence(
            "ht_stretch_from_near_wall",
            HT_ITERATIONS,
        ));
    }
    Ok(stretch)
}

/// HT ratio inverse via secant iteration with adaptive under-relaxation.
///
/// Residual `G(F) = ratio_from_stretch(F) - R`; the relaxation factor starts
/// at 0.05 and grows by 0.01 per iteration, which keeps the early steps small
/// when the starting bracket is far from the root.
fn ht_stretch_from_ratio(n: u32, ratio: f64) -> CalcResult<f64> {
    let mut omega = 0.05;
    let mut f_old = 1.0;
    let mut f_new = 2.0;
    let mut g_old = ht_ratio_from_stretch(n, f_old)? - ratio;
    let mut g_new = ht_ratio_from_stretch(n, f_new)? - ratio;
    for _ in 0..HT_ITERATIONS {
        let slope = (f_new - f_old) / (g_new - g_old);
        if !slope.is_finite() {
            // residual has flattened out; the iterate cannot improve further
            break;
        }
        f_old = f_new;
        g_old = g_new;
        f_new += slope * (0.0 - g_new) * omega;
        g_new = ht_ratio_from_stretch(n, f_new)? - ratio;
        omega += 0.01;
    }
    if !f_new.is_finite() {
        return Err(CalcError::non_convergence("ht_stretch_from_ratio", HT_ITERATIONS));
    }
    Ok(f_new)
}

/// HT ratio forward: `R = (1 - s(1 - 1/N)) / s(1/N)` with
/// `s(xi) = 1 + tanh(F * (xi - 1)) / tanh(F)`.
fn ht_ratio_from_stretch(n: u32, stretch: f64) -> CalcResult<f64> {
    let nd = f64::from(n);
    let denom = stretch.tanh();
    if denom == 0.0 {
        return Err(CalcError::domain_error(
            "ht_ratio_from_stretch",
            "stretch parameter must be non-zero",
        ));
    }
    let s1 = 1.0 + (stretch * (1.0 / nd - 1.0)).tanh() / denom;
    let s_last = 1.0 + (-stretch / nd).tanh() / denom;
    ensure_finite(
        (1.0 - s_last) / s1,
        "ht_ratio_from_stretch",
        "forward relation produced a non-finite ratio",
    )
}

/// Convert a non-finite result into a DomainError instead of leaking it.
fn ensure_finite(value: f64, operation: &str, reason: &str) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::domain_error(operation, reason))
    }
}
