//! # NACA Airfoil Surface Generation
//!
//! Turns a 4- or 5-digit NACA designation into an ordered surface
//! coordinate loop suitable for a spline/sketch consumer: upper surface
//! from trailing edge to leading edge, then lower surface from leading
//! edge back to trailing edge, with the two trailing-edge end points
//! available for a blunt closure segment.
//!
//! Validation and generation are deliberately two-phase. Validation only
//! checks the shape of the string (any 4-character designation passes; a
//! 5-character designation must start with one of the nine published
//! camber-family codes). Digit content is checked at generation time,
//! where a non-digit raises a parse error.
//!
//! ## Example
//!
//! ```rust
//! use aero_core::calculations::airfoil::{generate_surface, validate_designation};
//!
//! assert!(validate_designation("0012"));
//! assert!(validate_designation("23012"));
//! assert!(!validate_designation("99999"));
//!
//! let surface = generate_surface("0012").unwrap();
//! assert_eq!(surface.points.len(), 61);
//! assert_eq!(surface.trailing_edge_upper().x, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::airfoil::{camber_family, naca4_camber, naca5_camber, thickness_distribution};
use crate::errors::{CalcError, CalcResult};

/// Chordwise stations per surface
const STATIONS_PER_SURFACE: usize = 31;

/// Leading 3-digit codes of the nine published 5-digit camber families
const FIVE_SERIES_CODES: [&str; 9] = [
    "210", "220", "230", "240", "250", "221", "231", "241", "251",
];

/// A single surface coordinate in chord-normalized units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

/// Input parameters for the airfoil generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirfoilInput {
    /// User label for this calculation
    pub label: String,

    /// 4- or 5-digit NACA designation (e.g. "0012", "23012")
    pub designation: String,
}

impl Default for AirfoilInput {
    fn default() -> Self {
        AirfoilInput {
            label: String::new(),
            designation: "0012".to_string(),
        }
    }
}

/// An ordered airfoil surface loop.
///
/// The loop runs upper trailing edge -> leading edge -> lower trailing
/// edge at 31 stations per surface, sharing the leading-edge point, for
/// 61 points total. The first and last points are the upper and lower
/// trailing-edge ends; the thickness distribution leaves a blunt trailing
/// edge, so a consumer should close the loop with a segment between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirfoilSurface {
    /// The designation this surface was generated from
    pub designation: String,
    /// The coordinate loop, chord-normalized
    pub points: Vec<SurfacePoint>,
}

impl AirfoilSurface {
    /// Upper trailing-edge end point (start of the loop).
    pub fn trailing_edge_upper(&self) -> SurfacePoint {
        self.points[0]
    }

    /// Lower trailing-edge end point (end of the loop).
    pub fn trailing_edge_lower(&self) -> SurfacePoint {
        self.points[self.points.len() - 1]
    }
}

/// Check whether a designation names a supported airfoil.
///
/// Any length-4 string passes (digit semantics are deferred to generation
/// time); a length-5 string passes only when its leading three characters
/// are one of the nine published camber-family codes. Everything else is
/// invalid.
pub fn validate_designation(designation: &str) -> bool {
    match designation.len() {
        4 => true,
        5 => designation
            .get(0..3)
            .is_some_and(|code| FIVE_SERIES_CODES.contains(&code)),
        _ => false,
    }
}

/// Generate the surface coordinate loop for a designation.
///
/// # Returns
///
/// * `Ok(AirfoilSurface)` - 61 ordered points tracing the closed loop
/// * `Err(CalcError)` - Unsupported length, non-digit characters, or a
///   camber/reflex index pair outside the published families
pub fn generate_surface(designation: &str) -> CalcResult<AirfoilSurface> {
    let stations = chordwise_stations();

    let point_at: Box<dyn Fn(f64, bool) -> CalcResult<SurfacePoint>> = match designation.len() {
        4 => {
            let m = f64::from(digit_at(designation, 0)?) / 100.0;
            let p = f64::from(digit_at(designation, 1)?) / 10.0;
            let t = parse_thickness(designation, 2)?;
            Box::new(move |x, upper| {
                let (yc, dyc_dx) = naca4_camber(m, p, x);
                Ok(offset_from_camber(x, thickness_distribution(t, x), yc, dyc_dx, upper))
            })
        }
        5 => {
            let camber_index = digit_at(designation, 1)?;
            let reflex_index = digit_at(designation, 2)?;
            let family = camber_family(camber_index, reflex_index).ok_or_else(|| {
                CalcError::domain_error(
                    "naca5_camber_family",
                    format!(
                        "no published camber family for camber index {} with reflex index {}",
                        camber_index, reflex_index
                    ),
                )
            })?;
            let p = f64::from(camber_index) * 0.05;
            let t = parse_thickness(designation, 3)?;
            Box::new(move |x, upper| {
                let (yc, dyc_dx) = naca5_camber(family, p, x);
                Ok(offset_from_camber(x, thickness_distribution(t, x), yc, dyc_dx, upper))
            })
        }
        _ => {
            return Err(CalcError::invalid_input(
                "designation",
                designation.to_string(),
                "Designation must be 4 or 5 digits",
            ));
        }
    };

    // upper surface, trailing edge to leading edge
    let mut points = Vec::with_capacity(2 * STATIONS_PER_SURFACE - 1);
    for &x in stations.iter().rev() {
        points.push(point_at(x, true)?);
    }
    // lower surface, leading edge to trailing edge, skipping the shared
    // leading-edge point
    for &x in stations.iter().skip(1) {
        points.push(point_at(x, false)?);
    }

    Ok(AirfoilSurface {
        designation: designation.to_string(),
        points,
    })
}

/// Generate a surface from an [`AirfoilInput`].
pub fn calculate(input: &AirfoilInput) -> CalcResult<AirfoilSurface> {
    generate_surface(&input.designation)
}

/// The 31 chordwise stations, clustered toward both edges:
/// `x(t) = -0.01898 t + 0.73302 t^2 - 0.21316 t^3` for the forward half,
/// mirrored about the fixed midpoint `x = 0.5`.
fn chordwise_stations() -> [f64; STATIONS_PER_SURFACE] {
    let mut x = [0.0; STATIONS_PER_SURFACE];
    for i in 0..15 {
        let t = i as f64 / 15.0;
        x[i] = -0.01898 * t + 0.73302 * t * t - 0.21316 * t * t * t;
        x[30 - i] = 1.0 - x[i];
    }
    x[15] = 0.5;
    x
}

/// Offset a camber-line point along the local normal.
fn offset_from_camber(x: f64, yt: f64, yc: f64, dyc_dx: f64, upper: bool) -> SurfacePoint {
    let theta = dyc_dx.atan();
    if upper {
        SurfacePoint {
            x: x - yt * theta.sin(),
            y: yc + yt * theta.cos(),
        }
    } else {
        SurfacePoint {
            x: x + yt * theta.sin(),
            y: yc - yt * theta.cos(),
        }
    }
}

/// Numeric value of the digit at a character index.
fn digit_at(designation: &str, index: usize) -> CalcResult<u32> {
    designation
        .chars()
        .nth(index)
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| {
            CalcError::parse_error(
                designation.to_string(),
                format!("expected a digit at position {}", index + 1),
            )
        })
}

/// Thickness fraction from the trailing two-digit pair starting at `index`.
fn parse_thickness(designation: &str, index: usize) -> CalcResult<f64> {
    let tens = digit_at(designation, index)?;
    let ones = digit_at(designation, index + 1)?;
    Ok(f64::from(tens * 10 + ones) / 100.0)
}
