//! # NACA Airfoil Closed Forms
//!
//! Thickness-distribution and mean-camber-line formulas for the NACA 4-digit
//! and 5-digit families.
//!
//! ## Notation
//!
//! - `x` = Chordwise station, 0 (leading edge) to 1 (trailing edge)
//! - `t` = Maximum thickness as a fraction of chord
//! - `m` = Maximum camber (4-digit) or camber-family constant (5-digit)
//! - `p` = Chordwise position of maximum camber
//! - `yt` = Half-thickness at `x`
//! - `yc` = Camber-line ordinate at `x`
//!
//! ## References
//!
//! - NACA Report 460 (4-digit series)
//! - NACA Report 537 (5-digit series camber families)

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Half-thickness distribution, shared by the 4- and 5-digit families:
///
/// ```text
/// yt = 5t (0.2969 sqrt(x) - 0.1260 x - 0.3516 x^2 + 0.2843 x^3 - 0.1015 x^4)
/// ```
///
/// The non-zero quartic coefficient leaves a blunt trailing edge at `x = 1`.
#[inline]
pub fn thickness_distribution(t: f64, x: f64) -> f64 {
    5.0 * t
        * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x * x + 0.2843 * x * x * x
            - 0.1015 * x * x * x * x)
}

/// 4-digit mean camber line and its slope at station `x`.
///
/// Piecewise quadratic about the camber position `p` (Report 460):
///
/// ```text
/// x < p:   yc = m/p^2 * (2px - x^2)            dyc/dx = 2m/p^2 * (p - x)
/// x >= p:  yc = m/(1-p)^2 * ((1-2p) + 2px - x^2)   dyc/dx = 2m/(1-p)^2 * (p - x)
/// ```
///
/// Returns `(yc, dyc_dx)`.
#[inline]
pub fn naca4_camber(m: f64, p: f64, x: f64) -> (f64, f64) {
    if x < p {
        let yc = m / (p * p) * (2.0 * p * x - x * x);
        let dyc_dx = 2.0 * m / (p * p) * (p - x);
        (yc, dyc_dx)
    } else {
        let omp = 1.0 - p;
        let yc = m / (omp * omp) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x);
        let dyc_dx = 2.0 * m / (omp * omp) * (p - x);
        (yc, dyc_dx)
    }
}

/// Camber-line coefficients for one 5-digit camber family (Report 537).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamberFamily {
    /// Camber constant `m` (not the maximum-camber location)
    pub m: f64,
    /// Camber scale constant `k1`
    pub k1: f64,
    /// Reflex coefficient ratio `k2/k1` (zero for the standard families)
    pub k2_k1: f64,
    /// Whether this family uses the reflected-camber form
    pub reflex: bool,
}

/// Coefficient table for the nine supported camber families, keyed by
/// (camber index, reflex index) - digits 2 and 3 of the designation.
static CAMBER_FAMILIES: Lazy<HashMap<(u32, u32), CamberFamily>> = Lazy::new(|| {
    let mut table = HashMap::new();
    // standard families: 210, 220, 230, 240, 250
    for (i, (m, k1)) in [
        (0.0580, 361.40),
        (0.1260, 51.640),
        (0.2025, 15.957),
        (0.2900, 6.643),
        (0.3910, 3.230),
    ]
    .into_iter()
    .enumerate()
    {
        let camber = i as u32 + 1;
        table.insert((camber, 0), CamberFamily { m, k1, k2_k1: 0.0, reflex: false });
    }
    // reflex families: 221, 231, 241, 251 (there is no 211)
    for (i, (m, k1, k2_k1)) in [
        (0.130, 51.990, 0.000764),
        (0.217, 15.793, 0.00677),
        (0.318, 6.520, 0.0303),
        (0.441, 3.191, 0.1355),
    ]
    .into_iter()
    .enumerate()
    {
        let camber = i as u32 + 2;
        table.insert((camber, 1), CamberFamily { m, k1, k2_k1, reflex: true });
    }
    table
});

/// Look up the camber family for a (camber index, reflex index) digit pair.
///
/// Returns `None` for combinations outside the nine published families,
/// leaving the caller to decide how to surface the failure.
pub fn camber_family(camber_index: u32, reflex_index: u32) -> Option<&'static CamberFamily> {
    CAMBER_FAMILIES.get(&(camber_index, reflex_index))
}

/// 5-digit mean camber line and its slope at station `x`.
///
/// Standard families use a cubic forward of the breakpoint and a linear tail
/// (Report 537 eq. 1); reflex families use the two-cubic reflected form with
/// the `k2/k1` coefficient. `p` is the breakpoint, 0.05 times the camber
/// digit. Returns `(yc, dyc_dx)`.
pub fn naca5_camber(family: &CamberFamily, p: f64, x: f64) -> (f64, f64) {
    let m = family.m;
    let k1 = family.k1;
    if !family.reflex {
        if x < p {
            let yc = (k1 / 6.0) * (x * x * x - 3.0 * m * x * x + m * m * x * (3.0 - m));
            let dyc_dx = (k1 / 6.0) * (3.0 * x * x - 6.0 * m * x + m * m * (3.0 - m));
            (yc, dyc_dx)
        } else {
            let yc = (k1 / 6.0) * m * m * m * (1.0 - x);
            let dyc_dx = -(k1 / 6.0) * m * m * m;
            (yc, dyc_dx)
        }
    } else {
        let k2_k1 = family.k2_k1;
        let omm3 = (1.0 - m) * (1.0 - m) * (1.0 - m);
        let m3 = m * m * m;
        if x < p {
            let xm = x - m;
            let yc = (k1 / 6.0) * (xm * xm * xm - k2_k1 * omm3 * x + m3 * (1.0 - x));
            let dyc_dx = (k1 / 6.0) * (3.0 * xm * xm - k2_k1 * omm3 - m3);
            (yc, dyc_dx)
        } else {
            let xm = x - m;
            let yc = (k1 / 6.0) * (k2_k1 * xm * xm * xm - k2_k1 * omm3 * x + m3 * (1.0 - x));
            let dyc_dx = (k1 / 6.0) * (k2_k1 * 3.0 * xm * xm - k2_k1 * omm3 - m3);
            (yc, dyc_dx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thickness_is_zero_at_leading_edge() {
        assert_eq!(thickness_distribution(0.12, 0.0), 0.0);
    }

    #[test]
    fn test_thickness_blunt_trailing_edge() {
        // coefficients sum to 0.0021 at x=1, scaled by 5t
        let yt = thickness_distribution(0.12, 1.0);
        assert!((yt - 5.0 * 0.12 * 0.0021).abs() < 1e-12, "yt = {}", yt);
        assert!(yt > 0.0);
    }

    #[test]
    fn test_thickness_peak_near_30_percent_chord() {
        let near_peak = thickness_distribution(0.12, 0.30);
        assert!(near_peak > thickness_distribution(0.12, 0.10));
        assert!(near_peak > thickness_distribution(0.12, 0.60));
        // max half-thickness of a 12% section is ~6% chord
        assert!((near_peak - 0.06).abs() < 0.001, "yt = {}", near_peak);
    }

    #[test]
    fn test_naca4_camber_zero_for_symmetric() {
        let (yc, dyc_dx) = naca4_camber(0.0, 0.0, 0.5);
        assert_eq!(yc, 0.0);
        assert_eq!(dyc_dx, 0.0);
    }

    #[test]
    fn test_naca4_camber_peak_at_p() {
        // slope changes sign across the camber position
        let (_, slope_fwd) = naca4_camber(0.02, 0.4, 0.2);
        let (_, slope_aft) = naca4_camber(0.02, 0.4, 0.6);
        assert!(slope_fwd > 0.0);
        assert!(slope_aft < 0.0);
        // ordinate at x = p equals m
        let (yc, _) = naca4_camber(0.02, 0.4, 0.4);
        assert!((yc - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_camber_family_whitelist() {
        assert!(camber_family(3, 0).is_some()); // 230xx
        assert!(camber_family(5, 1).is_some()); // 251xx
        assert!(camber_family(1, 1).is_none()); // 211xx is not published
        assert!(camber_family(6, 0).is_none());
        assert!(camber_family(3, 2).is_none());
    }

    #[test]
    fn test_naca5_standard_family_230() {
        let family = camber_family(3, 0).unwrap();
        assert!((family.m - 0.2025).abs() < 1e-12);
        assert!((family.k1 - 15.957).abs() < 1e-12);
        assert!(!family.reflex);

        // aft of the breakpoint the camber line is linear to zero at the TE
        let (yc_te, slope_te) = naca5_camber(family, 0.15, 1.0);
        assert!(yc_te.abs() < 1e-12);
        assert!(slope_te < 0.0);
    }

    #[test]
    fn test_naca5_reflex_family_231() {
        let family = camber_family(3, 1).unwrap();
        assert!(family.reflex);
        assert!((family.k2_k1 - 0.00677).abs() < 1e-12);

        // camber is positive forward, slope finite everywhere
        let (yc, slope) = naca5_camber(family, 0.15, 0.05);
        assert!(yc > 0.0);
        assert!(slope.is_finite());
    }
}
