//! # Skin-Friction Correlations
//!
//! Empirical flat-plate skin-friction coefficient correlations used to size
//! the near-wall prism layer from a target Y+. Each correlation is a closed
//! form `Cf(Re)`:
//!
//! ```text
//! Schlichting:                 Cf = (2 log10(Re) - 0.65)^-2.3
//! Prandtl (1927):              Cf = 0.074 Re^-0.2
//! ITTC (1957):                 Cf = 0.075 (log10(Re) - 2)^-2
//! Prandtl-Schlichting (1932):  Cf = 0.455 log10(Re)^-2.58
//! ```
//!
//! The log-based correlations are only meaningful for `Re > 1`; below that
//! `log10(Re)` is non-positive and the power laws produce negative or
//! non-finite coefficients, so out-of-domain Reynolds numbers are rejected
//! rather than evaluated.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Selectable empirical skin-friction correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkinFrictionCorrelation {
    /// Schlichting's power-law fit (the default in the host tool)
    Schlichting,
    /// Prandtl (1927) one-seventh-power-law fit
    Prandtl1927,
    /// International Towing Tank Conference (1957) model-ship line
    Ittc1957,
    /// Prandtl-Schlichting (1932) log-law fit
    PrandtlSchlichting1932,
}

impl SkinFrictionCorrelation {
    /// Evaluate the correlation at the given Reynolds number.
    pub fn cf(self, re: f64) -> CalcResult<f64> {
        if re <= 1.0 {
            return Err(CalcError::domain_error(
                "skin_friction",
                format!("Reynolds number {} is outside the correlation domain (Re > 1)", re),
            ));
        }
        let cf = match self {
            SkinFrictionCorrelation::Schlichting => (2.0 * re.log10() - 0.65).powf(-2.3),
            SkinFrictionCorrelation::Prandtl1927 => 0.074 * re.powf(-0.2),
            SkinFrictionCorrelation::Ittc1957 => 0.075 * (re.log10() - 2.0).powf(-2.0),
            SkinFrictionCorrelation::PrandtlSchlichting1932 => 0.455 * re.log10().powf(-2.58),
        };
        if !cf.is_finite() || cf <= 0.0 {
            return Err(CalcError::domain_error(
                "skin_friction",
                format!(
                    "{} correlation is singular at Re = {}",
                    self.name(),
                    re
                ),
            ));
        }
        Ok(cf)
    }

    /// Human-readable correlation name.
    pub fn name(self) -> &'static str {
        match self {
            SkinFrictionCorrelation::Schlichting => "Schlichting",
            SkinFrictionCorrelation::Prandtl1927 => "Prandtl (1927)",
            SkinFrictionCorrelation::Ittc1957 => "ITTC (1957)",
            SkinFrictionCorrelation::PrandtlSchlichting1932 => "Prandtl-Schlichting (1932)",
        }
    }

    /// Name-plus-formula line, as the host tool prints when listing the
    /// available correlations.
    pub fn describe(self) -> &'static str {
        match self {
            SkinFrictionCorrelation::Schlichting => {
                "Schlichting: Cf = (2*log10(Re) - 0.65)^-2.3"
            }
            SkinFrictionCorrelation::Prandtl1927 => "Prandtl (1927): Cf = 0.074*Re^-0.2",
            SkinFrictionCorrelation::Ittc1957 => {
                "ITTC (1957): Cf = 0.075*(log10(Re) - 2)^-2"
            }
            SkinFrictionCorrelation::PrandtlSchlichting1932 => {
                "Prandtl-Schlichting (1932): Cf = 0.455*log10(Re)^-2.58"
            }
        }
    }

    /// All supported correlations, in the host tool's selector order.
    pub fn all() -> [SkinFrictionCorrelation; 4] {
        [
            SkinFrictionCorrelation::Schlichting,
            SkinFrictionCorrelation::Prandtl1927,
            SkinFrictionCorrelation::Ittc1957,
            SkinFrictionCorrelation::PrandtlSchlichting1932,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schlichting_at_known_re() {
        // Cf = (2*log10(62812) - 0.65)^-2.3
        let re = 62812.0;
        let cf = SkinFrictionCorrelation::Schlichting.cf(re).unwrap();
        let expected = (2.0 * re.log10() - 0.65f64).powf(-2.3);
        assert!((cf - expected).abs() < 1e-15);
        assert!(cf > 0.0 && cf < 0.1, "Cf = {}", cf);
    }

    #[test]
    fn test_prandtl_power_law() {
        // 0.074 * (1e6)^-0.2 = 0.074 / 10^1.2
        let cf = SkinFrictionCorrelation::Prandtl1927.cf(1e6).unwrap();
        assert!((cf - 0.074 / 10f64.powf(1.2)).abs() < 1e-12);
    }

    #[test]
    fn test_all_correlations_positive_at_high_re() {
        for corr in SkinFrictionCorrelation::all() {
            let cf = corr.cf(1e7).unwrap();
            assert!(cf > 0.0 && cf < 0.01, "{}: Cf = {}", corr.name(), cf);
        }
    }

    #[test]
    fn test_low_re_rejected() {
        for corr in SkinFrictionCorrelation::all() {
            assert_eq!(corr.cf(0.5).unwrap_err().error_code(), "DOMAIN_ERROR");
            assert_eq!(corr.cf(-100.0).unwrap_err().error_code(), "DOMAIN_ERROR");
        }
    }

    #[test]
    fn test_ittc_singular_at_re_100() {
        // log10(100) - 2 = 0, singular point of the ITTC line
        let result = SkinFrictionCorrelation::Ittc1957.cf(100.0);
        assert_eq!(result.unwrap_err().error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_describe_lists_formula() {
        assert!(SkinFrictionCorrelation::Ittc1957.describe().contains("0.075"));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let corr = SkinFrictionCorrelation::PrandtlSchlichting1932;
        let json = serde_json::to_string(&corr).unwrap();
        let roundtrip: SkinFrictionCorrelation = serde_json::from_str(&json).unwrap();
        assert_eq!(corr, roundtrip);
    }
}
