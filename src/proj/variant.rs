//! Construction-time geometric variant selection.
//!
//! Aspect and sphericity are decided exactly once, when a projection is
//! built, and the chosen kernel carries only the constants its variant
//! needs. Nothing here runs on the transform path.

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;
use crate::proj::params::ProjParams;

/// Angular tolerance for classifying the latitude of origin.
pub const ASPECT_TOL: f64 = 1e-6;

/// Geometric sub-variant of an azimuthal or cylindrical family, fixed by the
/// latitude of origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aspect {
    NorthPole,
    SouthPole,
    Equatorial,
    Oblique,
}

impl Aspect {
    /// Classify a latitude of origin. Polar within [`ASPECT_TOL`] of ±π/2,
    /// equatorial within [`ASPECT_TOL`] of zero, oblique otherwise.
    pub fn select(lat0: f64) -> Aspect {
        if (lat0.abs() - FRAC_PI_2).abs() < ASPECT_TOL {
            if lat0 > 0.0 {
                Aspect::NorthPole
            } else {
                Aspect::SouthPole
            }
        } else if lat0.abs() < ASPECT_TOL {
            Aspect::Equatorial
        } else {
            Aspect::Oblique
        }
    }

    pub fn is_polar(self) -> bool {
        matches!(self, Aspect::NorthPole | Aspect::SouthPole)
    }
}

/// Normalize a standard-parallel pair for a conic family.
///
/// Unordered pairs are returned in ascending order; a pair of equal
/// parallels is legal and collapses the two-parallel formulas to their
/// one-parallel special case downstream. Antipodal distinct parallels
/// (φ₁ + φ₂ ≈ 0) leave the cone constant undefined and are rejected, as are
/// parallels on a pole.
pub fn normalize_parallels(lat1: f64, lat2: f64) -> Result<(f64, f64), ProjError> {
    for (name, v) in [("lat1", lat1), ("lat2", lat2)] {
        if !v.is_finite() || v.abs() >= FRAC_PI_2 {
            return Err(ProjError::InvalidParameter(format!(
                "standard parallel {name} must lie strictly between the poles: {v} rad"
            )));
        }
    }
    let (lo, hi) = if lat1 <= lat2 {
        (lat1, lat2)
    } else {
        (lat2, lat1)
    };
    if (lo + hi).abs() < 1e-10 && (hi - lo).abs() >= 1e-10 {
        return Err(ProjError::InvalidParameter(format!(
            "standard parallels are antipodal ({lo} rad and {hi} rad)"
        )));
    }
    Ok((lo, hi))
}

/// Reject a declared standard-parallel pair on a family that takes none.
///
/// Azimuthal constructions with two distinct parallels are contradictory
/// parameter sets, not collapsible ones. A repeated single value is ignored
/// rather than rejected, matching the substitution rule for degenerate
/// parameters.
pub fn reject_parallel_pair(params: &ProjParams, family: &str) -> Result<(), ProjError> {
    if let (Some(lat1), Some(lat2)) = (params.lat1, params.lat2) {
        if (lat1 - lat2).abs() >= 1e-10 {
            return Err(ProjError::InvalidParameter(format!(
                "{family} takes no standard parallels, but two distinct ones were given"
            )));
        }
    }
    Ok(())
}
