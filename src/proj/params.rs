//! Named projection parameters shared by every kernel family.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::ProjError;

/// Projection parameters in standard units: angles in radians, offsets in
/// the caller's linear unit. Immutable per projection instance.
///
/// Defaults match the usual authority defaults: Greenwich central meridian,
/// equatorial origin, unit scale factor, zero false origin, no standard
/// parallels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjParams {
    /// Central meridian λ₀.
    pub lon0: f64,
    /// Latitude of origin φ₀.
    pub lat0: f64,
    /// Scale factor k₀ at the natural origin.
    pub k0: f64,
    /// False easting.
    pub false_easting: f64,
    /// False northing.
    pub false_northing: f64,
    /// First standard parallel, for the families that take one.
    pub lat1: Option<f64>,
    /// Second standard parallel.
    pub lat2: Option<f64>,
}

impl Default for ProjParams {
    fn default() -> Self {
        Self {
            lon0: 0.0,
            lat0: 0.0,
            k0: 1.0,
            false_easting: 0.0,
            false_northing: 0.0,
            lat1: None,
            lat2: None,
        }
    }
}

impl ProjParams {
    /// Parameters with just a projection centre, everything else default.
    pub fn centered(lon0: f64, lat0: f64) -> Self {
        Self {
            lon0,
            lat0,
            ..Self::default()
        }
    }

    /// Range-check the shared parameters. Called by every projection
    /// constructor before any kernel-specific validation.
    pub fn validate(&self) -> Result<(), ProjError> {
        if !self.lon0.is_finite() || self.lon0.abs() > PI {
            return Err(ProjError::InvalidParameter(format!(
                "central meridian out of range [-180°, 180°]: {} rad",
                self.lon0
            )));
        }
        if !self.lat0.is_finite() || self.lat0.abs() > FRAC_PI_2 {
            return Err(ProjError::InvalidParameter(format!(
                "latitude of origin out of range [-90°, 90°]: {} rad",
                self.lat0
            )));
        }
        if !self.k0.is_finite() || self.k0 <= 0.0 {
            return Err(ProjError::InvalidParameter(format!(
                "scale factor must be positive, got {}",
                self.k0
            )));
        }
        if !self.false_easting.is_finite() || !self.false_northing.is_finite() {
            return Err(ProjError::InvalidParameter(
                "false easting/northing must be finite".to_string(),
            ));
        }
        for (name, lat) in [("lat1", self.lat1), ("lat2", self.lat2)] {
            if let Some(v) = lat {
                if !v.is_finite() || v.abs() > FRAC_PI_2 {
                    return Err(ProjError::InvalidParameter(format!(
                        "standard parallel {name} out of range [-90°, 90°]: {v} rad"
                    )));
                }
            }
        }
        Ok(())
    }
}
