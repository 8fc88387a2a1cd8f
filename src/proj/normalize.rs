//! Affine pre/post processing around the normalized-space kernels.
//!
//! Kernels work on an ellipse with a semi-major axis of 1 and the central
//! meridian at zero. The normalizer is the only place where the scale factor,
//! the semi-major axis and the false origin are applied, so individual
//! projection formulas never see them.

use std::f64::consts::PI;

use crate::proj::params::ProjParams;

/// Converts between caller coordinates and the normalized space kernels
/// operate in. Pure arithmetic; never fails.
#[derive(Clone, Copy, Debug)]
pub struct Normalizer {
    central_meridian: f64,
    /// k₀ · a, the single multiplier between unit-ellipse distance and the
    /// caller's linear unit.
    global_scale: f64,
    false_easting: f64,
    false_northing: f64,
}

impl Normalizer {
    pub fn new(params: &ProjParams, semi_major: f64) -> Self {
        Self {
            central_meridian: params.lon0,
            global_scale: params.k0 * semi_major,
            false_easting: params.false_easting,
            false_northing: params.false_northing,
        }
    }

    /// Geographic input to normalized input: subtract the central meridian.
    ///
    /// The longitude is rolled into ±π only when a rotation was actually
    /// applied. Inputs at exactly +180° with λ₀ = 0 would otherwise flip
    /// sign through rounding, which breaks bounding boxes that end on the
    /// antimeridian.
    pub fn normalize_geographic(&self, lon: f64, lat: f64) -> (f64, f64) {
        if self.central_meridian != 0.0 {
            (roll_longitude(lon - self.central_meridian), lat)
        } else {
            (lon, lat)
        }
    }

    /// Normalized output back to geographic: add the central meridian, with
    /// the same conditional roll as [`Self::normalize_geographic`].
    pub fn denormalize_geographic(&self, lam: f64, phi: f64) -> (f64, f64) {
        if self.central_meridian != 0.0 {
            (roll_longitude(lam + self.central_meridian), phi)
        } else {
            (lam, phi)
        }
    }

    /// Normalized kernel output to caller units: scale and false origin.
    pub fn denormalize_projected(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.global_scale * x + self.false_easting,
            self.global_scale * y + self.false_northing,
        )
    }

    /// Caller units to normalized kernel input.
    pub fn normalize_projected(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.false_easting) / self.global_scale,
            (y - self.false_northing) / self.global_scale,
        )
    }
}

/// Roll a longitude into [-π, π).
fn roll_longitude(x: f64) -> f64 {
    x - (2.0 * PI) * ((x + PI) / (2.0 * PI)).floor()
}
