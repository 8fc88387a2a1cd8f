//! Equirectangular (Plate Carrée) projection.
//!
//! forward: x = (λ - λ₀)·cos(φ₁), y = φ - φ₀, on the unit sphere.
//!
//! Spherical formulas only. An ellipsoidal input is accepted with the
//! documented approximation of using the semi-major axis as the sphere
//! radius; a warning is logged once at construction. This family keeps the
//! historical lenient behavior, unlike the orthographic kernel which rejects
//! ellipsoidal parameters outright.

use crate::error::ProjError;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::params::ProjParams;
use crate::proj::variant;
use crate::proj::Kernel;

/// Plate Carrée kernel with an optional standard parallel.
pub struct Equirectangular {
    phi0: f64,
    cos_ts: f64,
}

impl Equirectangular {
    pub fn new(ellipsoid: &Ellipsoid, params: &ProjParams) -> Result<Self, ProjError> {
        variant::reject_parallel_pair(params, "Equirectangular")?;
        if !ellipsoid.is_spherical() {
            tracing::warn!(
                a = ellipsoid.a,
                b = ellipsoid.b,
                "equirectangular uses spherical formulas; approximating the \
                 ellipsoid by a sphere of the semi-major axis"
            );
        }
        let lat_ts = params.lat1.unwrap_or(0.0);
        let cos_ts = lat_ts.cos();
        if cos_ts.abs() < 1e-10 {
            return Err(ProjError::InvalidParameter(
                "standard parallel of an equirectangular grid cannot be a pole".to_string(),
            ));
        }
        Ok(Self {
            phi0: params.lat0,
            cos_ts,
        })
    }
}

impl Kernel for Equirectangular {
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64), ProjError> {
        Ok((lam * self.cos_ts, phi - self.phi0))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        Ok((x / self.cos_ts, y + self.phi0))
    }
}
