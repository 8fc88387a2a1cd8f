//! Orthographic projection.
//!
//! Perspective view from infinity, defined for the sphere only; ellipsoidal
//! parameters are rejected at construction rather than silently
//! approximated. One oblique code path serves all three aspects: the polar
//! and equatorial cases are the limits where (sin φ₀, cos φ₀) degenerate to
//! (±1, 0) and (0, 1).
//!
//! Domain of validity is the near hemisphere; the far hemisphere is a
//! domain error, never folded into the disc.

use crate::error::ProjError;
use crate::proj::common::aasin;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::variant::Aspect;
use crate::proj::Kernel;

const EPS10: f64 = 1e-10;

/// Spherical orthographic kernel, all aspects.
pub struct Orthographic {
    aspect: Aspect,
    phi0: f64,
    sinphi0: f64,
    cosphi0: f64,
}

impl Orthographic {
    pub fn new(ellipsoid: &Ellipsoid, lat0: f64) -> Result<Self, ProjError> {
        if !ellipsoid.is_spherical() {
            return Err(ProjError::InvalidParameter(
                "Orthographic is defined for the sphere; give a spherical ellipsoid".to_string(),
            ));
        }
        Ok(Self {
            aspect: Aspect::select(lat0),
            phi0: lat0,
            sinphi0: lat0.sin(),
            cosphi0: lat0.cos(),
        })
    }

    pub fn aspect(&self) -> Aspect {
        self.aspect
    }
}

impl Kernel for Orthographic {
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64), ProjError> {
        let sinphi = phi.sin();
        let cosphi = phi.cos();
        let coslam = lam.cos();
        // Angular distance from the centre; non-negative on the near side.
        let cosc = self.sinphi0 * sinphi + self.cosphi0 * cosphi * coslam;
        if cosc < -EPS10 {
            return Err(ProjError::OutsideDomain(
                "point in the far hemisphere".to_string(),
            ));
        }
        let x = cosphi * lam.sin();
        let y = self.cosphi0 * sinphi - self.sinphi0 * cosphi * coslam;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let rho = x.hypot(y);
        if rho > 1.0 + EPS10 {
            return Err(ProjError::OutsideDomain(
                "point outside the projection disc".to_string(),
            ));
        }
        if rho < EPS10 {
            return Ok((0.0, self.phi0));
        }
        let sinc = rho.min(1.0);
        let cosc = (1.0 - sinc * sinc).sqrt();
        let phi = aasin(cosc * self.sinphi0 + y * sinc * self.cosphi0 / rho);
        let lam = (x * sinc).atan2(rho * self.cosphi0 * cosc - y * self.sinphi0 * sinc);
        Ok((lam, phi))
    }

    /// The limb is singular; round-trips inside the documented domain hold
    /// to this relaxed bound rather than the crate-wide default.
    fn roundtrip_tolerance(&self) -> f64 {
        1e-6
    }
}
