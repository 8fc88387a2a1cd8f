//! Transverse Mercator projection, ellipsoidal and spherical kernels.
//!
//! The ellipsoidal kernel is the classical Snyder/PROJ power series built on
//! the meridian arc: forward terms in powers of (cos φ · λ)², inverse by
//! `inv_mlfn` followed by the matching correction series. Intended for the
//! narrow zones it is used in practice (UTM is ±3° of the central meridian);
//! the series degrades far from the central meridian but stays finite.
//!
//! The spherical kernel is the closed form (Snyder 8-1..8-6).

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;
use crate::proj::common::aasin;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::meridian::MeridianArc;
use crate::proj::Kernel;

const FC1: f64 = 1.0;
const FC2: f64 = 0.5;
const FC3: f64 = 0.16666666666666666666;
const FC4: f64 = 0.08333333333333333333;
const FC5: f64 = 0.05;
const FC6: f64 = 0.03333333333333333333;
const FC7: f64 = 0.02380952380952380952;
const FC8: f64 = 0.01785714285714285714;

/// Ellipsoidal Transverse Mercator kernel.
pub struct TransverseMercator {
    es: f64,
    /// Second eccentricity squared, e² / (1 - e²).
    esp: f64,
    en: MeridianArc,
    /// Meridian distance of the latitude of origin.
    ml0: f64,
}

impl TransverseMercator {
    pub fn new(ellipsoid: &Ellipsoid, lat0: f64) -> Self {
        let en = MeridianArc::new(ellipsoid.e2);
        Self {
            es: ellipsoid.e2,
            esp: ellipsoid.ep2,
            ml0: en.mlfn(lat0, lat0.sin(), lat0.cos()),
            en,
        }
    }
}

impl Kernel for TransverseMercator {
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64), ProjError> {
        let sinphi = phi.sin();
        let cosphi = phi.cos();
        let mut t = if cosphi.abs() > 1e-10 {
            sinphi / cosphi
        } else {
            0.0
        };
        t *= t;
        let mut al = cosphi * lam;
        let als = al * al;
        al /= (1.0 - self.es * sinphi * sinphi).sqrt();
        let n = self.esp * cosphi * cosphi;

        let x = al
            * (FC1
                + FC3
                    * als
                    * (1.0 - t
                        + n
                        + FC5
                            * als
                            * (5.0 + t * (t - 18.0)
                                + n * (14.0 - 58.0 * t)
                                + FC7 * als * (61.0 + t * (t * (179.0 - t) - 479.0)))));
        let y = self.en.mlfn(phi, sinphi, cosphi) - self.ml0
            + sinphi
                * al
                * lam
                * FC2
                * (1.0
                    + FC4
                        * als
                        * (5.0 - t
                            + n * (9.0 + 4.0 * n)
                            + FC6
                                * als
                                * (61.0 + t * (t - 58.0)
                                    + n * (270.0 - 330.0 * t)
                                    + FC8 * als * (1385.0 + t * (t * (543.0 - t) - 3111.0)))));
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let mut phi = self.en.inv_mlfn(self.ml0 + y)?;
        if phi.abs() >= FRAC_PI_2 {
            return Ok((0.0, if y < 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 }));
        }

        let sinphi = phi.sin();
        let cosphi = phi.cos();
        let mut t = if cosphi.abs() > 1e-10 {
            sinphi / cosphi
        } else {
            0.0
        };
        let n = self.esp * cosphi * cosphi;
        let mut con = 1.0 - self.es * sinphi * sinphi;
        let d = x * con.sqrt();
        con *= t;
        t *= t;
        let ds = d * d;

        phi -= (con * ds / (1.0 - self.es))
            * FC2
            * (1.0
                - ds * FC4
                    * (5.0 + t * (3.0 - 9.0 * n)
                        + n * (1.0 - 4.0 * n)
                        - ds * FC6
                            * (61.0 + t * (90.0 - 252.0 * n + 45.0 * t)
                                + 46.0 * n
                                - ds * FC8 * (1385.0 + t * (3633.0 + t * (4095.0 + 1574.0 * t))))));
        let lam = d
            * (FC1
                - ds * FC3
                    * (1.0 + 2.0 * t + n
                        - ds * FC5
                            * (5.0 + t * (28.0 + 24.0 * t + 8.0 * n)
                                + 6.0 * n
                                - ds * FC7 * (61.0 + t * (662.0 + t * (1320.0 + 720.0 * t))))))
            / cosphi;
        Ok((lam, phi))
    }
}

/// Spherical Transverse Mercator kernel (Snyder 8-1..8-6).
pub struct SphericalTransverseMercator {
    phi0: f64,
}

impl SphericalTransverseMercator {
    pub fn new(lat0: f64) -> Self {
        Self { phi0: lat0 }
    }
}

impl Kernel for SphericalTransverseMercator {
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64), ProjError> {
        let b = phi.cos() * lam.sin();
        if (b.abs() - 1.0).abs() < 1e-10 {
            return Err(ProjError::OutsideDomain(
                "point 90° from the central meridian".to_string(),
            ));
        }
        let x = 0.5 * ((1.0 + b) / (1.0 - b)).ln();
        let y = phi.tan().atan2(lam.cos()) - self.phi0;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let d = y + self.phi0;
        let phi = aasin(d.sin() / x.cosh());
        let lam = x.sinh().atan2(d.cos());
        Ok((lam, phi))
    }
}
