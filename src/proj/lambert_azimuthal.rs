//! Lambert Azimuthal Equal-Area projection.
//!
//! Ellipsoidal kernel after Snyder/PROJ: latitudes pass through the authalic
//! sphere (`qsfn` forward, the `authlat` series inverse), with the polar,
//! equatorial and oblique sub-variants sharing one set of precomputed
//! constants. The equatorial case is the oblique case with
//! (sin β₁, cos β₁) = (0, 1). Spherical kernel is the closed form.

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;
use crate::proj::authalic::{qsfn, Authalic};
use crate::proj::common::aasin;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::variant::Aspect;
use crate::proj::Kernel;

const EPS10: f64 = 1e-10;

/// Ellipsoidal Lambert Azimuthal Equal-Area kernel.
pub struct LambertAzimuthalEqualArea {
    aspect: Aspect,
    phi0: f64,
    e: f64,
    one_es: f64,
    /// q at the pole.
    qp: f64,
    auth: Authalic,
    /// (sin, cos) of the authalic latitude of origin. (0, 1) for the
    /// equatorial variant; unused by the polar variants.
    sinb1: f64,
    cosb1: f64,
    /// Radius of the authalic sphere, sqrt(qp / 2).
    rq: f64,
    dd: f64,
    xmf: f64,
    ymf: f64,
}

impl LambertAzimuthalEqualArea {
    pub fn new(ellipsoid: &Ellipsoid, lat0: f64) -> Self {
        let (e, es, one_es) = (ellipsoid.e, ellipsoid.e2, ellipsoid.one_es);
        let aspect = Aspect::select(lat0);
        let qp = qsfn(1.0, e, one_es);
        let auth = Authalic::new(es);

        let mut k = Self {
            aspect,
            phi0: lat0,
            e,
            one_es,
            qp,
            auth,
            sinb1: 0.0,
            cosb1: 1.0,
            rq: 0.0,
            dd: 1.0,
            xmf: 0.0,
            ymf: 0.0,
        };
        match aspect {
            Aspect::NorthPole | Aspect::SouthPole => {}
            Aspect::Equatorial => {
                k.rq = (0.5 * qp).sqrt();
                k.dd = 1.0 / k.rq;
                k.xmf = k.rq * k.dd;
                k.ymf = k.rq / k.dd;
            }
            Aspect::Oblique => {
                k.rq = (0.5 * qp).sqrt();
                let sinphi = lat0.sin();
                k.sinb1 = qsfn(sinphi, e, one_es) / qp;
                k.cosb1 = (1.0 - k.sinb1 * k.sinb1).sqrt();
                k.dd = lat0.cos() / ((1.0 - es * sinphi * sinphi).sqrt() * k.rq * k.cosb1);
                k.xmf = k.rq * k.dd;
                k.ymf = k.rq / k.dd;
            }
        }
        k
    }

    pub fn aspect(&self) -> Aspect {
        self.aspect
    }
}

impl Kernel for LambertAzimuthalEqualArea {
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64), ProjError> {
        let coslam = lam.cos();
        let sinlam = lam.sin();
        let sinphi = phi.sin();
        let mut q = qsfn(sinphi, self.e, self.one_es);

        match self.aspect {
            Aspect::Oblique | Aspect::Equatorial => {
                let sinb = q / self.qp;
                let cosb = (1.0 - sinb * sinb).max(0.0).sqrt();
                let b = match self.aspect {
                    Aspect::Oblique => 1.0 + self.sinb1 * sinb + self.cosb1 * cosb * coslam,
                    _ => 1.0 + cosb * coslam,
                };
                if b.abs() < EPS10 {
                    return Err(ProjError::OutsideDomain(
                        "point antipodal to the projection centre".to_string(),
                    ));
                }
                let b = (2.0 / b).sqrt();
                let y = match self.aspect {
                    Aspect::Oblique => {
                        self.ymf * b * (self.cosb1 * sinb - self.sinb1 * cosb * coslam)
                    }
                    _ => self.ymf * b * sinb,
                };
                Ok((self.xmf * b * cosb * sinlam, y))
            }
            Aspect::NorthPole | Aspect::SouthPole => {
                let north = self.aspect == Aspect::NorthPole;
                let b = if north {
                    q = self.qp - q;
                    FRAC_PI_2 + phi
                } else {
                    q += self.qp;
                    phi - FRAC_PI_2
                };
                if b.abs() < EPS10 {
                    return Err(ProjError::OutsideDomain(
                        "point antipodal to the projection centre".to_string(),
                    ));
                }
                if q < 0.0 {
                    // Rounding at the centre pole itself.
                    return Ok((0.0, 0.0));
                }
                let rho = q.sqrt();
                Ok((rho * sinlam, coslam * if north { -rho } else { rho }))
            }
        }
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        match self.aspect {
            Aspect::Oblique | Aspect::Equatorial => {
                let mut x = x / self.dd;
                let mut y = y * self.dd;
                let rho = x.hypot(y);
                if rho < EPS10 {
                    return Ok((0.0, self.phi0));
                }
                let arg = 0.5 * rho / self.rq;
                if arg > 1.0 + EPS10 {
                    return Err(ProjError::OutsideDomain(
                        "point outside the projection disc".to_string(),
                    ));
                }
                let s_ce = 2.0 * aasin(arg);
                let (s_ce, c_ce) = (s_ce.sin(), s_ce.cos());
                x *= s_ce;
                let ab = match self.aspect {
                    Aspect::Oblique => {
                        let ab = c_ce * self.sinb1 + y * s_ce * self.cosb1 / rho;
                        y = rho * self.cosb1 * c_ce - y * self.sinb1 * s_ce;
                        ab
                    }
                    _ => {
                        let ab = y * s_ce / rho;
                        y = rho * c_ce;
                        ab
                    }
                };
                Ok((x.atan2(y), self.auth.latitude(aasin(ab))))
            }
            Aspect::NorthPole | Aspect::SouthPole => {
                let north = self.aspect == Aspect::NorthPole;
                let yy = if north { -y } else { y };
                let q = x * x + yy * yy;
                if q == 0.0 {
                    return Ok((0.0, self.phi0));
                }
                let mut ab = 1.0 - q / self.qp;
                if !north {
                    ab = -ab;
                }
                Ok((x.atan2(yy), self.auth.latitude(aasin(ab))))
            }
        }
    }
}

/// Spherical Lambert Azimuthal Equal-Area kernel.
pub struct SphericalLambertAzimuthal {
    aspect: Aspect,
    phi0: f64,
    sinb1: f64,
    cosb1: f64,
}

impl SphericalLambertAzimuthal {
    pub fn new(lat0: f64) -> Self {
        Self {
            aspect: Aspect::select(lat0),
            phi0: lat0,
            sinb1: lat0.sin(),
            cosb1: lat0.cos(),
        }
    }

    pub fn aspect(&self) -> Aspect {
        self.aspect
    }
}

impl Kernel for SphericalLambertAzimuthal {
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64), ProjError> {
        let sinphi = phi.sin();
        let cosphi = phi.cos();
        let mut coslam = lam.cos();
        match self.aspect {
            Aspect::Equatorial | Aspect::Oblique => {
                let b = match self.aspect {
                    Aspect::Equatorial => 1.0 + cosphi * coslam,
                    _ => 1.0 + self.sinb1 * sinphi + self.cosb1 * cosphi * coslam,
                };
                if b <= EPS10 {
                    return Err(ProjError::OutsideDomain(
                        "point antipodal to the projection centre".to_string(),
                    ));
                }
                let b = (2.0 / b).sqrt();
                let x = b * cosphi * lam.sin();
                let y = match self.aspect {
                    Aspect::Equatorial => b * sinphi,
                    _ => b * (self.cosb1 * sinphi - self.sinb1 * cosphi * coslam),
                };
                Ok((x, y))
            }
            Aspect::NorthPole | Aspect::SouthPole => {
                if self.aspect == Aspect::NorthPole {
                    coslam = -coslam;
                }
                if (phi + self.phi0).abs() < EPS10 {
                    return Err(ProjError::OutsideDomain(
                        "point antipodal to the projection centre".to_string(),
                    ));
                }
                let a = std::f64::consts::FRAC_PI_4 - phi * 0.5;
                let rho = if self.aspect == Aspect::SouthPole {
                    2.0 * a.cos()
                } else {
                    2.0 * a.sin()
                };
                Ok((rho * lam.sin(), rho * coslam))
            }
        }
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let rh = x.hypot(y);
        let half = rh * 0.5;
        if half > 1.0 {
            return Err(ProjError::OutsideDomain(
                "point outside the projection disc".to_string(),
            ));
        }
        let z = 2.0 * half.asin();
        match self.aspect {
            Aspect::Equatorial | Aspect::Oblique => {
                let sinz = z.sin();
                let cosz = z.cos();
                let (phi, xx, yy) = match self.aspect {
                    Aspect::Equatorial => {
                        let phi = if rh <= EPS10 {
                            0.0
                        } else {
                            aasin(y * sinz / rh)
                        };
                        (phi, x * sinz, cosz * rh)
                    }
                    _ => {
                        let phi = if rh <= EPS10 {
                            self.phi0
                        } else {
                            aasin(cosz * self.sinb1 + y * sinz * self.cosb1 / rh)
                        };
                        (
                            phi,
                            x * sinz * self.cosb1,
                            (cosz - phi.sin() * self.sinb1) * rh,
                        )
                    }
                };
                let lam = if xx == 0.0 && yy == 0.0 {
                    0.0
                } else {
                    xx.atan2(yy)
                };
                Ok((lam, phi))
            }
            Aspect::NorthPole => Ok((x.atan2(-y), FRAC_PI_2 - z)),
            Aspect::SouthPole => Ok((x.atan2(y), z - FRAC_PI_2)),
        }
    }
}
