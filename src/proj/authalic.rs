//! Authalic latitude series: the substitute latitude that makes small-area
//! scale exactly one, used by every equal-area kernel.
//!
//! `qsfn` is the forward integral (Snyder 3-12), `Authalic::latitude` the
//! truncated inverse series (Snyder 3-18), and `inv_qsfn` the Newton
//! inversion the conic families use instead of the series.

use crate::error::ProjError;

/// Below this eccentricity the closed spherical form is used; the log-based
/// expression cancels catastrophically as e → 0.
const QSFN_SPHERICAL_EPS: f64 = 1e-7;

const MAX_ITER: u32 = 15;
const INV_QSFN_TOL: f64 = 1e-10;

// Inverse-series coefficient table, exact rationals in e²:
// 1/3, 31/180, 517/5040, 23/360, 251/3780, 761/45360.
const P00: f64 = 0.33333333333333333333;
const P01: f64 = 0.17222222222222222222;
const P02: f64 = 0.10257936507936507936;
const P10: f64 = 0.06388888888888888888;
const P11: f64 = 0.06640211640211640211;
const P20: f64 = 0.01641501294219154443;

/// q, the authalic function of latitude (Snyder 3-12).
///
/// `one_es` is 1 - e². The result ranges over ±qp where `qp = qsfn(1, ...)`;
/// `q / qp` is the sine of the authalic latitude β.
pub fn qsfn(sinphi: f64, e: f64, one_es: f64) -> f64 {
    if e < QSFN_SPHERICAL_EPS {
        return 2.0 * sinphi;
    }
    let con = e * sinphi;
    one_es * (sinphi / (1.0 - con * con) - (0.5 / e) * ((1.0 - con) / (1.0 + con)).ln())
}

/// Precomputed coefficients mapping authalic latitude β back to geographic
/// latitude φ. Adequate for terrestrial eccentricities; the truncation error
/// grows beyond the documented e² range.
#[derive(Clone, Copy, Debug)]
pub struct Authalic {
    apa: [f64; 3],
}

impl Authalic {
    /// Evaluate the coefficient polynomials for eccentricity squared `es`.
    pub fn new(es: f64) -> Self {
        let t = es * es;
        let mut apa = [es * P00 + t * P01, t * P10, 0.0];
        let t = t * es;
        apa[0] += t * P02;
        apa[1] += t * P11;
        apa[2] = t * P20;
        Self { apa }
    }

    /// Geographic latitude for an authalic latitude `beta` (Snyder 3-18):
    /// β + c₀·sin2β + c₁·sin4β + c₂·sin6β.
    pub fn latitude(&self, beta: f64) -> f64 {
        let t = beta + beta;
        beta + self.apa[0] * t.sin() + self.apa[1] * (t + t).sin() + self.apa[2] * (3.0 * t).sin()
    }
}

/// Latitude for a value of q, by Newton-Raphson iteration.
///
/// Initial guess asin(q/2); each step divides the qsfn residual by dq/dφ.
/// Exhausting the iteration budget is a convergence failure for the
/// coordinate, never an approximation.
pub fn inv_qsfn(qs: f64, e: f64, one_es: f64) -> Result<f64, ProjError> {
    let mut phi = (0.5 * qs).asin();
    if e < QSFN_SPHERICAL_EPS {
        return Ok(phi);
    }
    for _ in 0..MAX_ITER {
        let sinphi = phi.sin();
        let cosphi = phi.cos();
        let con = e * sinphi;
        let com = 1.0 - con * con;
        let dphi = 0.5 * com * com / cosphi
            * (qs / one_es - sinphi / com + (0.5 / e) * ((1.0 - con) / (1.0 + con)).ln());
        phi += dphi;
        if dphi.abs() <= INV_QSFN_TOL {
            return Ok(phi);
        }
    }
    Err(ProjError::NoConvergence(MAX_ITER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::proj::ellipsoid::WGS84;

    #[test]
    fn test_spherical_branch_continuity() {
        // At e = 1e-8 the log form and the closed form must agree to 1e-9.
        let e = 1e-8;
        let one_es = 1.0 - e * e;
        for deg in [-80.0_f64, -30.0, 0.0, 15.0, 60.0, 89.0] {
            let s = deg.to_radians().sin();
            assert_relative_eq!(qsfn(s, e, one_es), 2.0 * s, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_qp_wgs84() {
        // q at the pole for WGS84.
        let qp = qsfn(1.0, WGS84.e, WGS84.one_es);
        assert_relative_eq!(qp, 1.995_531_087_502_836_7, epsilon = 1e-12);
    }

    #[test]
    fn test_qsfn_odd() {
        for deg in [5.0_f64, 30.0, 70.0] {
            let s = deg.to_radians().sin();
            assert_relative_eq!(
                qsfn(s, WGS84.e, WGS84.one_es),
                -qsfn(-s, WGS84.e, WGS84.one_es),
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_authlat_roundtrip() {
        // Forward through qsfn, back through the series; truncation error
        // for terrestrial eccentricities stays below a nanoradian scale.
        let qp = qsfn(1.0, WGS84.e, WGS84.one_es);
        let auth = Authalic::new(WGS84.e2);
        for deg in (-90..=90).step_by(5) {
            let phi = (deg as f64).to_radians();
            let sinb = (qsfn(phi.sin(), WGS84.e, WGS84.one_es) / qp).clamp(-1.0, 1.0);
            let back = auth.latitude(sinb.asin());
            assert!(
                (back - phi).abs() < 1e-9,
                "phi={deg}°: err={}",
                (back - phi).abs()
            );
        }
    }

    #[test]
    fn test_authalic_coefficients_wgs84() {
        let auth = Authalic::new(WGS84.e2);
        assert_relative_eq!(auth.apa[0], 2.239_208_862_480_851e-3, epsilon = 1e-15);
        assert_relative_eq!(auth.apa[1], 2.883_083_972_891_412e-6, epsilon = 1e-18);
        assert_relative_eq!(auth.apa[2], 4.924_615_306_837_784e-9, epsilon = 1e-21);
    }

    #[test]
    fn test_inv_qsfn_roundtrip() {
        for deg in (-85..=85).step_by(5) {
            let phi = (deg as f64).to_radians();
            let q = qsfn(phi.sin(), WGS84.e, WGS84.one_es);
            let back = inv_qsfn(q, WGS84.e, WGS84.one_es).unwrap();
            assert!(
                (back - phi).abs() < 1e-10,
                "phi={deg}°: err={}",
                (back - phi).abs()
            );
        }
    }

    #[test]
    fn test_inv_qsfn_spherical() {
        let q = 2.0 * 0.3_f64.sin();
        let phi = inv_qsfn(q, 0.0, 1.0).unwrap();
        assert_relative_eq!(phi, 0.3, epsilon = 1e-12);
    }
}
