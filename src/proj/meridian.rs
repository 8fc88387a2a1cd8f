//! Meridian arc length series and its Newton-Raphson inverse.
//!
//! The distance along a meridian from the equator to latitude φ on a unit
//! semi-major-axis ellipse, evaluated with the classical five-coefficient
//! sine series in powers of e². The same coefficient table as the reference
//! implementations (Snyder / PROJ), to full double precision; accurate to
//! below 1e-5 m when scaled by a terrestrial semi-major axis.

use crate::error::ProjError;

/// Relative iteration precision of [`MeridianArc::inv_mlfn`], in radians.
const MLFN_TOL: f64 = 1e-11;

/// Iteration cap. The Newton iteration rarely needs more than 5 passes.
const MAX_ITER: u32 = 15;

const C00: f64 = 1.0;
const C02: f64 = 0.25;
const C04: f64 = 0.046875;
const C06: f64 = 0.01953125;
const C08: f64 = 0.01068115234375;
const C22: f64 = 0.75;
const C44: f64 = 0.46875;
const C46: f64 = 0.01302083333333333333;
const C48: f64 = 0.00712076822916666666;
const C66: f64 = 0.36458333333333333333;
const C68: f64 = 0.00569661458333333333;
const C88: f64 = 0.3076171875;

/// Precomputed meridian arc coefficients for one eccentricity.
///
/// Derived once at projection construction and read-only afterwards.
#[derive(Clone, Copy, Debug)]
pub struct MeridianArc {
    es: f64,
    en0: f64,
    en1: f64,
    en2: f64,
    en3: f64,
    en4: f64,
}

impl MeridianArc {
    /// Evaluate the coefficient polynomials for eccentricity squared `es`.
    pub fn new(es: f64) -> Self {
        let t = es * es;
        Self {
            es,
            en0: C00 - es * (C02 + es * (C04 + es * (C06 + es * C08))),
            en1: es * (C22 - es * (C04 + es * (C06 + es * C08))),
            en2: t * (C44 - es * (C46 + es * C48)),
            en3: t * es * (C66 - es * C68),
            en4: t * t * C88,
        }
    }

    /// Meridian distance from the equator to `phi`, on the unit ellipse.
    ///
    /// `sphi` and `cphi` are sin(φ) and cos(φ); callers invariably have them
    /// already. Monotonically increasing on [-π/2, π/2] for any valid e², so
    /// the inverse has a unique in-range root.
    pub fn mlfn(&self, phi: f64, sphi: f64, cphi: f64) -> f64 {
        let cphi = cphi * sphi;
        let sphi = sphi * sphi;
        self.en0 * phi
            - cphi * (self.en1 + sphi * (self.en2 + sphi * (self.en3 + sphi * self.en4)))
    }

    /// Latitude for a meridian distance, by Newton-Raphson iteration.
    ///
    /// Determines φ to 1e-11 rad, about 1e-6 arc seconds. The analytic
    /// initial guess `arg / en0` is adequate for every parameter-valid
    /// input; exhausting the iteration budget is reported as a convergence
    /// failure, never papered over with the last iterate.
    pub fn inv_mlfn(&self, arg: f64) -> Result<f64, ProjError> {
        let k = 1.0 / (1.0 - self.es);
        let mut phi = arg / self.en0;
        for _ in 0..MAX_ITER {
            let s = phi.sin();
            let mut t = 1.0 - self.es * s * s;
            t = (self.mlfn(phi, s, phi.cos()) - arg) * (t * t.sqrt()) * k;
            phi -= t;
            if t.abs() < MLFN_TOL {
                return Ok(phi);
            }
        }
        Err(ProjError::NoConvergence(MAX_ITER))
    }
}
