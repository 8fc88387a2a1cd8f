use crate::error::ProjError;

/// Reference ellipsoid parameters.
///
/// Immutable once constructed; every derived quantity is computed up front so
/// kernels never re-derive them per call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Semi-minor axis (metres)
    pub b: f64,
    /// First eccentricity: sqrt(1 - b²/a²)
    pub e: f64,
    /// First eccentricity squared
    pub e2: f64,
    /// 1 - e²
    pub one_es: f64,
    /// Second eccentricity squared: e² / (1 - e²)
    pub ep2: f64,
}

impl Ellipsoid {
    /// Build from semi-major and semi-minor axis lengths.
    pub fn from_semi_minor(a: f64, b: f64) -> Result<Self, ProjError> {
        if !(a.is_finite() && a > 0.0) {
            return Err(ProjError::InvalidParameter(format!(
                "semi_major must be finite and positive, got {a}"
            )));
        }
        if !(b.is_finite() && b > 0.0 && b <= a) {
            return Err(ProjError::InvalidParameter(format!(
                "semi_minor must satisfy 0 < b <= a, got {b}"
            )));
        }
        let e2 = 1.0 - (b * b) / (a * a);
        Ok(Self {
            a,
            b,
            e: e2.sqrt(),
            e2,
            one_es: 1.0 - e2,
            ep2: e2 / (1.0 - e2),
        })
    }

    /// Build from semi-major axis and inverse flattening. An inverse
    /// flattening of `f64::INFINITY` gives a sphere.
    pub fn from_inverse_flattening(a: f64, inv_f: f64) -> Result<Self, ProjError> {
        if !(inv_f >= 1.0) {
            return Err(ProjError::InvalidParameter(format!(
                "inverse flattening must be >= 1, got {inv_f}"
            )));
        }
        let f = if inv_f.is_infinite() { 0.0 } else { 1.0 / inv_f };
        Self::from_semi_minor(a, a * (1.0 - f))
    }

    /// Sphere of the given radius.
    pub fn sphere(radius: f64) -> Result<Self, ProjError> {
        Self::from_semi_minor(radius, radius)
    }

    /// True when the semi-axes are equal and all ellipsoidal series collapse
    /// to their closed spherical forms.
    pub fn is_spherical(&self) -> bool {
        self.e2 == 0.0
    }
}

const fn ellipsoid_const(a: f64, inv_f: f64) -> Ellipsoid {
    let f = 1.0 / inv_f;
    let b = a * (1.0 - f);
    let e2 = 1.0 - (b * b) / (a * a);
    Ellipsoid {
        a,
        b,
        // sqrt is not const; filled with the exact value below where needed.
        e: 0.0,
        e2,
        one_es: 1.0 - e2,
        ep2: e2 / (1.0 - e2),
    }
}

/// WGS 84 (EPSG:7030).
pub const WGS84: Ellipsoid = {
    let mut e = ellipsoid_const(6_378_137.0, 298.257_223_563);
    e.e = 0.081_819_190_842_621_57;
    e
};

/// GRS 1980 (EPSG:7019).
pub const GRS80: Ellipsoid = {
    let mut e = ellipsoid_const(6_378_137.0, 298.257_222_101);
    e.e = 0.081_819_191_042_815_14;
    e
};

/// Authalic sphere used by many spherical-only map services (EPSG:7035-like).
pub const SPHERE: Ellipsoid = Ellipsoid {
    a: 6_370_997.0,
    b: 6_370_997.0,
    e: 0.0,
    e2: 0.0,
    one_es: 1.0,
    ep2: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wgs84_constants() {
        assert_relative_eq!(WGS84.a, 6_378_137.0);
        assert_relative_eq!(WGS84.b, 6_356_752.314_245_179, epsilon = 0.001);
        assert_relative_eq!(WGS84.e, WGS84.e2.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(WGS84.e2, 0.006_694_379_990_141_317, epsilon = 1e-15);
    }

    #[test]
    fn test_grs80_close_to_wgs84() {
        assert_relative_eq!(WGS84.a, GRS80.a);
        assert!((WGS84.e2 - GRS80.e2).abs() < 1e-10);
        assert_relative_eq!(GRS80.e, GRS80.e2.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_from_semi_minor_matches_const() {
        let e = Ellipsoid::from_semi_minor(6_378_137.0, WGS84.b).unwrap();
        assert_relative_eq!(e.e2, WGS84.e2, epsilon = 1e-15);
        assert_relative_eq!(e.ep2, WGS84.ep2, epsilon = 1e-15);
    }

    #[test]
    fn test_from_inverse_flattening() {
        let e = Ellipsoid::from_inverse_flattening(6_378_137.0, 298.257_223_563).unwrap();
        assert_relative_eq!(e.b, WGS84.b, epsilon = 1e-6);
        let s = Ellipsoid::from_inverse_flattening(6_371_000.0, f64::INFINITY).unwrap();
        assert!(s.is_spherical());
    }

    #[test]
    fn test_sphere_is_spherical() {
        assert!(SPHERE.is_spherical());
        assert!(!WGS84.is_spherical());
        assert!(Ellipsoid::sphere(6_371_000.0).unwrap().is_spherical());
    }

    #[test]
    fn test_rejects_degenerate_axes() {
        assert!(Ellipsoid::from_semi_minor(0.0, 0.0).is_err());
        assert!(Ellipsoid::from_semi_minor(6_378_137.0, -1.0).is_err());
        assert!(Ellipsoid::from_semi_minor(6_378_137.0, 7_000_000.0).is_err());
        assert!(Ellipsoid::from_inverse_flattening(6_378_137.0, 0.5).is_err());
    }
}
