//! Albers Equal-Area Conic projection.
//!
//! Area-preserving conic after Snyder/PROJ: the cone constant comes from the
//! standard parallels through `msfn` and `qsfn`, and the ellipsoidal inverse
//! recovers latitude with the Newton inversion of `qsfn`. Equal standard
//! parallels collapse to the one-parallel cone; the caller normalizes the
//! pair before construction.

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;
use crate::proj::authalic::{inv_qsfn, qsfn};
use crate::proj::common::msfn;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::Kernel;

const EPS10: f64 = 1e-10;
/// Near the pole the cone radius equation is solved directly rather than
/// through the Newton iteration.
const TOL7: f64 = 1e-7;

/// Albers Equal-Area Conic kernel, both sphericities.
pub struct AlbersEqualArea {
    ellipse: bool,
    e: f64,
    one_es: f64,
    /// Cone constant.
    n: f64,
    n2: f64,
    c: f64,
    dd: f64,
    rho0: f64,
    /// q at the pole; marks the latitude where the cone radius degenerates.
    ec: f64,
}

impl AlbersEqualArea {
    /// Build from a latitude of origin and an ordered standard-parallel
    /// pair (`lat1 <= lat2`, already range-checked and de-duplicated by the
    /// variant layer).
    pub fn new(
        ellipsoid: &Ellipsoid,
        lat0: f64,
        lat1: f64,
        lat2: f64,
    ) -> Result<Self, ProjError> {
        let (e, es, one_es) = (ellipsoid.e, ellipsoid.e2, ellipsoid.one_es);
        let sinphi = lat1.sin();
        let cosphi = lat1.cos();
        let secant = (lat1 - lat2).abs() >= EPS10;
        let ellipse = !ellipsoid.is_spherical();

        let mut k = Self {
            ellipse,
            e,
            one_es,
            n: sinphi,
            n2: 0.0,
            c: 0.0,
            dd: 0.0,
            rho0: 0.0,
            ec: 0.0,
        };
        if ellipse {
            let m1 = msfn(sinphi, cosphi, es);
            let ml1 = qsfn(sinphi, e, one_es);
            if secant {
                let sinphi2 = lat2.sin();
                let m2 = msfn(sinphi2, lat2.cos(), es);
                let ml2 = qsfn(sinphi2, e, one_es);
                k.n = (m1 * m1 - m2 * m2) / (ml2 - ml1);
            }
            if k.n == 0.0 {
                return Err(ProjError::InvalidParameter(
                    "standard parallels yield a degenerate cone constant".to_string(),
                ));
            }
            k.ec = 1.0 - 0.5 * one_es * ((1.0 - e) / (1.0 + e)).ln() / e;
            k.c = m1 * m1 + k.n * ml1;
            k.dd = 1.0 / k.n;
            k.rho0 = k.dd * (k.c - k.n * qsfn(lat0.sin(), e, one_es)).sqrt();
        } else {
            if secant {
                k.n = 0.5 * (k.n + lat2.sin());
            }
            if k.n == 0.0 {
                return Err(ProjError::InvalidParameter(
                    "standard parallels yield a degenerate cone constant".to_string(),
                ));
            }
            k.n2 = k.n + k.n;
            k.c = cosphi * cosphi + k.n2 * sinphi;
            k.dd = 1.0 / k.n;
            k.rho0 = k.dd * (k.c - k.n2 * lat0.sin()).sqrt();
        }
        Ok(k)
    }
}

impl Kernel for AlbersEqualArea {
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64), ProjError> {
        let rho = self.c
            - if self.ellipse {
                self.n * qsfn(phi.sin(), self.e, self.one_es)
            } else {
                self.n2 * phi.sin()
            };
        if rho < 0.0 {
            return Err(ProjError::OutsideDomain(
                "latitude beyond the cone apex".to_string(),
            ));
        }
        let rho = self.dd * rho.sqrt();
        let theta = lam * self.n;
        Ok((rho * theta.sin(), self.rho0 - rho * theta.cos()))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let mut x = x;
        let mut y = self.rho0 - y;
        let mut rho = x.hypot(y);
        if rho == 0.0 {
            return Ok((0.0, if self.n > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 }));
        }
        if self.n < 0.0 {
            rho = -rho;
            x = -x;
            y = -y;
        }
        let phi = rho / self.dd;
        let phi = if self.ellipse {
            let q = (self.c - phi * phi) / self.n;
            if (self.ec - q.abs()).abs() > TOL7 {
                inv_qsfn(q, self.e, self.one_es)?
            } else if q < 0.0 {
                -FRAC_PI_2
            } else {
                FRAC_PI_2
            }
        } else {
            let s = (self.c - phi * phi) / self.n2;
            if s.abs() <= 1.0 {
                s.asin()
            } else if s < 0.0 {
                -FRAC_PI_2
            } else {
                FRAC_PI_2
            }
        };
        Ok((x.atan2(y) / self.n, phi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::{GRS80, SPHERE, WGS84};
    use crate::proj::params::ProjParams;
    use crate::proj::Projection;
    use approx::assert_relative_eq;

    fn conus_albers() -> Projection {
        // NAD83 / Conus Albers (EPSG:5070) parameters on GRS80.
        let params = ProjParams {
            lon0: (-96.0_f64).to_radians(),
            lat0: 23.0_f64.to_radians(),
            lat1: Some(29.5_f64.to_radians()),
            lat2: Some(45.5_f64.to_radians()),
            ..ProjParams::default()
        };
        Projection::albers_equal_area(GRS80, &params).unwrap()
    }

    #[test]
    fn test_conus_reference_point() {
        let p = conus_albers();
        let (x, y) = p
            .forward((-75.0_f64).to_radians(), 35.0_f64.to_radians())
            .unwrap();
        assert_relative_eq!(x, 1_885_428.391, epsilon = 1e-2);
        assert_relative_eq!(y, 1_535_969.286, epsilon = 1e-2);
    }

    #[test]
    fn test_conus_roundtrip() {
        let p = conus_albers();
        let cases: &[(f64, f64)] = &[
            (-96.0, 23.0),  // origin
            (-96.0, 39.0),  // on central meridian
            (-74.0, 40.7),  // NYC
            (-87.6, 41.9),  // Chicago
            (-118.2, 34.0), // LA
            (-122.4, 37.8), // SF
        ];
        for &(lon_deg, lat_deg) in cases {
            let lon = lon_deg.to_radians();
            let lat = lat_deg.to_radians();
            let (x, y) = p.forward(lon, lat).unwrap();
            let (lon2, lat2) = p.inverse(x, y).unwrap();
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_origin_maps_to_false_origin() {
        let p = conus_albers();
        let (x, y) = p
            .forward((-96.0_f64).to_radians(), 23.0_f64.to_radians())
            .unwrap();
        assert_relative_eq!(x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_equal_parallels_collapse_to_one_parallel_cone() {
        // lat1 == lat2 must build and behave as the one-parallel cone.
        let params = ProjParams {
            lat0: 23.0_f64.to_radians(),
            lat1: Some(29.5_f64.to_radians()),
            lat2: Some(29.5_f64.to_radians()),
            ..ProjParams::default()
        };
        let p = Projection::albers_equal_area(WGS84, &params).unwrap();
        let lon = 5.0_f64.to_radians();
        let lat = 35.0_f64.to_radians();
        let (x, y) = p.forward(lon, lat).unwrap();
        let (lon2, lat2) = p.inverse(x, y).unwrap();
        assert_relative_eq!(lon2, lon, epsilon = 1e-9);
        assert_relative_eq!(lat2, lat, epsilon = 1e-9);

        // Omitting lat2 entirely is the same collapse.
        let single = ProjParams {
            lat2: None,
            ..params
        };
        let p2 = Projection::albers_equal_area(WGS84, &single).unwrap();
        let (x2, y2) = p2.forward(lon, lat).unwrap();
        assert_relative_eq!(x2, x);
        assert_relative_eq!(y2, y);
    }

    #[test]
    fn test_unordered_parallels_normalized() {
        let a = ProjParams {
            lat1: Some(29.5_f64.to_radians()),
            lat2: Some(45.5_f64.to_radians()),
            ..ProjParams::default()
        };
        let b = ProjParams {
            lat1: Some(45.5_f64.to_radians()),
            lat2: Some(29.5_f64.to_radians()),
            ..ProjParams::default()
        };
        let pa = Projection::albers_equal_area(WGS84, &a).unwrap();
        let pb = Projection::albers_equal_area(WGS84, &b).unwrap();
        let (xa, ya) = pa.forward(0.1, 0.6).unwrap();
        let (xb, yb) = pb.forward(0.1, 0.6).unwrap();
        assert_relative_eq!(xa, xb);
        assert_relative_eq!(ya, yb);
    }

    #[test]
    fn test_antipodal_parallels_rejected() {
        let params = ProjParams {
            lat1: Some(0.5),
            lat2: Some(-0.5),
            ..ProjParams::default()
        };
        assert!(matches!(
            Projection::albers_equal_area(WGS84, &params),
            Err(ProjError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_missing_parallels_rejected() {
        assert!(matches!(
            Projection::albers_equal_area(WGS84, &ProjParams::default()),
            Err(ProjError::InvalidParameter(_))
        ));
        // Both parallels on the equator leave the cone degenerate.
        let params = ProjParams {
            lat1: Some(0.0),
            lat2: Some(0.0),
            ..ProjParams::default()
        };
        assert!(matches!(
            Projection::albers_equal_area(WGS84, &params),
            Err(ProjError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_southern_cone() {
        // Southern-hemisphere parallels give a negative cone constant.
        let params = ProjParams {
            lon0: (-60.0_f64).to_radians(),
            lat0: (-32.0_f64).to_radians(),
            lat1: Some((-5.0_f64).to_radians()),
            lat2: Some((-42.0_f64).to_radians()),
            ..ProjParams::default()
        };
        let p = Projection::albers_equal_area(WGS84, &params).unwrap();
        for (lon_deg, lat_deg) in [(-70.0_f64, -33.0_f64), (-58.0, -34.6), (-65.0, -10.0)] {
            let lon = lon_deg.to_radians();
            let lat = lat_deg.to_radians();
            let (x, y) = p.forward(lon, lat).unwrap();
            let (lon2, lat2) = p.inverse(x, y).unwrap();
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_spherical_branch_roundtrip() {
        let params = ProjParams {
            lon0: (-96.0_f64).to_radians(),
            lat0: 23.0_f64.to_radians(),
            lat1: Some(29.5_f64.to_radians()),
            lat2: Some(45.5_f64.to_radians()),
            ..ProjParams::default()
        };
        let p = Projection::albers_equal_area(SPHERE, &params).unwrap();
        for (lon_deg, lat_deg) in [(-96.0_f64, 23.0_f64), (-80.0, 35.0), (-110.0, 45.0)] {
            let lon = lon_deg.to_radians();
            let lat = lat_deg.to_radians();
            let (x, y) = p.forward(lon, lat).unwrap();
            let (lon2, lat2) = p.inverse(x, y).unwrap();
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }
}
