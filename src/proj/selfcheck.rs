//! Round-trip verification for test and validation builds.
//!
//! Production transforms never pay for a doubled evaluation; the checks here
//! are invoked explicitly by the test suite (or a caller doing a one-off
//! validation pass), not wired into the call path.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::ProjError;
use crate::proj::Projection;

/// Longitude is meaningless this close to a pole and is exempt from the
/// round-trip comparison there.
const POLE_EXEMPTION: f64 = 1e-6;

/// Forward then invert one point, returning the angular discrepancy in
/// radians: the larger of the latitude error and the rolled longitude error.
pub fn roundtrip_error(proj: &Projection, lon: f64, lat: f64) -> Result<f64, ProjError> {
    let (x, y) = proj.forward(lon, lat)?;
    let (lon2, lat2) = proj.inverse(x, y)?;
    let dlat = (lat2 - lat).abs();
    if (lat.abs() - FRAC_PI_2).abs() < POLE_EXEMPTION {
        return Ok(dlat);
    }
    let mut dlon = (lon2 - lon).abs() % (2.0 * PI);
    if dlon > PI {
        dlon = 2.0 * PI - dlon;
    }
    Ok(dlat.max(dlon))
}

/// Sweep a lon/lat grid and return the worst round-trip discrepancy.
///
/// Points the kernel reports as outside its domain of validity are skipped;
/// a grid meant to probe a kernel should stay strictly inside the domain,
/// but edges are allowed to brush it. Every other error propagates.
pub fn verify_grid(
    proj: &Projection,
    lon_range: (f64, f64),
    lat_range: (f64, f64),
    steps: usize,
) -> Result<f64, ProjError> {
    let mut worst = 0.0_f64;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let lon = lon_range.0 + t * (lon_range.1 - lon_range.0);
        for j in 0..=steps {
            let u = j as f64 / steps as f64;
            let lat = lat_range.0 + u * (lat_range.1 - lat_range.0);
            match roundtrip_error(proj, lon, lat) {
                Ok(err) => worst = worst.max(err),
                Err(ProjError::OutsideDomain(_)) => {}
                Err(other) => return Err(other),
            }
        }
    }
    Ok(worst)
}
