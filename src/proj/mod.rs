//! Projection kernels and the construction-time dispatch that selects them.
//!
//! A [`Kernel`] is the contract every projection family implements: forward
//! and inverse transforms of normalized coordinates, radians relative to the
//! central meridian on one side, linear distance on a unit semi-major-axis
//! ellipse on the other. The [`Projection`] wrapper owns exactly one kernel,
//! picked once at construction from the ellipsoid and the declared
//! parameters, plus the [`normalize::Normalizer`] that converts caller units.

pub mod albers_equal_area;
pub mod authalic;
pub mod common;
pub mod ellipsoid;
pub mod equirectangular;
pub mod lambert_azimuthal;
pub mod meridian;
pub mod normalize;
pub mod orthographic;
pub mod params;
pub mod selfcheck;
pub mod transverse_mercator;
pub mod variant;

use crate::error::ProjError;
use self::ellipsoid::Ellipsoid;
use self::normalize::Normalizer;
use self::params::ProjParams;

/// Contract for a projection family operating in normalized space.
///
/// Implementations are deterministic, side-effect-free functions of their
/// immutable construction state; any number of threads may call them
/// concurrently. `forward` takes (λ, φ) in radians with the central meridian
/// already removed and returns (x, y) as linear distance on the unit
/// ellipse; `inverse` is the reverse. Scale factor, semi-major axis and
/// false origin are the normalizer's business, never the kernel's.
pub trait Kernel: Send + Sync {
    /// Forward transform of normalized coordinates.
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64), ProjError>;

    /// Inverse transform back to normalized coordinates.
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError>;

    /// Documented round-trip tolerance in radians, inside the kernel's
    /// domain of validity. Tight by default; kernels with singular edges
    /// override with a relaxed bound.
    fn roundtrip_tolerance(&self) -> f64 {
        1e-9
    }
}

/// A fully constructed projection: one kernel, one normalizer, one
/// ellipsoid. Immutable after construction and safe to share.
pub struct Projection {
    kernel: Box<dyn Kernel>,
    normalizer: Normalizer,
    ellipsoid: Ellipsoid,
}

impl std::fmt::Debug for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Projection")
            .field("normalizer", &self.normalizer)
            .field("ellipsoid", &self.ellipsoid)
            .finish_non_exhaustive()
    }
}

impl Projection {
    fn assemble(kernel: Box<dyn Kernel>, ellipsoid: Ellipsoid, params: &ProjParams) -> Self {
        Self {
            kernel,
            normalizer: Normalizer::new(params, ellipsoid.a),
            ellipsoid,
        }
    }

    /// Transverse Mercator. Ellipsoidal input selects the Snyder series
    /// kernel over the meridian arc; a sphere selects the closed-form
    /// spherical kernel.
    pub fn transverse_mercator(
        ellipsoid: Ellipsoid,
        params: &ProjParams,
    ) -> Result<Self, ProjError> {
        params.validate()?;
        variant::reject_parallel_pair(params, "Transverse Mercator")?;
        let kernel: Box<dyn Kernel> = if ellipsoid.is_spherical() {
            Box::new(transverse_mercator::SphericalTransverseMercator::new(
                params.lat0,
            ))
        } else {
            Box::new(transverse_mercator::TransverseMercator::new(
                &ellipsoid,
                params.lat0,
            ))
        };
        Ok(Self::assemble(kernel, ellipsoid, params))
    }

    /// Transverse Mercator with the standard UTM parameters for a zone.
    pub fn utm_zone(zone: u8, north: bool) -> Result<Self, ProjError> {
        if !(1..=60).contains(&zone) {
            return Err(ProjError::InvalidParameter(format!(
                "UTM zone must be 1..=60, got {zone}"
            )));
        }
        let params = ProjParams {
            lon0: ((zone as f64 - 1.0) * 6.0 - 180.0 + 3.0).to_radians(),
            k0: 0.9996,
            false_easting: 500_000.0,
            false_northing: if north { 0.0 } else { 10_000_000.0 },
            ..ProjParams::default()
        };
        Self::transverse_mercator(ellipsoid::WGS84, &params)
    }

    /// Lambert Azimuthal Equal-Area. The geometric sub-variant (polar,
    /// equatorial, oblique) follows the latitude of origin; sphericity
    /// follows the ellipsoid.
    pub fn lambert_azimuthal_equal_area(
        ellipsoid: Ellipsoid,
        params: &ProjParams,
    ) -> Result<Self, ProjError> {
        params.validate()?;
        variant::reject_parallel_pair(params, "Lambert Azimuthal Equal-Area")?;
        let kernel: Box<dyn Kernel> = if ellipsoid.is_spherical() {
            Box::new(lambert_azimuthal::SphericalLambertAzimuthal::new(
                params.lat0,
            ))
        } else {
            Box::new(lambert_azimuthal::LambertAzimuthalEqualArea::new(
                &ellipsoid,
                params.lat0,
            ))
        };
        Ok(Self::assemble(kernel, ellipsoid, params))
    }

    /// Albers Equal-Area Conic. Requires at least one standard parallel;
    /// a missing second parallel, or an equal pair, collapses to the
    /// one-parallel special case.
    pub fn albers_equal_area(ellipsoid: Ellipsoid, params: &ProjParams) -> Result<Self, ProjError> {
        params.validate()?;
        let lat1 = params.lat1.ok_or_else(|| {
            ProjError::InvalidParameter(
                "Albers Equal-Area requires at least one standard parallel".to_string(),
            )
        })?;
        let (lat1, lat2) = variant::normalize_parallels(lat1, params.lat2.unwrap_or(lat1))?;
        let kernel = albers_equal_area::AlbersEqualArea::new(&ellipsoid, params.lat0, lat1, lat2)?;
        Ok(Self::assemble(Box::new(kernel), ellipsoid, params))
    }

    /// Orthographic. Defined for the sphere only; ellipsoidal parameters are
    /// rejected at construction rather than silently approximated.
    pub fn orthographic(ellipsoid: Ellipsoid, params: &ProjParams) -> Result<Self, ProjError> {
        params.validate()?;
        variant::reject_parallel_pair(params, "Orthographic")?;
        let kernel = orthographic::Orthographic::new(&ellipsoid, params.lat0)?;
        Ok(Self::assemble(Box::new(kernel), ellipsoid, params))
    }

    /// Equirectangular (Plate Carrée). Spherical formulas; an ellipsoidal
    /// input is accepted with a documented spherical approximation on the
    /// semi-major axis, logged as a warning at construction.
    pub fn equirectangular(ellipsoid: Ellipsoid, params: &ProjParams) -> Result<Self, ProjError> {
        params.validate()?;
        let kernel = equirectangular::Equirectangular::new(&ellipsoid, params)?;
        Ok(Self::assemble(Box::new(kernel), ellipsoid, params))
    }

    /// Forward transform: (longitude, latitude) in radians to (x, y) in the
    /// caller's linear unit.
    pub fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let (lam, phi) = self.normalizer.normalize_geographic(lon, lat);
        let (x, y) = self.kernel.forward(lam, phi)?;
        Ok(self.normalizer.denormalize_projected(x, y))
    }

    /// Inverse transform: (x, y) in the caller's linear unit to (longitude,
    /// latitude) in radians.
    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let (xn, yn) = self.normalizer.normalize_projected(x, y);
        let (lam, phi) = self.kernel.inverse(xn, yn)?;
        Ok(self.normalizer.denormalize_geographic(lam, phi))
    }

    /// Batch forward transform, in place.
    pub fn forward_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.forward(c.0, c.1)?;
        }
        Ok(())
    }

    /// Batch inverse transform, in place.
    pub fn inverse_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.inverse(c.0, c.1)?;
        }
        Ok(())
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// The selected kernel's documented round-trip tolerance in radians.
    pub fn roundtrip_tolerance(&self) -> f64 {
        self.kernel.roundtrip_tolerance()
    }
}
