//! Map projection kernels with a shared numeric core.
//!
//! The crate is organised around one contract: a [`proj::Kernel`] transforms
//! normalized coordinates (radians relative to the central meridian in, unit
//! semi-major-axis distance out), and a [`proj::Projection`] wraps a kernel
//! with the affine pre/post processing that converts caller units. All
//! kernel selection happens once, at construction; transforms are pure and
//! safe to share across threads.

pub mod error;
pub mod proj;

pub use error::ProjError;
pub use proj::ellipsoid::Ellipsoid;
pub use proj::params::ProjParams;
pub use proj::Projection;
