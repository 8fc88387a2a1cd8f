use thiserror::Error;

/// Errors raised by projection construction and evaluation.
///
/// The three variants are deliberately distinguishable by the caller:
/// construction-time parameter problems, call-time domain-of-validity
/// violations, and call-time iteration failures. None of them is used for
/// ordinary control flow.
#[derive(Error, Debug)]
pub enum ProjError {
    /// Invalid, missing, or inconsistent parameter at construction time.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input point outside the mathematically valid region of the kernel.
    /// Never silently clamped or approximated away.
    #[error("Point outside projection domain: {0}")]
    OutsideDomain(String),

    /// A bounded iteration failed to reach its tolerance. Fatal for the
    /// coordinate in question; recurring failures indicate a series or
    /// coefficient bug rather than a transient condition.
    #[error("No convergence after {0} iterations")]
    NoConvergence(u32),
}
