//! J2 plasticity material points for structural analysis
//!
//! This crate implements the constitutive core of a finite element code:
//! backward-Euler return mapping for isotropic-hardening J2 plasticity, a
//! plate-fiber wrapper enforcing σzz = 0, and the commit/revert lifecycle
//! required by an outer nonlinear (Newton-Raphson) solver.
//!
//! Strains cross the public boundary in engineering notation (doubled shear);
//! stresses are returned as true (tensor) components.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;

/// Makes available common structures needed to work with material points
pub mod prelude {
    pub use crate::base::*;
    pub use crate::material::*;
    pub use crate::StrError;
}
