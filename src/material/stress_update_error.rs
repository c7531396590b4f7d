use thiserror::Error;

/// Identifies the local Newton loop that failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewtonLoop {
    /// Scalar iteration on the plastic multiplier γ
    PlasticMultiplier,

    /// Iteration on εzz enforcing σzz = 0
    PlaneStress,
}

/// Defines the non-fatal errors reported by the stress-update algorithms
///
/// The committed state of the material is never modified when these errors are
/// returned; the outer solver may revert and retry with a smaller increment.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum StressUpdateError {
    /// A local Newton loop exhausted its iteration budget
    #[error("{stage:?} iterations did not converge after {iterations} iterations (residual = {residual:e})")]
    Convergence {
        stage: NewtonLoop,
        iterations: usize,
        residual: f64,
    },

    /// A denominator or derivative required by the algorithm is zero or has the wrong sign
    #[error("degenerate material state: {0}")]
    DegenerateState(&'static str),

    /// The strain vector does not have the number of components expected by the material
    #[error("strain vector must have {expected} components (found {found})")]
    StrainDimension { expected: usize, found: usize },
}

impl StressUpdateError {
    /// Indicates that retrying with a smaller strain increment may succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StressUpdateError::Convergence { .. })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
