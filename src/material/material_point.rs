use super::{MaterialSnapshot, StressUpdateError};
use russell_lab::{Matrix, Vector};

/// Specifies the interface between a material point and the (outer) structural solver
///
/// Strains are given in engineering notation (doubled shear) following the
/// reduced ordering `[xx, yy, xy, yz, zx, zz]` truncated to [MaterialPointTrait::order].
/// Stresses are returned as true components in the same ordering.
pub trait MaterialPointTrait: Send {
    /// Returns the number of strain (and stress) components
    fn order(&self) -> usize;

    /// Computes the response to a trial strain (relative to the last committed state)
    fn set_trial_strain(&mut self, strain: &[f64]) -> Result<(), StressUpdateError>;

    /// Returns the current strain (engineering shear)
    fn strain(&self) -> Vector;

    /// Returns the current stress
    fn stress(&self) -> Vector;

    /// Returns the current (consistent) tangent matrix
    fn tangent(&self) -> Matrix;

    /// Returns the elastic tangent matrix
    fn initial_tangent(&self) -> Matrix;

    /// Returns the current (trial) accumulated plastic strain ξ
    fn xi(&self) -> f64;

    /// Promotes the trial state to committed (once per accepted step)
    fn commit_state(&mut self);

    /// Discards the trial state, restoring the last committed state
    fn revert_to_last_commit(&mut self);

    /// Resets the material to its virgin state
    fn revert_to_start(&mut self);

    /// Returns the minimal committed data needed to resume an analysis
    fn snapshot(&self) -> MaterialSnapshot;

    /// Restores the committed state from a snapshot
    fn restore(&mut self, snapshot: &MaterialSnapshot);
}
