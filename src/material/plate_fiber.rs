use super::{components_from_tensor, engineering_from_strain_tensor, index_map, strain_tensor_from_engineering};
use super::{new_sym_tensor, J2Plasticity, MaterialPointTrait, MaterialSnapshot, MaterialStateStore, NewtonLoop};
use super::{StressUpdateError, Tensor4Full, MANDEL, PLATE_FIBER_ORDER};
use crate::base::{ParamJ2, Settings};
use crate::StrError;
use russell_lab::{Matrix, Vector};
use russell_tensor::{Tensor2, Tensor4};

/// Implements a J2 plasticity plate fiber (σzz = 0)
///
/// The in-plane and transverse shear strains are given; the out-of-plane
/// normal strain εzz is found by Newton iterations enforcing σzz = 0:
///
/// ```text
/// εzz ← εzz - σzz / D[z][z][z][z]
/// ```
///
/// Strains are exchanged in the following format (note the doubled shear):
///
/// ```text
/// strain = { εxx, εyy, 2 εxy, 2 εyz, 2 εzx }
/// ```
pub struct J2PlateFiber {
    /// Return-mapping algorithm
    kernel: J2Plasticity,

    /// Committed and trial states
    store: MaterialStateStore,

    /// Current 3D consistent tangent (before condensation)
    dd: Tensor4,

    /// Current (condensed) consistent tangent
    tangent: Tensor4Full,

    /// Condensed tangent at the last committed state
    committed_tangent: Tensor4Full,

    /// Tolerance for |σzz|
    tol_plane_stress: f64,

    /// Maximum number of plane-stress iterations
    n_max_it: usize,
}

/// Statically condenses the tangent against the (2, 2) component
///
/// ```text
/// T[i][j][k][l] -= T[i][j][2][2] T[2][2][k][l] / T[2][2][2][2]
/// ```
///
/// for all in-plane (i, j) and (k, l) pairs of the plate-fiber ordering.
fn condense_plane_stress(tangent: &mut Tensor4Full) -> Result<(), StressUpdateError> {
    let d = tangent.get(2, 2, 2, 2);
    if !(d > 0.0) {
        return Err(StressUpdateError::DegenerateState("out-of-plane stiffness is non-positive"));
    }
    for m in 0..PLATE_FIBER_ORDER {
        let (i, j) = index_map(m);
        for n in 0..PLATE_FIBER_ORDER {
            let (k, l) = index_map(n);
            let value = tangent.get(i, j, k, l) - tangent.get(i, j, 2, 2) * tangent.get(2, 2, k, l) / d;
            tangent.set_minor_sym(i, j, k, l, value);
        }
    }
    Ok(())
}

/// Returns the condensed (plane-stress) elastic modulus
fn condensed_elastic_tangent(kernel: &J2Plasticity) -> Tensor4Full {
    let mut dde = Tensor4Full::from_tensor4(kernel.initial_tangent());
    // D[z][z][z][z] = K + 4G/3 is positive for validated moduli
    let _ = condense_plane_stress(&mut dde);
    dde
}

impl J2PlateFiber {
    /// Allocates a new instance
    pub fn new(param: &ParamJ2, settings: &Settings) -> Result<Self, StrError> {
        let kernel = J2Plasticity::new(param, settings)?;
        let tangent = condensed_elastic_tangent(&kernel);
        Ok(J2PlateFiber {
            kernel,
            store: MaterialStateStore::new(),
            dd: Tensor4::new(MANDEL),
            tangent,
            committed_tangent: tangent,
            tol_plane_stress: settings.tol_plane_stress,
            n_max_it: settings.n_max_it_plane_stress,
        })
    }

    /// Returns an access to the committed and trial states
    pub fn state(&self) -> &MaterialStateStore {
        &self.store
    }

    /// Returns an access to the return-mapping algorithm
    pub fn kernel(&self) -> &J2Plasticity {
        &self.kernel
    }

    /// Returns the full (trial) stress tensor
    pub fn stress_tensor(&self) -> &Tensor2 {
        &self.store.trial().stress
    }

    /// Returns the (trial) out-of-plane strain εzz
    pub fn eps_zz(&self) -> f64 {
        self.store.trial().eps_zz()
    }

    /// Computes the stress and tangent for the given in-plane strains
    ///
    /// The committed εzz is the initial guess of the plane-stress iterations.
    /// On failure, the trial state holds the last iterate and the committed
    /// state is untouched.
    pub fn update(&mut self, strain: &[f64]) -> Result<(), StressUpdateError> {
        if strain.len() != PLATE_FIBER_ORDER {
            return Err(StressUpdateError::StrainDimension {
                expected: PLATE_FIBER_ORDER,
                found: strain.len(),
            });
        }

        // full strain tensor with the committed εzz as the initial guess
        let mut epsilon = new_sym_tensor();
        strain_tensor_from_engineering(&mut epsilon, strain, self.store.committed().eps_zz());

        // enforce σzz = 0 by solving for εzz
        let (committed, trial) = self.store.split_mut();
        let mut iterations = 0;
        let mut converged = false;
        let mut sigma_zz;
        loop {
            let res = self
                .kernel
                .integrate(&mut trial.stress, &mut self.dd, &mut trial.hardening, &epsilon, committed);
            if let Err(err) = res {
                trial.strain = epsilon;
                return Err(err);
            }
            sigma_zz = trial.stress.get(2, 2);
            if f64::abs(sigma_zz) <= self.tol_plane_stress {
                converged = true;
                break;
            }
            if iterations == self.n_max_it {
                break;
            }
            let d = self.dd.get(2, 2, 2, 2);
            if !(d > 0.0) {
                trial.strain = epsilon;
                return Err(StressUpdateError::DegenerateState("out-of-plane stiffness is non-positive"));
            }
            epsilon.sym_set(2, 2, epsilon.get(2, 2) - sigma_zz / d);
            iterations += 1;
        }
        trial.strain = epsilon;

        // modify the tangent for plane-stress
        self.tangent.set_tensor4(&self.dd);
        condense_plane_stress(&mut self.tangent)?;

        if !converged {
            log::warn!(
                "plane-stress condition did not converge after {} iterations (σzz = {:e})",
                self.n_max_it,
                sigma_zz
            );
            return Err(StressUpdateError::Convergence {
                stage: NewtonLoop::PlaneStress,
                iterations: self.n_max_it,
                residual: sigma_zz,
            });
        }
        log::debug!("plane-stress converged after {} iterations", iterations);
        Ok(())
    }
}

impl MaterialPointTrait for J2PlateFiber {
    fn order(&self) -> usize {
        PLATE_FIBER_ORDER
    }

    fn set_trial_strain(&mut self, strain: &[f64]) -> Result<(), StressUpdateError> {
        self.update(strain)
    }

    fn strain(&self) -> Vector {
        Vector::from(&engineering_from_strain_tensor(&self.store.trial().strain, PLATE_FIBER_ORDER))
    }

    fn stress(&self) -> Vector {
        Vector::from(&components_from_tensor(&self.store.trial().stress, PLATE_FIBER_ORDER))
    }

    fn tangent(&self) -> Matrix {
        self.tangent.as_reduced_matrix(PLATE_FIBER_ORDER)
    }

    /// Returns the plane-stress (condensed) elastic tangent
    fn initial_tangent(&self) -> Matrix {
        condensed_elastic_tangent(&self.kernel).as_reduced_matrix(PLATE_FIBER_ORDER)
    }

    fn xi(&self) -> f64 {
        self.store.trial().hardening.xi
    }

    fn commit_state(&mut self) {
        self.store.commit();
        self.committed_tangent = self.tangent;
    }

    fn revert_to_last_commit(&mut self) {
        self.store.revert_to_last_commit();
        self.tangent = self.committed_tangent;
    }

    fn revert_to_start(&mut self) {
        self.store.revert_to_start();
        self.tangent = condensed_elastic_tangent(&self.kernel);
        self.committed_tangent = self.tangent;
    }

    fn snapshot(&self) -> MaterialSnapshot {
        self.store.snapshot()
    }

    /// Restores the committed state; the tangent is reset to the elastic one
    fn restore(&mut self, snapshot: &MaterialSnapshot) {
        self.store.restore(snapshot);
        self.tangent = condensed_elastic_tangent(&self.kernel);
        self.committed_tangent = self.tangent;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
