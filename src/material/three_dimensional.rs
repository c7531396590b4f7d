use super::{components_from_tensor, engineering_from_strain_tensor, strain_tensor_from_engineering};
use super::{J2Plasticity, MaterialPointTrait, MaterialSnapshot, MaterialStateStore, StressUpdateError};
use super::{Tensor4Full, FULL_ORDER, MANDEL};
use crate::base::{ParamJ2, Settings};
use crate::StrError;
use russell_lab::{Matrix, Vector};
use russell_tensor::Tensor4;

/// Implements a J2 plasticity material point under a general 3D strain state
///
/// Strains are exchanged in the following format (note the doubled shear):
///
/// ```text
/// strain = { εxx, εyy, 2 εxy, 2 εyz, 2 εzx, εzz }
/// ```
pub struct J2ThreeDimensional {
    /// Return-mapping algorithm
    kernel: J2Plasticity,

    /// Committed and trial states
    store: MaterialStateStore,

    /// Current consistent tangent
    dd: Tensor4,

    /// Consistent tangent at the last commit
    committed_dd: Tensor4,
}

impl J2ThreeDimensional {
    /// Allocates a new instance
    pub fn new(param: &ParamJ2, settings: &Settings) -> Result<Self, StrError> {
        let kernel = J2Plasticity::new(param, settings)?;
        let mut dd = Tensor4::new(MANDEL);
        dd.set_tensor(1.0, kernel.initial_tangent());
        let mut committed_dd = Tensor4::new(MANDEL);
        committed_dd.set_tensor(1.0, kernel.initial_tangent());
        Ok(J2ThreeDimensional {
            kernel,
            store: MaterialStateStore::new(),
            dd,
            committed_dd,
        })
    }

    /// Returns an access to the committed and trial states
    pub fn state(&self) -> &MaterialStateStore {
        &self.store
    }
}

impl MaterialPointTrait for J2ThreeDimensional {
    fn order(&self) -> usize {
        FULL_ORDER
    }

    fn set_trial_strain(&mut self, strain: &[f64]) -> Result<(), StressUpdateError> {
        if strain.len() != FULL_ORDER {
            return Err(StressUpdateError::StrainDimension {
                expected: FULL_ORDER,
                found: strain.len(),
            });
        }
        let (committed, trial) = self.store.split_mut();
        strain_tensor_from_engineering(&mut trial.strain, strain, 0.0);
        self.kernel
            .integrate(&mut trial.stress, &mut self.dd, &mut trial.hardening, &trial.strain, committed)?;
        Ok(())
    }

    fn strain(&self) -> Vector {
        Vector::from(&engineering_from_strain_tensor(&self.store.trial().strain, FULL_ORDER))
    }

    fn stress(&self) -> Vector {
        Vector::from(&components_from_tensor(&self.store.trial().stress, FULL_ORDER))
    }

    fn tangent(&self) -> Matrix {
        Tensor4Full::from_tensor4(&self.dd).as_reduced_matrix(FULL_ORDER)
    }

    fn initial_tangent(&self) -> Matrix {
        Tensor4Full::from_tensor4(self.kernel.initial_tangent()).as_reduced_matrix(FULL_ORDER)
    }

    fn xi(&self) -> f64 {
        self.store.trial().hardening.xi
    }

    fn commit_state(&mut self) {
        self.store.commit();
        self.committed_dd.set_tensor(1.0, &self.dd);
    }

    fn revert_to_last_commit(&mut self) {
        self.store.revert_to_last_commit();
        self.dd.set_tensor(1.0, &self.committed_dd);
    }

    fn revert_to_start(&mut self) {
        self.store.revert_to_start();
        self.dd.set_tensor(1.0, self.kernel.initial_tangent());
        self.committed_dd.set_tensor(1.0, self.kernel.initial_tangent());
    }

    fn snapshot(&self) -> MaterialSnapshot {
        self.store.snapshot()
    }

    fn restore(&mut self, snapshot: &MaterialSnapshot) {
        self.store.restore(snapshot);
        self.dd.set_tensor(1.0, self.kernel.initial_tangent());
        self.committed_dd.set_tensor(1.0, self.kernel.initial_tangent());
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::J2ThreeDimensional;
    use crate::base::{SampleParams, Settings};
    use crate::material::{J2PlateFiber, MaterialPointTrait, StressUpdateError};
    use russell_lab::approx_eq;

    #[test]
    fn wrong_strain_dimension_is_reported() {
        let param = SampleParams::param_j2_perfect();
        let mut model = J2ThreeDimensional::new(&param, &Settings::new()).unwrap();
        assert_eq!(
            model.set_trial_strain(&[0.0; 5]).err(),
            Some(StressUpdateError::StrainDimension { expected: 6, found: 5 })
        );
    }

    #[test]
    fn uniaxial_strain_works() {
        // K = 1000, G = 500, σ0 = 10: σxx = K ε + 2σ0/3 and σyy = σzz = K ε - σ0/3
        let param = SampleParams::param_j2_perfect();
        let mut model = J2ThreeDimensional::new(&param, &Settings::new()).unwrap();
        model.set_trial_strain(&[0.02, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let sig = model.stress();
        assert_eq!(sig.dim(), 6);
        approx_eq(sig[0], 20.0 + 20.0 / 3.0, 1e-10);
        approx_eq(sig[1], 20.0 - 10.0 / 3.0, 1e-10);
        approx_eq(sig[5], 20.0 - 10.0 / 3.0, 1e-10);
        let dd = model.tangent();
        for i in 0..6 {
            for j in 0..6 {
                approx_eq(dd.get(i, j), dd.get(j, i), 1e-10);
            }
        }
        let eps = model.strain();
        assert_eq!(eps.as_data(), &[0.02, 0.0, 0.0, 0.0, 0.0, 0.0]);
        model.commit_state();
        assert!(model.state().committed().hardening.xi > 0.0);
        model.revert_to_start();
        assert_eq!(model.xi(), 0.0);
    }

    #[test]
    fn revert_restores_the_committed_tangent() {
        let param = SampleParams::param_j2_perfect();
        let mut model = J2ThreeDimensional::new(&param, &Settings::new()).unwrap();
        let elastic = model.initial_tangent();
        model.set_trial_strain(&[0.02, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let plastic = model.tangent();
        assert_ne!(plastic.as_data(), elastic.as_data());
        model.revert_to_last_commit();
        assert_eq!(model.tangent().as_data(), elastic.as_data());

        model.set_trial_strain(&[0.02, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        model.commit_state();
        model.set_trial_strain(&[0.019, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        model.revert_to_last_commit();
        assert_eq!(model.tangent().as_data(), plastic.as_data());
    }

    #[test]
    fn agrees_with_plate_fiber_when_out_of_plane_strain_is_given() {
        let param = SampleParams::param_j2_steel();
        let settings = Settings::new();
        let mut fiber = J2PlateFiber::new(&param, &settings).unwrap();
        let mut solid = J2ThreeDimensional::new(&param, &settings).unwrap();
        let strain = [0.003, -0.001, 0.002, 0.0005, -0.0004];
        fiber.set_trial_strain(&strain).unwrap();
        let full = [strain[0], strain[1], strain[2], strain[3], strain[4], fiber.eps_zz()];
        solid.set_trial_strain(&full).unwrap();
        let sig_fiber = fiber.stress();
        let sig_solid = solid.stress();
        for m in 0..5 {
            approx_eq(sig_fiber[m], sig_solid[m], 1e-6);
        }
        approx_eq(sig_solid[5], 0.0, 1e-6);
        approx_eq(fiber.xi(), solid.xi(), 1e-12);
    }
}
