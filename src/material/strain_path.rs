use super::{index_map, new_sym_tensor, MaterialPointTrait, StressUpdateError};
use crate::base::Settings;
use crate::StrError;

/// Holds the results at a committed point of a strain path
#[derive(Clone, Debug)]
pub struct PathPoint {
    /// Strain (engineering shear)
    pub strain: Vec<f64>,

    /// Stress
    pub stress: Vec<f64>,

    /// Accumulated plastic strain ξ
    pub xi: f64,

    /// Mean pressure invariant σm = ⅓ tr(σ)
    pub sigma_m: f64,

    /// Deviatoric stress (von Mises) invariant σd = √(3/2) ‖dev(σ)‖
    pub sigma_d: f64,

    /// Number of step halvings needed to reach this point
    pub n_cutbacks: usize,
}

/// Holds a sequence of strains driving a single material point
///
/// Each increment is applied as one trial strain followed by a commit. If the
/// material reports a recoverable (convergence) failure, the trial state is
/// reverted and the remaining increment is halved.
pub struct StrainPath {
    /// Number of strain components
    order: usize,

    /// Strain path (engineering shear)
    pub strains: Vec<Vec<f64>>,
}

impl PathPoint {
    /// Allocates a new instance from the current (committed) state of a material point
    fn new(model: &dyn MaterialPointTrait, n_cutbacks: usize) -> Self {
        let stress = model.stress().as_data().clone();
        let mut sigma = new_sym_tensor();
        for m in 0..stress.len() {
            let (i, j) = index_map(m);
            sigma.sym_set(i, j, stress[m]);
        }
        PathPoint {
            strain: model.strain().as_data().clone(),
            stress,
            xi: model.xi(),
            sigma_m: sigma.invariant_sigma_m(),
            sigma_d: sigma.invariant_sigma_d(),
            n_cutbacks,
        }
    }
}

impl StrainPath {
    /// Allocates an empty path
    pub fn new(order: usize) -> Result<Self, StrError> {
        if order < 1 || order > 6 {
            return Err("order must be in [1, 6]");
        }
        Ok(StrainPath {
            order,
            strains: Vec::new(),
        })
    }

    /// Allocates a path with equal increments from `start` to `end`
    pub fn new_linear(start: &[f64], end: &[f64], n_increments: usize) -> Result<Self, StrError> {
        if start.len() != end.len() {
            return Err("start and end strains must have the same dimension");
        }
        if n_increments < 1 {
            return Err("the number of increments must be ≥ 1");
        }
        let mut path = StrainPath::new(start.len())?;
        for k in 0..(n_increments + 1) {
            let alpha = k as f64 / n_increments as f64;
            let strain: Vec<_> = start.iter().zip(end).map(|(a, b)| a + alpha * (b - a)).collect();
            path.push_strain(&strain)?;
        }
        Ok(path)
    }

    /// Pushes a new strain to the path
    pub fn push_strain(&mut self, strain: &[f64]) -> Result<&mut Self, StrError> {
        if strain.len() != self.order {
            return Err("strain has an incorrect number of components");
        }
        self.strains.push(strain.to_vec());
        Ok(self)
    }

    /// Drives a material point through the path
    ///
    /// The path starts from the committed strain of the material point; any
    /// pending trial state is discarded first. Returns one [PathPoint] per
    /// strain of the path.
    pub fn follow_strain(
        &self,
        model: &mut dyn MaterialPointTrait,
        settings: &Settings,
    ) -> Result<Vec<PathPoint>, StressUpdateError> {
        if model.order() != self.order {
            return Err(StressUpdateError::StrainDimension {
                expected: model.order(),
                found: self.order,
            });
        }
        model.revert_to_last_commit();
        let mut previous = model.strain().as_data().clone();
        let mut results = Vec::with_capacity(self.strains.len());
        for (step, target) in self.strains.iter().enumerate() {
            let mut reached = 0.0; // fraction of the increment already committed
            let mut size = 1.0;
            let mut n_cutbacks = 0;
            let mut strain = vec![0.0; self.order];
            while reached < 1.0 {
                let next = f64::min(reached + size, 1.0);
                for m in 0..self.order {
                    strain[m] = previous[m] + next * (target[m] - previous[m]);
                }
                match model.set_trial_strain(&strain) {
                    Ok(()) => {
                        model.commit_state();
                        reached = next;
                    }
                    Err(err) if err.is_recoverable() && n_cutbacks < settings.n_max_cutbacks => {
                        model.revert_to_last_commit();
                        n_cutbacks += 1;
                        size *= 0.5;
                        log::warn!("step {}: {}; halving the increment (cutback {})", step, err, n_cutbacks);
                    }
                    Err(err) => {
                        model.revert_to_last_commit();
                        log::warn!("step {}: {}; giving up", step, err);
                        return Err(err);
                    }
                }
            }
            previous.copy_from_slice(target);
            results.push(PathPoint::new(model, n_cutbacks));
        }
        Ok(results)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
