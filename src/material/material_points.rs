use super::{J2PlateFiber, MaterialPointTrait, StressUpdateError};
use crate::base::{ParamJ2, Settings};
use crate::StrError;
use rayon::prelude::*;

/// Holds a set of independent material points (e.g., the integration points of a mesh)
///
/// Each point owns its state; thus the points can be updated in parallel
/// without synchronization.
pub struct MaterialPoints {
    pub all: Vec<Box<dyn MaterialPointTrait>>,
}

impl MaterialPoints {
    /// Allocates a set of plate fibers sharing the same parameters
    pub fn new_plate_fibers(param: &ParamJ2, settings: &Settings, n_point: usize) -> Result<Self, StrError> {
        let mut all: Vec<Box<dyn MaterialPointTrait>> = Vec::with_capacity(n_point);
        for _ in 0..n_point {
            all.push(Box::new(J2PlateFiber::new(param, settings)?));
        }
        Ok(MaterialPoints { all })
    }

    /// Computes the response of all points to their trial strains (in parallel)
    ///
    /// Returns the first error found (in point order); all points are updated regardless.
    /// One strain per point is required; otherwise no point is updated.
    pub fn set_trial_strains(&mut self, strains: &[Vec<f64>]) -> Result<(), StressUpdateError> {
        if strains.len() != self.all.len() {
            return Err(StressUpdateError::StrainDimension {
                expected: self.all.len(),
                found: strains.len(),
            });
        }
        let results: Vec<_> = self
            .all
            .par_iter_mut()
            .zip(strains.par_iter())
            .map(|(point, strain)| point.set_trial_strain(strain))
            .collect();
        results.into_iter().collect()
    }

    /// Commits the state of all points
    pub fn commit_all(&mut self) {
        self.all.par_iter_mut().for_each(|point| point.commit_state());
    }

    /// Reverts all points to their last committed state
    pub fn revert_all(&mut self) {
        self.all.par_iter_mut().for_each(|point| point.revert_to_last_commit());
    }

    /// Resets all points to their virgin state
    pub fn revert_all_to_start(&mut self) {
        self.all.par_iter_mut().for_each(|point| point.revert_to_start());
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::MaterialPoints;
    use crate::base::{SampleParams, Settings};
    use crate::material::{J2PlateFiber, MaterialPointTrait, StressUpdateError};

    #[test]
    fn parallel_update_matches_sequential_update() {
        let param = SampleParams::param_j2_steel();
        let settings = Settings::new();
        let n_point = 16;
        let mut points = MaterialPoints::new_plate_fibers(&param, &settings, n_point).unwrap();
        let strains: Vec<Vec<f64>> = (0..n_point)
            .map(|p| {
                let s = (p + 1) as f64 * 0.0005;
                vec![s, -0.5 * s, 0.3 * s, 0.0, 0.1 * s]
            })
            .collect();
        points.set_trial_strains(&strains).unwrap();
        points.commit_all();
        for p in 0..n_point {
            let mut single = J2PlateFiber::new(&param, &settings).unwrap();
            single.set_trial_strain(&strains[p]).unwrap();
            assert_eq!(points.all[p].stress().as_data(), single.stress().as_data());
            assert_eq!(points.all[p].snapshot().xi, single.xi());
        }

        // revert and reset
        points.set_trial_strains(&vec![vec![0.0; 5]; n_point]).unwrap();
        points.revert_all();
        assert_eq!(points.all[n_point - 1].xi(), points.all[n_point - 1].snapshot().xi);
        points.revert_all_to_start();
        assert!(points.all.iter().all(|p| p.xi() == 0.0));
    }

    #[test]
    fn wrong_number_of_strains_is_reported() {
        let param = SampleParams::param_j2_perfect();
        let settings = Settings::new();
        let mut points = MaterialPoints::new_plate_fibers(&param, &settings, 3).unwrap();
        assert_eq!(
            points.set_trial_strains(&vec![vec![0.02, 0.0, 0.0, 0.0, 0.0]; 2]).err(),
            Some(StressUpdateError::StrainDimension { expected: 3, found: 2 })
        );
        assert!(points.all.iter().all(|p| p.stress().as_data() == &[0.0; 5]));
    }
}
