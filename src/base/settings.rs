use super::{DEFAULT_N_MAX_CUTBACKS, DEFAULT_N_MAX_IT_PLANE_STRESS, DEFAULT_N_MAX_IT_YIELD};
use super::{DEFAULT_TOL_PLANE_STRESS, DEFAULT_TOL_YIELD};
use crate::StrError;
use std::fmt;

/// Holds options for the local (material point) stress-update algorithms
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    /// Tolerance for the plastic multiplier residual (multiplied by σ0)
    pub tol_yield: f64,

    /// Maximum number of iterations to compute the plastic multiplier
    pub n_max_it_yield: usize,

    /// Tolerance for |σzz| in the plate-fiber (plane-stress) iterations
    pub tol_plane_stress: f64,

    /// Maximum number of iterations to enforce plane-stress
    pub n_max_it_plane_stress: usize,

    /// Time increment Δt used by the viscous term η/Δt
    pub dt: f64,

    /// Maximum number of step halvings when following a strain path
    pub n_max_cutbacks: usize,
}

impl Settings {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Settings {
            tol_yield: DEFAULT_TOL_YIELD,
            n_max_it_yield: DEFAULT_N_MAX_IT_YIELD,
            tol_plane_stress: DEFAULT_TOL_PLANE_STRESS,
            n_max_it_plane_stress: DEFAULT_N_MAX_IT_PLANE_STRESS,
            dt: 1.0,
            n_max_cutbacks: DEFAULT_N_MAX_CUTBACKS,
        }
    }

    /// Sets the tolerance for the plastic multiplier residual
    pub fn set_tol_yield(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0) {
            return Err("tol_yield must be > 0.0");
        }
        self.tol_yield = value;
        Ok(self)
    }

    /// Sets the maximum number of iterations to compute the plastic multiplier
    pub fn set_n_max_it_yield(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("n_max_it_yield must be ≥ 1");
        }
        self.n_max_it_yield = value;
        Ok(self)
    }

    /// Sets the tolerance for the out-of-plane stress
    pub fn set_tol_plane_stress(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0) {
            return Err("tol_plane_stress must be > 0.0");
        }
        self.tol_plane_stress = value;
        Ok(self)
    }

    /// Sets the maximum number of iterations to enforce plane-stress
    pub fn set_n_max_it_plane_stress(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("n_max_it_plane_stress must be ≥ 1");
        }
        self.n_max_it_plane_stress = value;
        Ok(self)
    }

    /// Sets the time increment used by the viscous term
    pub fn set_dt(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0) {
            return Err("dt must be > 0.0");
        }
        self.dt = value;
        Ok(self)
    }

    /// Sets the maximum number of step halvings when following a strain path
    pub fn set_n_max_cutbacks(&mut self, value: usize) -> Result<&mut Self, StrError> {
        self.n_max_cutbacks = value;
        Ok(self)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Settings")?;
        writeln!(f, "========")?;
        writeln!(f, "tol_yield = {:?}", self.tol_yield)?;
        writeln!(f, "n_max_it_yield = {:?}", self.n_max_it_yield)?;
        writeln!(f, "tol_plane_stress = {:?}", self.tol_plane_stress)?;
        writeln!(f, "n_max_it_plane_stress = {:?}", self.n_max_it_plane_stress)?;
        writeln!(f, "dt = {:?}", self.dt)?;
        write!(f, "n_max_cutbacks = {:?}", self.n_max_cutbacks)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
