use crate::StrError;
use russell_tensor::LinElasticity;
use serde::{Deserialize, Serialize};

/// Holds parameters for the J2 plasticity model with saturation and linear hardening
///
/// Elastic law:
///
/// ```text
/// σ = K tr(εe) I + 2 G dev(εe)
/// ```
///
/// Yield function and hardening:
///
/// ```text
/// φ(σ, ξ) = ‖dev(σ)‖ - √(2/3) q(ξ)
/// q(ξ) = σ∞ + (σ0 - σ∞) exp(-δ ξ) + H ξ
/// ```
///
/// Linear viscosity (η = 0 selects the rate-independent case):
///
/// ```text
/// γ = φ / η  (if φ > 0)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamJ2 {
    /// Bulk modulus K
    pub bulk: f64,

    /// Shear modulus G
    pub shear: f64,

    /// Initial yield stress σ0
    pub sigma_0: f64,

    /// Saturation yield stress σ∞
    pub sigma_inf: f64,

    /// Saturation rate δ
    pub delta: f64,

    /// Linear hardening coefficient H
    pub hh: f64,

    /// Viscosity η
    #[serde(default)]
    pub eta: f64,
}

impl ParamJ2 {
    /// Allocates parameters with perfect plasticity (no hardening, no viscosity)
    pub fn new_perfect(bulk: f64, shear: f64, sigma_0: f64) -> Self {
        ParamJ2 {
            bulk,
            shear,
            sigma_0,
            sigma_inf: sigma_0,
            delta: 0.0,
            hh: 0.0,
            eta: 0.0,
        }
    }

    /// Allocates parameters given Young's modulus and Poisson's coefficient
    ///
    /// The remaining parameters correspond to linear hardening only (σ∞ = σ0, δ = 0).
    pub fn from_young_poisson(young: f64, poisson: f64, sigma_0: f64, hh: f64) -> Result<Self, StrError> {
        if young <= 0.0 {
            return Err("Young's modulus must be > 0.0");
        }
        if poisson <= -1.0 || poisson >= 0.5 {
            return Err("Poisson's coefficient must be in (-1.0, 0.5)");
        }
        let elasticity = LinElasticity::new(young, poisson, false, false);
        let (bulk, shear) = elasticity.get_bulk_shear();
        let param = ParamJ2 {
            bulk,
            shear,
            sigma_0,
            sigma_inf: sigma_0,
            delta: 0.0,
            hh,
            eta: 0.0,
        };
        param.validate()?;
        Ok(param)
    }

    /// Reads parameters from a JSON string
    pub fn from_json(json: &str) -> Result<Self, StrError> {
        let param: ParamJ2 = serde_json::from_str(json).map_err(|_| "cannot parse J2 parameters from JSON")?;
        param.validate()?;
        Ok(param)
    }

    /// Checks that the parameters are physically admissible
    pub fn validate(&self) -> Result<(), StrError> {
        if !(self.bulk > 0.0) {
            return Err("bulk modulus must be > 0.0");
        }
        if !(self.shear > 0.0) {
            return Err("shear modulus must be > 0.0");
        }
        if !(self.sigma_0 > 0.0) {
            return Err("initial yield stress must be > 0.0");
        }
        if !(self.sigma_inf > 0.0) {
            return Err("saturation yield stress must be > 0.0");
        }
        if !(self.delta >= 0.0) {
            return Err("saturation rate must be ≥ 0.0");
        }
        if !(self.hh >= 0.0) {
            return Err("linear hardening coefficient must be ≥ 0.0");
        }
        if !(self.eta >= 0.0) {
            return Err("viscosity must be ≥ 0.0");
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
