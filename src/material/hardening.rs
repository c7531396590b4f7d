use crate::base::ParamJ2;

/// Specifies the isotropic hardening law q(ξ) driving the size of the yield surface
pub trait HardeningLaw: Send + Sync {
    /// Returns the yield stress q(ξ) for the accumulated plastic strain ξ
    fn q(&self, xi: f64) -> f64;

    /// Returns the derivative dq/dξ
    fn dq_dxi(&self, xi: f64) -> f64;
}

/// Implements saturation (exponential) plus linear isotropic hardening
///
/// ```text
/// q(ξ) = σ∞ + (σ0 - σ∞) exp(-δ ξ) + H ξ
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SaturationHardening {
    /// Initial yield stress σ0
    pub sigma_0: f64,

    /// Saturation yield stress σ∞
    pub sigma_inf: f64,

    /// Saturation rate δ
    pub delta: f64,

    /// Linear hardening coefficient H
    pub hh: f64,
}

impl SaturationHardening {
    /// Allocates a new instance
    pub fn new(param: &ParamJ2) -> Self {
        SaturationHardening {
            sigma_0: param.sigma_0,
            sigma_inf: param.sigma_inf,
            delta: param.delta,
            hh: param.hh,
        }
    }
}

impl HardeningLaw for SaturationHardening {
    fn q(&self, xi: f64) -> f64 {
        self.sigma_inf + (self.sigma_0 - self.sigma_inf) * f64::exp(-self.delta * xi) + self.hh * xi
    }

    fn dq_dxi(&self, xi: f64) -> f64 {
        -self.delta * (self.sigma_0 - self.sigma_inf) * f64::exp(-self.delta * xi) + self.hh
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
