use super::ParamJ2;

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns parameters for perfect plasticity: K = 1000, G = 500, σ0 = 10
    pub fn param_j2_perfect() -> ParamJ2 {
        ParamJ2::new_perfect(1000.0, 500.0, 10.0)
    }

    /// Returns parameters with linear hardening: K = 1000, G = 600 (E = 1500, ν = 0.25), σ0 = 9, H = 800
    pub fn param_j2_linear() -> ParamJ2 {
        ParamJ2 {
            bulk: 1000.0,
            shear: 600.0,
            sigma_0: 9.0,
            sigma_inf: 9.0,
            delta: 0.0,
            hh: 800.0,
            eta: 0.0,
        }
    }

    /// Returns parameters resembling a structural steel (MPa) with saturation and linear hardening
    pub fn param_j2_steel() -> ParamJ2 {
        ParamJ2 {
            bulk: 166_666.67,  // MPa
            shear: 76_923.08,  // MPa
            sigma_0: 250.0,    // MPa
            sigma_inf: 400.0,  // MPa
            delta: 20.0,       // -
            hh: 500.0,         // MPa
            eta: 0.0,          // MPa·s
        }
    }
}
