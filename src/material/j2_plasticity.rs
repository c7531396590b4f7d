use super::{new_sym_tensor, HardeningLaw, HardeningState, NewtonLoop, SaturationHardening, StressUpdateError};
use crate::base::{ParamJ2, Settings, TWO_BY_3};
use crate::StrError;
use russell_tensor::{t2_add, t4_ddot_t2_update, LinElasticity, Tensor2, Tensor4};
use russell_tensor::{IDENTITY2, P_SYMDEV, SQRT_2_BY_3};

/// Defines an alias to IDENTITY2
const I: &[f64; 9] = &IDENTITY2;

/// Defines an alias to P_SYMDEV
const PSD: &[[f64; 9]; 9] = &P_SYMDEV;

/// Holds auxiliary results of the return mapping
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReturnMapping {
    /// Indicates an elastoplastic (loading) step
    pub loading: bool,

    /// Plastic multiplier γ
    pub gamma: f64,

    /// Trial value of the yield function φ
    pub phi_trial: f64,

    /// Number of iterations used to compute γ
    pub iterations: usize,
}

/// Implements the backward-Euler return mapping for isotropic hardening J2 plasticity
///
/// Elastic law:
///
/// ```text
/// σ = K tr(ε) I + 2 G (dev(ε) - εp)
/// ```
///
/// Yield function:
///
/// ```text
/// φ(σ, ξ) = ‖dev(σ)‖ - √(2/3) q(ξ)
/// ```
///
/// Flow rules and linear viscosity:
///
/// ```text
/// dεp/dt = γ n,   n = dev(σ) / ‖dev(σ)‖
/// dξ/dt  = √(2/3) γ
/// γ = φ / η   (if φ > 0; η = 0 renders the rate-independent case)
/// ```
///
/// The yield condition is enforced at the end of the step by solving for γ:
///
/// ```text
/// r(γ) = ‖τ‖ - 2 G γ - √(2/3) q(ξn + √(2/3) γ) - (η/Δt) γ = 0
/// ```
///
/// where `τ = 2 G (dev(ε) - εp_n)` is the trial deviatoric stress.
pub struct J2Plasticity<H: HardeningLaw = SaturationHardening> {
    /// Linear elasticity
    lin_elasticity: LinElasticity,

    /// Bulk modulus K
    bulk: f64,

    /// Shear modulus G
    shear: f64,

    /// Viscosity η
    eta: f64,

    /// Hardening law q(ξ)
    hardening: H,

    /// Absolute tolerance for the residual r(γ)
    tolerance: f64,

    /// Maximum number of iterations to compute γ
    n_max_it: usize,

    /// Time increment Δt
    dt: f64,
}

impl J2Plasticity<SaturationHardening> {
    /// Allocates a new instance with saturation plus linear hardening
    pub fn new(param: &ParamJ2, settings: &Settings) -> Result<Self, StrError> {
        param.validate()?;
        J2Plasticity::with_hardening(
            param.bulk,
            param.shear,
            param.eta,
            SaturationHardening::new(param),
            settings,
        )
    }
}

impl<H: HardeningLaw> J2Plasticity<H> {
    /// Allocates a new instance with a custom hardening law
    pub fn with_hardening(bulk: f64, shear: f64, eta: f64, hardening: H, settings: &Settings) -> Result<Self, StrError> {
        if !(bulk > 0.0) {
            return Err("bulk modulus must be > 0.0");
        }
        if !(shear > 0.0) {
            return Err("shear modulus must be > 0.0");
        }
        if !(eta >= 0.0) {
            return Err("viscosity must be ≥ 0.0");
        }
        let q0 = hardening.q(0.0);
        if !(q0 > 0.0) {
            return Err("initial yield stress q(0) must be > 0.0");
        }
        if !(settings.dt > 0.0) {
            return Err("dt must be > 0.0");
        }
        let young = 9.0 * bulk * shear / (3.0 * bulk + shear);
        let poisson = (3.0 * bulk - 2.0 * shear) / (2.0 * (3.0 * bulk + shear));
        Ok(J2Plasticity {
            lin_elasticity: LinElasticity::new(young, poisson, false, false),
            bulk,
            shear,
            eta,
            hardening,
            tolerance: settings.tol_yield * q0,
            n_max_it: settings.n_max_it_yield,
            dt: settings.dt,
        })
    }

    /// Returns the bulk and shear moduli
    pub fn get_bulk_shear(&self) -> (f64, f64) {
        (self.bulk, self.shear)
    }

    /// Returns an access to the hardening law
    pub fn hardening(&self) -> &H {
        &self.hardening
    }

    /// Returns the elastic (initial) tangent modulus
    pub fn initial_tangent(&self) -> &Tensor4 {
        self.lin_elasticity.get_modulus()
    }

    /// Sets the time increment Δt used by the viscous term
    pub fn set_dt(&mut self, dt: f64) -> Result<(), StrError> {
        if !(dt > 0.0) {
            return Err("dt must be > 0.0");
        }
        self.dt = dt;
        Ok(())
    }

    /// Calculates the yield function φ(σ, ξ) = √(2/3) (σd - q(ξ))
    pub fn yield_function(&self, stress: &Tensor2, xi: f64) -> f64 {
        SQRT_2_BY_3 * (stress.invariant_sigma_d() - self.hardening.q(xi))
    }

    /// Integrates the plasticity equations for the given total strain
    ///
    /// # Input
    ///
    /// * `strain` -- total strain tensor ε
    /// * `committed` -- hardening state at the last converged step
    ///
    /// # Output
    ///
    /// * `stress` -- updated stress σ
    /// * `tangent` -- consistent (algorithmic) tangent modulus
    /// * `trial` -- updated hardening state
    ///
    /// If the γ iterations do not converge, the outputs hold the last iterate
    /// and [StressUpdateError::Convergence] is returned.
    pub fn integrate(
        &self,
        stress: &mut Tensor2,
        tangent: &mut Tensor4,
        trial: &mut HardeningState,
        strain: &Tensor2,
        committed: &HardeningState,
    ) -> Result<ReturnMapping, StressUpdateError> {
        let (kk, gg) = (self.bulk, self.shear);
        let eta_dt = self.eta / self.dt;
        trial.clone_from(committed);

        // trial stress: σ = Dₑ : (ε - εp_n)
        let dde = self.lin_elasticity.get_modulus();
        let mut elastic_strain = new_sym_tensor();
        t2_add(&mut elastic_strain, 1.0, strain, -1.0, &committed.epsilon_p);
        t4_ddot_t2_update(stress, 1.0, dde, &elastic_strain, 0.0);

        // trial deviatoric stress τ = dev(σ) and flow direction
        let mut dev_stress = new_sym_tensor();
        stress.deviator(&mut dev_stress);
        let norm_tau = dev_stress.norm();
        let mut normal = new_sym_tensor();
        let inv_norm_tau = if norm_tau > self.tolerance {
            normal.set_tensor(1.0 / norm_tau, &dev_stress);
            1.0 / norm_tau
        } else {
            0.0
        };

        // trial yield function
        let phi_trial = norm_tau - SQRT_2_BY_3 * self.hardening.q(committed.xi);

        // elastic update
        if phi_trial <= 0.0 {
            tangent.set_tensor(1.0, dde);
            return Ok(ReturnMapping {
                loading: false,
                gamma: 0.0,
                phi_trial,
                iterations: 0,
            });
        }

        // return mapping
        let mut gamma = 0.0;
        let mut iterations = 0;
        let mut converged = false;
        let mut resid = phi_trial;
        for _ in 0..self.n_max_it {
            let xi = committed.xi + SQRT_2_BY_3 * gamma;
            resid = norm_tau - 2.0 * gg * gamma - SQRT_2_BY_3 * self.hardening.q(xi) - eta_dt * gamma;
            if f64::abs(resid) <= self.tolerance {
                converged = true;
                break;
            }
            let tang = -2.0 * gg - TWO_BY_3 * self.hardening.dq_dxi(xi) - eta_dt;
            if tang >= 0.0 {
                return Err(StressUpdateError::DegenerateState(
                    "derivative of the consistency residual is non-negative",
                ));
            }
            gamma -= resid / tang;
            iterations += 1;
        }
        log::trace!("γ = {:e} after {} iterations", gamma, iterations);

        // update internal variables
        t2_add(&mut trial.epsilon_p, 1.0, &committed.epsilon_p, gamma, &normal); // εp = εp_n + γ n
        trial.xi = committed.xi + SQRT_2_BY_3 * gamma;

        // access Mandel representation
        let nd = stress.dim();
        let n = normal.vector();

        // σ = σ_trial - 2G γ n
        let sig = stress.vector_mut();
        for i in 0..nd {
            sig[i] -= 2.0 * gg * gamma * n[i];
        }

        // consistent tangent modulus
        let theta = 2.0 * gg + TWO_BY_3 * self.hardening.dq_dxi(trial.xi) + eta_dt;
        if theta <= 0.0 {
            return Err(StressUpdateError::DegenerateState("plastic modulus θ is non-positive"));
        }
        let c1 = -4.0 * gg * gg;
        let c2 = c1 / theta;
        let c3 = c1 * gamma * inv_norm_tau;
        let mat = tangent.matrix_mut();
        for i in 0..nd {
            for j in 0..nd {
                mat.set(i, j, kk * I[i] * I[j] + (2.0 * gg + c3) * PSD[i][j] + (c2 - c3) * n[i] * n[j]);
            }
        }

        if !converged {
            log::warn!(
                "plastic multiplier did not converge after {} iterations (residual = {:e})",
                self.n_max_it,
                resid
            );
            return Err(StressUpdateError::Convergence {
                stage: NewtonLoop::PlasticMultiplier,
                iterations: self.n_max_it,
                residual: resid,
            });
        }
        Ok(ReturnMapping {
            loading: true,
            gamma,
            phi_trial,
            iterations,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
