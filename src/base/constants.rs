/// Defines the default tolerance for the plastic multiplier residual (scaled by σ0)
pub const DEFAULT_TOL_YIELD: f64 = 1e-8;

/// Defines the default maximum number of iterations to compute the plastic multiplier
pub const DEFAULT_N_MAX_IT_YIELD: usize = 25;

/// Defines the default tolerance for the out-of-plane stress |σzz|
pub const DEFAULT_TOL_PLANE_STRESS: f64 = 1e-8;

/// Defines the default maximum number of iterations to enforce plane-stress
pub const DEFAULT_N_MAX_IT_PLANE_STRESS: usize = 25;

/// Defines the default maximum number of step cutbacks when following strain paths
pub const DEFAULT_N_MAX_CUTBACKS: usize = 8;

/// Holds the 2/3 coefficient
pub const TWO_BY_3: f64 = 2.0 / 3.0;
