//! Implements the base structures: parameters, settings, and constants

mod constants;
mod parameters;
mod sample_params;
mod settings;
pub use crate::base::constants::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
pub use crate::base::settings::*;
