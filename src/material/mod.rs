//! Implements material models

mod hardening;
mod index_map;
mod j2_plasticity;
mod material_point;
mod material_points;
mod plate_fiber;
mod state_store;
mod strain_path;
mod stress_update_error;
mod tensors;
mod three_dimensional;
pub use crate::material::hardening::*;
pub use crate::material::index_map::*;
pub use crate::material::j2_plasticity::*;
pub use crate::material::material_point::*;
pub use crate::material::material_points::*;
pub use crate::material::plate_fiber::*;
pub use crate::material::state_store::*;
pub use crate::material::strain_path::*;
pub use crate::material::stress_update_error::*;
pub use crate::material::tensors::*;
pub use crate::material::three_dimensional::*;
