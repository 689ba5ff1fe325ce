mod material;

use nalgebra::Vector3;

pub use material::*;

/// Offset applied along the surface normal to new ray origins, keeping
/// scattered rays from re-hitting the surface they left.
pub const EPSILON: f64 = 1e-4;

pub type Color = Vector3<f64>;
